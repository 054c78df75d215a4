/// Generic cursor trait for parser combinators
///
/// A cursor represents a position in an input sequence that can be advanced
/// and queried. Cursors are values: advancing returns a new cursor and leaves
/// the old one untouched, so a saved copy is all a combinator needs to
/// backtrack.
pub trait Cursor<'code>: Copy + Clone + Sized {
    /// The type of elements this cursor iterates over
    type Element;

    /// The type of the complete input the cursor points into
    type Source: ?Sized;

    /// Get the element at the current cursor position
    ///
    /// Returns `None` if the cursor is positioned at the end of the input
    fn value(&self) -> Option<Self::Element>;

    /// Advance the cursor past the current element
    ///
    /// If already at the end, returns a cursor still positioned at the end
    fn next(self) -> Self;

    /// Get the current position in the input
    ///
    /// For end-of-input cursors this is the length of the input
    fn position(&self) -> usize;

    /// Check if the cursor is at the end of the input
    fn eos(&self) -> bool {
        self.value().is_none()
    }

    /// Get the complete input without consuming the cursor
    fn source(&self) -> &'code Self::Source;

    /// Consume the cursor and return the complete input and the current position
    fn inner(self) -> (&'code Self::Source, usize);
}
