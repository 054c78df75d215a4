use crate::cursor::Cursor;

/// Cursor over UTF-8 text, one `char` per element
///
/// Holds the complete input plus a byte offset that always sits on a `char`
/// boundary. Copying a cursor never copies the text.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct TextCursor<'code> {
    source: &'code str,
    /// Byte position in the source (0-based)
    position: usize,
}

impl<'code> TextCursor<'code> {
    pub fn new(source: &'code str) -> Self {
        TextCursor {
            source,
            position: 0,
        }
    }

    /// The unconsumed suffix of the input
    pub fn rest(&self) -> &'code str {
        &self.source[self.position..]
    }

    /// Skip `len` bytes of input
    ///
    /// Saturates at the end of the input. A length that ends inside a
    /// multi-byte `char` is rounded up to the end of that `char`.
    pub fn advance(self, len: usize) -> Self {
        let mut position = (self.position + len).min(self.source.len());
        while !self.source.is_char_boundary(position) {
            position += 1;
        }
        TextCursor {
            source: self.source,
            position,
        }
    }
}

impl<'code> Cursor<'code> for TextCursor<'code> {
    type Element = char;
    type Source = str;

    fn value(&self) -> Option<Self::Element> {
        self.rest().chars().next()
    }

    fn next(self) -> Self {
        match self.value() {
            Some(ch) => self.advance(ch.len_utf8()),
            None => self,
        }
    }

    fn position(&self) -> usize {
        self.position
    }

    fn source(&self) -> &'code Self::Source {
        self.source
    }

    fn inner(self) -> (&'code Self::Source, usize) {
        (self.source, self.position)
    }
}
