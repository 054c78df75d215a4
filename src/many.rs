use crate::cursor::Cursor;
use crate::cursors::TextCursor;
use crate::parser::{ParseResult, Parser};
use std::borrow::Cow;
use tracing::trace;

/// Parser combinator that matches zero or more occurrences of the given parser
///
/// Never fails. Stops at the first failure of the inner parser, or as soon as
/// it succeeds without consuming anything; that zero-width value is dropped.
#[derive(Clone)]
pub struct Many<P> {
    parser: P,
}

impl<P> Many<P> {
    pub fn new(parser: P) -> Self {
        Many { parser }
    }
}

impl<'code, P> Parser<'code> for Many<P>
where
    P: Parser<'code>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, cursor: TextCursor<'code>) -> ParseResult<'code, Self::Output> {
        let mut results = Vec::new();
        let cursor = repeat_into(&self.parser, cursor, &mut results);
        Ok((results, cursor))
    }

    fn label(&self) -> Cow<'_, str> {
        Cow::Owned(format!("many of {}", self.parser.label()))
    }
}

/// Apply `parser` until it fails or stops advancing, pushing every value
///
/// Returns the cursor after the last value that made progress.
pub(crate) fn repeat_into<'code, P>(
    parser: &P,
    mut cursor: TextCursor<'code>,
    results: &mut Vec<P::Output>,
) -> TextCursor<'code>
where
    P: Parser<'code>,
{
    // Many matches zero or more, so the error is never propagated
    while let Ok((value, next_cursor)) = parser.parse(cursor) {
        if next_cursor.position() == cursor.position() {
            trace!(
                parser = %parser.label(),
                position = cursor.position(),
                "repetition stopped on zero-width match"
            );
            break;
        }
        results.push(value);
        cursor = next_cursor;
    }
    cursor
}

/// Convenience function to create a Many parser
pub fn many<'code, P>(parser: P) -> Many<P>
where
    P: Parser<'code>,
{
    Many::new(parser)
}

/// Extension trait to add .many() method support for parsers
pub trait ManyExt<'code>: Parser<'code> + Sized {
    fn many(self) -> Many<Self> {
        Many::new(self)
    }
}

/// Implement ManyExt for all parsers
impl<'code, P> ManyExt<'code> for P where P: Parser<'code> {}
