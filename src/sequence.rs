use crate::cursors::TextCursor;
use crate::parser::{ParseResult, Parser};
use std::borrow::Cow;

/// Parser combinator that runs a list of parsers one after another
///
/// Collects every value in order and fails at the first parser that fails.
#[derive(Clone)]
pub struct Sequence<P> {
    parsers: Vec<P>,
}

impl<P> Sequence<P> {
    pub fn new(parsers: Vec<P>) -> Self {
        Sequence { parsers }
    }
}

impl<'code, P> Parser<'code> for Sequence<P>
where
    P: Parser<'code>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, mut cursor: TextCursor<'code>) -> ParseResult<'code, Self::Output> {
        let mut results = Vec::with_capacity(self.parsers.len());
        for parser in &self.parsers {
            let (value, next_cursor) = parser.parse(cursor)?;
            results.push(value);
            cursor = next_cursor;
        }
        Ok((results, cursor))
    }

    fn label(&self) -> Cow<'_, str> {
        Cow::Borrowed("sequence")
    }
}

/// Convenience function to create a Sequence parser
pub fn sequence<'code, P>(parsers: Vec<P>) -> Sequence<P>
where
    P: Parser<'code>,
{
    Sequence::new(parsers)
}
