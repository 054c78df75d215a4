use crate::cursors::TextCursor;
use crate::many::repeat_into;
use crate::parser::{ParseResult, Parser};
use std::borrow::Cow;

/// Parser combinator that matches one or more occurrences of the given parser
///
/// Fails with the inner parser's diagnostic when the first application fails.
#[derive(Clone)]
pub struct Many1<P> {
    parser: P,
}

impl<P> Many1<P> {
    pub fn new(parser: P) -> Self {
        Many1 { parser }
    }
}

impl<'code, P> Parser<'code> for Many1<P>
where
    P: Parser<'code>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, cursor: TextCursor<'code>) -> ParseResult<'code, Self::Output> {
        let (first, cursor) = self.parser.parse(cursor)?;
        let mut results = vec![first];
        let cursor = repeat_into(&self.parser, cursor, &mut results);
        Ok((results, cursor))
    }

    fn label(&self) -> Cow<'_, str> {
        Cow::Owned(format!("many1 of {}", self.parser.label()))
    }
}

/// Convenience function to create a Many1 parser
pub fn many1<'code, P>(parser: P) -> Many1<P>
where
    P: Parser<'code>,
{
    Many1::new(parser)
}

/// Extension trait to add .many1() method support for parsers
pub trait Many1Ext<'code>: Parser<'code> + Sized {
    fn many1(self) -> Many1<Self> {
        Many1::new(self)
    }
}

/// Implement Many1Ext for all parsers
impl<'code, P> Many1Ext<'code> for P where P: Parser<'code> {}
