use crate::cursors::TextCursor;
use crate::parser::{ParseResult, Parser};
use std::borrow::Cow;

/// Runs two parsers in order and keeps the second value
#[derive(Clone)]
pub struct DiscardLeft<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<'code, P1, P2> Parser<'code> for DiscardLeft<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
{
    type Output = P2::Output;

    fn parse(&self, cursor: TextCursor<'code>) -> ParseResult<'code, Self::Output> {
        let (_, cursor) = self.parser1.parse(cursor)?;
        self.parser2.parse(cursor)
    }

    fn label(&self) -> Cow<'_, str> {
        Cow::Owned(format!(
            "{} and then {}",
            self.parser1.label(),
            self.parser2.label()
        ))
    }
}

/// Runs two parsers in order and keeps the first value
///
/// The second parser still has to succeed.
#[derive(Clone)]
pub struct DiscardRight<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<'code, P1, P2> Parser<'code> for DiscardRight<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
{
    type Output = P1::Output;

    fn parse(&self, cursor: TextCursor<'code>) -> ParseResult<'code, Self::Output> {
        let (value, cursor) = self.parser1.parse(cursor)?;
        let (_, cursor) = self.parser2.parse(cursor)?;
        Ok((value, cursor))
    }

    fn label(&self) -> Cow<'_, str> {
        Cow::Owned(format!(
            "{} and then {}",
            self.parser1.label(),
            self.parser2.label()
        ))
    }
}

/// Run `parser1` then `parser2`, keeping only the value of `parser2`
pub fn discard_left<'code, P1, P2>(parser1: P1, parser2: P2) -> DiscardLeft<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
{
    DiscardLeft { parser1, parser2 }
}

/// Run `parser1` then `parser2`, keeping only the value of `parser1`
pub fn discard_right<'code, P1, P2>(parser1: P1, parser2: P2) -> DiscardRight<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
{
    DiscardRight { parser1, parser2 }
}

/// Extension trait to add .ignore_then() and .then_ignore() to parsers
pub trait DiscardExt<'code>: Parser<'code> + Sized {
    /// Keep the value of `next`, dropping this parser's value
    fn ignore_then<P>(self, next: P) -> DiscardLeft<Self, P>
    where
        P: Parser<'code>,
    {
        discard_left(self, next)
    }

    /// Keep this parser's value, dropping the value of `next`
    fn then_ignore<P>(self, next: P) -> DiscardRight<Self, P>
    where
        P: Parser<'code>,
    {
        discard_right(self, next)
    }
}

/// Implement DiscardExt for all parsers
impl<'code, P> DiscardExt<'code> for P where P: Parser<'code> {}
