use crate::cursors::TextCursor;
use crate::parser::{ParseResult, Parser};
use std::borrow::Cow;

/// Byte length of the longest prefix of `text` whose characters all match
fn span_while(text: &str, predicate: impl Fn(char) -> bool) -> usize {
    text.char_indices()
        .find(|&(_, c)| !predicate(c))
        .map_or(text.len(), |(index, _)| index)
}

/// Parser that collects characters while a predicate holds
///
/// Never fails; matching nothing yields an empty string.
#[derive(Clone)]
pub struct TakeWhile<F> {
    predicate: F,
}

impl<'code, F> Parser<'code> for TakeWhile<F>
where
    F: Fn(char) -> bool,
{
    type Output = String;

    fn parse(&self, cursor: TextCursor<'code>) -> ParseResult<'code, Self::Output> {
        let rest = cursor.rest();
        let len = span_while(rest, &self.predicate);
        Ok((rest[..len].to_string(), cursor.advance(len)))
    }

    fn label(&self) -> Cow<'_, str> {
        Cow::Borrowed("take while")
    }
}

/// Parser that skips characters while a predicate holds
#[derive(Clone)]
pub struct SkipWhile<F> {
    predicate: F,
}

impl<'code, F> Parser<'code> for SkipWhile<F>
where
    F: Fn(char) -> bool,
{
    type Output = ();

    fn parse(&self, cursor: TextCursor<'code>) -> ParseResult<'code, Self::Output> {
        let len = span_while(cursor.rest(), &self.predicate);
        Ok(((), cursor.advance(len)))
    }

    fn label(&self) -> Cow<'_, str> {
        Cow::Borrowed("skip while")
    }
}

/// Convenience function to create a TakeWhile parser
pub fn take_while<F>(predicate: F) -> TakeWhile<F>
where
    F: Fn(char) -> bool,
{
    TakeWhile { predicate }
}

/// Convenience function to create a SkipWhile parser
pub fn skip_while<F>(predicate: F) -> SkipWhile<F>
where
    F: Fn(char) -> bool,
{
    SkipWhile { predicate }
}
