use crate::cursors::TextCursor;
use crate::parser::{ParseResult, Parser};
use std::borrow::Cow;

/// Parser combinator that falls back to a default value
///
/// Never fails: when the inner parser fails the default is returned and the
/// cursor is left where it was.
#[derive(Clone)]
pub struct WithDefault<P, T> {
    parser: P,
    default: T,
}

impl<'code, P, T> Parser<'code> for WithDefault<P, T>
where
    P: Parser<'code, Output = T>,
    T: Clone,
{
    type Output = T;

    fn parse(&self, cursor: TextCursor<'code>) -> ParseResult<'code, Self::Output> {
        match self.parser.parse(cursor) {
            Ok(result) => Ok(result),
            Err(_) => Ok((self.default.clone(), cursor)),
        }
    }

    fn label(&self) -> Cow<'_, str> {
        Cow::Owned(format!("optional {}", self.parser.label()))
    }
}

/// Run `parser`, or yield `default` without consuming anything
pub fn option<'code, P>(default: P::Output, parser: P) -> WithDefault<P, P::Output>
where
    P: Parser<'code>,
    P::Output: Clone,
{
    WithDefault { parser, default }
}

/// Parser combinator that makes a parser optional
#[derive(Clone)]
pub struct Optional<P> {
    parser: P,
}

impl<'code, P> Parser<'code> for Optional<P>
where
    P: Parser<'code>,
{
    type Output = Option<P::Output>;

    fn parse(&self, cursor: TextCursor<'code>) -> ParseResult<'code, Self::Output> {
        match self.parser.parse(cursor) {
            Ok((value, cursor)) => Ok((Some(value), cursor)),
            Err(_) => Ok((None, cursor)),
        }
    }

    fn label(&self) -> Cow<'_, str> {
        Cow::Owned(format!("optional {}", self.parser.label()))
    }
}

/// Run `parser`, yielding `None` without consuming anything when it fails
pub fn optional<'code, P>(parser: P) -> Optional<P>
where
    P: Parser<'code>,
{
    Optional { parser }
}

/// Extension trait to add .or_default_to() and .optional() to parsers
pub trait OptionExt<'code>: Parser<'code> + Sized {
    fn or_default_to(self, default: Self::Output) -> WithDefault<Self, Self::Output>
    where
        Self::Output: Clone,
    {
        option(default, self)
    }

    fn optional(self) -> Optional<Self> {
        optional(self)
    }
}

/// Implement OptionExt for all parsers
impl<'code, P> OptionExt<'code> for P where P: Parser<'code> {}
