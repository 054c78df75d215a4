use crate::cursors::TextCursor;
use crate::parser::{ParseResult, Parser};
use std::borrow::Cow;

/// Parser combinator that tries the first parser, and if it fails, tries the second parser
///
/// The second parser starts from the same cursor the first one was given.
/// Its result is returned as is, so a failure of both reports the second
/// parser's diagnostic.
#[derive(Clone)]
pub struct Or<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> Or<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        Or { parser1, parser2 }
    }
}

impl<'code, P1, P2, O> Parser<'code> for Or<P1, P2>
where
    P1: Parser<'code, Output = O>,
    P2: Parser<'code, Output = O>,
{
    type Output = O;

    fn parse(&self, cursor: TextCursor<'code>) -> ParseResult<'code, Self::Output> {
        match self.parser1.parse(cursor) {
            Ok(result) => Ok(result),
            Err(_) => self.parser2.parse(cursor),
        }
    }

    fn label(&self) -> Cow<'_, str> {
        Cow::Owned(format!(
            "{} or {}",
            self.parser1.label(),
            self.parser2.label()
        ))
    }
}

/// Extension trait to add .or() method support for parsers
pub trait OrExt<'code>: Parser<'code> + Sized {
    fn or<P>(self, other: P) -> Or<Self, P>
    where
        P: Parser<'code, Output = Self::Output>,
    {
        Or::new(self, other)
    }
}

/// Implement OrExt for all parsers
impl<'code, P> OrExt<'code> for P where P: Parser<'code> {}

/// Convenience function to create an Or parser
pub fn or<'code, P1, P2, O>(parser1: P1, parser2: P2) -> Or<P1, P2>
where
    P1: Parser<'code, Output = O>,
    P2: Parser<'code, Output = O>,
{
    Or::new(parser1, parser2)
}

/// Try each parser in turn and keep the first success
///
/// Expands to right-nested [`or`](crate::or::or) calls. When every
/// alternative fails the diagnostic of the last one is returned.
///
/// ```
/// use textcomb::choice;
/// use textcomb::parser::Parser;
/// use textcomb::text::is_char;
///
/// let vowel = choice![is_char('a'), is_char('e'), is_char('o')];
/// assert_eq!(vowel.run_optional("echo"), Some('e'));
/// assert_eq!(vowel.run_optional("xyz"), None);
/// ```
#[macro_export]
macro_rules! choice {
    ($single:expr $(,)?) => {
        $single
    };
    ($first:expr, $($rest:expr),+ $(,)?) => {
        $crate::or::or($first, $crate::choice!($($rest),+))
    };
}
