use crate::discard::discard_right;
use crate::parser::Parser;
use crate::satisfy::satisfy;
use crate::text::take_while::{SkipWhile, skip_while};

/// Parser that matches a single Unicode whitespace character
pub fn space() -> impl for<'code> Parser<'code, Output = char> + Clone {
    satisfy(char::is_whitespace, "space")
}

/// Parser that skips zero or more Unicode whitespace characters
///
/// Never fails.
pub fn spaces() -> SkipWhile<fn(char) -> bool> {
    skip_while(char::is_whitespace as fn(char) -> bool)
}

/// Run `parser` and skip any whitespace after it
///
/// Building tokens this way keeps whitespace handling in one place: every
/// token eats its own trailing spaces.
pub fn lexeme<'code, P>(parser: P) -> impl Parser<'code, Output = P::Output> + Clone
where
    P: Parser<'code> + Clone,
{
    discard_right(parser, spaces())
}
