use crate::cursors::TextCursor;
use crate::parser::{ParseResult, Parser};
use crate::satisfy::{match_char, satisfy};
use std::borrow::Cow;

/// Parser that consumes and returns any single character
pub fn any_char() -> impl for<'code> Parser<'code, Output = char> + Clone {
    satisfy(|_| true, "any character")
}

/// Parser that matches a specific character
#[derive(Debug, Clone)]
pub struct IsChar {
    expected: char,
    label: String,
}

impl<'code> Parser<'code> for IsChar {
    type Output = char;

    fn parse(&self, cursor: TextCursor<'code>) -> ParseResult<'code, Self::Output> {
        match_char(cursor, &self.label, |ch| ch == self.expected)
    }

    fn label(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.label)
    }
}

/// Convenience function to create a parser that matches a specific character
pub fn is_char(expected: char) -> IsChar {
    IsChar {
        expected,
        label: format!("character '{expected}'"),
    }
}
