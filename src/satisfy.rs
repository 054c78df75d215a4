use crate::cursor::Cursor;
use crate::cursors::TextCursor;
use crate::error::Diagnostic;
use crate::parser::{ParseResult, Parser};
use std::borrow::Cow;

/// Parser that consumes one character if it satisfies a predicate
#[derive(Clone)]
pub struct Satisfy<F> {
    predicate: F,
    label: Cow<'static, str>,
}

impl<F> Satisfy<F> {
    pub fn new(predicate: F, label: Cow<'static, str>) -> Self {
        Satisfy { predicate, label }
    }
}

impl<'code, F> Parser<'code> for Satisfy<F>
where
    F: Fn(char) -> bool,
{
    type Output = char;

    fn parse(&self, cursor: TextCursor<'code>) -> ParseResult<'code, Self::Output> {
        match_char(cursor, &self.label, &self.predicate)
    }

    fn label(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.label)
    }
}

/// Consume the head character if `predicate` accepts it, failing with `label`
pub(crate) fn match_char<'code>(
    cursor: TextCursor<'code>,
    label: &str,
    predicate: impl Fn(char) -> bool,
) -> ParseResult<'code, char> {
    match cursor.value() {
        Some(ch) if predicate(ch) => Ok((ch, cursor.next())),
        _ => Err(unexpected(cursor, label)),
    }
}

/// Diagnostic for rejecting whatever sits under `cursor`
pub(crate) fn unexpected(cursor: TextCursor<'_>, label: &str) -> Diagnostic {
    let message = match cursor.value() {
        Some(ch) => format!("Unexpected '{ch}'"),
        None => "Empty input".to_string(),
    };
    Diagnostic::new(label, message, cursor.position())
}

/// Convenience function to create a Satisfy parser
pub fn satisfy<F>(predicate: F, label: impl Into<Cow<'static, str>>) -> Satisfy<F>
where
    F: Fn(char) -> bool,
{
    Satisfy::new(predicate, label.into())
}
