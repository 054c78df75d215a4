use crate::cursor::Cursor;
use crate::cursors::TextCursor;
use crate::error::Diagnostic;
use crate::parser::{ParseResult, Parser};
use std::borrow::Cow;

/// Parser that matches an exact string at the current position
///
/// Only a true prefix of the remaining input matches; the same text appearing
/// later in the input is never found.
#[derive(Debug, Clone)]
pub struct IsStringParser {
    expected: Cow<'static, str>,
    label: String,
}

impl IsStringParser {
    pub fn new(expected: impl Into<Cow<'static, str>>) -> Self {
        let expected = expected.into();
        let label = format!("string \"{expected}\"");
        Self { expected, label }
    }

    fn error(&self, cursor: TextCursor<'_>, message: impl Into<String>) -> Diagnostic {
        Diagnostic::new(self.label.as_str(), message, cursor.position())
    }
}

impl<'code> Parser<'code> for IsStringParser {
    type Output = Cow<'static, str>;

    fn parse(&self, cursor: TextCursor<'code>) -> ParseResult<'code, Self::Output> {
        if cursor.rest().starts_with(self.expected.as_ref()) {
            // Clone is cheap here - just copies the reference for &'static str
            return Ok((self.expected.clone(), cursor.advance(self.expected.len())));
        }

        if cursor.eos() {
            return Err(self.error(cursor, "Empty input"));
        }

        let mut current = cursor;
        for expected_char in self.expected.chars() {
            match current.value() {
                Some(found) if found == expected_char => current = current.next(),
                Some(found) => return Err(self.error(current, format!("Unexpected '{found}'"))),
                None => break,
            }
        }

        Err(self.error(current, "Unexpected end of input"))
    }

    fn label(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.label)
    }
}

/// Convenience function to create an IsStringParser
pub fn is_string(expected: impl Into<Cow<'static, str>>) -> IsStringParser {
    IsStringParser::new(expected)
}
