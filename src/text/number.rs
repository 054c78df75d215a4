use crate::cursor::Cursor;
use crate::cursors::TextCursor;
use crate::error::Diagnostic;
use crate::parser::{ParseResult, Parser};
use crate::satisfy::unexpected;
use std::borrow::Cow;

/// Byte length of the run of ASCII digits at the start of `text`
fn digit_run(text: &str) -> usize {
    text.bytes().take_while(u8::is_ascii_digit).count()
}

/// Parser that matches one or more ASCII digits and returns them as a u64
pub fn decimal() -> impl for<'code> Parser<'code, Output = u64> + Clone {
    DecimalParser
}

#[derive(Debug, Clone, Copy)]
struct DecimalParser;

impl<'code> Parser<'code> for DecimalParser {
    type Output = u64;

    fn parse(&self, cursor: TextCursor<'code>) -> ParseResult<'code, Self::Output> {
        let len = digit_run(cursor.rest());
        if len == 0 {
            return Err(unexpected(cursor, "number"));
        }

        let text = &cursor.rest()[..len];
        let value = text.parse::<u64>().map_err(|_| {
            Diagnostic::new(
                "number",
                format!("number too large: {text}"),
                cursor.position(),
            )
        })?;
        Ok((value, cursor.advance(len)))
    }

    fn label(&self) -> Cow<'_, str> {
        Cow::Borrowed("number")
    }
}

/// Parser that matches an optionally negative integer and returns it as an i64
pub fn integer() -> impl for<'code> Parser<'code, Output = i64> + Clone {
    IntegerParser
}

#[derive(Debug, Clone, Copy)]
struct IntegerParser;

impl<'code> Parser<'code> for IntegerParser {
    type Output = i64;

    fn parse(&self, cursor: TextCursor<'code>) -> ParseResult<'code, Self::Output> {
        let rest = cursor.rest();
        let sign = usize::from(rest.starts_with('-'));

        let len = digit_run(&rest[sign..]);
        if len == 0 {
            return Err(unexpected(cursor.advance(sign), "integer"));
        }

        // Parsing with the sign lets i64::MIN through
        let text = &rest[..sign + len];
        let value = text.parse::<i64>().map_err(|_| {
            Diagnostic::new(
                "integer",
                format!("number too large: {text}"),
                cursor.position(),
            )
        })?;
        Ok((value, cursor.advance(sign + len)))
    }

    fn label(&self) -> Cow<'_, str> {
        Cow::Borrowed("integer")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decimal_single_digit() {
        let (value, cursor) = decimal().parse(TextCursor::new("5abc")).unwrap();
        assert_eq!(value, 5);
        assert_eq!(cursor.value(), Some('a'));
    }

    #[test]
    fn test_decimal_multiple_digits() {
        let (value, cursor) = decimal().parse(TextCursor::new("123abc")).unwrap();
        assert_eq!(value, 123);
        assert_eq!(cursor.rest(), "abc");
    }

    #[test]
    fn test_decimal_leading_zeros() {
        assert_eq!(decimal().run_optional("007"), Some(7));
    }

    #[test]
    fn test_decimal_max() {
        assert_eq!(decimal().run_optional("18446744073709551615"), Some(u64::MAX));
    }

    #[test]
    fn test_decimal_overflow() {
        let error = decimal()
            .parse(TextCursor::new("18446744073709551616"))
            .unwrap_err();
        assert_eq!(error.label(), "number");
        assert_eq!(error.message(), "number too large: 18446744073709551616");
        assert_eq!(error.position(), 0);
    }

    #[test]
    fn test_decimal_no_digits() {
        let error = decimal().parse(TextCursor::new("abc")).unwrap_err();
        assert_eq!(error.to_string(), "number: Unexpected 'a'");

        let error = decimal().parse(TextCursor::new("")).unwrap_err();
        assert_eq!(error.message(), "Empty input");
    }

    #[test]
    fn test_decimal_rejects_sign() {
        assert!(decimal().run("-1").is_failure());
    }

    #[test]
    fn test_integer_positive() {
        let (value, cursor) = integer().parse(TextCursor::new("42 ")).unwrap();
        assert_eq!(value, 42);
        assert_eq!(cursor.rest(), " ");
    }

    #[test]
    fn test_integer_negative() {
        let (value, cursor) = integer().parse(TextCursor::new("-42xyz")).unwrap();
        assert_eq!(value, -42);
        assert_eq!(cursor.value(), Some('x'));
    }

    #[test]
    fn test_integer_bounds() {
        assert_eq!(integer().run_optional("9223372036854775807"), Some(i64::MAX));
        assert_eq!(integer().run_optional("-9223372036854775808"), Some(i64::MIN));
    }

    #[test]
    fn test_integer_out_of_range() {
        let error = integer()
            .parse(TextCursor::new("9223372036854775808"))
            .unwrap_err();
        assert_eq!(error.message(), "number too large: 9223372036854775808");

        let error = integer()
            .parse(TextCursor::new("-9223372036854775809"))
            .unwrap_err();
        assert_eq!(error.message(), "number too large: -9223372036854775809");
    }

    #[test]
    fn test_integer_lone_minus() {
        let error = integer().parse(TextCursor::new("-x")).unwrap_err();
        assert_eq!(error.label(), "integer");
        assert_eq!(error.message(), "Unexpected 'x'");
        assert_eq!(error.position(), 1);
    }

    #[test]
    fn test_integer_plus_not_accepted() {
        assert!(integer().run("+5").is_failure());
    }
}
