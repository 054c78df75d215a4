use crate::parser::Parser;
use crate::satisfy::satisfy;
use std::borrow::Cow;

/// Parser that matches one character from `chars`
pub fn any_of(
    chars: impl Into<Cow<'static, str>>,
) -> impl for<'code> Parser<'code, Output = char> + Clone {
    let chars = chars.into();
    let label = format!("any of: {chars}");
    satisfy(move |c| chars.contains(c), label)
}

/// Parser that matches one character not in `chars`
///
/// Still fails at end of input.
pub fn none_of(
    chars: impl Into<Cow<'static, str>>,
) -> impl for<'code> Parser<'code, Output = char> + Clone {
    let chars = chars.into();
    let label = format!("none of: {chars}");
    satisfy(move |c| !chars.contains(c), label)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursors::TextCursor;
    use crate::many::many;

    #[test]
    fn test_any_of() {
        let parser = any_of("+-*/");

        assert_eq!(parser.run_optional("*2"), Some('*'));
        let error = parser.parse(TextCursor::new("2")).unwrap_err();
        assert_eq!(error.to_string(), "any of: +-*/: Unexpected '2'");
    }

    #[test]
    fn test_none_of() {
        let parser = many(none_of("\"\\"));

        let (text, cursor) = parser.parse(TextCursor::new("abc\"def")).unwrap();
        assert_eq!(text.into_iter().collect::<String>(), "abc");
        assert_eq!(cursor.rest(), "\"def");
    }

    #[test]
    fn test_none_of_empty_input() {
        let error = none_of("x").parse(TextCursor::new("")).unwrap_err();
        assert_eq!(error.to_string(), "none of: x: Empty input");
    }

    #[test]
    fn test_any_of_unicode() {
        assert_eq!(any_of(String::from("äöü")).run_optional("ö"), Some('ö'));
    }
}
