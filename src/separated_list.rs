use crate::cursor::Cursor;
use crate::cursors::TextCursor;
use crate::parser::{ParseResult, Parser};
use std::borrow::Cow;
use tracing::trace;

/// Parser combinator that matches a list of items separated by a parser
///
/// This combinator parses at least one item, followed by zero or more
/// occurrences of (separator + item). It returns a vector of all items.
///
/// # Examples
/// - `"a,b,c"` with separator `,` → `vec!['a', 'b', 'c']`
/// - `"1;2;3"` with separator `;` → `vec![1, 2, 3]`
///
/// # Note
/// - Requires at least one element
/// - A separator that is not followed by an element is left unconsumed
/// - Does not handle whitespace automatically
#[derive(Clone)]
pub struct SepBy1<P, PS> {
    parser: P,
    separator: PS,
}

impl<P, PS> SepBy1<P, PS> {
    pub fn new(parser: P, separator: PS) -> Self {
        SepBy1 { parser, separator }
    }
}

impl<'code, P, PS> Parser<'code> for SepBy1<P, PS>
where
    P: Parser<'code>,
    PS: Parser<'code>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, cursor: TextCursor<'code>) -> ParseResult<'code, Self::Output> {
        // Parse the first element (required)
        let (first_value, mut cursor) = self.parser.parse(cursor)?;
        let mut results = vec![first_value];

        // Separator and element either both match or neither is consumed
        loop {
            let Ok((_, after_separator)) = self.separator.parse(cursor) else {
                break;
            };
            let Ok((value, next_cursor)) = self.parser.parse(after_separator) else {
                break;
            };
            if next_cursor.position() == cursor.position() {
                trace!(
                    parser = %self.label(),
                    position = cursor.position(),
                    "repetition stopped on zero-width match"
                );
                break;
            }
            results.push(value);
            cursor = next_cursor;
        }

        Ok((results, cursor))
    }

    fn label(&self) -> Cow<'_, str> {
        Cow::Owned(format!(
            "{} separated by {}",
            self.parser.label(),
            self.separator.label()
        ))
    }
}

/// Parser combinator that matches zero or more items separated by a parser
#[derive(Clone)]
pub struct SepBy<P, PS> {
    inner: SepBy1<P, PS>,
}

impl<'code, P, PS> Parser<'code> for SepBy<P, PS>
where
    P: Parser<'code>,
    PS: Parser<'code>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, cursor: TextCursor<'code>) -> ParseResult<'code, Self::Output> {
        match self.inner.parse(cursor) {
            Ok(result) => Ok(result),
            Err(_) => Ok((Vec::new(), cursor)),
        }
    }

    fn label(&self) -> Cow<'_, str> {
        self.inner.label()
    }
}

/// Creates a parser that matches one or more items separated by `separator`
pub fn sep_by1<'code, P, PS>(parser: P, separator: PS) -> SepBy1<P, PS>
where
    P: Parser<'code>,
    PS: Parser<'code>,
{
    SepBy1::new(parser, separator)
}

/// Creates a parser that matches zero or more items separated by `separator`
///
/// Never fails; yields an empty vector without consuming when no item matches.
pub fn sep_by<'code, P, PS>(parser: P, separator: PS) -> SepBy<P, PS>
where
    P: Parser<'code>,
    PS: Parser<'code>,
{
    SepBy {
        inner: SepBy1::new(parser, separator),
    }
}

/// Extension trait to add .sep_by() and .sep_by1() to parsers
pub trait SepByExt<'code>: Parser<'code> + Sized {
    fn sep_by<PS>(self, separator: PS) -> SepBy<Self, PS>
    where
        PS: Parser<'code>,
    {
        sep_by(self, separator)
    }

    fn sep_by1<PS>(self, separator: PS) -> SepBy1<Self, PS>
    where
        PS: Parser<'code>,
    {
        sep_by1(self, separator)
    }
}

/// Implement SepByExt for all parsers
impl<'code, P> SepByExt<'code> for P where P: Parser<'code> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::choice;
    use crate::or::OrExt;
    use crate::text::char::is_char;
    use crate::text::number::integer;
    use crate::text::string::is_string;

    #[test]
    fn test_empty_list_fails() {
        let error = sep_by1(integer(), is_char(','))
            .parse(TextCursor::new(""))
            .unwrap_err();
        assert_eq!(error.message(), "Empty input");
    }

    #[test]
    fn test_single_element() {
        let (values, cursor) = sep_by1(integer(), is_char(','))
            .parse(TextCursor::new("42"))
            .unwrap();
        assert_eq!(values, vec![42]);
        assert!(cursor.eos());
    }

    #[test]
    fn test_multiple_elements() {
        let (values, cursor) = sep_by1(integer(), is_char(','))
            .parse(TextCursor::new("1,-2,3 rest"))
            .unwrap();
        assert_eq!(values, vec![1, -2, 3]);
        assert_eq!(cursor.rest(), " rest");
    }

    #[test]
    fn test_letters_separated_by_space() {
        let letter = choice![is_char('a'), is_char('o'), is_char('c')];
        let outcome = sep_by1(letter, is_char(' ')).run("a o c");

        assert_eq!(outcome.value(), Some(&vec!['a', 'o', 'c']));
        assert_eq!(outcome.remaining().map(|c| c.rest()), Some(""));
    }

    #[test]
    fn test_trailing_separator_left_unconsumed() {
        let (values, cursor) = sep_by1(integer(), is_char(','))
            .parse(TextCursor::new("1,2,"))
            .unwrap();
        assert_eq!(values, vec![1, 2]);
        assert_eq!(cursor.rest(), ",");
    }

    #[test]
    fn test_string_elements() {
        let word = is_string("yes").or(is_string("no"));
        let (values, _) = word
            .sep_by1(is_string(", "))
            .parse(TextCursor::new("yes, no, yes"))
            .unwrap();
        let values: Vec<&str> = values.iter().map(|v| v.as_ref()).collect();
        assert_eq!(values, vec!["yes", "no", "yes"]);
    }

    #[test]
    fn test_sep_by_empty() {
        let (values, cursor) = sep_by(integer(), is_char(','))
            .parse(TextCursor::new("x"))
            .unwrap();
        assert!(values.is_empty());
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_sep_by_matches_sep_by1_when_non_empty() {
        let input = "7;8;9";
        assert_eq!(
            integer().sep_by(is_char(';')).run(input),
            integer().sep_by1(is_char(';')).run(input)
        );
    }

    #[test]
    fn test_label() {
        assert_eq!(
            sep_by(is_char('a'), is_char(',')).label(),
            "character 'a' separated by character ','"
        );
    }
}
