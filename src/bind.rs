use crate::cursors::TextCursor;
use crate::parser::{ParseResult, Parser};
use std::borrow::Cow;

/// Parser combinator that chooses the next parser from the previous result
///
/// Runs `parser`, hands its value to `f` and runs the parser `f` returns from
/// where the first one stopped. `f` is never called when `parser` fails.
#[derive(Clone)]
pub struct Bind<P, F> {
    parser: P,
    f: F,
}

impl<P, F> Bind<P, F> {
    pub fn new(parser: P, f: F) -> Self {
        Bind { parser, f }
    }
}

impl<'code, P, F, Q> Parser<'code> for Bind<P, F>
where
    P: Parser<'code>,
    F: Fn(P::Output) -> Q,
    Q: Parser<'code>,
{
    type Output = Q::Output;

    fn parse(&self, cursor: TextCursor<'code>) -> ParseResult<'code, Self::Output> {
        let (value, cursor) = self.parser.parse(cursor)?;
        (self.f)(value).parse(cursor)
    }

    fn label(&self) -> Cow<'_, str> {
        self.parser.label()
    }
}

/// Convenience function to create a Bind parser
pub fn bind<'code, P, F, Q>(parser: P, f: F) -> Bind<P, F>
where
    P: Parser<'code>,
    F: Fn(P::Output) -> Q,
    Q: Parser<'code>,
{
    Bind::new(parser, f)
}

/// Extension trait to add .bind() method support for parsers
pub trait BindExt<'code>: Parser<'code> + Sized {
    fn bind<F, Q>(self, f: F) -> Bind<Self, F>
    where
        F: Fn(Self::Output) -> Q,
        Q: Parser<'code>,
    {
        Bind::new(self, f)
    }
}

/// Implement BindExt for all parsers
impl<'code, P> BindExt<'code> for P where P: Parser<'code> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::Cursor;
    use crate::many::many;
    use crate::succeed::succeed;
    use crate::text::char::{any_char, is_char};
    use crate::text::number::decimal;
    use std::cell::Cell;

    #[test]
    fn test_bind_uses_value_to_pick_next_parser() {
        // The first character says which character must follow
        let parser = any_char().bind(|c| is_char(c));

        assert_eq!(parser.run_optional("aa"), Some('a'));
        assert_eq!(parser.run_optional("ab"), None);
    }

    #[test]
    fn test_bind_runs_from_remaining_cursor() {
        let parser = is_char('a').bind(|_| is_char('b'));

        let (value, cursor) = parser.parse(TextCursor::new("abc")).unwrap();
        assert_eq!(value, 'b');
        assert_eq!(cursor.value(), Some('c'));
    }

    #[test]
    fn test_bind_length_prefixed() {
        // "3:abcde" -> exactly three characters after the colon
        let parser = decimal().bind(|n| {
            is_char(':').bind(move |_| crate::sequence::sequence(vec![any_char(); n as usize]))
        });

        let (chars, cursor) = parser.parse(TextCursor::new("3:abcde")).unwrap();
        assert_eq!(chars, vec!['a', 'b', 'c']);
        assert_eq!(cursor.rest(), "de");
    }

    #[test]
    fn test_bind_failure_skips_function() {
        let called = Cell::new(false);
        let parser = is_char('x').bind(|c| {
            called.set(true);
            succeed(c)
        });

        let outcome = parser.run("abc");
        assert!(outcome.is_failure());
        assert_eq!(outcome.diagnostic().unwrap().label(), "character 'x'");
        assert!(!called.get());
    }

    #[test]
    fn test_bind_second_failure_propagates() {
        let parser = bind(is_char('a'), |_| many(is_char('z')).bind(|_| is_char('!')));

        let error = parser.parse(TextCursor::new("azz?")).unwrap_err();
        assert_eq!(error.label(), "character '!'");
        assert_eq!(error.position(), 3);
    }
}
