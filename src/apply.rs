use crate::cursors::TextCursor;
use crate::parser::{ParseResult, Parser};
use std::borrow::Cow;

/// Parser combinator that applies a parsed function to a parsed argument
///
/// Runs the function parser first; the argument parser only runs once the
/// function parser succeeded, starting where it stopped.
#[derive(Clone)]
pub struct Apply<PF, PX> {
    function: PF,
    argument: PX,
}

impl<PF, PX> Apply<PF, PX> {
    pub fn new(function: PF, argument: PX) -> Self {
        Apply { function, argument }
    }
}

impl<'code, PF, PX, F, U> Parser<'code> for Apply<PF, PX>
where
    PF: Parser<'code, Output = F>,
    PX: Parser<'code>,
    F: FnOnce(PX::Output) -> U,
{
    type Output = U;

    fn parse(&self, cursor: TextCursor<'code>) -> ParseResult<'code, Self::Output> {
        let (function, cursor) = self.function.parse(cursor)?;
        let (argument, cursor) = self.argument.parse(cursor)?;
        Ok((function(argument), cursor))
    }

    fn label(&self) -> Cow<'_, str> {
        Cow::Owned(format!(
            "{} and then {}",
            self.function.label(),
            self.argument.label()
        ))
    }
}

/// Convenience function to create an Apply parser
pub fn apply<'code, PF, PX, F, U>(function: PF, argument: PX) -> Apply<PF, PX>
where
    PF: Parser<'code, Output = F>,
    PX: Parser<'code>,
    F: FnOnce(PX::Output) -> U,
{
    Apply::new(function, argument)
}

/// Extension trait to add .apply() method support for parsers yielding functions
pub trait ApplyExt<'code>: Parser<'code> + Sized {
    fn apply<PX, U>(self, argument: PX) -> Apply<Self, PX>
    where
        PX: Parser<'code>,
        Self::Output: FnOnce(PX::Output) -> U,
    {
        Apply::new(self, argument)
    }
}

/// Implement ApplyExt for all parsers
impl<'code, P> ApplyExt<'code> for P where P: Parser<'code> {}

/// Parser combinator that builds a value from two parsers run in sequence
#[derive(Clone)]
pub struct Map2<PA, PB, F> {
    first: PA,
    second: PB,
    combine: F,
}

impl<'code, PA, PB, F, U> Parser<'code> for Map2<PA, PB, F>
where
    PA: Parser<'code>,
    PB: Parser<'code>,
    F: Fn(PA::Output, PB::Output) -> U,
{
    type Output = U;

    fn parse(&self, cursor: TextCursor<'code>) -> ParseResult<'code, Self::Output> {
        let (a, cursor) = self.first.parse(cursor)?;
        let (b, cursor) = self.second.parse(cursor)?;
        Ok(((self.combine)(a, b), cursor))
    }

    fn label(&self) -> Cow<'_, str> {
        Cow::Owned(format!(
            "{} and then {}",
            self.first.label(),
            self.second.label()
        ))
    }
}

/// Run two parsers in order and combine their values with `combine`
pub fn map2<'code, PA, PB, F, U>(first: PA, second: PB, combine: F) -> Map2<PA, PB, F>
where
    PA: Parser<'code>,
    PB: Parser<'code>,
    F: Fn(PA::Output, PB::Output) -> U,
{
    Map2 {
        first,
        second,
        combine,
    }
}

/// Parser combinator that builds a value from three parsers run in sequence
#[derive(Clone)]
pub struct Map3<PA, PB, PC, F> {
    first: PA,
    second: PB,
    third: PC,
    combine: F,
}

impl<'code, PA, PB, PC, F, U> Parser<'code> for Map3<PA, PB, PC, F>
where
    PA: Parser<'code>,
    PB: Parser<'code>,
    PC: Parser<'code>,
    F: Fn(PA::Output, PB::Output, PC::Output) -> U,
{
    type Output = U;

    fn parse(&self, cursor: TextCursor<'code>) -> ParseResult<'code, Self::Output> {
        let (a, cursor) = self.first.parse(cursor)?;
        let (b, cursor) = self.second.parse(cursor)?;
        let (c, cursor) = self.third.parse(cursor)?;
        Ok(((self.combine)(a, b, c), cursor))
    }

    fn label(&self) -> Cow<'_, str> {
        Cow::Owned(format!(
            "{} and then {} and then {}",
            self.first.label(),
            self.second.label(),
            self.third.label()
        ))
    }
}

/// Run three parsers in order and combine their values with `combine`
pub fn map3<'code, PA, PB, PC, F, U>(
    first: PA,
    second: PB,
    third: PC,
    combine: F,
) -> Map3<PA, PB, PC, F>
where
    PA: Parser<'code>,
    PB: Parser<'code>,
    PC: Parser<'code>,
    F: Fn(PA::Output, PB::Output, PC::Output) -> U,
{
    Map3 {
        first,
        second,
        third,
        combine,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::Cursor;
    use crate::discard::discard_left;
    use crate::map::MapExt;
    use crate::succeed::succeed;
    use crate::text::char::is_char;
    use crate::text::number::decimal;
    use std::cell::Cell;

    #[derive(Debug, PartialEq)]
    struct Pair {
        left: u64,
        right: u64,
    }

    #[test]
    fn test_apply_function_to_argument() {
        let parser = apply(succeed(|c: char| c.to_ascii_uppercase()), is_char('q'));

        let (value, cursor) = parser.parse(TextCursor::new("qz")).unwrap();
        assert_eq!(value, 'Q');
        assert_eq!(cursor.value(), Some('z'));
    }

    #[test]
    fn test_apply_curried_two_fields() {
        let make_pair = |left: u64| move |right: u64| Pair { left, right };
        let parser = apply(
            apply(succeed(make_pair), decimal()),
            discard_left(is_char(','), decimal()),
        );

        assert_eq!(parser.run_optional("3,5"), Some(Pair { left: 3, right: 5 }));
        assert_eq!(parser.run_optional("3;5"), None);
    }

    #[test]
    fn test_apply_method_syntax() {
        let parser = decimal()
            .map(|left| move |right| Pair { left, right })
            .apply(discard_left(is_char('-'), decimal()));

        assert_eq!(parser.run_optional("10-20"), Some(Pair { left: 10, right: 20 }));
    }

    #[test]
    fn test_apply_argument_not_run_when_function_fails() {
        let ran = Cell::new(false);
        let argument = is_char('b').map(|c| {
            ran.set(true);
            c
        });
        let function = is_char('a').map(|_| |c: char| c);

        let error = apply(function, argument).parse(TextCursor::new("xb")).unwrap_err();
        assert_eq!(error.label(), "character 'a'");
        assert!(!ran.get());
    }

    #[test]
    fn test_apply_label() {
        let parser = apply(is_char('a').map(|_| |c: char| c), is_char('b'));
        assert_eq!(parser.label(), "character 'a' and then character 'b'");
    }

    #[test]
    fn test_map2_builds_record() {
        let pair = map2(
            decimal(),
            discard_left(is_char(','), decimal()),
            |left, right| Pair { left, right },
        );

        let (value, cursor) = pair.parse(TextCursor::new("3,5;")).unwrap();
        assert_eq!(value, Pair { left: 3, right: 5 });
        assert_eq!(cursor.rest(), ";");
    }

    #[test]
    fn test_map2_second_failure() {
        let parser = map2(is_char('a'), is_char('b'), |a, b| (a, b));

        let error = parser.parse(TextCursor::new("ac")).unwrap_err();
        assert_eq!(error.label(), "character 'b'");
        assert_eq!(error.position(), 1);
    }

    #[test]
    fn test_map3() {
        let parser = map3(decimal(), is_char('x'), decimal(), |w, _, h| w * h);

        let (area, cursor) = parser.parse(TextCursor::new("3x4 m")).unwrap();
        assert_eq!(area, 12);
        assert_eq!(cursor.rest(), " m");
        assert_eq!(
            parser.label(),
            "number and then character 'x' and then number"
        );
    }
}
