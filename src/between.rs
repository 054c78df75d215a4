use crate::cursors::TextCursor;
use crate::parser::{ParseResult, Parser};
use std::borrow::Cow;

/// Parser combinator that matches content between two delimiters
///
/// Returns only the content; the delimiters are checked and dropped. Any of
/// the three failing fails the whole parser with that diagnostic.
///
/// ```
/// use textcomb::between::between;
/// use textcomb::parser::Parser;
/// use textcomb::text::{decimal, is_char};
///
/// let parser = between(is_char('['), decimal(), is_char(']'));
/// assert_eq!(parser.run_optional("[42]"), Some(42));
/// ```
#[derive(Clone)]
pub struct Between<L, P, R> {
    open: L,
    content: P,
    close: R,
}

impl<L, P, R> Between<L, P, R> {
    pub fn new(open: L, content: P, close: R) -> Self {
        Between {
            open,
            content,
            close,
        }
    }
}

impl<'code, L, P, R> Parser<'code> for Between<L, P, R>
where
    L: Parser<'code>,
    P: Parser<'code>,
    R: Parser<'code>,
{
    type Output = P::Output;

    fn parse(&self, cursor: TextCursor<'code>) -> ParseResult<'code, Self::Output> {
        let (_, cursor) = self.open.parse(cursor)?;
        let (value, cursor) = self.content.parse(cursor)?;
        let (_, cursor) = self.close.parse(cursor)?;
        Ok((value, cursor))
    }

    fn label(&self) -> Cow<'_, str> {
        Cow::Owned(format!(
            "{} between {} and {}",
            self.content.label(),
            self.open.label(),
            self.close.label()
        ))
    }
}

/// Convenience function to create a Between parser
pub fn between<'code, L, P, R>(open: L, content: P, close: R) -> Between<L, P, R>
where
    L: Parser<'code>,
    P: Parser<'code>,
    R: Parser<'code>,
{
    Between::new(open, content, close)
}
