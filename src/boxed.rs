use crate::cursors::TextCursor;
use crate::parser::{ParseResult, Parser};
use std::borrow::Cow;
use std::rc::Rc;

/// Type-erased parser with a fixed output type
///
/// Cloning shares the underlying parser. Useful for naming the type of a
/// recursive grammar or for storing different parsers in one collection.
pub struct BoxedParser<'code, O> {
    parser: Rc<dyn Parser<'code, Output = O> + 'code>,
}

impl<'code, O> BoxedParser<'code, O> {
    pub fn new<P>(parser: P) -> Self
    where
        P: Parser<'code, Output = O> + 'code,
    {
        BoxedParser {
            parser: Rc::new(parser),
        }
    }
}

impl<O> Clone for BoxedParser<'_, O> {
    fn clone(&self) -> Self {
        BoxedParser {
            parser: Rc::clone(&self.parser),
        }
    }
}

impl<'code, O> Parser<'code> for BoxedParser<'code, O> {
    type Output = O;

    fn parse(&self, cursor: TextCursor<'code>) -> ParseResult<'code, Self::Output> {
        self.parser.parse(cursor)
    }

    fn label(&self) -> Cow<'_, str> {
        self.parser.label()
    }
}

/// Extension trait to add .boxed() method support for parsers
pub trait BoxedExt<'code>: Parser<'code> + Sized + 'code {
    fn boxed(self) -> BoxedParser<'code, Self::Output> {
        BoxedParser::new(self)
    }
}

/// Implement BoxedExt for all parsers
impl<'code, P> BoxedExt<'code> for P where P: Parser<'code> + 'code {}
