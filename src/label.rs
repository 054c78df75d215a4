use crate::cursors::TextCursor;
use crate::parser::{ParseResult, Parser};
use std::borrow::Cow;
use std::fmt;

/// Parser combinator that names a parser
///
/// Replaces the wrapped parser's label and adds the name as a context frame
/// to every failure coming out of it, so nested names read innermost first.
#[derive(Clone)]
pub struct Labeled<P> {
    parser: P,
    name: Cow<'static, str>,
}

impl<P> Labeled<P> {
    pub fn new(parser: P, name: impl Into<Cow<'static, str>>) -> Self {
        Labeled {
            parser,
            name: name.into(),
        }
    }
}

impl<P> fmt::Debug for Labeled<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Labeled")
            .field("name", &self.name)
            .field("parser", &"<parser>")
            .finish()
    }
}

impl<'code, P> Parser<'code> for Labeled<P>
where
    P: Parser<'code>,
{
    type Output = P::Output;

    fn parse(&self, cursor: TextCursor<'code>) -> ParseResult<'code, Self::Output> {
        self.parser
            .parse(cursor)
            .map_err(|diagnostic| diagnostic.within(self.name.clone()))
    }

    fn label(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.name)
    }
}

/// Extension trait to add .with_label() method support for parsers
pub trait LabelExt<'code>: Parser<'code> + Sized {
    fn with_label(self, name: impl Into<Cow<'static, str>>) -> Labeled<Self> {
        Labeled::new(self, name)
    }
}

/// Implement LabelExt for all parsers
impl<'code, P> LabelExt<'code> for P where P: Parser<'code> {}

/// Convenience function to create a Labeled parser
pub fn with_label<'code, P>(parser: P, name: impl Into<Cow<'static, str>>) -> Labeled<P>
where
    P: Parser<'code>,
{
    Labeled::new(parser, name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::between::between;
    use crate::text::char::is_char;
    use crate::text::number::integer;

    #[test]
    fn test_with_label_overrides_label() {
        let parser = integer().with_label("port");
        assert_eq!(parser.label(), "port");
    }

    #[test]
    fn test_with_label_success_untouched() {
        assert_eq!(integer().with_label("port").run_optional("8080"), Some(8080));
    }

    #[test]
    fn test_with_label_adds_context_frame() {
        let error = is_char('a')
            .with_label("greeting")
            .parse(TextCursor::new("b"))
            .unwrap_err();

        assert_eq!(error.label(), "character 'a'");
        assert_eq!(error.context(), ["greeting"]);
        assert_eq!(
            error.to_string(),
            "character 'a': Unexpected 'b', in greeting"
        );
    }

    #[test]
    fn test_nested_labels_innermost_first() {
        let parser = with_label(
            between(is_char('('), integer().with_label("number"), is_char(')')),
            String::from("group"),
        );

        let error = parser.parse(TextCursor::new("(x)")).unwrap_err();
        assert_eq!(error.context(), ["number", "group"]);
        assert_eq!(error.position(), 1);
    }

    #[test]
    fn test_debug() {
        let parser = is_char('a').with_label("a");
        assert!(format!("{parser:?}").contains("Labeled"));
    }
}
