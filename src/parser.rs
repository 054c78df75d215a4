use crate::cursor::Cursor;
use crate::cursors::TextCursor;
use crate::error::{Diagnostic, ParseError};
use crate::outcome::Outcome;
use std::borrow::Cow;
use tracing::{debug, trace};

/// What a parser returns: the value and the cursor after it, or why it failed
pub type ParseResult<'code, T> = Result<(T, TextCursor<'code>), Diagnostic>;

/// Core parser trait for parser combinators
pub trait Parser<'code> {
    type Output;

    /// Attempt to parse from the given cursor position
    ///
    /// Returns the parsed value and the advanced cursor on success. A failure
    /// carries only a [`Diagnostic`]; the caller still holds the cursor it
    /// passed in, so failures never consume input.
    fn parse(&self, cursor: TextCursor<'code>) -> ParseResult<'code, Self::Output>;

    /// Human readable name used when composing diagnostics and labels
    fn label(&self) -> Cow<'_, str> {
        Cow::Borrowed("unknown")
    }

    /// Run against complete input
    fn run(&self, input: &'code str) -> Outcome<'code, Self::Output> {
        let result = self.parse(TextCursor::new(input));
        match &result {
            Ok((_, remaining)) => trace!(
                parser = %self.label(),
                consumed = remaining.position(),
                "parse succeeded"
            ),
            Err(diagnostic) => debug!(
                parser = %self.label(),
                position = diagnostic.position(),
                %diagnostic,
                "parse failed"
            ),
        }
        Outcome::from(result)
    }

    /// Run against complete input, discarding the diagnostic and the remainder
    fn run_optional(&self, input: &'code str) -> Option<Self::Output> {
        self.run(input).into_option()
    }

    /// Run against complete input, turning a failure into a [`ParseError`]
    fn run_or_fail(&self, input: &'code str) -> Result<Self::Output, ParseError> {
        match self.run(input) {
            Outcome::Success { value, .. } => Ok(value),
            Outcome::Failure(diagnostic) => Err(ParseError::new(diagnostic, input)),
        }
    }
}

/// Run `parser` against `input`, see [`Parser::run`]
pub fn run<'code, P>(parser: &P, input: &'code str) -> Outcome<'code, P::Output>
where
    P: Parser<'code> + ?Sized,
{
    parser.run(input)
}

/// See [`Parser::run_optional`]
pub fn run_optional<'code, P>(parser: &P, input: &'code str) -> Option<P::Output>
where
    P: Parser<'code> + ?Sized,
{
    parser.run_optional(input)
}

/// See [`Parser::run_or_fail`]
pub fn run_or_fail<'code, P>(parser: &P, input: &'code str) -> Result<P::Output, ParseError>
where
    P: Parser<'code> + ?Sized,
{
    parser.run_or_fail(input)
}

/// Parser built from a plain function over the cursor
#[derive(Clone)]
pub struct FromFn<F> {
    label: Cow<'static, str>,
    f: F,
}

impl<'code, F, T> Parser<'code> for FromFn<F>
where
    F: Fn(TextCursor<'code>) -> ParseResult<'code, T>,
{
    type Output = T;

    fn parse(&self, cursor: TextCursor<'code>) -> ParseResult<'code, Self::Output> {
        (self.f)(cursor)
    }

    fn label(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.label)
    }
}

/// Wrap a function as a parser
///
/// The function must behave like any other parser: on success return the
/// cursor after what it consumed, on failure a diagnostic.
pub fn from_fn<'code, F, T>(label: impl Into<Cow<'static, str>>, f: F) -> FromFn<F>
where
    F: Fn(TextCursor<'code>) -> ParseResult<'code, T>,
{
    FromFn {
        label: label.into(),
        f,
    }
}
