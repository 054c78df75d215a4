use std::borrow::Cow;
use std::fmt;
use thiserror::Error;

/// Why a parser failed at a position
///
/// `label` names the parser that rejected the input (e.g. `character 'a'`),
/// `message` says what went wrong. Combinators that wrap a failing parser
/// with [`with_label`](crate::label::LabelExt::with_label) append context
/// frames, innermost first, instead of rewriting the label.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{label}: {message}{}", context_suffix(.context))]
pub struct Diagnostic {
    label: String,
    message: String,
    /// Byte offset in the input where the input was rejected
    position: usize,
    context: Vec<String>,
}

fn context_suffix(context: &[String]) -> String {
    context.iter().map(|frame| format!(", in {frame}")).collect()
}

impl Diagnostic {
    pub fn new(
        label: impl Into<String>,
        message: impl Into<String>,
        position: usize,
    ) -> Self {
        Diagnostic {
            label: label.into(),
            message: message.into(),
            position,
            context: Vec::new(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn position(&self) -> usize {
        self.position
    }

    /// Context frames, innermost first
    pub fn context(&self) -> &[String] {
        &self.context
    }

    /// Append a context frame naming an enclosing parser
    pub fn within(mut self, frame: impl Into<Cow<'static, str>>) -> Self {
        self.context.push(frame.into().into_owned());
        self
    }

    /// Line and column of the failure within `source`
    ///
    /// `source` must be the input the failing parse ran against.
    pub fn locate(&self, source: &str) -> Location {
        let end = floor_char_boundary(source, self.position);
        let before = &source[..end];
        let line = before.matches('\n').count() + 1;
        let line_start = before.rfind('\n').map_or(0, |i| i + 1);
        let column = before[line_start..].chars().count() + 1;
        Location { line, column }
    }

    /// Multi-line report with up to two lines of context around the failure
    pub fn render(&self, source: &str) -> String {
        let location = self.locate(source);
        let mut lines = vec![format!("Parse error at {location}: {self}"), String::new()];

        let first = location.line.saturating_sub(2).max(1);
        let last = location.line + 2;

        for (index, text) in source.split('\n').enumerate() {
            let number = index + 1;
            if number < first || number > last {
                continue;
            }
            let prefix = if number == location.line {
                format!("  > {number} | ")
            } else {
                format!("    {number} | ")
            };
            lines.push(format!("{prefix}{text}"));

            if number == location.line {
                let pointer_offset = prefix.len() + location.column - 1;
                lines.push(format!("{}^--- here", " ".repeat(pointer_offset)));
            }
        }

        lines.join("\n")
    }
}

fn floor_char_boundary(source: &str, position: usize) -> usize {
    let mut end = position.min(source.len());
    while !source.is_char_boundary(end) {
        end -= 1;
    }
    end
}

/// 1-based line and column (in characters) of a position in the input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    pub line: usize,
    pub column: usize,
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// Error returned by [`run_or_fail`](crate::parser::Parser::run_or_fail)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{diagnostic} at {location}")]
pub struct ParseError {
    diagnostic: Diagnostic,
    location: Location,
}

impl ParseError {
    pub fn new(diagnostic: Diagnostic, source: &str) -> Self {
        let location = diagnostic.locate(source);
        ParseError {
            diagnostic,
            location,
        }
    }

    pub fn diagnostic(&self) -> &Diagnostic {
        &self.diagnostic
    }

    pub fn location(&self) -> Location {
        self.location
    }

    pub fn into_diagnostic(self) -> Diagnostic {
        self.diagnostic
    }
}
