use crate::cursors::TextCursor;
use crate::error::Diagnostic;

/// Result of running a parser against complete input
///
/// On failure no cursor is exposed: a caller inspecting an `Outcome` never
/// observes partial progress.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<'code, T> {
    Success {
        value: T,
        remaining: TextCursor<'code>,
    },
    Failure(Diagnostic),
}

impl<'code, T> Outcome<'code, T> {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success { .. })
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Outcome::Failure(_))
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            Outcome::Success { value, .. } => Some(value),
            Outcome::Failure(_) => None,
        }
    }

    pub fn remaining(&self) -> Option<TextCursor<'code>> {
        match self {
            Outcome::Success { remaining, .. } => Some(*remaining),
            Outcome::Failure(_) => None,
        }
    }

    pub fn diagnostic(&self) -> Option<&Diagnostic> {
        match self {
            Outcome::Success { .. } => None,
            Outcome::Failure(diagnostic) => Some(diagnostic),
        }
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Outcome::Success { value, .. } => Some(value),
            Outcome::Failure(_) => None,
        }
    }

    pub fn into_result(self) -> Result<(T, TextCursor<'code>), Diagnostic> {
        match self {
            Outcome::Success { value, remaining } => Ok((value, remaining)),
            Outcome::Failure(diagnostic) => Err(diagnostic),
        }
    }
}

impl<'code, T> From<Result<(T, TextCursor<'code>), Diagnostic>> for Outcome<'code, T> {
    fn from(result: Result<(T, TextCursor<'code>), Diagnostic>) -> Self {
        match result {
            Ok((value, remaining)) => Outcome::Success { value, remaining },
            Err(diagnostic) => Outcome::Failure(diagnostic),
        }
    }
}
