use thiserror::Error;

use crate::error::BrainError;

/// Represents all errors that can occur while replaying a keystroke script.
#[derive(Debug, Error)]
pub enum KeypadError {
    /// The lexer could not match any key at this position.
    #[error("Error on line {line}: Unexpected token '{token}'.")]
    UnexpectedToken {
        /// The unmatched source text.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A numeric key could not be represented as an `f64`.
    #[error("Error on line {line}: Invalid number '{literal}'.")]
    InvalidNumber {
        /// The literal as written in the script.
        literal: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// The evaluator rejected a key during strict replay.
    #[error("Error on line {line}: {source}")]
    Brain {
        /// The underlying dispatch error.
        #[source]
        source: BrainError,
        /// The source line where the error occurred.
        line:   usize,
    },
}

impl KeypadError {
    /// Returns the script line the error points at.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnexpectedToken { line, .. }
            | Self::InvalidNumber { line, .. }
            | Self::Brain { line, .. } => *line,
        }
    }
}
