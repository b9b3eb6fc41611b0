use std::fmt;
use thiserror::Error;

/// Every way a calculation can fail. All variants are recoverable: the caller
/// shows the message and lets the user edit the input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    #[error("Invalid characters: unexpected '{found}' at position {position}")]
    InvalidCharacters { found: char, position: usize },

    #[error("Division by zero")]
    DivisionByZero,

    #[error("{0}")]
    Evaluation(String),
}

impl CalcError {
    pub fn evaluation(message: impl Into<String>) -> Self {
        CalcError::Evaluation(message.into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            CalcError::InvalidCharacters { .. } => ErrorKind::InvalidCharacters,
            CalcError::DivisionByZero => ErrorKind::DivisionByZero,
            CalcError::Evaluation(_) => ErrorKind::EvaluationError,
        }
    }
}

/// Coarse classification exposed to front ends.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    DivisionByZero,
    InvalidCharacters,
    EvaluationError,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::DivisionByZero => "DivisionByZero",
            ErrorKind::InvalidCharacters => "InvalidCharacters",
            ErrorKind::EvaluationError => "EvaluationError",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
