//! Core expression evaluation: errors, operations, parsing, folding.

pub mod evaluator;
mod operations;
pub mod parser;

pub use evaluator::evaluate;
pub use operations::Operation;

use thiserror::Error;

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Calculator error types - exhaustive enum ensures all cases handled
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// Expression was empty after trimming
    #[error("empty expression")]
    EmptyExpression,
    /// Expression contains a character outside the allowed set
    #[error("invalid character '{0}'")]
    InvalidCharacter(char),
    /// Two or more consecutive `+`, `*` or `/` characters
    #[error("invalid operator sequence")]
    InvalidSequence,
    /// Expression did not parse
    #[error("malformed expression: {0}")]
    Parse(String),
    /// Division by zero attempted
    #[error("division by zero")]
    DivisionByZero,
    /// Result is NaN or infinite
    #[error("result is not finite")]
    NotFinite,
}

/// Boundary classification of an error.
///
/// The display layer collapses both kinds into a single "Error" state; the
/// distinction exists for callers that want to log or test the cause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The input string was malformed
    InvalidInput,
    /// The input was well-formed but the arithmetic failed
    Math,
}

impl CalcError {
    /// Returns the boundary classification of this error
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyExpression
            | Self::InvalidCharacter(_)
            | Self::InvalidSequence
            | Self::Parse(_) => ErrorKind::InvalidInput,
            Self::DivisionByZero | Self::NotFinite => ErrorKind::Math,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== CalcError display tests =====

    #[test]
    fn test_error_display_empty() {
        assert_eq!(CalcError::EmptyExpression.to_string(), "empty expression");
    }

    #[test]
    fn test_error_display_invalid_character() {
        assert_eq!(
            CalcError::InvalidCharacter('@').to_string(),
            "invalid character '@'"
        );
    }

    #[test]
    fn test_error_display_invalid_sequence() {
        assert_eq!(
            CalcError::InvalidSequence.to_string(),
            "invalid operator sequence"
        );
    }

    #[test]
    fn test_error_display_parse() {
        let err = CalcError::Parse("unexpected token".into());
        assert!(err.to_string().contains("unexpected token"));
    }

    #[test]
    fn test_error_display_division_by_zero() {
        assert_eq!(CalcError::DivisionByZero.to_string(), "division by zero");
    }

    #[test]
    fn test_error_display_not_finite() {
        assert_eq!(CalcError::NotFinite.to_string(), "result is not finite");
    }

    #[test]
    fn test_error_is_error_trait() {
        let err: Box<dyn std::error::Error> = Box::new(CalcError::DivisionByZero);
        assert!(err.to_string().contains("zero"));
    }

    // ===== ErrorKind tests =====

    #[test]
    fn test_kind_invalid_input() {
        assert_eq!(CalcError::EmptyExpression.kind(), ErrorKind::InvalidInput);
        assert_eq!(
            CalcError::InvalidCharacter('x').kind(),
            ErrorKind::InvalidInput
        );
        assert_eq!(CalcError::InvalidSequence.kind(), ErrorKind::InvalidInput);
        assert_eq!(
            CalcError::Parse("bad".into()).kind(),
            ErrorKind::InvalidInput
        );
    }

    #[test]
    fn test_kind_math() {
        assert_eq!(CalcError::DivisionByZero.kind(), ErrorKind::Math);
        assert_eq!(CalcError::NotFinite.kind(), ErrorKind::Math);
    }
}
