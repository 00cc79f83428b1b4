//! Error types for scoring and input parsing

use thiserror::Error;

/// A response vector that cannot be scored
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoreError {
    #[error("expected {expected} responses, got {actual}")]
    WrongResponseCount { expected: usize, actual: usize },

    /// `position` is 1-indexed to match the question numbering shown to users
    #[error("response {position} is {value}; ratings must be between 1 and 5")]
    ResponseOutOfRange { position: usize, value: i64 },
}

/// A line of input that is not a valid rating
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResponseParseError {
    #[error("'{0}' is not a number")]
    NotANumber(String),

    #[error("{0} is outside the 1-5 scale")]
    OutOfRange(i64),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown personality type '{0}' (expected a code such as INTJ or ESFP-A)")]
pub struct TypeCodeError(pub String);
