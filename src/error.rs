//! Error types for scoring entry points.

use thiserror::Error;

use crate::alphabet::{Alphabet, SequenceRole};

/// Errors returned by [`Scorer`](crate::Scorer) and the crate-level functions.
///
/// Every variant is a permanent input rejection; retrying with the same
/// input fails the same way.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoreError {
    /// A symbol outside the expected alphabet (strict policy only).
    #[error("invalid {alphabet} symbol {symbol:?} at position {position} of {role}")]
    InvalidAlphabet {
        alphabet: Alphabet,
        role: SequenceRole,
        position: usize,
        symbol: char,
    },

    /// Caller broke an argument contract (bad configuration value, etc.).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Input too long for the configured naive-recursion limit.
    #[error("input length {len} exceeds the naive recursion limit of {limit}")]
    NaiveLimitExceeded { len: usize, limit: usize },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ScoreError>;
