//! Error types for weight-class operations.

use num_bigint::BigUint;
use thiserror::Error;

/// Error variants for weight-class counting, enumeration, and ranking.
#[derive(Debug, Error)]
pub enum Error {
    /// A weight-class argument violated `0 <= d <= n`.
    #[error("invalid weight class: weight {0} exceeds word length {1}")]
    InvalidRange(usize, usize),

    /// A rank was outside the class's `[0, cardinality)` range.
    #[error("rank {0} out of range: class holds {1} words")]
    IndexOutOfRange(BigUint, BigUint),

    /// A word handed to a ranking operation does not belong to the class.
    #[error("word of weight {0} is not a member of weight class ({1}, {2})")]
    ForeignWord(u64, usize, usize),
}

/// A specialized Result type for weight-class operations.
pub type Result<T> = std::result::Result<T, Error>;
