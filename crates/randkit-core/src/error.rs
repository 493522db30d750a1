//! Error types.

use thiserror::Error;

/// Error returned when a helper's preconditions are violated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RandomError {
    /// A bound is negative or inverted, or an input cannot produce a value.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A single element was requested from an empty collection.
    #[error("out of range: {0}")]
    OutOfRange(String),
}
