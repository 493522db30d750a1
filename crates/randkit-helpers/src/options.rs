//! Option values for the optional parameters of the helpers.

use randkit_core::error::RandomError;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// The 62-character alphanumeric alphabet used by default for strings.
pub const ALPHANUMERIC: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// A `[min, max)` range of generated lengths.
///
/// Fields are signed so that deserialized configuration can carry (and be
/// rejected for) negative values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LengthBounds {
    /// Inclusive lower bound.
    pub min: i32,
    /// Exclusive upper bound.
    pub max: i32,
}

impl LengthBounds {
    /// Create bounds without validating them.
    #[must_use]
    pub const fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }

    /// Bounds that always produce exactly `len` elements.
    #[must_use]
    pub const fn exactly(len: i32) -> Self {
        Self::new(len, len.saturating_add(1))
    }

    /// Checks `0 <= min <= max`.
    ///
    /// # Errors
    ///
    /// Returns `RandomError::InvalidArgument` if either bound is negative or
    /// `max < min`.
    pub fn validate(&self) -> Result<(), RandomError> {
        let Self { min, max } = *self;
        if min < 0 || max < 0 {
            debug!(min, max, "rejected negative length bounds");
            return Err(RandomError::InvalidArgument(format!(
                "length bounds must be non-negative (min = {min}, max = {max})"
            )));
        }
        if max < min {
            debug!(min, max, "rejected inverted length bounds");
            return Err(RandomError::InvalidArgument(format!(
                "max ({max}) is less than min ({min})"
            )));
        }
        Ok(())
    }
}

impl Default for LengthBounds {
    fn default() -> Self {
        Self::new(0, 100)
    }
}

/// Options for [`next_string`](crate::string::next_string).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StringOptions {
    /// Length range of the generated string, in characters.
    pub bounds: LengthBounds,
    /// Characters eligible for the string. Duplicates weight the draw.
    pub alphabet: String,
}

impl StringOptions {
    /// Replace the length bounds.
    #[must_use]
    pub fn with_bounds(mut self, min: i32, max: i32) -> Self {
        self.bounds = LengthBounds::new(min, max);
        self
    }

    /// Replace the alphabet.
    #[must_use]
    pub fn with_alphabet(mut self, alphabet: impl Into<String>) -> Self {
        self.alphabet = alphabet.into();
        self
    }
}

impl Default for StringOptions {
    fn default() -> Self {
        Self {
            bounds: LengthBounds::default(),
            alphabet: ALPHANUMERIC.to_owned(),
        }
    }
}
