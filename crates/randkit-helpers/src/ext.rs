//! Method-call syntax for the helpers on any [`RandomSource`].

use chrono::NaiveDateTime;
use randkit_core::error::RandomError;
use randkit_core::rng::RandomSource;

use crate::options::{LengthBounds, StringOptions};
use crate::{collection, datetime, pick, string};

/// Extension methods available on every [`RandomSource`].
///
/// Each method forwards to the free function of the same name.
pub trait RandomHelpers: RandomSource {
    /// See [`string::next_string`].
    ///
    /// # Errors
    ///
    /// Same as [`string::next_string`].
    fn next_string(&mut self, options: &StringOptions) -> Result<String, RandomError> {
        string::next_string(self, options)
    }

    /// See [`collection::next_collection`].
    ///
    /// # Errors
    ///
    /// Same as [`collection::next_collection`].
    fn next_collection<T, U, F>(
        &mut self,
        source: &[T],
        bounds: LengthBounds,
        map: F,
    ) -> Result<Vec<U>, RandomError>
    where
        F: FnMut(&T) -> U,
    {
        collection::next_collection(self, source, bounds, map)
    }

    /// See [`pick::pick`].
    ///
    /// # Errors
    ///
    /// Same as [`pick::pick`].
    fn pick<'a, T>(&mut self, ts: &'a [T]) -> Result<&'a T, RandomError> {
        pick::pick(self, ts)
    }

    /// See [`pick::pick_or`].
    ///
    /// # Errors
    ///
    /// Same as [`pick::pick_or`].
    fn pick_or<T, F>(&mut self, ts: &[T], fallback: F) -> Result<T, RandomError>
    where
        T: Clone,
        F: FnOnce(&mut Self) -> T,
    {
        pick::pick_or(self, ts, fallback)
    }

    /// See [`datetime::next_datetime`].
    ///
    /// # Errors
    ///
    /// Same as [`datetime::next_datetime`].
    fn next_datetime(&mut self) -> Result<NaiveDateTime, RandomError> {
        datetime::next_datetime(self)
    }
}

impl<R: RandomSource + ?Sized> RandomHelpers for R {}
