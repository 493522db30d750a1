//! Random source abstraction.
//!
//! Helpers never own a generator. Callers inject one through
//! [`RandomSource`]: a `rand`-backed adapter in production, a seeded or
//! scripted implementation in tests and replays.

use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

/// Abstraction over a source of uniformly distributed integers.
pub trait RandomSource {
    /// Generate a random `i32` in the half-open range `[low, high)`.
    ///
    /// Callers guarantee `low < high`.
    fn next_int(&mut self, low: i32, high: i32) -> i32;

    /// Generate a random `i32` in the range `[low, high]` inclusive.
    fn next_int_inclusive(&mut self, low: i32, high: i32) -> i32 {
        self.next_int(low, high.saturating_add(1))
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_int(&mut self, low: i32, high: i32) -> i32 {
        (**self).next_int(low, high)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn next_int(&mut self, low: i32, high: i32) -> i32 {
        (**self).next_int(low, high)
    }
}

/// Production source that delegates to a `rand` generator.
#[derive(Debug, Clone)]
pub struct RandAdapter<R> {
    inner: R,
}

impl<R: Rng> RandAdapter<R> {
    /// Wrap an existing `rand` generator.
    #[must_use]
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    /// Unwrap the adapter, returning the underlying generator.
    #[must_use]
    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl RandAdapter<StdRng> {
    /// A reproducible source: the same seed always yields the same sequence.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl RandAdapter<ThreadRng> {
    /// A source backed by the thread-local generator.
    #[must_use]
    pub fn thread() -> Self {
        Self::new(rand::rng())
    }
}

impl<R: Rng> RandomSource for RandAdapter<R> {
    fn next_int(&mut self, low: i32, high: i32) -> i32 {
        // rand panics on an empty range.
        if low >= high {
            return low;
        }
        self.inner.random_range(low..high)
    }
}
