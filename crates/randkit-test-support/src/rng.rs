//! Test RNG: deterministic `RandomSource` implementations for tests.

use randkit_core::rng::RandomSource;

/// A no-op RNG that always returns `low`. Suitable for tests that do not
/// depend on specific random values.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockRng;

impl RandomSource for MockRng {
    fn next_int(&mut self, low: i32, _high: i32) -> i32 {
        low
    }
}

/// An RNG that returns values from a predetermined sequence, ignoring the
/// requested range. Panics if the sequence is exhausted. Used in tests that
/// need specific, repeatable random outcomes.
#[derive(Debug, Clone)]
pub struct SequenceRng {
    values: Vec<i32>,
    index: usize,
}

impl SequenceRng {
    /// Create a new `SequenceRng` with the given values.
    #[must_use]
    pub fn new(values: Vec<i32>) -> Self {
        Self { values, index: 0 }
    }

    /// Number of values not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.values.len() - self.index
    }
}

impl RandomSource for SequenceRng {
    fn next_int(&mut self, _low: i32, _high: i32) -> i32 {
        let val = self.values[self.index];
        self.index += 1;
        val
    }
}

/// An RNG that records every requested `[low, high)` range and delegates the
/// draw to an inner source.
#[derive(Debug, Clone, Default)]
pub struct RecordingRng<R = MockRng> {
    inner: R,
    ranges: Vec<(i32, i32)>,
}

impl<R: RandomSource> RecordingRng<R> {
    /// Create a recording RNG around `inner`.
    #[must_use]
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            ranges: Vec::new(),
        }
    }

    /// Every range requested so far, in call order.
    #[must_use]
    pub fn ranges(&self) -> &[(i32, i32)] {
        &self.ranges
    }

    /// Number of draws performed.
    #[must_use]
    pub fn draw_count(&self) -> usize {
        self.ranges.len()
    }
}

impl<R: RandomSource> RandomSource for RecordingRng<R> {
    fn next_int(&mut self, low: i32, high: i32) -> i32 {
        self.ranges.push((low, high));
        self.inner.next_int(low, high)
    }
}
