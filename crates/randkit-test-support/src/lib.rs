//! Shared test generators and utilities for randkit.

mod rng;
mod tracing;

pub use rng::{MockRng, RecordingRng, SequenceRng};
pub use tracing::init_test_tracing;
