//! randkit core: the random source abstraction and shared error type.
//!
//! This crate defines the generator trait every helper is parameterized by.
//! It contains no helper logic.

pub mod error;
pub mod rng;
