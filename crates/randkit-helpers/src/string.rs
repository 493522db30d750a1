//! Random strings over an alphabet.

use randkit_core::error::RandomError;
use randkit_core::rng::RandomSource;
use tracing::debug;

use crate::collection::next_collection;
use crate::options::{LengthBounds, StringOptions};

/// Generates a string whose length (in characters) is drawn uniformly from
/// `[options.bounds.min, options.bounds.max)`, each character chosen
/// uniformly, with replacement, from `options.alphabet`.
///
/// # Errors
///
/// Returns `RandomError::InvalidArgument` if the alphabet is empty or the
/// bounds are invalid.
pub fn next_string<R>(rng: &mut R, options: &StringOptions) -> Result<String, RandomError>
where
    R: RandomSource + ?Sized,
{
    let alphabet: Vec<char> = options.alphabet.chars().collect();
    if alphabet.is_empty() {
        debug!("rejected empty alphabet");
        return Err(RandomError::InvalidArgument(
            "alphabet must not be empty".to_owned(),
        ));
    }
    let chars = next_collection(rng, &alphabet, options.bounds, |c| *c)?;
    Ok(chars.into_iter().collect())
}

/// Generates an alphanumeric string with the given length bounds.
///
/// # Errors
///
/// Returns `RandomError::InvalidArgument` if the bounds are invalid.
pub fn next_alphanumeric<R>(rng: &mut R, bounds: LengthBounds) -> Result<String, RandomError>
where
    R: RandomSource + ?Sized,
{
    next_string(
        rng,
        &StringOptions {
            bounds,
            ..StringOptions::default()
        },
    )
}
