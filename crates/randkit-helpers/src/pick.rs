//! Random element selection.

use randkit_core::error::RandomError;
use randkit_core::rng::RandomSource;
use tracing::debug;

use crate::draw::{draw_index, indexable_len};

/// Returns a uniformly chosen element of `ts`.
///
/// # Errors
///
/// Returns `RandomError::OutOfRange` if `ts` is empty, and
/// `RandomError::InvalidArgument` if `ts` is too long to index with 32-bit
/// draws.
pub fn pick<'a, R, T>(rng: &mut R, ts: &'a [T]) -> Result<&'a T, RandomError>
where
    R: RandomSource + ?Sized,
{
    if ts.is_empty() {
        debug!("rejected pick from empty slice");
        return Err(RandomError::OutOfRange(
            "cannot pick from an empty slice".to_owned(),
        ));
    }
    let index = draw_index(rng, indexable_len(ts.len())?)?;
    Ok(&ts[index])
}

/// Like [`pick`], but an empty `ts` yields `fallback(rng)` instead of an
/// error. The fallback may draw from the generator itself.
///
/// # Errors
///
/// Returns `RandomError::InvalidArgument` if a non-empty `ts` is too long to
/// index with 32-bit draws.
pub fn pick_or<R, T, F>(rng: &mut R, ts: &[T], fallback: F) -> Result<T, RandomError>
where
    R: RandomSource + ?Sized,
    T: Clone,
    F: FnOnce(&mut R) -> T,
{
    if ts.is_empty() {
        return Ok(fallback(rng));
    }
    pick(rng, ts).cloned()
}
