//! Checked draws shared by every helper.

use randkit_core::error::RandomError;
use randkit_core::rng::RandomSource;
use tracing::{debug, trace};

/// Draws from `[low, high)`, rejecting values a misbehaving source returns
/// outside that range. Requires `low < high`.
pub(crate) fn draw<R: RandomSource + ?Sized>(
    rng: &mut R,
    low: i32,
    high: i32,
) -> Result<i32, RandomError> {
    let value = rng.next_int(low, high);
    if (low..high).contains(&value) {
        trace!(low, high, value, "drew value");
        Ok(value)
    } else {
        debug!(low, high, value, "random source returned a value outside the range");
        Err(RandomError::InvalidArgument(format!(
            "random source returned {value} outside [{low}, {high})"
        )))
    }
}

/// Draws from `[low, high]`, widening the upper bound by one.
pub(crate) fn draw_inclusive<R: RandomSource + ?Sized>(
    rng: &mut R,
    low: u32,
    high: u32,
) -> Result<u32, RandomError> {
    let out_of_range =
        || RandomError::InvalidArgument(format!("range [{low}, {high}] exceeds 32-bit draws"));
    let lo = i32::try_from(low).map_err(|_| out_of_range())?;
    let hi = i32::try_from(high)
        .ok()
        .and_then(|h| h.checked_add(1))
        .ok_or_else(out_of_range)?;
    let value = draw(rng, lo, hi)?;
    u32::try_from(value).map_err(|_| out_of_range())
}

/// Converts a slice length to the exclusive bound of an index draw.
pub(crate) fn indexable_len(len: usize) -> Result<i32, RandomError> {
    i32::try_from(len).map_err(|_| {
        RandomError::InvalidArgument(format!(
            "cannot index {len} elements with a 32-bit random source"
        ))
    })
}

/// Draws an index in `[0, len)`. Requires `len > 0`.
pub(crate) fn draw_index<R: RandomSource + ?Sized>(
    rng: &mut R,
    len: i32,
) -> Result<usize, RandomError> {
    let index = draw(rng, 0, len)?;
    usize::try_from(index)
        .map_err(|_| RandomError::InvalidArgument(format!("index {index} is negative")))
}
