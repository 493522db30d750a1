//! Random-length collections drawn from a source slice.

use randkit_core::error::RandomError;
use randkit_core::rng::RandomSource;
use tracing::{debug, trace};

use crate::draw::{draw, draw_index, indexable_len};
use crate::options::LengthBounds;

/// Builds a collection whose length is drawn uniformly from
/// `[bounds.min, bounds.max)`, each element being `map` applied to a
/// uniformly chosen element of `source` (with replacement).
///
/// When `min == max` the length range is empty: nothing is drawn and the
/// result is empty.
///
/// # Errors
///
/// Returns `RandomError::InvalidArgument` if the bounds are negative or
/// inverted, if `source` is empty while `max > 0`, or if `source` is too long
/// to index with 32-bit draws. Every precondition is checked before the
/// first draw.
pub fn next_collection<R, T, U, F>(
    rng: &mut R,
    source: &[T],
    bounds: LengthBounds,
    mut map: F,
) -> Result<Vec<U>, RandomError>
where
    R: RandomSource + ?Sized,
    F: FnMut(&T) -> U,
{
    bounds.validate()?;
    if source.is_empty() && bounds.max > 0 {
        debug!(max = bounds.max, "rejected empty source");
        return Err(RandomError::InvalidArgument(format!(
            "cannot draw elements from an empty source (max = {})",
            bounds.max
        )));
    }
    let source_len = indexable_len(source.len())?;

    if bounds.min == bounds.max {
        return Ok(Vec::new());
    }
    let length = usize::try_from(draw(rng, bounds.min, bounds.max)?).map_err(|_| {
        RandomError::InvalidArgument("drawn length is negative".to_owned())
    })?;
    trace!(length, source_len, "generating collection");

    let mut out = Vec::with_capacity(length);
    for _ in 0..length {
        let index = draw_index(rng, source_len)?;
        out.push(map(&source[index]));
    }
    Ok(out)
}

/// [`next_collection`] with the identity map.
///
/// # Errors
///
/// Same as [`next_collection`].
pub fn next_collection_cloned<R, T>(
    rng: &mut R,
    source: &[T],
    bounds: LengthBounds,
) -> Result<Vec<T>, RandomError>
where
    R: RandomSource + ?Sized,
    T: Clone,
{
    next_collection(rng, source, bounds, T::clone)
}

#[cfg(test)]
mod tests {
    use randkit_test_support::{MockRng, RecordingRng, SequenceRng};

    use super::*;

    #[test]
    fn test_maps_drawn_elements_in_order() {
        // length 3, then indices 2, 0, 1
        let mut rng = SequenceRng::new(vec![3, 2, 0, 1]);
        let source = [10, 20, 30];

        let result = next_collection(&mut rng, &source, LengthBounds::new(0, 5), |x| x * 2);

        assert_eq!(result, Ok(vec![60, 20, 40]));
        assert_eq!(rng.remaining(), 0);
    }

    #[test]
    fn test_requests_length_then_index_ranges() {
        let mut rng = RecordingRng::new(SequenceRng::new(vec![2, 0, 0]));
        let source = ["a", "b", "c", "d"];

        let result = next_collection_cloned(&mut rng, &source, LengthBounds::new(1, 9));

        assert_eq!(result, Ok(vec!["a", "a"]));
        assert_eq!(rng.ranges(), &[(1, 9), (0, 4), (0, 4)]);
    }

    #[test]
    fn test_equal_bounds_yield_empty_without_drawing() {
        let mut rng = RecordingRng::new(MockRng);

        let result = next_collection_cloned(&mut rng, &[1, 2, 3], LengthBounds::new(4, 4));

        assert_eq!(result, Ok(Vec::new()));
        assert_eq!(rng.draw_count(), 0);
    }

    #[test]
    fn test_empty_source_with_zero_bounds_is_empty() {
        let mut rng = RecordingRng::new(MockRng);
        let source: [u8; 0] = [];

        let result = next_collection_cloned(&mut rng, &source, LengthBounds::new(0, 0));

        assert_eq!(result, Ok(Vec::new()));
        assert_eq!(rng.draw_count(), 0);
    }

    #[test]
    fn test_empty_source_with_positive_max_fails_without_drawing() {
        let mut rng = RecordingRng::new(MockRng);
        let source: [u8; 0] = [];

        let result = next_collection_cloned(&mut rng, &source, LengthBounds::new(0, 3));

        assert!(matches!(result, Err(RandomError::InvalidArgument(_))));
        assert_eq!(rng.draw_count(), 0);
    }

    #[test]
    fn test_invalid_bounds_fail_without_drawing() {
        let mut rng = RecordingRng::new(MockRng);

        for bounds in [
            LengthBounds::new(-1, 3),
            LengthBounds::new(0, -1),
            LengthBounds::new(5, 2),
        ] {
            let result = next_collection_cloned(&mut rng, &[1], bounds);
            assert!(matches!(result, Err(RandomError::InvalidArgument(_))));
        }
        assert_eq!(rng.draw_count(), 0);
    }

    #[test]
    fn test_map_is_invoked_once_per_element() {
        let mut rng = SequenceRng::new(vec![3, 0, 0, 0]);
        let mut calls = 0;

        let result = next_collection(&mut rng, &['x'], LengthBounds::default(), |c| {
            calls += 1;
            c.to_string()
        });

        assert_eq!(result.map(|v| v.len()), Ok(3));
        assert_eq!(calls, 3);
    }

    #[test]
    fn test_out_of_range_source_value_fails_without_partial_result() {
        // length 2, index 0 ok, index 7 out of range for a 2-element source
        let mut rng = SequenceRng::new(vec![2, 0, 7]);

        let result = next_collection_cloned(&mut rng, &[1, 2], LengthBounds::new(0, 3));

        assert!(matches!(result, Err(RandomError::InvalidArgument(_))));
    }
}
