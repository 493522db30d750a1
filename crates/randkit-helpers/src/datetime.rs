//! Random calendar dates and times.
//!
//! Every field is drawn independently and uniformly over its own range. The
//! day range depends on the year and month already drawn, so results are
//! always valid proleptic Gregorian dates.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use randkit_core::error::RandomError;
use randkit_core::rng::RandomSource;

use crate::draw::draw_inclusive;

/// Earliest year produced by [`next_date`].
pub const MIN_YEAR: u32 = 1;
/// Latest year produced by [`next_date`].
pub const MAX_YEAR: u32 = 9999;

/// Gregorian leap-year rule.
#[must_use]
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `month` (1-based) of `year`.
///
/// # Errors
///
/// Returns `RandomError::InvalidArgument` if `month` is outside `1..=12`.
pub fn days_in_month(year: i32, month: u32) -> Result<u32, RandomError> {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => Ok(31),
        4 | 6 | 9 | 11 => Ok(30),
        2 if is_leap_year(year) => Ok(29),
        2 => Ok(28),
        _ => Err(RandomError::InvalidArgument(format!(
            "month {month} is outside 1..=12"
        ))),
    }
}

fn invalid_field(what: &str) -> RandomError {
    RandomError::InvalidArgument(format!("random source produced an invalid {what}"))
}

/// Draws a date: year in `[1, 9999]`, then month, then a day valid for both.
///
/// # Errors
///
/// Returns `RandomError::InvalidArgument` only if the source returns values
/// outside the ranges it was asked for.
pub fn next_date<R>(rng: &mut R) -> Result<NaiveDate, RandomError>
where
    R: RandomSource + ?Sized,
{
    let year = draw_inclusive(rng, MIN_YEAR, MAX_YEAR)?;
    let year = i32::try_from(year).map_err(|_| invalid_field("year"))?;
    let month = draw_inclusive(rng, 1, 12)?;
    let day = draw_inclusive(rng, 1, days_in_month(year, month)?)?;
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| invalid_field("date"))
}

/// Draws a time of day with millisecond granularity.
///
/// # Errors
///
/// Returns `RandomError::InvalidArgument` only if the source returns values
/// outside the ranges it was asked for.
pub fn next_time<R>(rng: &mut R) -> Result<NaiveTime, RandomError>
where
    R: RandomSource + ?Sized,
{
    let hour = draw_inclusive(rng, 0, 23)?;
    let minute = draw_inclusive(rng, 0, 59)?;
    let second = draw_inclusive(rng, 0, 59)?;
    let milli = draw_inclusive(rng, 0, 999)?;
    NaiveTime::from_hms_milli_opt(hour, minute, second, milli).ok_or_else(|| invalid_field("time"))
}

/// Draws a full timestamp: [`next_date`] followed by [`next_time`].
///
/// # Errors
///
/// Returns `RandomError::InvalidArgument` only if the source returns values
/// outside the ranges it was asked for.
pub fn next_datetime<R>(rng: &mut R) -> Result<NaiveDateTime, RandomError>
where
    R: RandomSource + ?Sized,
{
    let date = next_date(rng)?;
    let time = next_time(rng)?;
    Ok(NaiveDateTime::new(date, time))
}

#[cfg(test)]
mod tests {
    use chrono::{Datelike, Timelike};
    use randkit_core::rng::RandAdapter;
    use randkit_test_support::{MockRng, RecordingRng, SequenceRng};

    use super::*;

    #[test]
    fn test_leap_years() {
        assert!(is_leap_year(2024));
        assert!(is_leap_year(2000));
        assert!(!is_leap_year(2023));
        assert!(!is_leap_year(1900));
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2024, 2), Ok(29));
        assert_eq!(days_in_month(2023, 2), Ok(28));
        assert_eq!(days_in_month(2023, 4), Ok(30));
        assert_eq!(days_in_month(2023, 12), Ok(31));
        assert!(days_in_month(2023, 0).is_err());
        assert!(days_in_month(2023, 13).is_err());
    }

    #[test]
    fn test_days_in_month_matches_chrono() {
        for year in [1, 4, 100, 400, 1900, 2000, 2023, 2024, 9999] {
            for month in 1..=12 {
                let days = days_in_month(year, month).unwrap();
                assert!(NaiveDate::from_ymd_opt(year, month, days).is_some());
                assert!(NaiveDate::from_ymd_opt(year, month, days + 1).is_none());
            }
        }
    }

    #[test]
    fn test_draws_fields_in_order_with_inclusive_ranges() {
        let mut rng = RecordingRng::new(SequenceRng::new(vec![2024, 2, 29, 23, 59, 58, 999]));

        let dt = next_datetime(&mut rng).unwrap();

        assert_eq!(
            rng.ranges(),
            &[
                (1, 10000),
                (1, 13),
                (1, 30),
                (0, 24),
                (0, 60),
                (0, 60),
                (0, 1000),
            ]
        );
        assert_eq!((dt.year(), dt.month(), dt.day()), (2024, 2, 29));
        assert_eq!((dt.hour(), dt.minute(), dt.second()), (23, 59, 58));
        assert_eq!(dt.nanosecond(), 999_000_000);
    }

    #[test]
    fn test_february_of_common_year_limits_day_range() {
        let mut rng = RecordingRng::new(SequenceRng::new(vec![2023, 2, 28]));

        let date = next_date(&mut rng).unwrap();

        assert_eq!(rng.ranges()[2], (1, 29));
        assert_eq!(date, NaiveDate::from_ymd_opt(2023, 2, 28).unwrap());
    }

    #[test]
    fn test_mock_rng_yields_earliest_timestamp() {
        let dt = next_datetime(&mut MockRng).unwrap();
        let expected = NaiveDate::from_ymd_opt(1, 1, 1)
            .unwrap()
            .and_hms_milli_opt(0, 0, 0, 0)
            .unwrap();

        assert_eq!(dt, expected);
    }

    #[test]
    fn test_day_beyond_month_from_source_is_rejected() {
        let mut rng = SequenceRng::new(vec![2023, 2, 29]);

        assert!(matches!(
            next_date(&mut rng),
            Err(RandomError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_seeded_draws_are_valid_and_millisecond_aligned() {
        let mut rng = RandAdapter::seeded(2024);

        for _ in 0..1000 {
            let dt = next_datetime(&mut rng).unwrap();
            assert!((1..=9999).contains(&dt.year()));
            assert!(dt.day() <= days_in_month(dt.year(), dt.month()).unwrap());
            assert_eq!(dt.nanosecond() % 1_000_000, 0);
        }
    }
}
