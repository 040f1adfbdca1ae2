//! Calendar-day and timezone anchoring helpers.
//!
//! The estimator works on civil calendar days: each sample is anchored at the
//! day's local midnight in the query timezone, and the solar provider derives
//! sunrise/sunset for the day containing that instant.

use chrono::{Datelike, Duration, LocalResult, NaiveDate, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;

use crate::error::{DaylightError, Result};

/// Earliest year the solar position algorithm supports.
pub const MIN_YEAR: i32 = -2000;
/// Latest year the solar position algorithm supports.
pub const MAX_YEAR: i32 = 6000;

/// Validate that a year is inside the supported astronomical range.
pub fn check_year(year: i32) -> Result<()> {
    if (MIN_YEAR..=MAX_YEAR).contains(&year) {
        Ok(())
    } else {
        Err(DaylightError::InvalidYear(year))
    }
}

/// Number of calendar days in a year (365 or 366).
pub fn days_in_year(year: i32) -> u32 {
    if NaiveDate::from_ymd_opt(year, 2, 29).is_some() {
        366
    } else {
        365
    }
}

/// Ordered iterator over every calendar day of a year, January 1st through
/// December 31st inclusive.
pub fn year_days(year: i32) -> Result<impl Iterator<Item = NaiveDate>> {
    check_year(year)?;
    let first = NaiveDate::from_ymd_opt(year, 1, 1).ok_or(DaylightError::InvalidYear(year))?;
    Ok(first.iter_days().take_while(move |d| d.year() == year))
}

/// Parse a timezone identifier from the tz database.
pub fn parse_timezone(name: &str) -> Result<Tz> {
    name.parse::<Tz>()
        .map_err(|_| DaylightError::UnknownTimezone(name.to_string()))
}

/// The instant a calendar day starts in the given timezone.
///
/// When a DST transition skips local midnight, the day starts at the first
/// valid local instant after 00:00 (transitions are at most a few hours).
pub fn local_midnight(date: NaiveDate, tz: Tz) -> chrono::DateTime<Tz> {
    let midnight = date.and_time(NaiveTime::MIN);
    match tz.from_local_datetime(&midnight) {
        LocalResult::Single(dt) => dt,
        LocalResult::Ambiguous(earliest, _) => earliest,
        LocalResult::None => (1..=3)
            .find_map(|h| {
                tz.from_local_datetime(&(midnight + Duration::hours(h)))
                    .earliest()
            })
            .unwrap_or_else(|| Utc.from_utc_datetime(&midnight).with_timezone(&tz)),
    }
}
