//! Yearly daylight sampling service.
//!
//! Drives the estimator once per calendar day across a full year. Each day is
//! computed independently; there is no inter-day memoization or smoothing, so
//! the output is a pure function of (year, location, timezone, provider).

use chrono_tz::Tz;

use crate::api::GeographicLocation;
use crate::error::Result;
use crate::models::series::DaylightSample;
use crate::models::solar_adapter::SolarProvider;
use crate::models::time::{days_in_year, year_days};
use crate::services::daylight::estimate_daylight_minutes;

/// One sample per calendar day from January 1st through December 31st,
/// dates strictly ascending (365 entries, 366 on leap years).
///
/// Fails fast on a year outside the supported astronomical range; never
/// fails for any in-range day, per the estimator's fallback chain.
pub fn sample_year(
    provider: &dyn SolarProvider,
    year: i32,
    location: &GeographicLocation,
    tz: Tz,
) -> Result<Vec<DaylightSample>> {
    let mut samples = Vec::with_capacity(days_in_year(year) as usize);
    for date in year_days(year)? {
        samples.push(DaylightSample::new(
            date,
            estimate_daylight_minutes(provider, date, location, tz),
        ));
    }
    Ok(samples)
}
