//! Daylight duration estimation service.
//!
//! Computes the minutes of daylight for one calendar day at a given location.
//! The normal path is the sunrise-to-sunset span; above the polar circles the
//! standard formulas yield no sunrise/sunset pair for parts of the year, and
//! the day is classified as full daylight (1440) or full night (0) from the
//! position of the solar transit instead.

use chrono::{DateTime, Duration, NaiveDate};
use chrono_tz::Tz;
use log::debug;

use crate::api::GeographicLocation;
use crate::models::series::FULL_DAY_MINUTES;
use crate::models::solar_adapter::SolarProvider;
use crate::models::time::local_midnight;

/// Minutes of daylight on `date` at `location`, anchored in timezone `tz`.
///
/// Total over valid inputs: every polar edge case resolves through the
/// transit fallback below, never through an error.
///
/// # Fallback chain
///
/// 1. Valid sunrise/sunset pair for the day: minutes between them, rounded.
/// 2. Otherwise re-derive the day around the solar transit (or the day's
///    local midpoint when the transit is unavailable): a valid pair with the
///    transit strictly inside means the sun is up all day (1440), a valid
///    pair without it means full night (0).
/// 3. If the transit-day lookup also yields no pair, probe the transit and
///    one hour to either side, in that order; the first probe lying strictly
///    inside its own day's pair decides full daylight. No match means 0.
pub fn estimate_daylight_minutes(
    provider: &dyn SolarProvider,
    date: NaiveDate,
    location: &GeographicLocation,
    tz: Tz,
) -> u16 {
    let anchor = local_midnight(date, tz);
    let info = provider.day_info(anchor, location.latitude, location.longitude);

    if let Some((rise, set)) = info.valid_pair() {
        return span_minutes(rise, set);
    }

    debug!(
        "no sunrise/sunset pair for {} at ({}, {}); classifying via transit",
        date, location.latitude, location.longitude
    );

    let transit = info
        .transit
        .unwrap_or_else(|| anchor + Duration::hours(12));

    let transit_info = provider.day_info(transit, location.latitude, location.longitude);
    if let Some((rise, set)) = transit_info.valid_pair() {
        return if transit > rise && transit < set {
            FULL_DAY_MINUTES
        } else {
            0
        };
    }

    // Near the exact pole, or on transition days, even the transit-day
    // lookup comes back empty; probe around the transit, first match wins.
    let probes = [
        transit,
        transit - Duration::hours(1),
        transit + Duration::hours(1),
    ];
    for probe in probes {
        let probe_info = provider.day_info(probe, location.latitude, location.longitude);
        if let Some((rise, set)) = probe_info.valid_pair() {
            if probe > rise && probe < set {
                return FULL_DAY_MINUTES;
            }
        }
    }

    0
}

/// Rounded minute count between two instants, clamped to one civil day.
fn span_minutes(rise: DateTime<Tz>, set: DateTime<Tz>) -> u16 {
    let seconds = (set - rise).num_seconds();
    let minutes = (seconds as f64 / 60.0).round() as i64;
    minutes.clamp(0, i64::from(FULL_DAY_MINUTES)) as u16
}
