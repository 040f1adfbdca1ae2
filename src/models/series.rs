//! Daylight sample and series value types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Minutes in a full civil day.
pub const FULL_DAY_MINUTES: u16 = 1440;

/// Daylight duration for one calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaylightSample {
    /// Calendar day (ISO `YYYY-MM-DD` in JSON)
    pub date: NaiveDate,
    /// Minutes of daylight, 0 to 1440 inclusive
    pub minutes: u16,
}

impl DaylightSample {
    pub fn new(date: NaiveDate, minutes: u16) -> Self {
        Self { date, minutes }
    }
}

/// One city's daylight curve over a calendar year.
///
/// One entry per day, dates strictly increasing, no gaps. City names are
/// unique per chart; the HTTP layer deduplicates before intersection
/// analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CitySeries {
    /// Display name, unique within one chart
    pub city: String,
    /// Ordered day-by-day samples
    pub daylight: Vec<DaylightSample>,
}

impl CitySeries {
    pub fn new(city: impl Into<String>, daylight: Vec<DaylightSample>) -> Self {
        Self {
            city: city.into(),
            daylight,
        }
    }

    /// Sample value at a day index, if the series covers it.
    pub fn minutes_at(&self, index: usize) -> Option<u16> {
        self.daylight.get(index).map(|s| s.minutes)
    }
}

/// A day where two curves cross or several curves nearly coincide.
///
/// Derived chart annotation, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntersectionPoint {
    /// Calendar day of the crossing or cluster
    pub date: NaiveDate,
    /// Representative value: rounded midpoint (2 series) or mean (3+)
    pub minutes: u16,
}

/// Mask polar sentinels before curve comparison.
///
/// A value of exactly 0 (polar night) or exactly 1440 (polar day) is not
/// meaningfully comparable between cities; treating them as equal would
/// fabricate crossings through entire polar seasons.
pub fn comparable_minutes(minutes: u16) -> Option<u16> {
    if minutes == 0 || minutes == FULL_DAY_MINUTES {
        None
    } else {
        Some(minutes)
    }
}
