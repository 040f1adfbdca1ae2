//! Intersection detection across city daylight curves.
//!
//! With exactly two series the scan looks for sign flips of the day-by-day
//! difference; with three or more it looks for days where all values cluster
//! within a tolerance. Polar sentinel values (exactly 0 or 1440) are masked
//! to missing first so that entire polar seasons do not read as artificial
//! equality.

use crate::models::series::{comparable_minutes, CitySeries, IntersectionPoint};

/// Default cluster tolerance in minutes.
pub const DEFAULT_TOLERANCE: u16 = 1;

/// Sign of the running difference between two curves.
///
/// Explicit three-state tracker for the day-by-day scan: a missing value
/// resets to `Unset`, an exact tie keeps the last non-zero sign, and a flip
/// between `Positive` and `Negative` marks a crossing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignTracker {
    Unset,
    Positive,
    Negative,
}

impl SignTracker {
    /// Forget the running sign (a gap in either curve).
    pub fn reset(&mut self) {
        *self = SignTracker::Unset;
    }

    /// Feed the next day's difference; true exactly when the sign flipped
    /// between two consecutive non-zero observations.
    pub fn observe(&mut self, diff: i32) -> bool {
        let sign = match diff.cmp(&0) {
            std::cmp::Ordering::Greater => SignTracker::Positive,
            std::cmp::Ordering::Less => SignTracker::Negative,
            // ties neither emit nor disturb the tracked sign
            std::cmp::Ordering::Equal => return false,
        };
        let flipped = matches!(
            (*self, sign),
            (SignTracker::Positive, SignTracker::Negative)
                | (SignTracker::Negative, SignTracker::Positive)
        );
        *self = sign;
        flipped
    }
}

/// Days where the given curves cross (2 series) or nearly coincide (3+).
///
/// Precondition: series cover the same aligned dates in the same order; the
/// caller deduplicates city names and caps the series count. Fewer than two
/// series yield no points. Emission follows input date order.
pub fn find_intersections(series: &[CitySeries], tolerance: u16) -> Vec<IntersectionPoint> {
    match series {
        [] | [_] => Vec::new(),
        [a, b] => crossings(a, b),
        _ => clusters(series, tolerance),
    }
}

/// Sign-flip scan over exactly two curves. The point lands on the later of
/// the two days and carries the rounded midpoint of that day's values.
fn crossings(a: &CitySeries, b: &CitySeries) -> Vec<IntersectionPoint> {
    let mut tracker = SignTracker::Unset;
    let mut points = Vec::new();

    for (index, sample) in a.daylight.iter().enumerate() {
        let value_a = comparable_minutes(sample.minutes);
        let value_b = b.minutes_at(index).and_then(comparable_minutes);
        let (Some(va), Some(vb)) = (value_a, value_b) else {
            tracker.reset();
            continue;
        };

        if tracker.observe(i32::from(va) - i32::from(vb)) {
            points.push(IntersectionPoint {
                date: sample.date,
                minutes: (f64::from(va + vb) / 2.0).round() as u16,
            });
        }
    }

    points
}

/// Spread check across three or more curves: emit every day where all
/// values fall within `tolerance` of each other, at their rounded mean.
fn clusters(series: &[CitySeries], tolerance: u16) -> Vec<IntersectionPoint> {
    let axis = &series[0].daylight;
    let mut points = Vec::new();

    'days: for (index, sample) in axis.iter().enumerate() {
        let mut values: Vec<u16> = Vec::with_capacity(series.len());
        for city in series {
            match city.minutes_at(index).and_then(comparable_minutes) {
                Some(v) => values.push(v),
                None => continue 'days,
            }
        }

        let min = values.iter().copied().min().unwrap_or(0);
        let max = values.iter().copied().max().unwrap_or(0);
        if max - min <= tolerance {
            let mean =
                values.iter().map(|&v| f64::from(v)).sum::<f64>() / values.len() as f64;
            points.push(IntersectionPoint {
                date: sample.date,
                minutes: mean.round() as u16,
            });
        }
    }

    points
}
