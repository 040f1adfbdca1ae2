//! Full-year sampling against the SPA provider.

use chrono::{Datelike, NaiveDate};

use daylight_rust::api::GeographicLocation;
use daylight_rust::error::DaylightError;
use daylight_rust::models::solar_adapter::SpaSolarProvider;
use daylight_rust::services::sample_year;

fn helsinki() -> GeographicLocation {
    GeographicLocation::new(60.16952, 24.93545).unwrap()
}

#[test]
fn test_leap_year_sample_count() {
    let provider = SpaSolarProvider::new();
    let samples = sample_year(&provider, 2024, &helsinki(), chrono_tz::Europe::Helsinki).unwrap();
    assert_eq!(samples.len(), 366);
}

#[test]
fn test_regular_year_sample_count() {
    let provider = SpaSolarProvider::new();
    let samples = sample_year(&provider, 2023, &helsinki(), chrono_tz::Europe::Helsinki).unwrap();
    assert_eq!(samples.len(), 365);
}

#[test]
fn test_dates_cover_year_without_gaps() {
    let provider = SpaSolarProvider::new();
    let samples = sample_year(&provider, 2024, &helsinki(), chrono_tz::Europe::Helsinki).unwrap();

    assert_eq!(samples[0].date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
    assert_eq!(
        samples.last().unwrap().date,
        NaiveDate::from_ymd_opt(2024, 12, 31).unwrap()
    );
    for pair in samples.windows(2) {
        assert_eq!(pair[1].date - pair[0].date, chrono::Duration::days(1));
    }
}

#[test]
fn test_helsinki_curve_shape() {
    let provider = SpaSolarProvider::new();
    let samples = sample_year(&provider, 2024, &helsinki(), chrono_tz::Europe::Helsinki).unwrap();

    // Every Helsinki day is partial daylight
    for sample in &samples {
        assert!(
            sample.minutes > 0 && sample.minutes < 1440,
            "{} gave {}",
            sample.date,
            sample.minutes
        );
    }

    // The longest days cluster around June, the shortest around December
    let longest = samples.iter().max_by_key(|s| s.minutes).unwrap();
    let shortest = samples.iter().min_by_key(|s| s.minutes).unwrap();
    assert_eq!(longest.date.month(), 6);
    assert_eq!(shortest.date.month(), 12);
}

#[test]
fn test_arctic_curve_contains_both_sentinels() {
    let provider = SpaSolarProvider::new();
    let utsjoki = GeographicLocation::new(69.9086, 27.0269).unwrap();
    let samples = sample_year(&provider, 2024, &utsjoki, chrono_tz::Europe::Helsinki).unwrap();

    let full_days = samples.iter().filter(|s| s.minutes == 1440).count();
    let dark_days = samples.iter().filter(|s| s.minutes == 0).count();
    // Utsjoki sees roughly two months of each
    assert!(full_days > 30, "only {} polar-day samples", full_days);
    assert!(dark_days > 30, "only {} polar-night samples", dark_days);

    // And ordinary days in between
    let partial_days = samples
        .iter()
        .filter(|s| s.minutes > 0 && s.minutes < 1440)
        .count();
    assert!(partial_days > 150, "only {} partial samples", partial_days);
}

#[test]
fn test_invalid_year_fails_fast() {
    let provider = SpaSolarProvider::new();
    let result = sample_year(&provider, 6001, &helsinki(), chrono_tz::Europe::Helsinki);
    assert_eq!(result.unwrap_err(), DaylightError::InvalidYear(6001));
}

#[test]
fn test_southern_hemisphere_curve_is_inverted() {
    let provider = SpaSolarProvider::new();
    let wellington = GeographicLocation::new(-41.2866, 174.7756).unwrap();
    let samples = sample_year(&provider, 2024, &wellington, chrono_tz::Pacific::Auckland).unwrap();

    let longest = samples.iter().max_by_key(|s| s.minutes).unwrap();
    let shortest = samples.iter().min_by_key(|s| s.minutes).unwrap();
    assert_eq!(longest.date.month(), 12);
    assert_eq!(shortest.date.month(), 6);
}
