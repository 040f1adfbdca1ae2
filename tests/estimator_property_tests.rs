//! Property tests for the estimator's temperate-latitude invariants.

use chrono::NaiveDate;
use chrono_tz::Tz;
use proptest::prelude::*;

use daylight_rust::api::GeographicLocation;
use daylight_rust::models::solar_adapter::SpaSolarProvider;
use daylight_rust::services::estimate_daylight_minutes;

/// Nominal timezone for a longitude, so that the civil day roughly tracks
/// the solar day. Etc/GMT zone signs are POSIX-inverted: Etc/GMT-3 is UTC+3.
fn nominal_timezone(lon: f64) -> Tz {
    let offset = (lon / 15.0).round() as i32;
    let name = match offset {
        0 => "Etc/GMT".to_string(),
        o if o > 0 => format!("Etc/GMT-{}", o),
        o => format!("Etc/GMT+{}", -o),
    };
    name.parse().expect("Etc/GMT zones cover every offset")
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn temperate_days_are_always_partial(
        lat in -59.0f64..59.0,
        lon in -179.9f64..179.9,
        day_offset in 0i64..365,
    ) {
        let provider = SpaSolarProvider::new();
        let location = GeographicLocation::new(lat, lon).unwrap();
        let date = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap()
            + chrono::Duration::days(day_offset);
        let tz = nominal_timezone(lon);

        let minutes = estimate_daylight_minutes(&provider, date, &location, tz);
        prop_assert!(
            minutes > 0 && minutes < 1440,
            "({}, {}) on {} in {} gave {}",
            lat, lon, date, tz, minutes
        );
    }

    #[test]
    fn estimates_are_deterministic(
        lat in -89.0f64..89.0,
        lon in -179.9f64..179.9,
        day_offset in 0i64..365,
    ) {
        let provider = SpaSolarProvider::new();
        let location = GeographicLocation::new(lat, lon).unwrap();
        let date = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap()
            + chrono::Duration::days(day_offset);
        let tz = nominal_timezone(lon);

        let first = estimate_daylight_minutes(&provider, date, &location, tz);
        let second = estimate_daylight_minutes(&provider, date, &location, tz);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn hemispheres_mirror_across_solstices(
        lat in 5.0f64..55.0,
        lon in -20.0f64..20.0,
    ) {
        let provider = SpaSolarProvider::new();
        let north = GeographicLocation::new(lat, lon).unwrap();
        let south = GeographicLocation::new(-lat, lon).unwrap();
        let june = NaiveDate::from_ymd_opt(2023, 6, 21).unwrap();
        let tz = nominal_timezone(lon);

        let north_minutes = estimate_daylight_minutes(&provider, june, &north, tz);
        let south_minutes = estimate_daylight_minutes(&provider, june, &south, tz);
        // On the June solstice the northern site has the longer day, and the
        // two day lengths mirror around twelve hours up to the refraction
        // margin (each site gains a few minutes at sunrise and sunset).
        prop_assert!(north_minutes > south_minutes);
        let total = i32::from(north_minutes) + i32::from(south_minutes);
        prop_assert!(
            (1440..=1500).contains(&total),
            "north {} + south {} = {}",
            north_minutes, south_minutes, total
        );
    }
}
