use chrono::NaiveDate;
use proptest::prelude::*;
use waqt::{compute, GeoCoordinate, HighLatitudeMethod, Settings, SECONDS_PER_DAY};

fn nth_day(days: i32) -> NaiveDate {
    let base = NaiveDate::from_ymd_opt(2015, 1, 1).unwrap();
    base + chrono::Duration::days(days as i64)
}

proptest! {
    /// Invariant: `compute` never panics, whatever the geometry does.
    #[test]
    fn no_panic_invariant(
        lat in -89.0f64..89.0,
        lon in -180.0f64..180.0,
        days in 0i32..7300,
        elevation in 0.0f64..4000.0,
        timezone in -12.0f64..14.0,
    ) {
        let location = GeoCoordinate::new(lat, lon).with_elevation(elevation);
        let _ = compute(nth_day(days), &location, timezone, &Settings::default());

        let disabled = Settings::default().with_high_latitude_method(HighLatitudeMethod::None);
        let _ = compute(nth_day(days), &location, timezone, &disabled);
    }

    /// Invariant: Sunrise < Dhuhr < Sunset at temperate latitudes, for any
    /// longitude and date.
    #[test]
    fn temperate_ordering(
        lat in -47.5f64..47.5,
        lon in -179.5f64..179.5,
        days in 0i32..7300,
    ) {
        let location = GeoCoordinate::new(lat, lon);
        let times = compute(nth_day(days), &location, 0.0, &Settings::default());

        prop_assert!(times.sunrise() < times.dhuhr(),
            "sunrise {} dhuhr {}", times.sunrise(), times.dhuhr());
        prop_assert!(times.dhuhr() < times.sunset(),
            "dhuhr {} sunset {}", times.dhuhr(), times.sunset());
    }

    /// Invariant: identical immutable inputs give bit-identical output.
    #[test]
    fn idempotence(
        lat in -60.0f64..60.0,
        lon in -179.5f64..179.5,
        days in 0i32..7300,
    ) {
        let location = GeoCoordinate::new(lat, lon);
        let settings = Settings::default();
        let first = compute(nth_day(days), &location, 2.0, &settings);
        let second = compute(nth_day(days), &location, 2.0, &settings);
        prop_assert_eq!(first, second);
    }

    /// Invariant: with the night-middle method, dawn and dusk excursions
    /// never exceed half the geometric night.
    #[test]
    fn night_middle_clamp_bound(lat in 55.0f64..66.0, days in 0i32..7300) {
        let location = GeoCoordinate::new(lat, 0.0);
        let times = compute(nth_day(days), &location, 0.0, &Settings::default());

        prop_assume!(times.sunrise().is_finite() && times.sunset().is_finite());
        let night = (times.sunrise() - times.sunset()).rem_euclid(SECONDS_PER_DAY);

        prop_assert!(times.fajr() >= times.sunrise() - night / 2.0 - 1e-6,
            "fajr {} sunrise {} night {}", times.fajr(), times.sunrise(), night);
        prop_assert!(times.isha() <= times.sunset() + night / 2.0 + 1e-6,
            "isha {} sunset {} night {}", times.isha(), times.sunset(), night);
    }
}
