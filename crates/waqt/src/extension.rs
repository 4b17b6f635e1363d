//! Extension trait for `NaiveDate`.

use chrono::NaiveDate;
use waqt_engine::{compute, Settings};
use waqt_types::{GeoCoordinate, PrayerTimes};

/// Extends `chrono::NaiveDate` with prayer time computation.
pub trait PrayerDateExt {
    /// Computes the nine times for this date at the given location and
    /// UTC offset.
    fn prayer_times(&self, location: &GeoCoordinate, timezone: f64, settings: &Settings)
        -> PrayerTimes;

    /// Same with default settings (MWL, Standard Asr, night-middle
    /// high-latitude adjustment).
    fn prayer_times_default(&self, location: &GeoCoordinate, timezone: f64) -> PrayerTimes;
}

impl PrayerDateExt for NaiveDate {
    fn prayer_times(
        &self,
        location: &GeoCoordinate,
        timezone: f64,
        settings: &Settings,
    ) -> PrayerTimes {
        compute(*self, location, timezone, settings)
    }

    fn prayer_times_default(&self, location: &GeoCoordinate, timezone: f64) -> PrayerTimes {
        compute(*self, location, timezone, &Settings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_matches_free_function() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 20).unwrap();
        let cairo = GeoCoordinate::new(30.0444, 31.2357);
        let settings = Settings::default();

        let via_trait = date.prayer_times(&cairo, 2.0, &settings);
        let via_fn = compute(date, &cairo, 2.0, &settings);
        assert_eq!(via_trait, via_fn);
        assert_eq!(via_trait, date.prayer_times_default(&cairo, 2.0));
    }
}
