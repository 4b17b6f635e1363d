//! Day-by-day timetable iterator.

use chrono::NaiveDate;
use waqt_engine::{compute, Settings};
use waqt_types::{GeoCoordinate, PrayerTimes};

/// Iterator over consecutive days' prayer times, end date inclusive.
///
/// Snapshots the settings at construction, so later mutations of the
/// caller's copy do not leak into an iteration already underway.
pub struct Schedule {
    current: NaiveDate,
    end: NaiveDate,
    location: GeoCoordinate,
    timezone: f64,
    settings: Settings,
}

impl Iterator for Schedule {
    type Item = (NaiveDate, PrayerTimes);

    fn next(&mut self) -> Option<Self::Item> {
        if self.current > self.end {
            return None;
        }
        let date = self.current;
        self.current = self.current.succ_opt()?;
        Some((date, compute(date, &self.location, self.timezone, &self.settings)))
    }
}

/// Builds a timetable for the date range `[start, end]`, e.g. the monthly
/// view a host application renders.
///
/// A fixed UTC offset is used for the whole range; hosts that span a DST
/// switch should chunk the range at the transition.
pub fn schedule(
    start: NaiveDate,
    end: NaiveDate,
    location: GeoCoordinate,
    timezone: f64,
    settings: Settings,
) -> Schedule {
    Schedule { current: start, end, location, timezone, settings }
}
