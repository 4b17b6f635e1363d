//! # Waqt
//!
//! An astronomical prayer time calculation engine.
//!
//! Given a civil date, a geographic location, a UTC offset, and a
//! calculation method, `waqt` produces the local clock time in seconds since
//! local midnight for nine daily events: Imsak, Fajr, Sunrise, Dhuhr, Asr,
//! Sunset, Maghrib, Isha and Midnight.
//!
//! This crate is a facade over the `waqt` ecosystem:
//!
//! - `waqt-types`: slots, methods, configuration and output types
//! - `waqt-astronomy`: solar geometry (declination, equation of time)
//! - `waqt-engine`: the iterative solver and settings resolver
//!
//! ## Usage
//!
//! ```rust
//! use chrono::NaiveDate;
//! use waqt::prelude::*;
//!
//! let date = NaiveDate::from_ymd_opt(2024, 3, 20).unwrap();
//! let makkah = GeoCoordinate::new(21.4225, 39.8262).with_elevation(277.0);
//! let settings = Settings::new(CalculationMethod::Makkah);
//!
//! let times = compute(date, &makkah, 3.0, &settings);
//! let fajr = times.clock(TimeSlot::Fajr).unwrap();
//! println!("Fajr: {fajr}");
//! assert!(times.sunrise() < times.dhuhr() && times.dhuhr() < times.sunset());
//! ```

pub mod extension;
pub mod schedule;

pub use waqt_astronomy as astronomy;
pub use waqt_engine::{compute, method_config, timezone_offset, timezone_offset_for_date, Settings};
pub use waqt_types::{
    AsrMethod, CalculationMethod, ClockTime, GeoCoordinate, HighLatitudeMethod, MethodConfig,
    MidnightMethod, PrayerTimes, TimeSlot, TimeSpec, WaqtError, SECONDS_PER_DAY,
};

pub use extension::PrayerDateExt;
pub use schedule::{schedule, Schedule};

pub mod prelude {
    pub use crate::extension::PrayerDateExt;
    pub use crate::schedule::schedule;
    pub use crate::{compute, timezone_offset, timezone_offset_for_date, Settings};
    pub use waqt_types::{
        AsrMethod, CalculationMethod, ClockTime, GeoCoordinate, HighLatitudeMethod, MethodConfig,
        MidnightMethod, PrayerTimes, TimeSlot, TimeSpec, WaqtError,
    };
}

use chrono::{Local, NaiveDate};

/// Computes today's times using the host clock and timezone database.
///
/// Convenience for hosts that do not track the timezone themselves; the
/// returned date is the local civil date the times belong to.
pub fn compute_today(location: &GeoCoordinate, settings: &Settings) -> (NaiveDate, PrayerTimes) {
    let now = Local::now().naive_local();
    let timezone = timezone_offset(now);
    let date = now.date();
    (date, compute(date, location, timezone, settings))
}
