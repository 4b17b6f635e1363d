//! Gregorian to Julian day conversion (Meeus, Astronomical Algorithms).

use chrono::{Datelike, NaiveDate};

/// Julian day number at 00:00 UT of the given civil date.
pub fn julian_day(date: NaiveDate) -> f64 {
    julian_day_ymd(date.year(), date.month() as i32, date.day() as i32)
}

/// Julian day number from raw year/month/day parts.
///
/// January and February are treated as months 13 and 14 of the previous year
/// per the historical convention.
pub fn julian_day_ymd(year: i32, month: i32, day: i32) -> f64 {
    let (mut year, mut month) = (year, month);
    while month <= 2 {
        year -= 1;
        month += 12;
    }

    let a = (year as f64 / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();

    (365.25 * (year as f64 + 4716.0)).floor() + (30.6001 * (month as f64 + 1.0)).floor()
        + day as f64
        + b
        - 1524.5
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_j2000_epoch() {
        // JD 2451545.0 is 2000-01-01 12:00 UT, so midnight is half a day
        // earlier.
        let date = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
        assert_eq!(julian_day(date), 2_451_544.5);
    }

    #[test]
    fn test_meeus_reference_date() {
        // Example 7.a, Astronomical Algorithms.
        assert_eq!(julian_day_ymd(1987, 1, 27), 2_446_822.5);
        assert_eq!(julian_day_ymd(1988, 6, 19), 2_447_331.5);
    }

    #[test]
    fn test_january_uses_previous_year() {
        // Consecutive civil days across a year boundary differ by one day.
        let dec31 = julian_day_ymd(2023, 12, 31);
        let jan1 = julian_day_ymd(2024, 1, 1);
        assert_eq!(jan1 - dec31, 1.0);
    }
}
