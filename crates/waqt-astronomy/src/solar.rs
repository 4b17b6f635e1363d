//! Low-precision solar ephemeris and the angle-crossing formulas.

use chrono::NaiveDate;
use waqt_types::GeoCoordinate;

use crate::dmath;
use crate::julian::julian_day;

/// Apparent solar state for one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunPosition {
    /// Equation of time in hours (apparent minus mean solar time).
    pub equation_of_time: f64,
    /// Declination in degrees.
    pub declination: f64,
}

/// Which root of the angle-crossing equation to take.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SunDirection {
    /// Morning events: Imsak, Fajr, Sunrise.
    BeforeNoon,
    /// Evening events: Sunset, Maghrib, Isha, and Asr.
    AfterNoon,
}

/// Sun declination and equation of time at a Julian day.
///
/// Low-precision approximation from the US Naval Observatory almanac:
/// mean anomaly and mean longitude advance linearly from J2000, the ecliptic
/// longitude carries the two leading terms of the equation of center, and
/// right ascension comes from the two-argument arctangent. Every additive
/// angle step is re-normalized; skipping a `fix_angle`/`fix_hour` here
/// produces silently wrong times near range boundaries.
pub fn sun_position(jd: f64) -> SunPosition {
    let d = jd - 2_451_545.0;

    let g = dmath::fix_angle(357.529 + 0.985_600_28 * d);
    let q = dmath::fix_angle(280.459 + 0.985_647_36 * d);
    let l = dmath::fix_angle(q + 1.915 * dmath::sin(g) + 0.020 * dmath::sin(2.0 * g));

    let e = 23.439 - 0.000_000_36 * d;

    let ra = dmath::arctan2(dmath::cos(e) * dmath::sin(l), dmath::cos(l)) / 15.0;
    let equation_of_time = q / 15.0 - dmath::fix_hour(ra);
    let declination = dmath::arcsin(dmath::sin(e) * dmath::sin(l));

    SunPosition { equation_of_time, declination }
}

/// Horizon dip angle for sunrise/sunset at the given elevation in meters.
///
/// `0.833 + 0.0347 * sqrt(elevation)` degrees; an approximation, not a
/// rigorous horizon-distance formula.
pub fn horizon_dip(elevation: f64) -> f64 {
    0.833 + 0.0347 * elevation.sqrt()
}

/// Solar geometry for one observer and one calendar date.
///
/// The stored Julian day is corrected by longitude so that fractional-day
/// arguments are in local solar time; the clock-time correction happens later
/// in post-processing.
#[derive(Debug, Clone, Copy)]
pub struct SolarDay {
    latitude: f64,
    base_jd: f64,
}

impl SolarDay {
    pub fn new(date: NaiveDate, location: &GeoCoordinate) -> Self {
        Self {
            latitude: location.latitude,
            base_jd: julian_day(date) - location.longitude / (15.0 * 24.0),
        }
    }

    /// Local solar noon in hours at the given fraction of the day.
    pub fn mid_day(&self, frac_day: f64) -> f64 {
        let equation = sun_position(self.base_jd + frac_day).equation_of_time;
        dmath::fix_hour(12.0 - equation)
    }

    /// Hour at which the sun is `angle` degrees below the horizon.
    ///
    /// Yields NaN when the latitude/declination combination never reaches the
    /// angle (the cosine argument leaves [-1, 1]); the high-latitude adjustor
    /// is responsible for keeping that out of final output.
    pub fn sun_angle_time(&self, angle: f64, frac_day: f64, direction: SunDirection) -> f64 {
        let declination = sun_position(self.base_jd + frac_day).declination;
        let t = dmath::arccos(
            (-dmath::sin(angle) - dmath::sin(declination) * dmath::sin(self.latitude))
                / (dmath::cos(declination) * dmath::cos(self.latitude)),
        ) / 15.0;
        let noon = self.mid_day(frac_day);
        match direction {
            SunDirection::BeforeNoon => noon - t,
            SunDirection::AfterNoon => noon + t,
        }
    }

    /// Hour at which an object's shadow is `factor` times its height beyond
    /// the shadow length at solar noon.
    pub fn asr_time(&self, factor: f64, frac_day: f64) -> f64 {
        let declination = sun_position(self.base_jd + frac_day).declination;
        let angle = -dmath::arccot(factor + dmath::tan((self.latitude - declination).abs()));
        self.sun_angle_time(angle, frac_day, SunDirection::AfterNoon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(year: i32, month: u32, dom: u32, location: &GeoCoordinate) -> SolarDay {
        SolarDay::new(NaiveDate::from_ymd_opt(year, month, dom).unwrap(), location)
    }

    #[test]
    fn test_declination_at_j2000() {
        // Early January: sun near the December solstice extreme.
        let pos = sun_position(2_451_545.0);
        assert!((pos.declination + 23.0).abs() < 0.5, "declination {}", pos.declination);
    }

    #[test]
    fn test_declination_near_zero_at_equinox() {
        let jd = julian_day(NaiveDate::from_ymd_opt(2024, 3, 20).unwrap());
        let pos = sun_position(jd + 0.5);
        assert!(pos.declination.abs() < 0.5, "declination {}", pos.declination);
    }

    #[test]
    fn test_equation_of_time_bounded() {
        // |EoT| never exceeds ~16.5 minutes over the year.
        let base = julian_day(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        for offset in 0..366 {
            let pos = sun_position(base + offset as f64);
            assert!(pos.equation_of_time.abs() < 0.3, "day {} eot {}", offset, pos.equation_of_time);
        }
    }

    #[test]
    fn test_mid_day_near_twelve() {
        let equator = GeoCoordinate::new(0.0, 0.0);
        let noon = day(2024, 3, 20, &equator).mid_day(0.5);
        assert!((noon - 12.0).abs() < 0.3, "solar noon {}", noon);
    }

    #[test]
    fn test_sunrise_before_sunset() {
        let london = GeoCoordinate::new(51.5074, -0.1278);
        let d = day(2024, 6, 1, &london);
        let dip = horizon_dip(0.0);
        let sunrise = d.sun_angle_time(dip, 6.0 / 24.0, SunDirection::BeforeNoon);
        let sunset = d.sun_angle_time(dip, 18.0 / 24.0, SunDirection::AfterNoon);
        assert!(sunrise < sunset);
        assert!(sunset - sunrise > 12.0, "long June day expected, got {}", sunset - sunrise);
    }

    #[test]
    fn test_polar_angle_never_reached_is_nan() {
        // Midsummer at 80N: the sun stays up, so an 18-degree dawn angle has
        // no solution.
        let svalbard = GeoCoordinate::new(80.0, 15.0);
        let d = day(2024, 6, 21, &svalbard);
        assert!(d.sun_angle_time(18.0, 5.0 / 24.0, SunDirection::BeforeNoon).is_nan());
    }

    #[test]
    fn test_asr_after_noon() {
        let makkah = GeoCoordinate::new(21.4225, 39.8262);
        let d = day(2024, 3, 20, &makkah);
        let noon = d.mid_day(0.5);
        let asr = d.asr_time(1.0, 13.0 / 24.0);
        assert!(asr > noon);
        // Hanafi Asr (longer shadow) is always later than Standard.
        assert!(d.asr_time(2.0, 13.0 / 24.0) > asr);
    }

    #[test]
    fn test_horizon_dip_grows_with_elevation() {
        assert_eq!(horizon_dip(0.0), 0.833);
        assert!((horizon_dip(100.0) - (0.833 + 0.347)).abs() < 1e-12);
    }
}
