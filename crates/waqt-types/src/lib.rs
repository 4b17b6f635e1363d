use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Index;
use std::str::FromStr;
use thiserror::Error;

/// Seconds in a civil day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// The nine daily events produced by one computation.
///
/// The declaration order is fixed: it is both the output array index and the
/// refinement order of the iterative solver (Midnight is derived last and
/// never iterated).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TimeSlot {
    Imsak,
    Fajr,
    Sunrise,
    Dhuhr,
    Asr,
    Sunset,
    Maghrib,
    Isha,
    Midnight,
}

impl TimeSlot {
    pub const COUNT: usize = 9;

    /// All slots in computation order.
    pub const ALL: [TimeSlot; Self::COUNT] = [
        TimeSlot::Imsak,
        TimeSlot::Fajr,
        TimeSlot::Sunrise,
        TimeSlot::Dhuhr,
        TimeSlot::Asr,
        TimeSlot::Sunset,
        TimeSlot::Maghrib,
        TimeSlot::Isha,
        TimeSlot::Midnight,
    ];

    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TimeSlot::Imsak => "Imsak",
            TimeSlot::Fajr => "Fajr",
            TimeSlot::Sunrise => "Sunrise",
            TimeSlot::Dhuhr => "Dhuhr",
            TimeSlot::Asr => "Asr",
            TimeSlot::Sunset => "Sunset",
            TimeSlot::Maghrib => "Maghrib",
            TimeSlot::Isha => "Isha",
            TimeSlot::Midnight => "Midnight",
        };
        write!(f, "{}", s)
    }
}

/// Named calculation method presets.
///
/// `Custom` is entered implicitly whenever any individual angle/minute field
/// of the active configuration is overridden.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CalculationMethod {
    /// Muslim World League.
    Mwl,
    /// Islamic Society of North America.
    Isna,
    /// Egyptian General Authority of Survey.
    Egypt,
    /// Umm Al-Qura University, Makkah.
    Makkah,
    /// University of Islamic Sciences, Karachi.
    Karachi,
    /// Shia Ithna-Ashari, Leva Institute, Qum.
    Jafari,
    /// Institute of Geophysics, University of Tehran.
    Tehran,
    /// Custom setting.
    Custom,
}

impl Default for CalculationMethod {
    fn default() -> Self {
        Self::Mwl
    }
}

impl fmt::Display for CalculationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CalculationMethod::Mwl => "MWL",
            CalculationMethod::Isna => "ISNA",
            CalculationMethod::Egypt => "Egypt",
            CalculationMethod::Makkah => "Makkah",
            CalculationMethod::Karachi => "Karachi",
            CalculationMethod::Jafari => "Jafari",
            CalculationMethod::Tehran => "Tehran",
            CalculationMethod::Custom => "Custom",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for CalculationMethod {
    type Err = WaqtError;

    /// Parses a method name from a host collaborator (CLI flag, stored
    /// setting). Case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "mwl" => Ok(Self::Mwl),
            "isna" => Ok(Self::Isna),
            "egypt" => Ok(Self::Egypt),
            "makkah" => Ok(Self::Makkah),
            "karachi" => Ok(Self::Karachi),
            "jafari" => Ok(Self::Jafari),
            "tehran" => Ok(Self::Tehran),
            "custom" => Ok(Self::Custom),
            _ => Err(WaqtError::UnknownMethod { name: s.to_string() }),
        }
    }
}

/// A tagged angle-or-minutes parameter.
///
/// Exactly one representation is active at a time; overriding a field
/// switches its representation rather than keeping a flag next to a raw
/// number.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum TimeSpec {
    /// Sun angle below the horizon, in degrees.
    Angle(f64),
    /// Fixed offset in minutes relative to the field's base event.
    Minutes(f64),
}

impl TimeSpec {
    /// The raw numeric value regardless of representation.
    ///
    /// The iterative solver always feeds this into the angle-crossing
    /// formula; minutes-tagged fields are overwritten afterwards during
    /// post-processing.
    pub const fn value(self) -> f64 {
        match self {
            TimeSpec::Angle(v) | TimeSpec::Minutes(v) => v,
        }
    }

    pub const fn is_minutes(self) -> bool {
        matches!(self, TimeSpec::Minutes(_))
    }

    pub const fn angle(self) -> Option<f64> {
        match self {
            TimeSpec::Angle(v) => Some(v),
            TimeSpec::Minutes(_) => None,
        }
    }

    pub const fn minutes(self) -> Option<f64> {
        match self {
            TimeSpec::Minutes(v) => Some(v),
            TimeSpec::Angle(_) => None,
        }
    }
}

/// Juristic method for the Asr shadow factor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum AsrMethod {
    /// Shafi`i, Maliki, Ja`fari, Hanbali (shadow factor 1).
    Standard,
    /// Hanafi (shadow factor 2).
    Hanafi,
    /// Explicit factor supplied by the caller.
    Minutes(f64),
}

impl AsrMethod {
    pub const fn shadow_factor(self) -> f64 {
        match self {
            AsrMethod::Standard => 1.0,
            AsrMethod::Hanafi => 2.0,
            AsrMethod::Minutes(v) => v,
        }
    }
}

impl Default for AsrMethod {
    fn default() -> Self {
        Self::Standard
    }
}

/// Midnight convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MidnightMethod {
    /// Midpoint of Sunset to Sunrise.
    Standard,
    /// Midpoint of Sunset to Fajr.
    Jafari,
}

impl Default for MidnightMethod {
    fn default() -> Self {
        Self::Standard
    }
}

/// Adjustment policy for latitudes where the required sun angle is never
/// reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HighLatitudeMethod {
    /// Middle of the night.
    NightMiddle,
    /// Angle/60th of the night.
    AngleBased,
    /// 1/7th of the night.
    OneSeventh,
    /// No adjustment; degenerate geometry yields NaN.
    None,
}

impl Default for HighLatitudeMethod {
    fn default() -> Self {
        Self::NightMiddle
    }
}

impl FromStr for HighLatitudeMethod {
    type Err = WaqtError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace(['-', '_'], "").as_str() {
            "nightmiddle" => Ok(Self::NightMiddle),
            "anglebased" | "angle" => Ok(Self::AngleBased),
            "oneseventh" => Ok(Self::OneSeventh),
            "none" => Ok(Self::None),
            _ => Err(WaqtError::UnknownHighLatitudeMethod { name: s.to_string() }),
        }
    }
}

/// Base parameters of one calculation method.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MethodConfig {
    /// Angle below horizon, or minutes before Fajr.
    pub imsak: TimeSpec,
    /// Dawn angle in degrees below the horizon.
    pub fajr: f64,
    /// Minutes after solar noon.
    pub dhuhr: f64,
    /// Angle below horizon, or minutes after Sunset.
    pub maghrib: TimeSpec,
    /// Angle below horizon, or minutes after Maghrib.
    pub isha: TimeSpec,
    pub midnight: MidnightMethod,
}

/// Observer location: latitude/longitude in degrees, elevation in meters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoCoordinate {
    pub latitude: f64,
    pub longitude: f64,
    pub elevation: f64,
}

impl GeoCoordinate {
    /// Creates a sea-level coordinate. Values are not range-checked; the
    /// engine assumes well-formed finite inputs.
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude, elevation: 0.0 }
    }

    pub const fn with_elevation(mut self, meters: f64) -> Self {
        self.elevation = meters;
        self
    }
}

/// The nine computed times, in seconds since local midnight.
///
/// Values at or beyond 86400 mean the event falls after local midnight on
/// the next calendar day; callers interpret this explicitly. With
/// high-latitude adjustment disabled, slots whose geometry is degenerate
/// are NaN.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PrayerTimes([f64; TimeSlot::COUNT]);

impl PrayerTimes {
    pub const fn new(seconds: [f64; TimeSlot::COUNT]) -> Self {
        Self(seconds)
    }

    pub const fn get(&self, slot: TimeSlot) -> f64 {
        self.0[slot.index()]
    }

    pub const fn as_array(&self) -> &[f64; TimeSlot::COUNT] {
        &self.0
    }

    pub const fn into_inner(self) -> [f64; TimeSlot::COUNT] {
        self.0
    }

    /// Splits one slot into civil clock parts, or `None` when the value is
    /// not finite (degenerate geometry with adjustment disabled).
    pub fn clock(&self, slot: TimeSlot) -> Option<ClockTime> {
        ClockTime::from_seconds(self.get(slot))
    }

    pub fn iter(&self) -> impl Iterator<Item = (TimeSlot, f64)> + '_ {
        TimeSlot::ALL.iter().map(move |&slot| (slot, self.get(slot)))
    }

    pub const fn imsak(&self) -> f64 {
        self.get(TimeSlot::Imsak)
    }

    pub const fn fajr(&self) -> f64 {
        self.get(TimeSlot::Fajr)
    }

    pub const fn sunrise(&self) -> f64 {
        self.get(TimeSlot::Sunrise)
    }

    pub const fn dhuhr(&self) -> f64 {
        self.get(TimeSlot::Dhuhr)
    }

    pub const fn asr(&self) -> f64 {
        self.get(TimeSlot::Asr)
    }

    pub const fn sunset(&self) -> f64 {
        self.get(TimeSlot::Sunset)
    }

    pub const fn maghrib(&self) -> f64 {
        self.get(TimeSlot::Maghrib)
    }

    pub const fn isha(&self) -> f64 {
        self.get(TimeSlot::Isha)
    }

    pub const fn midnight(&self) -> f64 {
        self.get(TimeSlot::Midnight)
    }
}

impl Index<TimeSlot> for PrayerTimes {
    type Output = f64;

    fn index(&self, slot: TimeSlot) -> &f64 {
        &self.0[slot.index()]
    }
}

/// A seconds value resolved into wall-clock parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClockTime {
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
    /// Set when the source value was >= 24:00:00, i.e. the event belongs to
    /// the next calendar day.
    pub next_day: bool,
}

impl ClockTime {
    /// Wraps a seconds-since-midnight value into clock parts.
    ///
    /// Returns `None` for non-finite input.
    pub fn from_seconds(seconds: f64) -> Option<Self> {
        if !seconds.is_finite() {
            return None;
        }
        let next_day = seconds >= SECONDS_PER_DAY;
        let wrapped = seconds.rem_euclid(SECONDS_PER_DAY) as u32;
        Some(Self {
            hour: wrapped / 3600,
            minute: wrapped % 3600 / 60,
            second: wrapped % 60,
            next_day,
        })
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }
}

/// Errors from waqt boundary operations.
///
/// The numeric core never fails; these only arise when parsing enumerated
/// options handed over by a host collaborator.
#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WaqtError {
    #[error("Unknown calculation method: {name}")]
    UnknownMethod { name: String },

    #[error("Unknown high-latitude adjustment method: {name}")]
    UnknownHighLatitudeMethod { name: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_order_is_stable() {
        assert_eq!(TimeSlot::Imsak.index(), 0);
        assert_eq!(TimeSlot::Midnight.index(), 8);
        for (i, slot) in TimeSlot::ALL.iter().enumerate() {
            assert_eq!(slot.index(), i);
        }
    }

    #[test]
    fn test_method_parse_roundtrip() {
        for method in [
            CalculationMethod::Mwl,
            CalculationMethod::Isna,
            CalculationMethod::Egypt,
            CalculationMethod::Makkah,
            CalculationMethod::Karachi,
            CalculationMethod::Jafari,
            CalculationMethod::Tehran,
            CalculationMethod::Custom,
        ] {
            let parsed: CalculationMethod = method.to_string().parse().unwrap();
            assert_eq!(parsed, method);
        }
    }

    #[test]
    fn test_unknown_method_is_rejected() {
        let err = "MABIMS".parse::<CalculationMethod>().unwrap_err();
        assert!(matches!(err, WaqtError::UnknownMethod { .. }));
    }

    #[test]
    fn test_high_latitude_parse_accepts_separators() {
        assert_eq!(
            "night_middle".parse::<HighLatitudeMethod>().unwrap(),
            HighLatitudeMethod::NightMiddle
        );
        assert_eq!(
            "angle-based".parse::<HighLatitudeMethod>().unwrap(),
            HighLatitudeMethod::AngleBased
        );
        assert!("midnight".parse::<HighLatitudeMethod>().is_err());
    }

    #[test]
    fn test_time_spec_accessors() {
        let angle = TimeSpec::Angle(18.0);
        assert_eq!(angle.value(), 18.0);
        assert_eq!(angle.angle(), Some(18.0));
        assert_eq!(angle.minutes(), None);
        assert!(!angle.is_minutes());

        let minutes = TimeSpec::Minutes(90.0);
        assert_eq!(minutes.value(), 90.0);
        assert_eq!(minutes.minutes(), Some(90.0));
        assert!(minutes.is_minutes());
    }

    #[test]
    fn test_clock_time_next_day() {
        let t = ClockTime::from_seconds(90_000.0).unwrap();
        assert_eq!((t.hour, t.minute, t.second), (1, 0, 0));
        assert!(t.next_day);

        let t = ClockTime::from_seconds(19_062.0).unwrap();
        assert_eq!((t.hour, t.minute, t.second), (5, 17, 42));
        assert!(!t.next_day);

        assert!(ClockTime::from_seconds(f64::NAN).is_none());
    }

    #[test]
    fn test_prayer_times_indexing() {
        let times = PrayerTimes::new([1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]);
        assert_eq!(times[TimeSlot::Imsak], 1.0);
        assert_eq!(times[TimeSlot::Midnight], 9.0);
        assert_eq!(times.asr(), 5.0);
        assert_eq!(times.iter().count(), TimeSlot::COUNT);
    }

    #[test]
    fn test_method_config_serialize_roundtrip() {
        let config = MethodConfig {
            imsak: TimeSpec::Minutes(10.0),
            fajr: 18.0,
            dhuhr: 0.0,
            maghrib: TimeSpec::Minutes(0.0),
            isha: TimeSpec::Angle(17.0),
            midnight: MidnightMethod::Standard,
        };
        let json = serde_json::to_string(&config).unwrap();
        let back: MethodConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
