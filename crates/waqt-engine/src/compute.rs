//! The iterative time solver and its post-processing pipeline.

use chrono::NaiveDate;
use waqt_astronomy::dmath;
use waqt_astronomy::{horizon_dip, SolarDay, SunDirection};
use waqt_types::{GeoCoordinate, HighLatitudeMethod, MidnightMethod, PrayerTimes, TimeSlot, TimeSpec};

use crate::settings::Settings;

const IMSAK: usize = TimeSlot::Imsak.index();
const FAJR: usize = TimeSlot::Fajr.index();
const SUNRISE: usize = TimeSlot::Sunrise.index();
const DHUHR: usize = TimeSlot::Dhuhr.index();
const ASR: usize = TimeSlot::Asr.index();
const SUNSET: usize = TimeSlot::Sunset.index();
const MAGHRIB: usize = TimeSlot::Maghrib.index();
const ISHA: usize = TimeSlot::Isha.index();
const MIDNIGHT: usize = TimeSlot::Midnight.index();

/// Refinement passes. Solar geometry drifts by well under a minute across
/// the few-minute correction one pass applies, so a single pass converges.
const NUM_ITERATIONS: usize = 1;

/// Rough starting estimates in hours for the eight iterated slots.
const RAW_ESTIMATES: [f64; 8] = [5.0, 5.0, 6.0, 12.0, 13.0, 18.0, 18.0, 18.0];

/// Computes the nine daily times in seconds since local midnight.
///
/// A pure function of its arguments; the engine holds no state between
/// calls and performs no I/O.
/// Values at or past 86400 mean the event falls on the next calendar day.
/// With `HighLatitudeMethod::None`, slots whose sun angle is never reached
/// at this latitude/date come back as NaN.
pub fn compute(
    date: NaiveDate,
    location: &GeoCoordinate,
    timezone: f64,
    settings: &Settings,
) -> PrayerTimes {
    let day = SolarDay::new(date, location);
    let dip = horizon_dip(location.elevation);

    let mut hours = [0.0; TimeSlot::COUNT];
    hours[..8].copy_from_slice(&RAW_ESTIMATES);

    for _ in 0..NUM_ITERATIONS {
        refine(&mut hours, &day, dip, settings);
    }

    adjust(&mut hours, timezone, location.longitude, settings);
    hours[MIDNIGHT] = midnight(&hours, settings.config().midnight);

    for (value, offset) in hours.iter_mut().zip(settings.offsets()) {
        *value = (*value + offset / 60.0) * 3600.0;
    }

    PrayerTimes::new(hours)
}

/// One refinement pass: re-derives every slot from the solar geometry at the
/// previous pass's estimate, converted to a fraction of the day.
///
/// Minutes-tagged Imsak/Maghrib/Isha still run through the angle formula
/// here with their raw value; post-processing overwrites them afterwards.
fn refine(hours: &mut [f64; TimeSlot::COUNT], day: &SolarDay, dip: f64, settings: &Settings) {
    for value in &mut hours[..8] {
        *value /= 24.0;
    }

    let config = settings.config();
    hours[IMSAK] = day.sun_angle_time(config.imsak.value(), hours[IMSAK], SunDirection::BeforeNoon);
    hours[FAJR] = day.sun_angle_time(config.fajr, hours[FAJR], SunDirection::BeforeNoon);
    hours[SUNRISE] = day.sun_angle_time(dip, hours[SUNRISE], SunDirection::BeforeNoon);
    hours[DHUHR] = day.mid_day(hours[DHUHR]);
    hours[ASR] = day.asr_time(settings.asr_method().shadow_factor(), hours[ASR]);
    hours[SUNSET] = day.sun_angle_time(dip, hours[SUNSET], SunDirection::AfterNoon);
    hours[MAGHRIB] = day.sun_angle_time(config.maghrib.value(), hours[MAGHRIB], SunDirection::AfterNoon);
    hours[ISHA] = day.sun_angle_time(config.isha.value(), hours[ISHA], SunDirection::AfterNoon);
}

/// Timezone correction, high-latitude clamping, and the minute-based field
/// overrides, in that order.
///
/// The ordering is load-bearing: a minutes-tagged Imsak must derive from the
/// final, timezone-corrected (and possibly clamped) Fajr, not the raw
/// geometric one.
fn adjust(hours: &mut [f64; TimeSlot::COUNT], timezone: f64, longitude: f64, settings: &Settings) {
    // The solar day was longitude-corrected; shift back to clock time.
    let correction = timezone - longitude / 15.0;
    for value in &mut hours[..8] {
        *value += correction;
    }

    if settings.high_latitude_method() != HighLatitudeMethod::None {
        adjust_high_latitudes(hours, settings);
    }

    let config = settings.config();
    if let TimeSpec::Minutes(m) = config.imsak {
        hours[IMSAK] = hours[FAJR] - m / 60.0;
    }
    if let TimeSpec::Minutes(m) = config.maghrib {
        hours[MAGHRIB] = hours[SUNSET] + m / 60.0;
    }
    if let TimeSpec::Minutes(m) = config.isha {
        hours[ISHA] = hours[MAGHRIB] + m / 60.0;
    }
    hours[DHUHR] += config.dhuhr / 60.0;
}

/// Caps the dawn/dusk excursions to a portion of the geometric night when
/// the configured sun angle is never reached (or would push past it).
fn adjust_high_latitudes(hours: &mut [f64; TimeSlot::COUNT], settings: &Settings) {
    let night = time_diff(hours[SUNSET], hours[SUNRISE]);
    let config = settings.config();
    let method = settings.high_latitude_method();

    hours[IMSAK] = clamp_to_portion(
        hours[IMSAK],
        hours[SUNRISE],
        config.imsak.value(),
        night,
        SunDirection::BeforeNoon,
        method,
    );
    hours[FAJR] = clamp_to_portion(
        hours[FAJR],
        hours[SUNRISE],
        config.fajr,
        night,
        SunDirection::BeforeNoon,
        method,
    );
    hours[ISHA] = clamp_to_portion(
        hours[ISHA],
        hours[SUNSET],
        config.isha.value(),
        night,
        SunDirection::AfterNoon,
        method,
    );
    hours[MAGHRIB] = clamp_to_portion(
        hours[MAGHRIB],
        hours[SUNSET],
        config.maghrib.value(),
        night,
        SunDirection::AfterNoon,
        method,
    );
}

/// Clamps a time to `base ± portion` when it strayed beyond the night
/// portion or degenerated into NaN.
fn clamp_to_portion(
    time: f64,
    base: f64,
    angle: f64,
    night: f64,
    direction: SunDirection,
    method: HighLatitudeMethod,
) -> f64 {
    let portion = night_portion(angle, night, method);
    let excursion = match direction {
        SunDirection::BeforeNoon => time_diff(time, base),
        SunDirection::AfterNoon => time_diff(base, time),
    };
    if !time.is_finite() || excursion > portion {
        match direction {
            SunDirection::BeforeNoon => base - portion,
            SunDirection::AfterNoon => base + portion,
        }
    } else {
        time
    }
}

/// The ceiling a dawn/dusk time may stray from its base event.
fn night_portion(angle: f64, night: f64, method: HighLatitudeMethod) -> f64 {
    let portion = match method {
        HighLatitudeMethod::AngleBased => angle / 60.0,
        HighLatitudeMethod::OneSeventh => 1.0 / 7.0,
        _ => 0.5,
    };
    portion * night
}

fn midnight(hours: &[f64; TimeSlot::COUNT], method: MidnightMethod) -> f64 {
    match method {
        MidnightMethod::Jafari => hours[SUNSET] + time_diff(hours[MAGHRIB], hours[FAJR]) / 2.0,
        MidnightMethod::Standard => hours[SUNSET] + time_diff(hours[SUNSET], hours[SUNRISE]) / 2.0,
    }
}

/// Wrapped positive difference from `from` to `to` in hours.
fn time_diff(from: f64, to: f64) -> f64 {
    dmath::fix_hour(to - from)
}
