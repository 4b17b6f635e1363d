//! The settings resolver: a named preset plus per-field overrides.

use serde::{Deserialize, Serialize};
use waqt_types::{
    AsrMethod, CalculationMethod, HighLatitudeMethod, MethodConfig, TimeSlot, TimeSpec,
};

use crate::method::method_config;

/// Effective configuration for one computation.
///
/// Selecting a method replaces the whole angle/minute configuration;
/// overriding any single field flips the active method to `Custom` while
/// leaving the rest of the previously selected preset untouched
/// (inherit-then-override). The Asr juristic method, the high-latitude
/// policy, and the fine-tune offsets are independent of method selection.
///
/// This is a plain value type: `compute` borrows it immutably, so
/// computations stay referentially transparent and copies can be used from
/// multiple threads freely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    method: CalculationMethod,
    config: MethodConfig,
    asr: AsrMethod,
    high_latitude: HighLatitudeMethod,
    /// Per-slot fine-tuning in minutes, applied last before unit conversion.
    offsets: [f64; TimeSlot::COUNT],
}

impl Default for Settings {
    fn default() -> Self {
        Self::new(CalculationMethod::Mwl)
    }
}

impl Settings {
    pub fn new(method: CalculationMethod) -> Self {
        Self {
            method,
            config: method_config(method),
            asr: AsrMethod::default(),
            high_latitude: HighLatitudeMethod::default(),
            offsets: [0.0; TimeSlot::COUNT],
        }
    }

    pub fn method(&self) -> CalculationMethod {
        self.method
    }

    pub fn config(&self) -> &MethodConfig {
        &self.config
    }

    pub fn asr_method(&self) -> AsrMethod {
        self.asr
    }

    pub fn high_latitude_method(&self) -> HighLatitudeMethod {
        self.high_latitude
    }

    pub fn offset(&self, slot: TimeSlot) -> f64 {
        self.offsets[slot.index()]
    }

    pub fn offsets(&self) -> &[f64; TimeSlot::COUNT] {
        &self.offsets
    }

    /// Replaces the active configuration with the named preset.
    pub fn select_method(&mut self, method: CalculationMethod) {
        self.method = method;
        self.config = method_config(method);
    }

    /// Overrides one field as an angle in degrees and switches the active
    /// method to `Custom`.
    ///
    /// Only Imsak, Fajr, Maghrib and Isha carry angles; naming any other
    /// slot is silently ignored. Values are not range-checked.
    pub fn set_angle(&mut self, slot: TimeSlot, degrees: f64) {
        match slot {
            TimeSlot::Imsak => self.config.imsak = TimeSpec::Angle(degrees),
            TimeSlot::Fajr => self.config.fajr = degrees,
            TimeSlot::Maghrib => self.config.maghrib = TimeSpec::Angle(degrees),
            TimeSlot::Isha => self.config.isha = TimeSpec::Angle(degrees),
            _ => return,
        }
        self.method = CalculationMethod::Custom;
    }

    /// Overrides one field as a minute offset and switches the active method
    /// to `Custom`.
    ///
    /// Only Imsak, Dhuhr, Maghrib and Isha carry minute offsets; naming any
    /// other slot is silently ignored.
    pub fn set_minutes(&mut self, slot: TimeSlot, minutes: f64) {
        match slot {
            TimeSlot::Imsak => self.config.imsak = TimeSpec::Minutes(minutes),
            TimeSlot::Dhuhr => self.config.dhuhr = minutes,
            TimeSlot::Maghrib => self.config.maghrib = TimeSpec::Minutes(minutes),
            TimeSlot::Isha => self.config.isha = TimeSpec::Minutes(minutes),
            _ => return,
        }
        self.method = CalculationMethod::Custom;
    }

    pub fn set_asr_method(&mut self, asr: AsrMethod) {
        self.asr = asr;
    }

    pub fn set_high_latitude_method(&mut self, method: HighLatitudeMethod) {
        self.high_latitude = method;
    }

    /// Fine-tunes a single slot by the given minutes.
    pub fn set_offset(&mut self, slot: TimeSlot, minutes: f64) {
        self.offsets[slot.index()] = minutes;
    }

    pub fn set_offsets(&mut self, minutes: [f64; TimeSlot::COUNT]) {
        self.offsets = minutes;
    }

    // Consuming combinators for call-site chaining.

    pub fn with_angle(mut self, slot: TimeSlot, degrees: f64) -> Self {
        self.set_angle(slot, degrees);
        self
    }

    pub fn with_minutes(mut self, slot: TimeSlot, minutes: f64) -> Self {
        self.set_minutes(slot, minutes);
        self
    }

    pub fn with_asr_method(mut self, asr: AsrMethod) -> Self {
        self.asr = asr;
        self
    }

    pub fn with_high_latitude_method(mut self, method: HighLatitudeMethod) -> Self {
        self.high_latitude = method;
        self
    }

    pub fn with_offset(mut self, slot: TimeSlot, minutes: f64) -> Self {
        self.set_offset(slot, minutes);
        self
    }
}
