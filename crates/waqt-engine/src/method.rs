//! Static preset table for the named calculation methods.

use waqt_types::{CalculationMethod, MethodConfig, MidnightMethod, TimeSpec};

/// Base parameters of a named method.
///
/// Every preset keeps Imsak at ten minutes before Fajr and Dhuhr at solar
/// noon; the methods differ in their dawn/dusk angles and midnight
/// convention.
pub fn method_config(method: CalculationMethod) -> MethodConfig {
    use TimeSpec::{Angle, Minutes};

    let (fajr, maghrib, isha, midnight) = match method {
        CalculationMethod::Mwl => (18.0, Minutes(0.0), Angle(17.0), MidnightMethod::Standard),
        CalculationMethod::Isna => (15.0, Minutes(0.0), Angle(15.0), MidnightMethod::Standard),
        CalculationMethod::Egypt => (19.5, Minutes(0.0), Angle(17.5), MidnightMethod::Standard),
        CalculationMethod::Makkah => (19.0, Minutes(0.0), Minutes(90.0), MidnightMethod::Standard),
        CalculationMethod::Karachi => (18.0, Minutes(0.0), Angle(18.0), MidnightMethod::Standard),
        CalculationMethod::Tehran => (17.7, Angle(4.5), Angle(14.0), MidnightMethod::Jafari),
        CalculationMethod::Jafari => (16.0, Angle(4.0), Angle(14.0), MidnightMethod::Jafari),
        CalculationMethod::Custom => (15.0, Minutes(0.0), Angle(15.0), MidnightMethod::Standard),
    };

    MethodConfig {
        imsak: Minutes(10.0),
        fajr,
        dhuhr: 0.0,
        maghrib,
        isha,
        midnight,
    }
}
