//! Degree-based math on top of the radian `f64` primitives.
//!
//! `fix_angle`/`fix_hour` must be applied after every additive angle or hour
//! operation; near-boundary values silently go wrong otherwise.

pub fn sin(d: f64) -> f64 {
    d.to_radians().sin()
}

pub fn cos(d: f64) -> f64 {
    d.to_radians().cos()
}

pub fn tan(d: f64) -> f64 {
    d.to_radians().tan()
}

pub fn arcsin(x: f64) -> f64 {
    x.asin().to_degrees()
}

pub fn arccos(x: f64) -> f64 {
    x.acos().to_degrees()
}

pub fn arctan(x: f64) -> f64 {
    x.atan().to_degrees()
}

pub fn arccot(x: f64) -> f64 {
    (1.0 / x).atan().to_degrees()
}

pub fn arctan2(y: f64, x: f64) -> f64 {
    y.atan2(x).to_degrees()
}

/// Normalizes an angle into [0, 360).
pub fn fix_angle(a: f64) -> f64 {
    fix(a, 360.0)
}

/// Normalizes an hour value into [0, 24).
pub fn fix_hour(h: f64) -> f64 {
    fix(h, 24.0)
}

pub fn fix(a: f64, b: f64) -> f64 {
    let a = a - b * (a / b).floor();
    if a < 0.0 { a + b } else { a }
}
