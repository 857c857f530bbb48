//! Angle conversion and normalization helpers.
//!
//! Bearings are compass headings in degrees, clockwise from true north,
//! normalized into `[0, 360)`.

use std::f64::consts::PI;

/// Converts degrees to radians.
#[must_use]
pub fn to_radians(degrees: f64) -> f64 {
    degrees * PI / 180.0
}

/// Converts radians to degrees.
#[must_use]
pub fn to_degrees(radians: f64) -> f64 {
    radians * 180.0 / PI
}

/// Normalizes an angle in degrees into `[0, 360)`.
///
/// Negative input wraps around, so `-90` becomes `270`.
#[must_use]
pub fn normalize_bearing(degrees: f64) -> f64 {
    ((degrees % 360.0) + 360.0) % 360.0
}

/// Wraps an angle in degrees into `[-180, 180)`.
///
/// Use for signed differences between two bearings.
#[must_use]
pub fn wrap_signed_degrees(degrees: f64) -> f64 {
    normalize_bearing(degrees + 180.0) - 180.0
}

/// Clamps an inverse-trig argument into `[-1, 1]`.
///
/// Values that are mathematically bounded can drift a few ULPs outside the
/// domain of `asin`/`acos`, which would otherwise yield NaN. NaN input is
/// returned unchanged.
#[must_use]
pub fn clamp_unit(value: f64) -> f64 {
    if !(-1.0..=1.0).contains(&value) && !value.is_nan() {
        tracing::trace!(value, "inverse trig argument outside [-1, 1], clamping");
    }
    value.clamp(-1.0, 1.0)
}
