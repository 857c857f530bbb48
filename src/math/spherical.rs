//! Great-circle formulas on a spherical Earth of radius [`EARTH_RADIUS_M`].
//!
//! All functions are total: inverse-trig arguments are clamped into their
//! domains, so rounding drift never turns into NaN. Non-finite input still
//! propagates.

use crate::geometry::GeoPoint;

use super::angle::{clamp_unit, normalize_bearing, to_degrees, to_radians};
use super::EARTH_RADIUS_M;

/// Returns the great-circle distance between two points in metres.
///
/// Uses the haversine formula, which stays accurate for short distances.
/// The result is symmetric in its arguments and zero when they coincide.
#[must_use]
pub fn haversine_distance(start: &GeoPoint, end: &GeoPoint) -> f64 {
    EARTH_RADIUS_M * central_angle(start, end)
}

/// Returns the angular separation of two points in radians.
#[must_use]
pub fn central_angle(start: &GeoPoint, end: &GeoPoint) -> f64 {
    let start_lat = to_radians(start.lat);
    let end_lat = to_radians(end.lat);
    let d_lat = end_lat - start_lat;
    let d_lng = to_radians(end.lng) - to_radians(start.lng);

    // Squared half-chord length; only [0, 1] is meaningful.
    let a = (d_lat / 2.0).sin().powi(2)
        + start_lat.cos() * end_lat.cos() * (d_lng / 2.0).sin().powi(2);
    let a = clamp_haversine(a);

    2.0 * a.sqrt().atan2((1.0 - a).sqrt())
}

/// Clamps the haversine term into `[0, 1]`, leaving NaN untouched.
fn clamp_haversine(a: f64) -> f64 {
    if (0.0..=1.0).contains(&a) || a.is_nan() {
        a
    } else {
        tracing::trace!(a, "haversine term outside [0, 1], clamping");
        a.clamp(0.0, 1.0)
    }
}

/// Returns the initial bearing (forward azimuth) from `start` to `end`.
///
/// The result is in degrees within `[0, 360)`. Coincident points yield `0`.
#[must_use]
pub fn initial_bearing(start: &GeoPoint, end: &GeoPoint) -> f64 {
    let start_lat = to_radians(start.lat);
    let end_lat = to_radians(end.lat);
    let d_lng = to_radians(end.lng) - to_radians(start.lng);

    let y = d_lng.sin() * end_lat.cos();
    let x = start_lat.cos() * end_lat.sin() - start_lat.sin() * end_lat.cos() * d_lng.cos();
    normalize_bearing(to_degrees(y.atan2(x)))
}

/// Solves the direct problem: the point reached by travelling `distance`
/// metres from `start` along the great circle with initial `bearing` degrees.
///
/// The returned longitude is not wrapped and may fall outside `[-180, 180]`.
#[must_use]
pub fn destination(start: &GeoPoint, bearing: f64, distance: f64) -> GeoPoint {
    let start_lat = to_radians(start.lat);
    let start_lng = to_radians(start.lng);
    let theta = to_radians(bearing);
    let delta = distance / EARTH_RADIUS_M;

    let end_lat = clamp_unit(
        start_lat.sin() * delta.cos() + start_lat.cos() * delta.sin() * theta.cos(),
    )
    .asin();
    let end_lng = start_lng
        + (theta.sin() * delta.sin() * start_lat.cos())
            .atan2(delta.cos() - start_lat.sin() * end_lat.sin());

    GeoPoint::new(to_degrees(end_lat), to_degrees(end_lng))
}
