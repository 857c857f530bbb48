use crate::error::{GeometryError, Result};
use crate::math::angle::to_radians;
use crate::math::Vector3;

/// A position on the spherical Earth model, in degrees.
///
/// Latitude lies in `[-90, 90]` and longitude in `[-180, 180]`. The
/// computations do not enforce this; use [`GeoPoint::try_new`] or
/// [`GeoPoint::validate`] when the input comes from an untrusted source.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    /// Latitude in degrees, positive north.
    pub lat: f64,
    /// Longitude in degrees, positive east.
    pub lng: f64,
}

impl GeoPoint {
    /// Creates a new point without range checks.
    #[must_use]
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Creates a new point, checking that both coordinates are finite and
    /// within their geographic ranges.
    ///
    /// # Errors
    ///
    /// Returns an error if a coordinate is NaN, infinite, or out of range.
    pub fn try_new(lat: f64, lng: f64) -> Result<Self> {
        let point = Self::new(lat, lng);
        point.validate()?;
        Ok(point)
    }

    /// Checks that both coordinates are finite and within range.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::NonFinite`] or
    /// [`GeometryError::ParameterOutOfRange`].
    pub fn validate(&self) -> Result<()> {
        check_range("lat", self.lat, -90.0, 90.0)?;
        check_range("lng", self.lng, -180.0, 180.0)
    }

    /// Returns the unit position vector (n-vector) of this point.
    ///
    /// The x axis points at (0, 0), the y axis at (0, 90E) and the z axis
    /// at the north pole.
    #[must_use]
    pub fn to_unit_vector(&self) -> Vector3 {
        let lat = to_radians(self.lat);
        let lng = to_radians(self.lng);
        Vector3::new(lat.cos() * lng.cos(), lat.cos() * lng.sin(), lat.sin())
    }
}

/// Rejects non-finite values and values outside `[min, max]`.
fn check_range(parameter: &'static str, value: f64, min: f64, max: f64) -> Result<()> {
    check_finite(parameter, value)?;
    if value < min || value > max {
        return Err(GeometryError::ParameterOutOfRange {
            parameter,
            value,
            min,
            max,
        }
        .into());
    }
    Ok(())
}

/// Rejects NaN and infinities.
pub(crate) fn check_finite(parameter: &'static str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(GeometryError::NonFinite { parameter, value }.into())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::GreatCircleError;
    use crate::math::TOLERANCE;

    #[test]
    fn try_new_accepts_bounds() {
        assert!(GeoPoint::try_new(90.0, 180.0).is_ok());
        assert!(GeoPoint::try_new(-90.0, -180.0).is_ok());
        assert!(GeoPoint::try_new(51.5, -0.12).is_ok());
    }

    #[test]
    fn try_new_rejects_latitude_out_of_range() {
        let err = GeoPoint::try_new(90.5, 0.0).unwrap_err();
        assert!(matches!(
            err,
            GreatCircleError::Geometry(GeometryError::ParameterOutOfRange {
                parameter: "lat",
                ..
            })
        ));
    }

    #[test]
    fn try_new_rejects_longitude_out_of_range() {
        let err = GeoPoint::try_new(0.0, -181.0).unwrap_err();
        assert!(matches!(
            err,
            GreatCircleError::Geometry(GeometryError::ParameterOutOfRange {
                parameter: "lng",
                ..
            })
        ));
    }

    #[test]
    fn try_new_rejects_nan() {
        let err = GeoPoint::try_new(f64::NAN, 0.0).unwrap_err();
        assert!(matches!(
            err,
            GreatCircleError::Geometry(GeometryError::NonFinite { parameter: "lat", .. })
        ));
    }

    #[test]
    fn error_message_names_parameter() {
        let err = GeoPoint::try_new(0.0, 200.0).unwrap_err();
        assert_eq!(
            err.to_string(),
            "parameter lng = 200 is out of range [-180, 180]"
        );
    }

    #[test]
    fn unit_vector_on_equator() {
        let v = GeoPoint::new(0.0, 0.0).to_unit_vector();
        assert!((v - Vector3::x()).norm() < TOLERANCE);
        let v = GeoPoint::new(0.0, 90.0).to_unit_vector();
        assert!((v - Vector3::y()).norm() < 1e-9);
    }

    #[test]
    fn unit_vector_at_north_pole() {
        let v = GeoPoint::new(90.0, 42.0).to_unit_vector();
        assert!((v - Vector3::z()).norm() < 1e-9);
    }

    #[test]
    fn unit_vector_is_normalized() {
        for &(lat, lng) in &[(12.5, 99.0), (-45.0, -170.0), (89.9, 0.1)] {
            let n = GeoPoint::new(lat, lng).to_unit_vector().norm();
            assert!((n - 1.0).abs() < 1e-12, "lat={lat} lng={lng} n={n}");
        }
    }
}
