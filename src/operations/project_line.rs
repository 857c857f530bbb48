use crate::error::{OperationError, Result};
use crate::geometry::{check_finite, GeoPoint, Line};
use crate::math::spherical::destination;
use crate::math::DEFAULT_LINE_LENGTH_M;

/// Projects a line of `distance` metres from `start` along `bearing` degrees.
///
/// Pass [`DEFAULT_LINE_LENGTH_M`] for the standard 100 km line; the
/// [`ProjectLine`] builder applies it when no distance is given.
/// The end point's longitude is not wrapped into `[-180, 180]`.
#[must_use]
pub fn project_line(start: &GeoPoint, bearing: f64, distance: f64) -> Line {
    Line::new(*start, destination(start, bearing, distance))
}

/// Builds a great-circle line from a start point, a bearing and a length.
///
/// The length defaults to [`DEFAULT_LINE_LENGTH_M`].
pub struct ProjectLine {
    start: GeoPoint,
    bearing: f64,
    distance: f64,
}

impl ProjectLine {
    /// Creates a new `ProjectLine` operation.
    ///
    /// * `bearing` - Initial heading in degrees, clockwise from north.
    #[must_use]
    pub fn new(start: GeoPoint, bearing: f64) -> Self {
        Self {
            start,
            bearing,
            distance: DEFAULT_LINE_LENGTH_M,
        }
    }

    /// Overrides the projection length in metres.
    #[must_use]
    pub fn with_distance(mut self, distance: f64) -> Self {
        self.distance = distance;
        self
    }

    /// Executes the projection, returning the line from start to the
    /// projected end point.
    ///
    /// # Errors
    ///
    /// Returns an error if the start point is out of range, the bearing is
    /// not finite, or the distance is negative or not finite.
    pub fn execute(&self) -> Result<Line> {
        self.start.validate()?;
        check_finite("bearing", self.bearing)?;
        check_finite("distance", self.distance)?;
        if self.distance < 0.0 {
            return Err(OperationError::InvalidInput(format!(
                "projection distance must be non-negative, got {}",
                self.distance
            ))
            .into());
        }

        let line = project_line(&self.start, self.bearing, self.distance);
        tracing::debug!(
            bearing = self.bearing,
            distance = self.distance,
            end_lat = line.end().lat,
            end_lng = line.end().lng,
            "projected line"
        );
        Ok(line)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::{GeometryError, GreatCircleError};
    use crate::math::spherical::{haversine_distance, initial_bearing};

    #[test]
    fn default_length_is_one_hundred_km() {
        let start = GeoPoint::new(48.85, 2.35);
        let line = ProjectLine::new(start, 135.0).execute().unwrap();
        assert_eq!(*line.start(), start);
        let d = haversine_distance(line.start(), line.end());
        assert!((d - 100_000.0).abs() < 1e-3, "d={d}");
    }

    #[test]
    fn distance_override() {
        let start = GeoPoint::new(53.0, -4.0);
        let line = ProjectLine::new(start, 90.0)
            .with_distance(50_000.0)
            .execute()
            .unwrap();
        let d = line.length();
        assert!((d - 50_000.0).abs() < 1e-3, "d={d}");
        assert!((line.bearing() - 90.0).abs() < 1e-6, "b={}", line.bearing());
    }

    #[test]
    fn matches_free_function() {
        let start = GeoPoint::new(-33.9, 18.4);
        let op = ProjectLine::new(start, 250.0).with_distance(12_345.0).execute().unwrap();
        assert_eq!(op, project_line(&start, 250.0, 12_345.0));
    }

    #[test]
    fn bearing_is_preserved() {
        let start = GeoPoint::new(10.0, 10.0);
        for &bearing in &[0.0, 30.0, 90.0, 180.0, 271.5, 359.0] {
            let line = project_line(&start, bearing, 250_000.0);
            let b = initial_bearing(&start, line.end());
            let diff = (b - bearing + 540.0) % 360.0 - 180.0;
            assert!(diff.abs() < 1e-6, "bearing={bearing} b={b}");
        }
    }

    #[test]
    fn rejects_negative_distance() {
        let err = ProjectLine::new(GeoPoint::new(0.0, 0.0), 0.0)
            .with_distance(-1.0)
            .execute()
            .unwrap_err();
        assert!(matches!(
            err,
            GreatCircleError::Operation(OperationError::InvalidInput(_))
        ));
    }

    #[test]
    fn rejects_non_finite_bearing() {
        let err = ProjectLine::new(GeoPoint::new(0.0, 0.0), f64::INFINITY)
            .execute()
            .unwrap_err();
        assert!(matches!(
            err,
            GreatCircleError::Geometry(GeometryError::NonFinite {
                parameter: "bearing",
                ..
            })
        ));
    }

    #[test]
    fn rejects_out_of_range_start() {
        let result = ProjectLine::new(GeoPoint::new(95.0, 0.0), 0.0).execute();
        assert!(result.is_err());
    }
}
