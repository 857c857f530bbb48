use crate::error::{GeometryError, Result};
use crate::geometry::{GeoPoint, Line};
use crate::math::angle::{clamp_unit, to_radians, wrap_signed_degrees};
use crate::math::spherical::{destination, haversine_distance, initial_bearing};
use crate::math::{EARTH_RADIUS_M, TOLERANCE};

/// Position of a point relative to a great-circle line.
///
/// Distances and the bearing are truncated toward zero, not rounded. Every
/// field is NaN when the input point or line is not finite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeviationResult {
    /// Foot of the perpendicular from the point onto the line's great circle.
    pub along_track_point: GeoPoint,
    /// Distance from the line's start to `along_track_point`, in metres.
    ///
    /// Unsigned: a point behind the start projects forward by the same amount.
    pub along_track_distance: f64,
    /// Perpendicular distance from the point to the great circle, in metres.
    pub cross_track_distance: f64,
    /// Bearing from the point towards `along_track_point`, in degrees.
    pub bearing_to_line: f64,
}

/// Computes cross-track and along-track metrics of `point` relative to `line`.
///
/// Inverse-trig arguments are clamped, so a point lying on the line yields a
/// zero cross-track distance rather than NaN. No range checks are made and
/// non-finite input yields NaN in every field; see [`DeviationMetrics`] for
/// the validated form.
#[must_use]
pub fn deviation_metrics(point: &GeoPoint, line: &Line) -> DeviationResult {
    let start = line.start();
    let d_start_to_point = haversine_distance(start, point);
    let bearing_start_to_point = initial_bearing(start, point);
    let bearing_start_to_end = initial_bearing(start, line.end());

    let angular_difference =
        to_radians(wrap_signed_degrees(bearing_start_to_point - bearing_start_to_end));
    let delta = d_start_to_point / EARTH_RADIUS_M;

    // Signed: negative left of the direction of travel.
    let cross_track = clamp_unit(delta.sin() * angular_difference.sin()).asin() * EARTH_RADIUS_M;
    let along_track =
        clamp_unit(delta.cos() / (cross_track / EARTH_RADIUS_M).cos()).acos() * EARTH_RADIUS_M;

    let along_track_point = destination(start, bearing_start_to_end, along_track);
    let bearing_to_line = initial_bearing(point, &along_track_point);

    DeviationResult {
        along_track_point,
        along_track_distance: along_track.trunc(),
        cross_track_distance: cross_track.abs().trunc(),
        bearing_to_line: bearing_to_line.trunc(),
    }
}

/// Measures how far a point has strayed from a great-circle line.
pub struct DeviationMetrics {
    point: GeoPoint,
    line: Line,
}

impl DeviationMetrics {
    /// Creates a new `DeviationMetrics` query.
    #[must_use]
    pub fn new(point: GeoPoint, line: Line) -> Self {
        Self { point, line }
    }

    /// Executes the query.
    ///
    /// # Errors
    ///
    /// Returns an error if any coordinate is out of range or not finite, or
    /// if the line's endpoints coincide or are antipodal, which leaves its
    /// great circle undefined.
    pub fn execute(&self) -> Result<DeviationResult> {
        self.point.validate()?;
        self.line.start().validate()?;
        self.line.end().validate()?;

        let normal = self
            .line
            .start()
            .to_unit_vector()
            .cross(&self.line.end().to_unit_vector());
        if normal.norm() < TOLERANCE {
            return Err(GeometryError::Degenerate(
                "line endpoints are coincident or antipodal".into(),
            )
            .into());
        }

        let result = deviation_metrics(&self.point, &self.line);
        tracing::debug!(
            along_track = result.along_track_distance,
            cross_track = result.cross_track_distance,
            bearing_to_line = result.bearing_to_line,
            "computed deviation"
        );
        Ok(result)
    }
}
