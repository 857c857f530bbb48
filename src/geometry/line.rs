use crate::math::spherical::{haversine_distance, initial_bearing};

use super::GeoPoint;

/// A great-circle segment defined by its two endpoints.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    start: GeoPoint,
    end: GeoPoint,
}

impl Line {
    /// Creates a new line from `start` to `end`.
    #[must_use]
    pub const fn new(start: GeoPoint, end: GeoPoint) -> Self {
        Self { start, end }
    }

    /// Returns the start point of the line.
    #[must_use]
    pub fn start(&self) -> &GeoPoint {
        &self.start
    }

    /// Returns the end point of the line.
    #[must_use]
    pub fn end(&self) -> &GeoPoint {
        &self.end
    }

    /// Returns the great-circle length of the segment in metres.
    #[must_use]
    pub fn length(&self) -> f64 {
        haversine_distance(&self.start, &self.end)
    }

    /// Returns the initial bearing from start towards end, in `[0, 360)`.
    #[must_use]
    pub fn bearing(&self) -> f64 {
        initial_bearing(&self.start, &self.end)
    }
}
