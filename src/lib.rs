//! Great-circle navigation on a spherical Earth.
//!
//! Distance, initial bearing, line projection and the deviation of a point
//! from a line (cross-track and along-track distance). Free functions never
//! fail; the operation structs in [`operations`] validate their input first.

pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;

pub use error::{GreatCircleError, Result};
pub use geometry::{GeoPoint, Line};
pub use math::angle::{to_degrees, to_radians};
pub use math::spherical::{haversine_distance, initial_bearing};
pub use operations::{deviation_metrics, project_line, DeviationResult};
