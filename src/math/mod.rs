pub mod angle;
pub mod spherical;

/// 3D vector type, used for unit position vectors on the sphere.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Mean Earth radius in metres.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Length of a projected line when the caller does not supply one, in metres.
pub const DEFAULT_LINE_LENGTH_M: f64 = 100_000.0;

/// Global geometric tolerance for floating-point comparisons on the unit sphere.
pub const TOLERANCE: f64 = 1e-10;
