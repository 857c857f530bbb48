mod line;
mod point;

pub use line::Line;
pub use point::GeoPoint;

pub(crate) use point::check_finite;
