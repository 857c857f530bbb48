mod deviation;
mod project_line;

pub use deviation::{deviation_metrics, DeviationMetrics, DeviationResult};
pub use project_line::{project_line, ProjectLine};
