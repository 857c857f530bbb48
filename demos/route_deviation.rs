//! Route deviation demo: projects a planned leg and reports how far a few
//! GPS fixes have drifted from it.
//!
//! Usage:
//! ```text
//! cargo run --example route_deviation
//! RUST_LOG=greatcircle=trace cargo run --example route_deviation
//! ```

use greatcircle::operations::{DeviationMetrics, ProjectLine};
use greatcircle::{haversine_distance, initial_bearing, GeoPoint, GreatCircleError};

/// Cross-track distance beyond which a fix counts as off course.
const ALERT_THRESHOLD_M: f64 = 5_000.0;

fn main() -> Result<(), GreatCircleError> {
    // Default: WARN for everything, INFO for greatcircle.
    // Override with RUST_LOG env var (e.g. RUST_LOG=greatcircle=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("greatcircle=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let holyhead = GeoPoint::try_new(53.3094, -4.6330)?;
    let dublin = GeoPoint::try_new(53.3498, -6.2603)?;

    let heading = initial_bearing(&holyhead, &dublin);
    let leg = ProjectLine::new(holyhead, heading)
        .with_distance(haversine_distance(&holyhead, &dublin))
        .execute()?;
    println!("leg: {:.1} km on {heading:.1} deg", leg.length() / 1000.0);

    let fixes = [
        GeoPoint::try_new(53.32, -5.10)?,
        GeoPoint::try_new(53.40, -5.50)?,
        GeoPoint::try_new(53.10, -5.80)?,
    ];
    for fix in fixes {
        let r = DeviationMetrics::new(fix, leg).execute()?;
        let status = if r.cross_track_distance > ALERT_THRESHOLD_M {
            "OFF COURSE"
        } else {
            "ok"
        };
        println!(
            "fix ({:.4}, {:.4}): {} m along, {} m off, steer {} deg [{status}]",
            fix.lat, fix.lng, r.along_track_distance, r.cross_track_distance, r.bearing_to_line
        );
    }
    Ok(())
}
