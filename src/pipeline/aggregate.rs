use chrono::Utc;
use uuid::Uuid;

use crate::error::FormatError;
use crate::pipeline::geo;
use crate::types::activity::{Activity, ActivityStats, GeoPoint};
use crate::types::sport::SportType;

/// Builds the final immutable activity record from a parsed point sequence.
/// Either returns a complete record or fails; there is no partial result.
pub fn aggregate(
    points: Vec<GeoPoint>,
    name: String,
    sport: SportType,
) -> Result<Activity, FormatError> {
    let points: Vec<GeoPoint> = points
        .into_iter()
        .filter(|p| p.lat.is_finite() && p.lon.is_finite())
        .collect();

    if points.is_empty() {
        return Err(FormatError::NoValidPoints);
    }

    let mut distance_m = 0.0;
    let mut max_elevation = f64::NEG_INFINITY;
    let mut min_elevation = f64::INFINITY;
    let mut have_elevation = false;

    for (i, point) in points.iter().enumerate() {
        if i > 0 {
            let leg = geo::distance_meters(&points[i - 1], point);
            if leg.is_finite() {
                distance_m += leg;
            }
        }

        if let Some(ele) = point.elevation.filter(|e| e.is_finite()) {
            max_elevation = max_elevation.max(ele);
            min_elevation = min_elevation.min(ele);
            have_elevation = true;
        }
    }

    let now = Utc::now();
    let start_time = points.first().and_then(|p| p.time).unwrap_or(now);
    let end_time = points.last().and_then(|p| p.time).unwrap_or(now);
    let duration_secs = (end_time - start_time).num_seconds().max(0) as u64;

    let avg_speed_kmh = if duration_secs > 0 {
        (distance_m / 1000.0) / (duration_secs as f64 / 3600.0)
    } else {
        0.0
    };

    let stats = ActivityStats {
        distance_m,
        duration_secs,
        avg_speed_kmh,
        max_elevation_m: if have_elevation { max_elevation } else { 0.0 },
        min_elevation_m: if have_elevation { min_elevation } else { 0.0 },
    };

    Ok(Activity {
        id: Uuid::new_v4(),
        name,
        sport,
        start_time,
        stats,
        color: sport.color().to_string(),
        points,
    })
}
