use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::sport::SportType;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
    pub elevation: Option<f64>,
    pub time: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FileFormat {
    Gpx,
    Fit,
}

impl FileFormat {
    pub fn from_filename(filename: &str) -> Option<Self> {
        let ext = filename.rsplit('.').next()?.to_lowercase();
        match ext.as_str() {
            "gpx" => Some(FileFormat::Gpx),
            "fit" => Some(FileFormat::Fit),
            _ => None,
        }
    }
}

/// What a format parser hands to the aggregator: the raw point sequence in
/// recorded order plus the display name and the source's sport label, still
/// unclassified.
#[derive(Debug, Clone)]
pub struct ParsedTrack {
    pub points: Vec<GeoPoint>,
    pub name: String,
    pub sport: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityStats {
    pub distance_m: f64,
    pub duration_secs: u64,
    pub avg_speed_kmh: f64,
    pub max_elevation_m: f64,
    pub min_elevation_m: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Activity {
    pub id: Uuid,
    pub name: String,
    pub sport: SportType,
    pub start_time: DateTime<Utc>,
    pub stats: ActivityStats,
    pub points: Vec<GeoPoint>,
    pub color: String,
}
