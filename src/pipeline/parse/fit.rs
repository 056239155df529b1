use crate::error::FormatError;
use crate::pipeline::parse::Parser;
use crate::types::activity::{GeoPoint, ParsedTrack};
use crate::types::sport::{self, SportType};
use chrono::DateTime;
use fitparser::profile::MesgNum;
use fitparser::{FitDataRecord, Value};

pub struct FitParser;

impl Parser for FitParser {
    fn parse(&self, bytes: &[u8], fallback_name: &str) -> Result<ParsedTrack, FormatError> {
        let data = fitparser::from_bytes(bytes)
            .map_err(|e| FormatError::InvalidFit(format!("Failed to decode FIT file: {}", e)))?;

        let mut points = Vec::new();
        let mut sport_label: Option<String> = None;
        let mut sub_sport_label: Option<String> = None;
        let mut saw_session = false;

        for record in &data {
            match record.kind() {
                MesgNum::Session => {
                    if !saw_session {
                        saw_session = true;
                        sport_label = field_string(record, "sport");
                        sub_sport_label = field_string(record, "sub_sport");
                    }
                }
                MesgNum::Record => {
                    if let Some(point) = record_point(record) {
                        points.push(point);
                    }
                }
                _ => {}
            }
        }

        if points.is_empty() {
            return Err(FormatError::NoTrackPoints);
        }

        // The sub-sport carries the variant (gravel, trail) when the primary
        // sport label is missing or too generic to classify
        let sport = match sub_sport_label {
            Some(secondary) if sport::classify(sport_label.as_deref()) == SportType::Other => {
                Some(secondary)
            }
            _ => sport_label,
        };

        Ok(ParsedTrack {
            points,
            name: fallback_name.to_string(),
            sport,
        })
    }
}

fn record_point(record: &FitDataRecord) -> Option<GeoPoint> {
    let lat = coordinate_field(record, "position_lat", "lat")?;
    let lon = coordinate_field(record, "position_long", "long")?;

    if !valid_position(lat, lon) {
        return None;
    }

    let elevation =
        numeric_field(record, "altitude").or_else(|| numeric_field(record, "enhanced_altitude"));

    let time = record
        .fields()
        .iter()
        .find(|f| f.name() == "timestamp")
        .and_then(|f| match f.value() {
            Value::Timestamp(t) => {
                Some(DateTime::from_timestamp(t.timestamp(), 0).unwrap_or_default())
            }
            _ => None,
        });

    Some(GeoPoint {
        lat,
        lon,
        elevation,
        time,
    })
}

fn coordinate_field(record: &FitDataRecord, primary: &str, fallback: &str) -> Option<f64> {
    let raw = numeric_field(record, primary).or_else(|| numeric_field(record, fallback))?;
    Some(normalize_angle(raw))
}

// Position fields are semicircles unless the decoder already scaled them to
// degrees; anything past +/-180 cannot be a degree value.
fn normalize_angle(raw: f64) -> f64 {
    if raw.abs() > 180.0 {
        raw * (180.0 / 2_147_483_648.0)
    } else {
        raw
    }
}

fn valid_position(lat: f64, lon: f64) -> bool {
    (-90.0..=90.0).contains(&lat) && (-180.0..=180.0).contains(&lon)
}

fn numeric_field(record: &FitDataRecord, name: &str) -> Option<f64> {
    record
        .fields()
        .iter()
        .find(|f| f.name() == name)
        .and_then(|f| value_f64(f.value()))
}

fn value_f64(value: &Value) -> Option<f64> {
    match value {
        Value::SInt8(v) => Some(*v as f64),
        Value::UInt8(v) => Some(*v as f64),
        Value::SInt16(v) => Some(*v as f64),
        Value::UInt16(v) => Some(*v as f64),
        Value::SInt32(v) => Some(*v as f64),
        Value::UInt32(v) => Some(*v as f64),
        Value::Float32(v) => Some(*v as f64),
        Value::Float64(v) => Some(*v),
        _ => None,
    }
}

fn field_string(record: &FitDataRecord, name: &str) -> Option<String> {
    record
        .fields()
        .iter()
        .find(|f| f.name() == name)
        .and_then(|f| match f.value() {
            Value::String(s) => Some(s.clone()),
            _ => None,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn semicircles_convert_to_degrees() {
        assert!((normalize_angle(2_147_483_647.0) - 180.0).abs() < 0.0001);
        assert!((normalize_angle(-2_147_483_648.0) + 180.0).abs() < 0.0001);
        assert!((normalize_angle(900_000_000.0) - 75.4372).abs() < 0.001);
    }

    #[test]
    fn degree_values_pass_through() {
        assert_eq!(normalize_angle(47.5), 47.5);
        assert_eq!(normalize_angle(-180.0), -180.0);
        assert_eq!(normalize_angle(0.0), 0.0);
    }

    #[test]
    fn out_of_range_conversions_are_rejected() {
        // 3e9 "semicircles" lands past the pole and must be discarded
        let lat = normalize_angle(3_000_000_000.0);
        assert!(lat > 180.0);
        assert!(!valid_position(lat, 0.0));

        let kept = normalize_angle(900_000_000.0);
        assert!(valid_position(kept, 0.0));
    }
}
