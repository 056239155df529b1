use crate::error::FormatError;
use crate::pipeline::parse::Parser;
use crate::types::activity::{GeoPoint, ParsedTrack};
use chrono::{DateTime, Utc};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

pub struct GpxParser;

impl Parser for GpxParser {
    fn parse(&self, bytes: &[u8], fallback_name: &str) -> Result<ParsedTrack, FormatError> {
        let mut reader = Reader::from_reader(bytes);
        reader.trim_text(true);

        let mut points = Vec::new();
        let mut track_name: Option<String> = None;
        let mut sport: Option<String> = None;
        let mut saw_track = false;
        let mut in_trk = false;
        let mut in_trkpt = false;
        let mut current_point: Option<GeoPoint> = None;
        let mut current_element = String::new();
        let mut buf = Vec::new();

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Start(e)) => {
                    let name = e.name();
                    let name_str = std::str::from_utf8(name.as_ref())
                        .map_err(|e| FormatError::InvalidGpx(e.to_string()))?;

                    match name_str {
                        "trk" => {
                            in_trk = true;
                            saw_track = true;
                        }
                        "trkpt" if in_trk => {
                            in_trkpt = true;
                            current_point = point_from_attributes(&e)?;
                        }
                        _ if in_trk => current_element = name_str.to_string(),
                        _ => {}
                    }
                }
                Ok(Event::Empty(e)) => {
                    let name = e.name();
                    let name_str = std::str::from_utf8(name.as_ref())
                        .map_err(|e| FormatError::InvalidGpx(e.to_string()))?;

                    // Self-closing track points carry coordinates only
                    if name_str == "trkpt" && in_trk {
                        if let Some(point) = point_from_attributes(&e)? {
                            points.push(point);
                        }
                    }
                }
                Ok(Event::Text(e)) => {
                    let text = e
                        .unescape()
                        .map_err(|e| FormatError::InvalidGpx(e.to_string()))?;

                    if in_trkpt {
                        if let Some(point) = current_point.as_mut() {
                            match current_element.as_str() {
                                "ele" => point.elevation = text.parse().ok(),
                                "time" => point.time = text.parse::<DateTime<Utc>>().ok(),
                                _ => {}
                            }
                        }
                    } else if in_trk {
                        match current_element.as_str() {
                            "name" if track_name.is_none() && !text.trim().is_empty() => {
                                track_name = Some(text.trim().to_string());
                            }
                            "type" if sport.is_none() => {
                                sport = Some(text.trim().to_string());
                            }
                            _ => {}
                        }
                    }
                }
                Ok(Event::End(e)) => {
                    let name = e.name();
                    let name_str = std::str::from_utf8(name.as_ref())
                        .map_err(|e| FormatError::InvalidGpx(e.to_string()))?;

                    match name_str {
                        "trkpt" => {
                            if let Some(point) = current_point.take() {
                                points.push(point);
                            }
                            in_trkpt = false;
                            current_element.clear();
                        }
                        "trk" => in_trk = false,
                        _ => current_element.clear(),
                    }
                }
                Ok(Event::Eof) => break,
                Err(e) => return Err(FormatError::InvalidGpx(e.to_string())),
                _ => {}
            }
            buf.clear();
        }

        if !saw_track {
            return Err(FormatError::MissingTrack);
        }

        Ok(ParsedTrack {
            points,
            name: track_name.unwrap_or_else(|| fallback_name.to_string()),
            sport,
        })
    }
}

// Points without both coordinates are skipped, not an error.
fn point_from_attributes(e: &BytesStart<'_>) -> Result<Option<GeoPoint>, FormatError> {
    let mut lat = None;
    let mut lon = None;

    for attr in e.attributes() {
        let attr = attr.map_err(|e| FormatError::InvalidGpx(e.to_string()))?;
        let key = std::str::from_utf8(attr.key.as_ref())
            .map_err(|e| FormatError::InvalidGpx(e.to_string()))?;
        let value = std::str::from_utf8(&attr.value)
            .map_err(|e| FormatError::InvalidGpx(e.to_string()))?;

        match key {
            "lat" => lat = value.parse().ok(),
            "lon" => lon = value.parse().ok(),
            _ => {}
        }
    }

    Ok(match (lat, lon) {
        (Some(lat), Some(lon)) => Some(GeoPoint {
            lat,
            lon,
            elevation: None,
            time: None,
        }),
        _ => None,
    })
}
