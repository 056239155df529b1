use trailview_rs::error::FormatError;
use trailview_rs::pipeline::parse;
use trailview_rs::types::activity::FileFormat;

fn sample_gpx() -> &'static str {
    r#"<?xml version="1.0" encoding="UTF-8"?>
<gpx version="1.1" creator="test">
  <trk><name>Morning Run</name><type>running</type><trkseg>
    <trkpt lat="0.0" lon="0.0"><ele>12.0</ele><time>2026-01-01T06:00:00Z</time></trkpt>
    <trkpt lat="0.0" lon="0.001"><ele>15.5</ele><time>2026-01-01T06:00:01Z</time></trkpt>
  </trkseg></trk>
</gpx>"#
}

#[test]
fn gpx_extracts_points_name_and_sport() {
    let track =
        parse::parse(sample_gpx().as_bytes(), FileFormat::Gpx, "morning.gpx").expect("parse");

    assert_eq!(track.name, "Morning Run");
    assert_eq!(track.sport.as_deref(), Some("running"));
    assert_eq!(track.points.len(), 2);
    assert_eq!(track.points[0].lat, 0.0);
    assert_eq!(track.points[0].elevation, Some(12.0));
    assert!(track.points[0].time.is_some());
    assert_eq!(track.points[1].lon, 0.001);
}

#[test]
fn gpx_name_falls_back_to_filename() {
    let gpx = r#"<gpx><trk><trkseg>
        <trkpt lat="47.0" lon="8.0"></trkpt>
    </trkseg></trk></gpx>"#;

    let track = parse::parse(gpx.as_bytes(), FileFormat::Gpx, "evening.gpx").expect("parse");
    assert_eq!(track.name, "evening.gpx");
    assert_eq!(track.sport, None);
}

#[test]
fn gpx_without_track_is_an_error() {
    let gpx = r#"<?xml version="1.0"?><gpx version="1.1"><metadata><name>Doc</name></metadata></gpx>"#;

    let err = parse::parse(gpx.as_bytes(), FileFormat::Gpx, "a.gpx").unwrap_err();
    assert!(matches!(err, FormatError::MissingTrack));
}

#[test]
fn gpx_with_broken_markup_is_an_error() {
    let gpx = r#"<gpx><trk><trkseg><trkpt lat="1.0" lon=></trkpt></trkseg></trk></gpx>"#;

    let err = parse::parse(gpx.as_bytes(), FileFormat::Gpx, "a.gpx").unwrap_err();
    assert!(matches!(err, FormatError::InvalidGpx(_)));
}

#[test]
fn gpx_skips_points_missing_coordinates() {
    let gpx = r#"<gpx><trk><trkseg>
        <trkpt lat="47.0" lon="8.0"></trkpt>
        <trkpt lat="47.1"></trkpt>
        <trkpt lon="8.2"></trkpt>
        <trkpt lat="47.2" lon="8.2"></trkpt>
    </trkseg></trk></gpx>"#;

    let track = parse::parse(gpx.as_bytes(), FileFormat::Gpx, "a.gpx").expect("parse");
    assert_eq!(track.points.len(), 2);
    assert_eq!(track.points[1].lat, 47.2);
}

#[test]
fn gpx_concatenates_segments_in_document_order() {
    let gpx = r#"<gpx><trk><name>Split</name>
      <trkseg>
        <trkpt lat="47.0" lon="8.0"/>
      </trkseg>
      <trkseg>
        <trkpt lat="47.1" lon="8.1"/>
        <trkpt lat="47.2" lon="8.2"/>
      </trkseg>
    </trk></gpx>"#;

    let track = parse::parse(gpx.as_bytes(), FileFormat::Gpx, "a.gpx").expect("parse");
    assert_eq!(track.points.len(), 3);
    assert_eq!(track.points[0].lat, 47.0);
    assert_eq!(track.points[1].lat, 47.1);
    assert_eq!(track.points[2].lat, 47.2);
}

#[test]
fn gpx_track_without_points_is_not_a_parse_error() {
    let gpx = r#"<gpx><trk><name>Empty</name><trkseg></trkseg></trk></gpx>"#;

    let track = parse::parse(gpx.as_bytes(), FileFormat::Gpx, "a.gpx").expect("parse");
    assert!(track.points.is_empty());
}

#[test]
fn fit_garbage_is_an_error() {
    let err = parse::parse(b"definitely not a fit stream", FileFormat::Fit, "a.fit").unwrap_err();
    assert!(matches!(err, FormatError::InvalidFit(_)));
}

#[test]
fn format_dispatch_is_extension_based_and_case_insensitive() {
    assert_eq!(FileFormat::from_filename("ride.gpx"), Some(FileFormat::Gpx));
    assert_eq!(FileFormat::from_filename("RIDE.GPX"), Some(FileFormat::Gpx));
    assert_eq!(FileFormat::from_filename("run.FiT"), Some(FileFormat::Fit));
    assert_eq!(FileFormat::from_filename("notes.txt"), None);
    assert_eq!(FileFormat::from_filename("archive.gpx.bak"), None);
}
