use crate::types::activity::GeoPoint;

const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Great-circle distance between two points in meters.
pub fn distance_meters(a: &GeoPoint, b: &GeoPoint) -> f64 {
    if a.lat == b.lat && a.lon == b.lon {
        return 0.0;
    }

    let d_lat = (b.lat - a.lat).to_radians();
    let d_lon = (b.lon - a.lon).to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + a.lat.to_radians().cos() * b.lat.to_radians().cos() * (d_lon / 2.0).sin().powi(2);

    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_M * c
}

/// "Hh Mm" display form, floored to whole minutes.
pub fn format_duration(secs: u64) -> String {
    let hours = secs / 3600;
    let minutes = (secs % 3600) / 60;
    format!("{}h {}m", hours, minutes)
}

/// Kilometers with two decimals for list and detail views.
pub fn format_distance(meters: f64) -> String {
    format!("{:.2} km", meters / 1000.0)
}
