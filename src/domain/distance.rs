use super::GeoPoint;

/// Mean Earth radius used by the great-circle computation.
pub const EARTH_RADIUS_KM: f64 = 6371.009;

/// Great-circle distance between two points, rounded to the nearest kilometer.
///
/// Coordinates are trusted: range checks happen where points are built from
/// user input, not here.
pub fn distance_km(a: GeoPoint, b: GeoPoint) -> u64 {
    let lat1 = a.latitude.to_radians();
    let lat2 = b.latitude.to_radians();
    let dlat = lat2 - lat1;
    let dlon = (b.longitude - a.longitude).to_radians();

    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    // Float error can push `h` a hair outside [0, 1] for antipodal points.
    let h = h.clamp(0.0, 1.0);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    (EARTH_RADIUS_KM * c).round() as u64
}
