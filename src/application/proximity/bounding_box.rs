use crate::domain::GeoPoint;

/// Kilometers per degree of latitude.
pub const KM_PER_DEGREE_LATITUDE: f64 = 111.0;
/// Kilometers per degree of longitude. Fixed ratio tuned for metropolitan
/// France; it does not vary with latitude.
pub const KM_PER_DEGREE_LONGITUDE: f64 = 77.0;

/// Axis-aligned latitude/longitude rectangle, inclusive on every edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub lat_min: f64,
    pub lat_max: f64,
    pub lon_min: f64,
    pub lon_max: f64,
}

impl BoundingBox {
    /// Rectangle enclosing the circle of `radius_km` around `center`.
    ///
    /// Edges are not clamped to the valid coordinate ranges, so a very large
    /// radius yields a box that simply matches everything on that axis.
    pub fn around(center: GeoPoint, radius_km: u32) -> Self {
        let radius_km = f64::from(radius_km);
        let deg_lat = radius_km / KM_PER_DEGREE_LATITUDE;
        let deg_lon = radius_km / KM_PER_DEGREE_LONGITUDE;

        Self {
            lat_min: center.latitude - deg_lat,
            lat_max: center.latitude + deg_lat,
            lon_min: center.longitude - deg_lon,
            lon_max: center.longitude + deg_lon,
        }
    }

    pub fn contains(&self, point: GeoPoint) -> bool {
        (self.lat_min..=self.lat_max).contains(&point.latitude)
            && (self.lon_min..=self.lon_max).contains(&point.longitude)
    }
}
