use crate::error::GeoError;

/// Mean Earth radius in kilometers.
pub const EARTH_MEAN_RADIUS_KM: f64 = 6371.009;

/// A point on the sphere, in degrees. Stored as (longitude, latitude).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GeoCoordinate {
    pub lon: f64,
    pub lat: f64,
}

impl GeoCoordinate {
    /// Builds a coordinate without range checks. Out-of-range values still
    /// produce a defined distance, it just means nothing geographically.
    pub fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }

    pub fn checked(lon: f64, lat: f64) -> Result<Self, GeoError> {
        if !lon.is_finite() || !lat.is_finite() {
            return Err(GeoError::NonFinite { lon, lat });
        }
        if !(-180.0..=180.0).contains(&lon) {
            return Err(GeoError::LongitudeOutOfRange(lon));
        }
        if !(-90.0..=90.0).contains(&lat) {
            return Err(GeoError::LatitudeOutOfRange(lat));
        }
        Ok(Self { lon, lat })
    }

    /// The diametrically opposite point, longitude kept within [-180, 180].
    pub fn antipode(&self) -> Self {
        let lon = if self.lon > 0.0 {
            self.lon - 180.0
        } else {
            self.lon + 180.0
        };
        Self { lon, lat: -self.lat }
    }
}

/// Central angle between two points in radians, using the haversine formula.
pub fn central_angle(a: GeoCoordinate, b: GeoCoordinate) -> f64 {
    let (lat1, lon1, lat2, lon2) = (
        a.lat.to_radians(),
        a.lon.to_radians(),
        b.lat.to_radians(),
        b.lon.to_radians(),
    );
    let dlat = lat2 - lat1;
    let dlon = lon2 - lon1;
    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    // Rounding can push h just past 1.0 for near-antipodal points.
    2.0 * h.clamp(0.0, 1.0).sqrt().asin()
}

/// Great-circle distance between `a` and `b` on a sphere of `radius`.
/// The result is in the same units as `radius`.
pub fn distance(a: GeoCoordinate, b: GeoCoordinate, radius: f64) -> f64 {
    radius * central_angle(a, b)
}

pub fn distance_km(a: GeoCoordinate, b: GeoCoordinate) -> f64 {
    distance(a, b, EARTH_MEAN_RADIUS_KM)
}

/// Great-circle distance in meters. Input lat/lon in degrees.
pub fn haversine_meters(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    distance(
        GeoCoordinate::new(lon1, lat1),
        GeoCoordinate::new(lon2, lat2),
        EARTH_MEAN_RADIUS_KM * 1000.0,
    )
}
