use serde::Serialize;

/// Decimal-degree position, longitude first.
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct GeoPoint {
    pub lon_deg: f64,
    pub lat_deg: f64,
}

impl GeoPoint {
    pub fn new(lon_deg: f64, lat_deg: f64) -> Self {
        Self { lon_deg, lat_deg }
    }

    pub fn is_finite(&self) -> bool {
        self.lon_deg.is_finite() && self.lat_deg.is_finite()
    }

    pub fn as_lon_lat(&self) -> [f64; 2] {
        [self.lon_deg, self.lat_deg]
    }
}
