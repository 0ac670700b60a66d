//! Great-circle distance between coordinates.

use serde::{Deserialize, Serialize};

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A point in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Both parts must be present; a lone latitude or longitude is not a point.
    pub fn from_parts(latitude: Option<f64>, longitude: Option<f64>) -> Option<Self> {
        match (latitude, longitude) {
            (Some(lat), Some(lng)) => Some(Self::new(lat, lng)),
            _ => None,
        }
    }
}

/// Haversine distance in kilometers. Inputs are not range-checked.
pub fn distance_km(a: Coordinates, b: Coordinates) -> f64 {
    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lng = (b.longitude - a.longitude).to_radians();
    let h = (d_lat / 2.0).sin().powi(2)
        + a.latitude.to_radians().cos() * b.latitude.to_radians().cos() * (d_lng / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_KM * h.sqrt().atan2((1.0 - h).sqrt())
}

/// Returns the distance when `to` lies within `radius_km` of `from` (inclusive).
pub fn within_radius(from: Coordinates, to: Coordinates, radius_km: f64) -> Option<f64> {
    let distance = distance_km(from, to);
    (distance <= radius_km).then_some(distance)
}
