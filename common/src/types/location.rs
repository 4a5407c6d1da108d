use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// A point on the globe in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub longitude: f64,
    pub latitude: f64,
}

impl Coordinates {
    /// Builds coordinates in the geocoder's `(longitude, latitude)` order.
    pub fn new(longitude: f64, latitude: f64) -> Self {
        Self {
            longitude,
            latitude,
        }
    }
}

/// Geocoded coordinates of a postal address. Entities sharing an address
/// share its location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub address: String,
    pub coordinates: Coordinates,
    /// When the geocoder was asked for this address.
    pub last_geocoded_at: DateTime<Local>,
}

impl Location {
    pub fn new(address: impl Into<String>, coordinates: Coordinates) -> Self {
        Self {
            address: address.into(),
            coordinates,
            last_geocoded_at: Local::now(),
        }
    }
}
