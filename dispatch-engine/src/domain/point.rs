//! Geodetic and projected coordinate value types.

use serde::{Deserialize, Serialize};

/// A geodetic WGS84 coordinate in decimal degrees.
///
/// Latitude lies in [-90, 90], longitude in [-180, 180]. Incident
/// coordinates enter the engine in this system.
///
/// # Examples
///
/// ```
/// use dispatch_engine::domain::GeoPoint;
///
/// let athens = GeoPoint::new(37.9838, 23.7275);
/// assert!(athens.is_finite());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    /// Create a point from decimal degrees.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Returns `(latitude, longitude)` in radians.
    pub fn to_radians(&self) -> (f64, f64) {
        (self.latitude.to_radians(), self.longitude.to_radians())
    }

    /// True when both components are finite numbers.
    pub fn is_finite(&self) -> bool {
        self.latitude.is_finite() && self.longitude.is_finite()
    }
}

/// A coordinate in a projected grid, in meters.
///
/// Produced only by the projection module; never persisted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectedPoint {
    pub x: f64,
    pub y: f64,
}

impl ProjectedPoint {
    /// Create a projected point from grid coordinates in meters.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}
