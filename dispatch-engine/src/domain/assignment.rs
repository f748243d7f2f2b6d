//! Assignment request and result types.

use serde::{Deserialize, Serialize};

use super::point::GeoPoint;
use super::station::AgencyKind;

/// An incoming incident to assign.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AssignmentRequest {
    pub point: GeoPoint,
    pub agency: AgencyKind,
}

impl AssignmentRequest {
    /// Build a request from raw WGS84 coordinates.
    pub fn new(latitude: f64, longitude: f64, agency: AgencyKind) -> Self {
        Self {
            point: GeoPoint::new(latitude, longitude),
            agency,
        }
    }
}

/// How an assignment was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssignmentMethod {
    /// The incident fell inside the station's jurisdiction district.
    District,
    /// The station was the closest candidate by great-circle distance.
    Nearest,
}

/// A resolved assignment.
///
/// Every public entry point of the engine returns `Option` over this
/// type; "no match" is an expected outcome, never an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignmentResult {
    pub station_id: i64,
    pub station_name: String,
    pub method: AssignmentMethod,
    /// Owning district name for district assignments; empty for nearest.
    pub district_name: String,
    /// Distance to the station for nearest assignments; 0 for district.
    pub distance_meters: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_carries_point() {
        let request = AssignmentRequest::new(37.99, 23.73, AgencyKind::Fire);
        assert_eq!(request.point.latitude, 37.99);
        assert_eq!(request.point.longitude, 23.73);
        assert_eq!(request.agency, AgencyKind::Fire);
    }

    #[test]
    fn result_round_trips_through_json() {
        let result = AssignmentResult {
            station_id: 5,
            station_name: "Station_1".to_string(),
            method: AssignmentMethod::District,
            district_name: "Station_1".to_string(),
            distance_meters: 0.0,
        };

        let json = serde_json::to_string(&result).unwrap();
        let back: AssignmentResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, result);
    }
}
