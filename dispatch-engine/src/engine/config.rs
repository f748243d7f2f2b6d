//! Engine configuration: projection and operating territory.

use crate::domain::GeoPoint;
use crate::projection::ProjectionParams;

/// Geodetic bounding box of the operating territory.
///
/// A point outside the box can never match a district, so requests are
/// rejected before any transform runs.
#[derive(Debug, Clone, Copy)]
pub struct TerritoryBounds {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

impl TerritoryBounds {
    /// Create a bounding box from its edges, in degrees.
    pub fn new(min_lat: f64, max_lat: f64, min_lon: f64, max_lon: f64) -> Self {
        Self {
            min_lat,
            max_lat,
            min_lon,
            max_lon,
        }
    }

    /// Box covering Greece: latitude 34–42, longitude 19–30.
    pub fn greece() -> Self {
        Self::new(34.0, 42.0, 19.0, 30.0)
    }

    /// True when the point lies within the box (edges inclusive).
    pub fn contains(&self, point: &GeoPoint) -> bool {
        point.latitude >= self.min_lat
            && point.latitude <= self.max_lat
            && point.longitude >= self.min_lon
            && point.longitude <= self.max_lon
    }

    /// Center of the box as `(latitude, longitude)`.
    pub fn center(&self) -> (f64, f64) {
        (
            (self.min_lat + self.max_lat) / 2.0,
            (self.min_lon + self.max_lon) / 2.0,
        )
    }
}

/// Configuration for the assignment engine.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Projection the boundary geometry is stored in.
    pub projection: ProjectionParams,
    /// Operating territory in geodetic coordinates.
    pub territory: TerritoryBounds,
}

impl EngineConfig {
    /// Use a different operating territory.
    pub fn with_territory(mut self, territory: TerritoryBounds) -> Self {
        self.territory = territory;
        self
    }

    /// Use a different projection.
    pub fn with_projection(mut self, projection: ProjectionParams) -> Self {
        self.projection = projection;
        self
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            projection: ProjectionParams::greek_grid(),
            territory: TerritoryBounds::greece(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greece_box_contains_athens_not_origin() {
        let territory = TerritoryBounds::greece();
        assert!(territory.contains(&GeoPoint::new(37.9838, 23.7275)));
        assert!(!territory.contains(&GeoPoint::new(0.0, 0.0)));
        assert!(!territory.contains(&GeoPoint::new(52.52, 13.40)));
    }

    #[test]
    fn edges_are_inclusive() {
        let territory = TerritoryBounds::greece();
        assert!(territory.contains(&GeoPoint::new(34.0, 19.0)));
        assert!(territory.contains(&GeoPoint::new(42.0, 30.0)));
    }

    #[test]
    fn default_config_is_greek_grid() {
        let config = EngineConfig::default();
        assert_eq!(config.projection.central_meridian_deg, 24.0);
        let (lat, lon) = config.territory.center();
        assert_eq!(lat, 38.0);
        assert_eq!(lon, 24.5);
    }
}
