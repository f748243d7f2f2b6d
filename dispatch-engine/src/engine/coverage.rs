//! Service-boundary resolution for overlapping station coverage.

use crate::domain::Geometry;

/// A station's declared service boundary in projected coordinates.
#[derive(Debug, Clone)]
pub struct ServiceBoundary {
    pub station_name: String,
    pub geometry: Geometry,
    /// Declared coverage area in square meters.
    pub area_sq_meters: f64,
}

/// Among all boundaries containing the point, the smallest declared area
/// wins.
///
/// Smaller, more specific jurisdictions take precedence over larger
/// overlapping ones. This is intentionally a different policy from the
/// first-match order used for administrative district lookup in the
/// boundary cache; the two must not be unified without a domain decision.
pub fn resolve_coverage<'a>(
    boundaries: &'a [ServiceBoundary],
    x: f64,
    y: f64,
) -> Option<&'a ServiceBoundary> {
    boundaries
        .iter()
        .filter(|boundary| boundary.geometry.contains(x, y))
        .min_by(|a, b| a.area_sq_meters.total_cmp(&b.area_sq_meters))
}
