//! Generic nearest-candidate search.

use tracing::warn;

use crate::distance::haversine_meters;
use crate::domain::{GeoPoint, Locatable};

/// Closest candidate to `point` by great-circle distance.
///
/// Ties break in favor of the first-encountered candidate in input
/// order. A candidate whose coordinates or distance come out non-finite
/// is logged and excluded rather than aborting the whole search.
pub fn nearest<'a, T: Locatable>(point: &GeoPoint, candidates: &'a [T]) -> Option<(&'a T, f64)> {
    let mut best: Option<(&T, f64)> = None;

    for candidate in candidates {
        let location = GeoPoint::new(candidate.latitude(), candidate.longitude());
        if !location.is_finite() {
            warn!(
                candidate = candidate.name(),
                "candidate has non-finite coordinates, excluded"
            );
            continue;
        }

        let distance = haversine_meters(point, &location);
        if !distance.is_finite() {
            warn!(
                candidate = candidate.name(),
                "distance computation failed, candidate excluded"
            );
            continue;
        }

        match best {
            Some((_, best_distance)) if distance >= best_distance => {}
            _ => best = Some((candidate, distance)),
        }
    }

    best
}
