//! Great-circle distance between geodetic points.

use crate::domain::GeoPoint;

/// Earth's mean radius in meters.
pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// Haversine great-circle distance between two WGS84 points, in meters.
///
/// Spherical, not ellipsoidal; plenty for ranking nearest stations at
/// regional scale.
pub fn haversine_meters(from: &GeoPoint, to: &GeoPoint) -> f64 {
    let (lat1, lon1) = from.to_radians();
    let (lat2, lon2) = to.to_radians();

    let d_lat = lat2 - lat1;
    let d_lon = lon2 - lon1;

    let h = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_METERS * c
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn territory_point() -> impl Strategy<Value = GeoPoint> {
        (34.0f64..42.0, 19.0f64..30.0).prop_map(|(lat, lon)| GeoPoint::new(lat, lon))
    }

    proptest! {
        /// Distance is symmetric.
        #[test]
        fn symmetric(a in territory_point(), b in territory_point()) {
            let forward = haversine_meters(&a, &b);
            let backward = haversine_meters(&b, &a);
            prop_assert!((forward - backward).abs() < 1e-6);
        }

        /// Distance is non-negative and zero only from a point to itself.
        #[test]
        fn non_negative(a in territory_point(), b in territory_point()) {
            let distance = haversine_meters(&a, &b);
            prop_assert!(distance >= 0.0);
            prop_assert!(haversine_meters(&a, &a) == 0.0);
        }
    }
}
