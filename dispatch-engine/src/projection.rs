//! Coordinate transforms between WGS84 and a Transverse-Mercator grid.
//!
//! Boundary geometry is stored in a projected grid (for this deployment
//! EPSG:2100, the GGRS87 Greek Grid) while incidents arrive as WGS84
//! lat/lon. The transform uses the standard simplified Transverse-Mercator
//! series (eccentricity plus Krüger terms), accurate to well under a meter
//! at regional scale. Exact ellipsoidal geodesy is out of scope.
//!
//! Neither direction panics. Any numerical failure yields `None`, a
//! "transform unavailable" sentinel that callers treat as "no district
//! match possible".

use crate::domain::{GeoPoint, ProjectedPoint};

/// Parameters of a named Transverse-Mercator projection.
#[derive(Debug, Clone, Copy)]
pub struct ProjectionParams {
    /// Offset added to eastings, in meters.
    pub false_easting: f64,
    /// Offset added to northings, in meters.
    pub false_northing: f64,
    /// Longitude of the central meridian, in degrees.
    pub central_meridian_deg: f64,
    /// Scale factor at the central meridian.
    pub scale_factor: f64,
    /// Ellipsoid semi-major axis, in meters.
    pub semi_major_axis: f64,
    /// Ellipsoid flattening.
    pub flattening: f64,
}

impl ProjectionParams {
    /// EPSG:2100, the GGRS87 / Greek Grid (GRS80 ellipsoid).
    pub fn greek_grid() -> Self {
        Self {
            false_easting: 500_000.0,
            false_northing: 0.0,
            central_meridian_deg: 24.0,
            scale_factor: 0.9996,
            semi_major_axis: 6_378_137.0,
            flattening: 1.0 / 298.257_222_101,
        }
    }

    fn eccentricity_squared(&self) -> f64 {
        2.0 * self.flattening - self.flattening * self.flattening
    }

    fn usable(&self) -> bool {
        self.scale_factor.abs() > f64::EPSILON && self.semi_major_axis > 0.0
    }

    /// Geodetic → grid.
    ///
    /// The series diverges near the poles, so latitudes beyond ±89.9° are
    /// rejected up front; polygons spanning the poles are out of scope.
    ///
    /// The forward direction does not clamp its output. Points far from
    /// the grid's valid region still project to (meaningless) finite
    /// coordinates; callers gate inputs against their operating
    /// territory before transforming, as the engine does. Only
    /// [`unproject`](Self::unproject) clamps, to the geodetic ranges.
    pub fn project(&self, point: &GeoPoint) -> Option<ProjectedPoint> {
        if !point.is_finite() || point.latitude.abs() > 89.9 || !self.usable() {
            return None;
        }

        let phi = point.latitude.to_radians();
        let lambda = point.longitude.to_radians();
        let lambda0 = self.central_meridian_deg.to_radians();

        let a = self.semi_major_axis;
        let e2 = self.eccentricity_squared();
        let ep2 = e2 / (1.0 - e2);

        let nu = a / (1.0 - e2 * phi.sin().powi(2)).sqrt();
        let t = phi.tan().powi(2);
        let c = ep2 * phi.cos().powi(2);
        let aa = (lambda - lambda0) * phi.cos();

        // Meridian arc length from the equator.
        let e4 = e2 * e2;
        let e6 = e4 * e2;
        let m = a
            * ((1.0 - e2 / 4.0 - 3.0 * e4 / 64.0 - 5.0 * e6 / 256.0) * phi
                - (3.0 * e2 / 8.0 + 3.0 * e4 / 32.0 + 45.0 * e6 / 1024.0) * (2.0 * phi).sin()
                + (15.0 * e4 / 256.0 + 45.0 * e6 / 1024.0) * (4.0 * phi).sin()
                - (35.0 * e6 / 3072.0) * (6.0 * phi).sin());

        let x = self.scale_factor
            * nu
            * (aa
                + (1.0 - t + c) * aa.powi(3) / 6.0
                + (5.0 - 18.0 * t + t * t + 72.0 * c - 58.0 * ep2) * aa.powi(5) / 120.0)
            + self.false_easting;

        let y = self.scale_factor
            * (m + nu
                * phi.tan()
                * (aa.powi(2) / 2.0
                    + (5.0 - t + 9.0 * c + 4.0 * c * c) * aa.powi(4) / 24.0
                    + (61.0 - 58.0 * t + t * t + 600.0 * c - 330.0 * ep2) * aa.powi(6) / 720.0))
            + self.false_northing;

        if !(x.is_finite() && y.is_finite()) {
            return None;
        }
        Some(ProjectedPoint::new(x, y))
    }

    /// Grid → geodetic, the approximate inverse.
    ///
    /// Subtracts the false easting/northing, recovers the footpoint
    /// latitude from the meridian arc, then applies the inverse series.
    /// Results are clamped to the valid geodetic ranges.
    pub fn unproject(&self, point: &ProjectedPoint) -> Option<GeoPoint> {
        if !(point.x.is_finite() && point.y.is_finite()) || !self.usable() {
            return None;
        }

        let x = point.x - self.false_easting;
        let y = point.y - self.false_northing;

        let a = self.semi_major_axis;
        let e2 = self.eccentricity_squared();
        let ep2 = e2 / (1.0 - e2);
        let e1 = (1.0 - (1.0 - e2).sqrt()) / (1.0 + (1.0 - e2).sqrt());

        let m = y / self.scale_factor;
        let mu = m / (a * (1.0 - e2 / 4.0 - 3.0 * e2 * e2 / 64.0 - 5.0 * e2 * e2 * e2 / 256.0));

        // Footpoint latitude.
        let phi1 = mu
            + (3.0 * e1 / 2.0 - 27.0 * e1.powi(3) / 32.0) * (2.0 * mu).sin()
            + (21.0 * e1 * e1 / 16.0 - 55.0 * e1.powi(4) / 32.0) * (4.0 * mu).sin()
            + (151.0 * e1.powi(3) / 96.0) * (6.0 * mu).sin()
            + (1097.0 * e1.powi(4) / 512.0) * (8.0 * mu).sin();

        if phi1.cos().abs() < 1e-9 {
            return None;
        }

        let n1 = a / (1.0 - e2 * phi1.sin().powi(2)).sqrt();
        let t1 = phi1.tan().powi(2);
        let c1 = ep2 * phi1.cos().powi(2);
        let r1 = a * (1.0 - e2) / (1.0 - e2 * phi1.sin().powi(2)).powf(1.5);
        let d = x / (n1 * self.scale_factor);

        let phi = phi1
            - (n1 * phi1.tan() / r1)
                * (d * d / 2.0
                    - (5.0 + 3.0 * t1 + 10.0 * c1 - 4.0 * c1 * c1 - 9.0 * ep2) * d.powi(4) / 24.0
                    + (61.0 + 90.0 * t1 + 298.0 * c1 + 45.0 * t1 * t1 - 252.0 * ep2
                        - 3.0 * c1 * c1)
                        * d.powi(6)
                        / 720.0);

        let lambda = self.central_meridian_deg.to_radians()
            + (d - (1.0 + 2.0 * t1 + c1) * d.powi(3) / 6.0
                + (5.0 - 2.0 * c1 + 28.0 * t1 - 3.0 * c1 * c1 + 8.0 * ep2 + 24.0 * t1 * t1)
                    * d.powi(5)
                    / 120.0)
                / phi1.cos();

        let latitude = phi.to_degrees();
        let longitude = lambda.to_degrees();
        if !(latitude.is_finite() && longitude.is_finite()) {
            return None;
        }

        Some(GeoPoint::new(
            latitude.clamp(-90.0, 90.0),
            longitude.clamp(-180.0, 180.0),
        ))
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Round trip through the grid stays within 1e-3 degrees for any
        /// point inside the operating territory.
        #[test]
        fn round_trip_over_territory(lat in 34.0f64..42.0, lon in 19.0f64..30.0) {
            let grid = ProjectionParams::greek_grid();
            let point = GeoPoint::new(lat, lon);

            let projected = grid.project(&point).unwrap();
            let back = grid.unproject(&projected).unwrap();

            prop_assert!((back.latitude - lat).abs() < 1e-3);
            prop_assert!((back.longitude - lon).abs() < 1e-3);
        }
    }
}
