//! Boundary geometry and ray-casting containment.

/// An ordered ring of projected `(x, y)` vertices.
///
/// Rings are implicitly closed: the last vertex need not repeat the
/// first. Orientation is not assumed.
#[derive(Debug, Clone, PartialEq)]
pub struct Ring {
    points: Vec<(f64, f64)>,
}

impl Ring {
    /// Create a ring from its vertices.
    pub fn new(points: Vec<(f64, f64)>) -> Self {
        Self { points }
    }

    /// The vertices of the ring.
    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }

    /// Number of vertices.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True when the ring has no vertices.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Ray-casting containment test.
    ///
    /// Counts crossings of a horizontal ray from the test point against
    /// each edge, toggling an inside flag. Degenerate rings (fewer than
    /// three vertices) contain nothing.
    ///
    /// A point lying exactly on an edge has undefined inclusion. That is
    /// an accepted property of the crossing-number algorithm; callers
    /// must not rely on either outcome.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        let n = self.points.len();
        if n < 3 {
            return false;
        }

        let mut inside = false;
        let mut j = n - 1;
        for i in 0..n {
            let (xi, yi) = self.points[i];
            let (xj, yj) = self.points[j];

            if ((yi > y) != (yj > y)) && (x < (xj - xi) * (y - yi) / (yj - yi) + xi) {
                inside = !inside;
            }
            j = i;
        }
        inside
    }
}

/// A polygon: one outer ring followed by zero or more hole rings.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    rings: Vec<Ring>,
}

impl Polygon {
    /// `rings[0]` is the outer boundary; any further rings are holes
    /// subtracted from it.
    pub fn new(rings: Vec<Ring>) -> Self {
        Self { rings }
    }

    /// The outer boundary, if the polygon has any rings at all.
    pub fn outer(&self) -> Option<&Ring> {
        self.rings.first()
    }

    /// The hole rings.
    pub fn holes(&self) -> &[Ring] {
        self.rings.get(1..).unwrap_or(&[])
    }

    /// All rings, outer first.
    pub fn rings(&self) -> &[Ring] {
        &self.rings
    }

    /// True when the point is inside the outer ring and outside every
    /// hole. Any hole match disqualifies the point.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        let Some(outer) = self.outer() else {
            return false;
        };
        if !outer.contains(x, y) {
            return false;
        }
        !self.holes().iter().any(|hole| hole.contains(x, y))
    }
}

/// District geometry, a single polygon or a multi-polygon.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Polygon(Polygon),
    MultiPolygon(Vec<Polygon>),
}

impl Geometry {
    /// Hole-aware containment for either geometry kind.
    ///
    /// Linear in the total vertex count; district counts in this domain
    /// are in the low hundreds, so no spatial index is built.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        match self {
            Geometry::Polygon(polygon) => polygon.contains(x, y),
            Geometry::MultiPolygon(polygons) => polygons.iter().any(|p| p.contains(x, y)),
        }
    }
}

/// A named jurisdiction polygon owned by one station.
#[derive(Debug, Clone, PartialEq)]
pub struct District {
    /// Never empty: documents without a resolvable owner name are
    /// rejected at parse time and dropped.
    pub owner_station_name: String,
    pub geometry: Geometry,
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Any point strictly inside the unit square's interior is
        /// contained; any point strictly beyond its extent is not.
        #[test]
        fn square_containment(x in 0.001f64..0.999, y in 0.001f64..0.999) {
            let ring = Ring::new(vec![(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]);
            prop_assert!(ring.contains(x, y));
            prop_assert!(!ring.contains(x + 2.0, y));
            prop_assert!(!ring.contains(x, y - 2.0));
        }

        /// Points inside a hole are excluded; points inside the outer
        /// ring but outside the hole are kept.
        #[test]
        fn hole_subtraction(x in 0.4f64..0.6, y in 0.4f64..0.6) {
            let outer = Ring::new(vec![(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]);
            let hole = Ring::new(vec![(0.3, 0.3), (0.7, 0.3), (0.7, 0.7), (0.3, 0.7)]);
            let polygon = Polygon::new(vec![outer, hole]);

            prop_assert!(!polygon.contains(x, y));
            prop_assert!(polygon.contains(0.1, y));
        }
    }
}
