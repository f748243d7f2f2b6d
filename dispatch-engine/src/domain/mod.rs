//! Core value types shared across the engine.

mod assignment;
mod geometry;
mod point;
mod station;

pub use assignment::{AssignmentMethod, AssignmentRequest, AssignmentResult};
pub use geometry::{District, Geometry, Polygon, Ring};
pub use point::{GeoPoint, ProjectedPoint};
pub use station::{AgencyKind, Locatable, Station};
