//! Persistence collaborator seam.
//!
//! The engine reads two things from the backing store: station records
//! scoped to an agency, and raw boundary-geometry documents for the fire
//! districts. Both are owned by ordinary CRUD plumbing elsewhere; this
//! module only defines the read contract and an in-memory implementation
//! for tests and local development.

mod error;
mod mock;

pub use error::StoreError;
pub use mock::InMemoryStore;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::{AgencyKind, Station};

/// A raw boundary-geometry document as persisted.
///
/// `coordinates` carries the GeoJSON-shaped nested number arrays: one
/// ring level for `"Polygon"`, a polygon level above that for
/// `"MultiPolygon"`. The document is parsed leniently downstream;
/// malformed pieces are dropped with a warning rather than failing the
/// load.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawDistrictDocument {
    /// Identifier of the persisted record, quoted in parse warnings.
    pub id: i64,
    /// Name of the station that owns the district, when present.
    pub owner_name: Option<String>,
    /// Geometry kind, `"Polygon"` or `"MultiPolygon"`.
    pub geometry_type: String,
    /// Nested coordinate arrays in projected grid units.
    pub coordinates: Value,
}

/// Read contract for the persistence collaborator.
pub trait IncidentStore: Send + Sync {
    /// All station records belonging to one agency.
    fn list_stations(&self, agency: AgencyKind) -> Result<Vec<Station>, StoreError>;

    /// All raw district boundary documents.
    fn list_district_documents(&self) -> Result<Vec<RawDistrictDocument>, StoreError>;
}
