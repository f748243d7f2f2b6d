//! Stations and agencies.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The four responder agencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgencyKind {
    Fire,
    CoastGuard,
    Police,
    Hospital,
}

impl AgencyKind {
    /// Fire assignments go through district containment; every other
    /// agency uses nearest-station search.
    pub fn uses_districts(&self) -> bool {
        matches!(self, AgencyKind::Fire)
    }

    /// Lowercase identifier used in logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            AgencyKind::Fire => "fire",
            AgencyKind::CoastGuard => "coastguard",
            AgencyKind::Police => "police",
            AgencyKind::Hospital => "hospital",
        }
    }
}

impl fmt::Display for AgencyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A station record as read from the persistence collaborator.
///
/// The engine only reads stations; they are owned elsewhere. Names are
/// unique within one agency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Station {
    pub id: i64,
    pub name: String,
    pub agency: AgencyKind,
    pub latitude: f64,
    pub longitude: f64,
}

/// Capability interface for anything rankable by distance.
///
/// One generic nearest-candidate search works over any concrete
/// station-like type that exposes an id, a name and coordinates.
pub trait Locatable {
    fn id(&self) -> i64;
    fn name(&self) -> &str;
    fn latitude(&self) -> f64;
    fn longitude(&self) -> f64;
}

impl Locatable for Station {
    fn id(&self) -> i64 {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn latitude(&self) -> f64 {
        self.latitude
    }

    fn longitude(&self) -> f64 {
        self.longitude
    }
}
