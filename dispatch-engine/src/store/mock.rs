//! In-memory incident store for tests and local development.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::domain::{AgencyKind, Station};

use super::{IncidentStore, RawDistrictDocument, StoreError};

/// Store backed by in-memory collections.
///
/// Mimics the persistence collaborator without a database. Call counters
/// let tests assert how often the engine actually hits the store.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    stations: HashMap<AgencyKind, Vec<Station>>,
    documents: Vec<RawDistrictDocument>,
    unavailable: bool,
    station_calls: AtomicUsize,
    district_calls: AtomicUsize,
}

impl InMemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a station record.
    pub fn with_station(mut self, station: Station) -> Self {
        self.stations.entry(station.agency).or_default().push(station);
        self
    }

    /// Add a raw district document.
    pub fn with_document(mut self, document: RawDistrictDocument) -> Self {
        self.documents.push(document);
        self
    }

    /// Make every call fail, simulating an unreachable store.
    pub fn unavailable(mut self) -> Self {
        self.unavailable = true;
        self
    }

    /// Number of `list_stations` calls served so far.
    pub fn station_calls(&self) -> usize {
        self.station_calls.load(Ordering::Relaxed)
    }

    /// Number of `list_district_documents` calls served so far.
    pub fn district_calls(&self) -> usize {
        self.district_calls.load(Ordering::Relaxed)
    }
}

impl IncidentStore for InMemoryStore {
    fn list_stations(&self, agency: AgencyKind) -> Result<Vec<Station>, StoreError> {
        self.station_calls.fetch_add(1, Ordering::Relaxed);
        if self.unavailable {
            return Err(StoreError::Unavailable {
                message: "in-memory store marked unavailable".to_string(),
            });
        }
        Ok(self.stations.get(&agency).cloned().unwrap_or_default())
    }

    fn list_district_documents(&self) -> Result<Vec<RawDistrictDocument>, StoreError> {
        self.district_calls.fetch_add(1, Ordering::Relaxed);
        if self.unavailable {
            return Err(StoreError::Unavailable {
                message: "in-memory store marked unavailable".to_string(),
            });
        }
        Ok(self.documents.clone())
    }
}
