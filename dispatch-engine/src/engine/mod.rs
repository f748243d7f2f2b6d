//! Station assignment orchestration.
//!
//! Answers "which station serves point P for agency A". Fire incidents
//! go through district containment: territory gate, projection into the
//! boundary grid, first containing district, owner-name resolution.
//! Coast guard, police and hospital incidents rank all candidate
//! stations by great-circle distance. Every entry point returns an
//! `Option`; no fault propagates to the caller.

mod config;
mod coverage;
mod nearest;


pub use config::{EngineConfig, TerritoryBounds};
pub use coverage::{ServiceBoundary, resolve_coverage};
pub use nearest::nearest;

use std::sync::Arc;

use tracing::{debug, error};

use crate::boundaries::BoundaryStore;
use crate::domain::{AssignmentMethod, AssignmentRequest, AssignmentResult, Station};
use crate::store::IncidentStore;

/// The geospatial assignment engine.
///
/// One long-lived instance owns the boundary cache; requests run
/// concurrently against it from any number of workers.
pub struct AssignmentEngine {
    store: Arc<dyn IncidentStore>,
    boundaries: BoundaryStore,
    config: EngineConfig,
}

impl AssignmentEngine {
    /// Create an engine over the given store.
    pub fn new(store: Arc<dyn IncidentStore>, config: EngineConfig) -> Self {
        Self {
            store,
            boundaries: BoundaryStore::new(),
            config,
        }
    }

    /// Assign the request to a station, fetching candidates from the
    /// store.
    ///
    /// Store failures are logged and surface as no match.
    pub fn assign(&self, request: &AssignmentRequest) -> Option<AssignmentResult> {
        let stations = match self.store.list_stations(request.agency) {
            Ok(stations) => stations,
            Err(e) => {
                error!(agency = %request.agency, error = %e, "station listing failed");
                return None;
            }
        };
        self.assign_with_stations(request, &stations)
    }

    /// Assign against an already-fetched candidate set.
    ///
    /// The caching layer uses this to reuse station snapshots across
    /// requests.
    pub fn assign_with_stations(
        &self,
        request: &AssignmentRequest,
        stations: &[Station],
    ) -> Option<AssignmentResult> {
        if !request.point.is_finite() {
            debug!(agency = %request.agency, "non-finite incident coordinates");
            return None;
        }

        if request.agency.uses_districts() {
            self.assign_by_district(request, stations)
        } else {
            self.assign_by_nearest(request, stations)
        }
    }

    fn assign_by_district(
        &self,
        request: &AssignmentRequest,
        stations: &[Station],
    ) -> Option<AssignmentResult> {
        let point = &request.point;

        if !self.config.territory.contains(point) {
            debug!(
                latitude = point.latitude,
                longitude = point.longitude,
                "incident outside operating territory"
            );
            return None;
        }

        self.boundaries.ensure_loaded(self.store.as_ref());

        // Fire has no nearest-station fallback; an unavailable transform
        // means no match.
        let projected = match self.config.projection.project(point) {
            Some(projected) => projected,
            None => {
                debug!("projection unavailable for incident point");
                return None;
            }
        };

        let district = self
            .boundaries
            .find_containing_district(projected.x, projected.y)?;

        let Some(station) = stations.iter().find(|s| s.name == district.owner_station_name)
        else {
            // Data-integrity gap, not a crash: the district names a
            // station that has no record.
            error!(
                district = %district.owner_station_name,
                "district references a station with no record"
            );
            return None;
        };

        Some(AssignmentResult {
            station_id: station.id,
            station_name: station.name.clone(),
            method: AssignmentMethod::District,
            district_name: district.owner_station_name.clone(),
            distance_meters: 0.0,
        })
    }

    fn assign_by_nearest(
        &self,
        request: &AssignmentRequest,
        stations: &[Station],
    ) -> Option<AssignmentResult> {
        if stations.is_empty() {
            debug!(agency = %request.agency, "no candidate stations");
            return None;
        }

        let (station, distance) = nearest(&request.point, stations)?;

        Some(AssignmentResult {
            station_id: station.id,
            station_name: station.name.clone(),
            method: AssignmentMethod::Nearest,
            district_name: String::new(),
            distance_meters: distance,
        })
    }

    /// The backing store, shared with the caching layer.
    pub fn store(&self) -> &Arc<dyn IncidentStore> {
        &self.store
    }

    /// The boundary cache (for monitoring and administrative reset).
    pub fn boundaries(&self) -> &BoundaryStore {
        &self.boundaries
    }

    /// The engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}
