//! Time-boxed lookup caching over the assignment engine.
//!
//! Two read-through caches sit in front of the engine: per-agency station
//! snapshots with a long TTL, and per-point assignment results with a
//! shorter one. Point keys quantize coordinates to six decimal places
//! (~0.1 m), which bounds cache cardinality. Negative results are cached
//! too, so repeated lookups for a point outside every district stay
//! cheap. Concurrent writes to the same key are last-writer-wins; values
//! for a key are deterministic given the same inputs.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use moka::sync::Cache as MokaCache;
use tracing::error;

use crate::domain::{AgencyKind, AssignmentRequest, AssignmentResult, Station};
use crate::engine::AssignmentEngine;

/// Cache key for point lookups: (station-set version, agency, quantized
/// latitude, quantized longitude).
type PointKey = (u64, AgencyKind, i64, i64);

/// Cached point entry; `None` records the absence of a match.
type PointEntry = Option<Arc<AssignmentResult>>;

/// Configuration for the lookup caches.
#[derive(Debug, Clone)]
pub struct LookupCacheConfig {
    /// TTL for per-agency station snapshots.
    pub station_ttl: Duration,

    /// TTL for per-point lookups, positive and negative.
    pub point_ttl: Duration,

    /// Maximum number of cached point lookups.
    pub max_points: u64,
}

impl Default for LookupCacheConfig {
    fn default() -> Self {
        Self {
            station_ttl: Duration::from_secs(30 * 60),
            point_ttl: Duration::from_secs(10 * 60),
            max_points: 100_000,
        }
    }
}

/// TTL caches for station snapshots and point lookups.
pub struct GeoLookupCache {
    stations: MokaCache<AgencyKind, Arc<Vec<Station>>>,
    points: MokaCache<PointKey, PointEntry>,
    version: AtomicU64,
}

impl GeoLookupCache {
    /// Create empty caches with the given TTLs.
    pub fn new(config: &LookupCacheConfig) -> Self {
        let stations = MokaCache::builder()
            .time_to_live(config.station_ttl)
            .max_capacity(16)
            .build();
        let points = MokaCache::builder()
            .time_to_live(config.point_ttl)
            .max_capacity(config.max_points)
            .build();

        Self {
            stations,
            points,
            version: AtomicU64::new(0),
        }
    }

    /// Quantize a coordinate to six decimal places.
    fn quantize(value: f64) -> i64 {
        (value * 1e6).round() as i64
    }

    fn version(&self) -> u64 {
        self.version.load(Ordering::Relaxed)
    }

    /// Drop the station snapshots and bump the set version.
    ///
    /// Point entries are not touched: the version in their key makes
    /// stale ones unreachable and the TTL reclaims them. That staleness
    /// window is accepted, not a correctness requirement.
    pub fn clear(&self) {
        self.stations.invalidate_all();
        self.version.fetch_add(1, Ordering::Relaxed);
    }

    /// Number of cached point lookups (for monitoring).
    pub fn point_entry_count(&self) -> u64 {
        self.points.entry_count()
    }
}

/// Assignment engine with read-through lookup caching.
///
/// A miss always computes synchronously through the engine before
/// returning.
pub struct CachedAssignmentEngine {
    engine: AssignmentEngine,
    cache: GeoLookupCache,
}

impl CachedAssignmentEngine {
    /// Wrap an engine with lookup caching.
    pub fn new(engine: AssignmentEngine, config: &LookupCacheConfig) -> Self {
        Self {
            engine,
            cache: GeoLookupCache::new(config),
        }
    }

    /// Assign with caching.
    ///
    /// Both matches and no-match outcomes are cached; store failures are
    /// returned as no match but never cached.
    pub fn assign(&self, request: &AssignmentRequest) -> Option<Arc<AssignmentResult>> {
        let key = (
            self.cache.version(),
            request.agency,
            GeoLookupCache::quantize(request.point.latitude),
            GeoLookupCache::quantize(request.point.longitude),
        );

        if let Some(entry) = self.cache.points.get(&key) {
            return entry;
        }

        let stations = self.stations_for(request.agency)?;
        let result = self
            .engine
            .assign_with_stations(request, &stations)
            .map(Arc::new);

        self.cache.points.insert(key, result.clone());
        result
    }

    /// Station snapshot for one agency, fetched through the cache.
    fn stations_for(&self, agency: AgencyKind) -> Option<Arc<Vec<Station>>> {
        if let Some(snapshot) = self.cache.stations.get(&agency) {
            return Some(snapshot);
        }

        match self.engine.store().list_stations(agency) {
            Ok(stations) => {
                let snapshot = Arc::new(stations);
                self.cache.stations.insert(agency, snapshot.clone());
                Some(snapshot)
            }
            Err(e) => {
                error!(agency = %agency, error = %e, "station snapshot fetch failed");
                None
            }
        }
    }

    /// Invalidate the station snapshot cache only.
    pub fn clear_snapshot(&self) {
        self.cache.clear();
    }

    /// The wrapped engine, for operations that bypass the cache.
    pub fn engine(&self) -> &AssignmentEngine {
        &self.engine
    }

    /// Number of cached point lookups (for monitoring).
    pub fn point_entry_count(&self) -> u64 {
        self.cache.point_entry_count()
    }
}
