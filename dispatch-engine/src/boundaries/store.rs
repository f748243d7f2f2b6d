//! Lazily-populated, concurrency-guarded cache of parsed districts.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, RwLock};

use tracing::error;

use crate::domain::District;
use crate::store::IncidentStore;

use super::parse::parse_documents;

/// In-memory cache of parsed district boundaries.
///
/// Populated at most once per instance under normal operation via
/// double-checked locking: readers check the loaded flag, the first one
/// through takes the load lock, re-checks, parses and publishes an
/// immutable snapshot, then flips the flag. Readers never observe a
/// partially-populated list. An explicit [`invalidate`](Self::invalidate)
/// is the only way back to the unloaded state.
///
/// The first load may be slow (parsing hundreds of polygons); callers
/// should expect the first lookup to carry that latency.
pub struct BoundaryStore {
    loaded: AtomicBool,
    load_guard: Mutex<()>,
    districts: RwLock<Arc<Vec<Arc<District>>>>,
    load_count: AtomicUsize,
    scan_count: AtomicUsize,
}

impl BoundaryStore {
    /// Create an empty, unloaded cache.
    pub fn new() -> Self {
        Self {
            loaded: AtomicBool::new(false),
            load_guard: Mutex::new(()),
            districts: RwLock::new(Arc::new(Vec::new())),
            load_count: AtomicUsize::new(0),
            scan_count: AtomicUsize::new(0),
        }
    }

    /// Load the district list on first demand.
    ///
    /// Exactly one caller performs the parse; concurrent callers block
    /// briefly on the load lock and then observe the populated state. If
    /// the store is unreachable the cache is marked loaded-but-empty and
    /// an error is logged; there is no automatic retry.
    pub fn ensure_loaded(&self, store: &dyn IncidentStore) {
        if self.loaded.load(Ordering::Acquire) {
            return;
        }

        let _guard = self.load_guard.lock().unwrap_or_else(|e| e.into_inner());
        if self.loaded.load(Ordering::Acquire) {
            return;
        }

        let districts = match store.list_district_documents() {
            Ok(docs) => parse_documents(&docs),
            Err(e) => {
                error!(error = %e, "district boundary load failed, continuing with empty cache");
                Vec::new()
            }
        };

        let snapshot: Vec<Arc<District>> = districts.into_iter().map(Arc::new).collect();
        *self.districts.write().unwrap_or_else(|e| e.into_inner()) = Arc::new(snapshot);
        self.load_count.fetch_add(1, Ordering::Relaxed);
        self.loaded.store(true, Ordering::Release);
    }

    /// First district whose geometry contains the projected point.
    ///
    /// Overlapping districts resolve by input order, not area. The
    /// smallest-area policy for overlapping station service boundaries is
    /// a different, deliberate algorithm that lives in the engine.
    pub fn find_containing_district(&self, x: f64, y: f64) -> Option<Arc<District>> {
        self.scan_count.fetch_add(1, Ordering::Relaxed);
        let snapshot = self.snapshot();
        snapshot.iter().find(|d| d.geometry.contains(x, y)).cloned()
    }

    /// The published district list (empty before the first load).
    pub fn snapshot(&self) -> Arc<Vec<Arc<District>>> {
        Arc::clone(&self.districts.read().unwrap_or_else(|e| e.into_inner()))
    }

    /// Administrative reset: the next lookup reloads from the store.
    ///
    /// Not exercised by normal request flow.
    pub fn invalidate(&self) {
        let _guard = self.load_guard.lock().unwrap_or_else(|e| e.into_inner());
        *self.districts.write().unwrap_or_else(|e| e.into_inner()) = Arc::new(Vec::new());
        self.loaded.store(false, Ordering::Release);
    }

    /// True once a load (even an empty one) has been published.
    pub fn is_loaded(&self) -> bool {
        self.loaded.load(Ordering::Acquire)
    }

    /// Number of districts currently published.
    pub fn district_count(&self) -> usize {
        self.snapshot().len()
    }

    /// Number of load executions (for monitoring).
    pub fn load_count(&self) -> usize {
        self.load_count.load(Ordering::Relaxed)
    }

    /// Number of containment scans served (for monitoring).
    pub fn scan_count(&self) -> usize {
        self.scan_count.load(Ordering::Relaxed)
    }
}

impl Default for BoundaryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    use crate::store::{InMemoryStore, RawDistrictDocument};

    fn square_doc(id: i64, owner: &str, x0: f64, y0: f64, size: f64) -> RawDistrictDocument {
        RawDistrictDocument {
            id,
            owner_name: Some(owner.to_string()),
            geometry_type: "Polygon".to_string(),
            coordinates: json!([[
                [x0, y0],
                [x0 + size, y0],
                [x0 + size, y0 + size],
                [x0, y0 + size]
            ]]),
        }
    }

    #[test]
    fn loads_once_and_finds_district() {
        let store = InMemoryStore::new().with_document(square_doc(1, "Station_1", 0.0, 0.0, 100.0));
        let boundaries = BoundaryStore::new();

        boundaries.ensure_loaded(&store);
        boundaries.ensure_loaded(&store);

        assert_eq!(boundaries.load_count(), 1);
        assert_eq!(store.district_calls(), 1);
        assert_eq!(boundaries.district_count(), 1);

        let district = boundaries.find_containing_district(50.0, 50.0).unwrap();
        assert_eq!(district.owner_station_name, "Station_1");
        assert!(boundaries.find_containing_district(500.0, 500.0).is_none());
    }

    #[test]
    fn concurrent_callers_trigger_exactly_one_load() {
        let store = InMemoryStore::new().with_document(square_doc(1, "Station_1", 0.0, 0.0, 100.0));
        let boundaries = BoundaryStore::new();

        std::thread::scope(|scope| {
            for _ in 0..8 {
                scope.spawn(|| {
                    boundaries.ensure_loaded(&store);
                    assert_eq!(boundaries.district_count(), 1);
                });
            }
        });

        assert_eq!(boundaries.load_count(), 1);
        assert_eq!(store.district_calls(), 1);
    }

    #[test]
    fn unreachable_store_leaves_cache_loaded_and_empty() {
        let store = InMemoryStore::new().unavailable();
        let boundaries = BoundaryStore::new();

        boundaries.ensure_loaded(&store);

        assert!(boundaries.is_loaded());
        assert_eq!(boundaries.district_count(), 0);
        assert!(boundaries.find_containing_district(0.0, 0.0).is_none());

        // No automatic retry.
        boundaries.ensure_loaded(&store);
        assert_eq!(boundaries.load_count(), 1);
        assert_eq!(store.district_calls(), 1);
    }

    #[test]
    fn invalidate_forces_reload() {
        let store = InMemoryStore::new().with_document(square_doc(1, "Station_1", 0.0, 0.0, 100.0));
        let boundaries = BoundaryStore::new();

        boundaries.ensure_loaded(&store);
        boundaries.invalidate();
        assert!(!boundaries.is_loaded());
        assert_eq!(boundaries.district_count(), 0);

        boundaries.ensure_loaded(&store);
        assert_eq!(boundaries.load_count(), 2);
        assert_eq!(boundaries.district_count(), 1);
    }

    #[test]
    fn overlapping_districts_resolve_by_input_order() {
        // Both squares contain (50, 50); the first document wins even
        // though the second is smaller.
        let store = InMemoryStore::new()
            .with_document(square_doc(1, "Big", 0.0, 0.0, 1000.0))
            .with_document(square_doc(2, "Small", 40.0, 40.0, 20.0));
        let boundaries = BoundaryStore::new();

        boundaries.ensure_loaded(&store);

        let district = boundaries.find_containing_district(50.0, 50.0).unwrap();
        assert_eq!(district.owner_station_name, "Big");
    }
}
