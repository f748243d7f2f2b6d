//! Emergency station assignment engine.
//!
//! Answers "which station serves this incident location?" across four
//! agencies. Fire incidents resolve by polygon containment: the WGS84
//! incident point is projected into the grid the jurisdiction boundaries
//! are stored in and tested against each district's rings. Coast guard,
//! police and hospital incidents resolve by nearest-station search on
//! great-circle distance. Parsed boundary geometry is loaded once per
//! process and lookups are memoized with short TTLs.

pub mod boundaries;
pub mod cache;
pub mod distance;
pub mod domain;
pub mod engine;
pub mod projection;
pub mod store;

/// Install a test subscriber so `RUST_LOG` surfaces engine diagnostics
/// in test output. Idempotent across tests in one binary.
#[cfg(test)]
pub(crate) fn init_test_logging() {
    use tracing_subscriber::EnvFilter;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
