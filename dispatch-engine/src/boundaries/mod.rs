//! District boundary parsing and the lazily-loaded boundary cache.

mod parse;
mod store;

pub use parse::parse_documents;
pub use store::BoundaryStore;
