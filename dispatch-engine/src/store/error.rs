//! Persistence collaborator error types.

/// Errors surfaced by the backing incident store.
///
/// Undecodable boundary documents are not an error at this seam: the
/// store hands them over raw and the parse layer drops the bad pieces
/// with a warning.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The store cannot be reached at all.
    #[error("store unavailable: {message}")]
    Unavailable { message: String },
}
