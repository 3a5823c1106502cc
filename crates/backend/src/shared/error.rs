use thiserror::Error;

/// Failure surfaced by record create operations
#[derive(Debug, Error)]
pub enum StoreError {
    /// Rejected at the boundary, before touching the store
    #[error("{0}")]
    Invalid(String),

    #[error(transparent)]
    Store(#[from] anyhow::Error),
}
