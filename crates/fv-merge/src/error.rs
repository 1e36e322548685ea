use fv_canonical::CanonError;
use fv_graph::GraphError;
use thiserror::Error;

/// Errors that can occur while merging states.
#[derive(Debug, Error)]
pub enum MergeError {
    /// Graph normalization failed on one of the inputs.
    #[error(transparent)]
    Graph(#[from] GraphError),

    /// Canonicalization failed while hashing conflict payloads.
    #[error(transparent)]
    Canon(#[from] CanonError),
}

/// Result type for merge operations.
pub type MergeResult<T> = Result<T, MergeError>;
