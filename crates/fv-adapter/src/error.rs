use fv_canonical::CanonError;
use fv_diff::DiffError;
use fv_graph::GraphError;
use fv_merge::MergeError;
use fv_validate::ValidateError;
use thiserror::Error;

/// Errors that can occur in adapter operations.
#[derive(Debug, Error)]
pub enum AdapterError {
    /// The adapter does not implement this operation.
    #[error("adapter does not support {0}")]
    Unsupported(&'static str),

    /// A golden vector failed to reproduce its recorded form.
    #[error("golden vector {name} mismatched on {field}")]
    GoldenMismatch { name: String, field: &'static str },

    #[error(transparent)]
    Canon(#[from] CanonError),

    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error(transparent)]
    Diff(#[from] DiffError),

    #[error(transparent)]
    Merge(#[from] MergeError),

    #[error(transparent)]
    Validate(#[from] ValidateError),
}

/// Result type for adapter operations.
pub type AdapterResult<T> = Result<T, AdapterError>;
