use fv_canonical::CanonError;
use fv_graph::GraphError;
use thiserror::Error;

/// Errors that can occur while validating a state.
#[derive(Debug, Error)]
pub enum ValidateError {
    /// Graph normalization failed on the input.
    #[error(transparent)]
    Graph(#[from] GraphError),

    /// Canonicalization failed while hashing the state or an issue payload.
    #[error(transparent)]
    Canon(#[from] CanonError),
}

/// Result type for validation operations.
pub type ValidateResult<T> = Result<T, ValidateError>;
