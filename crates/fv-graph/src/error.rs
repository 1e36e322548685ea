use fv_canonical::CanonError;
use thiserror::Error;

/// Errors produced by graph normalization and classification.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GraphError {
    #[error("expected an object for {0}")]
    ExpectedObject(&'static str),

    #[error("expected a string for {0}")]
    ExpectedString(&'static str),

    #[error(transparent)]
    Canon(#[from] CanonError),
}

pub type GraphResult<T> = Result<T, GraphError>;
