use fv_graph::GraphError;
use thiserror::Error;

/// Errors produced by diff operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DiffError {
    #[error(transparent)]
    Graph(#[from] GraphError),
}

pub type DiffResult<T> = Result<T, DiffError>;
