use thiserror::Error;

/// Errors produced by canonicalization.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CanonError {
    #[error("absent value is not representable in canonical form")]
    AbsentValue,

    #[error("non-finite number is not representable in canonical form: {0}")]
    NonFiniteNumber(String),

    #[error("non-integer number is not representable in canonical form: {0}")]
    NonIntegerNumber(String),

    #[error("integer magnitude exceeds 2^53 - 1: {0}")]
    UnsafeInteger(String),

    #[error("unsupported value type: {0}")]
    UnsupportedType(String),

    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(String),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("deserialization error: {0}")]
    Deserialization(String),
}

pub type CanonResult<T> = Result<T, CanonError>;
