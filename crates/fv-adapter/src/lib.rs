//! Adapter contract and conformance harness for FlowVersion domains.
//!
//! A domain plugs into the kernel by implementing [`DomainAdapter`]. Only
//! canonicalization is mandatory; diff, merge, and validation fall back to
//! reporting themselves unsupported so a minimal adapter stays minimal.
//! [`WorkflowAdapter`] is the reference implementation covering all four
//! operations for `workflow_graph@1` states.
//!
//! Golden vectors pin the byte-level canonicalization contract: each vector
//! records an input alongside its expected canonical JSON and SHA-256, and
//! the harness recomputes both to catch drift between implementations.
//!
//! # Key Types
//!
//! - [`DomainAdapter`] — Operations a domain exposes to the kernel
//! - [`WorkflowAdapter`] — Reference adapter for workflow graphs
//! - [`GoldenFile`] / [`GoldenVector`] — Conformance vector format
//! - [`SPEC_VERSION`] — Adapter contract version carried in golden files
//! - [`AdapterError`] — Error type for adapter operations

pub mod adapter;
pub mod error;
pub mod goldens;

pub use adapter::{DomainAdapter, WorkflowAdapter};
pub use error::{AdapterError, AdapterResult};
pub use goldens::{
    make_domain_vector, make_vector, GoldenFile, GoldenMeta, GoldenVector, SPEC_VERSION,
};

pub use fv_canonical::CANON_VERSION;
