//! Structural validation for FlowVersion workflow graphs.
//!
//! Validation never mutates: it reports issues against a canonical state and
//! leaves every decision to the caller. Rules run in a fixed order and each
//! issue carries a content-derived `issue_id`, so the same state produces
//! the same report on every replica, byte for byte.
//!
//! Non-graph states are reported valid with no issues; their report still
//! carries the canonical state hash.
//!
//! # Key Types
//!
//! - [`ValidationResult`] — Versioned report with issues and state hash
//! - [`ValidationIssue`] — One finding, addressed to specific atoms
//! - [`IssueCode`] — Machine-readable rule identifiers
//! - [`validate`] — Typed entry point over [`DomainInput`](fv_graph::DomainInput)
//! - [`validate_value`] — Raw-JSON entry point (classifies, then validates)

pub mod error;
pub mod issue;
pub mod rules;
pub mod traverse;

pub use error::{ValidateError, ValidateResult};
pub use issue::{IssueCode, ValidationIssue, ValidationResult, RESULT_VERSION};
pub use rules::{validate, validate_value};
