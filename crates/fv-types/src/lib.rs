//! Foundation types for the FlowVersion kernel.
//!
//! This crate provides the atom addressing and content identity types used
//! throughout the FlowVersion merge kernel. Every other FlowVersion crate
//! depends on `fv-types`.
//!
//! # Key Types
//!
//! - [`Selector`] — Typed atom address, rendered as `kind:id`
//! - [`AtomKind`] — The closed set of addressable atom kinds
//! - [`ContentHash`] — Content identity (SHA-256 over canonical bytes)
//! - [`Severity`] — Severity level shared by conflicts and validation issues

pub mod error;
pub mod hash;
pub mod selector;
pub mod severity;

pub use error::TypeError;
pub use hash::ContentHash;
pub use selector::{AtomKind, Selector};
pub use severity::Severity;
