//! Diff engine for FlowVersion.
//!
//! Produces a deterministic, ordered list of atom-level change operations
//! between two classified states. Graph pairs are compared atom by atom over
//! the union of node and edge ids; every other pairing collapses to a single
//! whole-value replacement.
//!
//! # Key Types
//!
//! - [`ChangeOp`] — One observed change, addressed by atom selector
//! - [`ChangeKind`] — The change vocabulary (`add_node` … `replace`)
//! - [`diff`] — Typed entry point over [`DomainInput`](fv_graph::DomainInput)
//! - [`diff_values`] — Raw-JSON entry point (classifies, then diffs)

pub mod change;
pub mod error;
pub mod graph_diff;

pub use change::{ChangeKind, ChangeOp};
pub use error::{DiffError, DiffResult};
pub use graph_diff::{diff, diff_values};
