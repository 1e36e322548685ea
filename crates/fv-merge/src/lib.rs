//! Three-way merge engine for FlowVersion states.
//!
//! Merges proceed atom by atom: both sides are diffed against the common
//! base and combined per atom, so edits to different nodes or edges never
//! collide. Disagreements surface as typed [`ConflictRecord`]s instead of
//! textual markers, and every record carries the resolutions a caller may
//! apply to it.
//!
//! The engine is deterministic: the same three inputs always produce the
//! same merged state, the same conflict list, and the same conflict ids.
//!
//! # Key Types
//!
//! - [`MergeOutcome`] — Merged state plus ordered conflict records
//! - [`ConflictRecord`] — One disagreement with its resolution options
//! - [`ConflictKind`] — Taxonomy: add_add, delete_edit, edit_delete, edit_edit
//! - [`Resolution`] — Actions a caller may take on a conflict
//! - [`merge`] — Typed entry point over [`DomainInput`](fv_graph::DomainInput)
//! - [`merge_values`] — Raw-JSON entry point (classifies, then merges)

pub mod conflict;
pub mod engine;
pub mod error;

pub use conflict::{ConflictKind, ConflictRecord, Resolution};
pub use engine::{merge, merge_values, MergeOutcome};
pub use error::{MergeError, MergeResult};
