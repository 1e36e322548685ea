//! Workflow graph model for FlowVersion.
//!
//! Bridges raw JSON into the canonical `workflow_graph@1` shape: a
//! structural classifier decides once whether an input is a graph, and the
//! normalizer applies field defaults and sorts both collections before
//! handing every leaf to the canonicalization kernel.
//!
//! # Key Types
//!
//! - [`DomainInput`] — Classification result: workflow graph or opaque value
//! - [`GraphState`] / [`GraphNode`] / [`GraphEdge`] — Typed canonical graph
//! - [`classify`] — One-shot structural classification
//! - [`normalize_graph`] — Raw value to canonical [`GraphState`]

pub mod classify;
pub mod error;
pub mod model;
pub mod normalize;

pub use classify::{classify, looks_like_graph, DomainInput};
pub use error::{GraphError, GraphResult};
pub use model::{GraphEdge, GraphNode, GraphState, GRAPH_KIND};
pub use normalize::normalize_graph;
