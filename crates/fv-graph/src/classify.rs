//! One-shot structural classification of raw inputs.

use fv_canonical::{canonicalize, hash_canonical, CanonResult, Value};
use fv_types::ContentHash;
use serde_json::Value as Json;
use serde::{Serialize, Serializer};
use tracing::debug;

use crate::error::GraphResult;
use crate::model::{GraphState, GRAPH_KIND};
use crate::normalize::normalize_graph;

/// A classified input.
///
/// Classification happens exactly once, at ingestion; diff, merge, and
/// validation consume the tag and never re-inspect raw shapes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainInput {
    Graph(GraphState),
    Opaque(Value),
}

impl DomainInput {
    pub fn is_graph(&self) -> bool {
        matches!(self, DomainInput::Graph(_))
    }

    pub fn as_graph(&self) -> Option<&GraphState> {
        match self {
            DomainInput::Graph(state) => Some(state),
            DomainInput::Opaque(_) => None,
        }
    }

    /// The canonical value of either branch.
    pub fn to_value(&self) -> Value {
        match self {
            DomainInput::Graph(state) => state.to_value(),
            DomainInput::Opaque(value) => value.clone(),
        }
    }

    /// SHA-256 over the canonical bytes of either branch.
    pub fn content_hash(&self) -> CanonResult<ContentHash> {
        hash_canonical(&self.to_value())
    }
}

impl Serialize for DomainInput {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_value().serialize(serializer)
    }
}

/// Whether a raw value is treated as a workflow graph.
///
/// A plain object qualifies when `nodes` or `edges` is an array, or when it
/// carries the [`GRAPH_KIND`] tag.
pub fn looks_like_graph(value: &Json) -> bool {
    match value {
        Json::Object(map) => {
            map.get("nodes").is_some_and(Json::is_array)
                || map.get("edges").is_some_and(Json::is_array)
                || map.get("kind").and_then(Json::as_str) == Some(GRAPH_KIND)
        }
        _ => false,
    }
}

/// Classify a raw value, normalizing the matched branch.
///
/// Graph-shaped inputs run the full graph normalization; everything else is
/// base-canonicalized and kept opaque.
pub fn classify(raw: &Json) -> GraphResult<DomainInput> {
    if looks_like_graph(raw) {
        let state = normalize_graph(raw)?;
        debug!(
            nodes = state.nodes.len(),
            edges = state.edges.len(),
            "classified input as workflow graph"
        );
        Ok(DomainInput::Graph(state))
    } else {
        Ok(DomainInput::Opaque(canonicalize(raw)?))
    }
}
