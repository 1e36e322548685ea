use std::collections::BTreeMap;

use fv_canonical::{hash_canonical, CanonResult, Value};
use fv_types::{ContentHash, Selector};
use serde::{Serialize, Serializer};

/// Kind tag carried by every canonical workflow graph.
pub const GRAPH_KIND: &str = "workflow_graph@1";

/// A workflow step in canonical form.
///
/// Fields hold already-canonical content: `id` and `node_type` are
/// normalized strings, `config` and `meta` are canonical objects. The wire
/// form is produced by [`GraphNode::to_value`] with keys in code-point
/// order, omitting `label` and `meta` when absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphNode {
    pub id: String,
    pub node_type: String,
    pub label: Option<String>,
    pub config: BTreeMap<String, Value>,
    pub meta: Option<BTreeMap<String, Value>>,
}

impl GraphNode {
    pub fn to_value(&self) -> Value {
        let mut map = BTreeMap::new();
        map.insert("config".to_string(), Value::Object(self.config.clone()));
        map.insert("id".to_string(), Value::Str(self.id.clone()));
        if let Some(label) = &self.label {
            map.insert("label".to_string(), Value::Str(label.clone()));
        }
        if let Some(meta) = &self.meta {
            map.insert("meta".to_string(), Value::Object(meta.clone()));
        }
        map.insert("type".to_string(), Value::Str(self.node_type.clone()));
        Value::Object(map)
    }

    pub fn selector(&self) -> Selector {
        Selector::node(&self.id)
    }
}

/// A directed connection between two steps, in canonical form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphEdge {
    pub id: String,
    pub from: String,
    pub to: String,
    pub edge_type: String,
    pub label: Option<String>,
    pub condition: Option<BTreeMap<String, Value>>,
    pub meta: Option<BTreeMap<String, Value>>,
}

impl GraphEdge {
    pub fn to_value(&self) -> Value {
        let mut map = BTreeMap::new();
        if let Some(condition) = &self.condition {
            map.insert("condition".to_string(), Value::Object(condition.clone()));
        }
        map.insert("from".to_string(), Value::Str(self.from.clone()));
        map.insert("id".to_string(), Value::Str(self.id.clone()));
        if let Some(label) = &self.label {
            map.insert("label".to_string(), Value::Str(label.clone()));
        }
        if let Some(meta) = &self.meta {
            map.insert("meta".to_string(), Value::Object(meta.clone()));
        }
        map.insert("to".to_string(), Value::Str(self.to.clone()));
        map.insert("type".to_string(), Value::Str(self.edge_type.clone()));
        Value::Object(map)
    }

    pub fn selector(&self) -> Selector {
        Selector::edge(&self.id)
    }
}

/// A canonical `workflow_graph@1` state.
///
/// `nodes` and `edges` are sorted by id; [`GraphState::to_value`] injects
/// the [`GRAPH_KIND`] tag and omits `meta`/`name` when absent.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GraphState {
    pub name: Option<String>,
    pub meta: Option<BTreeMap<String, Value>>,
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}

impl GraphState {
    pub fn to_value(&self) -> Value {
        let mut map = BTreeMap::new();
        map.insert(
            "edges".to_string(),
            Value::Array(self.edges.iter().map(GraphEdge::to_value).collect()),
        );
        map.insert("kind".to_string(), Value::Str(GRAPH_KIND.to_string()));
        if let Some(meta) = &self.meta {
            map.insert("meta".to_string(), Value::Object(meta.clone()));
        }
        if let Some(name) = &self.name {
            map.insert("name".to_string(), Value::Str(name.clone()));
        }
        map.insert(
            "nodes".to_string(),
            Value::Array(self.nodes.iter().map(GraphNode::to_value).collect()),
        );
        Value::Object(map)
    }

    pub fn node(&self, id: &str) -> Option<&GraphNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn edge(&self, id: &str) -> Option<&GraphEdge> {
        self.edges.iter().find(|e| e.id == id)
    }

    /// SHA-256 over the canonical bytes of this state.
    pub fn content_hash(&self) -> CanonResult<ContentHash> {
        hash_canonical(&self.to_value())
    }
}

impl Serialize for GraphNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_value().serialize(serializer)
    }
}

impl Serialize for GraphEdge {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_value().serialize(serializer)
    }
}

impl Serialize for GraphState {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_value().serialize(serializer)
    }
}
