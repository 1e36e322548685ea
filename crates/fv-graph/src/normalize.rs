//! Normalization of raw graph descriptions into canonical [`GraphState`]s.
//!
//! Shape rules come first (defaults, trimming, dropped fields), then every
//! retained leaf goes through base canonicalization. Composite defaults such
//! as the `from->to` edge id are assembled from the raw field text before
//! string normalization, so the composite itself is normalized as one unit.

use std::collections::BTreeMap;

use fv_canonical::text::normalize_string;
use fv_canonical::{canonicalize, CanonResult, Value};
use serde_json::Value as Json;

use crate::error::{GraphError, GraphResult};
use crate::model::{GraphEdge, GraphNode, GraphState};

/// Normalize a raw value into a canonical graph state.
///
/// Missing `nodes`/`edges` arrays become empty; both collections are sorted
/// by canonical id. Unknown fields are dropped.
pub fn normalize_graph(raw: &Json) -> GraphResult<GraphState> {
    let obj = match raw {
        Json::Object(map) => map,
        _ => return Err(GraphError::ExpectedObject("graph")),
    };

    let mut nodes = match obj.get("nodes") {
        Some(Json::Array(items)) => items
            .iter()
            .map(normalize_node)
            .collect::<GraphResult<Vec<_>>>()?,
        _ => Vec::new(),
    };
    let mut edges = match obj.get("edges") {
        Some(Json::Array(items)) => items
            .iter()
            .map(normalize_edge)
            .collect::<GraphResult<Vec<_>>>()?,
        _ => Vec::new(),
    };
    nodes.sort_by(|a, b| a.id.cmp(&b.id));
    edges.sort_by(|a, b| a.id.cmp(&b.id));

    let meta = match obj.get("meta") {
        Some(Json::Object(map)) => Some(canonical_map(map)?),
        _ => None,
    };
    let name = match obj.get("name").and_then(Json::as_str) {
        Some(s) => Some(normalize_string(s)?),
        None => None,
    };

    Ok(GraphState {
        name,
        meta,
        nodes,
        edges,
    })
}

fn normalize_node(raw: &Json) -> GraphResult<GraphNode> {
    let obj = match raw {
        Json::Object(map) => map,
        _ => return Err(GraphError::ExpectedObject("node")),
    };

    let id = match obj.get("id").and_then(Json::as_str) {
        Some(s) => normalize_string(s)?,
        None => return Err(GraphError::ExpectedString("node.id")),
    };
    let node_type = match obj.get("type").and_then(Json::as_str).map(str::trim) {
        Some(t) if !t.is_empty() => normalize_string(t)?,
        _ => "task".to_string(),
    };
    let label = match obj.get("label").and_then(Json::as_str) {
        Some(s) => Some(normalize_string(s)?),
        None => None,
    };
    let config = match obj.get("config") {
        Some(Json::Object(map)) => canonical_map(map)?,
        _ => BTreeMap::new(),
    };
    let meta = match obj.get("meta") {
        Some(Json::Object(map)) => Some(canonical_map(map)?),
        _ => None,
    };

    Ok(GraphNode {
        id,
        node_type,
        label,
        config,
        meta,
    })
}

fn normalize_edge(raw: &Json) -> GraphResult<GraphEdge> {
    let obj = match raw {
        Json::Object(map) => map,
        _ => return Err(GraphError::ExpectedObject("edge")),
    };

    let from_raw = obj
        .get("from")
        .and_then(Json::as_str)
        .ok_or(GraphError::ExpectedString("edge.from"))?;
    let to_raw = obj
        .get("to")
        .and_then(Json::as_str)
        .ok_or(GraphError::ExpectedString("edge.to"))?;

    let id_raw = match obj.get("id").and_then(Json::as_str).map(str::trim) {
        Some(s) if !s.is_empty() => s.to_string(),
        _ => format!("{from_raw}->{to_raw}"),
    };
    let edge_type = match obj.get("type").and_then(Json::as_str).map(str::trim) {
        Some(t) if !t.is_empty() => normalize_string(t)?,
        _ => "flow".to_string(),
    };
    let label = match obj.get("label").and_then(Json::as_str) {
        Some(s) => Some(normalize_string(s)?),
        None => None,
    };
    let condition = match obj.get("condition") {
        Some(Json::Object(map)) => Some(canonical_map(map)?),
        _ => None,
    };
    let meta = match obj.get("meta") {
        Some(Json::Object(map)) => Some(canonical_map(map)?),
        _ => None,
    };

    Ok(GraphEdge {
        id: normalize_string(&id_raw)?,
        from: normalize_string(from_raw)?,
        to: normalize_string(to_raw)?,
        edge_type,
        label,
        condition,
        meta,
    })
}

fn canonical_map(map: &serde_json::Map<String, Json>) -> CanonResult<BTreeMap<String, Value>> {
    let mut out = BTreeMap::new();
    for (key, value) in map {
        out.insert(key.clone(), canonicalize(value)?);
    }
    Ok(out)
}
