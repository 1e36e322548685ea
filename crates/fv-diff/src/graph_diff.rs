//! Atom-level comparison of classified states.

use std::collections::{BTreeMap, BTreeSet};

use fv_graph::{classify, DomainInput, GraphEdge, GraphNode, GraphState};
use fv_types::Selector;
use serde_json::Value as Json;

use crate::change::{ChangeKind, ChangeOp};
use crate::error::DiffResult;

/// Diff two classified states.
///
/// Graph pairs produce per-atom operations over the union of node and edge
/// ids, sorted by `(atom, op)`. Any pairing involving an opaque value
/// produces exactly one `replace` at `value:root`, even when both sides are
/// canonically equal; whole-value identity is the only granularity an opaque
/// value offers.
pub fn diff(from: &DomainInput, to: &DomainInput) -> Vec<ChangeOp> {
    match (from, to) {
        (DomainInput::Graph(a), DomainInput::Graph(b)) => diff_graphs(a, b),
        _ => vec![ChangeOp::updated(
            ChangeKind::Replace,
            Selector::value_root(),
            from.to_value(),
            to.to_value(),
        )],
    }
}

/// Classify two raw values, then diff them.
pub fn diff_values(from: &Json, to: &Json) -> DiffResult<Vec<ChangeOp>> {
    Ok(diff(&classify(from)?, &classify(to)?))
}

fn diff_graphs(from: &GraphState, to: &GraphState) -> Vec<ChangeOp> {
    let mut ops = Vec::new();

    let from_nodes: BTreeMap<&str, &GraphNode> =
        from.nodes.iter().map(|n| (n.id.as_str(), n)).collect();
    let to_nodes: BTreeMap<&str, &GraphNode> =
        to.nodes.iter().map(|n| (n.id.as_str(), n)).collect();
    let node_ids: BTreeSet<&str> = from_nodes.keys().chain(to_nodes.keys()).copied().collect();

    for id in node_ids {
        let atom = Selector::node(id);
        match (from_nodes.get(id), to_nodes.get(id)) {
            (None, Some(b)) => ops.push(ChangeOp::added(ChangeKind::AddNode, atom, b.to_value())),
            (Some(a), None) => {
                ops.push(ChangeOp::removed(ChangeKind::RemoveNode, atom, a.to_value()))
            }
            (Some(a), Some(b)) if a != b => ops.push(ChangeOp::updated(
                ChangeKind::UpdateNode,
                atom,
                a.to_value(),
                b.to_value(),
            )),
            _ => {}
        }
    }

    let from_edges: BTreeMap<&str, &GraphEdge> =
        from.edges.iter().map(|e| (e.id.as_str(), e)).collect();
    let to_edges: BTreeMap<&str, &GraphEdge> =
        to.edges.iter().map(|e| (e.id.as_str(), e)).collect();
    let edge_ids: BTreeSet<&str> = from_edges.keys().chain(to_edges.keys()).copied().collect();

    for id in edge_ids {
        let atom = Selector::edge(id);
        match (from_edges.get(id), to_edges.get(id)) {
            (None, Some(b)) => ops.push(ChangeOp::added(ChangeKind::AddEdge, atom, b.to_value())),
            (Some(a), None) => {
                ops.push(ChangeOp::removed(ChangeKind::RemoveEdge, atom, a.to_value()))
            }
            (Some(a), Some(b)) if a != b => ops.push(ChangeOp::updated(
                ChangeKind::UpdateEdge,
                atom,
                a.to_value(),
                b.to_value(),
            )),
            _ => {}
        }
    }

    ops.sort_by(|a, b| {
        a.atom
            .cmp(&b.atom)
            .then_with(|| a.op.as_str().cmp(b.op.as_str()))
    });
    ops
}
