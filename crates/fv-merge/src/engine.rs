use std::collections::{BTreeMap, BTreeSet};

use fv_canonical::{stable_id, Value};
use fv_graph::{classify, DomainInput, GraphEdge, GraphNode, GraphState};
use fv_types::{Selector, Severity};
use serde::Serialize;
use serde_json::Value as Json;
use tracing::debug;

use crate::conflict::{ConflictKind, ConflictRecord, Resolution};
use crate::error::MergeResult;

const REASON_ADD_ADD: &str = "Both sides added the atom differently";
const REASON_DELETE_EDIT: &str = "Left deleted the atom while right edited it";
const REASON_EDIT_DELETE: &str = "Right deleted the atom while left edited it";
const REASON_EDIT_EDIT: &str = "Both sides edited the atom differently";
const REASON_ROOT_EDIT_EDIT: &str = "Both sides edited value:root differently";

/// Result of a three-way merge.
///
/// `merged` always holds a complete state: error-severity conflicts leave
/// the base version of the disputed atom in place, and the add_add warning
/// applies its `take_left` default. Fields are declared in canonical wire
/// order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MergeOutcome {
    /// Conflicts in deterministic order: nodes before edges, ascending id,
    /// with at most one record per atom.
    pub conflicts: Vec<ConflictRecord>,
    /// The merged state.
    pub merged: DomainInput,
}

impl MergeOutcome {
    /// Whether the merge completed without any conflict records.
    pub fn is_clean(&self) -> bool {
        self.conflicts.is_empty()
    }

    /// Whether any conflict still requires caller intervention.
    pub fn needs_resolution(&self) -> bool {
        self.conflicts.iter().any(|c| c.severity == Severity::Error)
    }
}

/// Merges `left` and `right` against their common ancestor `base`.
///
/// When all three inputs are workflow graphs the merge runs atom by atom
/// over the union of node and edge ids, so edits to different atoms never
/// collide. Otherwise the three values are merged as a single atom at
/// `value:root`.
pub fn merge(base: &DomainInput, left: &DomainInput, right: &DomainInput) -> MergeResult<MergeOutcome> {
    match (base, left, right) {
        (DomainInput::Graph(b), DomainInput::Graph(l), DomainInput::Graph(r)) => {
            merge_graphs(b, l, r)
        }
        _ => merge_root(base, left, right),
    }
}

/// Classifies three raw values and merges them.
pub fn merge_values(base: &Json, left: &Json, right: &Json) -> MergeResult<MergeOutcome> {
    merge(&classify(base)?, &classify(left)?, &classify(right)?)
}

fn merge_graphs(base: &GraphState, left: &GraphState, right: &GraphState) -> MergeResult<MergeOutcome> {
    let mut merged = GraphState {
        name: base.name.clone(),
        meta: base.meta.clone(),
        nodes: Vec::new(),
        edges: Vec::new(),
    };
    let mut conflicts = Vec::new();

    let base_nodes: BTreeMap<&str, &GraphNode> =
        base.nodes.iter().map(|n| (n.id.as_str(), n)).collect();
    let left_nodes: BTreeMap<&str, &GraphNode> =
        left.nodes.iter().map(|n| (n.id.as_str(), n)).collect();
    let right_nodes: BTreeMap<&str, &GraphNode> =
        right.nodes.iter().map(|n| (n.id.as_str(), n)).collect();

    let node_ids: BTreeSet<&str> = base_nodes
        .keys()
        .chain(left_nodes.keys())
        .chain(right_nodes.keys())
        .copied()
        .collect();

    for id in node_ids {
        let selector = Selector::node(id);
        let (value, conflict) = merge_atom(
            base_nodes.get(id).copied(),
            left_nodes.get(id).copied(),
            right_nodes.get(id).copied(),
            &selector,
        )?;
        if let Some(conflict) = conflict {
            conflicts.push(conflict);
        }
        if let Some(node) = value {
            merged.nodes.push(node);
        }
    }

    let base_edges: BTreeMap<&str, &GraphEdge> =
        base.edges.iter().map(|e| (e.id.as_str(), e)).collect();
    let left_edges: BTreeMap<&str, &GraphEdge> =
        left.edges.iter().map(|e| (e.id.as_str(), e)).collect();
    let right_edges: BTreeMap<&str, &GraphEdge> =
        right.edges.iter().map(|e| (e.id.as_str(), e)).collect();

    let edge_ids: BTreeSet<&str> = base_edges
        .keys()
        .chain(left_edges.keys())
        .chain(right_edges.keys())
        .copied()
        .collect();

    for id in edge_ids {
        let selector = Selector::edge(id);
        let (value, conflict) = merge_atom(
            base_edges.get(id).copied(),
            left_edges.get(id).copied(),
            right_edges.get(id).copied(),
            &selector,
        )?;
        if let Some(conflict) = conflict {
            conflicts.push(conflict);
        }
        if let Some(edge) = value {
            merged.edges.push(edge);
        }
    }

    debug!(
        nodes = merged.nodes.len(),
        edges = merged.edges.len(),
        conflicts = conflicts.len(),
        "merged workflow graphs"
    );

    Ok(MergeOutcome {
        conflicts,
        merged: DomainInput::Graph(merged),
    })
}

/// Whole-value merge for inputs that are not all workflow graphs.
///
/// Last writer wins when one side is unchanged from base; when both sides
/// changed the root differently the base value survives alongside an
/// edit_edit conflict.
fn merge_root(base: &DomainInput, left: &DomainInput, right: &DomainInput) -> MergeResult<MergeOutcome> {
    let base_val = base.to_value();
    let left_val = left.to_value();
    let right_val = right.to_value();

    let mut conflicts = Vec::new();
    let merged = if left_val == right_val {
        left.clone()
    } else if base_val != left_val && base_val != right_val {
        conflicts.push(make_conflict(
            ConflictKind::EditEdit,
            &Selector::value_root(),
            Severity::Error,
            REASON_ROOT_EDIT_EDIT,
            &[Resolution::TakeLeft, Resolution::TakeRight, Resolution::TakeBase],
            None,
            Some(&base_val),
            Some(&left_val),
            Some(&right_val),
        )?);
        base.clone()
    } else if base_val == left_val {
        right.clone()
    } else {
        left.clone()
    };

    Ok(MergeOutcome { conflicts, merged })
}

trait Atom: Clone + PartialEq {
    fn to_value(&self) -> Value;
}

impl Atom for GraphNode {
    fn to_value(&self) -> Value {
        GraphNode::to_value(self)
    }
}

impl Atom for GraphEdge {
    fn to_value(&self) -> Value {
        GraphEdge::to_value(self)
    }
}

/// Per-atom three-way decision.
///
/// Returns the surviving atom (`None` means deleted) and at most one
/// conflict record.
fn merge_atom<T: Atom>(
    base: Option<&T>,
    left: Option<&T>,
    right: Option<&T>,
    selector: &Selector,
) -> MergeResult<(Option<T>, Option<ConflictRecord>)> {
    match (base, left, right) {
        (None, None, None) => Ok((None, None)),
        // Added on one side only.
        (None, Some(l), None) => Ok((Some(l.clone()), None)),
        (None, None, Some(r)) => Ok((Some(r.clone()), None)),
        // Added on both sides.
        (None, Some(l), Some(r)) => {
            if l == r {
                return Ok((Some(l.clone()), None));
            }
            let conflict = make_conflict(
                ConflictKind::AddAdd,
                selector,
                Severity::Warning,
                REASON_ADD_ADD,
                &[Resolution::TakeLeft, Resolution::TakeRight, Resolution::Manual],
                Some(Resolution::TakeLeft),
                None,
                Some(&l.to_value()),
                Some(&r.to_value()),
            )?;
            // Warnings apply their default resolution.
            Ok((Some(l.clone()), Some(conflict)))
        }
        // Deleted on both sides.
        (Some(_), None, None) => Ok((None, None)),
        // Left deleted.
        (Some(b), None, Some(r)) => {
            if b == r {
                return Ok((None, None));
            }
            let conflict = make_conflict(
                ConflictKind::DeleteEdit,
                selector,
                Severity::Error,
                REASON_DELETE_EDIT,
                &[
                    Resolution::TakeDelete,
                    Resolution::TakeRight,
                    Resolution::TakeBase,
                    Resolution::Manual,
                ],
                None,
                Some(&b.to_value()),
                None,
                Some(&r.to_value()),
            )?;
            // Errors preserve the base version.
            Ok((Some(b.clone()), Some(conflict)))
        }
        // Right deleted.
        (Some(b), Some(l), None) => {
            if b == l {
                return Ok((None, None));
            }
            let conflict = make_conflict(
                ConflictKind::EditDelete,
                selector,
                Severity::Error,
                REASON_EDIT_DELETE,
                &[
                    Resolution::TakeDelete,
                    Resolution::TakeLeft,
                    Resolution::TakeBase,
                    Resolution::Manual,
                ],
                None,
                Some(&b.to_value()),
                Some(&l.to_value()),
                None,
            )?;
            Ok((Some(b.clone()), Some(conflict)))
        }
        // Present everywhere.
        (Some(b), Some(l), Some(r)) => {
            if l == r {
                return Ok((Some(l.clone()), None));
            }
            if b == l {
                return Ok((Some(r.clone()), None));
            }
            if b == r {
                return Ok((Some(l.clone()), None));
            }
            let conflict = make_conflict(
                ConflictKind::EditEdit,
                selector,
                Severity::Error,
                REASON_EDIT_EDIT,
                &[
                    Resolution::TakeLeft,
                    Resolution::TakeRight,
                    Resolution::TakeBase,
                    Resolution::Manual,
                ],
                None,
                Some(&b.to_value()),
                Some(&l.to_value()),
                Some(&r.to_value()),
            )?;
            Ok((Some(b.clone()), Some(conflict)))
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn make_conflict(
    kind: ConflictKind,
    selector: &Selector,
    severity: Severity,
    reason: &str,
    allowed: &[Resolution],
    default_resolution: Option<Resolution>,
    base: Option<&Value>,
    left: Option<&Value>,
    right: Option<&Value>,
) -> MergeResult<ConflictRecord> {
    let payload = conflict_payload(
        kind,
        selector,
        severity,
        reason,
        allowed,
        default_resolution,
        base,
        left,
        right,
    );
    let conflict_id = stable_id("conflict", &payload)?;
    Ok(ConflictRecord {
        allowed_resolutions: allowed.to_vec(),
        conflict_id,
        default_resolution,
        reason: reason.to_string(),
        selector: selector.clone(),
        severity,
        kind,
    })
}

/// Hash payload for a conflict id. Covers the conflicting values and the
/// full conflict spec so distinct disagreements never share an id.
#[allow(clippy::too_many_arguments)]
fn conflict_payload(
    kind: ConflictKind,
    selector: &Selector,
    severity: Severity,
    reason: &str,
    allowed: &[Resolution],
    default_resolution: Option<Resolution>,
    base: Option<&Value>,
    left: Option<&Value>,
    right: Option<&Value>,
) -> Value {
    let mut spec = BTreeMap::new();
    spec.insert(
        "allowed_resolutions".to_string(),
        Value::Array(allowed.iter().map(|r| Value::from(r.as_str())).collect()),
    );
    if let Some(default) = default_resolution {
        spec.insert("default_resolution".to_string(), Value::from(default.as_str()));
    }
    spec.insert("reason".to_string(), Value::from(reason));
    spec.insert("selector".to_string(), Value::Str(selector.to_string()));
    spec.insert("severity".to_string(), Value::from(severity.as_str()));
    spec.insert("type".to_string(), Value::from(kind.as_str()));

    let mut payload = BTreeMap::new();
    payload.insert("base".to_string(), base.cloned().unwrap_or(Value::Null));
    payload.insert("left".to_string(), left.cloned().unwrap_or(Value::Null));
    payload.insert("right".to_string(), right.cloned().unwrap_or(Value::Null));
    payload.insert("spec".to_string(), Value::Object(spec));
    Value::Object(payload)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn graph(nodes: Json, edges: Json) -> Json {
        json!({"kind": "workflow_graph@1", "nodes": nodes, "edges": edges})
    }

    fn outcome_json(base: &Json, left: &Json, right: &Json) -> String {
        let outcome = merge_values(base, left, right).unwrap();
        serde_json::to_string(&outcome).unwrap()
    }

    #[test]
    fn disjoint_edits_merge_cleanly() {
        let base = json!({
            "name": "Order Flow",
            "nodes": [
                {"id": "begin", "type": "start"},
                {"id": "ship", "type": "task", "config": {"task_key": "ship_order", "retries": 3}},
                {"id": "finish", "type": "end"},
            ],
            "edges": [
                {"from": "begin", "to": "ship"},
                {"from": "ship", "to": "finish"},
            ],
        });
        let left = json!({
            "name": "Order Flow",
            "nodes": [
                {"id": "begin", "type": "start"},
                {"id": "ship", "type": "task", "label": "Ship & log",
                 "config": {"task_key": "ship_order", "retries": 3}},
                {"id": "finish", "type": "end"},
            ],
            "edges": [
                {"from": "begin", "to": "ship"},
                {"from": "ship", "to": "finish"},
            ],
        });
        let right = json!({
            "name": "Order Flow",
            "nodes": [
                {"id": "begin", "type": "start"},
                {"id": "ship", "type": "task", "config": {"task_key": "ship_order", "retries": 3}},
                {"id": "finish", "type": "end"},
                {"id": "notify", "type": "task", "config": {"task_key": "notify_user"}},
            ],
            "edges": [
                {"from": "begin", "to": "ship"},
                {"from": "ship", "to": "finish"},
                {"from": "ship", "to": "notify"},
            ],
        });

        assert_eq!(
            outcome_json(&base, &left, &right),
            "{\"conflicts\":[],\"merged\":{\"edges\":[\
             {\"from\":\"begin\",\"id\":\"begin->ship\",\"to\":\"ship\",\"type\":\"flow\"},\
             {\"from\":\"ship\",\"id\":\"ship->finish\",\"to\":\"finish\",\"type\":\"flow\"},\
             {\"from\":\"ship\",\"id\":\"ship->notify\",\"to\":\"notify\",\"type\":\"flow\"}],\
             \"kind\":\"workflow_graph@1\",\"name\":\"Order Flow\",\"nodes\":[\
             {\"config\":{},\"id\":\"begin\",\"type\":\"start\"},\
             {\"config\":{},\"id\":\"finish\",\"type\":\"end\"},\
             {\"config\":{\"task_key\":\"notify_user\"},\"id\":\"notify\",\"type\":\"task\"},\
             {\"config\":{\"retries\":3,\"task_key\":\"ship_order\"},\"id\":\"ship\",\
             \"label\":\"Ship & log\",\"type\":\"task\"}]}}"
        );
    }

    #[test]
    fn edit_edit_preserves_base_and_reports_error() {
        let base = graph(json!([{"id": "A", "type": "task", "label": "x"}]), json!([]));
        let left = graph(json!([{"id": "A", "type": "task", "label": "y"}]), json!([]));
        let right = graph(json!([{"id": "A", "type": "task", "label": "z"}]), json!([]));

        assert_eq!(
            outcome_json(&base, &left, &right),
            "{\"conflicts\":[{\
             \"allowed_resolutions\":[\"take_left\",\"take_right\",\"take_base\",\"manual\"],\
             \"conflict_id\":\"77694314-bd3f-59d8-a07f-b54df400f97c\",\
             \"reason\":\"Both sides edited the atom differently\",\
             \"selector\":\"node:A\",\"severity\":\"error\",\"type\":\"edit_edit\"}],\
             \"merged\":{\"edges\":[],\"kind\":\"workflow_graph@1\",\"nodes\":[\
             {\"config\":{},\"id\":\"A\",\"label\":\"x\",\"type\":\"task\"}]}}"
        );
    }

    #[test]
    fn add_add_takes_left_with_warning() {
        let base = graph(json!([]), json!([]));
        let left = graph(json!([{"id": "N", "type": "task", "label": "from left"}]), json!([]));
        let right = graph(json!([{"id": "N", "type": "task", "label": "from right"}]), json!([]));

        assert_eq!(
            outcome_json(&base, &left, &right),
            "{\"conflicts\":[{\
             \"allowed_resolutions\":[\"take_left\",\"take_right\",\"manual\"],\
             \"conflict_id\":\"da0a2d92-481a-5a36-8127-7e3a48eaacc4\",\
             \"default_resolution\":\"take_left\",\
             \"reason\":\"Both sides added the atom differently\",\
             \"selector\":\"node:N\",\"severity\":\"warning\",\"type\":\"add_add\"}],\
             \"merged\":{\"edges\":[],\"kind\":\"workflow_graph@1\",\"nodes\":[\
             {\"config\":{},\"id\":\"N\",\"label\":\"from left\",\"type\":\"task\"}]}}"
        );

        let outcome = merge_values(&base, &left, &right).unwrap();
        assert!(!outcome.needs_resolution());
        assert!(outcome.conflicts[0].is_auto_resolved());
    }

    #[test]
    fn delete_edit_preserves_base() {
        let base = graph(json!([{"id": "D", "type": "task", "label": "orig"}]), json!([]));
        let left = graph(json!([]), json!([]));
        let right = graph(json!([{"id": "D", "type": "task", "label": "changed"}]), json!([]));

        let outcome = merge_values(&base, &left, &right).unwrap();
        assert_eq!(outcome.conflicts.len(), 1);
        let conflict = &outcome.conflicts[0];
        assert_eq!(conflict.kind, ConflictKind::DeleteEdit);
        assert_eq!(conflict.conflict_id, "750d9bbe-01b8-51f2-a9e3-548d8ee4cf2b");
        assert_eq!(
            conflict.allowed_resolutions,
            vec![
                Resolution::TakeDelete,
                Resolution::TakeRight,
                Resolution::TakeBase,
                Resolution::Manual,
            ]
        );
        assert_eq!(conflict.default_resolution, None);
        assert!(outcome.needs_resolution());

        let merged = outcome.merged.as_graph().unwrap();
        assert_eq!(merged.nodes.len(), 1);
        assert_eq!(merged.nodes[0].label.as_deref(), Some("orig"));
    }

    #[test]
    fn edit_delete_preserves_base() {
        let base = graph(json!([{"id": "D", "type": "task", "label": "orig"}]), json!([]));
        let left = graph(json!([{"id": "D", "type": "task", "label": "changed"}]), json!([]));
        let right = graph(json!([]), json!([]));

        let outcome = merge_values(&base, &left, &right).unwrap();
        assert_eq!(outcome.conflicts.len(), 1);
        let conflict = &outcome.conflicts[0];
        assert_eq!(conflict.kind, ConflictKind::EditDelete);
        assert_eq!(conflict.conflict_id, "dcd9c9b7-d472-58b9-a7ae-53112a3d720b");
        assert_eq!(
            conflict.allowed_resolutions,
            vec![
                Resolution::TakeDelete,
                Resolution::TakeLeft,
                Resolution::TakeBase,
                Resolution::Manual,
            ]
        );

        let merged = outcome.merged.as_graph().unwrap();
        assert_eq!(merged.nodes[0].label.as_deref(), Some("orig"));
    }

    #[test]
    fn one_sided_changes_apply_cleanly() {
        let base = graph(
            json!([
                {"id": "drop", "type": "task", "config": {"task_key": "d"}},
                {"id": "keep", "type": "start"},
                {"id": "tune", "type": "task", "config": {"task_key": "t"}},
            ]),
            json!([{"id": "e", "from": "keep", "to": "tune"}]),
        );
        // Left deletes `drop` and adds `new`; right edits `tune`, deletes
        // the edge, and adds the same `new`.
        let left = graph(
            json!([
                {"id": "keep", "type": "start"},
                {"id": "tune", "type": "task", "config": {"task_key": "t"}},
                {"id": "new", "type": "task", "label": "same"},
            ]),
            json!([{"id": "e", "from": "keep", "to": "tune"}]),
        );
        let right = graph(
            json!([
                {"id": "drop", "type": "task", "config": {"task_key": "d"}},
                {"id": "keep", "type": "start"},
                {"id": "tune", "type": "task", "label": "tuned", "config": {"task_key": "t"}},
                {"id": "new", "type": "task", "label": "same"},
            ]),
            json!([]),
        );

        let outcome = merge_values(&base, &left, &right).unwrap();
        assert!(outcome.is_clean());
        let merged = outcome.merged.as_graph().unwrap();
        let ids: Vec<&str> = merged.nodes.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, ["keep", "new", "tune"]);
        assert_eq!(merged.node("tune").unwrap().label.as_deref(), Some("tuned"));
        assert_eq!(merged.node("new").unwrap().label.as_deref(), Some("same"));
        assert!(merged.edges.is_empty());
    }

    #[test]
    fn same_edit_on_both_sides_is_clean() {
        let base = graph(json!([{"id": "A", "type": "task", "label": "x"}]), json!([]));
        let both = graph(json!([{"id": "A", "type": "task", "label": "y"}]), json!([]));

        let outcome = merge_values(&base, &both, &both).unwrap();
        assert!(outcome.is_clean());
        let merged = outcome.merged.as_graph().unwrap();
        assert_eq!(merged.nodes[0].label.as_deref(), Some("y"));
    }

    #[test]
    fn same_delete_on_both_sides_is_clean() {
        let base = graph(json!([{"id": "A", "type": "task"}]), json!([]));
        let empty = graph(json!([]), json!([]));

        let outcome = merge_values(&base, &empty, &empty).unwrap();
        assert!(outcome.is_clean());
        assert!(outcome.merged.as_graph().unwrap().nodes.is_empty());
    }

    #[test]
    fn root_merge_takes_changed_side() {
        let base = json!({"v": 1});
        let left = json!({"v": 2});
        let right = json!({"v": 3});

        assert_eq!(
            outcome_json(&base, &left, &right),
            "{\"conflicts\":[{\
             \"allowed_resolutions\":[\"take_left\",\"take_right\",\"take_base\"],\
             \"conflict_id\":\"53489128-7108-5c1e-b491-90c274bfd905\",\
             \"reason\":\"Both sides edited value:root differently\",\
             \"selector\":\"value:root\",\"severity\":\"error\",\"type\":\"edit_edit\"}],\
             \"merged\":{\"v\":1}}"
        );

        let same = merge_values(&base, &json!({"v": 4}), &json!({"v": 4})).unwrap();
        assert!(same.is_clean());
        assert_eq!(serde_json::to_string(&same.merged).unwrap(), "{\"v\":4}");

        let left_only = merge_values(&base, &json!({"v": 2}), &base).unwrap();
        assert!(left_only.is_clean());
        assert_eq!(serde_json::to_string(&left_only.merged).unwrap(), "{\"v\":2}");

        let right_only = merge_values(&base, &base, &json!({"v": 3})).unwrap();
        assert!(right_only.is_clean());
        assert_eq!(serde_json::to_string(&right_only.merged).unwrap(), "{\"v\":3}");
    }

    #[test]
    fn mixed_inputs_fall_back_to_root_merge() {
        let base = graph(json!([{"id": "a", "type": "start"}]), json!([]));
        let left = graph(json!([{"id": "a", "type": "start"}]), json!([]));
        let right = json!("plain");

        let outcome = merge_values(&base, &left, &right).unwrap();
        // Only right changed, so right wins even though it is not a graph.
        assert!(outcome.is_clean());
        assert_eq!(serde_json::to_string(&outcome.merged).unwrap(), "\"plain\"");
    }

    #[test]
    fn conflict_id_tracks_conflicting_content() {
        let base = graph(json!([{"id": "A", "type": "task", "label": "x"}]), json!([]));
        let left = graph(json!([{"id": "A", "type": "task", "label": "y"}]), json!([]));
        let right_one = graph(json!([{"id": "A", "type": "task", "label": "z"}]), json!([]));
        let right_two = graph(json!([{"id": "A", "type": "task", "label": "w"}]), json!([]));

        let one = merge_values(&base, &left, &right_one).unwrap();
        let two = merge_values(&base, &left, &right_two).unwrap();
        assert_ne!(one.conflicts[0].conflict_id, two.conflicts[0].conflict_id);

        let again = merge_values(&base, &left, &right_one).unwrap();
        assert_eq!(one, again);
    }

    #[test]
    fn conflicts_order_nodes_before_edges() {
        let base = graph(
            json!([
                {"id": "a", "type": "task", "label": "1"},
                {"id": "b", "type": "task", "label": "1"},
            ]),
            json!([{"id": "e", "from": "a", "to": "b", "label": "1"}]),
        );
        let left = graph(
            json!([
                {"id": "a", "type": "task", "label": "2"},
                {"id": "b", "type": "task", "label": "2"},
            ]),
            json!([{"id": "e", "from": "a", "to": "b", "label": "2"}]),
        );
        let right = graph(
            json!([
                {"id": "a", "type": "task", "label": "3"},
                {"id": "b", "type": "task", "label": "3"},
            ]),
            json!([{"id": "e", "from": "a", "to": "b", "label": "3"}]),
        );

        let outcome = merge_values(&base, &left, &right).unwrap();
        let selectors: Vec<String> =
            outcome.conflicts.iter().map(|c| c.selector.to_string()).collect();
        assert_eq!(selectors, vec!["node:a", "node:b", "edge:e"]);
    }

    #[test]
    fn merged_graph_inherits_base_name_and_meta() {
        let base = json!({
            "name": "Flow",
            "meta": {"owner": "ops"},
            "nodes": [{"id": "a", "type": "start"}],
            "edges": [],
        });
        let left = json!({
            "name": "Flow",
            "meta": {"owner": "ops"},
            "nodes": [{"id": "a", "type": "start"}, {"id": "b", "type": "end"}],
            "edges": [],
        });

        let outcome = merge_values(&base, &left, &base).unwrap();
        let merged = outcome.merged.as_graph().unwrap();
        assert_eq!(merged.name.as_deref(), Some("Flow"));
        assert!(merged.meta.is_some());
        assert_eq!(merged.nodes.len(), 2);
    }
}
