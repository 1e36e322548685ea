use std::fmt;

use fv_canonical::Value;
use fv_types::Selector;
use serde::{Deserialize, Serialize};

/// The change vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeKind {
    AddNode,
    AddEdge,
    RemoveNode,
    RemoveEdge,
    UpdateNode,
    UpdateEdge,
    Replace,
}

impl ChangeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeKind::AddNode => "add_node",
            ChangeKind::AddEdge => "add_edge",
            ChangeKind::RemoveNode => "remove_node",
            ChangeKind::RemoveEdge => "remove_edge",
            ChangeKind::UpdateNode => "update_node",
            ChangeKind::UpdateEdge => "update_edge",
            ChangeKind::Replace => "replace",
        }
    }
}

impl fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One observed change at a single atom.
///
/// `before` is present for removals and updates, `after` for additions and
/// updates; a whole-value `replace` carries both. Fields are declared in
/// code-point order so the derived serialization is canonical.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeOp {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<Value>,
    pub atom: Selector,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<Value>,
    pub op: ChangeKind,
}

impl ChangeOp {
    pub fn added(op: ChangeKind, atom: Selector, after: Value) -> Self {
        Self {
            after: Some(after),
            atom,
            before: None,
            op,
        }
    }

    pub fn removed(op: ChangeKind, atom: Selector, before: Value) -> Self {
        Self {
            after: None,
            atom,
            before: Some(before),
            op,
        }
    }

    pub fn updated(op: ChangeKind, atom: Selector, before: Value, after: Value) -> Self {
        Self {
            after: Some(after),
            atom,
            before: Some(before),
            op,
        }
    }
}
