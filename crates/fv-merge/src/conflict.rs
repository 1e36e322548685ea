use fv_types::{Selector, Severity};
use serde::{Deserialize, Serialize};

/// Classification of a merge disagreement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConflictKind {
    /// Both sides introduced the same atom with different content.
    AddAdd,
    /// Left deleted an atom that right edited.
    DeleteEdit,
    /// Left edited an atom that right deleted.
    EditDelete,
    /// Both sides edited the same atom differently.
    EditEdit,
}

impl ConflictKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConflictKind::AddAdd => "add_add",
            ConflictKind::DeleteEdit => "delete_edit",
            ConflictKind::EditDelete => "edit_delete",
            ConflictKind::EditEdit => "edit_edit",
        }
    }
}

impl std::fmt::Display for ConflictKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An action a caller may apply to resolve a conflict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Resolution {
    TakeLeft,
    TakeRight,
    TakeBase,
    TakeDelete,
    Manual,
}

impl Resolution {
    pub fn as_str(&self) -> &'static str {
        match self {
            Resolution::TakeLeft => "take_left",
            Resolution::TakeRight => "take_right",
            Resolution::TakeBase => "take_base",
            Resolution::TakeDelete => "take_delete",
            Resolution::Manual => "manual",
        }
    }
}

impl std::fmt::Display for Resolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One merge disagreement, addressed to a single atom.
///
/// The `conflict_id` is derived from the conflicting content itself, so the
/// same disagreement produces the same id on every replica. Fields are
/// declared in canonical wire order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConflictRecord {
    /// Resolutions a caller may apply, most preferred first.
    pub allowed_resolutions: Vec<Resolution>,
    /// Content-derived id, stable across replicas.
    pub conflict_id: String,
    /// Resolution the engine already applied, when one exists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_resolution: Option<Resolution>,
    /// Human-readable account of the disagreement.
    pub reason: String,
    /// Atom the conflict addresses.
    pub selector: Selector,
    /// Whether the merged state is trustworthy without intervention.
    pub severity: Severity,
    /// Taxonomy bucket.
    #[serde(rename = "type")]
    pub kind: ConflictKind,
}

impl ConflictRecord {
    /// Whether `resolution` is one of the allowed actions for this conflict.
    pub fn allows(&self, resolution: Resolution) -> bool {
        self.allowed_resolutions.contains(&resolution)
    }

    /// Whether the engine already applied a default and the merged state is
    /// usable as-is.
    pub fn is_auto_resolved(&self) -> bool {
        self.default_resolution.is_some()
    }
}
