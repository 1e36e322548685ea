use fv_canonical::Value;
use fv_types::{ContentHash, Selector, Severity};
use serde::{Deserialize, Serialize};

/// Version tag carried in the `v` field of every [`ValidationResult`].
pub const RESULT_VERSION: u32 = 1;

/// Machine-readable identifier for a validation rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IssueCode {
    /// The graph does not have exactly one start node.
    MissingOrAmbiguousStartNode,
    /// The graph has no end node.
    MissingEndNode,
    /// An edge references a node that does not exist.
    OrphanEdge,
    /// A task node is missing its `config.task_key`.
    MissingRequiredField,
    /// The graph contains a directed cycle.
    CycleDetected,
    /// A node cannot be reached from the start node.
    UnreachableNode,
}

impl IssueCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueCode::MissingOrAmbiguousStartNode => "MISSING_OR_AMBIGUOUS_START_NODE",
            IssueCode::MissingEndNode => "MISSING_END_NODE",
            IssueCode::OrphanEdge => "ORPHAN_EDGE",
            IssueCode::MissingRequiredField => "MISSING_REQUIRED_FIELD",
            IssueCode::CycleDetected => "CYCLE_DETECTED",
            IssueCode::UnreachableNode => "UNREACHABLE_NODE",
        }
    }
}

impl std::fmt::Display for IssueCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One validation finding.
///
/// The `issue_id` is derived from the issue content (everything except the
/// id itself), so identical findings carry identical ids across replicas.
/// Fields are declared in canonical wire order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationIssue {
    /// Optional free-form anchors into external content.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anchors: Option<Vec<String>>,
    /// Atoms the finding addresses.
    pub atoms: Vec<Selector>,
    /// Rule that produced the finding.
    pub code: IssueCode,
    /// Content-derived id, stable across replicas.
    pub issue_id: String,
    /// Human-readable account of the finding.
    pub message: String,
    /// Dotted path narrowing the finding inside an atom.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region_hint: Option<String>,
    /// Whether the finding invalidates the state.
    pub severity: Severity,
    /// Machine-applicable repair, when one exists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggested_fix: Option<Value>,
}

/// Versioned validation report.
///
/// `valid` is false only when an error-severity issue is present; warnings
/// leave the state valid. Fields are declared in canonical wire order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// Findings in rule order, then input order within a rule.
    pub issues: Vec<ValidationIssue>,
    /// SHA-256 over the canonical bytes of the validated state.
    pub state_hash: ContentHash,
    /// Report format version.
    pub v: u32,
    /// Whether the state passed every error-severity rule.
    pub valid: bool,
}

impl ValidationResult {
    /// Findings of error severity.
    pub fn errors(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.issues.iter().filter(|i| i.severity == Severity::Error)
    }

    /// Findings of warning severity.
    pub fn warnings(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.issues.iter().filter(|i| i.severity == Severity::Warning)
    }
}
