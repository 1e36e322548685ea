use fv_canonical::Value;
use fv_diff::{diff_values, ChangeOp};
use fv_graph::classify;
use fv_merge::{merge_values, MergeOutcome};
use fv_validate::{validate_value, ValidationResult};
use serde_json::Value as Json;

use crate::error::{AdapterError, AdapterResult};

/// Operations a domain exposes to the kernel.
///
/// Canonicalization is the only mandatory operation: every adapter must map
/// a raw state onto deterministic canonical bytes. The structural
/// operations default to [`AdapterError::Unsupported`], so an adapter
/// implements exactly what its domain can express.
pub trait DomainAdapter {
    /// Canonical value for a raw domain state.
    fn canonicalize_domain(&self, raw: &Json) -> AdapterResult<Value>;

    /// Ordered change list between two states.
    fn diff(&self, from: &Json, to: &Json) -> AdapterResult<Vec<ChangeOp>> {
        let _ = (from, to);
        Err(AdapterError::Unsupported("diff"))
    }

    /// Three-way merge of two states against a common base.
    fn merge(&self, base: &Json, left: &Json, right: &Json) -> AdapterResult<MergeOutcome> {
        let _ = (base, left, right);
        Err(AdapterError::Unsupported("merge"))
    }

    /// Structural validation report for a state.
    fn validate(&self, state: &Json) -> AdapterResult<ValidationResult> {
        let _ = state;
        Err(AdapterError::Unsupported("validate"))
    }
}

/// Reference adapter for `workflow_graph@1` states.
///
/// Wires the kernel engines together: graph-shaped inputs take the domain
/// path, everything else degrades to opaque canonicalization.
#[derive(Debug, Clone, Copy, Default)]
pub struct WorkflowAdapter;

impl DomainAdapter for WorkflowAdapter {
    fn canonicalize_domain(&self, raw: &Json) -> AdapterResult<Value> {
        Ok(classify(raw)?.to_value())
    }

    fn diff(&self, from: &Json, to: &Json) -> AdapterResult<Vec<ChangeOp>> {
        Ok(diff_values(from, to)?)
    }

    fn merge(&self, base: &Json, left: &Json, right: &Json) -> AdapterResult<MergeOutcome> {
        Ok(merge_values(base, left, right)?)
    }

    fn validate(&self, state: &Json) -> AdapterResult<ValidationResult> {
        Ok(validate_value(state)?)
    }
}
