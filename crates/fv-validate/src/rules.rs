//! Rule orchestration.
//!
//! Rules run in a fixed order: start-node arity, end-node presence, edge
//! endpoint existence, task-key presence, cycle detection, reachability.
//! Within a rule, findings follow canonical node or edge order. The
//! reachability rule runs only when the graph has exactly one start node
//! and emits warnings, never errors.

use std::collections::{BTreeMap, HashSet};

use fv_canonical::{stable_id, Value};
use fv_graph::{classify, DomainInput, GraphNode, GraphState};
use fv_types::{Selector, Severity};
use serde_json::Value as Json;
use tracing::debug;

use crate::error::ValidateResult;
use crate::issue::{IssueCode, ValidationIssue, ValidationResult, RESULT_VERSION};
use crate::traverse::{find_cycle, reachable_from};

const NODE_TYPE_START: &str = "start";
const NODE_TYPE_END: &str = "end";
const NODE_TYPE_TASK: &str = "task";
const TASK_KEY_FIELD: &str = "task_key";

/// Validates a classified state.
///
/// Opaque states are valid by definition; their report carries the state
/// hash and nothing else. Graph states run the full rule set.
pub fn validate(input: &DomainInput) -> ValidateResult<ValidationResult> {
    let state_hash = input.content_hash()?;
    let DomainInput::Graph(state) = input else {
        return Ok(ValidationResult {
            issues: Vec::new(),
            state_hash,
            v: RESULT_VERSION,
            valid: true,
        });
    };

    let mut issues = Vec::new();

    let start_nodes: Vec<&GraphNode> = state
        .nodes
        .iter()
        .filter(|n| n.node_type == NODE_TYPE_START)
        .collect();
    if start_nodes.len() != 1 {
        let atoms = if start_nodes.is_empty() {
            vec![Selector::workflow_root()]
        } else {
            start_nodes.iter().map(|n| n.selector()).collect()
        };
        issues.push(make_issue(
            IssueCode::MissingOrAmbiguousStartNode,
            format!("Expected exactly 1 start node, found {}", start_nodes.len()),
            Severity::Error,
            atoms,
            None,
            None,
        )?);
    }

    if !state.nodes.iter().any(|n| n.node_type == NODE_TYPE_END) {
        issues.push(make_issue(
            IssueCode::MissingEndNode,
            "Expected at least 1 end node".to_string(),
            Severity::Error,
            vec![Selector::workflow_root()],
            None,
            None,
        )?);
    }

    let node_ids: HashSet<&str> = state.nodes.iter().map(|n| n.id.as_str()).collect();
    for edge in &state.edges {
        let mut missing = Vec::new();
        if !node_ids.contains(edge.from.as_str()) {
            missing.push(Selector::node(edge.from.as_str()));
        }
        if !node_ids.contains(edge.to.as_str()) {
            missing.push(Selector::node(edge.to.as_str()));
        }
        if missing.is_empty() {
            continue;
        }
        let rendered = missing
            .iter()
            .map(Selector::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        let mut atoms = vec![edge.selector()];
        atoms.extend(missing);
        issues.push(make_issue(
            IssueCode::OrphanEdge,
            format!("Edge references missing node(s): {rendered}"),
            Severity::Error,
            atoms,
            None,
            None,
        )?);
    }

    for node in &state.nodes {
        if node.node_type != NODE_TYPE_TASK {
            continue;
        }
        let has_key = node
            .config
            .get(TASK_KEY_FIELD)
            .and_then(Value::as_str)
            .is_some_and(|key| !key.is_empty());
        if has_key {
            continue;
        }
        issues.push(make_issue(
            IssueCode::MissingRequiredField,
            "Task node requires config.task_key".to_string(),
            Severity::Error,
            vec![node.selector()],
            Some("node.config.task_key"),
            Some(task_key_fix()),
        )?);
    }

    if let Some(walk) = find_cycle(state) {
        let message = format!("Cycle detected: {}", walk.join(" -> "));
        let atoms = walk.into_iter().map(Selector::node).collect();
        issues.push(make_issue(
            IssueCode::CycleDetected,
            message,
            Severity::Error,
            atoms,
            None,
            None,
        )?);
    }

    if let [start] = start_nodes.as_slice() {
        let reachable = reachable_from(start.id.as_str(), &state.edges);
        for node in &state.nodes {
            if reachable.contains(node.id.as_str()) {
                continue;
            }
            issues.push(make_issue(
                IssueCode::UnreachableNode,
                format!("Node is not reachable from start: {}", node.id),
                Severity::Warning,
                vec![node.selector()],
                None,
                None,
            )?);
        }
    }

    let valid = issues.iter().all(|issue| issue.severity != Severity::Error);
    debug!(
        issues = issues.len(),
        valid,
        state_hash = %state_hash,
        "validated workflow graph"
    );

    Ok(ValidationResult {
        issues,
        state_hash,
        v: RESULT_VERSION,
        valid,
    })
}

/// Classifies a raw value and validates it.
pub fn validate_value(raw: &Json) -> ValidateResult<ValidationResult> {
    validate(&classify(raw)?)
}

fn task_key_fix() -> Value {
    let mut set = BTreeMap::new();
    set.insert("config.task_key".to_string(), Value::from("<task_key>"));
    let mut fix = BTreeMap::new();
    fix.insert("set".to_string(), Value::Object(set));
    Value::Object(fix)
}

/// Builds an issue and derives its content-addressed id.
///
/// The id payload is the issue without `issue_id`, with absent optional
/// fields omitted entirely.
fn make_issue(
    code: IssueCode,
    message: String,
    severity: Severity,
    atoms: Vec<Selector>,
    region_hint: Option<&str>,
    suggested_fix: Option<Value>,
) -> ValidateResult<ValidationIssue> {
    let mut payload = BTreeMap::new();
    payload.insert(
        "atoms".to_string(),
        Value::Array(atoms.iter().map(|s| Value::Str(s.to_string())).collect()),
    );
    payload.insert("code".to_string(), Value::from(code.as_str()));
    payload.insert("message".to_string(), Value::from(message.as_str()));
    if let Some(hint) = region_hint {
        payload.insert("region_hint".to_string(), Value::from(hint));
    }
    payload.insert("severity".to_string(), Value::from(severity.as_str()));
    if let Some(fix) = &suggested_fix {
        payload.insert("suggested_fix".to_string(), fix.clone());
    }
    let issue_id = stable_id("issue", &Value::Object(payload))?;

    Ok(ValidationIssue {
        anchors: None,
        atoms,
        code,
        issue_id,
        message,
        region_hint: region_hint.map(str::to_string),
        severity,
        suggested_fix,
    })
}
