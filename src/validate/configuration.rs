use super::issue::ValidationIssue;
use crate::graph::{NodeKind, WorkflowDefinition, WorkflowNodeDefinition};
use serde_json::{Map, Value};

/// Per-type configuration completeness.
///
/// Fully configured nodes are skipped outright; otherwise each missing field
/// yields its own message. A `parameters` blob that fails to parse as JSON
/// is treated as absent here. The editor flags malformed JSON separately,
/// the validator does not.
pub(super) fn check(workflow: &WorkflowDefinition) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    for node in &workflow.nodes {
        if is_fully_configured(node) {
            continue;
        }

        if node.config.label.is_empty() {
            issues.push(ValidationIssue::MissingLabel {
                id: node.id.clone(),
            });
        }

        if node.kind == NodeKind::Trigger && is_missing(&node.config.trigger_type) {
            issues.push(ValidationIssue::MissingTriggerType {
                label: node.display_label().to_string(),
            });
        }

        if node.kind == NodeKind::Process && is_missing(&node.config.process_type) {
            issues.push(ValidationIssue::MissingProcessType {
                label: node.display_label().to_string(),
            });
        }

        if node.kind == NodeKind::Condition && is_missing(&node.config.condition) {
            issues.push(ValidationIssue::MissingCondition {
                label: node.display_label().to_string(),
            });
        }

        if node.kind == NodeKind::Output && is_missing(&node.config.output_type) {
            issues.push(ValidationIssue::MissingOutputType {
                label: node.display_label().to_string(),
            });
        }

        if node.kind == NodeKind::Process
            && node.config.process_type.as_deref() == Some("api-call")
            && !has_parameter(node, "endpoint")
        {
            issues.push(ValidationIssue::MissingEndpointParameter {
                label: node.display_label().to_string(),
            });
        }

        if node.kind == NodeKind::Process
            && node.config.process_type.as_deref() == Some("ai-completion")
            && !has_parameter(node, "model")
        {
            issues.push(ValidationIssue::MissingModelParameter {
                label: node.display_label().to_string(),
            });
        }
    }

    issues
}

/// Whether a node needs no configuration messages at all. The editor's
/// status indicator uses this to skip green-lit nodes.
pub fn is_fully_configured(node: &WorkflowNodeDefinition) -> bool {
    if node.config.label.is_empty() {
        return false;
    }

    match node.kind {
        NodeKind::Trigger => !is_missing(&node.config.trigger_type),
        NodeKind::Process => {
            if is_missing(&node.config.process_type) {
                return false;
            }
            match node.config.process_type.as_deref() {
                Some("api-call") => has_parameter(node, "endpoint"),
                Some("ai-completion") => has_parameter(node, "model"),
                _ => true,
            }
        }
        NodeKind::Condition => !is_missing(&node.config.condition),
        NodeKind::Output => !is_missing(&node.config.output_type),
        NodeKind::Custom => true,
    }
}

fn is_missing(field: &Option<String>) -> bool {
    field.as_deref().is_none_or(str::is_empty)
}

/// Parses the node's `parameters` blob and checks for a usable value under
/// `key`. Null and empty-string values count as missing.
fn has_parameter(node: &WorkflowNodeDefinition, key: &str) -> bool {
    parse_parameters(node).is_some_and(|params| match params.get(key) {
        Some(Value::Null) | None => false,
        Some(Value::String(s)) => !s.is_empty(),
        Some(_) => true,
    })
}

fn parse_parameters(node: &WorkflowNodeDefinition) -> Option<Map<String, Value>> {
    let raw = node.config.parameters.as_deref().unwrap_or("{}");
    match serde_json::from_str(raw) {
        Ok(Value::Object(map)) => Some(map),
        _ => None,
    }
}
