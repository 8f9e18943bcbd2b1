use super::issue::ValidationIssue;
use crate::graph::{NodeKind, WorkflowDefinition};
use itertools::Itertools;

/// Workflow-level completeness: global trigger/output cardinality, then the
/// branch requirement on every condition node.
pub(super) fn check(workflow: &WorkflowDefinition) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    if !workflow.nodes.iter().any(|n| n.kind == NodeKind::Trigger) {
        issues.push(ValidationIssue::MissingTriggerNode);
    }

    if !workflow.nodes.iter().any(|n| n.kind == NodeKind::Output) {
        issues.push(ValidationIssue::MissingOutputNode);
    }

    for node in &workflow.nodes {
        if node.kind != NodeKind::Condition {
            continue;
        }
        // A condition needs both branches wired, regardless of handle names.
        let exits = workflow.outgoing(&node.id).take(2).count();
        if exits < 2 {
            issues.push(ValidationIssue::MissingConditionBranch {
                label: node.config.label.clone(),
            });
        }
    }

    issues
}

/// The branch handles wired on a condition node, deduplicated in first-seen
/// order. Exposed for the editor's indicator UI, which keys condition exits
/// by handle rather than by count.
pub fn condition_handles<'a>(
    workflow: &'a WorkflowDefinition,
    node_id: &str,
) -> Vec<Option<&'a str>> {
    workflow
        .outgoing(node_id)
        .map(|edge| edge.source_handle.as_deref())
        .unique()
        .collect()
}
