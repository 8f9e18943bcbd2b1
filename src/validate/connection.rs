use super::issue::ValidationIssue;
use crate::graph::{NodeKind, WorkflowDefinition};

/// Connection checks: isolated nodes, trigger egress, output ingress.
///
/// A trigger with no edges at all is exempt from the isolation check but is
/// still caught by the egress check; the same node can legitimately appear
/// in more than one message here (matching the editor's behavior).
pub(super) fn check(workflow: &WorkflowDefinition) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    for node in &workflow.nodes {
        let has_connections = workflow
            .edges
            .iter()
            .any(|edge| edge.source == node.id || edge.target == node.id);

        if !has_connections && node.kind != NodeKind::Trigger {
            issues.push(ValidationIssue::NodeNotConnected {
                label: node.config.label.clone(),
                id: node.id.clone(),
            });
        }
    }

    for node in &workflow.nodes {
        if node.kind == NodeKind::Trigger && workflow.outgoing(&node.id).next().is_none() {
            issues.push(ValidationIssue::TriggerWithoutOutgoing {
                label: node.config.label.clone(),
            });
        }
    }

    for node in &workflow.nodes {
        if node.kind == NodeKind::Output && workflow.incoming(&node.id).next().is_none() {
            issues.push(ValidationIssue::OutputWithoutIncoming {
                label: node.config.label.clone(),
            });
        }
    }

    issues
}
