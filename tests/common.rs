//! Common test utilities for building workflow definitions.
use keiro::prelude::*;

/// A node with only a label set, so configuration checks will flag whatever
/// the kind requires beyond that.
#[allow(dead_code)]
pub fn bare_node(id: &str, kind: NodeKind, label: &str) -> WorkflowNodeDefinition {
    WorkflowNodeDefinition {
        id: id.to_string(),
        kind,
        config: NodeConfig {
            label: label.to_string(),
            ..NodeConfig::default()
        },
    }
}

/// A fully configured trigger node.
#[allow(dead_code)]
pub fn trigger(id: &str, label: &str) -> WorkflowNodeDefinition {
    let mut node = bare_node(id, NodeKind::Trigger, label);
    node.config.trigger_type = Some("manual".to_string());
    node
}

/// A fully configured process node.
#[allow(dead_code)]
pub fn process(id: &str, label: &str) -> WorkflowNodeDefinition {
    let mut node = bare_node(id, NodeKind::Process, label);
    node.config.process_type = Some("transform".to_string());
    node
}

/// A fully configured condition node.
#[allow(dead_code)]
pub fn condition(id: &str, label: &str) -> WorkflowNodeDefinition {
    let mut node = bare_node(id, NodeKind::Condition, label);
    node.config.condition = Some("score > 0.5".to_string());
    node
}

/// A fully configured output node.
#[allow(dead_code)]
pub fn output(id: &str, label: &str) -> WorkflowNodeDefinition {
    let mut node = bare_node(id, NodeKind::Output, label);
    node.config.output_type = Some("message".to_string());
    node
}

#[allow(dead_code)]
pub fn edge(id: &str, source: &str, target: &str) -> WorkflowEdgeDefinition {
    WorkflowEdgeDefinition {
        id: id.to_string(),
        source: source.to_string(),
        target: target.to_string(),
        source_handle: None,
    }
}

#[allow(dead_code)]
pub fn branch(id: &str, source: &str, target: &str, handle: &str) -> WorkflowEdgeDefinition {
    WorkflowEdgeDefinition {
        id: id.to_string(),
        source: source.to_string(),
        target: target.to_string(),
        source_handle: Some(handle.to_string()),
    }
}

/// `trigger1 -> process1 -> output1`, everything fully configured.
#[allow(dead_code)]
pub fn linear_workflow() -> WorkflowDefinition {
    WorkflowDefinition {
        nodes: vec![
            trigger("trigger1", "Start"),
            process("process1", "Transform"),
            output("output1", "Reply"),
        ],
        edges: vec![
            edge("e1", "trigger1", "process1"),
            edge("e2", "process1", "output1"),
        ],
    }
}

/// `T -> C -> {X, Y}`, both branch targets dead ends, fully configured
/// nodes. Not a complete workflow (no output node); meant for path tests.
#[allow(dead_code)]
pub fn branching_workflow() -> WorkflowDefinition {
    WorkflowDefinition {
        nodes: vec![
            trigger("t", "Start"),
            condition("c", "Check score"),
            process("x", "High road"),
            process("y", "Low road"),
        ],
        edges: vec![
            edge("e1", "t", "c"),
            branch("e2", "c", "x", "true"),
            branch("e3", "c", "y", "false"),
        ],
    }
}

/// A complete branching workflow: `T -> C -> {X -> O1, Y -> O2}`.
#[allow(dead_code)]
pub fn branching_workflow_with_outputs() -> WorkflowDefinition {
    WorkflowDefinition {
        nodes: vec![
            trigger("t", "Start"),
            condition("c", "Check score"),
            process("x", "High road"),
            process("y", "Low road"),
            output("o1", "Accept"),
            output("o2", "Escalate"),
        ],
        edges: vec![
            edge("e1", "t", "c"),
            branch("e2", "c", "x", "true"),
            branch("e3", "c", "y", "false"),
            edge("e4", "x", "o1"),
            edge("e5", "y", "o2"),
        ],
    }
}

/// Collects the rendered messages, which are the observable contract.
#[allow(dead_code)]
pub fn messages(issues: &[ValidationIssue]) -> Vec<String> {
    issues.iter().map(|issue| issue.to_string()).collect()
}
