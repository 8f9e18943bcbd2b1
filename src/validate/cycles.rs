use super::issue::ValidationIssue;
use crate::graph::WorkflowDefinition;
use ahash::{AHashMap, AHashSet};

/// Cycle detection over the directed edge set.
///
/// Depth-first search with a permanent `visited` set and a per-branch
/// recursion stack, restarted from every unvisited node (the graph is not
/// assumed weakly connected). Each DFS root reports at most the first cycle
/// it encounters; exhaustive enumeration in densely cyclic graphs is not
/// attempted.
pub(super) fn check(workflow: &WorkflowDefinition) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    let mut adjacency: AHashMap<&str, Vec<&str>> = workflow
        .nodes
        .iter()
        .map(|node| (node.id.as_str(), Vec::new()))
        .collect();

    for edge in &workflow.edges {
        // Unknown sources are an upstream invariant violation; skip them
        // rather than materializing phantom nodes.
        if let Some(targets) = adjacency.get_mut(edge.source.as_str()) {
            targets.push(edge.target.as_str());
        }
    }

    let mut visited = AHashSet::new();
    let mut stack = AHashSet::new();

    for node in &workflow.nodes {
        if !visited.contains(node.id.as_str()) {
            let mut path = Vec::new();
            detect(
                workflow,
                &adjacency,
                node.id.as_str(),
                &mut visited,
                &mut stack,
                &mut path,
                &mut issues,
            );
        }
    }

    issues
}

/// Returns true once a cycle has been found on the current branch, which
/// unwinds the whole DFS for this root.
fn detect<'a>(
    workflow: &WorkflowDefinition,
    adjacency: &AHashMap<&'a str, Vec<&'a str>>,
    node_id: &'a str,
    visited: &mut AHashSet<&'a str>,
    stack: &mut AHashSet<&'a str>,
    path: &mut Vec<&'a str>,
    issues: &mut Vec<ValidationIssue>,
) -> bool {
    if stack.contains(node_id) {
        if let Some(start) = path.iter().position(|id| *id == node_id) {
            let mut labels: Vec<String> = path[start..]
                .iter()
                .map(|id| workflow.label_or_id(id).to_string())
                .collect();
            labels.push(workflow.label_or_id(node_id).to_string());
            issues.push(ValidationIssue::CycleDetected { path: labels });
        }
        return true;
    }

    if visited.contains(node_id) {
        return false;
    }

    visited.insert(node_id);
    stack.insert(node_id);
    path.push(node_id);

    if let Some(targets) = adjacency.get(node_id) {
        for &target in targets {
            if detect(workflow, adjacency, target, visited, stack, path, issues) {
                return true;
            }
        }
    }

    path.pop();
    stack.remove(node_id);
    false
}
