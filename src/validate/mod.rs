use crate::graph::WorkflowDefinition;

mod completeness;
mod configuration;
mod connection;
mod cycles;
pub mod issue;

pub use completeness::condition_handles;
pub use configuration::is_fully_configured;
pub use issue::{IssueKind, ValidationIssue};

/// Checks a workflow graph for structural problems.
///
/// All checks run unconditionally and their findings accumulate; nothing
/// short-circuits. An empty result means the workflow is executable.
///
/// The result order is fixed: connection issues (per node), configuration
/// issues (per node), completeness issues, then cycles (per DFS root).
pub struct Validator<'a> {
    workflow: &'a WorkflowDefinition,
}

impl<'a> Validator<'a> {
    pub fn new(workflow: &'a WorkflowDefinition) -> Self {
        Self { workflow }
    }

    /// Runs every check and returns the accumulated issues.
    pub fn run(&self) -> Vec<ValidationIssue> {
        // Edges referencing unknown nodes mean the editor upstream broke its
        // own invariant; traversal below tolerates them in release builds.
        debug_assert!(
            self.workflow.edges.iter().all(|edge| {
                self.workflow.node(&edge.source).is_some()
                    && self.workflow.node(&edge.target).is_some()
            }),
            "workflow edge references a nonexistent node id"
        );

        let mut issues = connection::check(self.workflow);
        issues.extend(configuration::check(self.workflow));
        issues.extend(completeness::check(self.workflow));
        issues.extend(cycles::check(self.workflow));
        issues
    }

    /// Convenience wrapper: true when `run` finds nothing.
    pub fn is_executable(&self) -> bool {
        self.run().is_empty()
    }
}
