use crate::error::PathError;
use crate::graph::{NodeKind, WorkflowDefinition};
use ahash::AHashSet;

pub mod strategy;

pub use strategy::{BranchStrategy, UniformRandom};

/// Produces one concrete linear ordering of node ids representing a single
/// simulated run, starting from the first trigger node.
///
/// The generator is intentionally non-exhaustive: it explores exactly one
/// path per invocation. A condition node makes a single draw among all of
/// its outgoing edges; if the drawn edge targets an already-visited node
/// the walk simply ends there, with no retry. Other node kinds descend into
/// the first unvisited target in edge order. Dead ends are a valid way for
/// a path to finish, not an error.
pub struct PathGenerator<'a, S = UniformRandom> {
    workflow: &'a WorkflowDefinition,
    strategy: S,
}

impl<'a> PathGenerator<'a, UniformRandom> {
    pub fn new(workflow: &'a WorkflowDefinition) -> Self {
        Self {
            workflow,
            strategy: UniformRandom,
        }
    }
}

impl<'a, S: BranchStrategy> PathGenerator<'a, S> {
    /// Creates a generator with a caller-supplied branch strategy.
    pub fn with_strategy(workflow: &'a WorkflowDefinition, strategy: S) -> Self {
        Self { workflow, strategy }
    }

    /// Walks the graph once and returns the visited node ids in order.
    ///
    /// The result has no repeated ids and always contains at least the
    /// starting trigger. Fails only when the workflow has no trigger node.
    pub fn generate(mut self) -> Result<Vec<String>, PathError> {
        let start = self
            .workflow
            .nodes
            .iter()
            .find(|node| node.kind == NodeKind::Trigger)
            .ok_or(PathError::NoTriggerNode)?;

        let mut path = vec![start.id.clone()];
        let mut visited: AHashSet<&str> = AHashSet::new();
        visited.insert(start.id.as_str());
        let mut current = start;

        loop {
            let outgoing: Vec<_> = self.workflow.outgoing(&current.id).collect();
            if outgoing.is_empty() {
                break;
            }

            let next_id = if current.kind == NodeKind::Condition {
                let pick = self.strategy.choose(outgoing.len()).min(outgoing.len() - 1);
                let edge = outgoing[pick];
                if visited.contains(edge.target.as_str()) {
                    // Condition branches are never re-attempted.
                    break;
                }
                edge.target.as_str()
            } else {
                match outgoing
                    .iter()
                    .find(|edge| !visited.contains(edge.target.as_str()))
                {
                    Some(edge) => edge.target.as_str(),
                    None => break,
                }
            };

            debug_assert!(
                self.workflow.node(next_id).is_some(),
                "workflow edge references a nonexistent node id"
            );
            let Some(next) = self.workflow.node(next_id) else {
                break;
            };

            visited.insert(next.id.as_str());
            path.push(next.id.clone());
            current = next;
        }

        Ok(path)
    }
}
