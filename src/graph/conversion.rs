use super::definition::WorkflowDefinition;
use crate::error::WorkflowConversionError;

/// A trait for custom data models that can be converted into a keiro
/// `WorkflowDefinition`.
///
/// This is the primary extension point for making keiro format-agnostic. The
/// editor's own export format, or any other node/edge representation, is
/// translated into the canonical model by implementing this trait on the
/// parsed structs.
///
/// # Example
///
/// ```rust,no_run
/// use keiro::prelude::*;
/// use keiro::error::WorkflowConversionError;
///
/// // 1. Define your custom structs for parsing your format.
/// struct MyNode { id: String, role: String, title: String }
/// struct MyWorkflow { nodes: Vec<MyNode> }
///
/// // 2. Implement `IntoWorkflow` for your top-level struct.
/// impl IntoWorkflow for MyWorkflow {
///     fn into_workflow(self) -> std::result::Result<WorkflowDefinition, WorkflowConversionError> {
///         let mut nodes = Vec::new();
///         for node in self.nodes {
///             let kind = match node.role.as_str() {
///                 "trigger" => NodeKind::Trigger,
///                 "process" => NodeKind::Process,
///                 "condition" => NodeKind::Condition,
///                 "output" => NodeKind::Output,
///                 _ => NodeKind::Custom,
///             };
///             nodes.push(WorkflowNodeDefinition {
///                 id: node.id,
///                 kind,
///                 config: NodeConfig { label: node.title, ..NodeConfig::default() },
///             });
///         }
///
///         Ok(WorkflowDefinition {
///             nodes,
///             edges: vec![], // Convert your edges here as well
///         })
///     }
/// }
/// ```
pub trait IntoWorkflow {
    /// Consumes the object and converts it into a keiro-compatible workflow graph.
    fn into_workflow(self) -> Result<WorkflowDefinition, WorkflowConversionError>;
}
