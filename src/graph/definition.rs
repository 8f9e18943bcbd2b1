/// The complete, canonical definition of a workflow graph, ready for
/// validation and simulated execution.
/// This is the target structure for any custom data model conversion.
#[derive(Debug, Clone, Default)]
pub struct WorkflowDefinition {
    pub nodes: Vec<WorkflowNodeDefinition>,
    pub edges: Vec<WorkflowEdgeDefinition>,
}

/// The semantic role of a node in the workflow.
///
/// Condition nodes branch; all other kinds pass straight through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Trigger,
    Process,
    Condition,
    Output,
    /// Any node kind the editor allows beyond the four built-in roles.
    /// Custom nodes are always considered fully configured.
    Custom,
}

/// Defines a single node in the workflow graph. Nodes do not own edges.
#[derive(Debug, Clone)]
pub struct WorkflowNodeDefinition {
    pub id: String,
    pub kind: NodeKind,
    pub config: NodeConfig,
}

/// The editor-supplied configuration bag of a node.
///
/// An empty `label` counts as missing, as do empty-string option fields.
/// `parameters` is a serialized JSON blob exactly as the editor stores it;
/// parsing it is the validator's concern.
#[derive(Debug, Clone, Default)]
pub struct NodeConfig {
    pub label: String,
    pub trigger_type: Option<String>,
    pub process_type: Option<String>,
    pub condition: Option<String>,
    pub output_type: Option<String>,
    pub parameters: Option<String>,
}

/// Defines a directed connection between two nodes in the workflow graph.
///
/// `source_handle` distinguishes the branches of a condition node, by
/// convention `"true"` / `"false"`. Multiple edges may share a source or a
/// target.
#[derive(Debug, Clone)]
pub struct WorkflowEdgeDefinition {
    pub id: String,
    pub source: String,
    pub target: String,
    pub source_handle: Option<String>,
}

impl WorkflowDefinition {
    /// Looks up a node by id.
    pub fn node(&self, id: &str) -> Option<&WorkflowNodeDefinition> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// All edges leaving `id`, in definition order.
    pub fn outgoing(&self, id: &str) -> impl Iterator<Item = &WorkflowEdgeDefinition> {
        self.edges.iter().filter(move |e| e.source == id)
    }

    /// All edges arriving at `id`, in definition order.
    pub fn incoming(&self, id: &str) -> impl Iterator<Item = &WorkflowEdgeDefinition> {
        self.edges.iter().filter(move |e| e.target == id)
    }

    /// The label of the node with the given id, falling back to the id
    /// itself for unknown nodes or empty labels. Used when rendering paths.
    pub fn label_or_id<'a>(&'a self, id: &'a str) -> &'a str {
        match self.node(id) {
            Some(node) if !node.config.label.is_empty() => &node.config.label,
            _ => id,
        }
    }
}

impl WorkflowNodeDefinition {
    /// The label shown in configuration messages, `unnamed` when empty.
    pub fn display_label(&self) -> &str {
        if self.config.label.is_empty() {
            "unnamed"
        } else {
            &self.config.label
        }
    }
}
