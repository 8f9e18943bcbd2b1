use thiserror::Error;

/// The structural classification of a validation issue, mirroring the
/// editor's indicator categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IssueKind {
    Connection,
    Configuration,
    Completeness,
    Cycle,
}

/// A single workflow violation found by the [`Validator`](super::Validator).
///
/// Issues are result values, never thrown: the caller decides whether they
/// block execution. The `Display` text of each variant is part of the
/// observable contract consumed by the editor UI.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationIssue {
    #[error("node \"{label}\" (ID: {id}) not connected to workflow")]
    NodeNotConnected { label: String, id: String },

    #[error("trigger node \"{label}\" has no outgoing connection")]
    TriggerWithoutOutgoing { label: String },

    #[error("output node \"{label}\" has no incoming connection")]
    OutputWithoutIncoming { label: String },

    #[error("node (ID: {id}) missing label")]
    MissingLabel { id: String },

    #[error("trigger node \"{label}\" missing trigger type configuration")]
    MissingTriggerType { label: String },

    #[error("process node \"{label}\" missing process type configuration")]
    MissingProcessType { label: String },

    #[error("condition node \"{label}\" missing condition expression")]
    MissingCondition { label: String },

    #[error("output node \"{label}\" missing output type configuration")]
    MissingOutputType { label: String },

    #[error("api-call node \"{label}\" missing endpoint parameter")]
    MissingEndpointParameter { label: String },

    #[error("ai-completion node \"{label}\" missing model parameter")]
    MissingModelParameter { label: String },

    #[error("workflow missing trigger node")]
    MissingTriggerNode,

    #[error("workflow missing output node")]
    MissingOutputNode,

    #[error(
        "condition node \"{label}\" missing branch, condition node requires at least two exits"
    )]
    MissingConditionBranch { label: String },

    #[error("cycle dependency detected: {}", .path.join(" → "))]
    CycleDetected { path: Vec<String> },
}

impl ValidationIssue {
    /// The category this issue belongs to.
    pub fn kind(&self) -> IssueKind {
        match self {
            Self::NodeNotConnected { .. }
            | Self::TriggerWithoutOutgoing { .. }
            | Self::OutputWithoutIncoming { .. } => IssueKind::Connection,
            Self::MissingLabel { .. }
            | Self::MissingTriggerType { .. }
            | Self::MissingProcessType { .. }
            | Self::MissingCondition { .. }
            | Self::MissingOutputType { .. }
            | Self::MissingEndpointParameter { .. }
            | Self::MissingModelParameter { .. } => IssueKind::Configuration,
            Self::MissingTriggerNode
            | Self::MissingOutputNode
            | Self::MissingConditionBranch { .. } => IssueKind::Completeness,
            Self::CycleDetected { .. } => IssueKind::Cycle,
        }
    }
}
