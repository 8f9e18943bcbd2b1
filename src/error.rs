use thiserror::Error;

/// Errors that can occur while generating a simulated execution path.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    #[error("no trigger node found, cannot start execution")]
    NoTriggerNode,
}

/// Errors that can occur while simulating a single execution step.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StepError {
    #[error("step for node '{node_id}' failed: {message}")]
    Failed { node_id: String, message: String },
}

/// Errors that can occur when converting a custom user format into a keiro
/// `WorkflowDefinition`.
#[derive(Error, Debug, Clone)]
pub enum WorkflowConversionError {
    #[error("Invalid workflow data: {0}")]
    ValidationError(String),
}
