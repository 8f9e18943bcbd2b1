//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and traits from the
//! keiro crate. Import this module to get access to the core functionality
//! without having to import each type individually.
//!
//! # Example
//!
//! ```rust,no_run
//! // Use the prelude to get easy access to all the core types.
//! use keiro::prelude::*;
//!
//! # fn run_example(workflow: WorkflowDefinition) -> Result<()> {
//! // Validate the graph and bail out with the issues if any were found.
//! let issues = Validator::new(&workflow).run();
//! for issue in &issues {
//!     eprintln!("{}", issue);
//! }
//!
//! // Generate one run order and walk it without any delay scheduling.
//! let path = PathGenerator::new(&workflow).generate()?;
//! let mut stepper = Stepper::new(path);
//! let mut scheduled = stepper.start();
//! while scheduled.is_some() {
//!     scheduled = match stepper.complete_step() {
//!         StepOutcome::Advanced { next } => Some(next),
//!         _ => None,
//!     };
//! }
//! # Ok(())
//! # }
//! ```

// Graph model
pub use crate::graph::{
    IntoWorkflow, NodeConfig, NodeKind, WorkflowDefinition, WorkflowEdgeDefinition,
    WorkflowNodeDefinition,
};

// Validation
pub use crate::validate::{IssueKind, ValidationIssue, Validator};

// Path generation
pub use crate::path::{BranchStrategy, PathGenerator, UniformRandom};

// Execution stepping
pub use crate::stepper::{
    Clock, ExecutionRecord, MonotonicClock, RunMode, RunState, ScheduledStep, SimulatedWorker,
    StepOutcome, StepStatus, StepWorker, Stepper,
};

// Error types
pub use crate::error::{PathError, StepError, WorkflowConversionError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
