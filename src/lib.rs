//! # Keiro - Workflow Validation and Simulated Execution Engine
//!
//! **Keiro** validates directed-graph workflows built in node-based visual
//! editors (trigger, process, condition and output nodes connected by edges)
//! and simulates their execution for step-by-step visualization. It has no
//! real execution backend: "running" a workflow means walking one path
//! through the graph and pacing each node on a timer so a host UI can
//! animate it.
//!
//! ## Core Workflow
//!
//! The engine is format-agnostic. It operates on a canonical internal model
//! of a workflow graph. The primary workflow is:
//!
//! 1.  **Load Your Data**: Parse your editor's export format (e.g., from JSON) into your own Rust structs.
//! 2.  **Convert to Keiro's Model**: Implement the `IntoWorkflow` trait for your structs to provide a translation layer into Keiro's `WorkflowDefinition`.
//! 3.  **Validate**: Run the `Validator` to collect every structural violation: disconnected nodes, incomplete configuration, missing branches, cycles. An empty issue list means the workflow is executable.
//! 4.  **Simulate**: Use the `PathGenerator` to produce one linear run order, then drive a `Stepper` through it, scheduling each step's simulated delay from your own event loop.
//!
//! ## Quick Start
//!
//! ```rust
//! use keiro::prelude::*;
//!
//! fn main() {
//!     let workflow = WorkflowDefinition {
//!         nodes: vec![
//!             WorkflowNodeDefinition {
//!                 id: "t1".to_string(),
//!                 kind: NodeKind::Trigger,
//!                 config: NodeConfig {
//!                     label: "Manual start".to_string(),
//!                     trigger_type: Some("manual".to_string()),
//!                     ..NodeConfig::default()
//!                 },
//!             },
//!             WorkflowNodeDefinition {
//!                 id: "o1".to_string(),
//!                 kind: NodeKind::Output,
//!                 config: NodeConfig {
//!                     label: "Reply".to_string(),
//!                     output_type: Some("message".to_string()),
//!                     ..NodeConfig::default()
//!                 },
//!             },
//!         ],
//!         edges: vec![WorkflowEdgeDefinition {
//!             id: "e1".to_string(),
//!             source: "t1".to_string(),
//!             target: "o1".to_string(),
//!             source_handle: None,
//!         }],
//!     };
//!
//!     // Collect structural issues; an empty list means executable.
//!     let issues = Validator::new(&workflow).run();
//!     assert!(issues.is_empty());
//!
//!     // One simulated run order, starting from the first trigger.
//!     let path = PathGenerator::new(&workflow).generate().unwrap();
//!     assert_eq!(path, vec!["t1".to_string(), "o1".to_string()]);
//!
//!     // Drive the run; a real host would wait `step.delay` between calls.
//!     let mut stepper = Stepper::new(path);
//!     let mut scheduled = stepper.start();
//!     while scheduled.is_some() {
//!         scheduled = match stepper.complete_step() {
//!             StepOutcome::Advanced { next } => Some(next),
//!             _ => None,
//!         };
//!     }
//!     assert_eq!(stepper.state(), RunState::Completed);
//!     assert_eq!(stepper.progress(), 100.0);
//! }
//! ```

pub mod error;
pub mod graph;
pub mod path;
pub mod prelude;
pub mod stepper;
pub mod validate;
