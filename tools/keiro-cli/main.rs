use clap::Parser;
use keiro::prelude::*;
use keiro::validate::condition_handles;
use serde::Deserialize;
use std::fs;
use std::io::{self, Write};
use std::thread;
use std::time::Instant;

// --- JSON Deserialization Structs (Input Format Specific) ---
// These structs match the editor's workflow export format and are only used
// here for conversion.

#[derive(Deserialize)]
struct RawWorkflow {
    nodes: Vec<RawNode>,
    edges: Vec<RawEdge>,
}

#[derive(Deserialize)]
struct RawNode {
    id: String,
    #[serde(rename = "type")]
    kind: String,
    data: RawNodeData,
}

#[derive(Deserialize)]
struct RawNodeData {
    #[serde(default)]
    label: String,
    #[serde(alias = "triggerType")]
    trigger_type: Option<String>,
    #[serde(alias = "processType")]
    process_type: Option<String>,
    condition: Option<String>,
    #[serde(alias = "outputType")]
    output_type: Option<String>,
    parameters: Option<String>,
}

#[derive(Deserialize)]
struct RawEdge {
    id: String,
    source: String,
    target: String,
    #[serde(alias = "sourceHandle")]
    source_handle: Option<String>,
}

// --- Converter Implementation ---
// This implements the conversion from the raw JSON model to keiro's
// canonical WorkflowDefinition.

impl IntoWorkflow for RawWorkflow {
    fn into_workflow(
        self,
    ) -> std::result::Result<WorkflowDefinition, WorkflowConversionError> {
        let nodes = self
            .nodes
            .into_iter()
            .map(|raw_node| WorkflowNodeDefinition {
                id: raw_node.id,
                kind: match raw_node.kind.as_str() {
                    "trigger" => NodeKind::Trigger,
                    "process" => NodeKind::Process,
                    "condition" => NodeKind::Condition,
                    "output" => NodeKind::Output,
                    _ => NodeKind::Custom,
                },
                config: NodeConfig {
                    label: raw_node.data.label,
                    trigger_type: raw_node.data.trigger_type,
                    process_type: raw_node.data.process_type,
                    condition: raw_node.data.condition,
                    output_type: raw_node.data.output_type,
                    parameters: raw_node.data.parameters,
                },
            })
            .collect();

        let edges = self
            .edges
            .into_iter()
            .map(|raw_edge| WorkflowEdgeDefinition {
                id: raw_edge.id,
                source: raw_edge.source,
                target: raw_edge.target,
                source_handle: raw_edge.source_handle,
            })
            .collect();

        Ok(WorkflowDefinition { nodes, edges })
    }
}

/// A workflow validation and simulated execution CLI
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the workflow JSON export
    workflow_path: String,

    /// After a successful validation, simulate one run with real delays
    #[arg(short, long)]
    simulate: bool,

    /// After a successful validation, walk one run in manual mode,
    /// advancing on Enter instead of on a timer
    #[arg(long, conflicts_with = "simulate")]
    manual_preview: bool,
}

fn main() {
    let cli = Cli::parse();

    let workflow_json = fs::read_to_string(&cli.workflow_path).unwrap_or_else(|e| {
        exit_with_error(&format!(
            "Failed to read workflow file '{}': {}",
            &cli.workflow_path, e
        ))
    });

    let raw_workflow: RawWorkflow = serde_json::from_str(&workflow_json)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to parse workflow JSON: {}", e)));

    let workflow = raw_workflow
        .into_workflow()
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to convert workflow: {}", e)));

    println!(
        "Loaded workflow: {} nodes, {} edges",
        workflow.nodes.len(),
        workflow.edges.len()
    );
    for node in &workflow.nodes {
        if node.kind == NodeKind::Condition {
            let handles: Vec<&str> = condition_handles(&workflow, &node.id)
                .into_iter()
                .map(|h| h.unwrap_or("(default)"))
                .collect();
            println!(
                "  condition \"{}\" branches: [{}]",
                node.display_label(),
                handles.join(", ")
            );
        }
    }

    // --- Validation ---
    let validate_start = Instant::now();
    let issues = Validator::new(&workflow).run();
    let validate_duration = validate_start.elapsed();

    if issues.is_empty() {
        println!("\nWorkflow validation passed in {:?}", validate_duration);
    } else {
        eprintln!("\nWorkflow has {} validation issue(s):", issues.len());
        for issue in &issues {
            eprintln!("  [{:?}] {}", issue.kind(), issue);
        }
        std::process::exit(1);
    }

    if !cli.simulate && !cli.manual_preview {
        return;
    }

    // --- Simulated Run ---
    let path = PathGenerator::new(&workflow)
        .generate()
        .unwrap_or_else(|e| exit_with_error(&e.to_string()));

    println!("\nExecution path ({} steps):", path.len());
    for (index, node_id) in path.iter().enumerate() {
        println!("  {}. {}", index + 1, workflow.label_or_id(node_id));
    }

    if cli.manual_preview {
        manual_preview_run(&workflow, path);
    } else {
        simulate_run(&workflow, path);
    }
}

/// Auto mode: every completed step immediately schedules the next one.
fn simulate_run(workflow: &WorkflowDefinition, path: Vec<String>) {
    println!("\nSimulating run...");
    let mut stepper = Stepper::new(path);
    let mut scheduled = stepper.start();

    while let Some(step) = scheduled {
        println!(
            "  -> {} ({:?} simulated work)",
            workflow.label_or_id(&step.node_id),
            step.delay
        );
        thread::sleep(step.delay);

        scheduled = match stepper.complete_step() {
            StepOutcome::Advanced { next } => Some(next),
            StepOutcome::RunCompleted => {
                print_run_summary(&stepper);
                None
            }
            StepOutcome::Failed { node_id, message } => {
                eprintln!("\nStep '{}' failed: {}", node_id, message);
                None
            }
            _ => None,
        };
    }
}

/// Manual mode: after each completed step the run waits until the user
/// presses Enter, then `advance` schedules the next step.
fn manual_preview_run(workflow: &WorkflowDefinition, path: Vec<String>) {
    println!("\nManual preview: each step runs when you press Enter.");
    let mut stepper = Stepper::with_parts(
        path,
        RunMode::Manual,
        SimulatedWorker::default(),
        MonotonicClock,
    );
    let mut scheduled = stepper.start();

    while let Some(step) = scheduled {
        println!(
            "  -> {} ({:?} simulated work)",
            workflow.label_or_id(&step.node_id),
            step.delay
        );
        thread::sleep(step.delay);

        scheduled = match stepper.complete_step() {
            StepOutcome::Waiting => {
                wait_for_enter();
                stepper.advance()
            }
            StepOutcome::RunCompleted => {
                print_run_summary(&stepper);
                None
            }
            StepOutcome::Failed { node_id, message } => {
                eprintln!("\nStep '{}' failed: {}", node_id, message);
                None
            }
            _ => None,
        };
    }
}

fn print_run_summary<W: StepWorker, C: Clock>(stepper: &Stepper<W, C>) {
    println!(
        "\nRun complete: {} steps, {:.0}% progress, total {:?}",
        stepper.path().len(),
        stepper.progress(),
        stepper.total_elapsed().unwrap_or_default()
    );
}

fn wait_for_enter() {
    print!("     press Enter for the next step...");
    let _ = io::stdout().flush();
    let mut line = String::new();
    let _ = io::stdin().read_line(&mut line);
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
