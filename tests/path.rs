//! Tests for the execution path generator.
mod common;
use common::*;
use keiro::prelude::*;
use std::collections::HashSet;

#[test]
fn no_trigger_fails_with_explanation() {
    let workflow = WorkflowDefinition {
        nodes: vec![process("p1", "Work"), output("o1", "Reply")],
        edges: vec![edge("e1", "p1", "o1")],
    };

    let err = PathGenerator::new(&workflow).generate().unwrap_err();
    assert_eq!(err, PathError::NoTriggerNode);
    assert_eq!(
        err.to_string(),
        "no trigger node found, cannot start execution"
    );
}

#[test]
fn linear_workflow_walks_straight_through() {
    let path = PathGenerator::new(&linear_workflow()).generate().unwrap();
    assert_eq!(path, vec!["trigger1", "process1", "output1"]);
}

#[test]
fn condition_takes_exactly_one_branch() {
    let workflow = branching_workflow();

    let low = PathGenerator::with_strategy(&workflow, |_branches: usize| 0)
        .generate()
        .unwrap();
    assert_eq!(low, vec!["t", "c", "x"]);

    let high = PathGenerator::with_strategy(&workflow, |_branches: usize| 1)
        .generate()
        .unwrap();
    assert_eq!(high, vec!["t", "c", "y"]);

    // The production strategy still yields one branch, never both.
    for _ in 0..20 {
        let path = PathGenerator::new(&workflow).generate().unwrap();
        assert_eq!(path.len(), 3);
        assert_eq!(&path[..2], ["t", "c"]);
        assert!(path[2] == "x" || path[2] == "y");
    }
}

#[test]
fn condition_branch_to_visited_node_ends_the_walk() {
    // C's drawn branch loops back to the trigger; the walk stops at C
    // rather than retrying the other branch.
    let workflow = WorkflowDefinition {
        nodes: vec![
            trigger("t", "Start"),
            condition("c", "Gate"),
            process("x", "Onward"),
        ],
        edges: vec![
            edge("e1", "t", "c"),
            branch("e2", "c", "t", "true"),
            branch("e3", "c", "x", "false"),
        ],
    };

    let path = PathGenerator::with_strategy(&workflow, |_branches: usize| 0)
        .generate()
        .unwrap();
    assert_eq!(path, vec!["t", "c"]);
}

#[test]
fn non_condition_nodes_skip_visited_targets() {
    // P's first edge loops back; the walker descends into the first
    // unvisited target instead of stopping.
    let workflow = WorkflowDefinition {
        nodes: vec![
            trigger("t", "Start"),
            process("p", "Work"),
            output("o", "Reply"),
        ],
        edges: vec![
            edge("e1", "t", "p"),
            edge("e2", "p", "t"),
            edge("e3", "p", "o"),
        ],
    };

    let path = PathGenerator::new(&workflow).generate().unwrap();
    assert_eq!(path, vec!["t", "p", "o"]);
}

#[test]
fn cyclic_graph_terminates_without_repeats() {
    let workflow = WorkflowDefinition {
        nodes: vec![
            trigger("t", "Start"),
            process("a", "A"),
            process("b", "B"),
        ],
        edges: vec![
            edge("e1", "t", "a"),
            edge("e2", "a", "b"),
            edge("e3", "b", "a"),
        ],
    };

    let path = PathGenerator::new(&workflow).generate().unwrap();
    assert_eq!(path, vec!["t", "a", "b"]);

    let unique: HashSet<&String> = path.iter().collect();
    assert_eq!(unique.len(), path.len());
}

#[test]
fn starts_from_the_first_trigger_in_node_order() {
    let workflow = WorkflowDefinition {
        nodes: vec![
            trigger("t2", "Second"),
            trigger("t1", "First"),
            output("o", "Reply"),
        ],
        edges: vec![edge("e1", "t2", "o"), edge("e2", "t1", "o")],
    };

    let path = PathGenerator::new(&workflow).generate().unwrap();
    assert_eq!(path[0], "t2");
}

#[test]
fn dead_end_is_a_valid_path_end() {
    let workflow = WorkflowDefinition {
        nodes: vec![trigger("t", "Start")],
        edges: vec![],
    };

    let path = PathGenerator::new(&workflow).generate().unwrap();
    assert_eq!(path, vec!["t"]);
}
