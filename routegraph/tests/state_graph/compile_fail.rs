//! StateGraph compile failure cases: unknown node, unrouted label, conflicts,
//! dangling nodes, cycles. All must fail at construction, never at invoke.

use std::sync::Arc;

use routegraph::{ChatState, CompilationError, StateGraph, END, START};

use crate::common::{KeywordRouter, SayNode};

fn say(id: &'static str) -> Arc<SayNode> {
    Arc::new(SayNode { id, text: "ok" })
}

#[test]
fn compile_fails_when_edge_refers_to_unknown_node() {
    let mut graph = StateGraph::<ChatState>::new();
    graph.add_node("a", say("a"));
    graph.add_edge(START, "a");
    graph.add_edge("a", "missing");

    match graph.compile() {
        Err(CompilationError::NodeNotFound(id)) => assert_eq!(id, "missing"),
        other => panic!("expected NodeNotFound, got {:?}", other.err()),
    }
}

#[test]
fn compile_fails_without_start_edge() {
    let mut graph = StateGraph::<ChatState>::new();
    graph.add_node("a", say("a"));
    graph.add_edge("a", END);

    match graph.compile() {
        Err(CompilationError::MissingEntry) => {}
        other => panic!("expected MissingEntry, got {:?}", other.err()),
    }
}

/// A router label with no mapped node is a construction-time error, even if
/// that label would never be produced at runtime.
#[test]
fn compile_fails_on_unrouted_label() {
    let mut graph = StateGraph::<ChatState>::new();
    graph.add_node("route", say("route"));
    graph.add_node("a", say("a"));
    graph.add_edge(START, "route");
    graph.add_conditional_edges(
        "route",
        Arc::new(KeywordRouter {
            labels: vec!["a", "b"],
            default: "a",
        }),
        [("a", "a")],
    );
    graph.add_edge("a", END);

    match graph.compile() {
        Err(CompilationError::UnroutedLabel { node, label }) => {
            assert_eq!(node, "route");
            assert_eq!(label, "b");
        }
        other => panic!("expected UnroutedLabel, got {:?}", other.err()),
    }
}

/// The default label itself must be mapped.
#[test]
fn compile_fails_on_unrouted_default_label() {
    let mut graph = StateGraph::<ChatState>::new();
    graph.add_node("route", say("route"));
    graph.add_node("a", say("a"));
    graph.add_edge(START, "route");
    graph.add_conditional_edges(
        "route",
        Arc::new(KeywordRouter {
            labels: vec!["a"],
            default: "fallback",
        }),
        [("a", "a")],
    );
    graph.add_edge("a", END);

    match graph.compile() {
        Err(CompilationError::UnroutedLabel { label, .. }) => assert_eq!(label, "fallback"),
        other => panic!("expected UnroutedLabel, got {:?}", other.err()),
    }
}

#[test]
fn compile_fails_on_two_static_edges_from_one_node() {
    let mut graph = StateGraph::<ChatState>::new();
    graph.add_node("a", say("a"));
    graph.add_node("b", say("b"));
    graph.add_edge(START, "a");
    graph.add_edge("a", "b");
    graph.add_edge("a", END);
    graph.add_edge("b", END);

    match graph.compile() {
        Err(CompilationError::ConflictingEdges(id)) => assert_eq!(id, "a"),
        other => panic!("expected ConflictingEdges, got {:?}", other.err()),
    }
}

#[test]
fn compile_fails_on_static_and_conditional_edges_from_one_node() {
    let mut graph = StateGraph::<ChatState>::new();
    graph.add_node("a", say("a"));
    graph.add_node("b", say("b"));
    graph.add_edge(START, "a");
    graph.add_edge("a", "b");
    graph.add_conditional_edges(
        "a",
        Arc::new(KeywordRouter {
            labels: vec!["b"],
            default: "b",
        }),
        [("b", "b")],
    );
    graph.add_edge("b", END);

    match graph.compile() {
        Err(CompilationError::ConflictingEdges(id)) => assert_eq!(id, "a"),
        other => panic!("expected ConflictingEdges, got {:?}", other.err()),
    }
}

#[test]
fn compile_fails_on_node_without_outgoing_edge() {
    let mut graph = StateGraph::<ChatState>::new();
    graph.add_node("a", say("a"));
    graph.add_node("dangling", say("dangling"));
    graph.add_edge(START, "a");
    graph.add_edge("a", END);

    match graph.compile() {
        Err(CompilationError::NoOutgoingEdge(id)) => assert_eq!(id, "dangling"),
        other => panic!("expected NoOutgoingEdge, got {:?}", other.err()),
    }
}

#[test]
fn compile_fails_on_cycle() {
    let mut graph = StateGraph::<ChatState>::new();
    graph.add_node("a", say("a"));
    graph.add_node("b", say("b"));
    graph.add_edge(START, "a");
    graph.add_edge("a", "b");
    graph.add_edge("b", "a");

    match graph.compile() {
        Err(CompilationError::CycleDetected(_)) => {}
        other => panic!("expected CycleDetected, got {:?}", other.err()),
    }
}
