//! Routed invoke behavior: dispatch, defaults, append-only state.

use std::sync::Arc;

use routegraph::{ChatState, Passthrough, StateGraph, END, START};

use crate::common::{KeywordRouter, SayNode};

fn build_routed_graph() -> routegraph::CompiledStateGraph<ChatState> {
    let mut graph = StateGraph::<ChatState>::new();
    graph
        .add_node("route", Arc::new(Passthrough::new("route")))
        .add_node("a", Arc::new(SayNode { id: "a", text: "branch a" }))
        .add_node("b", Arc::new(SayNode { id: "b", text: "branch b" }))
        .add_edge(START, "route")
        .add_conditional_edges(
            "route",
            Arc::new(KeywordRouter {
                labels: vec!["a", "b"],
                default: "a",
            }),
            [("a", "a"), ("b", "b")],
        )
        .add_edge("a", END)
        .add_edge("b", END);
    graph.compile().expect("graph compiles")
}

/// The matching branch runs; exactly one assistant message is appended.
#[tokio::test]
async fn invoke_runs_exactly_one_branch() {
    let graph = build_routed_graph();
    let out = graph
        .invoke(ChatState::with_user_message("b"), None)
        .await
        .unwrap();
    assert_eq!(out.messages.len(), 2);
    assert_eq!(out.messages[1].content(), "branch b");
}

/// Unmatched input takes the default branch.
#[tokio::test]
async fn invoke_unmatched_takes_default_branch() {
    let graph = build_routed_graph();
    let out = graph
        .invoke(ChatState::with_user_message("nothing"), None)
        .await
        .unwrap();
    assert_eq!(out.messages[1].content(), "branch a");
}

/// Across turns, each invoke adds exactly one message on top of the user's,
/// and prior content never changes.
#[tokio::test]
async fn invoke_is_append_only_across_turns() {
    let graph = build_routed_graph();
    let mut state = ChatState::default();
    let mut expected_len = 0;

    for input in ["a", "b", "something else"] {
        state.push_user(input);
        let before = state.messages.clone();
        state = graph.invoke(state, None).await.unwrap();
        expected_len += 2;
        assert_eq!(state.messages.len(), expected_len);
        assert_eq!(state.messages[..before.len()], before[..]);
        assert!(state.messages.last().unwrap().is_assistant());
    }
}

/// A linear chain without conditional edges still runs in edge order.
#[tokio::test]
async fn invoke_linear_chain_runs_in_order() {
    let mut graph = StateGraph::<ChatState>::new();
    graph
        .add_node("first", Arc::new(SayNode { id: "first", text: "one" }))
        .add_node("second", Arc::new(SayNode { id: "second", text: "two" }))
        .add_edge(START, "first")
        .add_edge("first", "second")
        .add_edge("second", END);
    let compiled = graph.compile().expect("graph compiles");

    let out = compiled.invoke(ChatState::default(), None).await.unwrap();
    let contents: Vec<_> = out.messages.iter().map(|m| m.content()).collect();
    assert_eq!(contents, vec!["one", "two"]);
}
