//! Compiled state graph: immutable, supports invoke only.
//!
//! Built by `StateGraph::compile` or `compile_with_checkpointer`. Holds
//! nodes, the entry id, static next-edges, and per-node conditional edges.
//! When a checkpointer is set and `config.thread_id` is provided, the final
//! state is saved after the run; a save failure is a visible error, not a
//! silent drop.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use crate::error::AgentError;
use crate::graph::node::Node;
use crate::graph::router::Router;
use crate::graph::state_graph::END;
use crate::memory::{Checkpoint, Checkpointer, RunnableConfig};
use crate::state::GraphState;

/// Router plus its label → node-id map, attached to one source node.
pub(super) struct ConditionalEdges<S> {
    pub(super) router: Arc<dyn Router<S>>,
    pub(super) targets: HashMap<String, String>,
}

/// Compiled graph: immutable structure, supports invoke only.
///
/// Runs from the entry node; after each node, follows that node's static edge
/// or asks its router for a label. Exactly one full traversal per invoke:
/// entry → dispatch → terminal. Each node's returned delta is merged into the
/// prior state via `GraphState::merge`.
pub struct CompiledStateGraph<S> {
    pub(super) nodes: HashMap<String, Arc<dyn Node<S>>>,
    pub(super) entry: String,
    pub(super) next: HashMap<String, String>,
    pub(super) conditional: HashMap<String, ConditionalEdges<S>>,
    pub(super) checkpointer: Option<Arc<dyn Checkpointer<S>>>,
}

impl<S> CompiledStateGraph<S>
where
    S: GraphState,
{
    /// Runs the graph with the given state, one traversal to a terminal.
    ///
    /// When `config` has `thread_id` and the graph was compiled with a
    /// checkpointer, the final state is saved after the run. Pass `None` to
    /// skip persistence.
    pub async fn invoke(&self, state: S, config: Option<RunnableConfig>) -> Result<S, AgentError> {
        let mut state = state;
        let mut current = self.entry.clone();

        loop {
            let node = self.nodes.get(&current).ok_or_else(|| {
                AgentError::ExecutionFailed(format!("node '{}' missing from compiled graph", current))
            })?;
            debug!(node_id = %current, "running node");
            let delta = node.run(&state).await?;
            state = S::merge(state, delta);

            let next = self.successor(&current, &state).await?;
            if next == END {
                self.save_final_state(&state, &config).await?;
                return Ok(state);
            }
            current = next;
        }
    }

    /// Picks the next node id after `current`: conditional router if one is
    /// attached, otherwise the static edge. Compile guarantees one of the two
    /// exists and that every router label is mapped.
    async fn successor(&self, current: &str, state: &S) -> Result<String, AgentError> {
        if let Some(cond) = self.conditional.get(current) {
            let label = cond.router.route(state).await;
            let target = cond
                .targets
                .get(&label)
                .or_else(|| cond.targets.get(&cond.router.default_label()));
            return match target {
                Some(t) => {
                    debug!(node_id = %current, label = %label, target = %t, "route decision");
                    Ok(t.clone())
                }
                None => Err(AgentError::ExecutionFailed(format!(
                    "router on '{}' produced unmapped label '{}'",
                    current, label
                ))),
            };
        }
        match self.next.get(current) {
            Some(t) => Ok(t.clone()),
            None => Err(AgentError::ExecutionFailed(format!(
                "node '{}' has no outgoing edge",
                current
            ))),
        }
    }

    async fn save_final_state(
        &self,
        state: &S,
        config: &Option<RunnableConfig>,
    ) -> Result<(), AgentError> {
        if let (Some(cp), Some(cfg)) = (&self.checkpointer, config) {
            if let Some(thread_id) = &cfg.thread_id {
                let checkpoint = Checkpoint::from_state(state.clone());
                cp.save(thread_id, &checkpoint).await.map_err(|e| {
                    AgentError::ExecutionFailed(format!("checkpoint save failed: {}", e))
                })?;
                debug!(thread_id = %thread_id, "checkpoint saved");
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use async_trait::async_trait;

    use crate::graph::{Node, Router, StateGraph, END, START};
    use crate::memory::{MemorySaver, RunnableConfig};
    use crate::message::Message;
    use crate::state::ChatState;

    /// Test node: appends one assistant message with a fixed text.
    struct PushNode {
        id: &'static str,
        text: &'static str,
    }

    #[async_trait]
    impl Node<ChatState> for PushNode {
        fn id(&self) -> &str {
            self.id
        }

        async fn run(&self, _state: &ChatState) -> Result<ChatState, AgentError> {
            Ok(ChatState {
                messages: vec![Message::Assistant(self.text.to_string())],
            })
        }
    }

    /// Test node: empty delta (entry passthrough).
    struct NoopNode;

    #[async_trait]
    impl Node<ChatState> for NoopNode {
        fn id(&self) -> &str {
            "noop"
        }

        async fn run(&self, _state: &ChatState) -> Result<ChatState, AgentError> {
            Ok(ChatState::default())
        }
    }

    /// Test router: routes on the latest user message's content prefix.
    struct PrefixRouter;

    #[async_trait]
    impl Router<ChatState> for PrefixRouter {
        fn labels(&self) -> Vec<String> {
            vec!["left".into(), "right".into()]
        }

        fn default_label(&self) -> String {
            "left".into()
        }

        async fn route(&self, state: &ChatState) -> String {
            match state.last_user_content() {
                Some(c) if c.starts_with('r') => "right".into(),
                _ => "left".into(),
            }
        }
    }

    fn build_branching_graph() -> CompiledStateGraph<ChatState> {
        let mut graph = StateGraph::<ChatState>::new();
        graph
            .add_node("route", Arc::new(NoopNode))
            .add_node("left", Arc::new(PushNode { id: "left", text: "went left" }))
            .add_node("right", Arc::new(PushNode { id: "right", text: "went right" }))
            .add_edge(START, "route")
            .add_conditional_edges(
                "route",
                Arc::new(PrefixRouter),
                [("left", "left"), ("right", "right")],
            )
            .add_edge("left", END)
            .add_edge("right", END);
        graph.compile().expect("graph compiles")
    }

    /// **Scenario**: conditional dispatch runs exactly one branch node and appends one message.
    #[tokio::test]
    async fn invoke_dispatches_to_matching_branch() {
        let graph = build_branching_graph();
        let out = graph
            .invoke(ChatState::with_user_message("right please"), None)
            .await
            .unwrap();
        assert_eq!(out.messages.len(), 2);
        assert_eq!(out.messages[1], Message::Assistant("went right".into()));
    }

    /// **Scenario**: non-matching input takes the default branch.
    #[tokio::test]
    async fn invoke_default_branch_on_no_match() {
        let graph = build_branching_graph();
        let out = graph
            .invoke(ChatState::with_user_message("hello"), None)
            .await
            .unwrap();
        assert_eq!(out.messages.len(), 2);
        assert_eq!(out.messages[1], Message::Assistant("went left".into()));
    }

    /// **Scenario**: prior messages are untouched after an invoke (append-only).
    #[tokio::test]
    async fn invoke_never_mutates_prior_messages() {
        let graph = build_branching_graph();
        let mut state = ChatState::with_user_message("first");
        state = graph.invoke(state, None).await.unwrap();
        let before = state.messages.clone();
        state.push_user("second");
        let out = graph.invoke(state, None).await.unwrap();
        assert_eq!(out.messages[..before.len()], before[..]);
        assert_eq!(out.messages.len(), before.len() + 2);
    }

    /// **Scenario**: invoke with checkpointer and config.thread_id saves the final state.
    #[tokio::test]
    async fn invoke_with_checkpointer_and_thread_id_saves_checkpoint() {
        let mut graph = StateGraph::<ChatState>::new();
        graph
            .add_node("only", Arc::new(PushNode { id: "only", text: "done" }))
            .add_edge(START, "only")
            .add_edge("only", END);
        let cp = Arc::new(MemorySaver::<ChatState>::new());
        let compiled = graph
            .compile_with_checkpointer(cp.clone())
            .expect("graph compiles");
        let config = RunnableConfig {
            thread_id: Some("tid-cp".into()),
        };
        let out = compiled
            .invoke(ChatState::with_user_message("hi"), Some(config))
            .await
            .unwrap();
        assert_eq!(out.messages.len(), 2);
        let saved = cp.load("tid-cp").await.unwrap().expect("checkpoint saved");
        assert_eq!(saved.state, out);
    }

    /// **Scenario**: invoke without thread_id does not save even with a checkpointer.
    #[tokio::test]
    async fn invoke_without_thread_id_skips_checkpoint() {
        let mut graph = StateGraph::<ChatState>::new();
        graph
            .add_node("only", Arc::new(PushNode { id: "only", text: "done" }))
            .add_edge(START, "only")
            .add_edge("only", END);
        let cp = Arc::new(MemorySaver::<ChatState>::new());
        let compiled = graph
            .compile_with_checkpointer(cp.clone())
            .expect("graph compiles");
        compiled
            .invoke(ChatState::with_user_message("hi"), None)
            .await
            .unwrap();
        assert!(cp.load("anything").await.unwrap().is_none());
    }
}
