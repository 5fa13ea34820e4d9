//! Workflow wiring: route → {chat, github}, compiled once at startup.

use std::sync::Arc;

use crate::agents::chat::ChatAgent;
use crate::agents::github::GithubAgent;
use crate::agents::route::RouteDecision;
use crate::agents::router::IntentRouter;
use crate::graph::{CompilationError, CompiledStateGraph, Passthrough, StateGraph, END, START};
use crate::host::CodeHost;
use crate::llm::LlmClient;
use crate::memory::Checkpointer;
use crate::state::ChatState;

pub const ROUTE_NODE: &str = "route";
pub const CHAT_NODE: &str = "chat";
pub const GITHUB_NODE: &str = "github";

/// Builds the routed chat workflow: a passthrough entry with conditional
/// edges to the chat and repository agents, each wired to END.
///
/// Compilation errors here are configuration bugs; callers should treat them
/// as fatal at startup rather than degrading.
pub fn build_workflow(
    llm: Arc<dyn LlmClient>,
    host: Arc<dyn CodeHost>,
    checkpointer: Option<Arc<dyn Checkpointer<ChatState>>>,
) -> Result<CompiledStateGraph<ChatState>, CompilationError> {
    let router = Arc::new(IntentRouter::new(llm.clone()));

    let mut graph = StateGraph::<ChatState>::new();
    graph
        .add_node(ROUTE_NODE, Arc::new(Passthrough::new(ROUTE_NODE)))
        .add_node(CHAT_NODE, Arc::new(ChatAgent::new(llm.clone())))
        .add_node(GITHUB_NODE, Arc::new(GithubAgent::new(llm, host)))
        .add_edge(START, ROUTE_NODE)
        .add_conditional_edges(
            ROUTE_NODE,
            router,
            [
                (RouteDecision::Chat.as_str(), CHAT_NODE),
                (RouteDecision::Github.as_str(), GITHUB_NODE),
            ],
        )
        .add_edge(CHAT_NODE, END)
        .add_edge(GITHUB_NODE, END);

    match checkpointer {
        Some(cp) => graph.compile_with_checkpointer(cp),
        None => graph.compile(),
    }
}
