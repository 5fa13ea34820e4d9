//! # routegraph
//!
//! Routed multi-agent state graphs in Rust. One shared conversation state
//! flows through a directed graph of nodes with a simple **state-in, delta-out**
//! design: each node reads the prior state and returns a delta that the
//! executor merges back (message lists concatenate, so the log is append-only).
//!
//! ## Design Principles
//!
//! - **Single state type**: Each graph uses one state struct (e.g. [`ChatState`])
//!   that all nodes read from and append to via [`GraphState::merge`].
//! - **One message per node run**: An agent node appends exactly one assistant
//!   message per turn and normalizes its own failures into message content —
//!   the graph always reaches a terminal state, even during a full outage.
//! - **Routing at the edges**: Branch selection is a property of the graph
//!   wiring ([`StateGraph::add_conditional_edges`]), validated eagerly at
//!   compile time. An unroutable graph fails construction, not a user's turn.
//!
//! ## Main Modules
//!
//! - [`graph`]: `StateGraph`, `CompiledStateGraph`, `Node`, `Router` — build and run graphs.
//! - [`agents`]: the routed chat workflow — `IntentRouter`, `ChatAgent`, `GithubAgent`.
//! - [`llm`]: `LlmClient` trait, `MockLlm`, `RetryingLlm`, and `ChatOpenAI` via feature `openai`.
//! - [`host`]: code-hosting API client — `CodeHost` trait, `MockCodeHost`, `GitHubHost` via feature `github`.
//! - [`memory`]: checkpointing — `Checkpointer`, `MemorySaver`, `FileSaver`.
//!
//! ## Features
//!
//! - `openai`: OpenAI-compatible chat completions via `async-openai`.
//! - `github`: GitHub REST client for the repository agent via `reqwest`.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use routegraph::{build_workflow, ChatState, MockCodeHost, MockLlm};
//!
//! # #[tokio::main]
//! # async fn main() {
//! let graph = build_workflow(
//!     Arc::new(MockLlm::fixed("chat")),
//!     Arc::new(MockCodeHost::new()),
//!     None,
//! )
//! .expect("workflow wiring is valid");
//!
//! let state = ChatState::with_user_message("hello");
//! let out = graph.invoke(state, None).await.unwrap();
//! println!("{}", out.messages.last().unwrap().content());
//! # }
//! ```

pub mod agents;
pub mod error;
pub mod graph;
pub mod host;
pub mod llm;
pub mod memory;
pub mod message;
pub mod state;

pub use agents::{
    build_workflow, summarize_conversation, ChatAgent, GithubAgent, IntentRouter, RouteDecision,
    ToolIntent, CHAT_NODE, GITHUB_NODE, ROUTE_NODE,
};
pub use error::AgentError;
pub use graph::{
    CompilationError, CompiledStateGraph, Node, Passthrough, Router, StateGraph, END, START,
};
pub use host::{CodeHost, CodeHostError, Commit, MockCodeHost, Repo};
#[cfg(feature = "github")]
pub use host::GitHubHost;
pub use llm::{LlmClient, MockLlm, RetryConfig, RetryingLlm};
#[cfg(feature = "openai")]
pub use llm::ChatOpenAI;
pub use memory::{
    Checkpoint, CheckpointError, Checkpointer, FileSaver, JsonSerializer, MemorySaver,
    RunnableConfig, Serializer,
};
pub use message::Message;
pub use state::{ChatState, GraphState};
