//! Concrete agents: routed chat workflow over `ChatState`.
//!
//! A passthrough entry node classifies each turn via [`IntentRouter`] and
//! dispatches to [`ChatAgent`] or [`GithubAgent`]. [`build_workflow`] wires
//! them into a compiled graph.

mod chat;
mod github;
mod route;
mod router;
mod summarize;
mod workflow;

pub use chat::ChatAgent;
pub use github::{GithubAgent, ToolIntent};
pub use route::RouteDecision;
pub use router::IntentRouter;
pub use summarize::summarize_conversation;
pub use workflow::{build_workflow, CHAT_NODE, GITHUB_NODE, ROUTE_NODE};
