//! Node trait: one graph vertex, state in, delta out.

use async_trait::async_trait;

use crate::error::AgentError;

/// A graph vertex. `run` reads the prior state and returns a delta that the
/// executor merges via `GraphState::merge`. List fields concatenate, so a
/// node can only append to the conversation, never rewrite it.
///
/// Agent nodes are expected to normalize their own failures into message
/// content (the delta always carries exactly one assistant message); an `Err`
/// from `run` aborts the whole invoke and should be reserved for bugs, not
/// external-call failures.
#[async_trait]
pub trait Node<S>: Send + Sync {
    /// Stable node id, matching the id used in `StateGraph::add_node`.
    fn id(&self) -> &str;

    /// One step: read state, return the delta to merge.
    async fn run(&self, state: &S) -> Result<S, AgentError>;
}
