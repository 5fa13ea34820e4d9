//! Passthrough node: no-op entry point for conditional dispatch.

use async_trait::async_trait;

use crate::error::AgentError;
use crate::graph::node::Node;
use crate::state::GraphState;

/// Node that returns an empty delta. Wire it as the graph entry and attach a
/// router via `add_conditional_edges` so classification happens before any
/// agent runs, as in a route-then-dispatch workflow.
pub struct Passthrough {
    id: String,
}

impl Passthrough {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

#[async_trait]
impl<S> Node<S> for Passthrough
where
    S: GraphState + Default,
{
    fn id(&self) -> &str {
        &self.id
    }

    async fn run(&self, _state: &S) -> Result<S, AgentError> {
        Ok(S::default())
    }
}
