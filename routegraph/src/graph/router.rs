//! Router trait: picks the branch label for conditional edges.

use async_trait::async_trait;

/// Branch selector attached to a node via `StateGraph::add_conditional_edges`.
///
/// `route` is infallible by signature: a router must swallow classification
/// failures and return `default_label()` instead. `labels()` declares every
/// label the router can produce (including the default) so `compile()` can
/// verify each one maps to a registered node before the graph ever runs.
#[async_trait]
pub trait Router<S>: Send + Sync {
    /// Every label this router can produce, including the default.
    fn labels(&self) -> Vec<String>;

    /// Label substituted on classification failure or an out-of-set reply.
    fn default_label(&self) -> String;

    /// Picks the branch for the current state. Must return one of `labels()`.
    async fn route(&self, state: &S) -> String;
}
