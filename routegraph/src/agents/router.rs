//! Intent router: LLM single-label classification of the latest user message.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::agents::route::RouteDecision;
use crate::graph::Router;
use crate::llm::LlmClient;
use crate::message::Message;
use crate::state::ChatState;

const ROUTE_PROMPT: &str = "You are a routing assistant. Classify the user's message as either:\n\
- 'github': if it is about repositories, commits, pull requests, or other code-hosting tasks\n\
- 'chat': for anything else (general conversation, non-repository questions)\n\
Respond with only the label: 'github' or 'chat'.";

/// Router that asks the LLM to pick a branch for the latest user message.
///
/// Any failure (LLM error, out-of-set reply, or no user message at all)
/// collapses to the default label. The failure is logged and the turn
/// proceeds; routing is never fatal.
pub struct IntentRouter {
    llm: Arc<dyn LlmClient>,
}

impl IntentRouter {
    pub fn new(llm: Arc<dyn LlmClient>) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl Router<ChatState> for IntentRouter {
    fn labels(&self) -> Vec<String> {
        RouteDecision::all()
            .iter()
            .map(|d| d.as_str().to_string())
            .collect()
    }

    fn default_label(&self) -> String {
        RouteDecision::Chat.as_str().to_string()
    }

    async fn route(&self, state: &ChatState) -> String {
        let last_user = match state.last_user_content() {
            Some(content) => content.to_string(),
            None => {
                warn!("routing with no user message; taking default branch");
                return self.default_label();
            }
        };

        let request = [
            Message::System(ROUTE_PROMPT.to_string()),
            Message::User(last_user),
        ];
        match self.llm.invoke(&request).await {
            Ok(reply) => {
                let decision = RouteDecision::from_label(&reply);
                debug!(raw = %reply.trim(), decision = decision.as_str(), "route classified");
                decision.as_str().to_string()
            }
            Err(e) => {
                warn!(error = %e, "routing failed; taking default branch");
                self.default_label()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::MockLlm;

    fn state() -> ChatState {
        ChatState::with_user_message("list my repositories")
    }

    /// **Scenario**: a clean label reply routes to that branch.
    #[tokio::test]
    async fn routes_on_exact_label() {
        let router = IntentRouter::new(Arc::new(MockLlm::fixed("github")));
        assert_eq!(router.route(&state()).await, "github");
    }

    /// **Scenario**: replies are trimmed and lowercased before matching.
    #[tokio::test]
    async fn normalizes_reply_before_matching() {
        let router = IntentRouter::new(Arc::new(MockLlm::fixed("  GitHub\n")));
        assert_eq!(router.route(&state()).await, "github");
    }

    /// **Scenario**: an out-of-set reply returns the default label, never errors.
    #[tokio::test]
    async fn unknown_reply_returns_default() {
        let router = IntentRouter::new(Arc::new(MockLlm::fixed("I think this is about code")));
        assert_eq!(router.route(&state()).await, "chat");
    }

    /// **Scenario**: an LLM failure returns the default label, never errors.
    #[tokio::test]
    async fn llm_failure_returns_default() {
        let router = IntentRouter::new(Arc::new(MockLlm::failing()));
        assert_eq!(router.route(&state()).await, "chat");
    }

    /// **Scenario**: a state without any user message takes the default branch.
    #[tokio::test]
    async fn empty_state_returns_default() {
        let router = IntentRouter::new(Arc::new(MockLlm::fixed("github")));
        assert_eq!(router.route(&ChatState::default()).await, "chat");
    }

    /// **Scenario**: labels() covers the default label (compile-time totality input).
    #[test]
    fn labels_include_default() {
        let router = IntentRouter::new(Arc::new(MockLlm::fixed("")));
        assert!(router.labels().contains(&router.default_label()));
    }
}
