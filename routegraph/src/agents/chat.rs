//! Chat agent: full-history completion, one assistant message per turn.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::AgentError;
use crate::graph::Node;
use crate::llm::LlmClient;
use crate::message::Message;
use crate::state::ChatState;

/// General conversation agent. Forwards the full message history to the LLM
/// and appends its reply. On failure it appends a visible error-marker
/// message instead: the turn always completes with exactly one new message,
/// and no error escapes the node.
pub struct ChatAgent {
    llm: Arc<dyn LlmClient>,
}

impl ChatAgent {
    pub fn new(llm: Arc<dyn LlmClient>) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl Node<ChatState> for ChatAgent {
    fn id(&self) -> &str {
        "chat"
    }

    async fn run(&self, state: &ChatState) -> Result<ChatState, AgentError> {
        let reply = match self.llm.invoke(&state.messages).await {
            Ok(content) => content,
            Err(e) => format!("⚠️ Failed to generate chat response: {}", e),
        };
        Ok(ChatState {
            messages: vec![Message::Assistant(reply)],
        })
    }
}
