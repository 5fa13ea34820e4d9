//! Shared fixtures for state graph tests.

use async_trait::async_trait;

use routegraph::{AgentError, ChatState, Message, Node, Router};

/// Node that appends one assistant message with a fixed text.
pub struct SayNode {
    pub id: &'static str,
    pub text: &'static str,
}

#[async_trait]
impl Node<ChatState> for SayNode {
    fn id(&self) -> &str {
        self.id
    }

    async fn run(&self, _state: &ChatState) -> Result<ChatState, AgentError> {
        Ok(ChatState {
            messages: vec![Message::Assistant(self.text.to_string())],
        })
    }
}

/// Router with a fixed label set; routes on an exact match of the latest
/// user message, otherwise the default.
pub struct KeywordRouter {
    pub labels: Vec<&'static str>,
    pub default: &'static str,
}

#[async_trait]
impl Router<ChatState> for KeywordRouter {
    fn labels(&self) -> Vec<String> {
        self.labels.iter().map(|l| l.to_string()).collect()
    }

    fn default_label(&self) -> String {
        self.default.to_string()
    }

    async fn route(&self, state: &ChatState) -> String {
        let content = state.last_user_content().unwrap_or_default();
        for label in &self.labels {
            if content == *label {
                return label.to_string();
            }
        }
        self.default.to_string()
    }
}
