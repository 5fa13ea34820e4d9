//! Mock LlmClient for tests and offline runs.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::AgentError;
use crate::llm::LlmClient;
use crate::message::Message;

/// Mock LLM: fixed reply, scripted reply queue, or always failing.
///
/// `scripted` pops replies front-first and falls back to the fixed reply when
/// the queue is drained. Used by router, agent, and session tests.
pub struct MockLlm {
    reply: String,
    scripted: Mutex<Vec<Result<String, String>>>,
    fail: bool,
}

impl MockLlm {
    /// Mock that always returns the same reply.
    pub fn fixed(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
            scripted: Mutex::new(Vec::new()),
            fail: false,
        }
    }

    /// Mock that returns each scripted result in order, then the fixed reply.
    /// `Err` entries surface as `AgentError::ExecutionFailed`.
    pub fn scripted(replies: impl IntoIterator<Item = Result<String, String>>) -> Self {
        Self {
            reply: String::new(),
            scripted: Mutex::new(replies.into_iter().collect()),
            fail: false,
        }
    }

    /// Mock whose every call fails, for outage-path tests.
    pub fn failing() -> Self {
        Self {
            reply: String::new(),
            scripted: Mutex::new(Vec::new()),
            fail: true,
        }
    }
}

#[async_trait]
impl LlmClient for MockLlm {
    async fn invoke(&self, _messages: &[Message]) -> Result<String, AgentError> {
        if self.fail {
            return Err(AgentError::ExecutionFailed("mock llm failure".into()));
        }
        let mut scripted = self.scripted.lock().expect("mock lock");
        if scripted.is_empty() {
            return Ok(self.reply.clone());
        }
        match scripted.remove(0) {
            Ok(reply) => Ok(reply),
            Err(msg) => Err(AgentError::ExecutionFailed(msg)),
        }
    }
}
