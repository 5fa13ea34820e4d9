//! LLM client abstraction used by the router, the agents, and summarization.
//!
//! One narrow capability: given messages, return assistant text. The router
//! uses it for single-label classification, the chat agent for full-history
//! replies, the repository agent for intent classification and free-form
//! fallbacks, and the session driver for exit-time summaries.

mod mock;
mod retry;

#[cfg(feature = "openai")]
mod openai;

pub use mock::MockLlm;
pub use retry::{RetryConfig, RetryingLlm};

#[cfg(feature = "openai")]
pub use openai::ChatOpenAI;

use async_trait::async_trait;

use crate::error::AgentError;
use crate::message::Message;

/// LLM client: given messages, returns the assistant's text reply.
///
/// Treated as a fallible remote call everywhere; callers decide whether a
/// failure becomes a fallback label, an error-marker message, or a skipped
/// summary. Wrap with [`RetryingLlm`] for bounded retries and timeouts.
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Invoke one completion: read messages, return assistant content.
    async fn invoke(&self, messages: &[Message]) -> Result<String, AgentError>;
}
