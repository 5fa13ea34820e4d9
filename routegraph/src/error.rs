//! Agent execution error types.
//!
//! Used by `Node::run`, `LlmClient::invoke`, and everything built on them.

use std::time::Duration;

use thiserror::Error;

/// Agent execution error.
///
/// Returned by `Node::run` and `LlmClient::invoke` when a step fails. Concrete
/// agents normalize these into visible assistant messages at the node boundary;
/// only graph-level failures (empty graph, checkpoint save) surface to callers.
#[derive(Debug, Error)]
pub enum AgentError {
    /// Execution failed with a message (e.g. LLM call failed, host API error).
    #[error("execution failed: {0}")]
    ExecutionFailed(String),

    /// An external call exceeded its configured deadline.
    #[error("call timed out after {0:?}")]
    Timeout(Duration),
}

impl AgentError {
    /// Whether a retry wrapper should attempt the call again.
    ///
    /// Timeouts are always retryable. For `ExecutionFailed` the message is
    /// probed for transient upstream markers (rate limit, 5xx, connection).
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Timeout(_) => true,
            Self::ExecutionFailed(msg) => {
                msg.contains("429")
                    || msg.contains("500")
                    || msg.contains("502")
                    || msg.contains("503")
                    || msg.contains("timeout")
                    || msg.contains("connection")
            }
        }
    }
}
