//! Retrying LLM client: bounded retries with backoff, plus per-call timeout.
//!
//! The base design has neither retry nor timeout on external calls; this
//! wrapper adds both. Retries only fire for retryable failures
//! (`AgentError::is_retryable`); a timeout is surfaced as a retryable
//! `AgentError::Timeout`.

use std::time::Duration;

use async_trait::async_trait;
use tracing::warn;

use crate::error::AgentError;
use crate::llm::LlmClient;
use crate::message::Message;

/// Retry/timeout policy for [`RetryingLlm`].
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Retries after the first attempt; 2 means up to 3 calls total.
    pub max_retries: u32,
    pub initial_backoff_ms: u64,
    pub max_backoff_ms: u64,
    /// Deadline per attempt. `None` disables timeout enforcement.
    pub timeout: Option<Duration>,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 2,
            initial_backoff_ms: 500,
            max_backoff_ms: 8_000,
            timeout: Some(Duration::from_secs(60)),
        }
    }
}

/// Exponential backoff with 0.8x–1.2x jitter.
fn backoff(attempt: u32, config: &RetryConfig) -> Duration {
    let ms = (config.initial_backoff_ms * 2u64.pow(attempt)).min(config.max_backoff_ms);
    let jitter = 0.8 + rand::random::<f64>() * 0.4;
    Duration::from_millis((ms as f64 * jitter) as u64)
}

/// LlmClient decorator that retries retryable failures and enforces a
/// per-attempt deadline.
pub struct RetryingLlm {
    inner: Box<dyn LlmClient>,
    config: RetryConfig,
}

impl RetryingLlm {
    pub fn new(inner: Box<dyn LlmClient>, config: RetryConfig) -> Self {
        Self { inner, config }
    }

    async fn attempt(&self, messages: &[Message]) -> Result<String, AgentError> {
        match self.config.timeout {
            Some(deadline) => match tokio::time::timeout(deadline, self.inner.invoke(messages)).await
            {
                Ok(result) => result,
                Err(_) => Err(AgentError::Timeout(deadline)),
            },
            None => self.inner.invoke(messages).await,
        }
    }
}

#[async_trait]
impl LlmClient for RetryingLlm {
    async fn invoke(&self, messages: &[Message]) -> Result<String, AgentError> {
        let mut last_err = None;
        for attempt in 0..=self.config.max_retries {
            match self.attempt(messages).await {
                Ok(reply) => return Ok(reply),
                Err(e) => {
                    if e.is_retryable() && attempt < self.config.max_retries {
                        let delay = backoff(attempt, &self.config);
                        warn!(
                            attempt = attempt + 1,
                            max_retries = self.config.max_retries,
                            backoff_ms = delay.as_millis() as u64,
                            error = %e,
                            "retrying LLM request"
                        );
                        tokio::time::sleep(delay).await;
                        last_err = Some(e);
                        continue;
                    }
                    return Err(e);
                }
            }
        }
        Err(last_err.unwrap_or_else(|| AgentError::ExecutionFailed("retries exhausted".into())))
    }
}
