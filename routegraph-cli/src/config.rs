//! Run config: API base, key, model, host token, checkpoint dir. Filled from
//! env / .env with flag overrides applied in `main`.

use std::sync::Arc;
use std::time::Duration;

use async_openai::config::OpenAIConfig;
use routegraph::{ChatOpenAI, GitHubHost, LlmClient, RetryConfig, RetryingLlm};

/// Error type used for config loading and session failures.
pub type Error = Box<dyn std::error::Error + Send + Sync>;

/// Run config for one CLI session.
#[derive(Clone, Debug)]
pub struct RunConfig {
    /// OpenAI-compatible API base URL, e.g. `https://api.openai.com/v1`.
    pub api_base: String,
    /// API key for the completion endpoint.
    pub api_key: String,
    /// Model name, e.g. `gpt-4o-mini`.
    pub model: String,
    /// Sampling temperature 0–2, lower is more deterministic. Default: unset (use API default).
    pub temperature: Option<f32>,
    /// Token for the code-hosting API.
    pub github_token: String,
    /// Code-hosting API base URL.
    pub github_api_url: String,
    /// Directory holding one checkpoint file per thread.
    pub checkpoint_dir: String,
    /// Per-attempt LLM deadline in seconds.
    pub llm_timeout_secs: u64,
    /// Retries after the first LLM attempt.
    pub llm_max_retries: u32,
}

impl RunConfig {
    /// Fill config from env vars (and .env loaded by the caller).
    ///
    /// `OPENAI_API_KEY` required; `OPENAI_API_BASE`, `OPENAI_MODEL`,
    /// `OPENAI_TEMPERATURE`, `GITHUB_TOKEN`, `GITHUB_API_URL`,
    /// `CHECKPOINT_DIR`, `LLM_TIMEOUT_SECS`, `LLM_MAX_RETRIES` optional.
    pub fn from_env() -> Result<Self, Error> {
        let api_key = std::env::var("OPENAI_API_KEY").map_err(|_| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "OPENAI_API_KEY is not set; please configure it in .env",
            )
        })?;
        let api_base = std::env::var("OPENAI_API_BASE")
            .unwrap_or_else(|_| "https://api.openai.com/v1".to_string());
        let model = std::env::var("OPENAI_MODEL").unwrap_or_else(|_| "gpt-4o-mini".to_string());
        let temperature = std::env::var("OPENAI_TEMPERATURE")
            .ok()
            .and_then(|s| s.parse().ok());
        let github_token = std::env::var("GITHUB_TOKEN").unwrap_or_default();
        let github_api_url = std::env::var("GITHUB_API_URL")
            .unwrap_or_else(|_| "https://api.github.com".to_string());
        let checkpoint_dir =
            std::env::var("CHECKPOINT_DIR").unwrap_or_else(|_| "checkpoints".to_string());
        let llm_timeout_secs = std::env::var("LLM_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(60);
        let llm_max_retries = std::env::var("LLM_MAX_RETRIES")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(2);
        Ok(Self {
            api_base,
            api_key,
            model,
            temperature,
            github_token,
            github_api_url,
            checkpoint_dir,
            llm_timeout_secs,
            llm_max_retries,
        })
    }

    /// Retry/timeout policy for LLM calls from this config.
    pub fn retry_config(&self) -> RetryConfig {
        RetryConfig {
            max_retries: self.llm_max_retries,
            timeout: Some(Duration::from_secs(self.llm_timeout_secs)),
            ..RetryConfig::default()
        }
    }

    /// Builds the completion client: ChatOpenAI wrapped with retry + timeout.
    pub fn build_llm(&self) -> Arc<dyn LlmClient> {
        let openai_config = OpenAIConfig::new()
            .with_api_key(self.api_key.as_str())
            .with_api_base(self.api_base.as_str());
        let mut chat = ChatOpenAI::with_config(openai_config, self.model.as_str());
        if let Some(t) = self.temperature {
            chat = chat.with_temperature(t);
        }
        Arc::new(RetryingLlm::new(Box::new(chat), self.retry_config()))
    }

    /// Builds the code-host client against the configured API base.
    pub fn build_host(&self) -> Arc<GitHubHost> {
        Arc::new(GitHubHost::with_base_url(
            self.github_api_url.as_str(),
            self.github_token.as_str(),
        ))
    }
}
