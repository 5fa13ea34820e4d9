//! Code host client: the resource listing/query capability used by the
//! repository agent.
//!
//! Narrow interface over a code-hosting API: who am I, which repositories,
//! which commits, how many search hits. Every call may fail with an
//! HTTP-style status error; the repository agent treats any non-success as a
//! soft failure for that intent branch only.

mod mock;

#[cfg(feature = "github")]
mod github;

pub use mock::MockCodeHost;

#[cfg(feature = "github")]
pub use github::GitHubHost;

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

/// Error from a code host call.
#[derive(Debug, Error)]
pub enum CodeHostError {
    /// Non-success HTTP status from the host API.
    #[error("host returned status {code}: {message}")]
    Status { code: u16, message: String },

    /// Network/transport failure before a status was received.
    #[error("host transport error: {0}")]
    Transport(String),

    /// Response body did not match the expected shape.
    #[error("host response decode error: {0}")]
    Decode(String),
}

/// One repository owned by a user.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Repo {
    pub name: String,
}

/// One commit in a repository; `author_login` is absent for commits whose
/// author has no account mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commit {
    pub author_login: Option<String>,
}

/// Client for a code-hosting API.
///
/// **Interaction**: consumed by `GithubAgent`; implemented by `GitHubHost`
/// (feature `github`) and `MockCodeHost` (tests).
#[async_trait]
pub trait CodeHost: Send + Sync {
    /// Login of the authenticated user.
    async fn viewer_login(&self) -> Result<String, CodeHostError>;

    /// Repositories owned by `login`.
    async fn list_repos(&self, login: &str) -> Result<Vec<Repo>, CodeHostError>;

    /// All commits of `login/repo`, following pagination to the end.
    async fn list_commits(&self, login: &str, repo: &str) -> Result<Vec<Commit>, CodeHostError>;

    /// Total hit count for an issue/PR search query.
    async fn search_count(&self, query: &str) -> Result<u64, CodeHostError>;
}
