//! GitHub REST v3 client implementing `CodeHost` (feature `github`).
//!
//! Token auth via `Authorization: Bearer`, explicit status checks, and a
//! per-page loop for commit listings. GitHub requires a `User-Agent` on
//! every request.

use async_trait::async_trait;
use serde::Deserialize;

use super::{CodeHost, CodeHostError, Commit, Repo};

const DEFAULT_API_URL: &str = "https://api.github.com";
const PAGE_SIZE: usize = 100;

/// GitHub REST client.
pub struct GitHubHost {
    client: reqwest::Client,
    base_url: String,
    token: String,
}

impl GitHubHost {
    /// Client against api.github.com with the given token.
    pub fn new(token: impl Into<String>) -> Self {
        Self::with_base_url(DEFAULT_API_URL, token)
    }

    /// Client against a custom API base (GitHub Enterprise, test server).
    pub fn with_base_url(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: token.into(),
        }
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<T, CodeHostError> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.token)
            .header(reqwest::header::USER_AGENT, "routegraph")
            .header(reqwest::header::ACCEPT, "application/vnd.github+json")
            .send()
            .await
            .map_err(|e| CodeHostError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(CodeHostError::Status {
                code: status.as_u16(),
                message,
            });
        }
        response
            .json::<T>()
            .await
            .map_err(|e| CodeHostError::Decode(e.to_string()))
    }
}

#[derive(Deserialize)]
struct ViewerResponse {
    login: String,
}

#[derive(Deserialize)]
struct CommitItem {
    author: Option<CommitAuthor>,
}

#[derive(Deserialize)]
struct CommitAuthor {
    login: String,
}

#[derive(Deserialize)]
struct SearchResponse {
    total_count: u64,
}

#[async_trait]
impl CodeHost for GitHubHost {
    async fn viewer_login(&self) -> Result<String, CodeHostError> {
        let viewer: ViewerResponse = self.get_json("/user").await?;
        Ok(viewer.login)
    }

    async fn list_repos(&self, login: &str) -> Result<Vec<Repo>, CodeHostError> {
        self.get_json(&format!("/users/{}/repos?per_page={}", login, PAGE_SIZE))
            .await
    }

    async fn list_commits(&self, login: &str, repo: &str) -> Result<Vec<Commit>, CodeHostError> {
        let mut commits = Vec::new();
        let mut page = 1usize;
        loop {
            let items: Vec<CommitItem> = self
                .get_json(&format!(
                    "/repos/{}/{}/commits?per_page={}&page={}",
                    login, repo, PAGE_SIZE, page
                ))
                .await?;
            let count = items.len();
            commits.extend(items.into_iter().map(|c| Commit {
                author_login: c.author.map(|a| a.login),
            }));
            if count < PAGE_SIZE {
                return Ok(commits);
            }
            page += 1;
        }
    }

    async fn search_count(&self, query: &str) -> Result<u64, CodeHostError> {
        let encoded = query.replace(' ', "+");
        let search: SearchResponse = self
            .get_json(&format!("/search/issues?q={}", encoded))
            .await?;
        Ok(search.total_count)
    }
}
