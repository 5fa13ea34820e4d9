//! Mock CodeHost for tests.

use std::sync::Mutex;

use async_trait::async_trait;

use super::{CodeHost, CodeHostError, Commit, Repo};

type HostResult<T> = Result<T, (u16, String)>;

/// Mock code host with per-call scripted results (builder style).
///
/// Failures are given as `(status, message)` and surface as
/// `CodeHostError::Status`. Defaults: one user, one repository, no commits,
/// zero search hits.
pub struct MockCodeHost {
    viewer: HostResult<String>,
    repos: HostResult<Vec<Repo>>,
    commits: Mutex<Vec<HostResult<Vec<Commit>>>>,
    search: HostResult<u64>,
}

impl MockCodeHost {
    pub fn new() -> Self {
        Self {
            viewer: Ok("octocat".to_string()),
            repos: Ok(vec![Repo {
                name: "hello-world".to_string(),
            }]),
            commits: Mutex::new(Vec::new()),
            search: Ok(0),
        }
    }

    pub fn with_viewer(mut self, login: impl Into<String>) -> Self {
        self.viewer = Ok(login.into());
        self
    }

    pub fn with_repos(mut self, names: impl IntoIterator<Item = &'static str>) -> Self {
        self.repos = Ok(names
            .into_iter()
            .map(|n| Repo {
                name: n.to_string(),
            })
            .collect());
        self
    }

    /// Queue per-repo commit listings, returned in call order; when drained,
    /// further calls return an empty list.
    pub fn with_commit_pages(
        self,
        pages: impl IntoIterator<Item = HostResult<Vec<Commit>>>,
    ) -> Self {
        *self.commits.lock().expect("mock lock") = pages.into_iter().collect();
        self
    }

    pub fn with_search_count(mut self, count: u64) -> Self {
        self.search = Ok(count);
        self
    }

    pub fn with_repos_failure(mut self, status: u16, message: impl Into<String>) -> Self {
        self.repos = Err((status, message.into()));
        self
    }

    pub fn with_viewer_failure(mut self, status: u16, message: impl Into<String>) -> Self {
        self.viewer = Err((status, message.into()));
        self
    }

    pub fn with_search_failure(mut self, status: u16, message: impl Into<String>) -> Self {
        self.search = Err((status, message.into()));
        self
    }
}

impl Default for MockCodeHost {
    fn default() -> Self {
        Self::new()
    }
}

fn to_host_error((code, message): (u16, String)) -> CodeHostError {
    CodeHostError::Status { code, message }
}

#[async_trait]
impl CodeHost for MockCodeHost {
    async fn viewer_login(&self) -> Result<String, CodeHostError> {
        self.viewer.clone().map_err(to_host_error)
    }

    async fn list_repos(&self, _login: &str) -> Result<Vec<Repo>, CodeHostError> {
        self.repos.clone().map_err(to_host_error)
    }

    async fn list_commits(&self, _login: &str, _repo: &str) -> Result<Vec<Commit>, CodeHostError> {
        let mut queue = self.commits.lock().expect("mock lock");
        if queue.is_empty() {
            return Ok(Vec::new());
        }
        queue.remove(0).map_err(to_host_error)
    }

    async fn search_count(&self, _query: &str) -> Result<u64, CodeHostError> {
        self.search.clone().map_err(to_host_error)
    }
}
