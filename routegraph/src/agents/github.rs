//! Repository agent: sub-classifies the request and calls the code host.
//!
//! Two-stage node: an LLM intent classification into a closed set, then one
//! host call chain per intent. A classification failure aborts the turn
//! before any host call; a failure inside a branch is caught per-branch.
//! Either way the turn completes with exactly one assistant message.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::error::AgentError;
use crate::graph::Node;
use crate::host::CodeHost;
use crate::llm::LlmClient;
use crate::message::Message;
use crate::state::ChatState;

const INTENT_PROMPT: &str = "You are a classifier for repository queries. Classify the user's request as one of the following:\n\
- 'list_repos'\n\
- 'count_commits'\n\
- 'count_prs'\n\
- 'general_question'\n\
Only output the label.";

/// Closed set of tool intents the repository agent can execute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolIntent {
    ListRepos,
    CountCommits,
    CountPrs,
    /// Free-form completion; also the fallback arm for unrecognized labels.
    GeneralQuestion,
}

impl ToolIntent {
    /// Parses a raw classifier reply (trimmed, lowercased). Unrecognized
    /// labels take the fallback arm to `GeneralQuestion`.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "list_repos" => Self::ListRepos,
            "count_commits" => Self::CountCommits,
            "count_prs" => Self::CountPrs,
            "general_question" => Self::GeneralQuestion,
            _ => Self::GeneralQuestion,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ListRepos => "list_repos",
            Self::CountCommits => "count_commits",
            Self::CountPrs => "count_prs",
            Self::GeneralQuestion => "general_question",
        }
    }
}

/// Repository agent node.
pub struct GithubAgent {
    llm: Arc<dyn LlmClient>,
    host: Arc<dyn CodeHost>,
}

impl GithubAgent {
    pub fn new(llm: Arc<dyn LlmClient>, host: Arc<dyn CodeHost>) -> Self {
        Self { llm, host }
    }

    async fn classify(&self, user_msg: &str) -> Result<ToolIntent, AgentError> {
        let request = [
            Message::System(INTENT_PROMPT.to_string()),
            Message::User(user_msg.to_string()),
        ];
        let reply = self.llm.invoke(&request).await?;
        Ok(ToolIntent::from_label(&reply))
    }

    async fn execute(&self, intent: ToolIntent, user_msg: &str) -> Result<String, AgentError> {
        let host_err = |e: crate::host::CodeHostError| AgentError::ExecutionFailed(e.to_string());
        match intent {
            ToolIntent::ListRepos => {
                let login = self.host.viewer_login().await.map_err(host_err)?;
                let repos = self.host.list_repos(&login).await.map_err(host_err)?;
                if repos.is_empty() {
                    return Ok(format!("User {} has no repositories.", login));
                }
                let names: Vec<_> = repos.into_iter().map(|r| r.name).collect();
                Ok(format!(
                    "User {} has the following repositories: {}",
                    login,
                    names.join(", ")
                ))
            }
            ToolIntent::CountCommits => {
                let login = self.host.viewer_login().await.map_err(host_err)?;
                let repos = self.host.list_repos(&login).await.map_err(host_err)?;
                let repo_count = repos.len();
                let mut total = 0usize;
                for repo in &repos {
                    let commits = self
                        .host
                        .list_commits(&login, &repo.name)
                        .await
                        .map_err(host_err)?;
                    total += commits
                        .iter()
                        .filter(|c| c.author_login.as_deref() == Some(login.as_str()))
                        .count();
                }
                Ok(format!(
                    "You have authored {} commits across {} repositories.",
                    total, repo_count
                ))
            }
            ToolIntent::CountPrs => {
                let login = self.host.viewer_login().await.map_err(host_err)?;
                let count = self
                    .host
                    .search_count(&format!("author:{} type:pr", login))
                    .await
                    .map_err(host_err)?;
                Ok(format!("You have opened {} pull requests.", count))
            }
            ToolIntent::GeneralQuestion => {
                self.llm.invoke(&[Message::User(user_msg.to_string())]).await
            }
        }
    }
}

#[async_trait]
impl Node<ChatState> for GithubAgent {
    fn id(&self) -> &str {
        "github"
    }

    async fn run(&self, state: &ChatState) -> Result<ChatState, AgentError> {
        let user_msg = state.last_user_content().unwrap_or_default().to_string();

        // Classification failure aborts before any host call is attempted.
        let intent = match self.classify(&user_msg).await {
            Ok(intent) => intent,
            Err(e) => {
                warn!(error = %e, "repository intent classification failed");
                return Ok(ChatState {
                    messages: vec![Message::Assistant(format!(
                        "⚠️ Failed to classify repository request: {}",
                        e
                    ))],
                });
            }
        };
        debug!(intent = intent.as_str(), "repository intent classified");

        let reply = match self.execute(intent, &user_msg).await {
            Ok(text) => text,
            Err(e) => {
                warn!(intent = intent.as_str(), error = %e, "repository request failed");
                format!("⚠️ Error processing repository request: {}", e)
            }
        };
        Ok(ChatState {
            messages: vec![Message::Assistant(reply)],
        })
    }
}
