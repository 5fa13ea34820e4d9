//! Session driver: owns the conversation state for one thread, runs one
//! graph invocation per user turn, persists with a summary on exit.

use std::sync::Arc;

use tracing::{info, warn};

use routegraph::{
    summarize_conversation, ChatState, Checkpoint, Checkpointer, CompiledStateGraph, LlmClient,
    RunnableConfig,
};

use crate::config::Error;

/// Case-insensitive commands that end the session.
const EXIT_COMMANDS: [&str; 3] = ["exit", "quit", "bye"];

/// One interactive session bound to a thread id.
///
/// The driver owns the state between turns; the graph transiently owns it
/// during `turn`. `finish` must be called to persist the summarized
/// checkpoint; a save failure there is a visible error, never swallowed.
pub struct Session {
    graph: CompiledStateGraph<ChatState>,
    checkpointer: Arc<dyn Checkpointer<ChatState>>,
    llm: Arc<dyn LlmClient>,
    thread_id: String,
    state: ChatState,
}

impl Session {
    /// Loads the thread's prior state (empty for a fresh thread) and binds
    /// the session to it. Returns the session and whether it resumed an
    /// existing conversation.
    pub async fn resume(
        graph: CompiledStateGraph<ChatState>,
        checkpointer: Arc<dyn Checkpointer<ChatState>>,
        llm: Arc<dyn LlmClient>,
        thread_id: impl Into<String>,
    ) -> Result<(Self, bool), Error> {
        let thread_id = thread_id.into();
        let state = match checkpointer.load(&thread_id).await? {
            Some(checkpoint) => checkpoint.state,
            None => ChatState::default(),
        };
        let resumed = !state.messages.is_empty();
        info!(thread_id = %thread_id, resumed, "session started");
        Ok((
            Self {
                graph,
                checkpointer,
                llm,
                thread_id,
                state,
            },
            resumed,
        ))
    }

    pub fn thread_id(&self) -> &str {
        &self.thread_id
    }

    /// Whether `input` is one of the exit sentinels (case-insensitive).
    pub fn is_exit_command(input: &str) -> bool {
        let normalized = input.trim().to_lowercase();
        EXIT_COMMANDS.contains(&normalized.as_str())
    }

    /// Fresh random thread id (8 hex chars) for an empty thread-id prompt.
    pub fn fresh_thread_id() -> String {
        format!("{:08x}", rand::random::<u32>())
    }

    /// One turn: append the user message, invoke the graph, return the
    /// assistant's reply. On a failed invoke the log (including the user
    /// message) is kept so the session can continue.
    pub async fn turn(&mut self, input: &str) -> Result<String, Error> {
        self.state.push_user(input);
        let config = RunnableConfig {
            thread_id: Some(self.thread_id.clone()),
        };
        self.state = self.graph.invoke(self.state.clone(), Some(config)).await?;
        let reply = self
            .state
            .last_message()
            .map(|m| m.content().to_string())
            .unwrap_or_default();
        Ok(reply)
    }

    /// Ends the session: summarizes the conversation and saves the final
    /// checkpoint. A summarizer failure degrades to no summary; a save
    /// failure propagates.
    pub async fn finish(self) -> Result<String, Error> {
        let mut checkpoint = Checkpoint::from_state(self.state.clone());
        if !self.state.messages.is_empty() {
            match summarize_conversation(self.llm.as_ref(), &self.state.messages).await {
                Ok(summary) => checkpoint = checkpoint.with_summary(summary),
                Err(e) => warn!(error = %e, "summarization failed; saving without summary"),
            }
        }
        self.checkpointer.save(&self.thread_id, &checkpoint).await?;
        info!(thread_id = %self.thread_id, "session saved");
        Ok(self.thread_id)
    }
}
