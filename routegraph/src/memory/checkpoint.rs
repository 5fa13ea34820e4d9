//! Checkpoint record: one persisted snapshot of a thread's state.

use std::time::SystemTime;

use serde::{Deserialize, Serialize};

/// One checkpoint: state snapshot plus id/ts and an optional conversation
/// summary. Stored by a `Checkpointer` keyed by `thread_id`; each save
/// overwrites the thread's prior record.
///
/// The summary is filled by the session driver's exit-time save (for future
/// context-window trimming); per-turn saves leave it `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Checkpoint<S> {
    pub id: String,
    pub ts: String,
    pub state: S,
    pub summary: Option<String>,
}

impl<S> Checkpoint<S> {
    /// Creates a checkpoint from the current state. Uses current time for id/ts.
    pub fn from_state(state: S) -> Self {
        let ts = format!(
            "{}",
            SystemTime::now()
                .duration_since(SystemTime::UNIX_EPOCH)
                .map(|d| d.as_millis())
                .unwrap_or(0)
        );
        Self {
            id: ts.clone(),
            ts,
            state,
            summary: None,
        }
    }

    /// Attaches a conversation summary (builder style).
    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }
}
