//! Graph state: the value threaded through nodes, and how node output merges
//! back into it.
//!
//! Nodes receive a borrow of the prior state and return a *delta*; the
//! executor applies `GraphState::merge`, which concatenates list-valued
//! fields and overwrites scalars. The merge is an explicit, named operation
//! so its append-only contract can be unit-tested directly.

use serde::{Deserialize, Serialize};

use crate::message::Message;

/// State type usable by `StateGraph`. `merge` unions a node's delta into the
/// prior state: list fields concatenate, scalar fields take the delta's value.
pub trait GraphState: Clone + Send + Sync + 'static {
    fn merge(prior: Self, delta: Self) -> Self;
}

/// Shared conversation state: an append-only message log.
///
/// Owned by the session driver between turns; transiently owned by the
/// compiled graph during one invoke, which returns the merged copy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatState {
    pub messages: Vec<Message>,
}

impl ChatState {
    /// Fresh state holding a single user message. Used by tests and one-shot runs.
    pub fn with_user_message(content: impl Into<String>) -> Self {
        Self {
            messages: vec![Message::User(content.into())],
        }
    }

    /// Appends a user message for the next turn.
    pub fn push_user(&mut self, content: impl Into<String>) {
        self.messages.push(Message::User(content.into()));
    }

    pub fn last_message(&self) -> Option<&Message> {
        self.messages.last()
    }

    /// Content of the most recent user-authored message, scanning backwards.
    pub fn last_user_content(&self) -> Option<&str> {
        self.messages
            .iter()
            .rev()
            .find(|m| m.is_user())
            .map(|m| m.content())
    }
}

impl GraphState for ChatState {
    /// Concatenates the delta's messages after the prior log. Prior messages
    /// are never altered or reordered.
    fn merge(prior: Self, delta: Self) -> Self {
        let mut messages = prior.messages;
        messages.extend(delta.messages);
        Self { messages }
    }
}
