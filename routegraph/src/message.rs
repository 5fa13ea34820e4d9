//! Conversation message type shared by the router, agents, and checkpointing.
//!
//! One explicit value type for a turn's content; role is the enum variant.
//! Serde round-trips losslessly (role + content, in order) so checkpoints can
//! persist full conversations.

use serde::{Deserialize, Serialize};

/// One message in a conversation. Ordering within `ChatState::messages` is
/// significant; messages are never edited after being appended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Message {
    /// Instruction message (classification prompts, summary prompts).
    System(String),
    /// User-authored input for a turn.
    User(String),
    /// Assistant reply; exactly one is appended per turn.
    Assistant(String),
    /// Output of an external tool call, with the tool's name when known.
    Tool {
        content: String,
        tool_name: Option<String>,
    },
}

impl Message {
    /// Text content of the message, regardless of role.
    pub fn content(&self) -> &str {
        match self {
            Self::System(s) | Self::User(s) | Self::Assistant(s) => s,
            Self::Tool { content, .. } => content,
        }
    }

    /// Role label, stable across serialization ("system", "user", "assistant", "tool").
    pub fn role(&self) -> &'static str {
        match self {
            Self::System(_) => "system",
            Self::User(_) => "user",
            Self::Assistant(_) => "assistant",
            Self::Tool { .. } => "tool",
        }
    }

    pub fn is_user(&self) -> bool {
        matches!(self, Self::User(_))
    }

    pub fn is_assistant(&self) -> bool {
        matches!(self, Self::Assistant(_))
    }
}
