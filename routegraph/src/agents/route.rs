//! Route decision: which agent handles the current turn.

/// Closed set of branch labels the router can produce. Computed fresh every
/// turn from the latest user message; never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    /// General conversation, the catch-all branch.
    Chat,
    /// Repository/code-hosting requests.
    Github,
}

impl RouteDecision {
    /// Parses a raw classifier reply. Trims and lowercases first; anything
    /// outside the known set takes the fallback arm to `Chat`.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "github" => Self::Github,
            "chat" => Self::Chat,
            _ => Self::Chat,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Chat => "chat",
            Self::Github => "github",
        }
    }

    /// Every decision, for enumerating labels at graph construction.
    pub fn all() -> [RouteDecision; 2] {
        [Self::Chat, Self::Github]
    }
}
