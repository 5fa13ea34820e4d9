//! Conversation summarization for exit-time checkpoints.

use crate::error::AgentError;
use crate::llm::LlmClient;
use crate::message::Message;

/// Produces a 2–3 sentence summary of the conversation via the LLM.
///
/// Used by the session driver when saving the final checkpoint; callers
/// should treat a failure as "no summary", not as a reason to skip the save.
pub async fn summarize_conversation(
    llm: &dyn LlmClient,
    messages: &[Message],
) -> Result<String, AgentError> {
    let conversation: Vec<&str> = messages.iter().map(|m| m.content()).collect();
    let prompt = format!(
        "You are a helpful assistant. Summarize the following conversation in a concise manner:\n{}\nSummarize in 2-3 sentences.",
        conversation.join("\n")
    );
    llm.invoke(&[Message::User(prompt)]).await
}
