//! End-to-end workflow tests: routed dispatch, failure resilience, and
//! checkpointed sessions against the real wiring from `build_workflow`.

use std::sync::Arc;

use routegraph::{
    build_workflow, ChatState, Checkpoint, Checkpointer, FileSaver, MemorySaver, MockCodeHost,
    MockLlm, RunnableConfig,
};

/// Thread "abc" has no checkpoint; the user asks a general question; the
/// router picks chat; one assistant message is appended; the saved
/// checkpoint round-trips both messages in order.
#[tokio::test]
async fn chat_turn_roundtrips_through_file_checkpoint() {
    let dir = tempfile::tempdir().unwrap();
    let saver = Arc::new(FileSaver::new(dir.path().join("checkpoints")));

    // Fresh thread: nothing persisted yet.
    let loaded: Option<Checkpoint<ChatState>> = saver.load("abc").await.unwrap();
    assert!(loaded.is_none());

    let llm = MockLlm::scripted([
        Ok("chat".to_string()),
        Ok("No idea, I can't see outside.".to_string()),
    ]);
    let graph = build_workflow(
        Arc::new(llm),
        Arc::new(MockCodeHost::new()),
        Some(saver.clone()),
    )
    .unwrap();

    let state = ChatState::with_user_message("What's the weather like?");
    let config = RunnableConfig {
        thread_id: Some("abc".into()),
    };
    let out = graph.invoke(state, Some(config)).await.unwrap();
    assert_eq!(out.messages.len(), 2);

    let reloaded: Checkpoint<ChatState> = saver.load("abc").await.unwrap().unwrap();
    assert_eq!(reloaded.state.messages, out.messages);
}

/// "list my repositories" routes to the repository agent, the listing call
/// fails with HTTP 503, and the turn still completes with exactly one
/// error-marker assistant message.
#[tokio::test]
async fn repo_listing_outage_completes_turn_with_error_message() {
    let llm = MockLlm::scripted([
        Ok("github".to_string()),     // route classification
        Ok("list_repos".to_string()), // intent classification
    ]);
    let host = MockCodeHost::new().with_repos_failure(503, "service unavailable");
    let graph = build_workflow(Arc::new(llm), Arc::new(host), None).unwrap();

    let out = graph
        .invoke(ChatState::with_user_message("list my repositories"), None)
        .await
        .unwrap();
    assert_eq!(out.messages.len(), 2);
    let last = out.messages.last().unwrap();
    assert!(last.is_assistant());
    assert!(last.content().contains("Error processing repository request"));
}

/// Total outage: every LLM call fails, so routing falls back to the chat
/// branch and the chat agent appends an error-marker message. No error
/// escapes the invoke.
#[tokio::test]
async fn total_llm_outage_still_produces_a_reply() {
    let graph = build_workflow(
        Arc::new(MockLlm::failing()),
        Arc::new(MockCodeHost::new()),
        None,
    )
    .unwrap();

    let out = graph
        .invoke(ChatState::with_user_message("hello?"), None)
        .await
        .unwrap();
    assert_eq!(out.messages.len(), 2);
    let last = out.messages.last().unwrap();
    assert!(last.is_assistant());
    assert!(last.content().contains("Failed to generate chat response"));
}

/// An out-of-set classifier reply routes to the default chat branch instead
/// of failing the turn.
#[tokio::test]
async fn out_of_set_route_label_takes_chat_branch() {
    let llm = MockLlm::scripted([
        Ok("definitely-github-I-think".to_string()),
        Ok("Hi!".to_string()),
    ]);
    let graph = build_workflow(Arc::new(llm), Arc::new(MockCodeHost::new()), None).unwrap();

    let out = graph
        .invoke(ChatState::with_user_message("hey"), None)
        .await
        .unwrap();
    assert_eq!(out.messages.last().unwrap().content(), "Hi!");
}

/// Multi-turn conversation against one MemorySaver: each turn overwrites the
/// thread's checkpoint with the grown, append-only log.
#[tokio::test]
async fn multi_turn_checkpoint_grows_append_only() {
    let saver = Arc::new(MemorySaver::<ChatState>::new());
    let llm = MockLlm::scripted([
        Ok("chat".to_string()),
        Ok("first reply".to_string()),
        Ok("chat".to_string()),
        Ok("second reply".to_string()),
    ]);
    let graph = build_workflow(
        Arc::new(llm),
        Arc::new(MockCodeHost::new()),
        Some(saver.clone()),
    )
    .unwrap();
    let config = RunnableConfig {
        thread_id: Some("t-multi".into()),
    };

    let mut state = ChatState::with_user_message("one");
    state = graph.invoke(state, Some(config.clone())).await.unwrap();
    let after_first = state.messages.clone();
    assert_eq!(after_first.len(), 2);

    state.push_user("two");
    state = graph.invoke(state, Some(config)).await.unwrap();
    assert_eq!(state.messages.len(), 4);
    assert_eq!(state.messages[..2], after_first[..]);

    let saved = saver.load("t-multi").await.unwrap().unwrap();
    assert_eq!(saved.state.messages, state.messages);
}
