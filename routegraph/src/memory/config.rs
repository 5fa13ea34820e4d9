//! Invoke config: thread identity for checkpointing.

/// Config for a single invoke. When the graph was compiled with a
/// checkpointer, a set `thread_id` makes the run persist its final state;
/// `None` (or passing no config) skips persistence.
///
/// **Interaction**: passed to `CompiledStateGraph::invoke(state, config)`.
#[derive(Debug, Clone, Default)]
pub struct RunnableConfig {
    /// Unique id for this conversation/thread. Opaque; caller-supplied or generated.
    pub thread_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    /// **Scenario**: RunnableConfig::default() has no thread id.
    #[test]
    fn runnable_config_default_no_thread() {
        assert!(RunnableConfig::default().thread_id.is_none());
    }
}
