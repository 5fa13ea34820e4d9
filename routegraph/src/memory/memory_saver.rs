//! In-memory checkpointer for dev and tests.

use async_trait::async_trait;
use dashmap::DashMap;

use crate::memory::checkpoint::Checkpoint;
use crate::memory::checkpointer::{CheckpointError, Checkpointer};

/// Checkpointer backed by a concurrent map. Nothing survives the process;
/// use `FileSaver` for sessions that resume across runs.
pub struct MemorySaver<S> {
    checkpoints: DashMap<String, Checkpoint<S>>,
}

impl<S> MemorySaver<S> {
    pub fn new() -> Self {
        Self {
            checkpoints: DashMap::new(),
        }
    }
}

impl<S> Default for MemorySaver<S> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<S> Checkpointer<S> for MemorySaver<S>
where
    S: Clone + Send + Sync + 'static,
{
    async fn load(&self, thread_id: &str) -> Result<Option<Checkpoint<S>>, CheckpointError> {
        Ok(self.checkpoints.get(thread_id).map(|c| c.value().clone()))
    }

    async fn save(
        &self,
        thread_id: &str,
        checkpoint: &Checkpoint<S>,
    ) -> Result<(), CheckpointError> {
        if thread_id.is_empty() {
            return Err(CheckpointError::InvalidThreadId(thread_id.to_string()));
        }
        self.checkpoints
            .insert(thread_id.to_string(), checkpoint.clone());
        Ok(())
    }
}
