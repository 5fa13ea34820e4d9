//! Checkpointer trait and persistence errors.

use async_trait::async_trait;
use thiserror::Error;

use crate::memory::checkpoint::Checkpoint;

/// Error from checkpoint persistence.
///
/// A missing thread is not an error: `load` returns `Ok(None)` for it. Any
/// other read failure, and every write failure, surfaces here; callers must
/// see a failed save.
#[derive(Debug, Error)]
pub enum CheckpointError {
    /// Underlying storage I/O failed (other than a missing record).
    #[error("checkpoint io error: {0}")]
    Io(String),

    /// State could not be encoded or decoded.
    #[error("checkpoint serialization error: {0}")]
    Serialization(String),

    /// Thread id is empty or not usable as a storage key.
    #[error("invalid thread id: {0:?}")]
    InvalidThreadId(String),
}

/// Persists one checkpoint per thread id.
///
/// `load` never errors for an absent thread; callers fall back to an empty
/// state. `save` overwrites the thread's prior record and propagates every
/// failure.
///
/// **Interaction**: used by `CompiledStateGraph` for per-turn saves and by
/// the session driver for load-at-start and summarized save-at-exit.
#[async_trait]
pub trait Checkpointer<S>: Send + Sync
where
    S: Clone + Send + Sync + 'static,
{
    /// Reads the persisted checkpoint for `thread_id`; `Ok(None)` if none exists.
    async fn load(&self, thread_id: &str) -> Result<Option<Checkpoint<S>>, CheckpointError>;

    /// Persists `checkpoint` for `thread_id`, overwriting any prior record.
    async fn save(&self, thread_id: &str, checkpoint: &Checkpoint<S>)
        -> Result<(), CheckpointError>;
}
