//! # Memory: checkpointed conversation state
//!
//! Per-thread state snapshots so a conversation can resume across process
//! runs. One record per `thread_id`, overwritten on each save, never deleted
//! here (retention is an external concern).
//!
//! ## Checkpointer implementations
//!
//! | Type          | Persistence          | Use case    |
//! |---------------|----------------------|-------------|
//! | [`MemorySaver`] | In-memory            | Dev, tests  |
//! | [`FileSaver`]   | One JSON file/thread | CLI sessions|
//!
//! Use with [`StateGraph::compile_with_checkpointer`](crate::graph::StateGraph::compile_with_checkpointer)
//! for per-turn saves, or call [`Checkpointer::save`] directly for the
//! exit-time save with a conversation summary attached.
//! [`JsonSerializer`] is required by `FileSaver` (state must be
//! `Serialize + DeserializeOwned`).

mod checkpoint;
mod checkpointer;
mod config;
mod file_saver;
mod memory_saver;
mod serializer;

pub use checkpoint::Checkpoint;
pub use checkpointer::{CheckpointError, Checkpointer};
pub use config::RunnableConfig;
pub use file_saver::FileSaver;
pub use memory_saver::MemorySaver;
pub use serializer::{JsonSerializer, Serializer};
