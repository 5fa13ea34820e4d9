//! Serializer for checkpoint records (record <-> bytes).
//!
//! Used by persistent Checkpointer implementations. `MemorySaver` stores
//! `Checkpoint<S>` values directly and does not use a Serializer.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::memory::checkpoint::Checkpoint;
use crate::memory::checkpointer::CheckpointError;

/// Serializes and deserializes checkpoint records for storage.
pub trait Serializer<S>: Send + Sync
where
    S: Clone + Send + Sync + 'static,
{
    fn serialize(&self, checkpoint: &Checkpoint<S>) -> Result<Vec<u8>, CheckpointError>;
    fn deserialize(&self, bytes: &[u8]) -> Result<Checkpoint<S>, CheckpointError>;
}

/// JSON-based serializer. Requires `S: Serialize + DeserializeOwned`.
///
/// The on-disk record is a lossless round-trip of the full message sequence
/// (role + content, in order) plus the optional summary.
pub struct JsonSerializer;

impl<S> Serializer<S> for JsonSerializer
where
    S: Clone + Send + Sync + 'static + Serialize + DeserializeOwned,
{
    fn serialize(&self, checkpoint: &Checkpoint<S>) -> Result<Vec<u8>, CheckpointError> {
        serde_json::to_vec(checkpoint).map_err(|e| CheckpointError::Serialization(e.to_string()))
    }

    fn deserialize(&self, bytes: &[u8]) -> Result<Checkpoint<S>, CheckpointError> {
        serde_json::from_slice(bytes).map_err(|e| CheckpointError::Serialization(e.to_string()))
    }
}
