//! File-backed checkpointer: one JSON file per thread id.
//!
//! Layout: `<dir>/<thread_id>.json`. The directory is created on first save.
//! A missing file on load is not an error (fresh thread); any other I/O
//! failure, and every save failure, propagates.
//!
//! Saves are an atomic overwrite (write temp file, then rename) and saves to
//! the same thread id are serialized through an in-process lock map, so the
//! cross-process last-writer-wins race is bounded to whole records.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::sync::Mutex;
use tracing::debug;

use crate::memory::checkpoint::Checkpoint;
use crate::memory::checkpointer::{CheckpointError, Checkpointer};
use crate::memory::serializer::{JsonSerializer, Serializer};

/// Checkpointer persisting each thread's record as a JSON file.
pub struct FileSaver {
    dir: PathBuf,
    /// Per-thread write locks; entries live for the saver's lifetime.
    locks: DashMap<String, Arc<Mutex<()>>>,
}

impl FileSaver {
    /// Creates a saver rooted at `dir`. The directory itself is only created
    /// when the first checkpoint is saved.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            locks: DashMap::new(),
        }
    }

    fn path_for(&self, thread_id: &str) -> Result<PathBuf, CheckpointError> {
        validate_thread_id(thread_id)?;
        Ok(self.dir.join(format!("{}.json", thread_id)))
    }

    fn lock_for(&self, thread_id: &str) -> Arc<Mutex<()>> {
        self.locks
            .entry(thread_id.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }
}

/// Thread ids are opaque but become file names: reject anything empty or
/// containing a path separator rather than writing outside the directory.
fn validate_thread_id(thread_id: &str) -> Result<(), CheckpointError> {
    if thread_id.is_empty()
        || thread_id.contains('/')
        || thread_id.contains('\\')
        || thread_id.contains("..")
    {
        return Err(CheckpointError::InvalidThreadId(thread_id.to_string()));
    }
    Ok(())
}

#[async_trait]
impl<S> Checkpointer<S> for FileSaver
where
    S: Clone + Send + Sync + 'static + Serialize + DeserializeOwned,
{
    async fn load(&self, thread_id: &str) -> Result<Option<Checkpoint<S>>, CheckpointError> {
        let path = self.path_for(thread_id)?;
        let bytes = match tokio::fs::read(&path).await {
            Ok(b) => b,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(CheckpointError::Io(e.to_string())),
        };
        let checkpoint = JsonSerializer.deserialize(&bytes)?;
        Ok(Some(checkpoint))
    }

    async fn save(
        &self,
        thread_id: &str,
        checkpoint: &Checkpoint<S>,
    ) -> Result<(), CheckpointError> {
        let path = self.path_for(thread_id)?;
        let lock = self.lock_for(thread_id);
        let _guard = lock.lock().await;

        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| CheckpointError::Io(e.to_string()))?;

        let bytes = JsonSerializer.serialize(checkpoint)?;
        let tmp = tmp_path(&path);
        tokio::fs::write(&tmp, &bytes)
            .await
            .map_err(|e| CheckpointError::Io(e.to_string()))?;
        tokio::fs::rename(&tmp, &path)
            .await
            .map_err(|e| CheckpointError::Io(e.to_string()))?;
        debug!(thread_id = %thread_id, path = %path.display(), "checkpoint written");
        Ok(())
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut os = path.as_os_str().to_owned();
    os.push(".tmp");
    PathBuf::from(os)
}
