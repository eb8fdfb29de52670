//! Identity stores
//!
//! File-backed durable storage for the fingerprint ID, plus an in-memory
//! variant for tests and storage-less contexts.

use std::path::PathBuf;
use std::sync::Mutex;

use serde_json::json;

use crate::{Error, Result};
use super::traits::IdentityStore;

/// Well-known key the fingerprint ID is persisted under
pub const STORAGE_KEY: &str = "device_fingerprint_id";

/// Identity store backed by a small JSON state file
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Create a store over the given state file path
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }
}

impl IdentityStore for FileStore {
    fn load(&self) -> Result<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&self.path)
            .map_err(|e| Error::storage(format!("failed to read {}: {}", self.path.display(), e)))?;

        let state: serde_json::Value = serde_json::from_str(&content)
            .map_err(|e| Error::storage(format!("malformed state file {}: {}", self.path.display(), e)))?;

        Ok(state
            .get(STORAGE_KEY)
            .and_then(|v| v.as_str())
            .map(str::to_string))
    }

    fn save(&self, id: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    Error::storage(format!("failed to create {}: {}", parent.display(), e))
                })?;
            }
        }

        let state = json!({ STORAGE_KEY: id });
        std::fs::write(&self.path, state.to_string())
            .map_err(|e| Error::storage(format!("failed to write {}: {}", self.path.display(), e)))
    }
}

/// In-memory identity store
#[derive(Default)]
pub struct MemoryStore {
    slot: Mutex<Option<String>>,
}

impl MemoryStore {
    /// Create an empty in-memory store
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdentityStore for MemoryStore {
    fn load(&self) -> Result<Option<String>> {
        let slot = self
            .slot
            .lock()
            .map_err(|_| Error::storage("identity slot poisoned"))?;
        Ok(slot.clone())
    }

    fn save(&self, id: &str) -> Result<()> {
        let mut slot = self
            .slot
            .lock()
            .map_err(|_| Error::storage("identity slot poisoned"))?;
        *slot = Some(id.to_string());
        Ok(())
    }
}
