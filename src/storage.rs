//! Saved-state storage.
//!
//! The app treats state restoration as an external collaborator with
//! plain get/set semantics on named keys: write a flag when it changes,
//! read it back on startup. `JsonFileStore` is the production
//! implementation (one JSON object on disk); `MemoryStore` backs tests.

use color_eyre::{eyre::WrapErr, Result};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Errors surfaced by a state store.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("failed to access state file: {0}")]
    Io(#[from] std::io::Error),
    #[error("state file is not valid JSON: {0}")]
    Encoding(#[from] serde_json::Error),
}

/// A key-value store for UI state that should survive a restart.
pub trait StateStore {
    /// Read the value previously written under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-memory store. State lasts as long as the store does; dropping it
/// models process death without restoration.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StateStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// File-backed store holding all keys in a single JSON object.
///
/// The file is read once on open and rewritten in full on every set;
/// saved-state writes are rare (one per user toggle) so there is no
/// batching.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    values: HashMap<String, String>,
}

impl JsonFileStore {
    /// Open the store at `path`, loading existing values. A missing file
    /// is an empty store, not an error.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let path = path.into();
        let values = if path.exists() {
            let json = fs::read_to_string(&path)?;
            serde_json::from_str(&json)?
        } else {
            HashMap::new()
        };
        Ok(Self { path, values })
    }

    /// Delete all saved state, on disk and in memory.
    pub fn clear(&mut self) -> Result<(), StorageError> {
        self.values.clear();
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(&self.values)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

impl StateStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.values.insert(key.to_string(), value.to_string());
        self.flush()
    }
}

/// Default location of the state file, under the platform data directory.
pub fn default_state_path() -> Result<PathBuf> {
    let data_dir = dirs::data_dir()
        .ok_or_else(|| color_eyre::eyre::eyre!("could not determine data directory"))?
        .join("greetdeck");
    if !data_dir.exists() {
        fs::create_dir_all(&data_dir).wrap_err("Failed to create data directory")?;
    }
    Ok(data_dir.join("state.json"))
}
