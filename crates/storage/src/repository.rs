use async_trait::async_trait;
use quiz_core::model::SkillProgress;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

use crate::mapping::{PROGRESS_KEY, decode_progress, encode_progress};

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Opaque string key-value store, the only persistence primitive the quiz needs.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Fetch the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read.
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the value cannot be written.
    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Repository contract for the per-skill progress document.
#[async_trait]
pub trait SkillProgressRepository: Send + Sync {
    /// Load persisted progress. `Ok(None)` means nothing has been saved yet.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Serialization` for a malformed document, or other
    /// storage errors if the backend fails.
    async fn load_progress(&self) -> Result<Option<SkillProgress>, StorageError>;

    /// Persist progress, replacing the previous document.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the document cannot be stored.
    async fn save_progress(&self, progress: &SkillProgress) -> Result<(), StorageError>;
}

/// Simple in-memory repository implementation for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Arc::new(Mutex::new(HashMap::new())),
        }
    }
}

#[async_trait]
impl KeyValueStore for InMemoryRepository {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let guard = self
            .entries
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut guard = self
            .entries
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[async_trait]
impl SkillProgressRepository for InMemoryRepository {
    async fn load_progress(&self) -> Result<Option<SkillProgress>, StorageError> {
        self.get(PROGRESS_KEY)
            .await?
            .map(|raw| decode_progress(&raw))
            .transpose()
    }

    async fn save_progress(&self, progress: &SkillProgress) -> Result<(), StorageError> {
        let raw = encode_progress(progress)?;
        self.set(PROGRESS_KEY, &raw).await
    }
}

/// Persistence handles behind trait objects for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub kv: Arc<dyn KeyValueStore>,
    pub progress: Arc<dyn SkillProgressRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        let repo = InMemoryRepository::new();
        let kv: Arc<dyn KeyValueStore> = Arc::new(repo.clone());
        let progress: Arc<dyn SkillProgressRepository> = Arc::new(repo);
        Self { kv, progress }
    }
}
