use async_trait::async_trait;
use chrono::Utc;
use quiz_core::model::SkillProgress;
use sqlx::Row;

use super::SqliteRepository;
use crate::mapping::{PROGRESS_KEY, decode_progress, encode_progress};
use crate::repository::{KeyValueStore, SkillProgressRepository, StorageError};

#[async_trait]
impl KeyValueStore for SqliteRepository {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let row = sqlx::query("SELECT value FROM kv_store WHERE key = ?1")
            .bind(key)
            .fetch_optional(&self.pool)
            .await
            .map_err(|err| StorageError::Connection(err.to_string()))?;

        row.map(|row| {
            row.try_get::<String, _>("value")
                .map_err(|err| StorageError::Serialization(err.to_string()))
        })
        .transpose()
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        sqlx::query(
            r"
            INSERT INTO kv_store (key, value, updated_at)
            VALUES (?1, ?2, ?3)
            ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at
            ",
        )
        .bind(key)
        .bind(value)
        .bind(Utc::now())
        .execute(&self.pool)
        .await
        .map_err(|err| StorageError::Connection(err.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl SkillProgressRepository for SqliteRepository {
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
