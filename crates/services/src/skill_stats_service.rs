use std::sync::Arc;

use tokio::sync::Mutex;

use quiz_core::model::{SkillProgress, SkillStats, SkillType};
use storage::repository::{SkillProgressRepository, StorageError};

use crate::error::PersistenceWarning;

/// Result of recording one graded answer against the shared stats.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedOutcome {
    pub stats: SkillStats,
    pub warning: Option<PersistenceWarning>,
}

/// Process-wide per-skill success/failure counters, backed by a repository.
///
/// Loaded once, then every mutation is applied in memory first and saved right
/// after. The mutex covers both steps, so concurrent callers cannot interleave
/// their read-modify-write or save an older snapshot over a newer one.
pub struct SkillStatsService {
    repo: Arc<dyn SkillProgressRepository>,
    progress: Mutex<SkillProgress>,
}

impl SkillStatsService {
    /// Load persisted progress, falling back to all-zero stats.
    ///
    /// Absent data is the normal first-run case. Unreadable or malformed data is
    /// logged and discarded; loading never fails.
    pub async fn load(repo: Arc<dyn SkillProgressRepository>) -> Self {
        let progress = match repo.load_progress().await {
            Ok(Some(progress)) => progress,
            Ok(None) => SkillProgress::default(),
            Err(err) => {
                tracing::warn!(error = %err, "discarding unreadable skill progress");
                SkillProgress::default()
            }
        };

        Self {
            repo,
            progress: Mutex::new(progress),
        }
    }

    /// Current stats for one skill.
    pub async fn get(&self, skill: SkillType) -> SkillStats {
        self.progress.lock().await.get(skill)
    }

    /// Copy of the stats for every skill.
    pub async fn snapshot(&self) -> SkillProgress {
        *self.progress.lock().await
    }

    /// Increment the success or failure counter for `skill` and persist.
    ///
    /// A failed save does not roll back the in-memory update; it is logged and
    /// reported through `RecordedOutcome::warning`.
    pub async fn record_outcome(&self, skill: SkillType, correct: bool) -> RecordedOutcome {
        let mut progress = self.progress.lock().await;
        let stats = progress.record(skill, correct);

        let warning = match self.repo.save_progress(&progress).await {
            Ok(()) => None,
            Err(err) => {
                tracing::warn!(error = %err, ?skill, "failed to persist skill progress");
                Some(PersistenceWarning::from(&err))
            }
        };

        RecordedOutcome { stats, warning }
    }

    /// Save the current stats again, e.g. after an earlier save failed.
    ///
    /// # Errors
    ///
    /// Returns the `StorageError` from the repository.
    pub async fn flush(&self) -> Result<(), StorageError> {
        let progress = self.progress.lock().await;
        self.repo.save_progress(&progress).await
    }
}
