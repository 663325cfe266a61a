use std::sync::Arc;

use storage::repository::Storage;

use crate::Clock;
use crate::config::QuizConfig;
use crate::error::AppServicesError;
use crate::quiz::QuizLoopService;
use crate::skill_stats_service::SkillStatsService;

/// Assembles app-facing services around one shared stats store.
#[derive(Clone)]
pub struct AppServices {
    clock: Clock,
    seed: Option<u64>,
    stats: Arc<SkillStatsService>,
}

impl AppServices {
    /// Build services backed by `SQLite` storage.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage initialization fails.
    pub async fn new_sqlite(db_url: &str, clock: Clock) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        Ok(Self::from_storage(&storage, clock, None).await)
    }

    /// Build services from `QUIZ_DB_URL` and `QUIZ_SEED`.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError::Config` if the environment holds an invalid
    /// value, or `AppServicesError::Sqlite` if storage initialization fails.
    pub async fn from_env(clock: Clock) -> Result<Self, AppServicesError> {
        let config = QuizConfig::from_env()?;
        Self::from_config(&config, clock).await
    }

    /// Build services from an explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage initialization fails.
    pub async fn from_config(config: &QuizConfig, clock: Clock) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(&config.db_url).await?;
        Ok(Self::from_storage(&storage, clock, config.seed).await)
    }

    /// Build services backed by process memory only.
    pub async fn in_memory(clock: Clock) -> Self {
        Self::from_storage(&Storage::in_memory(), clock, None).await
    }

    async fn from_storage(storage: &Storage, clock: Clock, seed: Option<u64>) -> Self {
        let stats = Arc::new(SkillStatsService::load(Arc::clone(&storage.progress)).await);
        Self { clock, seed, stats }
    }

    #[must_use]
    pub fn stats(&self) -> Arc<SkillStatsService> {
        Arc::clone(&self.stats)
    }

    /// A fresh quiz state machine in `Setup`, sharing this instance's stats.
    #[must_use]
    pub fn quiz_loop(&self) -> QuizLoopService {
        let service = QuizLoopService::new(self.clock, self.stats());
        match self.seed {
            Some(seed) => service.with_seed(seed),
            None => service,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SEED_VAR;
    use crate::error::ConfigError;
    use quiz_core::model::{QuestionId, SkillStats, SkillType};
    use quiz_core::time::fixed_clock;

    #[tokio::test]
    async fn quiz_loops_share_stats() {
        let services = AppServices::in_memory(fixed_clock()).await;

        let mut first = services.quiz_loop();
        first.start(1, 1, 10).await.unwrap();
        first.submit_answer(QuestionId::new(0), "").await.unwrap();

        let second = services.quiz_loop();
        assert_eq!(
            second.stats().get(SkillType::Square).await,
            SkillStats::new(0, 1)
        );
    }

    #[tokio::test]
    async fn sqlite_services_persist_across_instances() {
        let url = "sqlite:file:memdb_app_services?mode=memory&cache=shared";
        let services = AppServices::new_sqlite(url, fixed_clock()).await.unwrap();
        services.stats().record_outcome(SkillType::Cube, true).await;

        let reopened = AppServices::new_sqlite(url, fixed_clock()).await.unwrap();
        assert_eq!(
            reopened.stats().get(SkillType::Cube).await,
            SkillStats::new(1, 0)
        );
        drop(services);
    }

    #[tokio::test]
    async fn configured_seed_makes_quizzes_repeatable() {
        let config = QuizConfig {
            db_url: "sqlite:file:memdb_app_config?mode=memory&cache=shared".into(),
            seed: Some(99),
        };
        let services = AppServices::from_config(&config, fixed_clock()).await.unwrap();

        let mut first = services.quiz_loop();
        let mut second = services.quiz_loop();
        let a = first.start(8, 1, 20).await.unwrap().questions().to_vec();
        let b = second.start(8, 1, 20).await.unwrap().questions().to_vec();
        assert_eq!(a, b);
    }

    #[test]
    fn invalid_seed_is_a_config_error() {
        let err = QuizConfig::from_lookup(|var| (var == SEED_VAR).then(|| "soon".to_string()))
            .map_err(AppServicesError::from)
            .unwrap_err();
        assert!(matches!(
            err,
            AppServicesError::Config(ConfigError::InvalidValue { var: SEED_VAR, .. })
        ));
    }
}
