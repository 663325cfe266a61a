#![forbid(unsafe_code)]

pub mod app_services;
pub mod config;
pub mod error;
pub mod quiz;
pub mod skill_stats_service;

pub use quiz_core::Clock;

pub use app_services::AppServices;
pub use config::QuizConfig;
pub use error::{AppServicesError, ConfigError, PersistenceWarning, QuizError};
pub use quiz::{QuizLoopService, QuizPhase, QuizProgress, QuizSession, SubmitOutcome};
pub use skill_stats_service::{RecordedOutcome, SkillStatsService};
