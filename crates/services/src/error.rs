//! Shared error types for the services crate.

use std::fmt;

use thiserror::Error;

use quiz_core::model::{QuestionError, QuestionId, QuizSettingsError};
use storage::repository::StorageError;
use storage::sqlite::SqliteInitError;

/// Errors emitted by the quiz state machine.
///
/// None of these are fatal: the session is left exactly as it was and the
/// caller may retry with a valid action.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizError {
    #[error("invalid quiz parameters: {0}")]
    InvalidParameters(#[from] QuizSettingsError),
    #[error("no quiz is active")]
    NotActive,
    #[error("a quiz is already running; restart it first")]
    SessionInProgress,
    #[error("unknown question {0}")]
    UnknownQuestion(QuestionId),
    #[error("question {0} has already been answered")]
    AlreadyAnswered(QuestionId),
}

impl From<QuestionError> for QuizError {
    fn from(err: QuestionError) -> Self {
        match err {
            QuestionError::AlreadyAnswered(id) => QuizError::AlreadyAnswered(id),
        }
    }
}

/// A persistence failure that did not stop the quiz.
///
/// The in-memory stats are already updated; only durability is in question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistenceWarning {
    message: String,
}

impl PersistenceWarning {
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<&StorageError> for PersistenceWarning {
    fn from(err: &StorageError) -> Self {
        Self {
            message: format!("progress could not be saved: {err}"),
        }
    }
}

impl fmt::Display for PersistenceWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Sqlite(#[from] SqliteInitError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors emitted while reading configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("invalid {var} value: {raw}")]
    InvalidValue { var: &'static str, raw: String },
}
