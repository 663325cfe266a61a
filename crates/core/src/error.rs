use thiserror::Error;

use crate::model::{QuestionError, QuizSettingsError};

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Settings(#[from] QuizSettingsError),
    #[error(transparent)]
    Question(#[from] QuestionError),
}
