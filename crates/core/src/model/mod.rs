mod ids;
mod question;
mod settings;
mod skill;

pub use ids::{ParseIdError, QuestionId};

pub use question::{GradeResult, Question, QuestionError, parse_answer};
pub use settings::{QuizSettings, QuizSettingsError};
pub use skill::{SkillProgress, SkillStats, SkillType};
