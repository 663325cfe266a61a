use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;

use crate::generator::GeneratedQuestion;
use crate::model::ids::QuestionId;
use crate::model::skill::{SkillStats, SkillType};
use crate::scheduler::ReviewScheduler;
use crate::time::Clock;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QuestionError {
    #[error("question {0} has already been answered")]
    AlreadyAnswered(QuestionId),
}

//
// ─── GRADE ─────────────────────────────────────────────────────────────────────
//

/// Grading state of a question. `Ungraded` is distinct from a wrong answer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum GradeResult {
    #[default]
    Ungraded,
    Correct,
    Incorrect,
}

impl GradeResult {
    #[must_use]
    pub fn is_graded(self) -> bool {
        !matches!(self, GradeResult::Ungraded)
    }

    #[must_use]
    pub fn is_correct(self) -> bool {
        matches!(self, GradeResult::Correct)
    }
}

/// Parses the leading integer of a typed answer.
///
/// Leading whitespace and one optional sign are skipped, then the longest run of
/// ASCII digits is read and anything after it is ignored, so `"49abc"` and
/// `"49.9"` both read as `49`. No digits, or a run that overflows `i64`, yields
/// `None`.
#[must_use]
pub fn parse_answer(raw: &str) -> Option<i64> {
    let rest = raw.trim_start();
    let (negative, rest) = match rest.as_bytes().first() {
        Some(b'-') => (true, &rest[1..]),
        Some(b'+') => (false, &rest[1..]),
        _ => (false, rest),
    };

    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }

    let magnitude: i64 = rest[..digits_len].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// One quiz item.
///
/// `success_count` / `failure_count` start as a snapshot of the skill's stats when
/// the quiz is generated and then advance locally as this question is graded;
/// they are never re-read from the shared store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    id: QuestionId,
    skill: SkillType,
    display_number: i64,
    correct_answer: i64,
    success_count: u32,
    failure_count: u32,
    user_answer: String,
    grade: GradeResult,
    next_review: DateTime<Utc>,
    answered_at: Option<DateTime<Utc>>,
}

impl Question {
    /// Creates an ungraded question with its first review date computed from `stats`.
    #[must_use]
    pub fn new(
        id: QuestionId,
        skill: SkillType,
        generated: GeneratedQuestion,
        stats: SkillStats,
        scheduler: &ReviewScheduler,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            skill,
            display_number: generated.display_number,
            correct_answer: generated.correct_answer,
            success_count: stats.success_count,
            failure_count: stats.failure_count,
            user_answer: String::new(),
            grade: GradeResult::Ungraded,
            next_review: scheduler.next_review_date(
                stats.success_count,
                stats.failure_count,
                now,
            ),
            answered_at: None,
        }
    }

    #[must_use]
    pub fn id(&self) -> QuestionId {
        self.id
    }

    #[must_use]
    pub fn skill(&self) -> SkillType {
        self.skill
    }

    #[must_use]
    pub fn display_number(&self) -> i64 {
        self.display_number
    }

    #[must_use]
    pub fn correct_answer(&self) -> i64 {
        self.correct_answer
    }

    /// Local counters for this question, as a `SkillStats` value.
    #[must_use]
    pub fn stats(&self) -> SkillStats {
        SkillStats::new(self.success_count, self.failure_count)
    }

    #[must_use]
    pub fn user_answer(&self) -> &str {
        &self.user_answer
    }

    #[must_use]
    pub fn grade_result(&self) -> GradeResult {
        self.grade
    }

    #[must_use]
    pub fn is_answered(&self) -> bool {
        self.grade.is_graded()
    }

    #[must_use]
    pub fn next_review(&self) -> DateTime<Utc> {
        self.next_review
    }

    #[must_use]
    pub fn answered_at(&self) -> Option<DateTime<Utc>> {
        self.answered_at
    }

    /// Whether this question's skill is due for another review on `clock`.
    #[must_use]
    pub fn is_due(&self, clock: &Clock) -> bool {
        clock.is_due(self.next_review)
    }

    /// Text shown to the learner.
    #[must_use]
    pub fn prompt(&self) -> String {
        let n = self.display_number;
        match self.skill {
            SkillType::Square => format!("What is {n}²?"),
            SkillType::SquareRoot => format!("What is the square root of {n}?"),
            SkillType::Cube => format!("What is {n}³?"),
            SkillType::CubeRoot => format!("What is the cube root of {n}?"),
        }
    }

    /// Grades `raw` against the correct answer.
    ///
    /// Unparseable input is graded `Incorrect`. On success the local counters
    /// advance by one and `next_review` is recomputed from them.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError::AlreadyAnswered` if the question was graded
    /// before; the question is left untouched.
    pub fn grade(
        &mut self,
        raw: &str,
        scheduler: &ReviewScheduler,
        now: DateTime<Utc>,
    ) -> Result<GradeResult, QuestionError> {
        if self.is_answered() {
            return Err(QuestionError::AlreadyAnswered(self.id));
        }

        let correct = parse_answer(raw) == Some(self.correct_answer);
        let stats = self.stats().record(correct);

        self.user_answer = raw.to_string();
        self.grade = if correct {
            GradeResult::Correct
        } else {
            GradeResult::Incorrect
        };
        self.success_count = stats.success_count;
        self.failure_count = stats.failure_count;
        self.next_review = scheduler.next_review_date(stats.success_count, stats.failure_count, now);
        self.answered_at = Some(now);

        Ok(self.grade)
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
