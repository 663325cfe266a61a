use chrono::{DateTime, Utc};
use rand::Rng;
use std::fmt;

use quiz_core::model::{
    GradeResult, Question, QuestionId, QuizSettings, SkillProgress, SkillType,
};
use quiz_core::{QuestionGenerator, ReviewScheduler};

use super::progress::QuizProgress;
use crate::error::QuizError;

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// In-memory quiz: a fixed, ordered set of questions plus derived score.
///
/// Skills are assigned round-robin by position. `score` and `is_complete` are
/// recomputed from the questions after every grading event.
#[derive(Clone, PartialEq)]
pub struct QuizSession {
    questions: Vec<Question>,
    scheduler: ReviewScheduler,
    started_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
    score: usize,
    is_complete: bool,
}

impl QuizSession {
    /// Generate `settings.question_count()` questions.
    ///
    /// Each question snapshots the current stats for its skill and gets its
    /// first review date from that snapshot.
    pub fn generate<R: Rng>(
        settings: &QuizSettings,
        stats: &SkillProgress,
        generator: &QuestionGenerator,
        scheduler: ReviewScheduler,
        rng: &mut R,
        now: DateTime<Utc>,
    ) -> Self {
        let count = settings.question_count();
        let questions = (0..count)
            .map(|index| {
                let skill = SkillType::for_index(index as usize);
                let generated =
                    generator.generate(rng, skill, settings.min_range(), settings.max_range());
                Question::new(
                    QuestionId::new(index),
                    skill,
                    generated,
                    stats.get(skill),
                    &scheduler,
                    now,
                )
            })
            .collect();

        Self::from_questions(questions, scheduler, now)
    }

    fn from_questions(
        questions: Vec<Question>,
        scheduler: ReviewScheduler,
        started_at: DateTime<Utc>,
    ) -> Self {
        let mut session = Self {
            questions,
            scheduler,
            started_at,
            completed_at: None,
            score: 0,
            is_complete: false,
        };
        session.recompute(started_at);
        session
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn question(&self, id: QuestionId) -> Option<&Question> {
        self.questions.iter().find(|q| q.id() == id)
    }

    #[must_use]
    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    /// Number of questions graded `Correct`.
    #[must_use]
    pub fn score(&self) -> usize {
        self.score
    }

    /// True once every question has been graded.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.is_complete
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    #[must_use]
    pub fn answered_count(&self) -> usize {
        self.questions.iter().filter(|q| q.is_answered()).count()
    }

    #[must_use]
    pub fn progress(&self) -> QuizProgress {
        QuizProgress::new(self.total_questions(), self.answered_count(), self.score)
    }

    /// Grade the answer for one question.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::UnknownQuestion` if `id` is not in this session and
    /// `QuizError::AlreadyAnswered` if it was graded before. The session is
    /// unchanged in both cases.
    pub fn grade(
        &mut self,
        id: QuestionId,
        raw_answer: &str,
        answered_at: DateTime<Utc>,
    ) -> Result<&Question, QuizError> {
        let index = self
            .questions
            .iter()
            .position(|q| q.id() == id)
            .ok_or(QuizError::UnknownQuestion(id))?;

        self.questions[index].grade(raw_answer, &self.scheduler, answered_at)?;
        self.recompute(answered_at);

        Ok(&self.questions[index])
    }

    fn recompute(&mut self, now: DateTime<Utc>) {
        self.score = self
            .questions
            .iter()
            .filter(|q| q.grade_result() == GradeResult::Correct)
            .count();
        self.is_complete = self.questions.iter().all(Question::is_answered);
        if self.is_complete && self.completed_at.is_none() {
            self.completed_at = Some(now);
        }
    }
}

impl fmt::Debug for QuizSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizSession")
            .field("questions_len", &self.questions.len())
            .field("score", &self.score)
            .field("is_complete", &self.is_complete)
            .field("started_at", &self.started_at)
            .field("completed_at", &self.completed_at)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
