use std::sync::Arc;

use rand::SeedableRng;
use rand::rngs::StdRng;

use quiz_core::model::{Question, QuestionId, QuizSettings, SkillStats};
use quiz_core::{QuestionGenerator, ReviewScheduler};

use super::session::QuizSession;
use crate::Clock;
use crate::error::{PersistenceWarning, QuizError};
use crate::skill_stats_service::SkillStatsService;

/// Lifecycle of the quiz screen.
#[derive(Debug, Clone, Default)]
pub enum QuizPhase {
    /// No quiz yet; waiting for `start`.
    #[default]
    Setup,
    /// Questions are being answered.
    Active(QuizSession),
    /// Every question has been graded.
    Complete(QuizSession),
}

impl QuizPhase {
    #[must_use]
    pub fn session(&self) -> Option<&QuizSession> {
        match self {
            QuizPhase::Setup => None,
            QuizPhase::Active(session) | QuizPhase::Complete(session) => Some(session),
        }
    }
}

/// Result of submitting one answer.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitOutcome {
    /// The question after grading.
    pub question: Question,
    /// Shared stats for the question's skill after this answer.
    pub stats: SkillStats,
    pub score: usize,
    pub is_complete: bool,
    /// Set when the stats could not be saved.
    pub warning: Option<PersistenceWarning>,
}

/// Drives the quiz state machine: `Setup -> Active -> Complete`, with `restart`
/// returning to `Setup` from either of the latter.
pub struct QuizLoopService {
    clock: Clock,
    stats: Arc<SkillStatsService>,
    generator: QuestionGenerator,
    scheduler: ReviewScheduler,
    rng: StdRng,
    phase: QuizPhase,
}

impl QuizLoopService {
    #[must_use]
    pub fn new(clock: Clock, stats: Arc<SkillStatsService>) -> Self {
        Self {
            clock,
            stats,
            generator: QuestionGenerator::new(),
            scheduler: ReviewScheduler::new(),
            rng: StdRng::from_os_rng(),
            phase: QuizPhase::Setup,
        }
    }

    /// Use a deterministic question stream.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    #[must_use]
    pub fn phase(&self) -> &QuizPhase {
        &self.phase
    }

    /// The running or finished session, if any.
    #[must_use]
    pub fn session(&self) -> Option<&QuizSession> {
        self.phase.session()
    }

    #[must_use]
    pub fn stats(&self) -> Arc<SkillStatsService> {
        Arc::clone(&self.stats)
    }

    /// Validate the parameters and start a quiz.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::InvalidParameters` for out-of-bound values and
    /// `QuizError::SessionInProgress` unless the service is in `Setup`.
    pub async fn start(
        &mut self,
        question_count: u32,
        min_range: i64,
        max_range: i64,
    ) -> Result<&QuizSession, QuizError> {
        let settings = QuizSettings::new(question_count, min_range, max_range)?;
        self.start_with(settings).await
    }

    /// Start a quiz from already-validated settings.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::SessionInProgress` unless the service is in `Setup`.
    pub async fn start_with(&mut self, settings: QuizSettings) -> Result<&QuizSession, QuizError> {
        if !matches!(self.phase, QuizPhase::Setup) {
            return Err(QuizError::SessionInProgress);
        }

        let snapshot = self.stats.snapshot().await;
        let session = QuizSession::generate(
            &settings,
            &snapshot,
            &self.generator,
            self.scheduler,
            &mut self.rng,
            self.clock.now(),
        );
        tracing::info!(
            questions = settings.question_count(),
            min_range = settings.min_range(),
            max_range = settings.max_range(),
            "quiz started"
        );

        self.phase = QuizPhase::Active(session);
        self.session().ok_or(QuizError::NotActive)
    }

    /// Grade an answer, update the shared stats, and advance the phase.
    ///
    /// # Errors
    ///
    /// - `QuizError::NotActive` if no quiz has been started.
    /// - `QuizError::UnknownQuestion` if `id` is not part of the quiz.
    /// - `QuizError::AlreadyAnswered` if the question was graded before; this
    ///   is safe to ignore and changes nothing.
    pub async fn submit_answer(
        &mut self,
        id: QuestionId,
        raw_answer: &str,
    ) -> Result<SubmitOutcome, QuizError> {
        let answered_at = self.clock.now();
        let session = match &mut self.phase {
            QuizPhase::Setup => return Err(QuizError::NotActive),
            QuizPhase::Active(session) | QuizPhase::Complete(session) => session,
        };

        let question = session.grade(id, raw_answer, answered_at)?.clone();
        let score = session.score();
        let is_complete = session.is_complete();
        let correct = question.grade_result().is_correct();
        tracing::debug!(question = %id, skill = ?question.skill(), correct, "answer graded");

        let recorded = self.stats.record_outcome(question.skill(), correct).await;

        if is_complete {
            self.phase = match std::mem::take(&mut self.phase) {
                QuizPhase::Active(session) => {
                    tracing::info!(score, total = session.total_questions(), "quiz complete");
                    QuizPhase::Complete(session)
                }
                other => other,
            };
        }

        Ok(SubmitOutcome {
            question,
            stats: recorded.stats,
            score,
            is_complete,
            warning: recorded.warning,
        })
    }

    /// Discard the current quiz and return to `Setup`. Stats are untouched.
    pub fn restart(&mut self) {
        if !matches!(self.phase, QuizPhase::Setup) {
            tracing::info!("quiz restarted");
        }
        self.phase = QuizPhase::Setup;
    }
}
