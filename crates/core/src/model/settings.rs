use thiserror::Error;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizSettingsError {
    #[error("question count must be between 1 and 100, got {0}")]
    InvalidQuestionCount(u32),

    #[error("minimum range must be >= 0, got {0}")]
    NegativeMinRange(i64),

    #[error("maximum range must be <= 100, got {0}")]
    MaxRangeTooLarge(i64),

    #[error("minimum range ({min}) must be below maximum range ({max})")]
    InvertedRange { min: i64, max: i64 },
}

//
// ─── SETTINGS ──────────────────────────────────────────────────────────────────
//

/// Parameters for starting a quiz.
///
/// Validated on construction, so a `QuizSettings` value always satisfies
/// `1 <= question_count <= 100` and `0 <= min_range < max_range <= 100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizSettings {
    question_count: u32,
    min_range: i64,
    max_range: i64,
}

impl QuizSettings {
    pub const MIN_QUESTIONS: u32 = 1;
    pub const MAX_QUESTIONS: u32 = 100;
    pub const RANGE_FLOOR: i64 = 0;
    pub const RANGE_CEILING: i64 = 100;

    /// Creates validated quiz settings.
    ///
    /// # Errors
    ///
    /// Returns the first violated bound as a `QuizSettingsError`.
    pub fn new(question_count: u32, min_range: i64, max_range: i64) -> Result<Self, QuizSettingsError> {
        if !(Self::MIN_QUESTIONS..=Self::MAX_QUESTIONS).contains(&question_count) {
            return Err(QuizSettingsError::InvalidQuestionCount(question_count));
        }
        if min_range < Self::RANGE_FLOOR {
            return Err(QuizSettingsError::NegativeMinRange(min_range));
        }
        if max_range > Self::RANGE_CEILING {
            return Err(QuizSettingsError::MaxRangeTooLarge(max_range));
        }
        if min_range >= max_range {
            return Err(QuizSettingsError::InvertedRange {
                min: min_range,
                max: max_range,
            });
        }

        Ok(Self {
            question_count,
            min_range,
            max_range,
        })
    }

    #[must_use]
    pub fn question_count(&self) -> u32 {
        self.question_count
    }

    #[must_use]
    pub fn min_range(&self) -> i64 {
        self.min_range
    }

    #[must_use]
    pub fn max_range(&self) -> i64 {
        self.max_range
    }
}

/// The setup form's initial values: ten questions over the whole range.
impl Default for QuizSettings {
    fn default() -> Self {
        Self {
            question_count: 10,
            min_range: Self::RANGE_FLOOR,
            max_range: Self::RANGE_CEILING,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_boundaries() {
        assert!(QuizSettings::new(1, 0, 1).is_ok());
        assert!(QuizSettings::new(100, 99, 100).is_ok());
        assert!(QuizSettings::new(100, 0, 100).is_ok());
    }

    #[test]
    fn rejects_question_count_out_of_bounds() {
        assert_eq!(
            QuizSettings::new(0, 0, 10),
            Err(QuizSettingsError::InvalidQuestionCount(0))
        );
        assert_eq!(
            QuizSettings::new(101, 0, 10),
            Err(QuizSettingsError::InvalidQuestionCount(101))
        );
    }

    #[test]
    fn rejects_bad_ranges() {
        assert_eq!(
            QuizSettings::new(5, -1, 10),
            Err(QuizSettingsError::NegativeMinRange(-1))
        );
        assert_eq!(
            QuizSettings::new(5, 0, 101),
            Err(QuizSettingsError::MaxRangeTooLarge(101))
        );
        assert_eq!(
            QuizSettings::new(5, 10, 10),
            Err(QuizSettingsError::InvertedRange { min: 10, max: 10 })
        );
        assert!(matches!(
            QuizSettings::new(5, 20, 3),
            Err(QuizSettingsError::InvertedRange { .. })
        ));
    }

    #[test]
    fn default_matches_setup_form() {
        let settings = QuizSettings::default();
        assert_eq!(settings.question_count(), 10);
        assert_eq!(settings.min_range(), 0);
        assert_eq!(settings.max_range(), 100);
        assert_eq!(QuizSettings::new(10, 0, 100), Ok(settings));
    }
}
