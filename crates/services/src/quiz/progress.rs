use serde::Serialize;

/// Aggregated view of quiz progress, useful for UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuizProgress {
    pub total: usize,
    pub answered: usize,
    pub remaining: usize,
    pub score: usize,
    /// `score / total` as a whole percentage, rounded half up.
    pub percentage: u32,
    pub is_complete: bool,
}

impl QuizProgress {
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn new(total: usize, answered: usize, score: usize) -> Self {
        let percentage = if total == 0 {
            0
        } else {
            // Integer form of round(score * 100 / total).
            ((score * 200 + total) / (total * 2)) as u32
        };

        Self {
            total,
            answered,
            remaining: total.saturating_sub(answered),
            score,
            percentage,
            is_complete: total > 0 && answered == total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentage_rounds_half_up() {
        assert_eq!(QuizProgress::new(3, 3, 2).percentage, 67);
        assert_eq!(QuizProgress::new(3, 3, 1).percentage, 33);
        assert_eq!(QuizProgress::new(8, 8, 1).percentage, 13);
        assert_eq!(QuizProgress::new(200, 200, 1).percentage, 1);
        assert_eq!(QuizProgress::new(10, 10, 10).percentage, 100);
    }

    #[test]
    fn tracks_remaining_and_completion() {
        let partial = QuizProgress::new(4, 1, 1);
        assert_eq!(partial.remaining, 3);
        assert!(!partial.is_complete);

        let done = QuizProgress::new(4, 4, 0);
        assert_eq!(done.remaining, 0);
        assert!(done.is_complete);
        assert_eq!(done.percentage, 0);
    }
}
