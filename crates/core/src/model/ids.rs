use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of a question within one quiz session (its position in the sequence).
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct QuestionId(u32);

impl QuestionId {
    #[must_use]
    pub fn new(index: u32) -> Self {
        Self(index)
    }

    /// Returns the zero-based position of the question in its session.
    #[must_use]
    pub fn index(&self) -> u32 {
        self.0
    }
}

impl fmt::Debug for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "QuestionId({})", self.0)
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "q{}", self.0)
    }
}

// ─── FromStr ───────────────────────────────────────────────────────────────────

/// Error type for parsing ID from string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIdError {
    raw: String,
}

impl fmt::Display for ParseIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to parse QuestionId from {:?}", self.raw)
    }
}

impl std::error::Error for ParseIdError {}

/// Accepts both the display form (`q7`) and a bare index (`7`).
impl FromStr for QuestionId {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix('q').unwrap_or(s);
        digits
            .parse::<u32>()
            .map(QuestionId::new)
            .map_err(|_| ParseIdError { raw: s.to_string() })
    }
}

// ─── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_id_display() {
        assert_eq!(QuestionId::new(4).to_string(), "q4");
    }

    #[test]
    fn test_question_id_from_str() {
        assert_eq!("q12".parse::<QuestionId>().unwrap(), QuestionId::new(12));
        assert_eq!("3".parse::<QuestionId>().unwrap(), QuestionId::new(3));
    }

    #[test]
    fn test_question_id_from_str_invalid() {
        assert!("qx".parse::<QuestionId>().is_err());
        assert!("".parse::<QuestionId>().is_err());
        assert!("q-1".parse::<QuestionId>().is_err());
    }

    #[test]
    fn test_id_roundtrip() {
        let original = QuestionId::new(42);
        let parsed: QuestionId = original.to_string().parse().unwrap();
        assert_eq!(original, parsed);
    }
}
