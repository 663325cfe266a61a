use rand::Rng;

use crate::model::SkillType;

/// A freshly drawn question: the number shown and the expected reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratedQuestion {
    pub display_number: i64,
    pub correct_answer: i64,
}

/// Draws random questions for a skill within the requested range.
///
/// Each skill caps the drawn base number so that both the displayed number and
/// the answer stay in mental-arithmetic territory:
///
/// | skill       | base range                         | shown | answer |
/// |-------------|------------------------------------|-------|--------|
/// | Square      | `[max(1,min), min(20,max)]`        | x     | x²     |
/// | SquareRoot  | `[max(1,min), min(10,max)]`        | x²    | x      |
/// | Cube        | `[max(1,min), min(10,max)]`        | x     | x³     |
/// | CubeRoot    | `[max(1,min), min(5,max)]`         | x³    | x      |
///
/// When the requested minimum lies above the cap, the range collapses onto the
/// cap itself, so the cap is never exceeded.
#[derive(Debug, Clone, Copy, Default)]
pub struct QuestionGenerator;

impl QuestionGenerator {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Largest base number drawn for `skill`.
    #[must_use]
    pub fn cap(skill: SkillType) -> i64 {
        match skill {
            SkillType::Square => 20,
            SkillType::SquareRoot | SkillType::Cube => 10,
            SkillType::CubeRoot => 5,
        }
    }

    /// Inclusive base-number range for `skill` under the requested bounds.
    ///
    /// Always non-empty for `max_range >= 1`.
    #[must_use]
    pub fn clamped_range(skill: SkillType, min_range: i64, max_range: i64) -> (i64, i64) {
        let hi = Self::cap(skill).min(max_range);
        let lo = min_range.max(1).min(hi);
        (lo, hi)
    }

    /// Draws one question. Callers guarantee `0 <= min_range < max_range`.
    pub fn generate<R: Rng>(
        &self,
        rng: &mut R,
        skill: SkillType,
        min_range: i64,
        max_range: i64,
    ) -> GeneratedQuestion {
        let (lo, hi) = Self::clamped_range(skill, min_range, max_range);
        let x = rng.random_range(lo..=hi);

        let (display_number, correct_answer) = match skill {
            SkillType::Square => (x, x * x),
            SkillType::SquareRoot => (x * x, x),
            SkillType::Cube => (x, x * x * x),
            SkillType::CubeRoot => (x * x * x, x),
        };

        GeneratedQuestion {
            display_number,
            correct_answer,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn answers_match_the_skill_relation() {
        let generator = QuestionGenerator::new();
        let mut rng = rng();
        for (min, max) in [(0, 100), (1, 2), (3, 9), (0, 1), (15, 40), (50, 100)] {
            for _ in 0..50 {
                let q = generator.generate(&mut rng, SkillType::Square, min, max);
                assert_eq!(q.correct_answer, q.display_number * q.display_number);

                let q = generator.generate(&mut rng, SkillType::SquareRoot, min, max);
                assert_eq!(q.display_number, q.correct_answer * q.correct_answer);

                let q = generator.generate(&mut rng, SkillType::Cube, min, max);
                assert_eq!(q.correct_answer, q.display_number.pow(3));

                let q = generator.generate(&mut rng, SkillType::CubeRoot, min, max);
                assert_eq!(q.display_number, q.correct_answer.pow(3));
            }
        }
    }

    #[test]
    fn base_numbers_stay_inside_the_clamped_range() {
        let generator = QuestionGenerator::new();
        let mut rng = rng();
        for skill in SkillType::ALL {
            for _ in 0..200 {
                let q = generator.generate(&mut rng, skill, 2, 8);
                let base = match skill {
                    SkillType::Square | SkillType::Cube => q.display_number,
                    SkillType::SquareRoot | SkillType::CubeRoot => q.correct_answer,
                };
                let (lo, hi) = QuestionGenerator::clamped_range(skill, 2, 8);
                assert!((lo..=hi).contains(&base), "{skill:?} drew {base}");
            }
        }
    }

    #[test]
    fn caps_limit_wide_ranges() {
        assert_eq!(QuestionGenerator::clamped_range(SkillType::Square, 0, 100), (1, 20));
        assert_eq!(QuestionGenerator::clamped_range(SkillType::SquareRoot, 0, 100), (1, 10));
        assert_eq!(QuestionGenerator::clamped_range(SkillType::Cube, 0, 100), (1, 10));
        assert_eq!(QuestionGenerator::clamped_range(SkillType::CubeRoot, 0, 100), (1, 5));
    }

    #[test]
    fn range_above_cap_collapses_onto_cap() {
        assert_eq!(QuestionGenerator::clamped_range(SkillType::Square, 50, 100), (20, 20));
        assert_eq!(QuestionGenerator::clamped_range(SkillType::CubeRoot, 6, 7), (5, 5));

        let q = QuestionGenerator::new().generate(&mut rng(), SkillType::Square, 50, 100);
        assert_eq!(q, GeneratedQuestion { display_number: 20, correct_answer: 400 });
    }

    #[test]
    fn zero_minimum_is_lifted_to_one() {
        assert_eq!(QuestionGenerator::clamped_range(SkillType::Cube, 0, 1), (1, 1));
        let q = QuestionGenerator::new().generate(&mut rng(), SkillType::Cube, 0, 1);
        assert_eq!(q, GeneratedQuestion { display_number: 1, correct_answer: 1 });
    }
}
