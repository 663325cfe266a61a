use serde::{Deserialize, Serialize};
use std::fmt;

//
// ─── SKILL TYPE ────────────────────────────────────────────────────────────────
//

/// The four practised operations.
///
/// Serialized in camelCase (`square`, `squareRoot`, ...), matching the keys of the
/// persisted progress document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SkillType {
    Square,
    SquareRoot,
    Cube,
    CubeRoot,
}

impl SkillType {
    /// Round-robin order used when assigning skills to questions.
    pub const ALL: [SkillType; 4] = [
        SkillType::Square,
        SkillType::SquareRoot,
        SkillType::Cube,
        SkillType::CubeRoot,
    ];

    /// Skill for the question at `index` in a session.
    #[must_use]
    pub fn for_index(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            SkillType::Square => "Square",
            SkillType::SquareRoot => "Square Root",
            SkillType::Cube => "Cube",
            SkillType::CubeRoot => "Cube Root",
        }
    }
}

impl fmt::Display for SkillType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

//
// ─── SKILL STATS ───────────────────────────────────────────────────────────────
//

/// Cumulative graded outcomes for one skill. Counters only ever grow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillStats {
    pub success_count: u32,
    pub failure_count: u32,
}

impl SkillStats {
    #[must_use]
    pub fn new(success_count: u32, failure_count: u32) -> Self {
        Self {
            success_count,
            failure_count,
        }
    }

    /// Returns these stats advanced by one graded outcome.
    #[must_use]
    pub fn record(self, correct: bool) -> Self {
        if correct {
            Self {
                success_count: self.success_count.saturating_add(1),
                ..self
            }
        } else {
            Self {
                failure_count: self.failure_count.saturating_add(1),
                ..self
            }
        }
    }

    #[must_use]
    pub fn attempts(&self) -> u32 {
        self.success_count.saturating_add(self.failure_count)
    }
}

//
// ─── SKILL PROGRESS ────────────────────────────────────────────────────────────
//

/// Stats for every skill; the unit that gets persisted between runs.
///
/// Skills missing from a persisted document deserialize as zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SkillProgress {
    square: SkillStats,
    square_root: SkillStats,
    cube: SkillStats,
    cube_root: SkillStats,
}

impl SkillProgress {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, skill: SkillType) -> SkillStats {
        match skill {
            SkillType::Square => self.square,
            SkillType::SquareRoot => self.square_root,
            SkillType::Cube => self.cube,
            SkillType::CubeRoot => self.cube_root,
        }
    }

    fn slot_mut(&mut self, skill: SkillType) -> &mut SkillStats {
        match skill {
            SkillType::Square => &mut self.square,
            SkillType::SquareRoot => &mut self.square_root,
            SkillType::Cube => &mut self.cube,
            SkillType::CubeRoot => &mut self.cube_root,
        }
    }

    /// Records one outcome for `skill` and returns its new stats.
    pub fn record(&mut self, skill: SkillType, correct: bool) -> SkillStats {
        let slot = self.slot_mut(skill);
        *slot = slot.record(correct);
        *slot
    }

    /// Per-skill stats in round-robin order.
    pub fn iter(&self) -> impl Iterator<Item = (SkillType, SkillStats)> + '_ {
        SkillType::ALL.into_iter().map(|skill| (skill, self.get(skill)))
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
