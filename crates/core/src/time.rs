use chrono::{DateTime, Duration, Utc};

/// Where the quiz reads "now" when stamping answers and scheduling reviews.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Clock {
    /// Wall-clock time.
    #[default]
    System,
    /// A pinned instant, moved only by [`Clock::advance`].
    Fixed(DateTime<Utc>),
}

impl Clock {
    #[must_use]
    pub fn fixed(at: DateTime<Utc>) -> Self {
        Self::Fixed(at)
    }

    #[must_use]
    pub fn now(&self) -> DateTime<Utc> {
        match self {
            Clock::System => Utc::now(),
            Clock::Fixed(t) => *t,
        }
    }

    /// Moves a pinned clock forward; no-op on `System`.
    pub fn advance(&mut self, delta: Duration) {
        if let Clock::Fixed(t) = self {
            *t += delta;
        }
    }

    /// True once `review_at` is no longer in the future.
    #[must_use]
    pub fn is_due(&self, review_at: DateTime<Utc>) -> bool {
        self.now() >= review_at
    }
}

/// Instant every deterministic test starts from (2024-03-09T16:00:00Z).
pub const FIXED_TEST_TIMESTAMP: i64 = 1_710_000_000;

/// # Panics
///
/// Panics if [`FIXED_TEST_TIMESTAMP`] cannot be represented.
#[must_use]
pub fn fixed_now() -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp(FIXED_TEST_TIMESTAMP, 0)
        .expect("fixed timestamp should be valid")
}

#[must_use]
pub fn fixed_clock() -> Clock {
    Clock::fixed(fixed_now())
}
