use chrono::{DateTime, Duration, Utc};

//
// ─── CONSTANTS ─────────────────────────────────────────────────────────────────
//

/// Interval for a skill with no successes yet.
pub const BASE_INTERVAL_HOURS: f64 = 24.0;
/// Upper bound on any interval (30 days).
pub const MAX_INTERVAL_HOURS: f64 = 720.0;
/// Difficulty shift per net failure (or net success, negatively).
pub const DIFFICULTY_STEP: f64 = 0.5;
pub const MIN_DIFFICULTY: f64 = 0.5;
pub const MAX_DIFFICULTY: f64 = 2.5;

//
// ─── SCHEDULER ─────────────────────────────────────────────────────────────────
//

/// Maps a skill's success/failure counters to the next review time.
///
/// ```text
/// difficulty = clamp(1 + (failures - successes) * 0.5, 0.5, 2.5)
/// hours      = min(round(24 * 2^(successes / difficulty)), 720)
/// ```
///
/// The interval never drops below 24 hours (the exponent is never negative) and
/// never exceeds 720 hours. With zero successes it is exactly 24 hours, whatever
/// the failure count.
///
/// # Examples
///
/// ```
/// # use quiz_core::scheduler::ReviewScheduler;
/// let scheduler = ReviewScheduler::new();
/// assert_eq!(scheduler.interval_hours(0, 7), 24);
/// assert_eq!(scheduler.interval_hours(1, 0), 96);
/// assert_eq!(scheduler.interval_hours(40, 0), 720);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReviewScheduler;

impl ReviewScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Difficulty factor in `[0.5, 2.5]`; higher means slower interval growth.
    #[must_use]
    pub fn difficulty(&self, success_count: u32, failure_count: u32) -> f64 {
        let net_failures = f64::from(failure_count) - f64::from(success_count);
        (1.0 + net_failures * DIFFICULTY_STEP).clamp(MIN_DIFFICULTY, MAX_DIFFICULTY)
    }

    /// Whole hours until the next review, within `[24, 720]`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn interval_hours(&self, success_count: u32, failure_count: u32) -> i64 {
        let difficulty = self.difficulty(success_count, failure_count);
        let exponent = f64::from(success_count) / difficulty;
        // Large exponents overflow to infinity, which the cap absorbs.
        let hours = (BASE_INTERVAL_HOURS * 2_f64.powf(exponent)).round();
        hours.min(MAX_INTERVAL_HOURS) as i64
    }

    /// Timestamp of the next review, `interval_hours` after `now`.
    #[must_use]
    pub fn next_review_date(
        &self,
        success_count: u32,
        failure_count: u32,
        now: DateTime<Utc>,
    ) -> DateTime<Utc> {
        now + Duration::hours(self.interval_hours(success_count, failure_count))
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::fixed_now;

    #[test]
    fn zero_successes_always_schedules_one_day_out() {
        let s = ReviewScheduler::new();
        let now = fixed_now();
        for failures in [0, 1, 2, 5, 50, u32::MAX] {
            assert_eq!(
                s.next_review_date(0, failures, now),
                now + Duration::hours(24),
                "failures = {failures}"
            );
        }
    }

    #[test]
    fn known_intervals() {
        let s = ReviewScheduler::new();
        assert_eq!(s.interval_hours(1, 0), 96);
        assert_eq!(s.interval_hours(2, 0), 384);
        assert_eq!(s.interval_hours(1, 1), 48);
        assert_eq!(s.interval_hours(2, 2), 96);
        assert_eq!(s.interval_hours(1, 2), 38);
        assert_eq!(s.interval_hours(1, 5), 32);
        assert_eq!(s.interval_hours(3, 4), 96);
    }

    #[test]
    fn interval_is_capped_at_thirty_days() {
        let s = ReviewScheduler::new();
        assert_eq!(s.interval_hours(5, 0), 720);
        assert_eq!(s.interval_hours(u32::MAX, 0), 720);
        assert_eq!(
            s.next_review_date(5, 0, fixed_now()),
            fixed_now() + Duration::days(30)
        );
    }

    #[test]
    fn difficulty_is_clamped() {
        let s = ReviewScheduler::new();
        assert!((s.difficulty(0, 0) - 1.0).abs() < f64::EPSILON);
        assert!((s.difficulty(10, 0) - MIN_DIFFICULTY).abs() < f64::EPSILON);
        assert!((s.difficulty(0, 10) - MAX_DIFFICULTY).abs() < f64::EPSILON);
    }

    #[test]
    fn more_successes_never_shorten_the_interval() {
        let s = ReviewScheduler::new();
        let now = fixed_now();
        assert!(s.next_review_date(5, 0, now) >= s.next_review_date(1, 0, now));

        for failures in 0..8 {
            let mut previous = 0;
            for successes in 0..20 {
                let hours = s.interval_hours(successes, failures);
                assert!(hours >= previous, "s={successes} f={failures}");
                previous = hours;
            }
        }
    }

    #[test]
    fn more_failures_never_lengthen_the_interval() {
        let s = ReviewScheduler::new();
        for successes in 0..8 {
            let mut previous = i64::MAX;
            for failures in 0..20 {
                let hours = s.interval_hours(successes, failures);
                assert!(hours <= previous, "s={successes} f={failures}");
                previous = hours;
            }
        }
    }

    #[test]
    fn every_interval_stays_within_bounds() {
        let s = ReviewScheduler::new();
        let now = fixed_now();
        for successes in 0..40 {
            for failures in 0..40 {
                let next = s.next_review_date(successes, failures, now);
                assert!(next >= now + Duration::hours(24));
                assert!(next <= now + Duration::hours(720));
            }
        }
    }
}
