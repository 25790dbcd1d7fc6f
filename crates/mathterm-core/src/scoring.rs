use std::time::Duration;

use crate::expression::Outcome;

pub const STANDARD_CORRECT: i64 = 10;
pub const WRONG_PENALTY: i64 = -5;
/// Timed mode base: points for a correct answer are `TIMED_BASE - seconds`.
pub const TIMED_BASE: i64 = 15;
pub const TIMED_FLOOR: i64 = 1;

/// Maps an answer outcome to a score delta for one mode family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoringPolicy {
    /// +10 / -5.
    Standard,
    /// Faster correct answers earn more, floored at 1; -5 when wrong.
    Timed,
    /// One point per correct answer, never negative.
    Survival,
}

impl ScoringPolicy {
    pub fn delta(self, outcome: Outcome, round_time: Duration) -> i64 {
        match (self, outcome) {
            (Self::Standard, Outcome::Correct) => STANDARD_CORRECT,
            (Self::Timed, Outcome::Correct) => timed_points(round_time),
            (Self::Survival, Outcome::Correct) => 1,
            (Self::Standard | Self::Timed, Outcome::Incorrect) => WRONG_PENALTY,
            (Self::Survival, Outcome::Incorrect) => 0,
        }
    }
}

/// Points for a correct timed answer. Started seconds count in full and a
/// round always costs at least one, so the result stays within `1..=14`.
pub fn timed_points(round_time: Duration) -> i64 {
    let secs = round_time.as_secs_f64().ceil().max(1.0) as i64;
    (TIMED_BASE - secs).max(TIMED_FLOOR)
}
