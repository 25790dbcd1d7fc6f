use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::mode::GameMode;
use crate::rank::Rank;

/// Outcome of one finished session. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionResult {
    pub id: String,
    pub mode: GameMode,
    pub score: i64,
    pub correct: u32,
    pub incorrect: u32,
    pub played_at: DateTime<Utc>,
}

impl SessionResult {
    pub fn new(mode: GameMode, score: i64, correct: u32, incorrect: u32) -> Self {
        Self {
            id: ulid::Ulid::new().to_string(),
            mode,
            score,
            correct,
            incorrect,
            played_at: Utc::now(),
        }
    }
}

/// Cumulative counters. Missing fields load as zero so older files stay readable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Stats {
    pub total_correct: u64,
    pub total_incorrect: u64,
    pub total_played: u64,
    pub easy_played: u64,
    pub medium_played: u64,
    pub hard_played: u64,
    pub extreme_played: u64,
    pub matrix_played: u64,
    pub timed_played: u64,
    pub survival_played: u64,
}

impl Stats {
    pub fn played(&self, mode: GameMode) -> u64 {
        match mode {
            GameMode::Easy => self.easy_played,
            GameMode::Medium => self.medium_played,
            GameMode::Hard => self.hard_played,
            GameMode::Extreme => self.extreme_played,
            GameMode::Matrix => self.matrix_played,
            GameMode::Timed => self.timed_played,
            GameMode::Survival => self.survival_played,
        }
    }

    fn played_mut(&mut self, mode: GameMode) -> &mut u64 {
        match mode {
            GameMode::Easy => &mut self.easy_played,
            GameMode::Medium => &mut self.medium_played,
            GameMode::Hard => &mut self.hard_played,
            GameMode::Extreme => &mut self.extreme_played,
            GameMode::Matrix => &mut self.matrix_played,
            GameMode::Timed => &mut self.timed_played,
            GameMode::Survival => &mut self.survival_played,
        }
    }
}

/// The durable per-player record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub username: String,
    #[serde(default)]
    pub rank: Rank,
    #[serde(default)]
    pub total_score: i64,
    #[serde(default)]
    pub min_session_score: Option<i64>,
    #[serde(default)]
    pub max_session_score: i64,
    #[serde(default)]
    pub stats: Stats,
    #[serde(default)]
    pub history: Vec<SessionResult>,
}

impl Profile {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            rank: Rank::Beginner,
            total_score: 0,
            min_session_score: None,
            max_session_score: 0,
            stats: Stats::default(),
            history: Vec::new(),
        }
    }

    /// Merge a finished session and recompute rank.
    pub fn record(&mut self, result: SessionResult) {
        self.total_score += result.score;

        *self.stats.played_mut(result.mode) += 1;
        self.stats.total_played += 1;
        self.stats.total_correct += u64::from(result.correct);
        self.stats.total_incorrect += u64::from(result.incorrect);

        match self.min_session_score {
            None => {
                self.min_session_score = Some(result.score);
                self.max_session_score = result.score;
            }
            Some(min) => {
                self.min_session_score = Some(min.min(result.score));
                self.max_session_score = self.max_session_score.max(result.score);
            }
        }

        self.history.push(result);
        self.rank = Rank::from_score(self.total_score);
    }

    /// Most recent sessions first.
    pub fn recent(&self, limit: usize) -> impl Iterator<Item = &SessionResult> {
        self.history.iter().rev().take(limit)
    }

    /// Best Survival score, if any Survival session was played.
    pub fn best_survival(&self) -> Option<i64> {
        self.history
            .iter()
            .filter(|s| s.mode == GameMode::Survival)
            .map(|s| s.score)
            .max()
    }
}
