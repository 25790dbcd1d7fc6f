use serde::{Deserialize, Serialize};
use std::fmt;

/// Difficulty level controlling expression shape and operand ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Easy,
    Medium,
    Hard,
    Extreme,
    Matrix,
}

impl Tier {
    pub const ALL: [Tier; 5] = [
        Tier::Easy,
        Tier::Medium,
        Tier::Hard,
        Tier::Extreme,
        Tier::Matrix,
    ];

    /// Ordered ladder climbed by Survival mode.
    pub const SURVIVAL_LADDER: [Tier; 4] = [Tier::Easy, Tier::Medium, Tier::Hard, Tier::Extreme];

    /// Weighted pool Timed mode draws from; matrix questions never appear.
    pub const TIMED_POOL: [Tier; 5] = [
        Tier::Easy,
        Tier::Easy,
        Tier::Medium,
        Tier::Medium,
        Tier::Hard,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
            Self::Extreme => "Extreme",
            Self::Matrix => "Matrix",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Easy => write!(f, "easy"),
            Self::Medium => write!(f, "medium"),
            Self::Hard => write!(f, "hard"),
            Self::Extreme => write!(f, "extreme"),
            Self::Matrix => write!(f, "matrix"),
        }
    }
}

impl std::str::FromStr for Tier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "easy" => Ok(Self::Easy),
            "medium" => Ok(Self::Medium),
            "hard" => Ok(Self::Hard),
            "extreme" => Ok(Self::Extreme),
            "matrix" => Ok(Self::Matrix),
            _ => Err(format!("invalid tier: {s}")),
        }
    }
}

/// A playable mode. The five tier-named modes are Standard mode at that tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    Easy,
    Medium,
    Hard,
    Extreme,
    Matrix,
    Timed,
    Survival,
}

impl GameMode {
    pub const ALL: [GameMode; 7] = [
        GameMode::Easy,
        GameMode::Medium,
        GameMode::Hard,
        GameMode::Extreme,
        GameMode::Matrix,
        GameMode::Timed,
        GameMode::Survival,
    ];

    /// The fixed tier of a Standard mode, `None` for Timed and Survival.
    pub fn standard_tier(self) -> Option<Tier> {
        match self {
            Self::Easy => Some(Tier::Easy),
            Self::Medium => Some(Tier::Medium),
            Self::Hard => Some(Tier::Hard),
            Self::Extreme => Some(Tier::Extreme),
            Self::Matrix => Some(Tier::Matrix),
            Self::Timed | Self::Survival => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Timed => "Timed",
            Self::Survival => "Survival",
            other => other.standard_tier().map(Tier::label).unwrap_or_default(),
        }
    }
}

impl From<Tier> for GameMode {
    fn from(tier: Tier) -> Self {
        match tier {
            Tier::Easy => Self::Easy,
            Tier::Medium => Self::Medium,
            Tier::Hard => Self::Hard,
            Tier::Extreme => Self::Extreme,
            Tier::Matrix => Self::Matrix,
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Timed => write!(f, "timed"),
            Self::Survival => write!(f, "survival"),
            other => match other.standard_tier() {
                Some(tier) => tier.fmt(f),
                None => Ok(()),
            },
        }
    }
}

impl std::str::FromStr for GameMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "timed" => Ok(Self::Timed),
            "survival" => Ok(Self::Survival),
            other => other
                .parse::<Tier>()
                .map(Self::from)
                .map_err(|_| format!("invalid mode: {s}")),
        }
    }
}
