use serde::{Deserialize, Serialize};
use std::fmt;

/// Player rank, derived from cumulative score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    #[default]
    Beginner,
    #[serde(rename = "Arithmetic Adept")]
    ArithmeticAdept,
    #[serde(rename = "Number Ninja")]
    NumberNinja,
    #[serde(rename = "Problem Pro")]
    ProblemPro,
    #[serde(rename = "Equation Wizard")]
    EquationWizard,
    #[serde(rename = "Math Grandmaster")]
    MathGrandmaster,
}

/// Lower bounds (exclusive) of each rank above Beginner, highest first.
const THRESHOLDS: [(i64, Rank); 5] = [
    (5000, Rank::MathGrandmaster),
    (2000, Rank::EquationWizard),
    (1000, Rank::ProblemPro),
    (500, Rank::NumberNinja),
    (100, Rank::ArithmeticAdept),
];

impl Rank {
    pub fn from_score(total_score: i64) -> Self {
        THRESHOLDS
            .iter()
            .find(|(floor, _)| total_score > *floor)
            .map(|(_, rank)| *rank)
            .unwrap_or(Rank::Beginner)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::ArithmeticAdept => "Arithmetic Adept",
            Self::NumberNinja => "Number Ninja",
            Self::ProblemPro => "Problem Pro",
            Self::EquationWizard => "Equation Wizard",
            Self::MathGrandmaster => "Math Grandmaster",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thresholds() {
        assert_eq!(Rank::from_score(-40), Rank::Beginner);
        assert_eq!(Rank::from_score(100), Rank::Beginner);
        assert_eq!(Rank::from_score(101), Rank::ArithmeticAdept);
        assert_eq!(Rank::from_score(500), Rank::ArithmeticAdept);
        assert_eq!(Rank::from_score(501), Rank::NumberNinja);
        assert_eq!(Rank::from_score(1001), Rank::ProblemPro);
        assert_eq!(Rank::from_score(2000), Rank::ProblemPro);
        assert_eq!(Rank::from_score(2001), Rank::EquationWizard);
        assert_eq!(Rank::from_score(5001), Rank::MathGrandmaster);
    }

    #[test]
    fn test_monotonic() {
        let mut last = Rank::Beginner;
        for score in (-100..6000).step_by(7) {
            let rank = Rank::from_score(score);
            assert!(rank >= last, "rank regressed at {score}");
            last = rank;
        }
        assert_eq!(last, Rank::MathGrandmaster);
    }

    #[test]
    fn test_serde_uses_labels() {
        let json = serde_json::to_string(&Rank::NumberNinja).unwrap();
        assert_eq!(json, "\"Number Ninja\"");
        let rank: Rank = serde_json::from_str("\"Math Grandmaster\"").unwrap();
        assert_eq!(rank, Rank::MathGrandmaster);
    }
}
