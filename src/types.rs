//! Evaluation result types.

use std::collections::BTreeSet;
use std::fmt;

use crate::charset::CharacterClass;
use crate::crack_time::format_crack_time;

/// Strength tier derived from entropy bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StrengthTier {
    VeryWeak,
    Weak,
    Moderate,
    Strong,
    VeryStrong,
}

impl StrengthTier {
    /// Thresholds: <35 very weak, <60 weak, <80 moderate, <100 strong.
    pub fn from_entropy(bits: f64) -> Self {
        if bits < 35.0 {
            StrengthTier::VeryWeak
        } else if bits < 60.0 {
            StrengthTier::Weak
        } else if bits < 80.0 {
            StrengthTier::Moderate
        } else if bits < 100.0 {
            StrengthTier::Strong
        } else {
            StrengthTier::VeryStrong
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StrengthTier::VeryWeak => "VERY WEAK",
            StrengthTier::Weak => "WEAK",
            StrengthTier::Moderate => "MODERATE",
            StrengthTier::Strong => "STRONG",
            StrengthTier::VeryStrong => "VERY STRONG",
        }
    }
}

impl fmt::Display for StrengthTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome category of an evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Empty input, nothing to rate yet.
    Awaiting,
    /// Found verbatim in the loaded wordlist; entropy is irrelevant.
    Compromised,
    Rated(StrengthTier),
}

/// Everything the evaluator derives from a password and the wordlist.
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluationResult {
    pub pool_size: usize,
    pub active_classes: BTreeSet<CharacterClass>,
    pub entropy_bits: f64,
    pub crack_time_seconds: f64,
    pub verdict: Verdict,
    pub recommendations: Vec<String>,
}

impl EvaluationResult {
    /// Neutral result for an empty password.
    pub fn awaiting() -> Self {
        Self {
            pool_size: 0,
            active_classes: BTreeSet::new(),
            entropy_bits: 0.0,
            crack_time_seconds: 0.0,
            verdict: Verdict::Awaiting,
            recommendations: Vec::new(),
        }
    }

    /// The entropy tier, if the password was rated on entropy at all.
    pub fn strength_tier(&self) -> Option<StrengthTier> {
        match self.verdict {
            Verdict::Rated(tier) => Some(tier),
            Verdict::Awaiting | Verdict::Compromised => None,
        }
    }

    pub fn is_compromised(&self) -> bool {
        self.verdict == Verdict::Compromised
    }

    pub fn crack_time_display(&self) -> String {
        format_crack_time(self.crack_time_seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_thresholds() {
        assert_eq!(StrengthTier::from_entropy(0.0), StrengthTier::VeryWeak);
        assert_eq!(StrengthTier::from_entropy(34.99), StrengthTier::VeryWeak);
        assert_eq!(StrengthTier::from_entropy(35.0), StrengthTier::Weak);
        assert_eq!(StrengthTier::from_entropy(59.99), StrengthTier::Weak);
        assert_eq!(StrengthTier::from_entropy(60.0), StrengthTier::Moderate);
        assert_eq!(StrengthTier::from_entropy(80.0), StrengthTier::Strong);
        assert_eq!(StrengthTier::from_entropy(100.0), StrengthTier::VeryStrong);
        assert_eq!(StrengthTier::from_entropy(512.0), StrengthTier::VeryStrong);
    }

    #[test]
    fn test_tier_ordering() {
        assert!(StrengthTier::VeryWeak < StrengthTier::Weak);
        assert!(StrengthTier::Strong < StrengthTier::VeryStrong);
    }

    #[test]
    fn test_awaiting_result() {
        let result = EvaluationResult::awaiting();
        assert_eq!(result.verdict, Verdict::Awaiting);
        assert_eq!(result.strength_tier(), None);
        assert!(!result.is_compromised());
        assert!(result.recommendations.is_empty());
        assert_eq!(result.crack_time_display(), "instantly");
    }
}
