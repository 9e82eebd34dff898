//! Safety assessment produced by the heuristic URL checks
//!
//! An assessment starts at the maximum score and accumulates independent
//! deductions, each paired with a human-readable warning. It is built
//! once per checked URL and never mutated after the caller is done
//! deducting.

use serde::{Deserialize, Serialize};

/// Maximum (and initial) safety score
pub const MAX_SCORE: u8 = 100;

/// Advisory verdict band derived from the score
///
/// Bands follow the traffic-light presentation of the score:
/// 80 and above is [`Verdict::Safe`], 60 and above is
/// [`Verdict::Caution`], everything below is [`Verdict::Danger`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Safe,
    Caution,
    Danger,
}

impl Verdict {
    /// Derive the band for a score
    #[must_use]
    pub const fn from_score(score: u8) -> Self {
        if score >= 80 {
            Self::Safe
        } else if score >= 60 {
            Self::Caution
        } else {
            Self::Danger
        }
    }
}

/// Result of the heuristic URL checks
///
/// The score is advisory only and must never be treated as a security
/// boundary; callers are expected to pair it with an independent
/// language-model judgment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SafetyAssessment {
    /// Safety score, 0-100
    pub score: u8,
    /// Warnings collected while checking, in deduction order
    pub warnings: Vec<String>,
}

impl SafetyAssessment {
    /// Start a fresh assessment with a perfect score and no warnings
    #[must_use]
    pub const fn new() -> Self {
        Self {
            score: MAX_SCORE,
            warnings: Vec::new(),
        }
    }

    /// Assessment for an evaluation that failed outright: score 0 and a
    /// single generic warning
    #[must_use]
    pub fn failed(warning: impl Into<String>) -> Self {
        Self {
            score: 0,
            warnings: vec![warning.into()],
        }
    }

    /// Apply an independent deduction, clamping the score at 0
    pub fn deduct(&mut self, points: u8, warning: impl Into<String>) {
        self.score = self.score.saturating_sub(points);
        self.warnings.push(warning.into());
    }

    /// Advisory verdict band for the current score
    #[must_use]
    pub const fn verdict(&self) -> Verdict {
        Verdict::from_score(self.score)
    }

    /// Whether any check produced a warning
    #[must_use]
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

impl Default for SafetyAssessment {
    fn default() -> Self {
        Self::new()
    }
}


#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use super::*;

    proptest! {
        #[test]
        fn score_never_exceeds_max_and_never_underflows(
            deductions in proptest::collection::vec(0u8..=100, 0..10)
        ) {
            let mut assessment = SafetyAssessment::new();
            for (i, d) in deductions.iter().enumerate() {
                assessment.deduct(*d, format!("warning {i}"));
            }
            prop_assert!(assessment.score <= MAX_SCORE);
            prop_assert_eq!(assessment.warnings.len(), deductions.len());
        }

        #[test]
        fn verdict_is_monotonic_in_score(score in 0u8..=100) {
            let verdict = Verdict::from_score(score);
            match verdict {
                Verdict::Safe => prop_assert!(score >= 80),
                Verdict::Caution => prop_assert!((60..80).contains(&score)),
                Verdict::Danger => prop_assert!(score < 60),
            }
        }
    }
}
