//! Message tiers keyed on the lifestyle score and the classifier label.

use crate::RiskLabel;

/// Lifestyle score at or above which the lifestyle tier is high.
pub const HIGH_SCORE_THRESHOLD: u8 = 6;

/// Lifestyle score at or above which the lifestyle tier is moderate.
pub const MODERATE_SCORE_THRESHOLD: u8 = 3;

/// Message tier derived from the lifestyle score alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum LifestyleTier {
    Healthy,
    Moderate,
    High,
}

impl LifestyleTier {
    /// Maps a lifestyle score to its message tier.
    #[must_use]
    pub const fn from_score(score: u8) -> Self {
        match score {
            HIGH_SCORE_THRESHOLD.. => Self::High,
            MODERATE_SCORE_THRESHOLD.. => Self::Moderate,
            _ => Self::Healthy,
        }
    }

    /// Advice line shown for this tier.
    #[must_use]
    pub const fn advice(self) -> &'static str {
        match self {
            Self::High => {
                "Your lifestyle risk score is high. Strongly consider preventive action."
            }
            Self::Moderate => "Moderate lifestyle risk. Improvements recommended.",
            Self::Healthy => "Healthy lifestyle pattern.",
        }
    }
}

/// Combined guidance from the classifier label and the lifestyle score.
///
/// High if either signal is high; low only when both are low; moderate
/// otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum OverallGuidance {
    LowRisk,
    ModerateRisk,
    HighRisk,
}

impl OverallGuidance {
    /// Derives the combined guidance for one evaluation.
    #[must_use]
    pub const fn from_evaluation(label: RiskLabel, lifestyle_score: u8) -> Self {
        if label.is_high() || lifestyle_score >= HIGH_SCORE_THRESHOLD {
            Self::HighRisk
        } else if lifestyle_score < MODERATE_SCORE_THRESHOLD {
            Self::LowRisk
        } else {
            Self::ModerateRisk
        }
    }

    /// Guidance line shown for this outcome.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::HighRisk => {
                "You are in a high-risk group. Consult a doctor and take preventive steps."
            }
            Self::LowRisk => {
                "Great job! You appear to be at low risk. Maintain your healthy habits."
            }
            Self::ModerateRisk => {
                "You're at moderate risk. Improving lifestyle can reduce your future risk."
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_thresholds() {
        assert_eq!(LifestyleTier::from_score(0), LifestyleTier::Healthy);
        assert_eq!(LifestyleTier::from_score(2), LifestyleTier::Healthy);
        assert_eq!(LifestyleTier::from_score(3), LifestyleTier::Moderate);
        assert_eq!(LifestyleTier::from_score(5), LifestyleTier::Moderate);
        assert_eq!(LifestyleTier::from_score(6), LifestyleTier::High);
        assert_eq!(LifestyleTier::from_score(9), LifestyleTier::High);
    }

    #[test]
    fn test_guidance_high_when_label_high() {
        // A high classifier label dominates regardless of lifestyle score.
        assert_eq!(
            OverallGuidance::from_evaluation(RiskLabel::High, 0),
            OverallGuidance::HighRisk
        );
    }

    #[test]
    fn test_guidance_high_when_score_high() {
        assert_eq!(
            OverallGuidance::from_evaluation(RiskLabel::Low, 6),
            OverallGuidance::HighRisk
        );
    }

    #[test]
    fn test_guidance_low_requires_both_low() {
        assert_eq!(
            OverallGuidance::from_evaluation(RiskLabel::Low, 2),
            OverallGuidance::LowRisk
        );
        assert_eq!(
            OverallGuidance::from_evaluation(RiskLabel::Low, 3),
            OverallGuidance::ModerateRisk
        );
    }

    #[test]
    fn test_guidance_moderate_band() {
        for score in MODERATE_SCORE_THRESHOLD..HIGH_SCORE_THRESHOLD {
            assert_eq!(
                OverallGuidance::from_evaluation(RiskLabel::Low, score),
                OverallGuidance::ModerateRisk
            );
        }
    }
}
