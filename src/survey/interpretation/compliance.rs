use super::domain::ModelError;
use super::level::ScoreLevel;
use super::scoring::CategoryScore;
use serde::{Deserialize, Serialize};

const DEFAULT_CRITICAL_INDEX: f64 = 2.5;
const DEFAULT_HIGH_INDEX: f64 = 3.4;
const DEFAULT_MEDIUM_INDEX: f64 = 4.0;

/// Occupational psychosocial-risk rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplianceRating {
    Low,
    Medium,
    High,
    Critical,
}

impl ComplianceRating {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Critical => "Critical",
        }
    }

    pub const fn notes(self) -> &'static str {
        match self {
            Self::Critical => {
                "CRITICAL: psychosocial risk is high. An urgent risk management plan and professional assessment are required; employee health and safety must be addressed."
            }
            Self::High => {
                "HIGH RISK: psychosocial risk is elevated. Carry out a risk assessment, draw up an improvement plan and monitor progress."
            }
            Self::Medium => {
                "MEDIUM RISK: some issues detected. Apply preventive measures and monitoring."
            }
            Self::Low => {
                "COMPLIANT: psychosocial health is at a good level. Continue regular monitoring."
            }
        }
    }

    pub const fn requires_action(self) -> bool {
        !matches!(self, Self::Low)
    }
}

/// Overall-index thresholds backing the rating decision tree.
#[derive(Debug, Clone, PartialEq)]
pub struct CompliancePolicy {
    critical_below: f64,
    high_below: f64,
    medium_below: f64,
}

impl CompliancePolicy {
    /// Thresholds must be finite and ascending.
    pub fn new(
        critical_below: f64,
        high_below: f64,
        medium_below: f64,
    ) -> Result<Self, ModelError> {
        let ordered = critical_below.is_finite()
            && high_below.is_finite()
            && medium_below.is_finite()
            && critical_below <= high_below
            && high_below <= medium_below;

        if !ordered {
            return Err(ModelError::ComplianceThresholds {
                critical_below,
                high_below,
                medium_below,
            });
        }

        Ok(Self {
            critical_below,
            high_below,
            medium_below,
        })
    }

    pub fn critical_below(&self) -> f64 {
        self.critical_below
    }

    pub fn high_below(&self) -> f64 {
        self.high_below
    }

    pub fn medium_below(&self) -> f64 {
        self.medium_below
    }

    pub fn assess(&self, scores: &[CategoryScore], overall_index: f64) -> ComplianceAssessment {
        let high_risk_categories = scores
            .iter()
            .filter(|score| score.level == ScoreLevel::HighRisk)
            .count();
        let risk_categories = scores
            .iter()
            .filter(|score| score.level == ScoreLevel::Risk)
            .count();

        let rating = self.rate(high_risk_categories, risk_categories, overall_index);

        ComplianceAssessment {
            rating,
            rating_label: rating.label(),
            requires_action: rating.requires_action(),
            notes: rating.notes(),
            high_risk_categories,
            risk_categories,
        }
    }

    pub fn rate(
        &self,
        high_risk_categories: usize,
        risk_categories: usize,
        overall_index: f64,
    ) -> ComplianceRating {
        if high_risk_categories >= 2 || overall_index < self.critical_below {
            ComplianceRating::Critical
        } else if high_risk_categories >= 1
            || risk_categories >= 2
            || overall_index < self.high_below
        {
            ComplianceRating::High
        } else if risk_categories >= 1 || overall_index < self.medium_below {
            ComplianceRating::Medium
        } else {
            ComplianceRating::Low
        }
    }
}

impl Default for CompliancePolicy {
    fn default() -> Self {
        Self {
            critical_below: DEFAULT_CRITICAL_INDEX,
            high_below: DEFAULT_HIGH_INDEX,
            medium_below: DEFAULT_MEDIUM_INDEX,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComplianceAssessment {
    pub rating: ComplianceRating,
    pub rating_label: &'static str,
    pub requires_action: bool,
    pub notes: &'static str,
    pub high_risk_categories: usize,
    pub risk_categories: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decision_tree_follows_category_counts_and_index() {
        let policy = CompliancePolicy::default();

        assert_eq!(policy.rate(2, 0, 4.5), ComplianceRating::Critical);
        assert_eq!(policy.rate(0, 0, 2.49), ComplianceRating::Critical);
        assert_eq!(policy.rate(1, 0, 4.5), ComplianceRating::High);
        assert_eq!(policy.rate(0, 2, 4.5), ComplianceRating::High);
        assert_eq!(policy.rate(0, 0, 2.5), ComplianceRating::High);
        assert_eq!(policy.rate(0, 0, 3.39), ComplianceRating::High);
        assert_eq!(policy.rate(0, 1, 4.5), ComplianceRating::Medium);
        assert_eq!(policy.rate(0, 0, 3.4), ComplianceRating::Medium);
        assert_eq!(policy.rate(0, 0, 3.99), ComplianceRating::Medium);
        assert_eq!(policy.rate(0, 0, 4.0), ComplianceRating::Low);
    }

    #[test]
    fn only_low_rating_skips_action() {
        assert!(!ComplianceRating::Low.requires_action());
        assert!(ComplianceRating::Medium.requires_action());
        assert!(ComplianceRating::High.requires_action());
        assert!(ComplianceRating::Critical.requires_action());
    }

    #[test]
    fn unordered_or_non_finite_thresholds_are_rejected() {
        match CompliancePolicy::new(3.5, 3.0, 4.0) {
            Err(ModelError::ComplianceThresholds {
                critical_below,
                high_below,
                ..
            }) => {
                assert_eq!(critical_below, 3.5);
                assert_eq!(high_below, 3.0);
            }
            other => panic!("expected threshold error, got {other:?}"),
        }

        assert!(matches!(
            CompliancePolicy::new(f64::NAN, 3.0, 4.0),
            Err(ModelError::ComplianceThresholds { .. })
        ));
    }

    #[test]
    fn ordered_thresholds_are_kept() {
        let policy = CompliancePolicy::new(2.0, 3.0, 3.5).expect("thresholds are ordered");
        assert_eq!(policy.critical_below(), 2.0);
        assert_eq!(policy.high_below(), 3.0);
        assert_eq!(policy.medium_below(), 3.5);

        let policy = CompliancePolicy::new(3.0, 3.0, 3.0).expect("equal thresholds allowed");
        assert_eq!(policy.rate(0, 0, 2.99), ComplianceRating::Critical);
        assert_eq!(policy.rate(0, 0, 3.0), ComplianceRating::Low);
    }
}
