use super::domain::Category;
use super::level::{ScoreLevel, TrafficLight};
use super::recommendation::RecommendationTier;
use super::scoring::CategoryScore;
use serde::Serialize;

/// Per-domain entry of the flattened summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DomainSummary {
    pub category: Category,
    pub label: &'static str,
    pub score: f64,
    pub weighted_score: f64,
    pub flag: TrafficLight,
}

/// Machine-readable digest of an interpretation, shaped for export.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InterpretationSummary {
    pub overall_index: f64,
    pub risk_level: ScoreLevel,
    pub risk_level_label: &'static str,
    pub domains: Vec<DomainSummary>,
    pub recommendation_level: RecommendationTier,
}

impl InterpretationSummary {
    pub(crate) fn build(
        scores: &[CategoryScore],
        overall_index: f64,
        overall_level: ScoreLevel,
        recommendation_level: RecommendationTier,
    ) -> Self {
        let domains = scores
            .iter()
            .map(|score| DomainSummary {
                category: score.category,
                label: score.label,
                score: score.average_score,
                weighted_score: score.weighted_score,
                flag: score.level.traffic_light(),
            })
            .collect();

        Self {
            overall_index,
            risk_level: overall_level,
            risk_level_label: overall_level.label(),
            domains,
            recommendation_level,
        }
    }

    pub fn domain(&self, category: Category) -> Option<&DomainSummary> {
        self.domains
            .iter()
            .find(|domain| domain.category == category)
    }
}
