//! Survey interpretation engine.
//!
//! Turns one respondent's 1-5 answers into category scores, severity levels, early
//! warnings, a combined stress/culture diagnosis, a compliance rating and a social
//! rating. Every analysis is a pure computation over its inputs; the only
//! non-deterministic field is the `generated_at` timestamp.

mod compliance;
mod diagnosis;
pub mod domain;
mod level;
mod narrative;
mod recommendation;
mod scoring;
mod social;
mod summary;
mod warnings;

#[cfg(test)]
mod tests;

pub use compliance::{ComplianceAssessment, CompliancePolicy, ComplianceRating};
pub use diagnosis::{diagnose, CombinedDiagnosis, DiagnosisSeverity};
pub use domain::{Category, DomainModel, ImpactClass, ModelError};
pub use level::{ScoreLevel, TrafficLight};
pub use recommendation::RecommendationTier;
pub use scoring::{
    impact_adjusted_value, parse_answer, Answer, CategoryScore, ImpactCounts, QuestionRef,
};
pub use social::{SocialMetrics, SocialRating};
pub use summary::{DomainSummary, InterpretationSummary};
pub use warnings::{EarlyWarning, WarningRule, WarningSeverity};

use chrono::{DateTime, Utc};
use scoring::AnswerSheet;
use serde::Serialize;
use tracing::{debug, warn};

/// Structural problems with the inputs of a single analysis.
#[derive(Debug, thiserror::Error)]
pub enum InterpretationError {
    #[error("question layout is missing")]
    MissingLayout,
    #[error("display order {display_order} is used by both '{first}' and '{second}'")]
    DuplicateDisplayOrder {
        display_order: u32,
        first: String,
        second: String,
    },
}

/// Round for presentation; only applied after aggregation.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Stateless interpreter bound to a validated domain model.
#[derive(Debug, Clone)]
pub struct SurveyInterpreter {
    model: DomainModel,
    compliance: CompliancePolicy,
}

impl SurveyInterpreter {
    pub fn new(model: DomainModel) -> Self {
        Self {
            model,
            compliance: CompliancePolicy::default(),
        }
    }

    /// Interpreter over the standard layout and weights.
    pub fn standard() -> Result<Self, ModelError> {
        DomainModel::standard().map(Self::new)
    }

    pub fn with_compliance_policy(mut self, policy: CompliancePolicy) -> Self {
        self.compliance = policy;
        self
    }

    pub fn model(&self) -> &DomainModel {
        &self.model
    }

    pub fn analyze(
        &self,
        responses: &[Answer],
        questions: &[QuestionRef],
    ) -> Result<SurveyInterpretation, InterpretationError> {
        if questions.len() > self.model.canonical_size() {
            warn!(
                slots = questions.len(),
                canonical = self.model.canonical_size(),
                "question layout exceeds the canonical size; extra slots are not scored"
            );
        }

        let sheet = AnswerSheet::build(responses, questions)?;
        let categories = scoring::score_categories(&self.model, &sheet);

        let overall_index = round2(
            categories
                .iter()
                .map(|score| score.exact_average() * score.domain_weight)
                .sum(),
        );
        let overall_level = ScoreLevel::classify(overall_index);

        let combined_diagnosis = diagnosis::combined_diagnosis(&categories);
        let early_warnings = warnings::collect_warnings(&categories, overall_index);
        let recommendation = recommendation::determine(&early_warnings, overall_index);
        let compliance = self.compliance.assess(&categories, overall_index);
        let social = social::calculate(&categories, overall_index);
        let summary =
            InterpretationSummary::build(&categories, overall_index, overall_level, recommendation);

        debug!(
            answered = sheet.len(),
            overall_index,
            warnings = early_warnings.len(),
            recommendation = recommendation.key(),
            "survey interpreted"
        );

        Ok(SurveyInterpretation {
            overall_score: round2(sheet.overall_average()),
            overall_index,
            overall_level,
            overall_level_label: overall_level.label(),
            overall_interpretation: narrative::overall_interpretation(overall_level),
            categories,
            combined_diagnosis,
            early_warnings,
            compliance,
            social,
            recommendation,
            summary,
            generated_at: Utc::now(),
        })
    }
}

/// Complete interpretation of one response set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SurveyInterpretation {
    pub overall_score: f64,
    pub overall_index: f64,
    pub overall_level: ScoreLevel,
    pub overall_level_label: &'static str,
    pub overall_interpretation: &'static str,
    pub categories: Vec<CategoryScore>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub combined_diagnosis: Option<CombinedDiagnosis>,
    pub early_warnings: Vec<EarlyWarning>,
    pub compliance: ComplianceAssessment,
    pub social: SocialMetrics,
    pub recommendation: RecommendationTier,
    pub summary: InterpretationSummary,
    pub generated_at: DateTime<Utc>,
}

impl SurveyInterpretation {
    pub fn category(&self, category: Category) -> Option<&CategoryScore> {
        self.categories
            .iter()
            .find(|score| score.category == category)
    }

    pub fn has_critical_warning(&self) -> bool {
        self.early_warnings
            .iter()
            .any(|warning| warning.severity == WarningSeverity::Critical)
    }
}
