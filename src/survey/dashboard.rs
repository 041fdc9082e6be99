//! Fleet-level aggregation across many respondents.

use crate::survey::import::ResponseSet;
use crate::survey::interpretation::{
    round2, Category, ComplianceRating, InterpretationError, QuestionRef, RecommendationTier,
    ScoreLevel, SocialRating, SurveyInterpretation, SurveyInterpreter,
};
use rayon::prelude::*;
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::info;

/// Interpretation of one respondent's response set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RespondentInterpretation {
    pub respondent_id: String,
    pub interpretation: SurveyInterpretation,
}

/// Interpret every response set against the same layout, in parallel.
///
/// Output order matches input order. The first structural error aborts the run.
pub fn interpret_all(
    interpreter: &SurveyInterpreter,
    sets: &[ResponseSet],
    questions: &[QuestionRef],
) -> Result<Vec<RespondentInterpretation>, InterpretationError> {
    sets.par_iter()
        .map(|set| {
            interpreter
                .analyze(&set.answers, questions)
                .map(|interpretation| RespondentInterpretation {
                    respondent_id: set.respondent_id.clone(),
                    interpretation,
                })
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryTrend {
    pub category: Category,
    pub label: &'static str,
    pub mean_score: f64,
    pub level: ScoreLevel,
    pub level_label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FleetSummary {
    pub respondents: usize,
    pub mean_overall_index: f64,
    pub mean_overall_level: ScoreLevel,
    pub overall_levels: BTreeMap<ScoreLevel, usize>,
    pub recommendation_tiers: BTreeMap<RecommendationTier, usize>,
    pub compliance_ratings: BTreeMap<ComplianceRating, usize>,
    pub social_ratings: BTreeMap<SocialRating, usize>,
    pub critical_respondents: Vec<String>,
    pub categories: Vec<CategoryTrend>,
}

impl FleetSummary {
    pub fn from_interpretations(results: &[RespondentInterpretation]) -> Self {
        // observe in parallel, merge in input order so float sums are reproducible
        let observed: Vec<Tally> = results.par_iter().map(Tally::observe).collect();
        let tally = observed.into_iter().fold(Tally::default(), Tally::merge);

        let summary = tally.finish();
        info!(
            respondents = summary.respondents,
            mean_overall_index = summary.mean_overall_index,
            critical = summary.critical_respondents.len(),
            "fleet dashboard aggregated"
        );
        summary
    }

    pub fn level_count(&self, level: ScoreLevel) -> usize {
        self.overall_levels.get(&level).copied().unwrap_or(0)
    }

    pub fn tier_count(&self, tier: RecommendationTier) -> usize {
        self.recommendation_tiers.get(&tier).copied().unwrap_or(0)
    }

    pub fn category(&self, category: Category) -> Option<&CategoryTrend> {
        self.categories
            .iter()
            .find(|trend| trend.category == category)
    }
}

/// Per-respondent aggregate, merged sequentially.
#[derive(Debug, Default)]
struct Tally {
    respondents: usize,
    index_sum: f64,
    category_sums: [f64; Category::COUNT],
    overall_levels: BTreeMap<ScoreLevel, usize>,
    recommendation_tiers: BTreeMap<RecommendationTier, usize>,
    compliance_ratings: BTreeMap<ComplianceRating, usize>,
    social_ratings: BTreeMap<SocialRating, usize>,
    critical_respondents: Vec<String>,
}

impl Tally {
    fn observe(result: &RespondentInterpretation) -> Self {
        let interpretation = &result.interpretation;
        let mut tally = Self {
            respondents: 1,
            index_sum: interpretation.overall_index,
            ..Self::default()
        };

        for score in &interpretation.categories {
            tally.category_sums[score.category.index()] += score.exact_average();
        }
        tally.overall_levels.insert(interpretation.overall_level, 1);
        tally
            .recommendation_tiers
            .insert(interpretation.recommendation, 1);
        tally
            .compliance_ratings
            .insert(interpretation.compliance.rating, 1);
        tally.social_ratings.insert(interpretation.social.rating, 1);
        if interpretation.has_critical_warning() {
            tally.critical_respondents.push(result.respondent_id.clone());
        }
        tally
    }

    fn merge(mut self, other: Self) -> Self {
        self.respondents += other.respondents;
        self.index_sum += other.index_sum;
        for (sum, value) in self.category_sums.iter_mut().zip(other.category_sums) {
            *sum += value;
        }
        merge_counts(&mut self.overall_levels, other.overall_levels);
        merge_counts(&mut self.recommendation_tiers, other.recommendation_tiers);
        merge_counts(&mut self.compliance_ratings, other.compliance_ratings);
        merge_counts(&mut self.social_ratings, other.social_ratings);
        self.critical_respondents.extend(other.critical_respondents);
        self
    }

    fn finish(self) -> FleetSummary {
        let mean = |sum: f64| {
            if self.respondents == 0 {
                0.0
            } else {
                sum / self.respondents as f64
            }
        };

        let mean_overall_index = round2(mean(self.index_sum));
        let categories = Category::ordered()
            .into_iter()
            .map(|category| {
                let exact = mean(self.category_sums[category.index()]);
                let level = ScoreLevel::classify(exact);
                CategoryTrend {
                    category,
                    label: category.label(),
                    mean_score: round2(exact),
                    level,
                    level_label: level.label(),
                }
            })
            .collect();

        FleetSummary {
            respondents: self.respondents,
            mean_overall_index,
            mean_overall_level: ScoreLevel::classify(mean_overall_index),
            overall_levels: seeded(
                [
                    ScoreLevel::Healthy,
                    ScoreLevel::Attention,
                    ScoreLevel::Risk,
                    ScoreLevel::HighRisk,
                ],
                self.overall_levels,
            ),
            recommendation_tiers: seeded(RecommendationTier::ordered(), self.recommendation_tiers),
            compliance_ratings: seeded(
                [
                    ComplianceRating::Low,
                    ComplianceRating::Medium,
                    ComplianceRating::High,
                    ComplianceRating::Critical,
                ],
                self.compliance_ratings,
            ),
            social_ratings: seeded(
                [
                    SocialRating::A,
                    SocialRating::B,
                    SocialRating::C,
                    SocialRating::D,
                    SocialRating::F,
                ],
                self.social_ratings,
            ),
            critical_respondents: self.critical_respondents,
            categories,
        }
    }
}

fn merge_counts<K: Ord>(into: &mut BTreeMap<K, usize>, from: BTreeMap<K, usize>) {
    for (key, count) in from {
        *into.entry(key).or_insert(0) += count;
    }
}

/// Every bucket present, zero when nothing landed in it.
fn seeded<K: Ord, const N: usize>(
    keys: [K; N],
    counts: BTreeMap<K, usize>,
) -> BTreeMap<K, usize> {
    let mut all: BTreeMap<K, usize> = keys.into_iter().map(|key| (key, 0)).collect();
    merge_counts(&mut all, counts);
    all
}
