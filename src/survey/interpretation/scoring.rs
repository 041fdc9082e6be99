use super::domain::{Category, CategoryDefinition, DomainModel, ImpactClass};
use super::level::ScoreLevel;
use super::{narrative, round2, InterpretationError};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use tracing::debug;

/// Lowest and highest answer accepted on the ordinal scale.
pub const MIN_ANSWER: u8 = 1;
pub const MAX_ANSWER: u8 = 5;

/// Answers at or below this value count towards critical/risk item tallies.
pub const LOW_ANSWER_THRESHOLD: u8 = 2;

/// A question slot in a survey layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionRef {
    pub id: String,
    /// 1-based position within the survey.
    pub display_order: u32,
}

impl QuestionRef {
    pub fn new(id: impl Into<String>, display_order: u32) -> Self {
        Self {
            id: id.into(),
            display_order,
        }
    }
}

/// A raw answer as submitted by a respondent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    pub question_id: String,
    pub value: String,
}

impl Answer {
    pub fn new(question_id: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            question_id: question_id.into(),
            value: value.into(),
        }
    }
}

/// Parse a raw answer into the 1-5 scale. Anything else is "no answer".
///
/// Only whole integers are accepted: `"4.0"` and `"3.5"` are missing answers,
/// not truncated to 4 and 3.
pub fn parse_answer(raw: &str) -> Option<u8> {
    raw.trim()
        .parse::<u8>()
        .ok()
        .filter(|value| (MIN_ANSWER..=MAX_ANSWER).contains(value))
}

/// Contribution of one answer to the impact-adjusted average.
///
/// Protective items use a neutral factor and are not reverse-scored, so a low
/// answer on a protective item is not penalised relative to its intent.
pub fn impact_adjusted_value(answer: u8, impact: ImpactClass) -> f64 {
    f64::from(answer) * impact.multiplier()
}

/// Valid answers keyed by display order.
#[derive(Debug, Default)]
pub(crate) struct AnswerSheet {
    answers: BTreeMap<u32, u8>,
}

impl AnswerSheet {
    pub(crate) fn build(
        responses: &[Answer],
        questions: &[QuestionRef],
    ) -> Result<Self, InterpretationError> {
        if questions.is_empty() {
            return Err(InterpretationError::MissingLayout);
        }

        let mut layout: HashMap<&str, u32> = HashMap::with_capacity(questions.len());
        let mut seen_orders: HashMap<u32, &str> = HashMap::with_capacity(questions.len());
        for question in questions {
            if let Some(first) = seen_orders.insert(question.display_order, &question.id) {
                return Err(InterpretationError::DuplicateDisplayOrder {
                    display_order: question.display_order,
                    first: first.to_string(),
                    second: question.id.clone(),
                });
            }
            layout.insert(question.id.as_str(), question.display_order);
        }

        let mut answers = BTreeMap::new();
        let mut dropped = 0usize;
        for response in responses {
            let Some(display_order) = layout.get(response.question_id.as_str()) else {
                dropped += 1;
                continue;
            };

            match parse_answer(&response.value) {
                // later answers for the same slot replace earlier ones
                Some(value) => {
                    answers.insert(*display_order, value);
                }
                None => dropped += 1,
            }
        }

        if dropped > 0 {
            debug!(dropped, "ignored responses without a valid 1-5 answer");
        }

        Ok(Self { answers })
    }

    /// Answer for a 0-based survey position.
    pub(crate) fn at_position(&self, position: usize) -> Option<u8> {
        let display_order = u32::try_from(position + 1).ok()?;
        self.answers.get(&display_order).copied()
    }

    pub(crate) fn len(&self) -> usize {
        self.answers.len()
    }

    /// Mean of every valid answer, including slots outside the categories.
    pub(crate) fn overall_average(&self) -> f64 {
        if self.answers.is_empty() {
            return 0.0;
        }
        let sum: u32 = self.answers.values().map(|value| u32::from(*value)).sum();
        f64::from(sum) / self.answers.len() as f64
    }
}

/// Item-level tallies collected while scoring a category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ImpactCounts {
    /// Critical items answered at or below the low-answer threshold.
    pub critical: usize,
    /// Risk items answered at or below the low-answer threshold.
    pub risk: usize,
    /// Protective items answered at all.
    pub protective: usize,
}

/// Scored view of one category for a single response set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryScore {
    pub category: Category,
    pub label: &'static str,
    pub average_score: f64,
    pub weighted_score: f64,
    pub level: ScoreLevel,
    pub level_label: &'static str,
    pub color: &'static str,
    pub icon: &'static str,
    pub interpretation: &'static str,
    pub analysis: &'static str,
    pub domain_weight: f64,
    pub answered: usize,
    pub impact_items: ImpactCounts,
    #[serde(skip)]
    exact_average: f64,
}

impl CategoryScore {
    /// Unrounded raw average, used for aggregation before presentation rounding.
    pub fn exact_average(&self) -> f64 {
        self.exact_average
    }

    #[cfg(test)]
    pub(crate) fn fixture(
        category: Category,
        exact_average: f64,
        critical: usize,
        risk: usize,
    ) -> Self {
        let level = ScoreLevel::classify(exact_average);
        Self {
            category,
            label: category.label(),
            average_score: round2(exact_average),
            weighted_score: round2(exact_average),
            level,
            level_label: level.label(),
            color: level.color(),
            icon: level.icon(),
            interpretation: narrative::category_interpretation(category, level),
            analysis: narrative::category_analysis(category, level),
            domain_weight: 0.2,
            answered: super::domain::ITEMS_PER_CATEGORY,
            impact_items: ImpactCounts {
                critical,
                risk,
                protective: 0,
            },
            exact_average,
        }
    }
}

pub(crate) fn score_categories(model: &DomainModel, sheet: &AnswerSheet) -> Vec<CategoryScore> {
    model
        .categories()
        .iter()
        .map(|definition| score_category(definition, model, sheet))
        .collect()
}

fn score_category(
    definition: &CategoryDefinition,
    model: &DomainModel,
    sheet: &AnswerSheet,
) -> CategoryScore {
    let mut raw_sum = 0u32;
    let mut adjusted_sum = 0.0f64;
    let mut answered = 0usize;
    let mut counts = ImpactCounts::default();

    for position in definition.positions() {
        let Some(answer) = sheet.at_position(position) else {
            continue;
        };

        let impact = model.impact_for(position);
        raw_sum += u32::from(answer);
        adjusted_sum += impact_adjusted_value(answer, impact);
        answered += 1;

        match impact {
            ImpactClass::Critical if answer <= LOW_ANSWER_THRESHOLD => counts.critical += 1,
            ImpactClass::Risk if answer <= LOW_ANSWER_THRESHOLD => counts.risk += 1,
            ImpactClass::Protective => counts.protective += 1,
            _ => {}
        }
    }

    let (exact_average, adjusted_average) = if answered > 0 {
        (
            f64::from(raw_sum) / answered as f64,
            adjusted_sum / answered as f64,
        )
    } else {
        (0.0, 0.0)
    };

    let level = ScoreLevel::classify(exact_average);

    CategoryScore {
        category: definition.category,
        label: definition.label,
        average_score: round2(exact_average),
        weighted_score: round2(adjusted_average),
        level,
        level_label: level.label(),
        color: level.color(),
        icon: level.icon(),
        interpretation: narrative::category_interpretation(definition.category, level),
        analysis: narrative::category_analysis(definition.category, level),
        domain_weight: definition.weight,
        answered,
        impact_items: counts,
        exact_average,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_answer_accepts_only_the_ordinal_scale() {
        assert_eq!(parse_answer("1"), Some(1));
        assert_eq!(parse_answer(" 5 "), Some(5));
        assert_eq!(parse_answer("0"), None);
        assert_eq!(parse_answer("6"), None);
        assert_eq!(parse_answer("-2"), None);
        assert_eq!(parse_answer("3.5"), None);
        assert_eq!(parse_answer("4.0"), None);
        assert_eq!(parse_answer("agree"), None);
        assert_eq!(parse_answer(""), None);
    }

    #[test]
    fn impact_adjusted_value_applies_literal_multipliers() {
        assert_eq!(impact_adjusted_value(4, ImpactClass::Neutral), 4.0);
        assert_eq!(impact_adjusted_value(4, ImpactClass::Protective), 4.0);
        assert!((impact_adjusted_value(2, ImpactClass::Risk) - 2.6).abs() < 1e-12);
        assert!((impact_adjusted_value(5, ImpactClass::Critical) - 8.0).abs() < 1e-12);
    }

    #[test]
    fn protective_items_are_not_reverse_scored() {
        // a low protective answer stays low in the adjusted score
        assert_eq!(impact_adjusted_value(1, ImpactClass::Protective), 1.0);
        assert!(
            impact_adjusted_value(1, ImpactClass::Protective)
                < impact_adjusted_value(5, ImpactClass::Protective)
        );
    }

    #[test]
    fn answer_sheet_rejects_missing_layout() {
        let responses = vec![Answer::new("q1", "4")];
        match AnswerSheet::build(&responses, &[]) {
            Err(InterpretationError::MissingLayout) => {}
            other => panic!("expected missing layout, got {other:?}"),
        }
    }

    #[test]
    fn answer_sheet_rejects_duplicate_display_orders() {
        let questions = vec![QuestionRef::new("q1", 1), QuestionRef::new("q2", 1)];
        match AnswerSheet::build(&[], &questions) {
            Err(InterpretationError::DuplicateDisplayOrder {
                display_order,
                first,
                second,
            }) => {
                assert_eq!(display_order, 1);
                assert_eq!(first, "q1");
                assert_eq!(second, "q2");
            }
            other => panic!("expected duplicate display order, got {other:?}"),
        }
    }

    #[test]
    fn answer_sheet_skips_unknown_questions_and_keeps_latest_answer() {
        let questions = vec![QuestionRef::new("q1", 1), QuestionRef::new("q2", 2)];
        let responses = vec![
            Answer::new("q1", "2"),
            Answer::new("missing", "5"),
            Answer::new("q2", "nope"),
            Answer::new("q1", "4"),
        ];

        let sheet = AnswerSheet::build(&responses, &questions).expect("sheet builds");

        assert_eq!(sheet.len(), 1);
        assert_eq!(sheet.at_position(0), Some(4));
        assert_eq!(sheet.at_position(1), None);
    }
}
