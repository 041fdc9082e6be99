use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Number of survey positions assigned to each category.
pub const ITEMS_PER_CATEGORY: usize = 12;

/// Number of positions covered by the fixed category layout.
pub const CANONICAL_LAYOUT_SIZE: usize = Category::COUNT * ITEMS_PER_CATEGORY;

/// Allowed drift of the summed domain weights away from 1.0.
pub const WEIGHT_TOLERANCE: f64 = 1e-9;

/// Domain weights in category order.
pub const STANDARD_DOMAIN_WEIGHTS: [f64; Category::COUNT] = [0.30, 0.25, 0.15, 0.15, 0.15];

/// The five psychosocial domains, in survey order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    MentalHealthStress,
    WorkplaceEnvironment,
    PersonalState,
    BehaviorInteraction,
    OverallWellbeing,
}

impl Category {
    pub const COUNT: usize = 5;

    pub const fn ordered() -> [Self; Self::COUNT] {
        [
            Self::MentalHealthStress,
            Self::WorkplaceEnvironment,
            Self::PersonalState,
            Self::BehaviorInteraction,
            Self::OverallWellbeing,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::MentalHealthStress => "Mental Health & Stress",
            Self::WorkplaceEnvironment => "Workplace Psychological Environment",
            Self::PersonalState => "Personal Psychological State",
            Self::BehaviorInteraction => "Behavior & Interaction Style",
            Self::OverallWellbeing => "Overall Wellbeing & Work-Life Balance",
        }
    }

    /// Stable machine key used in exports.
    pub const fn key(self) -> &'static str {
        match self {
            Self::MentalHealthStress => "mental_health_stress",
            Self::WorkplaceEnvironment => "workplace_environment",
            Self::PersonalState => "personal_state",
            Self::BehaviorInteraction => "behavior_interaction",
            Self::OverallWellbeing => "overall_wellbeing",
        }
    }

    pub const fn index(self) -> usize {
        match self {
            Self::MentalHealthStress => 0,
            Self::WorkplaceEnvironment => 1,
            Self::PersonalState => 2,
            Self::BehaviorInteraction => 3,
            Self::OverallWellbeing => 4,
        }
    }

    /// 0-based survey positions belonging to this category.
    pub const fn positions(self) -> RangeInclusive<usize> {
        let start = self.index() * ITEMS_PER_CATEGORY;
        start..=start + ITEMS_PER_CATEGORY - 1
    }
}

/// Static weighting tag attached to each survey position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImpactClass {
    Protective,
    Neutral,
    Risk,
    Critical,
}

impl ImpactClass {
    pub const fn multiplier(self) -> f64 {
        match self {
            Self::Protective | Self::Neutral => 1.0,
            Self::Risk => 1.3,
            Self::Critical => 1.6,
        }
    }
}

use ImpactClass::{Critical as C, Neutral as N, Protective as P, Risk as R};

/// Impact class per 0-based position, twelve rows per category.
#[rustfmt::skip]
const STANDARD_IMPACT_TABLE: [ImpactClass; CANONICAL_LAYOUT_SIZE] = [
    // Mental Health & Stress
    R, R, R, P, C, P, R, P, C, P, P, C,
    // Workplace Psychological Environment
    P, P, P, R, P, C, P, N, P, P, P, C,
    // Personal Psychological State
    P, P, P, P, P, P, P, P, R, P, P, R,
    // Behavior & Interaction Style
    P, P, R, P, P, R, P, P, P, P, P, C,
    // Overall Wellbeing & Work-Life Balance
    P, P, P, C, P, C, P, P, P, P, R, C,
];

/// Errors raised while assembling a domain model.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("domain weights must sum to 1.0, found {sum}")]
    WeightSum { sum: f64 },
    #[error("weight for {category} must be a finite, non-negative number (found {weight})")]
    InvalidWeight {
        category: &'static str,
        weight: f64,
    },
    #[error("impact table must classify {expected} positions, found {found}")]
    ImpactTableSize { expected: usize, found: usize },
    #[error(
        "compliance thresholds must be finite and ascending (found {critical_below}, {high_below}, {medium_below})"
    )]
    ComplianceThresholds {
        critical_below: f64,
        high_below: f64,
        medium_below: f64,
    },
}

/// One category with its position range and domain weight.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryDefinition {
    pub category: Category,
    pub label: &'static str,
    pub start: usize,
    pub end: usize,
    pub weight: f64,
}

impl CategoryDefinition {
    pub fn positions(&self) -> RangeInclusive<usize> {
        self.start..=self.end
    }
}

/// Validated category layout and impact table shared by every analysis.
#[derive(Debug, Clone)]
pub struct DomainModel {
    categories: Vec<CategoryDefinition>,
    impact: Vec<ImpactClass>,
}

impl DomainModel {
    pub fn standard() -> Result<Self, ModelError> {
        Self::with_weights(STANDARD_DOMAIN_WEIGHTS)
    }

    /// Build the standard layout with custom domain weights.
    ///
    /// Weight sets that do not sum to 1.0 are rejected rather than normalised.
    pub fn with_weights(weights: [f64; Category::COUNT]) -> Result<Self, ModelError> {
        Self::from_parts(weights, STANDARD_IMPACT_TABLE.to_vec())
    }

    pub(crate) fn from_parts(
        weights: [f64; Category::COUNT],
        impact: Vec<ImpactClass>,
    ) -> Result<Self, ModelError> {
        if impact.len() != CANONICAL_LAYOUT_SIZE {
            return Err(ModelError::ImpactTableSize {
                expected: CANONICAL_LAYOUT_SIZE,
                found: impact.len(),
            });
        }

        let categories = Category::ordered()
            .into_iter()
            .zip(weights)
            .map(|(category, weight)| {
                if !weight.is_finite() || weight < 0.0 {
                    return Err(ModelError::InvalidWeight {
                        category: category.label(),
                        weight,
                    });
                }
                let positions = category.positions();
                Ok(CategoryDefinition {
                    category,
                    label: category.label(),
                    start: *positions.start(),
                    end: *positions.end(),
                    weight,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let sum: f64 = categories.iter().map(|definition| definition.weight).sum();
        if (sum - 1.0).abs() > WEIGHT_TOLERANCE {
            return Err(ModelError::WeightSum { sum });
        }

        Ok(Self { categories, impact })
    }

    pub fn categories(&self) -> &[CategoryDefinition] {
        &self.categories
    }

    /// Impact class for a 0-based position; anything outside the table is neutral.
    pub fn impact_for(&self, position: usize) -> ImpactClass {
        self.impact
            .get(position)
            .copied()
            .unwrap_or(ImpactClass::Neutral)
    }

    pub fn canonical_size(&self) -> usize {
        self.impact.len()
    }
}
