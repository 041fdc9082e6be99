use super::domain::Category;
use super::round2;
use super::scoring::{CategoryScore, MAX_ANSWER};
use serde::{Deserialize, Serialize};

/// Five-band letter rating for the social/wellbeing composite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SocialRating {
    A,
    B,
    C,
    D,
    F,
}

impl SocialRating {
    /// Inclusive lower bounds on the 0-100 composite.
    pub fn from_composite(composite: f64) -> Self {
        if composite >= 85.0 {
            Self::A
        } else if composite >= 70.0 {
            Self::B
        } else if composite >= 55.0 {
            Self::C
        } else if composite >= 40.0 {
            Self::D
        } else {
            Self::F
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::F => "F",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SocialMetrics {
    pub social_score: f64,
    pub wellbeing_index: f64,
    pub diversity_inclusion_score: f64,
    pub psychological_safety_score: f64,
    pub composite: f64,
    pub rating: SocialRating,
}

/// Scale a 1-5 average onto 0-100.
fn to_percent(score: f64) -> f64 {
    score * 100.0 / f64::from(MAX_ANSWER)
}

pub(crate) fn calculate(scores: &[CategoryScore], overall_index: f64) -> SocialMetrics {
    let average_of = |category: Category| {
        scores
            .iter()
            .find(|score| score.category == category)
            .map(CategoryScore::exact_average)
    };

    let social_score = to_percent(overall_index);
    let wellbeing_index = average_of(Category::OverallWellbeing)
        .map(to_percent)
        .unwrap_or(0.0);
    let diversity_inclusion_score = match (
        average_of(Category::WorkplaceEnvironment),
        average_of(Category::BehaviorInteraction),
    ) {
        (Some(culture), Some(behavior)) => (culture + behavior) * 100.0 / 10.0,
        _ => 0.0,
    };
    let psychological_safety_score = average_of(Category::WorkplaceEnvironment)
        .map(to_percent)
        .unwrap_or(0.0);

    // banded before rounding; only the reported value is rounded
    let composite =
        (social_score + wellbeing_index + diversity_inclusion_score + psychological_safety_score)
            / 4.0;

    SocialMetrics {
        social_score: round2(social_score),
        wellbeing_index: round2(wellbeing_index),
        diversity_inclusion_score: round2(diversity_inclusion_score),
        psychological_safety_score: round2(psychological_safety_score),
        composite: round2(composite),
        rating: SocialRating::from_composite(composite),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bands_use_inclusive_lower_bounds() {
        assert_eq!(SocialRating::from_composite(100.0), SocialRating::A);
        assert_eq!(SocialRating::from_composite(85.0), SocialRating::A);
        assert_eq!(SocialRating::from_composite(84.99), SocialRating::B);
        assert_eq!(SocialRating::from_composite(70.0), SocialRating::B);
        assert_eq!(SocialRating::from_composite(69.99), SocialRating::C);
        assert_eq!(SocialRating::from_composite(55.0), SocialRating::C);
        assert_eq!(SocialRating::from_composite(40.0), SocialRating::D);
        assert_eq!(SocialRating::from_composite(39.99), SocialRating::F);
        assert_eq!(SocialRating::from_composite(0.0), SocialRating::F);
    }

    #[test]
    fn percent_scaling_is_exact_for_half_points() {
        assert_eq!(to_percent(3.5), 70.0);
        assert_eq!(to_percent(4.2), 84.0);
        assert_eq!(to_percent(5.0), 100.0);
    }
}
