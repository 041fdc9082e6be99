use super::warnings::{EarlyWarning, WarningSeverity};
use serde::{Deserialize, Serialize};

const IMMEDIATE_INDEX_CEILING: f64 = 2.5;
const ACTION_INDEX_CEILING: f64 = 3.4;
const MONITOR_INDEX_CEILING: f64 = 4.0;

/// Single overall urgency derived from warnings and the weighted index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RecommendationTier {
    None,
    Monitor,
    ActionNeeded,
    ImmediateAction,
}

impl RecommendationTier {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::None,
            Self::Monitor,
            Self::ActionNeeded,
            Self::ImmediateAction,
        ]
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Monitor => "monitor",
            Self::ActionNeeded => "action-needed",
            Self::ImmediateAction => "immediate-action",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::None => "No action required",
            Self::Monitor => "Monitor",
            Self::ActionNeeded => "Action needed",
            Self::ImmediateAction => "Immediate action",
        }
    }
}

pub(crate) fn determine(warnings: &[EarlyWarning], overall_index: f64) -> RecommendationTier {
    let critical = count(warnings, WarningSeverity::Critical);
    let warning = count(warnings, WarningSeverity::Warning);

    if critical > 0 || overall_index < IMMEDIATE_INDEX_CEILING {
        RecommendationTier::ImmediateAction
    } else if warning >= 2 || overall_index < ACTION_INDEX_CEILING {
        RecommendationTier::ActionNeeded
    } else if !warnings.is_empty() || overall_index < MONITOR_INDEX_CEILING {
        RecommendationTier::Monitor
    } else {
        RecommendationTier::None
    }
}

fn count(warnings: &[EarlyWarning], severity: WarningSeverity) -> usize {
    warnings
        .iter()
        .filter(|warning| warning.severity == severity)
        .count()
}
