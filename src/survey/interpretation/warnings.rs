//! Early-warning rules evaluated over scored categories.
//!
//! Per-category rules short-circuit in a fixed precedence; the systemic rules are
//! evaluated independently afterwards and appended in rule order.

use super::domain::Category;
use super::scoring::CategoryScore;
use serde::{Deserialize, Serialize};

const CRITICAL_ITEM_TRIGGER: usize = 2;
const RISK_ITEM_TRIGGER: usize = 3;
const EXTREME_RISK_CEILING: f64 = 2.0;
const HIGH_RISK_CEILING: f64 = 2.6;
const ELEVATED_RISK_CEILING: f64 = 3.4;
const MONITOR_CEILING: f64 = 4.0;
const SYSTEMIC_CEILING: f64 = 2.5;
const BURNOUT_INDEX_CEILING: f64 = 3.0;

pub const SYSTEMIC_RISK_LABEL: &str = "Systemic risk";
pub const BURNOUT_RISK_LABEL: &str = "Burnout risk";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningSeverity {
    Info,
    Warning,
    Critical,
}

impl WarningSeverity {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Info => "Info",
            Self::Warning => "Warning",
            Self::Critical => "Critical",
        }
    }

    pub const fn action_required(self) -> &'static str {
        match self {
            Self::Critical => {
                "Immediate action: professional psychological support, 1-on-1 meeting, risk management plan."
            }
            Self::Warning => {
                "Medium-term: counselling, improved working conditions, increased monitoring."
            }
            Self::Info => "Monitor: regular monitoring, preventive measures, offer support.",
        }
    }
}

/// The rule that produced a warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningRule {
    CriticalItems,
    ExtremeRisk,
    HighRisk,
    RiskItems,
    ElevatedRisk,
    Monitor,
    SystemicStressCulture,
    BurnoutSignals,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EarlyWarning {
    pub rule: WarningRule,
    /// Category the warning concerns; `None` for cross-category rules.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    pub category_label: &'static str,
    pub severity: WarningSeverity,
    pub message: String,
    pub action_required: &'static str,
}

impl EarlyWarning {
    fn new(
        rule: WarningRule,
        category: Option<Category>,
        category_label: &'static str,
        severity: WarningSeverity,
        message: String,
    ) -> Self {
        Self {
            rule,
            category,
            category_label,
            severity,
            message,
            action_required: severity.action_required(),
        }
    }
}

/// Per-category warnings in category order followed by systemic warnings.
pub(crate) fn collect_warnings(scores: &[CategoryScore], overall_index: f64) -> Vec<EarlyWarning> {
    let mut warnings: Vec<EarlyWarning> = scores.iter().filter_map(detect_category_warning).collect();
    warnings.extend(detect_systemic_warnings(scores, overall_index));
    warnings
}

pub(crate) fn detect_category_warning(score: &CategoryScore) -> Option<EarlyWarning> {
    let label = score.label;
    let average = score.exact_average();
    let critical_items = score.impact_items.critical;
    let risk_items = score.impact_items.risk;

    let (rule, severity, message) = if critical_items >= CRITICAL_ITEM_TRIGGER {
        (
            WarningRule::CriticalItems,
            WarningSeverity::Critical,
            format!(
                "IMMEDIATE FLAG: {critical_items} critical indicators in {label} are at a very low level. Immediate action required."
            ),
        )
    } else if average < EXTREME_RISK_CEILING {
        (
            WarningRule::ExtremeRisk,
            WarningSeverity::Critical,
            format!(
                "URGENT: extremely high risk detected in {label} ({average:.2}). Direct support required."
            ),
        )
    } else if average < HIGH_RISK_CEILING {
        (
            WarningRule::HighRisk,
            WarningSeverity::Critical,
            format!(
                "ALERT: high risk in {label} ({average:.2}). Professional assessment required."
            ),
        )
    } else if risk_items >= RISK_ITEM_TRIGGER {
        (
            WarningRule::RiskItems,
            WarningSeverity::Warning,
            format!(
                "CAUTION: {risk_items} risk indicators detected in {label}. Take preventive measures."
            ),
        )
    } else if average < ELEVATED_RISK_CEILING {
        (
            WarningRule::ElevatedRisk,
            WarningSeverity::Warning,
            format!("CAUTION: elevated risk in {label} ({average:.2}). Take preventive measures."),
        )
    } else if average < MONITOR_CEILING {
        (
            WarningRule::Monitor,
            WarningSeverity::Info,
            format!("MONITOR: slight weakening in {label} ({average:.2}). Keep under observation."),
        )
    } else {
        return None;
    };

    Some(EarlyWarning::new(
        rule,
        Some(score.category),
        label,
        severity,
        message,
    ))
}

pub(crate) fn detect_systemic_warnings(
    scores: &[CategoryScore],
    overall_index: f64,
) -> Vec<EarlyWarning> {
    let mut warnings = Vec::new();

    let stress = find(scores, Category::MentalHealthStress);
    let culture = find(scores, Category::WorkplaceEnvironment);
    if let (Some(stress), Some(culture)) = (stress, culture) {
        if stress.exact_average() <= SYSTEMIC_CEILING && culture.exact_average() <= SYSTEMIC_CEILING
        {
            warnings.push(EarlyWarning::new(
                WarningRule::SystemicStressCulture,
                None,
                SYSTEMIC_RISK_LABEL,
                WarningSeverity::Critical,
                format!(
                    "SYSTEMIC RISK: both {} and {} are very low. Organisation-wide measures required.",
                    stress.label, culture.label
                ),
            ));
        }
    }

    let burnout_signals = scores
        .iter()
        .any(|score| score.impact_items.critical >= CRITICAL_ITEM_TRIGGER);
    if burnout_signals && overall_index < BURNOUT_INDEX_CEILING {
        warnings.push(EarlyWarning::new(
            WarningRule::BurnoutSignals,
            None,
            BURNOUT_RISK_LABEL,
            WarningSeverity::Critical,
            "HIGH BURNOUT RISK: multiple critical burnout signals detected.".to_string(),
        ));
    }

    warnings
}

fn find(scores: &[CategoryScore], category: Category) -> Option<&CategoryScore> {
    scores.iter().find(|score| score.category == category)
}
