use super::domain::Category;
use super::level::ScoreLevel;
use super::scoring::CategoryScore;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosisSeverity {
    Critical,
    High,
    Moderate,
    Healthy,
}

impl DiagnosisSeverity {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Critical => "Critical",
            Self::High => "High",
            Self::Moderate => "Moderate",
            Self::Healthy => "Healthy",
        }
    }
}

/// Joint reading of the stress and culture categories.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CombinedDiagnosis {
    pub stress_level: ScoreLevel,
    pub culture_level: ScoreLevel,
    pub diagnosis: &'static str,
    pub label: &'static str,
    pub severity: DiagnosisSeverity,
    pub icon: &'static str,
    pub recommendation: &'static str,
}

struct MatrixEntry {
    key: &'static str,
    diagnosis: &'static str,
    label: &'static str,
    severity: DiagnosisSeverity,
    icon: &'static str,
    recommendation: &'static str,
}

static MATRIX: [MatrixEntry; 10] = [
    MatrixEntry {
        key: "high-risk_high-risk",
        diagnosis: "Systemic burnout risk",
        label: "Systemic burnout risk",
        severity: DiagnosisSeverity::Critical,
        icon: "🔴🔴",
        recommendation: "Very fragile situation: both personal wellbeing and organisational culture show serious problems. An urgent professional programme is essential.",
    },
    MatrixEntry {
        key: "high-risk_healthy",
        diagnosis: "Individual overload",
        label: "Individual overload",
        severity: DiagnosisSeverity::High,
        icon: "🔴🟢",
        recommendation: "The environment is safe but the individual is overloaded. Recovery, rest and a reduced workload are needed.",
    },
    MatrixEntry {
        key: "healthy_high-risk",
        diagnosis: "Cultural toxicity risk",
        label: "Toxic culture",
        severity: DiagnosisSeverity::High,
        icon: "🟢🔴",
        recommendation: "The individual is stable but the workplace is not psychologically safe. Trust and communication culture must improve.",
    },
    MatrixEntry {
        key: "risk_risk",
        diagnosis: "Latent psychosocial risk",
        label: "Latent psychosocial risk",
        severity: DiagnosisSeverity::Moderate,
        icon: "🟠🟠",
        recommendation: "Risk is rising in both stress and culture. Time to take preventive measures.",
    },
    MatrixEntry {
        key: "attention_risk",
        diagnosis: "Latent psychosocial risk",
        label: "Latent psychosocial risk",
        severity: DiagnosisSeverity::Moderate,
        icon: "🟡🟠",
        recommendation: "Workplace culture needs attention.",
    },
    MatrixEntry {
        key: "risk_attention",
        diagnosis: "Latent psychosocial risk",
        label: "Latent psychosocial risk",
        severity: DiagnosisSeverity::Moderate,
        icon: "🟠🟡",
        recommendation: "Personal stress management needs attention.",
    },
    MatrixEntry {
        key: "healthy_healthy",
        diagnosis: "Healthy workplace",
        label: "Healthy workplace",
        severity: DiagnosisSeverity::Healthy,
        icon: "🟢🟢",
        recommendation: "Stress and work environment are both stable. Keep it up.",
    },
    MatrixEntry {
        key: "healthy_attention",
        diagnosis: "Healthy workplace",
        label: "Generally healthy",
        severity: DiagnosisSeverity::Healthy,
        icon: "🟢🟡",
        recommendation: "Good overall; pay a little attention to workplace culture.",
    },
    MatrixEntry {
        key: "attention_healthy",
        diagnosis: "Healthy workplace",
        label: "Generally healthy",
        severity: DiagnosisSeverity::Healthy,
        icon: "🟡🟢",
        recommendation: "Good overall; pay a little attention to stress management.",
    },
    MatrixEntry {
        key: "attention_attention",
        diagnosis: "Healthy workplace",
        label: "Needs attention",
        severity: DiagnosisSeverity::Healthy,
        icon: "🟡🟡",
        recommendation: "Generally good, but stress and culture both need small improvements.",
    },
];

static FALLBACK: MatrixEntry = MatrixEntry {
    key: "mixed",
    diagnosis: "Mixed indicators",
    label: "Mixed indicators",
    severity: DiagnosisSeverity::Moderate,
    icon: "🟡",
    recommendation: "Stress and culture levels both need attention.",
};

/// Look up the diagnosis for a stress/culture level pair.
pub fn diagnose(stress_level: ScoreLevel, culture_level: ScoreLevel) -> CombinedDiagnosis {
    let key = format!("{}_{}", stress_level.key(), culture_level.key());
    let entry = MATRIX
        .iter()
        .find(|entry| entry.key == key)
        .unwrap_or(&FALLBACK);

    CombinedDiagnosis {
        stress_level,
        culture_level,
        diagnosis: entry.diagnosis,
        label: entry.label,
        severity: entry.severity,
        icon: entry.icon,
        recommendation: entry.recommendation,
    }
}

pub(crate) fn combined_diagnosis(scores: &[CategoryScore]) -> Option<CombinedDiagnosis> {
    if scores.len() < 2 {
        return None;
    }

    let level_of = |category: Category| {
        scores
            .iter()
            .find(|score| score.category == category)
            .map(|score| score.level)
    };

    Some(diagnose(
        level_of(Category::MentalHealthStress)?,
        level_of(Category::WorkplaceEnvironment)?,
    ))
}
