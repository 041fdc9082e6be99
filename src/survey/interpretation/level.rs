use serde::{Deserialize, Serialize};

/// Four-tier severity ladder shared by category and overall scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScoreLevel {
    HighRisk,
    Risk,
    Attention,
    Healthy,
}

impl ScoreLevel {
    pub const HEALTHY_FLOOR: f64 = 4.2;
    pub const ATTENTION_FLOOR: f64 = 3.4;
    pub const RISK_FLOOR: f64 = 2.6;

    /// Top-down threshold ladder; lower bounds are inclusive.
    pub fn classify(score: f64) -> Self {
        if score >= Self::HEALTHY_FLOOR {
            Self::Healthy
        } else if score >= Self::ATTENTION_FLOOR {
            Self::Attention
        } else if score >= Self::RISK_FLOOR {
            Self::Risk
        } else {
            Self::HighRisk
        }
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::Healthy => "healthy",
            Self::Attention => "attention",
            Self::Risk => "risk",
            Self::HighRisk => "high-risk",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Healthy => "Healthy, stable",
            Self::Attention => "Needs attention",
            Self::Risk => "Elevated risk",
            Self::HighRisk => "High risk",
        }
    }

    pub const fn color(self) -> &'static str {
        match self {
            Self::Healthy => "green",
            Self::Attention => "yellow",
            Self::Risk => "orange",
            Self::HighRisk => "red",
        }
    }

    pub const fn icon(self) -> &'static str {
        match self {
            Self::Healthy => "🟢",
            Self::Attention => "🟡",
            Self::Risk => "🟠",
            Self::HighRisk => "🔴",
        }
    }

    pub const fn traffic_light(self) -> TrafficLight {
        match self {
            Self::Healthy => TrafficLight::Green,
            Self::Attention | Self::Risk => TrafficLight::Amber,
            Self::HighRisk => TrafficLight::Red,
        }
    }
}

/// Three-state flag used by flattened exports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrafficLight {
    Green,
    Amber,
    Red,
}

impl TrafficLight {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Green => "Green",
            Self::Amber => "Amber",
            Self::Red => "Red",
        }
    }
}
