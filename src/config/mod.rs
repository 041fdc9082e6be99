use crate::survey::interpretation::domain::STANDARD_DOMAIN_WEIGHTS;
use crate::survey::interpretation::{Category, DomainModel, ModelError};
use std::env;
use std::fmt;

/// Distinguishes runtime behavior for different stages of the tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub telemetry: TelemetryConfig,
    pub scoring: ScoringConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let domain_weights = match env::var("SURVEY_DOMAIN_WEIGHTS") {
            Ok(raw) if !raw.trim().is_empty() => parse_weights(&raw)?,
            _ => STANDARD_DOMAIN_WEIGHTS,
        };

        Ok(Self {
            environment,
            telemetry: TelemetryConfig { log_level },
            scoring: ScoringConfig { domain_weights },
        })
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Domain weights applied to the overall wellbeing index, in category order.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoringConfig {
    pub domain_weights: [f64; Category::COUNT],
}

impl ScoringConfig {
    /// Validate the weights into a domain model; sums other than 1.0 are rejected.
    pub fn domain_model(&self) -> Result<DomainModel, ModelError> {
        DomainModel::with_weights(self.domain_weights)
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            domain_weights: STANDARD_DOMAIN_WEIGHTS,
        }
    }
}

fn parse_weights(raw: &str) -> Result<[f64; Category::COUNT], ConfigError> {
    let parts: Vec<&str> = raw.split(',').map(str::trim).collect();
    if parts.len() != Category::COUNT {
        return Err(ConfigError::WeightCount {
            expected: Category::COUNT,
            found: parts.len(),
        });
    }

    let mut weights = [0.0; Category::COUNT];
    for (slot, part) in weights.iter_mut().zip(parts) {
        *slot = part
            .parse::<f64>()
            .map_err(|source| ConfigError::InvalidWeight {
                value: part.to_string(),
                source,
            })?;
    }
    Ok(weights)
}

#[derive(Debug)]
pub enum ConfigError {
    WeightCount {
        expected: usize,
        found: usize,
    },
    InvalidWeight {
        value: String,
        source: std::num::ParseFloatError,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::WeightCount { expected, found } => write!(
                f,
                "SURVEY_DOMAIN_WEIGHTS must list {} weights, found {}",
                expected, found
            ),
            ConfigError::InvalidWeight { value, .. } => {
                write!(f, "SURVEY_DOMAIN_WEIGHTS entry '{}' is not a number", value)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::WeightCount { .. } => None,
            ConfigError::InvalidWeight { source, .. } => Some(source),
        }
    }
}
