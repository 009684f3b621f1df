use std::path::Path;

use serde::Deserialize;

use crate::domain::truthiness::{AdmissionPhrases, TruthinessEngine, TruthinessWeights};
use crate::domain::DomainError;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub scoring: ScoringConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Scoring knobs shared by every comparison
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringConfig {
    /// Base weights; per-evaluation overrides are layered on top
    #[serde(default)]
    pub weights: WeightsConfig,
    /// Replaces the built-in admission phrases when set
    #[serde(default)]
    pub admission_phrases: Option<Vec<String>>,
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct WeightsConfig {
    pub difference_weight: Option<f64>,
    pub alignment_weight: Option<f64>,
    pub error_admission_bonus: Option<f64>,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

impl From<WeightsConfig> for TruthinessWeights {
    fn from(config: WeightsConfig) -> Self {
        Self {
            difference_weight: config.difference_weight,
            alignment_weight: config.alignment_weight,
            error_admission_bonus: config.error_admission_bonus,
        }
    }
}

impl WeightsConfig {
    /// Full keys of the weights that are set but not finite
    pub fn non_finite_keys(&self) -> Vec<&'static str> {
        [
            ("scoring.weights.difference_weight", self.difference_weight),
            ("scoring.weights.alignment_weight", self.alignment_weight),
            ("scoring.weights.error_admission_bonus", self.error_admission_bonus),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_some_and(|v| !v.is_finite()))
        .map(|(key, _)| key)
        .collect()
    }
}

impl ScoringConfig {
    pub fn admission_phrases(&self) -> AdmissionPhrases {
        match &self.admission_phrases {
            Some(phrases) => AdmissionPhrases::new(phrases),
            None => AdmissionPhrases::default(),
        }
    }

    pub fn base_weights(&self) -> TruthinessWeights {
        self.weights.into()
    }

    /// Build the scoring engine described by this section
    pub fn build_engine(&self) -> TruthinessEngine {
        TruthinessEngine::new(self.admission_phrases(), self.base_weights())
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, DomainError> {
        Self::load_with(None)
    }

    /// Load configuration, reading `extra` after the standard files and
    /// before the environment.
    pub fn load_with(extra: Option<&Path>) -> Result<Self, DomainError> {
        let mut builder = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false));

        if let Some(path) = extra {
            builder = builder.add_source(config::File::from(path).required(true));
        }

        let config = builder
            .add_source(
                config::Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let app_config: Self = config.try_deserialize()?;
        app_config.validate()?;

        Ok(app_config)
    }

    fn validate(&self) -> Result<(), DomainError> {
        let non_finite = self.scoring.weights.non_finite_keys();
        if !non_finite.is_empty() {
            return Err(DomainError::configuration(format!(
                "weights must be finite numbers: {}",
                non_finite.join(", ")
            )));
        }

        Ok(())
    }
}
