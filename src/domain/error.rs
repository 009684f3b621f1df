use thiserror::Error;

use super::evaluation::EvaluationValidationError;

/// Core domain errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Conflict: {message}")]
    Conflict { message: String },
}

impl DomainError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }
}

impl From<EvaluationValidationError> for DomainError {
    fn from(error: EvaluationValidationError) -> Self {
        Self::validation(error.to_string())
    }
}

impl From<config::ConfigError> for DomainError {
    fn from(error: config::ConfigError) -> Self {
        Self::configuration(error.to_string())
    }
}
