//! Evaluation request validation

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use super::entity::{EvaluationRequest, InputMode};

/// Accepted source URL shape: http(s) scheme followed by a host
static SOURCE_URL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(https?)://[^\s/$.?#].[^\s]*$").unwrap());

/// Validation errors for evaluation requests
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EvaluationValidationError {
    #[error("Question is required")]
    EmptyQuestion,

    #[error("Source is required")]
    EmptySource,

    #[error("URL is required when using URL input mode")]
    MissingSourceUrl,

    #[error("Invalid URL format: '{0}'")]
    InvalidSourceUrl(String),

    #[error("Truthiness weight '{0}' must be a finite number")]
    NonFiniteWeight(&'static str),
}

/// Check that a URL looks like an http(s) address
pub fn is_valid_source_url(url: &str) -> bool {
    SOURCE_URL_PATTERN.is_match(url)
}

/// Validate an evaluation request
pub fn validate_evaluation_request(
    request: &EvaluationRequest,
) -> Result<(), EvaluationValidationError> {
    if request.question.trim().is_empty() {
        return Err(EvaluationValidationError::EmptyQuestion);
    }

    if request.source.trim().is_empty() {
        return Err(EvaluationValidationError::EmptySource);
    }

    match (&request.input_mode, &request.source_url) {
        (InputMode::Url, None) => return Err(EvaluationValidationError::MissingSourceUrl),
        (_, Some(url)) if !is_valid_source_url(url) => {
            return Err(EvaluationValidationError::InvalidSourceUrl(url.clone()));
        }
        _ => {}
    }

    if let Some(weights) = &request.truthiness_weights {
        if let Some(&field) = weights.non_finite_fields().first() {
            return Err(EvaluationValidationError::NonFiniteWeight(field));
        }
    }

    Ok(())
}
