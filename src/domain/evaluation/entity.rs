//! Evaluation entity and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::answers::GeneratedAnswers;
use super::validation::{validate_evaluation_request, EvaluationValidationError};
use crate::domain::truthiness::{ComparisonInput, ComparisonResult, TruthinessEngine, TruthinessWeights};
use crate::domain::DomainError;

/// Unique identifier for an evaluation
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EvaluationId(String);

impl EvaluationId {
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn from_string(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for EvaluationId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for EvaluationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How the source text was supplied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputMode {
    /// Pasted directly
    #[default]
    Text,
    /// Captured from a web page
    Url,
}

impl InputMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Url => "url",
        }
    }
}

impl std::fmt::Display for InputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Submission that creates an evaluation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationRequest {
    pub question: String,
    pub source: String,
    #[serde(default)]
    pub input_mode: InputMode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capture_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub truthiness_weights: Option<TruthinessWeights>,
}

impl EvaluationRequest {
    /// Create a text-mode request
    pub fn new(question: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            source: source.into(),
            input_mode: InputMode::Text,
            source_url: None,
            capture_date: None,
            truthiness_weights: None,
        }
    }

    /// Mark the source as captured from `url`
    pub fn with_source_url(mut self, url: impl Into<String>) -> Self {
        self.input_mode = InputMode::Url;
        self.source_url = Some(url.into());
        self
    }

    pub fn with_capture_date(mut self, captured_at: DateTime<Utc>) -> Self {
        self.capture_date = Some(captured_at);
        self
    }

    pub fn with_weights(mut self, weights: TruthinessWeights) -> Self {
        self.truthiness_weights = Some(weights);
        self
    }

    pub fn validate(&self) -> Result<(), EvaluationValidationError> {
        validate_evaluation_request(self)
    }
}

/// A question, its reference source, both model answers and their comparison
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Evaluation {
    id: EvaluationId,
    question: String,
    source: String,
    response_without_source: String,
    response_with_source: String,
    comparison_results: ComparisonResult,
    /// Creation time
    timestamp: DateTime<Utc>,
    #[serde(default)]
    input_mode: InputMode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    source_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    capture_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    truthiness_weights: Option<TruthinessWeights>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    used_fallback: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    completed_at: Option<DateTime<Utc>>,
}

impl Evaluation {
    /// Create a pending evaluation from a validated request
    pub fn new(request: EvaluationRequest) -> Result<Self, EvaluationValidationError> {
        request.validate()?;

        let now = Utc::now();
        let capture_date = match request.input_mode {
            InputMode::Url => request.capture_date.or(Some(now)),
            InputMode::Text => request.capture_date,
        };

        Ok(Self {
            id: EvaluationId::new(),
            question: request.question,
            source: request.source,
            response_without_source: String::new(),
            response_with_source: String::new(),
            comparison_results: ComparisonResult::pending(),
            timestamp: now,
            input_mode: request.input_mode,
            source_url: request.source_url,
            capture_date,
            truthiness_weights: request.truthiness_weights,
            used_fallback: None,
            completed_at: None,
        })
    }

    /// Score `answers` against this evaluation's source and record the outcome.
    ///
    /// An evaluation is completed at most once.
    pub fn complete(
        &mut self,
        engine: &TruthinessEngine,
        answers: GeneratedAnswers,
    ) -> Result<&ComparisonResult, DomainError> {
        if self.is_completed() {
            return Err(DomainError::conflict(format!(
                "Evaluation '{}' already has answers",
                self.id
            )));
        }

        let mut input = ComparisonInput::new(&answers.without_source, &answers.with_source, &self.source)
            .with_fallback(answers.used_fallback);
        input.weights = self.truthiness_weights.as_ref();
        let comparison = engine.compare(input);

        self.response_without_source = answers.without_source;
        self.response_with_source = answers.with_source;
        self.comparison_results = comparison;
        self.used_fallback = Some(answers.used_fallback);
        self.completed_at = Some(Utc::now());

        Ok(&self.comparison_results)
    }

    // Getters

    pub fn id(&self) -> &EvaluationId {
        &self.id
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn response_without_source(&self) -> &str {
        &self.response_without_source
    }

    pub fn response_with_source(&self) -> &str {
        &self.response_with_source
    }

    pub fn comparison_results(&self) -> &ComparisonResult {
        &self.comparison_results
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn input_mode(&self) -> InputMode {
        self.input_mode
    }

    pub fn source_url(&self) -> Option<&str> {
        self.source_url.as_deref()
    }

    pub fn capture_date(&self) -> Option<DateTime<Utc>> {
        self.capture_date
    }

    pub fn truthiness_weights(&self) -> Option<&TruthinessWeights> {
        self.truthiness_weights.as_ref()
    }

    pub fn used_fallback(&self) -> bool {
        self.used_fallback.unwrap_or(false)
    }

    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    /// Whether answers have been recorded.
    ///
    /// Records written before `completedAt` existed count as completed once
    /// they carry answers.
    pub fn is_completed(&self) -> bool {
        self.completed_at.is_some()
            || self.used_fallback.is_some()
            || !self.response_without_source.is_empty()
            || !self.response_with_source.is_empty()
    }
}
