//! Comparison engine
//!
//! Runs the sentence differ, alignment scorer, admission detector and composite
//! scorer over one pair of answers.

use tracing::{debug, instrument};

use super::admission::AdmissionPhrases;
use super::alignment::alignment_score;
use super::composite::truthiness_score;
use super::differ::extract_differences;
use super::result::ComparisonResult;
use super::weights::TruthinessWeights;

/// Answers and source handed to the engine
#[derive(Debug, Clone, Copy)]
pub struct ComparisonInput<'a> {
    pub answer_without_source: &'a str,
    pub answer_with_source: &'a str,
    pub source: &'a str,
    /// Whether the answers came from the offline fallback
    pub used_fallback: bool,
    pub weights: Option<&'a TruthinessWeights>,
}

impl<'a> ComparisonInput<'a> {
    pub fn new(answer_without_source: &'a str, answer_with_source: &'a str, source: &'a str) -> Self {
        Self {
            answer_without_source,
            answer_with_source,
            source,
            used_fallback: false,
            weights: None,
        }
    }

    pub fn with_fallback(mut self, used_fallback: bool) -> Self {
        self.used_fallback = used_fallback;
        self
    }

    pub fn with_weights(mut self, weights: &'a TruthinessWeights) -> Self {
        self.weights = Some(weights);
        self
    }
}

/// Scoring engine holding the configured admission phrases and base weights.
///
/// Immutable once built; share it freely across threads.
#[derive(Debug, Clone, Default)]
pub struct TruthinessEngine {
    phrases: AdmissionPhrases,
    base_weights: TruthinessWeights,
}

impl TruthinessEngine {
    pub fn new(phrases: AdmissionPhrases, base_weights: TruthinessWeights) -> Self {
        Self {
            phrases,
            base_weights,
        }
    }

    pub fn with_phrases(mut self, phrases: AdmissionPhrases) -> Self {
        self.phrases = phrases;
        self
    }

    pub fn with_base_weights(mut self, weights: TruthinessWeights) -> Self {
        self.base_weights = weights;
        self
    }

    pub fn phrases(&self) -> &AdmissionPhrases {
        &self.phrases
    }

    pub fn base_weights(&self) -> &TruthinessWeights {
        &self.base_weights
    }

    /// Weights in effect for a request: per-request knobs over the base weights
    pub fn effective_weights(&self, overrides: Option<&TruthinessWeights>) -> TruthinessWeights {
        match overrides {
            Some(weights) => weights.over(&self.base_weights),
            None => self.base_weights,
        }
    }

    #[instrument(skip_all, fields(used_fallback = input.used_fallback))]
    pub fn compare(&self, input: ComparisonInput<'_>) -> ComparisonResult {
        let differences = extract_differences(input.answer_without_source, input.answer_with_source);
        let alignment_score = alignment_score(input.answer_with_source, input.source);
        let admits_error = self.phrases.detect(input.answer_with_source);
        let weights = self.effective_weights(input.weights);

        let truthiness_score = truthiness_score(
            differences.len(),
            alignment_score,
            admits_error,
            input.used_fallback,
            &weights,
        );

        debug!(
            differences = differences.len(),
            alignment_score,
            admits_error,
            used_fallback = input.used_fallback,
            truthiness = truthiness_score.as_legacy_value(),
            "Compared answers"
        );

        ComparisonResult {
            differences,
            alignment_score,
            admits_error,
            truthiness_score,
        }
    }
}

/// Compare two answers with the default phrase set and default weights
/// underneath `weights`.
pub fn compare(
    answer_without_source: &str,
    answer_with_source: &str,
    source: &str,
    used_fallback: bool,
    weights: Option<&TruthinessWeights>,
) -> ComparisonResult {
    let mut input = ComparisonInput::new(answer_without_source, answer_with_source, source)
        .with_fallback(used_fallback);
    input.weights = weights;

    TruthinessEngine::default().compare(input)
}
