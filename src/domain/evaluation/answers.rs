//! The two model answers being compared

use serde::{Deserialize, Serialize};

/// Answers to one question, with and without the reference source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedAnswers {
    pub without_source: String,
    pub with_source: String,
    /// Set when the answers are offline placeholders rather than model output
    #[serde(default)]
    pub used_fallback: bool,
}

impl GeneratedAnswers {
    pub fn new(without_source: impl Into<String>, with_source: impl Into<String>) -> Self {
        Self {
            without_source: without_source.into(),
            with_source: with_source.into(),
            used_fallback: false,
        }
    }

    /// Placeholder answers used when no model is reachable
    pub fn offline(question: &str) -> Self {
        Self {
            without_source: offline_answer(question, false),
            with_source: offline_answer(question, true),
            used_fallback: true,
        }
    }
}

/// Fixed mock answer for `question`
pub fn offline_answer(question: &str, with_source: bool) -> String {
    if with_source {
        format!(
            "[MOCK RESPONSE WITH SOURCE] This is a simulated response to your question: \"{}\". In a real implementation, this would be an answer based on the provided authoritative source.",
            question
        )
    } else {
        format!(
            "[MOCK RESPONSE WITHOUT SOURCE] This is a simulated response to your question: \"{}\". In a real implementation, this would be an answer based on the model's training data.",
            question
        )
    }
}
