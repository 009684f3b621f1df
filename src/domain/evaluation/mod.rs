//! Evaluation domain
//!
//! An evaluation pairs a question and its reference source with the two model
//! answers and their truthiness comparison.

mod answers;
mod entity;
mod validation;

pub use answers::{offline_answer, GeneratedAnswers};
pub use entity::{Evaluation, EvaluationId, EvaluationRequest, InputMode};
pub use validation::{is_valid_source_url, validate_evaluation_request, EvaluationValidationError};
