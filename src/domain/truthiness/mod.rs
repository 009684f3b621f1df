//! Truthiness scoring domain
//!
//! This module compares a model's answer given without a reference source
//! against its answer given with one, and scores how well the grounded answer
//! tracks the source.

mod admission;
mod alignment;
mod composite;
mod differ;
mod engine;
mod result;
mod weights;

pub use admission::{detect_error_admission, AdmissionPhrases, DEFAULT_ADMISSION_PHRASES};
pub use alignment::{alignment_score, source_vocabulary, tokenize, MIN_TOKEN_LENGTH};
pub use composite::{truthiness_score, MAX_DIFFERENCE_PENALTY};
pub use differ::{extract_differences, split_sentences};
pub use engine::{compare, ComparisonInput, TruthinessEngine};
pub use result::{ComparisonResult, TruthinessScore, FALLBACK_SCORE_SENTINEL};
pub use weights::{
    TruthinessWeights, DEFAULT_ALIGNMENT_WEIGHT, DEFAULT_DIFFERENCE_WEIGHT,
    DEFAULT_ERROR_ADMISSION_BONUS,
};
