//! Truthiness Evaluator
//!
//! Scores how a language model's answer changes once it is given an
//! authoritative source:
//! - Sentence-level differences between the two answers
//! - Vocabulary alignment with the source
//! - Detection of explicit error admissions
//! - A weighted composite truthiness score

pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use crate::config::AppConfig;
pub use domain::{
    compare, ComparisonInput, ComparisonResult, DomainError, Evaluation, EvaluationRequest,
    GeneratedAnswers, TruthinessEngine, TruthinessScore, TruthinessWeights,
};
