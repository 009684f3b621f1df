//! Domain layer - Core business logic and entities

pub mod error;
pub mod evaluation;
pub mod truthiness;

pub use error::DomainError;
pub use evaluation::{
    Evaluation, EvaluationId, EvaluationRequest, EvaluationValidationError, GeneratedAnswers,
    InputMode,
};
pub use truthiness::{
    compare, AdmissionPhrases, ComparisonInput, ComparisonResult, TruthinessEngine,
    TruthinessScore, TruthinessWeights,
};
