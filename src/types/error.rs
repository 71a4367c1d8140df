//! Error types
//!
//! Only `LoadError` reaches the user. The others mark caller mistakes
//! that a correct front-end guards against.

use thiserror::Error;

/// The quiz definition could not be loaded. Fatal to the session.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read quiz definition {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed quiz definition: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("quiz definition has no axes")]
    NoAxes,

    #[error("quiz definition has no questions")]
    NoQuestions,

    #[error("quiz definition has an empty results catalog")]
    EmptyCatalog,

    #[error("question {question} has invalid weight {weight} (must be finite)")]
    InvalidWeight { question: usize, weight: f64 },
}

/// Result computation refused. Both cases are caller contract violations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoreError {
    #[error("answers incomplete: {answered} of {total} questions answered")]
    IncompleteAnswers { answered: usize, total: usize },

    #[error("results catalog is empty")]
    EmptyCatalog,
}

/// Rejected session transition
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("question {question} does not exist (quiz has {total} questions)")]
    QuestionOutOfRange { question: usize, total: usize },

    #[error("not all questions answered: {answered} of {total}")]
    Incomplete { answered: usize, total: usize },

    #[error("invalid choice {0:?} (expected A or B)")]
    InvalidChoice(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignKeyError {
    #[error("malformed sign-key {0:?}")]
    Malformed(String),
}
