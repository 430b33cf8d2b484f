//! Core error types for anxcheck-core.
//!
//! This module defines the error hierarchy using thiserror. Wizard errors are
//! guard violations on the navigation state machine; catalog errors are
//! malformed static tables and are fatal at startup.

use thiserror::Error;

/// Core error type for anxcheck-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Wizard guard violations
    #[error("Wizard error: {0}")]
    Wizard(#[from] WizardError),

    /// Malformed instrument definition
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic errors with context
    #[error("{0}")]
    Custom(String),
}

/// Guard violations on the assessment wizard.
///
/// Every transition is guarded by a precondition; a well-behaved frontend
/// never triggers these because it disables the corresponding control.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WizardError {
    /// Advance requested before the current question was answered
    #[error("Question {question_id} has no recorded answer")]
    Unanswered { question_id: u8 },

    /// Answer submitted for a question other than the active one
    #[error("Answer targets question {got}, but question {expected} is active")]
    QuestionMismatch { expected: u8, got: u8 },

    /// Selected value outside the 0-4 response scale
    #[error("Response value {value} is outside the 0-4 scale")]
    ValueOutOfRange { value: u8 },

    /// Navigation requested after the assessment completed
    #[error("Assessment is already complete")]
    AlreadyCompleted,

    /// Operation requires a completed assessment
    #[error("Assessment is not complete yet")]
    NotCompleted,

    /// Retreat requested from the first question
    #[error("Already at the first question")]
    AtFirstQuestion,
}

/// Malformed static instrument tables.
///
/// These indicate a defective build of the catalog itself and are treated as
/// fatal configuration errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// Catalog contains no questions
    #[error("Question catalog is empty")]
    EmptyCatalog,

    /// Two questions share an id
    #[error("Duplicate question id: {0}")]
    DuplicateQuestionId(u8),

    /// Question ids are not 1..=N in order
    #[error("Question at position {position} has id {id}, expected {expected}")]
    NonSequentialIds { position: usize, id: u8, expected: u8 },

    /// Response options do not cover exactly 0..=4
    #[error("Response options must cover values 0-4 exactly")]
    BadOptionSet,

    /// A score in [0, 40] matches no severity band
    #[error("No severity band covers score {score}")]
    BandGap { score: u8 },

    /// A score in [0, 40] matches more than one severity band
    #[error("Severity bands overlap at score {score}")]
    BandOverlap { score: u8 },

    /// Band bounds are inverted or exceed the score range
    #[error("Severity band [{lower}, {upper}] is malformed")]
    BandMalformed { lower: u8, upper: u8 },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
