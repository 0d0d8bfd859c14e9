//! Error types for healthquiz
//!
//! Quiz progression itself cannot fail in normal use; these variants cover
//! misuse of the controller and failures of the storage collaborator.

use thiserror::Error;

/// Main error type for the quiz library
#[derive(Error, Debug)]
pub enum QuizError {
    /// State machine transition errors
    #[error("Invalid quiz transition from {from}: {reason}")]
    InvalidTransition { from: String, reason: String },

    /// A token that is not one of the current question's options
    #[error("Unknown option '{token}' for question {question}")]
    UnknownOption { token: String, question: u8 },

    /// Storage backend errors
    #[error("Storage error: {0}")]
    Storage(#[from] std::io::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for quiz operations
pub type Result<T> = std::result::Result<T, QuizError>;
