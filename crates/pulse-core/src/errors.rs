//! Cross-cutting error types for Pulse.
//!
//! Crate-specific errors (`ConfigError`, `SchemaError`, `FeedbackError`) live in
//! their own crates. The `pulse` binary converges them through `anyhow`.

use thiserror::Error;

use crate::enums::QuestionStatus;

/// Errors that can be raised by any Pulse crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Entity lookup returned no result.
    #[error("Entity not found: {entity_type} {id}")]
    NotFound { entity_type: String, id: String },

    /// A status transition was attempted that is not allowed.
    #[error("Invalid state transition: {entity_type} {id} from {from} to {to}")]
    InvalidTransition {
        entity_type: String,
        id: String,
        from: String,
        to: String,
    },

    /// Data failed validation (range, ordering, format).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CoreError {
    #[must_use]
    pub fn question_transition(id: &str, from: QuestionStatus, to: QuestionStatus) -> Self {
        Self::InvalidTransition {
            entity_type: "live_question".to_string(),
            id: id.to_string(),
            from: from.to_string(),
            to: to.to_string(),
        }
    }
}
