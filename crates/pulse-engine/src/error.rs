//! Error types for pulse-engine.

use thiserror::Error;

/// Errors raised by a [`crate::feedback::FeedbackSink`].
///
/// These never escape [`crate::feedback::FeedbackDispatcher`]; they are logged
/// and folded into a `FeedbackOutcome`.
#[derive(Debug, Error)]
pub enum FeedbackError {
    /// Writing the feedback record failed.
    #[error("Feedback I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The sink rejected the record.
    #[error("Feedback rejected: {0}")]
    Rejected(String),
}
