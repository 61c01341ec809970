//! Fire-and-forget delivery of user feedback on assistance signals.
//!
//! The dispatcher never fails outward. Whatever happens to a record is
//! reported as a [`FeedbackOutcome`] and a tracing event.

use std::path::{Path, PathBuf};

use pulse_core::entities::InsightFeedback;
use pulse_core::settings::LiveInsightsSettings;

use crate::error::FeedbackError;

/// Destination for feedback records.
pub trait FeedbackSink: Send + Sync {
    /// Deliver one record.
    ///
    /// # Errors
    ///
    /// Returns [`FeedbackError`] if the record could not be delivered.
    fn submit(&self, feedback: &InsightFeedback) -> Result<(), FeedbackError>;
}

/// Appends feedback records to a JSONL file, one object per line.
#[derive(Debug, Clone)]
pub struct JsonlFeedbackSink {
    path: PathBuf,
}

impl JsonlFeedbackSink {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl FeedbackSink for JsonlFeedbackSink {
    fn submit(&self, feedback: &InsightFeedback) -> Result<(), FeedbackError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        serde_jsonlines::append_json_lines(&self.path, [feedback])?;
        Ok(())
    }
}

/// What happened to one feedback record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedbackOutcome {
    Delivered,
    /// `enableFeedback` is off; nothing was sent.
    Disabled,
    /// No sink is configured.
    NoSink,
    /// The sink failed; the message is the error text.
    Dropped(String),
}

impl FeedbackOutcome {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Delivered => "delivered",
            Self::Disabled => "disabled",
            Self::NoSink => "no_sink",
            Self::Dropped(_) => "dropped",
        }
    }
}

/// Routes feedback to an optional sink, honouring the settings snapshot.
#[derive(Default)]
pub struct FeedbackDispatcher {
    sink: Option<Box<dyn FeedbackSink>>,
}

impl FeedbackDispatcher {
    #[must_use]
    pub fn new(sink: Box<dyn FeedbackSink>) -> Self {
        Self { sink: Some(sink) }
    }

    /// A dispatcher with nowhere to send records.
    #[must_use]
    pub const fn without_sink() -> Self {
        Self { sink: None }
    }

    #[must_use]
    pub const fn has_sink(&self) -> bool {
        self.sink.is_some()
    }

    pub fn send(
        &self,
        feedback: &InsightFeedback,
        settings: &LiveInsightsSettings,
    ) -> FeedbackOutcome {
        if !settings.enable_feedback {
            tracing::debug!(insight_id = %feedback.insight_id, "feedback disabled; not sent");
            return FeedbackOutcome::Disabled;
        }
        let Some(sink) = &self.sink else {
            tracing::debug!(insight_id = %feedback.insight_id, "no feedback sink configured");
            return FeedbackOutcome::NoSink;
        };
        match sink.submit(feedback) {
            Ok(()) => {
                tracing::debug!(
                    insight_id = %feedback.insight_id,
                    assistance_type = %feedback.assistance_type,
                    helpful = feedback.helpful,
                    "feedback delivered"
                );
                FeedbackOutcome::Delivered
            }
            Err(error) => {
                tracing::warn!(
                    insight_id = %feedback.insight_id,
                    %error,
                    "feedback delivery failed"
                );
                FeedbackOutcome::Dropped(error.to_string())
            }
        }
    }
}

impl std::fmt::Debug for FeedbackDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FeedbackDispatcher")
            .field("has_sink", &self.has_sink())
            .finish()
    }
}
