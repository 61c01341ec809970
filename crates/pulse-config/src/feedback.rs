//! Feedback sink configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct FeedbackConfig {
    /// JSONL file feedback is appended to. Empty means no sink.
    #[serde(default)]
    pub log_path: String,
}

impl FeedbackConfig {
    /// Whether a sink target is set.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.log_path.trim().is_empty()
    }

    #[must_use]
    pub fn log_path(&self) -> Option<PathBuf> {
        self.is_configured().then(|| PathBuf::from(&self.log_path))
    }
}
