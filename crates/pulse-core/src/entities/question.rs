use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{QuestionStatus, TierType};

/// A question raised in the meeting, searched across the answer tiers.
///
/// `tier_results` keeps arrival order; the first result found is shown first.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct LiveQuestion {
    pub id: String,
    pub text: String,
    #[serde(default)]
    pub speaker: Option<String>,
    pub timestamp: DateTime<Utc>,
    pub status: QuestionStatus,
    #[serde(default)]
    pub tier_results: Vec<TierResult>,
}

impl LiveQuestion {
    /// A freshly detected question with no results yet.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        text: impl Into<String>,
        speaker: Option<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            speaker,
            timestamp,
            status: QuestionStatus::Searching,
            tier_results: Vec::new(),
        }
    }
}

/// One answer candidate produced by a single tier.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct TierResult {
    pub tier_type: TierType,
    pub content: String,
    pub confidence: f64,
    #[serde(default)]
    pub source: Option<String>,
    pub found_at: DateTime<Utc>,
}

impl TierResult {
    #[must_use]
    pub const fn requires_disclaimer(&self) -> bool {
        self.tier_type.requires_disclaimer()
    }
}

/// One step in a live question's lifecycle, as streamed by the service.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum QuestionEvent {
    /// A question was detected in the transcript.
    Asked {
        question_id: String,
        text: String,
        #[serde(default)]
        speaker: Option<String>,
        timestamp: DateTime<Utc>,
    },
    /// A tier produced an answer candidate.
    TierResult {
        question_id: String,
        result: TierResult,
    },
    /// Search tiers found nothing usable; the live transcript is being watched.
    Monitoring { question_id: String },
    /// The search window closed.
    Exhausted { question_id: String },
}
