use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{AssistanceType, QualitySeverity};

/// An AI-generated assistance signal about the ongoing meeting.
///
/// On the wire a signal is one flat object whose `type` field selects the
/// payload shape; only that payload's fields are present.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum AssistanceSignal {
    AutoAnswer(AutoAnswerPayload),
    ClarificationNeeded(ClarificationPayload),
    ConflictDetected(ConflictPayload),
    IncompleteActionItem(ActionItemQualityPayload),
    FollowUpSuggestion(FollowUpPayload),
}

impl AssistanceSignal {
    #[must_use]
    pub const fn assistance_type(&self) -> AssistanceType {
        match self {
            Self::AutoAnswer(_) => AssistanceType::AutoAnswer,
            Self::ClarificationNeeded(_) => AssistanceType::ClarificationNeeded,
            Self::ConflictDetected(_) => AssistanceType::ConflictDetected,
            Self::IncompleteActionItem(_) => AssistanceType::IncompleteActionItem,
            Self::FollowUpSuggestion(_) => AssistanceType::FollowUpSuggestion,
        }
    }

    #[must_use]
    pub fn insight_id(&self) -> &str {
        match self {
            Self::AutoAnswer(p) => &p.insight_id,
            Self::ClarificationNeeded(p) => &p.insight_id,
            Self::ConflictDetected(p) => &p.insight_id,
            Self::IncompleteActionItem(p) => &p.insight_id,
            Self::FollowUpSuggestion(p) => &p.insight_id,
        }
    }

    /// The value the display classifier reads: completeness for action-item
    /// quality, confidence for everything else.
    #[must_use]
    pub const fn score(&self) -> f64 {
        match self {
            Self::AutoAnswer(p) => p.confidence,
            Self::ClarificationNeeded(p) => p.confidence,
            Self::ConflictDetected(p) => p.confidence,
            Self::IncompleteActionItem(p) => p.completeness_score,
            Self::FollowUpSuggestion(p) => p.confidence,
        }
    }
}

/// A document or past meeting backing an automatic answer.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct AnswerSource {
    pub content_id: String,
    pub title: String,
    pub snippet: String,
    pub date: String,
    pub relevance_score: f64,
    #[serde(default)]
    pub meeting_type: Option<String>,
}

/// A question asked in the meeting, answered from organizational knowledge.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct AutoAnswerPayload {
    pub insight_id: String,
    pub question: String,
    pub answer: String,
    pub confidence: f64,
    #[serde(default)]
    pub sources: Vec<AnswerSource>,
    pub reasoning: String,
    pub timestamp: DateTime<Utc>,
}

/// A vague statement that would benefit from a clarifying question.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ClarificationPayload {
    pub insight_id: String,
    pub statement: String,
    pub vagueness_type: String,
    #[serde(default)]
    pub suggested_questions: Vec<String>,
    pub confidence: f64,
    pub timestamp: DateTime<Utc>,
}

/// A statement contradicting an earlier decision or document.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ConflictPayload {
    pub insight_id: String,
    pub current_statement: String,
    pub conflicting_content_id: String,
    pub conflicting_title: String,
    pub conflicting_snippet: String,
    pub conflicting_date: String,
    pub conflict_severity: String,
    pub confidence: f64,
    #[serde(default)]
    pub resolution_suggestions: Vec<String>,
    pub timestamp: DateTime<Utc>,
}

/// One problem found in an action item.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct QualityIssue {
    pub field: String,
    pub severity: QualitySeverity,
    pub message: String,
    #[serde(default)]
    pub suggested_fix: Option<String>,
}

/// Quality check of an action item that is missing details.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ActionItemQualityPayload {
    pub insight_id: String,
    pub action_item: String,
    pub completeness_score: f64,
    #[serde(default)]
    pub issues: Vec<QualityIssue>,
    #[serde(default)]
    pub improved_version: Option<String>,
    pub timestamp: DateTime<Utc>,
}

impl ActionItemQualityPayload {
    /// Issues at `critical` severity, in reported order.
    pub fn critical_issues(&self) -> impl Iterator<Item = &QualityIssue> {
        self.issues
            .iter()
            .filter(|issue| issue.severity == QualitySeverity::Critical)
    }
}

/// A topic from a past meeting worth raising again.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct FollowUpPayload {
    pub insight_id: String,
    pub topic: String,
    pub reason: String,
    pub related_content_id: String,
    pub related_title: String,
    pub related_date: String,
    pub urgency: String,
    pub context_snippet: String,
    pub confidence: f64,
    pub timestamp: DateTime<Utc>,
}
