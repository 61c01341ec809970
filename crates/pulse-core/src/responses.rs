//! Engine outputs handed to presentation, also returned as JSON by `pulse`.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{
    AssistancePriority, AssistanceType, BadgeColor, CompletenessLevel, DisplayMode,
    LiveInsightType, QuestionStatus, TierType,
};

/// First settings check that rejected an assistance signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum SuppressionReason {
    /// Classified `hidden`; no setting can reveal it.
    HiddenFloor,
    /// Classified `collapsed` while collapsed items are turned off.
    CollapsedDisabled,
    /// The assistance type is not among the enabled phases.
    PhaseDisabled,
    /// Quiet mode is on and the type is not critical.
    QuietMode,
}

impl SuppressionReason {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::HiddenFloor => "hidden_floor",
            Self::CollapsedDisabled => "collapsed_disabled",
            Self::PhaseDisabled => "phase_disabled",
            Self::QuietMode => "quiet_mode",
        }
    }
}

/// Full classification of one assistance signal under one settings snapshot.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AssistanceDecision {
    pub insight_id: String,
    pub assistance_type: AssistanceType,
    pub priority: AssistancePriority,
    pub display_mode: DisplayMode,
    pub visible: bool,
    pub auto_expand: bool,
    pub suppressed_by: Option<SuppressionReason>,
}

/// Visibility of one plain insight.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct InsightDecision {
    pub insight_id: String,
    pub insight_type: LiveInsightType,
    pub visible: bool,
}

/// Response from `pulse classify`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ClassifyResponse {
    pub assistance_type: AssistanceType,
    pub value: f64,
    pub priority: AssistancePriority,
    pub display_mode: DisplayMode,
}

/// A tier result as presented, in arrival order.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct TierResultView {
    pub tier_type: TierType,
    pub content: String,
    pub confidence: f64,
    pub source: Option<String>,
    pub found_at: DateTime<Utc>,
    pub requires_disclaimer: bool,
}

/// Aggregated state of a live question.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct QuestionSummary {
    pub question_id: String,
    pub text: String,
    pub status: QuestionStatus,
    pub results: Vec<TierResultView>,
}

/// Completeness badge for an action item, beside the service's own score.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ActionScore {
    pub action_id: String,
    pub level: CompletenessLevel,
    pub badge: BadgeColor,
    pub completeness_score: f64,
    pub display_mode: DisplayMode,
}
