//! Closed enums for assistance signals, plain insights, questions, and actions.
//!
//! Wire names follow the meeting-intelligence service: camelCase enum names
//! (`autoAnswer`, `meetingContext`, ...), and nothing else is accepted on input.
//! Status enums with state machines provide `allowed_next_states()` to enforce
//! valid transitions.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::enum_set::SetMember;

// ---------------------------------------------------------------------------
// AssistanceType
// ---------------------------------------------------------------------------

/// Kind of AI-generated assistance signal raised during a meeting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum AssistanceType {
    AutoAnswer,
    ClarificationNeeded,
    ConflictDetected,
    IncompleteActionItem,
    FollowUpSuggestion,
}

impl AssistanceType {
    pub const ALL: [Self; 5] = [
        Self::AutoAnswer,
        Self::ClarificationNeeded,
        Self::ConflictDetected,
        Self::IncompleteActionItem,
        Self::FollowUpSuggestion,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AutoAnswer => "autoAnswer",
            Self::ClarificationNeeded => "clarificationNeeded",
            Self::ConflictDetected => "conflictDetected",
            Self::IncompleteActionItem => "incompleteActionItem",
            Self::FollowUpSuggestion => "followUpSuggestion",
        }
    }

    /// Whether this type is scored by completeness rather than confidence.
    ///
    /// Completeness has inverted polarity: a low score means the action item
    /// needs attention.
    #[must_use]
    pub const fn uses_completeness(self) -> bool {
        matches!(self, Self::IncompleteActionItem)
    }
}

impl SetMember for AssistanceType {
    const UNIVERSE: &'static [Self] = &Self::ALL;

    fn ordinal(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for AssistanceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// AssistancePriority
// ---------------------------------------------------------------------------

/// Priority tier of an assistance type. Fixed per type, never user-configurable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum AssistancePriority {
    Critical,
    Important,
    Informational,
}

impl AssistancePriority {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::Important => "important",
            Self::Informational => "informational",
        }
    }
}

impl fmt::Display for AssistancePriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// DisplayMode
// ---------------------------------------------------------------------------

/// How prominently a signal is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum DisplayMode {
    Immediate,
    Collapsed,
    Hidden,
}

impl DisplayMode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Immediate => "immediate",
            Self::Collapsed => "collapsed",
            Self::Hidden => "hidden",
        }
    }
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// LiveInsightType
// ---------------------------------------------------------------------------

/// Kind of plain live insight (no confidence-derived display mode).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum LiveInsightType {
    ActionItem,
    Decision,
    Question,
    Risk,
    KeyPoint,
    RelatedDiscussion,
    Contradiction,
    MissingInfo,
}

impl LiveInsightType {
    pub const ALL: [Self; 8] = [
        Self::ActionItem,
        Self::Decision,
        Self::Question,
        Self::Risk,
        Self::KeyPoint,
        Self::RelatedDiscussion,
        Self::Contradiction,
        Self::MissingInfo,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ActionItem => "actionItem",
            Self::Decision => "decision",
            Self::Question => "question",
            Self::Risk => "risk",
            Self::KeyPoint => "keyPoint",
            Self::RelatedDiscussion => "relatedDiscussion",
            Self::Contradiction => "contradiction",
            Self::MissingInfo => "missingInfo",
        }
    }
}

impl SetMember for LiveInsightType {
    const UNIVERSE: &'static [Self] = &Self::ALL;

    fn ordinal(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for LiveInsightType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// QuestionStatus
// ---------------------------------------------------------------------------

/// Status of a live question while its answer tiers are searched.
///
/// ```text
/// searching  → found | monitoring | answered | unanswered
/// monitoring → found | answered | unanswered
/// found      → answered
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum QuestionStatus {
    Searching,
    Found,
    Monitoring,
    Answered,
    Unanswered,
}

impl QuestionStatus {
    #[must_use]
    #[allow(clippy::match_same_arms)]
    pub const fn allowed_next_states(self) -> &'static [Self] {
        match self {
            Self::Searching => &[
                Self::Found,
                Self::Monitoring,
                Self::Answered,
                Self::Unanswered,
            ],
            Self::Monitoring => &[Self::Found, Self::Answered, Self::Unanswered],
            Self::Found => &[Self::Answered],
            Self::Answered | Self::Unanswered => &[],
        }
    }

    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        self.allowed_next_states().contains(&next)
    }

    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Answered | Self::Unanswered)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Searching => "searching",
            Self::Found => "found",
            Self::Monitoring => "monitoring",
            Self::Answered => "answered",
            Self::Unanswered => "unanswered",
        }
    }
}

impl fmt::Display for QuestionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// TierType
// ---------------------------------------------------------------------------

/// Answer source tier, in the order the service searches them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum TierType {
    /// Document search over the organization's content.
    Rag,
    /// Past meeting summaries and transcripts.
    MeetingContext,
    /// The current meeting's live transcript.
    LiveConversation,
    /// Model-generated fallback with no backing source.
    GptGenerated,
}

impl TierType {
    /// Model-generated answers must carry a disclaimer when shown.
    #[must_use]
    pub const fn requires_disclaimer(self) -> bool {
        matches!(self, Self::GptGenerated)
    }

    #[must_use]
    pub const fn is_live(self) -> bool {
        matches!(self, Self::LiveConversation)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Rag => "rag",
            Self::MeetingContext => "meetingContext",
            Self::LiveConversation => "liveConversation",
            Self::GptGenerated => "gptGenerated",
        }
    }
}

impl fmt::Display for TierType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ActionStatus
// ---------------------------------------------------------------------------

/// Status of an action item captured during a meeting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum ActionStatus {
    Tracked,
    Complete,
}

impl ActionStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Tracked => "tracked",
            Self::Complete => "complete",
        }
    }
}

impl fmt::Display for ActionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// QualitySeverity
// ---------------------------------------------------------------------------

/// Severity of an action-item quality issue. Descriptive only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum QualitySeverity {
    Critical,
    Important,
    Suggestion,
}

impl QualitySeverity {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::Important => "important",
            Self::Suggestion => "suggestion",
        }
    }
}

impl fmt::Display for QualitySeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// CompletenessLevel / BadgeColor
// ---------------------------------------------------------------------------

/// Badge colour shown next to an action item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum BadgeColor {
    Green,
    Yellow,
    Gray,
}

impl BadgeColor {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Gray => "gray",
        }
    }
}

impl fmt::Display for BadgeColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Completeness of an action item, derived from owner/deadline presence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum CompletenessLevel {
    DescriptionOnly,
    Partial,
    Complete,
}

impl CompletenessLevel {
    #[must_use]
    pub const fn badge(self) -> BadgeColor {
        match self {
            Self::Complete => BadgeColor::Green,
            Self::Partial => BadgeColor::Yellow,
            Self::DescriptionOnly => BadgeColor::Gray,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::DescriptionOnly => "descriptionOnly",
            Self::Partial => "partial",
            Self::Complete => "complete",
        }
    }
}

impl fmt::Display for CompletenessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
