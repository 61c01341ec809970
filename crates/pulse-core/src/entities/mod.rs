//! Entity structs for the live-insights domain.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` for JSON
//! roundtrip and schema validation. Field names follow the meeting-intelligence
//! service wire format (`snake_case`).

mod action;
mod feedback;
mod insight;
mod question;
mod signal;

pub use action::LiveAction;
pub use feedback::InsightFeedback;
pub use insight::LiveInsight;
pub use question::{LiveQuestion, QuestionEvent, TierResult};
pub use signal::{
    ActionItemQualityPayload, AnswerSource, AssistanceSignal, AutoAnswerPayload,
    ClarificationPayload, ConflictPayload, FollowUpPayload, QualityIssue,
};
