use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::ActionStatus;

/// An action item tracked during a live meeting.
///
/// `completeness_score` is supplied by the meeting-intelligence service and is
/// independent of the owner/deadline fields.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct LiveAction {
    pub id: String,
    pub description: String,
    #[serde(default)]
    pub speaker: Option<String>,
    pub timestamp: DateTime<Utc>,
    pub status: ActionStatus,
    #[serde(default)]
    pub owner: Option<String>,
    #[serde(default)]
    pub deadline: Option<String>,
    pub completeness_score: f64,
}

impl LiveAction {
    /// Owner present and not blank.
    #[must_use]
    pub fn has_owner(&self) -> bool {
        is_present(self.owner.as_deref())
    }

    /// Deadline present and not blank.
    #[must_use]
    pub fn has_deadline(&self) -> bool {
        is_present(self.deadline.as_deref())
    }
}

fn is_present(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.trim().is_empty())
}
