use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::AssistanceType;

/// User verdict on a single assistance signal, sent fire-and-forget.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct InsightFeedback {
    pub insight_id: String,
    pub helpful: bool,
    #[serde(rename = "type")]
    pub assistance_type: AssistanceType,
}
