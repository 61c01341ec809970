use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::LiveInsightType;

/// A plain live insight (decision, risk, key point, ...).
///
/// Unlike assistance signals it has no display mode; visibility depends only
/// on whether its type is enabled.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct LiveInsight {
    pub insight_id: String,
    #[serde(rename = "type")]
    pub insight_type: LiveInsightType,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub confidence: Option<f64>,
    #[serde(default)]
    pub source_segment: Option<String>,
    pub timestamp: DateTime<Utc>,
}
