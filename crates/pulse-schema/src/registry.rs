//! Named schemas for every Pulse wire type.

use std::collections::BTreeMap;

use pulse_core::{entities, responses, settings};
use schemars::schema_for;
use serde_json::Value;

use crate::error::SchemaError;

/// Lookup table from schema name to JSON Schema, built once from the
/// `pulse-core` types.
pub struct SchemaRegistry {
    schemas: BTreeMap<&'static str, Value>,
}

macro_rules! register {
    ($map:expr, $name:expr, $ty:ty) => {
        $map.insert($name, Value::from(schema_for!($ty)));
    };
}

impl SchemaRegistry {
    #[must_use]
    pub fn new() -> Self {
        let mut schemas = BTreeMap::new();

        // --- Inbound wire types ---
        register!(schemas, "assistance_signal", entities::AssistanceSignal);
        register!(schemas, "live_insight", entities::LiveInsight);
        register!(schemas, "live_question", entities::LiveQuestion);
        register!(schemas, "question_event", entities::QuestionEvent);
        register!(schemas, "tier_result", entities::TierResult);
        register!(schemas, "live_action", entities::LiveAction);
        register!(schemas, "settings", settings::LiveInsightsSettings);

        // --- Outbound ---
        register!(schemas, "insight_feedback", entities::InsightFeedback);

        // --- Engine/CLI responses ---
        register!(schemas, "assistance_decision", responses::AssistanceDecision);
        register!(schemas, "insight_decision", responses::InsightDecision);
        register!(schemas, "classify_response", responses::ClassifyResponse);
        register!(schemas, "question_summary", responses::QuestionSummary);
        register!(schemas, "action_score", responses::ActionScore);

        Self { schemas }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.schemas.get(name)
    }

    /// Validate `instance` against the schema called `name`.
    ///
    /// # Errors
    ///
    /// - [`SchemaError::NotFound`] if `name` is not registered.
    /// - [`SchemaError::ValidationFailed`] with every validator message.
    pub fn validate(&self, name: &str, instance: &Value) -> Result<(), SchemaError> {
        let schema = self
            .get(name)
            .ok_or_else(|| SchemaError::NotFound(name.to_string()))?;

        let validator = jsonschema::validator_for(schema)
            .map_err(|e| SchemaError::Generation(format!("{e}")))?;

        let errors: Vec<String> = validator
            .iter_errors(instance)
            .map(|e| format!("{e}"))
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(SchemaError::ValidationFailed { errors })
        }
    }

    /// Pretty-printed schema text for `name`.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::NotFound`] if `name` is not registered.
    pub fn export(&self, name: &str) -> Result<String, SchemaError> {
        let schema = self
            .get(name)
            .ok_or_else(|| SchemaError::NotFound(name.to_string()))?;
        serde_json::to_string_pretty(schema).map_err(|e| SchemaError::Generation(e.to_string()))
    }

    /// Registered names, sorted.
    #[must_use]
    pub fn list(&self) -> Vec<&'static str> {
        self.schemas.keys().copied().collect()
    }

    #[must_use]
    pub fn schema_count(&self) -> usize {
        self.schemas.len()
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_has_expected_count() {
        assert_eq!(SchemaRegistry::new().schema_count(), 13);
    }

    #[test]
    fn list_is_sorted() {
        let names = SchemaRegistry::new().list();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        assert_eq!(names, sorted);
    }

    #[test]
    fn unknown_name_is_not_found() {
        let reg = SchemaRegistry::new();
        assert!(reg.get("bogus").is_none());
        assert!(matches!(
            reg.validate("bogus", &serde_json::json!({})),
            Err(SchemaError::NotFound(_))
        ));
        assert!(matches!(reg.export("bogus"), Err(SchemaError::NotFound(_))));
    }

    #[test]
    fn export_is_parseable_json() {
        let text = SchemaRegistry::new().export("settings").unwrap();
        let parsed: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(&parsed, SchemaRegistry::new().get("settings").unwrap());
    }
}
