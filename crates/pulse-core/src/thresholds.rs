//! Threshold bands used by display-mode classification and tier aggregation.
//!
//! Defaults reproduce the observed service behaviour. Each band is strict on
//! the immediate side and inclusive on the hidden side:
//!
//! ```text
//! value >  immediate_above                 → immediate
//! hidden_at_or_below < value ≤ immediate_above → collapsed
//! value ≤  hidden_at_or_below              → hidden
//! ```
//!
//! Action items use completeness with inverted polarity and are never hidden:
//! `completeness < action_item_collapse_at` is immediate, anything else collapsed.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::AssistanceType;
use crate::errors::CoreError;

/// Confidence floor shared by every confidence-scored assistance type.
pub const DEFAULT_HIDDEN_AT_OR_BELOW: f64 = 0.65;

/// Completeness at or above which an action-item quality signal collapses.
pub const DEFAULT_ACTION_ITEM_COLLAPSE_AT: f64 = 0.70;

/// Lower and upper edge of a confidence band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ConfidenceBand {
    /// Strictly above this value the signal is shown immediately.
    pub immediate_above: f64,
    /// At or below this value the signal is hidden.
    pub hidden_at_or_below: f64,
}

impl ConfidenceBand {
    #[must_use]
    pub const fn new(immediate_above: f64, hidden_at_or_below: f64) -> Self {
        Self {
            immediate_above,
            hidden_at_or_below,
        }
    }

    fn validate(&self, name: &str) -> Result<(), CoreError> {
        check_unit_interval(&format!("{name}.immediate_above"), self.immediate_above)?;
        check_unit_interval(
            &format!("{name}.hidden_at_or_below"),
            self.hidden_at_or_below,
        )?;
        if self.hidden_at_or_below > self.immediate_above {
            return Err(CoreError::Validation(format!(
                "{name}: hidden_at_or_below ({}) exceeds immediate_above ({})",
                self.hidden_at_or_below, self.immediate_above
            )));
        }
        Ok(())
    }
}

/// Per-type display bands.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DisplayThresholds {
    #[serde(default = "default_auto_answer")]
    pub auto_answer: ConfidenceBand,
    #[serde(default = "default_clarification")]
    pub clarification_needed: ConfidenceBand,
    #[serde(default = "default_conflict")]
    pub conflict_detected: ConfidenceBand,
    #[serde(default = "default_follow_up")]
    pub follow_up_suggestion: ConfidenceBand,
    #[serde(default = "default_action_item_collapse_at")]
    pub action_item_collapse_at: f64,
}

const fn default_auto_answer() -> ConfidenceBand {
    ConfidenceBand::new(0.80, DEFAULT_HIDDEN_AT_OR_BELOW)
}

const fn default_clarification() -> ConfidenceBand {
    ConfidenceBand::new(0.75, DEFAULT_HIDDEN_AT_OR_BELOW)
}

const fn default_conflict() -> ConfidenceBand {
    ConfidenceBand::new(0.75, DEFAULT_HIDDEN_AT_OR_BELOW)
}

const fn default_follow_up() -> ConfidenceBand {
    ConfidenceBand::new(0.70, DEFAULT_HIDDEN_AT_OR_BELOW)
}

const fn default_action_item_collapse_at() -> f64 {
    DEFAULT_ACTION_ITEM_COLLAPSE_AT
}

impl Default for DisplayThresholds {
    fn default() -> Self {
        Self {
            auto_answer: default_auto_answer(),
            clarification_needed: default_clarification(),
            conflict_detected: default_conflict(),
            follow_up_suggestion: default_follow_up(),
            action_item_collapse_at: default_action_item_collapse_at(),
        }
    }
}

impl DisplayThresholds {
    /// Confidence band for `ty`, or `None` for completeness-scored types.
    #[must_use]
    pub const fn band(&self, ty: AssistanceType) -> Option<ConfidenceBand> {
        match ty {
            AssistanceType::AutoAnswer => Some(self.auto_answer),
            AssistanceType::ClarificationNeeded => Some(self.clarification_needed),
            AssistanceType::ConflictDetected => Some(self.conflict_detected),
            AssistanceType::FollowUpSuggestion => Some(self.follow_up_suggestion),
            AssistanceType::IncompleteActionItem => None,
        }
    }

    /// Check every band lies in `[0,1]` and is ordered.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] naming the first offending field.
    pub fn validate(&self) -> Result<(), CoreError> {
        self.auto_answer.validate("auto_answer")?;
        self.clarification_needed.validate("clarification_needed")?;
        self.conflict_detected.validate("conflict_detected")?;
        self.follow_up_suggestion.validate("follow_up_suggestion")?;
        check_unit_interval("action_item_collapse_at", self.action_item_collapse_at)
    }
}

/// Confidence cut-offs for live-question tier results.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TierThresholds {
    /// Minimum confidence for a tier result to count as usable.
    #[serde(default = "default_usable_confidence")]
    pub usable_confidence: f64,
    /// Confidence at which any tier result answers the question outright.
    #[serde(default = "default_answered_confidence")]
    pub answered_confidence: f64,
}

const fn default_usable_confidence() -> f64 {
    0.5
}

const fn default_answered_confidence() -> f64 {
    0.85
}

impl Default for TierThresholds {
    fn default() -> Self {
        Self {
            usable_confidence: default_usable_confidence(),
            answered_confidence: default_answered_confidence(),
        }
    }
}

impl TierThresholds {
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] when a value is outside `[0,1]` or the
    /// answered cut-off sits below the usable one.
    pub fn validate(&self) -> Result<(), CoreError> {
        check_unit_interval("usable_confidence", self.usable_confidence)?;
        check_unit_interval("answered_confidence", self.answered_confidence)?;
        if self.answered_confidence < self.usable_confidence {
            return Err(CoreError::Validation(format!(
                "answered_confidence ({}) is below usable_confidence ({})",
                self.answered_confidence, self.usable_confidence
            )));
        }
        Ok(())
    }
}

fn check_unit_interval(field: &str, value: f64) -> Result<(), CoreError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "{field} must be within [0, 1], got {value}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        DisplayThresholds::default().validate().unwrap();
        TierThresholds::default().validate().unwrap();
    }

    #[test]
    fn action_items_have_no_confidence_band() {
        let thresholds = DisplayThresholds::default();
        assert!(thresholds.band(AssistanceType::IncompleteActionItem).is_none());
        assert_eq!(
            thresholds.band(AssistanceType::AutoAnswer),
            Some(ConfidenceBand::new(0.80, 0.65))
        );
    }

    #[test]
    fn inverted_band_is_rejected() {
        let thresholds = DisplayThresholds {
            conflict_detected: ConfidenceBand::new(0.6, 0.7),
            ..DisplayThresholds::default()
        };
        let err = thresholds.validate().unwrap_err();
        assert!(err.to_string().contains("conflict_detected"));
    }

    #[test]
    fn out_of_range_collapse_point_is_rejected() {
        let thresholds = DisplayThresholds {
            action_item_collapse_at: 1.5,
            ..DisplayThresholds::default()
        };
        assert!(thresholds.validate().is_err());
    }

    #[test]
    fn answered_below_usable_is_rejected() {
        let thresholds = TierThresholds {
            usable_confidence: 0.9,
            answered_confidence: 0.8,
        };
        assert!(thresholds.validate().is_err());
    }

    #[test]
    fn partial_toml_style_override_keeps_other_defaults() {
        let thresholds: DisplayThresholds =
            serde_json::from_str(r#"{"auto_answer":{"immediate_above":0.9,"hidden_at_or_below":0.6}}"#)
                .unwrap();
        assert_eq!(thresholds.auto_answer, ConfidenceBand::new(0.9, 0.6));
        assert_eq!(thresholds.conflict_detected, default_conflict());
        assert!((thresholds.action_item_collapse_at - 0.70).abs() < f64::EPSILON);
    }
}
