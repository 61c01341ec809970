//! User preferences for the live-insights panel.
//!
//! `LiveInsightsSettings` is a value object: the `with_*` methods consume the
//! snapshot and return a new one. Callers keep the current snapshot and pass
//! it to every filter call; there is no ambient settings store.
//!
//! Persisted as JSON with camelCase keys. Missing keys fall back to
//! [`LiveInsightsSettings::default`].

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enum_set::EnumSet;
use crate::enums::{AssistanceType, LiveInsightType};

/// Which live insights a user wants to see and how.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct LiveInsightsSettings {
    /// Assistance types that may be shown at all.
    pub enabled_phases: EnumSet<AssistanceType>,
    /// Plain insight types that may be shown.
    pub enabled_insight_types: EnumSet<LiveInsightType>,
    /// Only critical-priority assistance is shown.
    pub quiet_mode: bool,
    /// Collapsed-mode assistance is shown (de-emphasized) instead of dropped.
    pub show_collapsed_items: bool,
    /// Helpful / not-helpful feedback is sent upstream.
    pub enable_feedback: bool,
    /// Immediate-mode assistance opens expanded.
    pub auto_expand_high_confidence: bool,
}

impl Default for LiveInsightsSettings {
    fn default() -> Self {
        Self {
            enabled_phases: EnumSet::from([
                AssistanceType::AutoAnswer,
                AssistanceType::ConflictDetected,
                AssistanceType::IncompleteActionItem,
            ]),
            enabled_insight_types: EnumSet::all(),
            quiet_mode: false,
            show_collapsed_items: true,
            enable_feedback: true,
            auto_expand_high_confidence: false,
        }
    }
}

impl LiveInsightsSettings {
    #[must_use]
    pub fn is_phase_enabled(&self, ty: AssistanceType) -> bool {
        self.enabled_phases.contains(ty)
    }

    #[must_use]
    pub fn is_insight_type_enabled(&self, ty: LiveInsightType) -> bool {
        self.enabled_insight_types.contains(ty)
    }

    #[must_use]
    pub const fn with_enabled_phases(mut self, phases: EnumSet<AssistanceType>) -> Self {
        self.enabled_phases = phases;
        self
    }

    #[must_use]
    pub const fn with_enabled_insight_types(mut self, types: EnumSet<LiveInsightType>) -> Self {
        self.enabled_insight_types = types;
        self
    }

    #[must_use]
    pub fn with_phase(mut self, ty: AssistanceType, enabled: bool) -> Self {
        self.enabled_phases = if enabled {
            self.enabled_phases.with(ty)
        } else {
            self.enabled_phases.without(ty)
        };
        self
    }

    #[must_use]
    pub fn with_insight_type(mut self, ty: LiveInsightType, enabled: bool) -> Self {
        self.enabled_insight_types = if enabled {
            self.enabled_insight_types.with(ty)
        } else {
            self.enabled_insight_types.without(ty)
        };
        self
    }

    #[must_use]
    pub const fn with_quiet_mode(mut self, quiet_mode: bool) -> Self {
        self.quiet_mode = quiet_mode;
        self
    }

    #[must_use]
    pub const fn with_show_collapsed_items(mut self, show: bool) -> Self {
        self.show_collapsed_items = show;
        self
    }

    #[must_use]
    pub const fn with_enable_feedback(mut self, enable: bool) -> Self {
        self.enable_feedback = enable;
        self
    }

    #[must_use]
    pub const fn with_auto_expand_high_confidence(mut self, auto_expand: bool) -> Self {
        self.auto_expand_high_confidence = auto_expand;
        self
    }
}
