//! Settings-based suppression of assistance signals and plain insights.
//!
//! An assistance signal is shown only if every check passes:
//!
//! 1. its display mode is not `hidden` (absolute floor),
//! 2. it is not `collapsed` while collapsed items are turned off,
//! 3. its type is among the enabled phases,
//! 4. quiet mode is off, or its priority is critical.
//!
//! The checks are independent, so their order only affects which
//! [`SuppressionReason`] is reported. Plain insights are gated by type only.

use pulse_core::entities::{AssistanceSignal, LiveInsight};
use pulse_core::enums::{AssistancePriority, DisplayMode};
use pulse_core::responses::{AssistanceDecision, InsightDecision, SuppressionReason};
use pulse_core::settings::LiveInsightsSettings;

use crate::classifier::DisplayModeClassifier;
use crate::priority::resolve_priority;

/// Filter combining a classifier with per-call settings snapshots.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SettingsFilter {
    classifier: DisplayModeClassifier,
}

impl SettingsFilter {
    #[must_use]
    pub const fn new(classifier: DisplayModeClassifier) -> Self {
        Self { classifier }
    }

    #[must_use]
    pub const fn classifier(&self) -> &DisplayModeClassifier {
        &self.classifier
    }

    /// Classify `signal` and run it through every settings check.
    #[must_use]
    pub fn evaluate(
        &self,
        signal: &AssistanceSignal,
        settings: &LiveInsightsSettings,
    ) -> AssistanceDecision {
        let ty = signal.assistance_type();
        let priority = resolve_priority(ty);
        let display_mode = self.classifier.classify_signal(signal);
        let suppressed_by = suppression(display_mode, priority, signal, settings);
        let visible = suppressed_by.is_none();
        let auto_expand =
            visible && settings.auto_expand_high_confidence && display_mode == DisplayMode::Immediate;

        tracing::debug!(
            insight_id = %signal.insight_id(),
            assistance_type = %ty,
            display_mode = %display_mode,
            visible,
            suppressed_by = suppressed_by.map(SuppressionReason::as_str),
            "evaluated assistance signal"
        );

        AssistanceDecision {
            insight_id: signal.insight_id().to_string(),
            assistance_type: ty,
            priority,
            display_mode,
            visible,
            auto_expand,
            suppressed_by,
        }
    }

    #[must_use]
    pub fn should_show_assistance(
        &self,
        signal: &AssistanceSignal,
        settings: &LiveInsightsSettings,
    ) -> bool {
        self.evaluate(signal, settings).visible
    }

    /// Whether a visible signal should open expanded.
    #[must_use]
    pub fn should_auto_expand(
        &self,
        signal: &AssistanceSignal,
        settings: &LiveInsightsSettings,
    ) -> bool {
        self.evaluate(signal, settings).auto_expand
    }

    /// Re-run the filter over a caller-held buffer after a settings change.
    ///
    /// Decisions come back in buffer order.
    #[must_use]
    pub fn reevaluate(
        &self,
        signals: &[AssistanceSignal],
        settings: &LiveInsightsSettings,
    ) -> Vec<AssistanceDecision> {
        signals
            .iter()
            .map(|signal| self.evaluate(signal, settings))
            .collect()
    }
}

fn suppression(
    display_mode: DisplayMode,
    priority: AssistancePriority,
    signal: &AssistanceSignal,
    settings: &LiveInsightsSettings,
) -> Option<SuppressionReason> {
    if display_mode == DisplayMode::Hidden {
        return Some(SuppressionReason::HiddenFloor);
    }
    if display_mode == DisplayMode::Collapsed && !settings.show_collapsed_items {
        return Some(SuppressionReason::CollapsedDisabled);
    }
    if !settings.is_phase_enabled(signal.assistance_type()) {
        return Some(SuppressionReason::PhaseDisabled);
    }
    if settings.quiet_mode && priority != AssistancePriority::Critical {
        return Some(SuppressionReason::QuietMode);
    }
    None
}

/// Show/hide decision with default bands.
#[must_use]
pub fn should_show_assistance(signal: &AssistanceSignal, settings: &LiveInsightsSettings) -> bool {
    SettingsFilter::default().should_show_assistance(signal, settings)
}

/// A plain insight is shown iff its type is enabled.
#[must_use]
pub fn should_show_insight(insight: &LiveInsight, settings: &LiveInsightsSettings) -> bool {
    settings.is_insight_type_enabled(insight.insight_type)
}

#[must_use]
pub fn evaluate_insight(insight: &LiveInsight, settings: &LiveInsightsSettings) -> InsightDecision {
    InsightDecision {
        insight_id: insight.insight_id.clone(),
        insight_type: insight.insight_type,
        visible: should_show_insight(insight, settings),
    }
}
