//! Display-mode classification of assistance signals.
//!
//! Confidence-scored types disappear below their floor. Action-item quality is
//! scored by completeness with inverted polarity and is never hidden: a poor
//! action item is a problem worth surfacing, a good-enough one is demoted to
//! collapsed.
//!
//! Values outside `[0,1]` are classified as-is, without clamping. `NaN` fails
//! every comparison, which lands confidence types in `hidden` and action items
//! in `collapsed`.

use pulse_core::entities::AssistanceSignal;
use pulse_core::enums::{AssistanceType, DisplayMode};
use pulse_core::thresholds::{ConfidenceBand, DisplayThresholds};

/// Classifier bound to one set of threshold bands.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DisplayModeClassifier {
    thresholds: DisplayThresholds,
}

impl DisplayModeClassifier {
    #[must_use]
    pub const fn new(thresholds: DisplayThresholds) -> Self {
        Self { thresholds }
    }

    #[must_use]
    pub const fn thresholds(&self) -> &DisplayThresholds {
        &self.thresholds
    }

    /// Display mode for a raw `(type, value)` pair.
    ///
    /// `value` is the completeness score for
    /// [`AssistanceType::IncompleteActionItem`] and the confidence otherwise.
    #[must_use]
    pub fn classify(&self, ty: AssistanceType, value: f64) -> DisplayMode {
        match self.thresholds.band(ty) {
            Some(band) => classify_confidence(band, value),
            None => classify_completeness(self.thresholds.action_item_collapse_at, value),
        }
    }

    #[must_use]
    pub fn classify_signal(&self, signal: &AssistanceSignal) -> DisplayMode {
        self.classify(signal.assistance_type(), signal.score())
    }
}

/// Classify with the default bands.
#[must_use]
pub fn classify(ty: AssistanceType, value: f64) -> DisplayMode {
    DisplayModeClassifier::default().classify(ty, value)
}

fn classify_confidence(band: ConfidenceBand, confidence: f64) -> DisplayMode {
    if confidence > band.immediate_above {
        DisplayMode::Immediate
    } else if confidence > band.hidden_at_or_below {
        DisplayMode::Collapsed
    } else {
        DisplayMode::Hidden
    }
}

fn classify_completeness(collapse_at: f64, completeness: f64) -> DisplayMode {
    if completeness < collapse_at {
        DisplayMode::Immediate
    } else {
        DisplayMode::Collapsed
    }
}
