//! Action-item completeness badges.
//!
//! The badge level comes from owner/deadline presence alone. The service's
//! numeric `completeness_score` drives display mode only; the two are shown
//! side by side and never reconciled.

use pulse_core::entities::LiveAction;
use pulse_core::enums::{AssistanceType, CompletenessLevel};
use pulse_core::responses::ActionScore;

use crate::classifier::DisplayModeClassifier;

#[must_use]
pub const fn completeness_level(has_owner: bool, has_deadline: bool) -> CompletenessLevel {
    match (has_owner, has_deadline) {
        (true, true) => CompletenessLevel::Complete,
        (true, false) | (false, true) => CompletenessLevel::Partial,
        (false, false) => CompletenessLevel::DescriptionOnly,
    }
}

/// Score an action with the default classifier bands.
#[must_use]
pub fn score_action(action: &LiveAction) -> ActionScore {
    score_action_with(action, &DisplayModeClassifier::default())
}

#[must_use]
pub fn score_action_with(action: &LiveAction, classifier: &DisplayModeClassifier) -> ActionScore {
    let level = completeness_level(action.has_owner(), action.has_deadline());
    ActionScore {
        action_id: action.id.clone(),
        level,
        badge: level.badge(),
        completeness_score: action.completeness_score,
        display_mode: classifier.classify(
            AssistanceType::IncompleteActionItem,
            action.completeness_score,
        ),
    }
}
