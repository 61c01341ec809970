//! Fixed assistance type → priority table.

use pulse_core::enums::{AssistancePriority, AssistanceType};

/// Priority tier of an assistance type.
///
/// Conflicts and incomplete action items are critical because they flag a
/// problem the meeting should resolve before moving on.
#[must_use]
pub const fn resolve_priority(ty: AssistanceType) -> AssistancePriority {
    match ty {
        AssistanceType::ConflictDetected | AssistanceType::IncompleteActionItem => {
            AssistancePriority::Critical
        }
        AssistanceType::AutoAnswer | AssistanceType::ClarificationNeeded => {
            AssistancePriority::Important
        }
        AssistanceType::FollowUpSuggestion => AssistancePriority::Informational,
    }
}
