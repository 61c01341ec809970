//! Shared signal builders for engine integration tests.

#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};

use pulse_core::entities::{
    ActionItemQualityPayload, AssistanceSignal, AutoAnswerPayload, ClarificationPayload,
    ConflictPayload, FollowUpPayload, LiveInsight,
};
use pulse_core::enums::{AssistanceType, LiveInsightType};

pub fn at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 12, 14, 30, 0).unwrap()
}

/// A minimal signal of type `ty` scored at `value`.
pub fn signal(ty: AssistanceType, value: f64) -> AssistanceSignal {
    let insight_id = format!("{ty}-{value}");
    match ty {
        AssistanceType::AutoAnswer => AssistanceSignal::AutoAnswer(AutoAnswerPayload {
            insight_id,
            question: "When does the pilot start?".to_string(),
            answer: "First week of April.".to_string(),
            confidence: value,
            sources: Vec::new(),
            reasoning: "Quoted from the rollout plan.".to_string(),
            timestamp: at(),
        }),
        AssistanceType::ClarificationNeeded => {
            AssistanceSignal::ClarificationNeeded(ClarificationPayload {
                insight_id,
                statement: "We'll ship it soon.".to_string(),
                vagueness_type: "time".to_string(),
                suggested_questions: vec!["Which date?".to_string()],
                confidence: value,
                timestamp: at(),
            })
        }
        AssistanceType::ConflictDetected => AssistanceSignal::ConflictDetected(ConflictPayload {
            insight_id,
            current_statement: "Budget is 40k.".to_string(),
            conflicting_content_id: "mtg-77".to_string(),
            conflicting_title: "Q1 planning".to_string(),
            conflicting_snippet: "Budget capped at 30k.".to_string(),
            conflicting_date: "2026-01-15".to_string(),
            conflict_severity: "high".to_string(),
            confidence: value,
            resolution_suggestions: Vec::new(),
            timestamp: at(),
        }),
        AssistanceType::IncompleteActionItem => {
            AssistanceSignal::IncompleteActionItem(ActionItemQualityPayload {
                insight_id,
                action_item: "Someone should update the doc".to_string(),
                completeness_score: value,
                issues: Vec::new(),
                improved_version: None,
                timestamp: at(),
            })
        }
        AssistanceType::FollowUpSuggestion => {
            AssistanceSignal::FollowUpSuggestion(FollowUpPayload {
                insight_id,
                topic: "Vendor shortlist".to_string(),
                reason: "Left open last week".to_string(),
                related_content_id: "mtg-70".to_string(),
                related_title: "Procurement sync".to_string(),
                related_date: "2026-03-05".to_string(),
                urgency: "medium".to_string(),
                context_snippet: "We'll revisit the shortlist.".to_string(),
                confidence: value,
                timestamp: at(),
            })
        }
    }
}

pub fn insight(insight_type: LiveInsightType) -> LiveInsight {
    LiveInsight {
        insight_id: format!("ins-{insight_type}"),
        insight_type,
        title: "Noted".to_string(),
        content: "Something worth remembering.".to_string(),
        confidence: None,
        source_segment: None,
        timestamp: at(),
    }
}

/// Sample values covering every band, both edges, and out-of-range inputs.
pub const SWEEP: [f64; 14] = [
    -0.5, 0.0, 0.3, 0.5, 0.65, 0.66, 0.7, 0.75, 0.76, 0.8, 0.81, 0.9, 1.0, 1.5,
];
