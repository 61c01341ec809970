//! Serde roundtrip and JsonSchema validation tests for wire types.

use chrono::Utc;
use pretty_assertions::assert_eq;
use schemars::schema_for;
use pulse_core::entities::*;
use pulse_core::enum_set::EnumSet;
use pulse_core::enums::*;
use pulse_core::responses::*;
use pulse_core::settings::LiveInsightsSettings;

/// Validate a JSON value against a schemars-generated schema.
fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

macro_rules! roundtrip_and_validate {
    ($name:ident, $ty:ty, $instance:expr) => {
        #[test]
        fn $name() {
            let val: $ty = $instance;

            // Serde roundtrip
            let json_str = serde_json::to_string_pretty(&val).unwrap();
            let recovered: $ty = serde_json::from_str(&json_str).unwrap();
            assert_eq!(
                recovered,
                val,
                "serde roundtrip failed for {}",
                stringify!($ty)
            );

            // Schema validation
            let schema = serde_json::to_value(schema_for!($ty)).unwrap();
            let instance = serde_json::to_value(&val).unwrap();
            let errors = validate_against_schema(&schema, &instance);
            assert!(
                errors.is_empty(),
                "Schema validation failed for {}: {:?}",
                stringify!($ty),
                errors
            );
        }
    };
}

roundtrip_and_validate!(
    auto_answer_roundtrip,
    AssistanceSignal,
    AssistanceSignal::AutoAnswer(AutoAnswerPayload {
        insight_id: "ins-aa01".into(),
        question: "When does the beta ship?".into(),
        answer: "The beta ships on March 3rd.".into(),
        confidence: 0.91,
        sources: vec![AnswerSource {
            content_id: "doc-442".into(),
            title: "Q1 release plan".into(),
            snippet: "Beta release scheduled for March 3".into(),
            date: "2026-01-12".into(),
            relevance_score: 0.88,
            meeting_type: Some("planning".into()),
        }],
        reasoning: "Release plan states the date explicitly.".into(),
        timestamp: Utc::now(),
    })
);

roundtrip_and_validate!(
    clarification_roundtrip,
    AssistanceSignal,
    AssistanceSignal::ClarificationNeeded(ClarificationPayload {
        insight_id: "ins-cl01".into(),
        statement: "We'll get to it soon.".into(),
        vagueness_type: "timeline".into(),
        suggested_questions: vec!["Which sprint?".into()],
        confidence: 0.72,
        timestamp: Utc::now(),
    })
);

roundtrip_and_validate!(
    conflict_roundtrip,
    AssistanceSignal,
    AssistanceSignal::ConflictDetected(ConflictPayload {
        insight_id: "ins-cf01".into(),
        current_statement: "We're dropping the Android app.".into(),
        conflicting_content_id: "mtg-118".into(),
        conflicting_title: "Roadmap review".into(),
        conflicting_snippet: "Android app is a Q2 priority".into(),
        conflicting_date: "2026-02-02".into(),
        conflict_severity: "high".into(),
        confidence: 0.85,
        resolution_suggestions: vec!["Confirm with product lead".into()],
        timestamp: Utc::now(),
    })
);

roundtrip_and_validate!(
    action_quality_roundtrip,
    AssistanceSignal,
    AssistanceSignal::IncompleteActionItem(ActionItemQualityPayload {
        insight_id: "ins-ai01".into(),
        action_item: "Update the onboarding doc".into(),
        completeness_score: 0.4,
        issues: vec![
            QualityIssue {
                field: "owner".into(),
                severity: QualitySeverity::Critical,
                message: "No owner assigned".into(),
                suggested_fix: Some("Assign to Dana".into()),
            },
            QualityIssue {
                field: "deadline".into(),
                severity: QualitySeverity::Important,
                message: "No deadline".into(),
                suggested_fix: None,
            },
        ],
        improved_version: Some("Dana to update the onboarding doc by Friday".into()),
        timestamp: Utc::now(),
    })
);

roundtrip_and_validate!(
    follow_up_roundtrip,
    AssistanceSignal,
    AssistanceSignal::FollowUpSuggestion(FollowUpPayload {
        insight_id: "ins-fu01".into(),
        topic: "Vendor contract renewal".into(),
        reason: "Left open in last week's sync".into(),
        related_content_id: "mtg-120".into(),
        related_title: "Weekly sync".into(),
        related_date: "2026-02-09".into(),
        urgency: "medium".into(),
        context_snippet: "We'll revisit the renewal next week".into(),
        confidence: 0.69,
        timestamp: Utc::now(),
    })
);

roundtrip_and_validate!(
    live_question_roundtrip,
    LiveQuestion,
    LiveQuestion {
        id: "q-1".into(),
        text: "Who owns the billing migration?".into(),
        speaker: Some("Speaker 2".into()),
        timestamp: Utc::now(),
        status: QuestionStatus::Found,
        tier_results: vec![
            TierResult {
                tier_type: TierType::Rag,
                content: "Billing migration owned by Platform team".into(),
                confidence: 0.7,
                source: Some("doc-9".into()),
                found_at: Utc::now(),
            },
            TierResult {
                tier_type: TierType::GptGenerated,
                content: "Likely the Platform team".into(),
                confidence: 0.4,
                source: None,
                found_at: Utc::now(),
            },
        ],
    }
);

roundtrip_and_validate!(
    question_event_asked_roundtrip,
    QuestionEvent,
    QuestionEvent::Asked {
        question_id: "q-1".into(),
        text: "Who owns the migration?".into(),
        speaker: Some("Dana".into()),
        timestamp: Utc::now(),
    }
);

roundtrip_and_validate!(
    question_event_tier_result_roundtrip,
    QuestionEvent,
    QuestionEvent::TierResult {
        question_id: "q-1".into(),
        result: TierResult {
            tier_type: TierType::MeetingContext,
            content: "Priya volunteered last sprint.".into(),
            confidence: 0.72,
            source: Some("mtg-31".into()),
            found_at: Utc::now(),
        },
    }
);

roundtrip_and_validate!(
    live_action_roundtrip,
    LiveAction,
    LiveAction {
        id: "act-1".into(),
        description: "Send revised estimate".into(),
        speaker: None,
        timestamp: Utc::now(),
        status: ActionStatus::Tracked,
        owner: Some("Sam".into()),
        deadline: None,
        completeness_score: 0.6,
    }
);

roundtrip_and_validate!(
    live_insight_roundtrip,
    LiveInsight,
    LiveInsight {
        insight_id: "ins-d1".into(),
        insight_type: LiveInsightType::Decision,
        title: "Ship behind a flag".into(),
        content: "The team agreed to ship the new editor behind a feature flag.".into(),
        confidence: Some(0.8),
        source_segment: None,
        timestamp: Utc::now(),
    }
);

roundtrip_and_validate!(
    feedback_roundtrip,
    InsightFeedback,
    InsightFeedback {
        insight_id: "ins-aa01".into(),
        helpful: true,
        assistance_type: AssistanceType::AutoAnswer,
    }
);

roundtrip_and_validate!(
    settings_roundtrip,
    LiveInsightsSettings,
    LiveInsightsSettings::default()
        .with_quiet_mode(true)
        .with_phase(AssistanceType::FollowUpSuggestion, true)
);

roundtrip_and_validate!(
    decision_roundtrip,
    AssistanceDecision,
    AssistanceDecision {
        insight_id: "ins-aa01".into(),
        assistance_type: AssistanceType::AutoAnswer,
        priority: AssistancePriority::Important,
        display_mode: DisplayMode::Collapsed,
        visible: false,
        auto_expand: false,
        suppressed_by: Some(SuppressionReason::QuietMode),
    }
);

#[test]
fn signal_wire_format_is_flat_with_type_tag() {
    let json = serde_json::json!({
        "type": "conflictDetected",
        "insight_id": "ins-cf02",
        "current_statement": "Launch moves to May",
        "conflicting_content_id": "doc-1",
        "conflicting_title": "Launch brief",
        "conflicting_snippet": "Launch is April 14",
        "conflicting_date": "2026-01-30",
        "conflict_severity": "medium",
        "confidence": 0.7,
        "resolution_suggestions": [],
        "timestamp": "2026-02-10T15:04:05Z"
    });
    let signal: AssistanceSignal = serde_json::from_value(json).unwrap();
    assert_eq!(signal.assistance_type(), AssistanceType::ConflictDetected);
    assert_eq!(signal.insight_id(), "ins-cf02");
    assert!((signal.score() - 0.7).abs() < f64::EPSILON);
}

#[test]
fn signal_missing_required_field_fails_to_parse() {
    let json = serde_json::json!({
        "type": "autoAnswer",
        "insight_id": "ins-x",
        "question": "?",
        "confidence": 0.9,
        "reasoning": "",
        "timestamp": "2026-02-10T15:04:05Z"
    });
    assert!(serde_json::from_value::<AssistanceSignal>(json).is_err());
}

#[test]
fn signal_with_unknown_type_fails_to_parse() {
    let json = serde_json::json!({
        "type": "sentimentShift",
        "insight_id": "ins-x",
        "confidence": 0.9,
        "timestamp": "2026-02-10T15:04:05Z"
    });
    assert!(serde_json::from_value::<AssistanceSignal>(json).is_err());
}

#[test]
fn action_quality_signal_scores_by_completeness() {
    let json = serde_json::json!({
        "type": "incompleteActionItem",
        "insight_id": "ins-ai02",
        "action_item": "Fix the flaky test",
        "completeness_score": 0.3,
        "issues": [{"field": "owner", "severity": "critical", "message": "No owner"}],
        "timestamp": "2026-02-10T15:04:05Z"
    });
    let signal: AssistanceSignal = serde_json::from_value(json).unwrap();
    assert_eq!(signal.assistance_type(), AssistanceType::IncompleteActionItem);
    assert!((signal.score() - 0.3).abs() < f64::EPSILON);

    let AssistanceSignal::IncompleteActionItem(payload) = signal else {
        panic!("expected action-item payload");
    };
    assert_eq!(payload.critical_issues().count(), 1);
}

#[test]
fn settings_roundtrip_preserves_sets_regardless_of_order() {
    let forward = r#"{"enabledPhases":["autoAnswer","followUpSuggestion","conflictDetected"],"enabledInsightTypes":["risk","decision"]}"#;
    let reversed = r#"{"enabledPhases":["conflictDetected","followUpSuggestion","autoAnswer"],"enabledInsightTypes":["decision","risk"]}"#;

    let a: LiveInsightsSettings = serde_json::from_str(forward).unwrap();
    let b: LiveInsightsSettings = serde_json::from_str(reversed).unwrap();
    assert_eq!(a, b);

    let recovered: LiveInsightsSettings =
        serde_json::from_str(&serde_json::to_string(&a).unwrap()).unwrap();
    assert_eq!(recovered.enabled_phases, a.enabled_phases);
    assert_eq!(recovered.enabled_insight_types, a.enabled_insight_types);
    assert_eq!(
        recovered.enabled_insight_types,
        EnumSet::from([LiveInsightType::Decision, LiveInsightType::Risk])
    );
}

#[test]
fn question_event_wire_format_uses_event_tag() {
    let event = QuestionEvent::Exhausted {
        question_id: "q-7".into(),
    };
    let json = serde_json::to_value(&event).unwrap();
    assert_eq!(
        json,
        serde_json::json!({"event": "exhausted", "question_id": "q-7"})
    );
}
