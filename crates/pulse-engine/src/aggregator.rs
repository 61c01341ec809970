//! Four-tier answer aggregation for live questions.
//!
//! Tier results are kept in arrival order and never re-ranked; presentation
//! shows all of them side by side. Only the question status is derived:
//!
//! - a live-transcript result at or above `usable_confidence`, or any result at
//!   or above `answered_confidence`, answers the question;
//! - any other non-live result at or above `usable_confidence` marks it found;
//! - weaker results are recorded without moving the status.
//!
//! Moves that the status machine does not allow (e.g. `found` after
//! `answered`) are ignored, the result is still recorded.

use std::collections::HashMap;

use pulse_core::entities::{LiveQuestion, QuestionEvent, TierResult};
use pulse_core::enums::QuestionStatus;
use pulse_core::errors::CoreError;
use pulse_core::responses::{QuestionSummary, TierResultView};
use pulse_core::thresholds::TierThresholds;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TierAggregator {
    thresholds: TierThresholds,
}

impl TierAggregator {
    #[must_use]
    pub const fn new(thresholds: TierThresholds) -> Self {
        Self { thresholds }
    }

    #[must_use]
    pub const fn thresholds(&self) -> &TierThresholds {
        &self.thresholds
    }

    /// Append `result` to the question and advance its status if warranted.
    ///
    /// Closed questions keep collecting results for display only.
    pub fn record_result(&self, question: &mut LiveQuestion, result: TierResult) -> QuestionStatus {
        let target = self.status_for(&result);
        question.tier_results.push(result);
        if question.status.is_terminal() {
            tracing::debug!(
                question_id = %question.id,
                status = %question.status,
                results = question.tier_results.len(),
                "result recorded on closed question"
            );
        } else if let Some(next) = target {
            advance(question, next);
        }
        question.status
    }

    /// Search tiers yielded nothing usable; start watching the live transcript.
    pub fn begin_monitoring(&self, question: &mut LiveQuestion) -> QuestionStatus {
        if question.status == QuestionStatus::Searching {
            advance(question, QuestionStatus::Monitoring);
        }
        question.status
    }

    /// Close the search window. Questions without a usable result end unanswered.
    pub fn exhaust(&self, question: &mut LiveQuestion) -> QuestionStatus {
        if matches!(
            question.status,
            QuestionStatus::Searching | QuestionStatus::Monitoring
        ) {
            advance(question, QuestionStatus::Unanswered);
        }
        question.status
    }

    /// Explicitly move a question to `next`.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidTransition`] if the status machine does not
    /// allow the move.
    pub fn transition(
        &self,
        question: &mut LiveQuestion,
        next: QuestionStatus,
    ) -> Result<(), CoreError> {
        if !question.status.can_transition_to(next) {
            return Err(CoreError::question_transition(
                &question.id,
                question.status,
                next,
            ));
        }
        question.status = next;
        Ok(())
    }

    /// Apply a lifecycle event stream and return the resulting questions in
    /// order of first appearance.
    ///
    /// # Errors
    ///
    /// - [`CoreError::NotFound`] for an event on a question that was never asked.
    /// - [`CoreError::Validation`] for a second `asked` with the same id.
    pub fn replay<I>(&self, events: I) -> Result<Vec<LiveQuestion>, CoreError>
    where
        I: IntoIterator<Item = QuestionEvent>,
    {
        let mut questions: Vec<LiveQuestion> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();

        for event in events {
            match event {
                QuestionEvent::Asked {
                    question_id,
                    text,
                    speaker,
                    timestamp,
                } => {
                    if index.contains_key(&question_id) {
                        tracing::warn!(question_id = %question_id, "duplicate asked event rejected");
                        return Err(CoreError::Validation(format!(
                            "question {question_id} was asked twice"
                        )));
                    }
                    index.insert(question_id.clone(), questions.len());
                    questions.push(LiveQuestion::new(question_id, text, speaker, timestamp));
                }
                QuestionEvent::TierResult {
                    question_id,
                    result,
                } => {
                    let question = asked(&mut questions, &index, &question_id)?;
                    self.record_result(question, result);
                }
                QuestionEvent::Monitoring { question_id } => {
                    self.begin_monitoring(asked(&mut questions, &index, &question_id)?);
                }
                QuestionEvent::Exhausted { question_id } => {
                    self.exhaust(asked(&mut questions, &index, &question_id)?);
                }
            }
        }

        Ok(questions)
    }

    fn status_for(&self, result: &TierResult) -> Option<QuestionStatus> {
        let confidence = result.confidence;
        let usable = confidence >= self.thresholds.usable_confidence;
        if confidence >= self.thresholds.answered_confidence
            || (usable && result.tier_type.is_live())
        {
            Some(QuestionStatus::Answered)
        } else if usable {
            Some(QuestionStatus::Found)
        } else {
            None
        }
    }
}

/// Presentation view of a question: status plus every result in arrival order.
#[must_use]
pub fn summarize(question: &LiveQuestion) -> QuestionSummary {
    QuestionSummary {
        question_id: question.id.clone(),
        text: question.text.clone(),
        status: question.status,
        results: question
            .tier_results
            .iter()
            .map(|result| TierResultView {
                tier_type: result.tier_type,
                content: result.content.clone(),
                confidence: result.confidence,
                source: result.source.clone(),
                found_at: result.found_at,
                requires_disclaimer: result.requires_disclaimer(),
            })
            .collect(),
    }
}

fn asked<'a>(
    questions: &'a mut [LiveQuestion],
    index: &HashMap<String, usize>,
    question_id: &str,
) -> Result<&'a mut LiveQuestion, CoreError> {
    let Some(question) = index.get(question_id).and_then(|&slot| questions.get_mut(slot)) else {
        tracing::warn!(question_id = %question_id, "event for unknown question rejected");
        return Err(CoreError::NotFound {
            entity_type: "live_question".to_string(),
            id: question_id.to_string(),
        });
    };
    Ok(question)
}

fn advance(question: &mut LiveQuestion, next: QuestionStatus) {
    if question.status == next {
        return;
    }
    if question.status.can_transition_to(next) {
        tracing::debug!(
            question_id = %question.id,
            from = %question.status,
            to = %next,
            "live question status changed"
        );
        question.status = next;
    } else {
        tracing::debug!(
            question_id = %question.id,
            status = %question.status,
            ignored = %next,
            "status change not allowed; keeping current status"
        );
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use pretty_assertions::assert_eq;
    use pulse_core::enums::TierType;

    use super::*;

    fn question() -> LiveQuestion {
        LiveQuestion::new("q-1", "What's the launch date?", None, Utc::now())
    }

    fn result(tier_type: TierType, confidence: f64) -> TierResult {
        TierResult {
            tier_type,
            content: format!("{tier_type} answer"),
            confidence,
            source: None,
            found_at: Utc::now(),
        }
    }

    #[test]
    fn new_question_is_searching() {
        assert_eq!(question().status, QuestionStatus::Searching);
    }

    #[test]
    fn usable_document_result_marks_found() {
        let aggregator = TierAggregator::default();
        let mut q = question();
        let status = aggregator.record_result(&mut q, result(TierType::Rag, 0.7));
        assert_eq!(status, QuestionStatus::Found);
    }

    #[test]
    fn weak_result_is_recorded_without_status_change() {
        let aggregator = TierAggregator::default();
        let mut q = question();
        aggregator.record_result(&mut q, result(TierType::MeetingContext, 0.2));
        assert_eq!(q.status, QuestionStatus::Searching);
        assert_eq!(q.tier_results.len(), 1);
    }

    #[test]
    fn live_conversation_answers() {
        let aggregator = TierAggregator::default();
        let mut q = question();
        aggregator.begin_monitoring(&mut q);
        let status = aggregator.record_result(&mut q, result(TierType::LiveConversation, 0.6));
        assert_eq!(status, QuestionStatus::Answered);
    }

    #[test]
    fn highly_confident_document_answers_directly() {
        let aggregator = TierAggregator::default();
        let mut q = question();
        let status = aggregator.record_result(&mut q, result(TierType::Rag, 0.92));
        assert_eq!(status, QuestionStatus::Answered);
    }

    #[test]
    fn found_upgrades_to_answered() {
        let aggregator = TierAggregator::default();
        let mut q = question();
        aggregator.record_result(&mut q, result(TierType::Rag, 0.6));
        aggregator.record_result(&mut q, result(TierType::LiveConversation, 0.7));
        assert_eq!(q.status, QuestionStatus::Answered);
    }

    #[test]
    fn answered_is_not_downgraded_but_results_accumulate() {
        let aggregator = TierAggregator::default();
        let mut q = question();
        aggregator.record_result(&mut q, result(TierType::LiveConversation, 0.9));
        aggregator.record_result(&mut q, result(TierType::GptGenerated, 0.6));
        assert_eq!(q.status, QuestionStatus::Answered);
        assert_eq!(q.tier_results.len(), 2);
    }

    #[test]
    fn gpt_fallback_counts_as_found_and_needs_disclaimer() {
        let aggregator = TierAggregator::default();
        let mut q = question();
        aggregator.begin_monitoring(&mut q);
        aggregator.record_result(&mut q, result(TierType::GptGenerated, 0.55));
        assert_eq!(q.status, QuestionStatus::Found);

        let summary = summarize(&q);
        assert!(summary.results[0].requires_disclaimer);
    }

    #[test]
    fn exhaust_without_usable_result_is_unanswered() {
        let aggregator = TierAggregator::default();
        let mut q = question();
        aggregator.begin_monitoring(&mut q);
        assert_eq!(q.status, QuestionStatus::Monitoring);
        assert_eq!(aggregator.exhaust(&mut q), QuestionStatus::Unanswered);
    }

    #[test]
    fn exhaust_keeps_found_questions() {
        let aggregator = TierAggregator::default();
        let mut q = question();
        aggregator.record_result(&mut q, result(TierType::Rag, 0.6));
        assert_eq!(aggregator.exhaust(&mut q), QuestionStatus::Found);
    }

    #[test]
    fn monitoring_is_only_entered_from_searching() {
        let aggregator = TierAggregator::default();
        let mut q = question();
        aggregator.record_result(&mut q, result(TierType::Rag, 0.6));
        assert_eq!(aggregator.begin_monitoring(&mut q), QuestionStatus::Found);
    }

    #[test]
    fn answered_question_ignores_weaker_results() {
        let aggregator = TierAggregator::default();
        let mut q = question();
        aggregator.record_result(&mut q, result(TierType::Rag, 0.9));
        assert_eq!(q.status, QuestionStatus::Answered);
        let status = aggregator.record_result(&mut q, result(TierType::MeetingContext, 0.6));
        assert_eq!(status, QuestionStatus::Answered);
        assert_eq!(q.tier_results.len(), 2);
    }

    #[test]
    fn unanswered_stays_terminal() {
        let aggregator = TierAggregator::default();
        let mut q = question();
        aggregator.exhaust(&mut q);
        aggregator.record_result(&mut q, result(TierType::LiveConversation, 0.95));
        assert_eq!(q.status, QuestionStatus::Unanswered);
        assert_eq!(q.tier_results.len(), 1);
    }

    #[test]
    fn explicit_invalid_transition_is_an_error() {
        let aggregator = TierAggregator::default();
        let mut q = question();
        aggregator.record_result(&mut q, result(TierType::Rag, 0.6));
        let err = aggregator
            .transition(&mut q, QuestionStatus::Unanswered)
            .unwrap_err();
        assert!(matches!(err, CoreError::InvalidTransition { .. }));
        assert!(err.to_string().contains("from found to unanswered"));
    }

    #[test]
    fn summary_preserves_arrival_order() {
        let aggregator = TierAggregator::default();
        let mut q = question();
        aggregator.record_result(&mut q, result(TierType::GptGenerated, 0.5));
        aggregator.record_result(&mut q, result(TierType::Rag, 0.3));
        aggregator.record_result(&mut q, result(TierType::LiveConversation, 0.8));

        let tiers: Vec<TierType> = summarize(&q)
            .results
            .iter()
            .map(|r| r.tier_type)
            .collect();
        assert_eq!(
            tiers,
            vec![
                TierType::GptGenerated,
                TierType::Rag,
                TierType::LiveConversation
            ]
        );
    }
}
