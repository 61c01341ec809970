//! # pulse-engine
//!
//! Rules that decide what a live-meeting assistant shows: priority per
//! assistance type, display mode from confidence or completeness, settings
//! suppression, four-tier answer aggregation, and action-item badges.
//!
//! Everything here is a pure function of its inputs. Settings are passed as an
//! immutable snapshot on each call; the only side effect is the optional
//! feedback sink.

pub mod aggregator;
pub mod classifier;
pub mod completeness;
pub mod error;
pub mod feedback;
pub mod filter;
pub mod priority;

pub use aggregator::{TierAggregator, summarize};
pub use classifier::{DisplayModeClassifier, classify};
pub use completeness::{completeness_level, score_action, score_action_with};
pub use error::FeedbackError;
pub use feedback::{FeedbackDispatcher, FeedbackOutcome, FeedbackSink, JsonlFeedbackSink};
pub use filter::{SettingsFilter, evaluate_insight, should_show_assistance, should_show_insight};
pub use priority::resolve_priority;
