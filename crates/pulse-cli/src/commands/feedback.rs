use pulse_core::entities::InsightFeedback;
use serde_json::json;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::FeedbackArgs;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

/// Handle `pulse feedback`. Delivery problems are reported, never fatal.
pub fn handle(args: &FeedbackArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let settings = ctx.load_settings()?;
    let feedback = InsightFeedback {
        insight_id: args.insight_id.clone(),
        helpful: args.helpful && !args.not_helpful,
        assistance_type: parse_enum(&args.assistance_type, "assistance type")?,
    };

    let outcome = ctx.feedback().send(&feedback, &settings);
    let detail = match &outcome {
        pulse_engine::FeedbackOutcome::Dropped(reason) => Some(reason.clone()),
        _ => None,
    };
    output(
        &json!({
            "feedback": feedback,
            "outcome": outcome.as_str(),
            "detail": detail,
        }),
        flags.format,
    )
}
