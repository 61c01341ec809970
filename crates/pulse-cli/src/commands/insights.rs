use pulse_core::entities::LiveInsight;
use pulse_core::responses::InsightDecision;
use pulse_engine::evaluate_insight;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::InsightsArgs;
use crate::commands::shared::jsonl::read_records;
use crate::context::AppContext;
use crate::output::output;

/// Handle `pulse insights`.
pub fn handle(args: &InsightsArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let settings = ctx.load_settings()?;
    let insights: Vec<LiveInsight> = read_records(&args.path)?;

    let decisions: Vec<InsightDecision> = insights
        .iter()
        .map(|insight| evaluate_insight(insight, &settings))
        .collect();
    output(&decisions, flags.format)
}
