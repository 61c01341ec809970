use pulse_core::entities::AssistanceSignal;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::EvaluateArgs;
use crate::commands::shared::jsonl::read_records;
use crate::context::AppContext;
use crate::output::output;

/// Handle `pulse evaluate`.
pub fn handle(args: &EvaluateArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let settings = ctx.load_settings()?;
    let signals: Vec<AssistanceSignal> = read_records(&args.path)?;

    let mut decisions = ctx.filter().reevaluate(&signals, &settings);
    if args.visible_only {
        decisions.retain(|decision| decision.visible);
    }
    output(&decisions, flags.format)
}
