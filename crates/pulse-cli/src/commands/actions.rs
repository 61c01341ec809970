use pulse_core::entities::LiveAction;
use pulse_core::responses::ActionScore;
use pulse_engine::score_action_with;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ActionsArgs;
use crate::commands::shared::jsonl::read_records;
use crate::context::AppContext;
use crate::output::output;

/// Handle `pulse actions`.
pub fn handle(args: &ActionsArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let actions: Vec<LiveAction> = read_records(&args.path)?;
    let classifier = ctx.classifier();

    let scores: Vec<ActionScore> = actions
        .iter()
        .map(|action| score_action_with(action, &classifier))
        .collect();
    output(&scores, flags.format)
}
