use pulse_core::entities::QuestionEvent;
use pulse_core::responses::QuestionSummary;
use pulse_engine::summarize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::QuestionsArgs;
use crate::commands::shared::jsonl::read_records;
use crate::context::AppContext;
use crate::output::output;

/// Handle `pulse questions`.
pub fn handle(args: &QuestionsArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let events: Vec<QuestionEvent> = read_records(&args.path)?;
    let questions = ctx.aggregator().replay(events)?;

    let summaries: Vec<QuestionSummary> = questions.iter().map(summarize).collect();
    output(&summaries, flags.format)
}
