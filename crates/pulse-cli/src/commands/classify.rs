use pulse_core::enums::AssistanceType;
use pulse_core::responses::ClassifyResponse;
use pulse_engine::resolve_priority;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ClassifyArgs;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

/// Handle `pulse classify`.
pub fn handle(args: &ClassifyArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let assistance_type: AssistanceType = parse_enum(&args.assistance_type, "assistance type")?;
    let response = ClassifyResponse {
        assistance_type,
        value: args.value,
        priority: resolve_priority(assistance_type),
        display_mode: ctx.classifier().classify(assistance_type, args.value),
    };
    output(&response, flags.format)
}
