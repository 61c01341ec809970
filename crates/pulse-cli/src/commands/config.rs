use anyhow::Context;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ConfigArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `pulse config`.
pub fn handle(args: &ConfigArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    if args.toml {
        let text = toml::to_string_pretty(&ctx.config).context("failed to encode config as TOML")?;
        print!("{text}");
        return Ok(());
    }
    output(&ctx.config, flags.format)
}
