use pulse_core::enums::{AssistanceType, LiveInsightType};
use pulse_core::settings::LiveInsightsSettings;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::{SettingsCommands, SettingsSetArgs};
use crate::commands::shared::parse::parse_all;
use crate::context::AppContext;
use crate::output::output;

/// Handle `pulse settings`.
pub fn handle(
    action: &SettingsCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        SettingsCommands::Show => output(&ctx.load_settings()?, flags.format),
        SettingsCommands::Reset => {
            let settings = LiveInsightsSettings::default();
            ctx.settings.save(&settings)?;
            tracing::debug!(path = %ctx.settings.path().display(), "settings reset");
            output(&settings, flags.format)
        }
        SettingsCommands::Set(args) => {
            if args.is_empty() {
                anyhow::bail!("nothing to change; pass at least one settings flag");
            }
            let settings = apply(ctx.load_settings()?, args)?;
            ctx.settings.save(&settings)?;
            output(&settings, flags.format)
        }
    }
}

/// Apply `settings set` flags. Disables run after enables.
fn apply(
    mut settings: LiveInsightsSettings,
    args: &SettingsSetArgs,
) -> anyhow::Result<LiveInsightsSettings> {
    if let Some(quiet) = args.quiet_mode {
        settings = settings.with_quiet_mode(quiet);
    }
    if let Some(show) = args.show_collapsed {
        settings = settings.with_show_collapsed_items(show);
    }
    if let Some(enable) = args.enable_feedback {
        settings = settings.with_enable_feedback(enable);
    }
    if let Some(auto_expand) = args.auto_expand {
        settings = settings.with_auto_expand_high_confidence(auto_expand);
    }

    for ty in parse_all::<AssistanceType>(&args.enable_phase, "assistance type")? {
        settings = settings.with_phase(ty, true);
    }
    for ty in parse_all::<AssistanceType>(&args.disable_phase, "assistance type")? {
        settings = settings.with_phase(ty, false);
    }
    for ty in parse_all::<LiveInsightType>(&args.enable_insight, "insight type")? {
        settings = settings.with_insight_type(ty, true);
    }
    for ty in parse_all::<LiveInsightType>(&args.disable_insight, "insight type")? {
        settings = settings.with_insight_type(ty, false);
    }
    Ok(settings)
}
