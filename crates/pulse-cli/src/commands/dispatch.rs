use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Classify(args) => commands::classify::handle(&args, ctx, flags),
        Commands::Evaluate(args) => commands::evaluate::handle(&args, ctx, flags),
        Commands::Insights(args) => commands::insights::handle(&args, ctx, flags),
        Commands::Settings { action } => commands::settings::handle(&action, ctx, flags),
        Commands::Questions(args) => commands::questions::handle(&args, ctx, flags),
        Commands::Actions(args) => commands::actions::handle(&args, ctx, flags),
        Commands::Feedback(args) => commands::feedback::handle(&args, ctx, flags),
        Commands::Config(args) => commands::config::handle(&args, ctx, flags),
        Commands::Schema(args) => commands::schema::handle(&args, flags),
    }
}
