use std::path::PathBuf;

use clap::{ArgGroup, Args, Subcommand};

use crate::cli::subcommands::SettingsCommands;

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Priority and display mode for one (type, value) pair.
    Classify(ClassifyArgs),
    /// Filter a JSONL stream of assistance signals against the settings.
    Evaluate(EvaluateArgs),
    /// Show/hide a JSONL stream of plain insights.
    Insights(InsightsArgs),
    /// Read or change the persisted live-insights settings.
    Settings {
        #[command(subcommand)]
        action: SettingsCommands,
    },
    /// Replay question lifecycle events and summarize each question.
    Questions(QuestionsArgs),
    /// Completeness badge for each action item.
    Actions(ActionsArgs),
    /// Send helpful / not-helpful feedback for one signal.
    Feedback(FeedbackArgs),
    /// Print the effective configuration.
    Config(ConfigArgs),
    /// Print JSON Schemas of the wire types.
    Schema(SchemaArgs),
}

#[derive(Clone, Debug, Args)]
pub struct ClassifyArgs {
    /// Assistance type (e.g. auto-answer, conflict-detected)
    #[arg(long = "type")]
    pub assistance_type: String,
    /// Confidence, or completeness score for incomplete-action-item
    #[arg(long, allow_negative_numbers = true)]
    pub value: f64,
}

#[derive(Clone, Debug, Args)]
pub struct EvaluateArgs {
    /// JSONL file of signals ('-' for stdin)
    pub path: PathBuf,
    /// Only print visible signals
    #[arg(long)]
    pub visible_only: bool,
}

#[derive(Clone, Debug, Args)]
pub struct InsightsArgs {
    /// JSONL file of insights ('-' for stdin)
    pub path: PathBuf,
}

#[derive(Clone, Debug, Args)]
pub struct QuestionsArgs {
    /// JSONL file of question events ('-' for stdin)
    pub path: PathBuf,
}

#[derive(Clone, Debug, Args)]
pub struct ActionsArgs {
    /// JSONL file of action items ('-' for stdin)
    pub path: PathBuf,
}

#[derive(Clone, Debug, Args)]
#[command(group(ArgGroup::new("verdict").required(true).args(["helpful", "not_helpful"])))]
pub struct FeedbackArgs {
    #[arg(long)]
    pub insight_id: String,
    /// Assistance type the feedback is about
    #[arg(long = "type")]
    pub assistance_type: String,
    #[arg(long)]
    pub helpful: bool,
    #[arg(long)]
    pub not_helpful: bool,
}

#[derive(Clone, Debug, Args)]
pub struct ConfigArgs {
    /// Print as TOML instead of the selected output format
    #[arg(long)]
    pub toml: bool,
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Schema name (see --list)
    #[arg(required_unless_present = "list")]
    pub name: Option<String>,
    /// List registered schema names
    #[arg(long, conflicts_with = "validate")]
    pub list: bool,
    /// Validate each record of a JSONL file against the schema
    #[arg(long, value_name = "PATH")]
    pub validate: Option<PathBuf>,
}
