use clap::{Args, Subcommand};

/// Live-insights settings commands.
#[derive(Clone, Debug, Subcommand)]
pub enum SettingsCommands {
    /// Print the current settings.
    Show,
    /// Restore the defaults.
    Reset,
    /// Change one or more settings.
    Set(SettingsSetArgs),
}

#[derive(Clone, Debug, Args)]
pub struct SettingsSetArgs {
    #[arg(long)]
    pub quiet_mode: Option<bool>,
    #[arg(long)]
    pub show_collapsed: Option<bool>,
    #[arg(long)]
    pub enable_feedback: Option<bool>,
    #[arg(long)]
    pub auto_expand: Option<bool>,
    /// Assistance type to enable (repeatable)
    #[arg(long)]
    pub enable_phase: Vec<String>,
    /// Assistance type to disable (repeatable)
    #[arg(long)]
    pub disable_phase: Vec<String>,
    /// Insight type to enable (repeatable)
    #[arg(long)]
    pub enable_insight: Vec<String>,
    /// Insight type to disable (repeatable)
    #[arg(long)]
    pub disable_insight: Vec<String>,
}

impl SettingsSetArgs {
    /// Whether no change was requested.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.quiet_mode.is_none()
            && self.show_collapsed.is_none()
            && self.enable_feedback.is_none()
            && self.auto_expand.is_none()
            && self.enable_phase.is_empty()
            && self.disable_phase.is_empty()
            && self.enable_insight.is_empty()
            && self.disable_insight.is_empty()
    }
}
