use std::path::PathBuf;

use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `pulse` binary.
#[derive(Debug, Parser)]
#[command(
    name = "pulse",
    version,
    about = "Pulse - live-meeting insight rules, offline"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Settings JSON file (defaults to `general.settings_path` from config)
    #[arg(short, long, global = true)]
    pub settings: Option<PathBuf>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            verbose: self.verbose,
            settings: self.settings.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use clap::{CommandFactory, Parser};

    use super::subcommands::SettingsCommands;
    use super::{Cli, Commands, GlobalFlags, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from([
            "pulse",
            "--format",
            "table",
            "--verbose",
            "evaluate",
            "signals.jsonl",
        ])
        .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Table);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Evaluate(_)));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["pulse", "settings", "show", "--format", "raw", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
        assert!(matches!(
            cli.command,
            Commands::Settings {
                action: SettingsCommands::Show
            }
        ));
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["pulse", "--format", "xml", "settings", "show"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn classify_requires_type_and_value() {
        assert!(Cli::try_parse_from(["pulse", "classify", "--type", "auto-answer"]).is_err());

        let cli = Cli::try_parse_from([
            "pulse",
            "classify",
            "--type",
            "auto-answer",
            "--value",
            "0.9",
        ])
        .expect("cli should parse");
        let Commands::Classify(args) = cli.command else {
            panic!("expected classify");
        };
        assert_eq!(args.assistance_type, "auto-answer");
        assert!((args.value - 0.9).abs() < f64::EPSILON);
    }

    #[test]
    fn settings_set_collects_repeated_phase_flags() {
        let cli = Cli::try_parse_from([
            "pulse",
            "settings",
            "set",
            "--enable-phase",
            "follow-up-suggestion",
            "--enable-phase",
            "clarification-needed",
            "--disable-insight",
            "risk",
            "--quiet-mode",
            "true",
        ])
        .expect("cli should parse");

        let Commands::Settings {
            action: SettingsCommands::Set(args),
        } = cli.command
        else {
            panic!("expected settings set");
        };
        assert_eq!(
            args.enable_phase,
            vec!["follow-up-suggestion", "clarification-needed"]
        );
        assert_eq!(args.disable_insight, vec!["risk"]);
        assert_eq!(args.quiet_mode, Some(true));
        assert_eq!(args.show_collapsed, None);
    }

    #[test]
    fn feedback_needs_exactly_one_verdict() {
        let base = ["pulse", "feedback", "--insight-id", "ins-1", "--type", "auto-answer"];
        assert!(Cli::try_parse_from(base).is_err());
        assert!(
            Cli::try_parse_from(base.iter().copied().chain(["--helpful", "--not-helpful"])).is_err()
        );
        assert!(Cli::try_parse_from(base.iter().copied().chain(["--not-helpful"])).is_ok());
    }

    #[test]
    fn schema_list_needs_no_name() {
        let cli = Cli::try_parse_from(["pulse", "schema", "--list"]).expect("cli should parse");
        let Commands::Schema(args) = cli.command else {
            panic!("expected schema");
        };
        assert!(args.list);
        assert!(args.name.is_none());
    }

    #[test]
    fn global_flags_extraction_copies_values() {
        let cli = Cli::try_parse_from(["pulse", "--settings", "/tmp/prefs.json", "settings", "show"])
            .expect("cli should parse");
        let flags: GlobalFlags = cli.global_flags();
        assert_eq!(flags.settings, Some(PathBuf::from("/tmp/prefs.json")));
    }
}
