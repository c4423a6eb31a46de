use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{ColorMode, GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `jarvis` binary.
#[derive(Debug, Parser)]
#[command(
    name = "jarvis",
    version,
    about = "Jarvis - turn free-text requests into tasks via an automation webhook"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "table")]
    pub format: OutputFormat,

    /// Max rows to show
    #[arg(short, long, global = true)]
    pub limit: Option<u32>,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Table colors: auto, always, never
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorMode,

    /// Directory for persisted state (defaults to the platform data directory)
    #[arg(long, global = true)]
    pub data_dir: Option<String>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            limit: self.limit,
            quiet: self.quiet,
            verbose: self.verbose,
            color: self.color,
            data_dir: self.data_dir.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::subcommands::{SettingsCommands, Toggle};
    use super::{Cli, Commands, GlobalFlags, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from([
            "jarvis", "--format", "json", "--limit", "10", "--verbose", "refresh",
        ])
        .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.limit, Some(10));
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Refresh));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["jarvis", "refresh", "--format", "raw", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["jarvis", "--format", "xml", "refresh"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn send_joins_words_into_one_message() {
        let cli = Cli::try_parse_from(["jarvis", "send", "remind", "me", "to", "call", "John"])
            .expect("cli should parse");
        let Commands::Send(args) = cli.command else {
            panic!("expected send");
        };
        assert_eq!(args.text(), "remind me to call John");
    }

    #[test]
    fn send_requires_a_message() {
        assert!(Cli::try_parse_from(["jarvis", "send"]).is_err());
    }

    #[test]
    fn status_takes_id_and_status() {
        let cli = Cli::try_parse_from(["jarvis", "status", "task-1", "done"])
            .expect("cli should parse");
        let Commands::Status(args) = cli.command else {
            panic!("expected status");
        };
        assert_eq!(args.id, "task-1");
        assert_eq!(args.status, "done");
    }

    #[test]
    fn settings_discord_parses_toggle() {
        let cli = Cli::try_parse_from(["jarvis", "settings", "discord", "on"])
            .expect("cli should parse");
        assert!(matches!(
            cli.command,
            Commands::Settings {
                action: SettingsCommands::Discord { state: Toggle::On }
            }
        ));
        assert!(Cli::try_parse_from(["jarvis", "settings", "discord", "maybe"]).is_err());
    }

    #[test]
    fn global_flags_extraction_copies_values() {
        let cli = Cli::try_parse_from(["jarvis", "--data-dir", "/tmp/jarvis", "history"])
            .expect("cli should parse");
        let flags: GlobalFlags = cli.global_flags();
        assert_eq!(flags.data_dir.as_deref(), Some("/tmp/jarvis"));
        assert_eq!(flags.format, OutputFormat::Table);
    }
}
