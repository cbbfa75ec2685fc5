//! CLI argument definitions.

use crate::cli::validators::parse_seconds;
use crate::config::OutputMode;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Merge SRT subtitle blocks separated by short gaps.
#[derive(Debug, Parser)]
#[command(name = "srt-merge")]
#[command(author, version, about, long_about = None)]
#[command(subcommand_negates_reqs = true)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Input SRT file. Write `./config` or put `--` before the paths for a
    /// file literally named `config`.
    #[arg(required = true)]
    pub input: Option<PathBuf>,

    /// Output SRT file.
    #[arg(required = true)]
    pub output: Option<PathBuf>,

    /// Merge options.
    #[command(flatten)]
    pub merge: MergeArgs,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    Config {
        /// Configuration action to perform.
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config subcommand actions.
#[derive(Debug, Clone, Copy, Subcommand)]
pub enum ConfigAction {
    /// Create default configuration file.
    Init,
    /// Display current configuration.
    Show,
    /// Print configuration file path.
    Path,
}

/// Arguments for the merge run.
#[derive(Debug, Args)]
pub struct MergeArgs {
    /// Largest gap in seconds between blocks that still merges them [default: 1.0].
    #[arg(long, value_parser = parse_seconds)]
    pub threshold: Option<f64>,

    /// Largest span in seconds a merged block may reach [default: 120.0].
    #[arg(long, value_parser = parse_seconds)]
    pub max_duration: Option<f64>,

    /// Keep blocks with fewer than two letters or digits.
    #[arg(long)]
    pub keep_single_char: bool,

    /// Config file to use instead of the platform default.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// How results are printed on stdout.
    #[arg(long, value_enum, default_value = "human", global = true)]
    pub output_mode: OutputMode,

    /// Only log warnings and errors.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase verbosity (-v: debug, -vv: trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_simple() {
        let cli = Cli::try_parse_from(["srt-merge", "in.srt", "out.srt"]).unwrap();
        assert_eq!(cli.input, Some(PathBuf::from("in.srt")));
        assert_eq!(cli.output, Some(PathBuf::from("out.srt")));
        assert_eq!(cli.merge.threshold, None);
        assert_eq!(cli.merge.max_duration, None);
        assert!(!cli.merge.keep_single_char);
        assert_eq!(cli.merge.output_mode, OutputMode::Human);
    }

    #[test]
    fn test_cli_parse_with_options() {
        let cli = Cli::try_parse_from([
            "srt-merge",
            "in.srt",
            "out.srt",
            "--threshold",
            "0.3",
            "--max-duration",
            "60",
            "--keep-single-char",
            "--output-mode",
            "json",
            "-vv",
        ])
        .unwrap();
        assert_eq!(cli.merge.threshold, Some(0.3));
        assert_eq!(cli.merge.max_duration, Some(60.0));
        assert!(cli.merge.keep_single_char);
        assert_eq!(cli.merge.output_mode, OutputMode::Json);
        assert_eq!(cli.merge.verbose, 2);
    }

    #[test]
    fn test_cli_requires_both_paths() {
        assert!(Cli::try_parse_from(["srt-merge"]).is_err());
        assert!(Cli::try_parse_from(["srt-merge", "in.srt"]).is_err());
    }

    #[test]
    fn test_cli_rejects_negative_threshold() {
        let cli = Cli::try_parse_from(["srt-merge", "a", "b", "--threshold=-1"]);
        assert!(cli.is_err());
    }

    #[test]
    fn test_cli_parse_config_subcommand() {
        let cli = Cli::try_parse_from(["srt-merge", "config", "show"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Command::Config {
                action: ConfigAction::Show
            })
        ));
        assert_eq!(cli.input, None);
    }

    #[test]
    fn test_input_named_like_subcommand() {
        let cli = Cli::try_parse_from(["srt-merge", "--", "config", "out.srt"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.input, Some(PathBuf::from("config")));
        assert_eq!(cli.output, Some(PathBuf::from("out.srt")));

        let cli = Cli::try_parse_from(["srt-merge", "./config", "out.srt"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.input, Some(PathBuf::from("./config")));

        // Bare name is the subcommand
        assert!(Cli::try_parse_from(["srt-merge", "config", "out.srt"]).is_err());
    }
}
