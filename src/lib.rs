//! srt-merge - merge closely spaced SRT subtitle blocks.
//!
//! The pipeline parses an SRT file, drops blocks without meaningful text,
//! merges neighbours separated by short gaps and writes the result as SRT.

#![warn(missing_docs)]

pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod output;
pub mod subtitle;

use clap::Parser;
use cli::{Cli, Command, ConfigAction, MergeArgs};
use config::{
    Config, OutputMode, config_file_path, load_default_config, read_config_file, save_config,
};
use output::{ConfigPayload, ResultType, emit_json_error, emit_json_result};
use std::path::{Path, PathBuf};
use subtitle::{MergeOptions, MergeSettings};
use tracing::debug;

pub use error::{Error, Result};

/// Main entry point for srt-merge CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.merge.verbose, cli.merge.quiet);

    let output_mode = cli.merge.output_mode;
    let result = dispatch(cli);

    if let Err(ref e) = result
        && output_mode.is_structured()
    {
        emit_json_error(e);
    }

    result
}

fn dispatch(cli: Cli) -> Result<()> {
    if let Some(Command::Config { action }) = cli.command {
        return handle_config_command(action, &cli.merge);
    }

    // input and output are guaranteed by clap constraints
    let (Some(input), Some(output)) = (cli.input, cli.output) else {
        return Err(Error::Internal {
            message: "input and output paths are required".to_string(),
        });
    };

    let config = load_config(cli.merge.config.as_deref())?;
    let settings = resolve_settings(&cli.merge, &config);

    subtitle::command::execute(&input, &output, &settings, cli.merge.output_mode)?;
    Ok(())
}

/// Combine command-line flags with config file defaults.
///
/// Flags win over the config file, which wins over built-in defaults.
pub fn resolve_settings(args: &MergeArgs, config: &Config) -> MergeSettings {
    let defaults = &config.defaults;
    MergeSettings {
        merge: MergeOptions {
            threshold: args.threshold.unwrap_or(defaults.threshold),
            max_duration: args.max_duration.unwrap_or(defaults.max_duration),
        },
        drop_single_char: !(args.keep_single_char || defaults.keep_single_char),
    }
}

/// Load the config file given on the command line, or the platform default.
fn load_config(explicit: Option<&Path>) -> Result<Config> {
    match explicit {
        Some(path) => {
            debug!("Loading config: {}", path.display());
            read_config_file(path)
        }
        None => load_default_config(),
    }
}

/// Path of the config file in effect.
fn effective_config_path(explicit: Option<&Path>) -> Result<PathBuf> {
    explicit.map_or_else(config_file_path, |p| Ok(p.to_path_buf()))
}

fn init_logging(verbose: u8, quiet: bool) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter_str = if quiet {
        "warn"
    } else {
        match verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter_str));

    // Logs go to stderr; stdout carries the run summary
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn handle_config_command(action: ConfigAction, args: &MergeArgs) -> Result<()> {
    let explicit = args.config.as_deref();

    match action {
        ConfigAction::Init => {
            let path = effective_config_path(explicit)?;
            if path.exists() {
                println!("Configuration file already exists: {}", path.display());
            } else {
                save_config(&Config::default(), &path)?;
                println!("Created configuration file: {}", path.display());
            }
            Ok(())
        }
        ConfigAction::Show => {
            let path = effective_config_path(explicit)?;
            let config = load_config(explicit)?;
            if args.output_mode == OutputMode::Json {
                emit_json_result(&ConfigPayload {
                    result_type: ResultType::Config,
                    config_path: path,
                    config,
                });
            } else {
                let contents = toml::to_string_pretty(&config)
                    .map_err(|e| Error::ConfigSerialize { source: e })?;
                println!("# {}", path.display());
                print!("{contents}");
            }
            Ok(())
        }
        ConfigAction::Path => {
            let path = effective_config_path(explicit)?;
            println!("{}", path.display());
            Ok(())
        }
    }
}
