//! strtok CLI - Command line interface
//!
//! Thin front end: parse arguments, load configuration, initialize logging,
//! call the core and print what it returns.

use std::io::Read;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use strtok_config::{LogLevel, OutputFormat};
use strtok_core::analyze;
use tracing::{debug, info};

mod config;
mod error;
mod logging;
mod platform;

use crate::config::Settings;
use crate::error::CliError;
use crate::logging::LogFormat;

#[derive(Parser, Debug)]
#[command(
    name = "strtok",
    about = "Split text into classified tokens and show a per-character breakdown",
    version
)]
struct Cli {
    /// Input file (standard input when omitted)
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Tokenize this text instead of reading a file
    #[arg(short, long, conflicts_with = "file")]
    text: Option<String>,

    /// Configuration file (default: ./strtok.json when present)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log verbosity (-v=info, -vv=debug, -vvv=trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Scanner log level
    #[arg(long, value_enum)]
    log_scanner: Option<LogLevelArg>,

    /// Breakdown log level
    #[arg(long, value_enum)]
    log_breakdown: Option<LogLevelArg>,

    /// Log output format
    #[arg(long, value_enum, default_value = "compact")]
    log_format: LogFormat,

    /// Also write logs to this file
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,

    /// Result format
    #[arg(long, value_enum)]
    output: Option<OutputFormatArg>,

    /// Keep leading and trailing whitespace of the input
    #[arg(long)]
    no_trim: bool,

    /// Do not print the token listing
    #[arg(long)]
    no_tokens: bool,

    /// Do not print the granular breakdown
    #[arg(long)]
    no_breakdown: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
enum LogLevelArg {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevelArg> for LogLevel {
    fn from(level: LogLevelArg) -> Self {
        match level {
            LogLevelArg::Off => LogLevel::Off,
            LogLevelArg::Error => LogLevel::Error,
            LogLevelArg::Warn => LogLevel::Warn,
            LogLevelArg::Info => LogLevel::Info,
            LogLevelArg::Debug => LogLevel::Debug,
            LogLevelArg::Trace => LogLevel::Trace,
        }
    }
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
enum OutputFormatArg {
    Text,
    Json,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(format: OutputFormatArg) -> Self {
        match format {
            OutputFormatArg::Text => OutputFormat::Text,
            OutputFormatArg::Json => OutputFormat::Json,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let file_config = config::load(cli.config.as_deref())?;
    let settings = Settings::resolve(file_config, cli);

    logging::init(&settings.log, cli.log_format, cli.log_file.as_deref())?;
    debug!(target: "strtok::cli", ?settings, "Resolved settings");

    let input = read_input(cli)?;
    info!(target: "strtok::cli", bytes = input.len(), "Read input");

    let analysis = analyze(&input, &settings.analyze);
    print!("{}", platform::render(&analysis, &settings.output)?);
    Ok(())
}

/// `--text` wins, then FILE, then standard input
fn read_input(cli: &Cli) -> Result<String, CliError> {
    if let Some(text) = &cli.text {
        return Ok(text.clone());
    }

    match &cli.file {
        Some(path) => std::fs::read_to_string(path).map_err(|source| CliError::ReadInput {
            path: path.clone(),
            source,
        }),
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .map_err(CliError::ReadStdin)?;
            Ok(buffer)
        }
    }
}
