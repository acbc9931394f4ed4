//! CLI error type

use std::io;
use std::path::PathBuf;

use thiserror::Error;
use tracing_subscriber::util::TryInitError;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("cannot read input file '{}': {source}", .path.display())]
    ReadInput { path: PathBuf, source: io::Error },

    #[error("cannot read standard input: {0}")]
    ReadStdin(#[source] io::Error),

    #[error("cannot read config file '{}': {source}", .path.display())]
    ReadConfig { path: PathBuf, source: io::Error },

    #[error("invalid config file '{}': {source}", .path.display())]
    ParseConfig {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("cannot open log file '{}': {source}", .path.display())]
    OpenLogFile { path: PathBuf, source: io::Error },

    #[error("failed to initialize logging: {0}")]
    Logging(#[from] TryInitError),

    #[error("failed to render JSON output: {0}")]
    Render(#[from] serde_json::Error),
}
