//! CLI configuration
//!
//! Merges the optional JSON config file with command line flags. Flags win.

use std::path::{Path, PathBuf};

use strtok_config::{InputConfig, LogLevel, LoggingConfig, OutputConfig, Phase, StrtokConfig};
use strtok_core::AnalyzeOptions;
use tracing_subscriber::filter::LevelFilter;

use crate::error::CliError;
use crate::Cli;

/// Config file picked up from the working directory when `--config` is absent
pub const DEFAULT_CONFIG_FILE: &str = "strtok.json";

/// Load the config file
///
/// An explicit path must exist. Without one, `strtok.json` is used if present,
/// otherwise defaults apply.
pub fn load(explicit: Option<&Path>) -> Result<StrtokConfig, CliError> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => {
            let fallback = PathBuf::from(DEFAULT_CONFIG_FILE);
            if !fallback.exists() {
                return Ok(StrtokConfig::default());
            }
            fallback
        }
    };

    let content = std::fs::read_to_string(&path).map_err(|source| CliError::ReadConfig {
        path: path.clone(),
        source,
    })?;
    StrtokConfig::from_json_str(&content).map_err(|source| CliError::ParseConfig { path, source })
}

/// CLI log configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub global: LevelFilter,
    pub scanner: Option<LevelFilter>,
    pub breakdown: Option<LevelFilter>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self::from_logging(&LoggingConfig::default())
    }
}

impl LogConfig {
    pub fn from_logging(logging: &LoggingConfig) -> Self {
        Self {
            global: to_level_filter(logging.level),
            scanner: logging.scanner.map(to_level_filter),
            breakdown: logging.breakdown.map(to_level_filter),
        }
    }

    /// Raise the global level for `-v` (info), `-vv` (debug), `-vvv` (trace)
    pub fn with_verbosity(mut self, verbose: u8) -> Self {
        let requested = match verbose {
            0 => return self,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        };
        self.global = self.global.max(requested);
        self
    }

    /// Get log level for a specific phase
    pub fn level_for(&self, phase: Phase) -> LevelFilter {
        let specific = match phase {
            Phase::Scanner => self.scanner,
            Phase::Breakdown => self.breakdown,
            Phase::Api | Phase::Cli => None,
        };
        specific.unwrap_or(self.global)
    }
}

pub fn to_level_filter(level: LogLevel) -> LevelFilter {
    match level {
        LogLevel::Off => LevelFilter::OFF,
        LogLevel::Error => LevelFilter::ERROR,
        LogLevel::Warn => LevelFilter::WARN,
        LogLevel::Info => LevelFilter::INFO,
        LogLevel::Debug => LevelFilter::DEBUG,
        LogLevel::Trace => LevelFilter::TRACE,
    }
}

/// Everything one run needs
#[derive(Debug, Clone)]
pub struct Settings {
    pub log: LogConfig,
    pub analyze: AnalyzeOptions,
    pub output: OutputConfig,
}

impl Settings {
    pub fn resolve(file: StrtokConfig, cli: &Cli) -> Self {
        let mut logging = file.logging;
        if let Some(level) = cli.log_scanner {
            logging.scanner = Some(level.into());
        }
        if let Some(level) = cli.log_breakdown {
            logging.breakdown = Some(level.into());
        }

        let mut input: InputConfig = file.input;
        if cli.no_trim {
            input.trim = false;
        }

        let mut output = file.output;
        if cli.no_tokens {
            output.tokens = false;
        }
        if cli.no_breakdown {
            output.breakdown = false;
        }
        if let Some(format) = cli.output {
            output.format = format.into();
        }

        Self {
            log: LogConfig::from_logging(&logging).with_verbosity(cli.verbose),
            analyze: AnalyzeOptions::from(&input),
            output,
        }
    }
}
