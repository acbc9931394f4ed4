//! CLI logging initialization
//!
//! Built on `tracing-subscriber` with per-phase level filtering. Console
//! output goes to stderr so stdout carries only results. A non-empty,
//! valid `RUST_LOG` replaces the configured levels.

use std::fs::OpenOptions;
use std::io;
use std::path::Path;
use std::sync::Mutex;

use strtok_config::Phase;
use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer, Registry,
};

use crate::config::LogConfig;
use crate::error::CliError;

/// Log output format
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum LogFormat {
    /// Colored multi-line output
    Pretty,
    /// One line per event
    #[default]
    Compact,
    /// JSON lines for tooling
    Json,
}

/// Filter directives for the configured levels, e.g.
/// `warn,strtok::scanner=trace,strtok::breakdown=warn,...`
pub fn directives(log: &LogConfig) -> String {
    let mut parts = vec![log.global.to_string().to_lowercase()];
    for phase in Phase::ALL {
        parts.push(format!(
            "{}={}",
            phase.target(),
            log.level_for(phase).to_string().to_lowercase()
        ));
    }
    parts.join(",")
}

/// Build the event filter; `env` (the `RUST_LOG` value) wins when it parses
pub fn build_filter(log: &LogConfig, env: Option<&str>) -> EnvFilter {
    if let Some(spec) = env.filter(|spec| !spec.trim().is_empty()) {
        if let Ok(filter) = EnvFilter::try_new(spec) {
            return filter;
        }
    }
    EnvFilter::new(directives(log))
}

/// Install the global subscriber
///
/// With `file` set, events are written to both stderr and the file (plain,
/// no ANSI colors).
pub fn init(log: &LogConfig, format: LogFormat, file: Option<&Path>) -> Result<(), CliError> {
    let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let console = create_format_layer(format, io::stderr)
        .with_filter(build_filter(log, env.as_deref()));

    match file {
        Some(path) => {
            let handle = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|source| CliError::OpenLogFile {
                    path: path.to_path_buf(),
                    source,
                })?;

            let file_layer = fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(handle))
                .with_filter(build_filter(log, env.as_deref()));

            tracing_subscriber::registry()
                .with(console)
                .with(file_layer)
                .try_init()?;
        }
        None => {
            tracing_subscriber::registry().with(console).try_init()?;
        }
    }
    Ok(())
}

/// Console layer for `format`; every format names the event target
fn create_format_layer<W, F>(
    format: LogFormat,
    make_writer: F,
) -> Box<dyn Layer<Registry> + Send + Sync + 'static>
where
    W: io::Write + Send + Sync + 'static,
    F: Fn() -> W + Send + Sync + 'static,
{
    let layer = fmt::layer().with_target(true).with_writer(make_writer);
    match format {
        LogFormat::Pretty => layer.pretty().with_timer(fmt::time::time()).boxed(),
        LogFormat::Compact => layer.compact().without_time().boxed(),
        LogFormat::Json => layer.json().with_timer(fmt::time::time()).boxed(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::filter::LevelFilter;

    fn sample() -> LogConfig {
        LogConfig {
            global: LevelFilter::WARN,
            scanner: Some(LevelFilter::TRACE),
            breakdown: Some(LevelFilter::OFF),
        }
    }

    #[test]
    fn test_log_format_default() {
        assert_eq!(LogFormat::default(), LogFormat::Compact);
    }

    #[test]
    fn test_directives_follow_phase_levels() {
        assert_eq!(
            directives(&sample()),
            "warn,strtok::scanner=trace,strtok::breakdown=off,strtok::api=warn,strtok::cli=warn"
        );
    }

    fn rendered(filter: &EnvFilter) -> String {
        filter.to_string().to_lowercase()
    }

    #[test]
    fn test_config_filter_without_env() {
        let filter = build_filter(&sample(), None);
        assert!(rendered(&filter).contains("strtok::scanner=trace"));
    }

    #[test]
    fn test_env_overrides_config() {
        let filter = build_filter(&sample(), Some("error"));
        assert_eq!(rendered(&filter), "error");
    }

    #[test]
    fn test_blank_or_invalid_env_falls_back() {
        for env in ["", "   ", "strtok::scanner=loudest"] {
            let filter = build_filter(&sample(), Some(env));
            assert!(
                rendered(&filter).contains("strtok::scanner=trace"),
                "env {env:?}"
            );
        }
    }
}
