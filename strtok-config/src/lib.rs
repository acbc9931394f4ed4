//! strtok Config - Pure configuration data structures
//!
//! This crate contains only data structures, no logic or global state.
//! It serves as the shared configuration vocabulary across all strtok crates.
//!
//! Every struct deserializes with `#[serde(default)]`, so a partial JSON file
//! (or an empty object) is a valid configuration.

use serde::Deserialize;

/// Top-level configuration, usually read from `strtok.json`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StrtokConfig {
    /// How raw input is prepared before scanning
    pub input: InputConfig,
    /// What gets rendered and how
    pub output: OutputConfig,
    /// Log levels
    pub logging: LoggingConfig,
}

impl StrtokConfig {
    /// Parse a configuration from JSON text
    pub fn from_json_str(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}

/// Input preparation
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Strip leading and trailing whitespace before scanning
    pub trim: bool,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self { trim: true }
    }
}

/// Output selection
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Print the token listing
    pub tokens: bool,
    /// Print the granular breakdown
    pub breakdown: bool,
    /// Rendering format
    pub format: OutputFormat,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            tokens: true,
            breakdown: true,
            format: OutputFormat::Text,
        }
    }
}

/// Rendering format for results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human readable sections
    #[default]
    Text,
    /// A single pretty-printed JSON document
    Json,
}

/// Log level, independent of any logging backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Global default level
    pub level: LogLevel,
    /// Scanner level (None falls back to `level`)
    pub scanner: Option<LogLevel>,
    /// Breakdown formatter level (None falls back to `level`)
    pub breakdown: Option<LogLevel>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Warn,
            scanner: None,
            breakdown: None,
        }
    }
}

impl LoggingConfig {
    /// Effective level for a phase
    pub fn level_for(&self, phase: Phase) -> LogLevel {
        let specific = match phase {
            Phase::Scanner => self.scanner,
            Phase::Breakdown => self.breakdown,
            Phase::Api | Phase::Cli => None,
        };
        specific.unwrap_or(self.level)
    }
}

/// Processing phase, used for phase-specific log filtering
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Scanner,
    Breakdown,
    Api,
    Cli,
}

impl Phase {
    pub const ALL: [Phase; 4] = [Phase::Scanner, Phase::Breakdown, Phase::Api, Phase::Cli];

    /// Get the string name of the phase
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Scanner => "scanner",
            Phase::Breakdown => "breakdown",
            Phase::Api => "api",
            Phase::Cli => "cli",
        }
    }

    /// Get the log target name for this phase
    pub fn target(&self) -> &'static str {
        match self {
            Phase::Scanner => "strtok::scanner",
            Phase::Breakdown => "strtok::breakdown",
            Phase::Api => "strtok::api",
            Phase::Cli => "strtok::cli",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let cfg = StrtokConfig::default();
        assert!(cfg.input.trim);
        assert!(cfg.output.tokens);
        assert!(cfg.output.breakdown);
        assert_eq!(cfg.output.format, OutputFormat::Text);
        assert_eq!(cfg.logging.level, LogLevel::Warn);
    }

    #[test]
    fn test_empty_json_is_default() {
        let cfg = StrtokConfig::from_json_str("{}").unwrap();
        assert_eq!(cfg, StrtokConfig::default());
    }

    #[test]
    fn test_partial_json() {
        let cfg = StrtokConfig::from_json_str(
            r#"{ "input": { "trim": false }, "output": { "format": "json" }, "logging": { "scanner": "trace" } }"#,
        )
        .unwrap();
        assert!(!cfg.input.trim);
        assert_eq!(cfg.output.format, OutputFormat::Json);
        assert!(cfg.output.tokens);
        assert_eq!(cfg.logging.level, LogLevel::Warn);
        assert_eq!(cfg.logging.scanner, Some(LogLevel::Trace));
    }

    #[test]
    fn test_invalid_json() {
        assert!(StrtokConfig::from_json_str(r#"{ "logging": { "level": "loud" } }"#).is_err());
        assert!(StrtokConfig::from_json_str("not json").is_err());
    }

    #[test]
    fn test_level_for() {
        let cfg = LoggingConfig {
            level: LogLevel::Info,
            scanner: Some(LogLevel::Trace),
            breakdown: None,
        };
        assert_eq!(cfg.level_for(Phase::Scanner), LogLevel::Trace);
        assert_eq!(cfg.level_for(Phase::Breakdown), LogLevel::Info);
        assert_eq!(cfg.level_for(Phase::Cli), LogLevel::Info);
    }

    #[test]
    fn test_phase_as_str() {
        assert_eq!(Phase::Scanner.as_str(), "scanner");
        assert_eq!(Phase::Breakdown.target(), "strtok::breakdown");
    }
}
