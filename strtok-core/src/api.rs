//! API layer
//!
//! One call that prepares raw input, scans it and builds the breakdown.
//! Input → output; how the result is presented is up to the caller.

use serde::Serialize;
use tracing::{info, instrument};

use strtok_config::InputConfig;

use crate::breakdown::expand;
use crate::scanner::tokenize;
use crate::token::Token;

/// Input preparation options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalyzeOptions {
    /// Strip surrounding whitespace before scanning
    pub trim_input: bool,
}

impl Default for AnalyzeOptions {
    fn default() -> Self {
        Self { trim_input: true }
    }
}

impl From<&InputConfig> for AnalyzeOptions {
    fn from(config: &InputConfig) -> Self {
        Self {
            trim_input: config.trim,
        }
    }
}

/// Tokens plus their breakdown lines
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Analysis {
    pub tokens: Vec<Token>,
    pub breakdown: Vec<String>,
}

/// Tokenize `input` and expand the result
#[instrument(target = "strtok::api", skip(input), fields(len = input.len()))]
pub fn analyze(input: &str, options: &AnalyzeOptions) -> Analysis {
    let source = if options.trim_input { input.trim() } else { input };

    let tokens = tokenize(source);
    let breakdown = expand(&tokens);

    info!(target: "strtok::api", tokens = tokens.len(), "Analysis completed");
    Analysis { tokens, breakdown }
}
