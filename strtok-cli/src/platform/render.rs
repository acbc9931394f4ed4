//! Result rendering
//!
//! Text output has two sections: the token listing, then the granular
//! breakdown.

use serde_json::json;
use strtok_config::{OutputConfig, OutputFormat};
use strtok_core::Analysis;

use crate::error::CliError;

pub const TOKENS_HEADING: &str = "Tokens:";
pub const BREAKDOWN_HEADING: &str = "Granular Breakdown:";

/// Render according to the configured format
pub fn render(analysis: &Analysis, output: &OutputConfig) -> Result<String, CliError> {
    match output.format {
        OutputFormat::Text => Ok(render_text(analysis, output)),
        OutputFormat::Json => Ok(render_json(analysis, output)?),
    }
}

pub fn render_text(analysis: &Analysis, output: &OutputConfig) -> String {
    let mut sections = Vec::new();

    if output.tokens {
        let mut section = String::from(TOKENS_HEADING);
        section.push('\n');
        for token in &analysis.tokens {
            section.push_str(&token.to_string());
            section.push('\n');
        }
        sections.push(section);
    }

    if output.breakdown {
        let mut section = String::from(BREAKDOWN_HEADING);
        section.push('\n');
        for line in &analysis.breakdown {
            section.push_str(line);
            section.push('\n');
        }
        sections.push(section);
    }

    sections.join("\n")
}

/// Pretty JSON with only the enabled sections
pub fn render_json(analysis: &Analysis, output: &OutputConfig) -> Result<String, serde_json::Error> {
    let mut document = json!({});
    if output.tokens {
        document["tokens"] = serde_json::to_value(&analysis.tokens)?;
    }
    if output.breakdown {
        document["breakdown"] = serde_json::to_value(&analysis.breakdown)?;
    }

    let mut text = serde_json::to_string_pretty(&document)?;
    text.push('\n');
    Ok(text)
}
