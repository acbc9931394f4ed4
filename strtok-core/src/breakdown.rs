//! Granular breakdown
//!
//! Explodes each token into its characters for display.

use tracing::debug;

use crate::token::Token;

/// One breakdown line per token, same order
pub fn expand(tokens: &[Token]) -> Vec<String> {
    let lines: Vec<String> = tokens.iter().map(breakdown_line).collect();
    debug!(target: "strtok::breakdown", lines = lines.len(), "Breakdown completed");
    lines
}

/// `Token: "abc" --> 'a', 'b', 'c'`
pub fn breakdown_line(token: &Token) -> String {
    let chars = token
        .text()
        .chars()
        .map(|c| format!("'{c}'"))
        .collect::<Vec<_>>()
        .join(", ");
    format!("Token: \"{}\" --> {}", token.text(), chars)
}
