//! Token types

use serde::Serialize;
use std::fmt;

/// Token category
///
/// Closed set; the scanner never produces anything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TokenKind {
    /// A single `:`
    Delimiter,
    /// A newline, carried as the two-character marker `\n`
    LineBreak,
    /// A run of letters
    Word,
    /// A digit-first run mixing digits and letters
    Alphanumeric,
    /// A run of punctuation characters
    Punctuator,
    /// A run of digits
    Numeric,
    /// A run of space characters
    Whitespace,
}

impl TokenKind {
    /// Human readable label used in listings
    pub fn label(&self) -> &'static str {
        match self {
            TokenKind::Delimiter => "Delimiter",
            TokenKind::LineBreak => "Line Break",
            TokenKind::Word => "Word",
            TokenKind::Alphanumeric => "Alphanumeric",
            TokenKind::Punctuator => "Punctuation",
            TokenKind::Numeric => "Numeric",
            TokenKind::Whitespace => "Whitespace",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A classified, non-empty run of input text
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Token {
    kind: TokenKind,
    text: String,
}

impl Token {
    pub(crate) fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        let text = text.into();
        debug_assert!(!text.is_empty(), "tokens never carry empty text");
        Self { kind, text }
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// The matched text. For [`TokenKind::LineBreak`] this is the marker `\n`.
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Token: '{}' \t\t Type: '{}'", self.text, self.kind)
    }
}
