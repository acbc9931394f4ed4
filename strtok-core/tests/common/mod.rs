//! Test helpers shared by the integration tests

#![allow(dead_code)]

use strtok_core::{tokenize, Token, TokenKind};

/// Tokenize and flatten into `(kind, text)` pairs
pub fn scan(input: &str) -> Vec<(TokenKind, String)> {
    tokenize(input).into_iter().map(pair).collect()
}

pub fn pair(token: Token) -> (TokenKind, String) {
    (token.kind(), token.text().to_string())
}

/// Shorthand for building expected `(kind, text)` pairs
pub fn tok(kind: TokenKind, text: &str) -> (TokenKind, String) {
    (kind, text.to_string())
}

/// Concatenate token texts in order
pub fn joined(tokens: &[Token]) -> String {
    tokens.iter().map(Token::text).collect()
}

/// What the scanner keeps of `input`: everything except unclassified
/// characters (newlines are excluded here, they are rewritten to a marker)
pub fn retained(input: &str) -> String {
    input
        .chars()
        .filter(|&c| {
            c == ':'
                || c == ' '
                || strtok_core::scanner::is_alnum(c)
                || strtok_core::scanner::is_punctuation(c)
        })
        .collect()
}
