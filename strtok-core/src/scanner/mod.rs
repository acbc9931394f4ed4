//! Scanner
//!
//! Single left-to-right pass that turns a string into classified tokens:
//! - `:` is a one-character delimiter
//! - a newline becomes the two-character marker `\n`
//! - letters, digit-first alphanumeric runs, punctuation and spaces are
//!   taken greedily as maximal runs
//! - every other character is skipped without producing a token

mod class;
mod cursor;

pub use class::{
    classify_alphanumeric_run, is_alnum, is_digit, is_letter, is_punctuation, CharClass,
    LINE_BREAK_MARKER, PUNCTUATION,
};

use cursor::Cursor;
use tracing::{debug, trace};

use crate::token::{Token, TokenKind};

/// Tokenize `input`
///
/// Total and deterministic: an empty string (or a string of unclassified
/// characters only) yields an empty vector.
///
/// ```
/// use strtok_core::{tokenize, TokenKind};
///
/// let tokens = tokenize("abc123");
/// assert_eq!(tokens[0].kind(), TokenKind::Word);
/// assert_eq!(tokens[1].kind(), TokenKind::Numeric);
/// ```
pub fn tokenize(input: &str) -> Vec<Token> {
    Scanner::new(input).run()
}

struct Scanner<'a> {
    cursor: Cursor<'a>,
    tokens: Vec<Token>,
    skipped: usize,
}

impl<'a> Scanner<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            cursor: Cursor::new(input),
            tokens: Vec::new(),
            skipped: 0,
        }
    }

    fn run(mut self) -> Vec<Token> {
        while let Some(c) = self.cursor.peek() {
            let start = self.cursor.offset();

            match CharClass::of(c) {
                Some(class) => {
                    let token = self.scan_run(class);
                    trace!(target: "strtok::scanner",
                        kind = ?token.kind(),
                        text = token.text(),
                        offset = start,
                        "Produced token"
                    );
                    self.tokens.push(token);
                }
                None => {
                    self.cursor.bump();
                    self.skipped += 1;
                    trace!(target: "strtok::scanner", ch = ?c, offset = start, "Skipping unclassified character");
                }
            }
        }
        debug_assert!(self.cursor.is_eof());

        debug!(target: "strtok::scanner",
            bytes = self.cursor.offset(),
            tokens = self.tokens.len(),
            skipped = self.skipped,
            "Scan completed"
        );
        self.tokens
    }

    /// Consume one run starting at the cursor
    fn scan_run(&mut self, class: CharClass) -> Token {
        match class {
            CharClass::Delimiter => {
                self.cursor.bump();
                Token::new(TokenKind::Delimiter, ":")
            }
            CharClass::LineBreak => {
                self.cursor.bump();
                Token::new(TokenKind::LineBreak, LINE_BREAK_MARKER)
            }
            CharClass::Alphabetic => {
                let run = self.cursor.eat_while(is_letter);
                Token::new(TokenKind::Word, run)
            }
            CharClass::Alphanumeric => {
                let run = self.cursor.eat_while(is_alnum);
                Token::new(classify_alphanumeric_run(run), run)
            }
            CharClass::Punctuation => {
                let run = self.cursor.eat_while(is_punctuation);
                Token::new(TokenKind::Punctuator, run)
            }
            CharClass::Space => {
                let run = self.cursor.eat_while(|c| c == ' ');
                Token::new(TokenKind::Whitespace, run)
            }
        }
    }
}
