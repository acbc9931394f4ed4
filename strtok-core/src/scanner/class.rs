//! Character classes
//!
//! Classification happens once per run boundary, on the first character of
//! the run. Order matters: a letter is always `Alphabetic`, so the
//! `Alphanumeric` class is only ever seen for digit-first runs.

use unicode_general_category::{get_general_category, GeneralCategory};

use crate::token::TokenKind;

/// Characters that form punctuation runs. `:` is deliberately absent, it is
/// a delimiter of its own.
pub const PUNCTUATION: &str = "!@#%^&*()-_=+[{]}\\|;'\",<.>/?~`";

/// Marker emitted in place of a raw newline
pub const LINE_BREAK_MARKER: &str = "\\n";

/// Class of the character that starts a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    Delimiter,
    LineBreak,
    Alphabetic,
    Alphanumeric,
    Punctuation,
    Space,
}

impl CharClass {
    /// Classify a run's first character; `None` means the character is skipped
    pub fn of(c: char) -> Option<CharClass> {
        match c {
            ':' => Some(CharClass::Delimiter),
            '\n' => Some(CharClass::LineBreak),
            c if is_letter(c) => Some(CharClass::Alphabetic),
            c if is_alnum(c) => Some(CharClass::Alphanumeric),
            c if is_punctuation(c) => Some(CharClass::Punctuation),
            ' ' => Some(CharClass::Space),
            _ => None,
        }
    }
}

pub fn is_punctuation(c: char) -> bool {
    PUNCTUATION.contains(c)
}

/// Letter categories only (`Lu`, `Ll`, `Lt`, `Lm`, `Lo`). Combining marks
/// are not letters, even inside a word.
pub fn is_letter(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
    )
}

/// Decimal digits (`Nd`) in any script
pub fn is_digit(c: char) -> bool {
    get_general_category(c) == GeneralCategory::DecimalNumber
}

/// Letters plus every number category (`Nd`, `Nl`, `No`), so `½` and `Ⅻ`
/// continue a run without counting as digits
pub fn is_alnum(c: char) -> bool {
    is_letter(c)
        || matches!(
            get_general_category(c),
            GeneralCategory::DecimalNumber
                | GeneralCategory::LetterNumber
                | GeneralCategory::OtherNumber
        )
}

/// Kind of a completed alphanumeric run
pub fn classify_alphanumeric_run(run: &str) -> TokenKind {
    let has_digit = run.chars().any(is_digit);
    let has_letter = run.chars().any(is_letter);

    if has_digit && has_letter {
        TokenKind::Alphanumeric
    } else if !run.is_empty() && run.chars().all(is_digit) {
        TokenKind::Numeric
    } else {
        TokenKind::Word
    }
}
