//! Character cursor over an in-memory string
//!
//! The only mutable state of a scan: a byte offset that always sits on a
//! `char` boundary.

/// Forward-only cursor
pub(crate) struct Cursor<'a> {
    source: &'a str,
    offset: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(source: &'a str) -> Self {
        Self { source, offset: 0 }
    }

    /// Current byte offset
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Peek at the current character without consuming it
    pub fn peek(&self) -> Option<char> {
        self.source[self.offset..].chars().next()
    }

    /// Consume one character
    pub fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.offset += c.len_utf8();
        Some(c)
    }

    /// Consume characters while `pred` holds and return the consumed slice
    pub fn eat_while(&mut self, mut pred: impl FnMut(char) -> bool) -> &'a str {
        let start = self.offset;
        while let Some(c) = self.peek() {
            if !pred(c) {
                break;
            }
            self.offset += c.len_utf8();
        }
        &self.source[start..self.offset]
    }

    pub fn is_eof(&self) -> bool {
        self.offset >= self.source.len()
    }
}
