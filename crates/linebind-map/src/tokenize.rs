//! Splitting one line into raw tokens.

use crate::error::{MapError, Result};
use crate::options::{DEFAULT_ESCAPE, DEFAULT_QUOTE};

/// Splits a single line on a separator, honouring quoted spans.
///
/// - The separator inside a quoted span is kept as text.
/// - A doubled quote inside a quoted span is one literal quote.
/// - The escape character makes a following quote or escape character
///   literal; before any other character it is kept as is.
/// - With trimming on, whitespace outside quoted spans is dropped from both
///   ends of a token; whitespace inside quotes is kept.
/// - Newlines have no special meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tokenizer {
    separator: char,
    quote: char,
    escape: Option<char>,
    trim: bool,
}

impl Tokenizer {
    pub fn new(separator: char) -> Self {
        Self {
            separator,
            quote: DEFAULT_QUOTE,
            escape: Some(DEFAULT_ESCAPE),
            trim: false,
        }
    }

    pub fn with_quote(mut self, quote: char) -> Self {
        self.quote = quote;
        self
    }

    pub fn with_escape(mut self, escape: Option<char>) -> Self {
        self.escape = escape;
        self
    }

    pub fn with_trim(mut self, trim: bool) -> Self {
        self.trim = trim;
        self
    }

    pub fn separator(&self) -> char {
        self.separator
    }

    /// Tokenizes `line`. The result always has at least one token; token
    /// position is the zero-based column index.
    pub fn tokenize(&self, line: &str) -> Result<Vec<String>> {
        let mut tokens = Vec::new();
        let mut current = String::new();
        // Byte offset of the quote that opened the current span.
        let mut open_quote: Option<usize> = None;
        // Leading bytes of `current` that trimming must keep.
        let mut protected = 0;
        let mut chars = line.char_indices().peekable();

        while let Some((offset, c)) = chars.next() {
            let next = chars.peek().map(|&(_, n)| n);

            if Some(c) == self.escape
                && let Some(n) = next
                && (n == self.quote || Some(n) == self.escape)
            {
                current.push(n);
                chars.next();
                continue;
            }

            if c == self.quote {
                if open_quote.is_none() {
                    open_quote = Some(offset);
                } else if next == Some(self.quote) {
                    current.push(self.quote);
                    chars.next();
                } else {
                    open_quote = None;
                    protected = current.len();
                }
            } else if c == self.separator && open_quote.is_none() {
                tokens.push(self.finish(&mut current, &mut protected));
            } else if self.trim && open_quote.is_none() && current.is_empty() && c.is_whitespace() {
                // Leading unquoted whitespace.
            } else {
                current.push(c);
            }
        }

        if let Some(offset) = open_quote {
            return Err(MapError::QuoteParse { offset });
        }
        tokens.push(self.finish(&mut current, &mut protected));
        Ok(tokens)
    }

    fn finish(&self, current: &mut String, protected: &mut usize) -> String {
        let mut token = std::mem::take(current);
        if self.trim {
            let keep = *protected + token[*protected..].trim_end().len();
            token.truncate(keep);
        }
        *protected = 0;
        token
    }
}

/// Tokenizes `line` with default quoting rules.
pub fn tokenize(line: &str, separator: char) -> Result<Vec<String>> {
    Tokenizer::new(separator).tokenize(line)
}
