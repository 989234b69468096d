//! Mapper configuration.

use serde::{Deserialize, Serialize};

use crate::tokenize::Tokenizer;

/// Default quote character.
pub const DEFAULT_QUOTE: char = '"';

/// Default escape character.
pub const DEFAULT_ESCAPE: char = '\\';

/// Options shared by every line a [`LineMapper`](crate::LineMapper) maps.
///
/// The separator is not configured here: it always comes from the target
/// type's record marker, so nested records can use their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapperOptions {
    /// Character that opens and closes a quoted span.
    /// Defaults to `"`.
    pub quote: char,

    /// Character that escapes a following quote or escape character.
    /// Defaults to `\`. `None` disables escaping.
    pub escape: Option<char>,

    /// Trim whitespace outside quoted spans from both ends of every token.
    /// Defaults to false.
    pub trim_whitespace: bool,
}

impl Default for MapperOptions {
    fn default() -> Self {
        Self {
            quote: DEFAULT_QUOTE,
            escape: Some(DEFAULT_ESCAPE),
            trim_whitespace: false,
        }
    }
}

impl MapperOptions {
    /// Set the quote character.
    pub fn with_quote(mut self, quote: char) -> Self {
        self.quote = quote;
        self
    }

    /// Set or disable the escape character.
    pub fn with_escape(mut self, escape: Option<char>) -> Self {
        self.escape = escape;
        self
    }

    /// Enable or disable token trimming.
    pub fn with_trim_whitespace(mut self, enabled: bool) -> Self {
        self.trim_whitespace = enabled;
        self
    }

    /// Builds a tokenizer for records split on `separator`.
    pub fn tokenizer(&self, separator: char) -> Tokenizer {
        Tokenizer::new(separator)
            .with_quote(self.quote)
            .with_escape(self.escape)
            .with_trim(self.trim_whitespace)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_use_defaults() {
        let options: MapperOptions = serde_json::from_str(r#"{"trim_whitespace": true}"#).unwrap();
        assert_eq!(options, MapperOptions::default().with_trim_whitespace(true));
    }

    #[test]
    fn test_escape_can_be_disabled() {
        let options: MapperOptions = serde_json::from_str(r#"{"escape": null, "quote": "'"}"#).unwrap();
        assert_eq!(options.escape, None);
        assert_eq!(options.quote, '\'');
    }

    #[test]
    fn test_tokenizer_inherits_options() {
        let tokenizer = MapperOptions::default()
            .with_quote('\'')
            .with_trim_whitespace(true)
            .tokenizer('|');
        assert_eq!(tokenizer.separator(), '|');
        assert_eq!(tokenizer.tokenize(" 'a|b' | c ").unwrap(), vec!["a|b", "c"]);
    }
}
