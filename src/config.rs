//! Extraction configuration.

use crate::errors::QuoteResult;
use serde::Deserialize;

/// How a word-final apostrophe ("Jones' cow") is read while a quotation of
/// the same family is open.
///
/// Neither reading is right in general: `'Jones' cow is cuter!'` wants the
/// apostrophe kept as text, `'I told you so'` wants it to close.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApostrophePolicy {
    /// Close the open quotation.
    PreferClose,
    /// Keep the apostrophe as text; only a mark after punctuation or
    /// whitespace can close.
    PreferLiteral,
}

impl Default for ApostrophePolicy {
    fn default() -> Self {
        ApostrophePolicy::PreferClose
    }
}

/// Configuration for [`QuoteExtractor`](crate::QuoteExtractor).
///
/// ```
/// use layered_quotes::{ApostrophePolicy, QuoteConfig};
///
/// let config = QuoteConfig::from_toml_str(
///     r#"
///     single_quotes = true
///     max_length = 400
///     apostrophe_policy = "prefer_literal"
///     "#,
/// )
/// .unwrap();
/// assert_eq!(config.max_length, Some(400));
/// assert_eq!(config.apostrophe_policy, ApostrophePolicy::PreferLiteral);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct QuoteConfig {
    /// Treat single-mark conventions (`'…'`, `‘…’`, `` `…' ``) as quotations.
    pub single_quotes: bool,
    /// Drop quotations longer than this many characters.
    pub max_length: Option<usize>,
    pub apostrophe_policy: ApostrophePolicy,
    /// Newlines that must separate two paragraphs before a repeated opening
    /// mark counts as a continuation of the open quotation.
    pub paragraph_break_newlines: usize,
}

impl Default for QuoteConfig {
    fn default() -> Self {
        Self {
            single_quotes: true,
            max_length: None,
            apostrophe_policy: ApostrophePolicy::PreferClose,
            paragraph_break_newlines: 2,
        }
    }
}

impl QuoteConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Only double-mark conventions, for text where single marks are mostly
    /// apostrophes.
    pub fn doubles_only() -> Self {
        Self {
            single_quotes: false,
            ..Default::default()
        }
    }

    /// Parse a TOML table; missing keys keep their defaults.
    pub fn from_toml_str(source: &str) -> QuoteResult<Self> {
        Ok(toml::from_str(source)?)
    }

    pub fn with_single_quotes(mut self, enabled: bool) -> Self {
        self.single_quotes = enabled;
        self
    }

    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }

    pub fn with_apostrophe_policy(mut self, policy: ApostrophePolicy) -> Self {
        self.apostrophe_policy = policy;
        self
    }

    /// Set the blank-line threshold; `1` treats every line as a paragraph.
    pub fn with_paragraph_break_newlines(mut self, newlines: usize) -> Self {
        self.paragraph_break_newlines = newlines;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::QuoteError;

    #[test]
    fn empty_toml_is_default() {
        assert_eq!(QuoteConfig::from_toml_str("").unwrap(), QuoteConfig::default());
    }

    #[test]
    fn partial_toml_keeps_other_defaults() {
        let config = QuoteConfig::from_toml_str("single_quotes = false").unwrap();
        assert!(!config.single_quotes);
        assert_eq!(config.paragraph_break_newlines, 2);
        assert_eq!(config.apostrophe_policy, ApostrophePolicy::PreferClose);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = QuoteConfig::from_toml_str("ascii_quotes = true").unwrap_err();
        assert!(matches!(err, QuoteError::Config(_)));
    }

    #[test]
    fn builders() {
        let config = QuoteConfig::doubles_only()
            .with_max_length(80)
            .with_paragraph_break_newlines(1);
        assert!(!config.single_quotes);
        assert_eq!(config.max_length, Some(80));
        assert_eq!(config.paragraph_break_newlines, 1);
    }
}
