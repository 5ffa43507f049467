//! Query tokenizer.
//!
//! Splits free text into normalized word tokens:
//!
//! 1. lower-case the text
//! 2. replace every character that is neither a word character nor in the
//!    Arabic block with a space (Arabic punctuation such as `،` and `؟` is
//!    a separator as well)
//! 3. split on whitespace
//! 4. normalize each piece and drop anything shorter than two characters
//!
//! # Examples
//!
//! ```
//! use dalil::analysis::tokenizer::tokenize;
//!
//! let tokens = tokenize("Blue Café, Muscat!");
//! assert_eq!(tokens, vec!["blue", "café", "muscat"]);
//!
//! let tokens = tokenize("مَقْهى في مسقط؟");
//! assert_eq!(tokens, vec!["مقهي", "في", "مسقط"]);
//! ```

use std::sync::{Arc, LazyLock};

use regex::Regex;

use crate::analysis::normalizer::normalize;
use crate::error::{DalilError, Result};

/// Characters outside this class become token separators.
pub const DEFAULT_SEPARATOR_PATTERN: &str =
    r"[^\w\x{0600}-\x{06FF}]+|[\x{060C}\x{061B}\x{061F}\x{066A}-\x{066D}]+";

/// Tokens shorter than this (in characters) are dropped.
pub const MIN_TOKEN_CHARS: usize = 2;

static DEFAULT_TOKENIZER: LazyLock<QueryTokenizer> = LazyLock::new(QueryTokenizer::default);

/// A regex-driven tokenizer that replaces separator runs with whitespace.
#[derive(Clone, Debug)]
pub struct QueryTokenizer {
    /// The regex matching separator runs
    separator: Arc<Regex>,
}

impl QueryTokenizer {
    /// Create a tokenizer with the default separator pattern.
    pub fn new() -> Result<Self> {
        Self::with_pattern(DEFAULT_SEPARATOR_PATTERN)
    }

    /// Create a tokenizer with a custom separator pattern.
    pub fn with_pattern(pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern)
            .map_err(|e| DalilError::invalid_argument(format!("Invalid regex pattern: {e}")))?;

        Ok(QueryTokenizer {
            separator: Arc::new(regex),
        })
    }

    /// Get the separator pattern used by this tokenizer.
    pub fn pattern(&self) -> &str {
        self.separator.as_str()
    }

    /// Split text into normalized tokens.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        let spaced = self.separator.replace_all(&lowered, " ");

        spaced
            .split_whitespace()
            .map(normalize)
            .filter(|token| token.chars().count() >= MIN_TOKEN_CHARS)
            .collect()
    }
}

impl Default for QueryTokenizer {
    fn default() -> Self {
        Self::new().expect("Default separator pattern should be valid")
    }
}

/// Tokenize with the default tokenizer.
pub fn tokenize(text: &str) -> Vec<String> {
    DEFAULT_TOKENIZER.tokenize(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_english() {
        assert_eq!(
            tokenize("Looking for the BEST coffee-shop!!"),
            vec!["looking", "for", "the", "best", "coffee", "shop"]
        );
    }

    #[test]
    fn test_tokenize_drops_short_tokens() {
        assert_eq!(tokenize("a b cd e"), vec!["cd"]);
        assert_eq!(tokenize("و مطعم"), vec!["مطعم"]);
    }

    #[test]
    fn test_length_counted_after_normalization() {
        // A letter plus its diacritic is one character once normalized.
        assert_eq!(tokenize("بَ مطعم"), vec!["مطعم"]);
        assert_eq!(tokenize("ـبـ"), Vec::<String>::new());
    }

    #[test]
    fn test_tokenize_arabic_normalizes() {
        assert_eq!(tokenize("صيدلية  الأمل"), vec!["صيدليه", "الامل"]);
        assert_eq!(tokenize("أين المطعم؟"), vec!["اين", "المطعم"]);
        assert_eq!(tokenize("مطعم،مقهى"), vec!["مطعم", "مقهي"]);
    }

    #[test]
    fn test_tokenize_mixed_and_digits() {
        assert_eq!(
            tokenize("cafe مسقط 24 hours"),
            vec!["cafe", "مسقط", "24", "hours"]
        );
    }

    #[test]
    fn test_tokenize_empty() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   !!! ...").is_empty());
    }

    #[test]
    fn test_custom_pattern() {
        let tokenizer = QueryTokenizer::with_pattern(r"[,;]+").unwrap();
        assert_eq!(tokenizer.pattern(), r"[,;]+");
        assert_eq!(tokenizer.tokenize("ab,cd;ef"), vec!["ab", "cd", "ef"]);
        assert!(QueryTokenizer::with_pattern("(").is_err());
    }
}
