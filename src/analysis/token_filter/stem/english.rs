//! English suffix-stripping stemmer.
//!
//! A much lighter cousin of Porter: one ordered table of suffix rules, the
//! first rule whose suffix matches and whose length guard holds wins.
//!
//! # Examples
//!
//! ```
//! use dalil::analysis::token_filter::stem::stem_en;
//!
//! assert_eq!(stem_en("restaurants"), "restaurant");
//! assert_eq!(stem_en("pharmacies"), "pharmacy");
//! assert_eq!(stem_en("glass"), "glass");
//! ```

use crate::analysis::token_filter::stem::Stemmer;

/// A single rewrite rule: `suffix` becomes `replacement` when at least
/// `min_stem` characters precede the suffix.
struct SuffixRule {
    suffix: &'static str,
    replacement: &'static str,
    min_stem: usize,
}

const fn rule(suffix: &'static str, replacement: &'static str, min_stem: usize) -> SuffixRule {
    SuffixRule {
        suffix,
        replacement,
        min_stem,
    }
}

/// Rules in priority order.
const RULES: &[SuffixRule] = &[
    rule("ies", "y", 2),
    rule("ing", "", 3),
    rule("tion", "", 3),
    rule("ness", "", 3),
    rule("ment", "", 3),
    rule("able", "", 3),
    rule("ful", "", 3),
    rule("ous", "", 3),
    rule("ive", "", 3),
    rule("ed", "", 3),
    rule("ly", "", 3),
    rule("er", "", 3),
    rule("es", "", 3),
    rule("s", "", 3),
];

/// Words this short are returned unchanged.
const MIN_WORD_LEN: usize = 4;

/// Ordered suffix-stripping English stemmer.
#[derive(Debug, Clone, Default)]
pub struct EnglishSuffixStemmer;

impl EnglishSuffixStemmer {
    pub fn new() -> Self {
        EnglishSuffixStemmer
    }
}

impl Stemmer for EnglishSuffixStemmer {
    fn stem(&self, word: &str) -> String {
        stem_en(word)
    }

    fn name(&self) -> &'static str {
        "english_suffix"
    }
}

/// Stem a normalized English word.
pub fn stem_en(word: &str) -> String {
    let len = word.chars().count();
    if len < MIN_WORD_LEN {
        return word.to_string();
    }

    for rule in RULES {
        if rule.suffix == "s" && word.ends_with("ss") {
            continue;
        }
        if let Some(stem) = word.strip_suffix(rule.suffix) {
            if stem.chars().count() >= rule.min_stem {
                return format!("{stem}{}", rule.replacement);
            }
        }
    }

    word.to_string()
}
