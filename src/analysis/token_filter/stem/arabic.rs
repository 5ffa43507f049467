//! Arabic light stemmer.
//!
//! Three ordered passes, each removing at most one affix and only when at
//! least two characters remain:
//!
//! 1. the definite-article cluster (`وال`, `بال`, `كال`, `ال`, `لل`)
//! 2. the first matching suffix from a fixed priority list
//! 3. the first matching derivational prefix (`مت`, `مس`, `است`)
//!
//! # Examples
//!
//! ```
//! use dalil::analysis::token_filter::stem::stem_ar;
//!
//! assert_eq!(stem_ar("المطاعم"), "مطاعم");
//! assert_eq!(stem_ar("السيارات"), "سيار");
//! assert_eq!(stem_ar("بالمطعم"), "مطعم");
//! ```

use crate::analysis::token_filter::stem::Stemmer;

/// Article cluster prefixes, longest first.
const ARTICLE_PREFIXES: &[&str] = &["وال", "بال", "كال", "ال", "لل"];

/// Suffixes in priority order. `يه` is the normalized form of `ية`.
const SUFFIXES: &[&str] = &[
    "ات", "ين", "ون", "ان", "تين", "يه", "وا", "ها", "هم", "هن", "كم", "نا",
];

const PREFIXES: &[&str] = &["مت", "مس", "است"];

const MIN_REMAINDER: usize = 2;

/// Light Arabic stemmer (prefix cluster, one suffix, one prefix).
#[derive(Debug, Clone, Default)]
pub struct ArabicLightStemmer;

impl ArabicLightStemmer {
    pub fn new() -> Self {
        ArabicLightStemmer
    }
}

impl Stemmer for ArabicLightStemmer {
    fn stem(&self, word: &str) -> String {
        stem_ar(word)
    }

    fn name(&self) -> &'static str {
        "arabic_light"
    }
}

fn strip_first_prefix<'a>(word: &'a str, prefixes: &[&str]) -> &'a str {
    for prefix in prefixes {
        if let Some(rest) = word.strip_prefix(prefix) {
            if rest.chars().count() >= MIN_REMAINDER {
                return rest;
            }
        }
    }
    word
}

fn strip_first_suffix<'a>(word: &'a str, suffixes: &[&str]) -> &'a str {
    for suffix in suffixes {
        if let Some(rest) = word.strip_suffix(suffix) {
            if rest.chars().count() >= MIN_REMAINDER {
                return rest;
            }
        }
    }
    word
}

/// Remove the definite-article cluster only.
pub fn strip_article(word: &str) -> &str {
    strip_first_prefix(word, ARTICLE_PREFIXES)
}

/// Stem a normalized Arabic word.
pub fn stem_ar(word: &str) -> String {
    let stem = strip_article(word);
    let stem = strip_first_suffix(stem, SUFFIXES);
    let stem = strip_first_prefix(stem, PREFIXES);
    stem.to_string()
}
