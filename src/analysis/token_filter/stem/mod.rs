//! Light stemmers for Arabic and English.
//!
//! Both stemmers expect input that already went through
//! [`normalize`](crate::analysis::normalizer::normalize), and strip at most
//! one affix per rule group, never leaving fewer than two characters.

use crate::analysis::normalizer::contains_arabic;

/// Trait for stemming algorithms.
pub trait Stemmer: Send + Sync {
    /// Stem a word to its root form.
    fn stem(&self, word: &str) -> String;

    /// Get the name of this stemmer.
    fn name(&self) -> &'static str;
}

// Stemmer implementations
pub mod arabic;
pub mod english;

// Re-export stemmers
pub use arabic::{ArabicLightStemmer, stem_ar};
pub use english::{EnglishSuffixStemmer, stem_en};

/// Stem a word with the stemmer matching its script.
///
/// Words containing any Arabic letter use [`stem_ar`], everything else uses
/// [`stem_en`].
pub fn stem_word(word: &str) -> String {
    if contains_arabic(word) {
        stem_ar(word)
    } else {
        stem_en(word)
    }
}
