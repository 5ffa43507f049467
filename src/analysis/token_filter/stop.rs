//! Stop-word sets for Arabic and English queries.
//!
//! Besides grammatical function words, both lists carry the conversational
//! fillers people type into a directory search box ("looking for", "أبحث عن").
//! Entries are stored normalized, so membership is checked against tokens
//! straight out of the tokenizer.
//!
//! The filter is applied only when building the core query. Entity keywords
//! are matched before it, so a word may be both a stop word and a city or
//! attribute keyword.
//!
//! # Examples
//!
//! ```
//! use dalil::analysis::normalizer::QueryLanguage;
//! use dalil::analysis::token_filter::stop::is_stopword;
//!
//! assert!(is_stopword("please", QueryLanguage::En));
//! assert!(is_stopword("اريد", QueryLanguage::Ar));
//! assert!(!is_stopword("pharmacy", QueryLanguage::En));
//! ```

use std::sync::LazyLock;

use ahash::AHashSet;

use crate::analysis::normalizer::{QueryLanguage, normalize};

/// Default Arabic stop words and intent fillers.
const DEFAULT_ARABIC_STOP_WORDS: &[&str] = &[
    "في", "من", "على", "إلى", "عن", "مع", "او", "أو", "ثم", "هل", "ما", "ماذا", "لماذا", "أين",
    "وين", "كيف", "متى", "هذا", "هذه", "ذلك", "تلك", "الذي", "التي", "الذين", "هو", "هي", "انا",
    "أنا", "نحن", "لي", "لنا", "عند", "عندي", "قرب", "قريب", "قريبة", "جنب", "أبحث", "ابحث",
    "نبحث", "أريد", "اريد", "نريد", "أبي", "ابي", "أبغى", "ابغى", "ابغي", "أحتاج", "احتاج",
    "اعطني", "أعطني", "عطني", "دلني", "ممكن", "لو", "سمحت", "رجاء", "فضلك", "يوجد", "فيه",
    "أفضل", "افضل", "احسن", "أحسن", "مكان", "أماكن", "اماكن", "شي", "شيء", "بعض", "كل", "جميع",
];

/// Default English stop words and intent fillers.
const DEFAULT_ENGLISH_STOP_WORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "by", "for", "from", "in", "into", "is", "it",
    "of", "on", "or", "the", "that", "this", "these", "those", "there", "to", "with", "near",
    "nearby", "around", "me", "my", "we", "our", "can", "could", "you", "your", "do", "does",
    "some", "any", "all", "find", "finding", "looking", "look", "search", "searching", "show",
    "give", "get", "want", "need", "please", "where", "what", "which", "who", "how", "when",
    "best", "good", "great", "nice", "recommend", "suggest", "place", "places", "spot", "spots",
    "i", "im", "am", "like", "would",
];

/// Default Arabic stop words as a normalized set.
pub static DEFAULT_ARABIC_STOP_WORDS_SET: LazyLock<AHashSet<String>> =
    LazyLock::new(|| normalized_set(DEFAULT_ARABIC_STOP_WORDS));

/// Default English stop words as a normalized set.
pub static DEFAULT_ENGLISH_STOP_WORDS_SET: LazyLock<AHashSet<String>> =
    LazyLock::new(|| normalized_set(DEFAULT_ENGLISH_STOP_WORDS));

fn normalized_set(words: &[&str]) -> AHashSet<String> {
    words.iter().map(|word| normalize(word)).collect()
}

/// Check whether a normalized token is a stop word for the given language.
///
/// Mixed-language queries consult both sets.
pub fn is_stopword(token: &str, language: QueryLanguage) -> bool {
    match language {
        QueryLanguage::Ar => DEFAULT_ARABIC_STOP_WORDS_SET.contains(token),
        QueryLanguage::En => DEFAULT_ENGLISH_STOP_WORDS_SET.contains(token),
        QueryLanguage::Mixed => {
            DEFAULT_ARABIC_STOP_WORDS_SET.contains(token)
                || DEFAULT_ENGLISH_STOP_WORDS_SET.contains(token)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_stop_words() {
        for word in ["find", "looking", "please", "the", "in"] {
            assert!(is_stopword(word, QueryLanguage::En), "{word}");
        }
        assert!(!is_stopword("cafe", QueryLanguage::En));
        assert!(!is_stopword("verified", QueryLanguage::En));
    }

    #[test]
    fn test_arabic_stop_words_are_normalized() {
        // "أبحث" and "إلى" are stored without hamza.
        assert!(is_stopword("ابحث", QueryLanguage::Ar));
        assert!(is_stopword("الي", QueryLanguage::Ar));
        assert!(is_stopword("في", QueryLanguage::Ar));
        assert!(is_stopword("قريبه", QueryLanguage::Ar));
        assert!(!is_stopword("مطعم", QueryLanguage::Ar));
    }

    #[test]
    fn test_language_selects_set() {
        assert!(!is_stopword("find", QueryLanguage::Ar));
        assert!(!is_stopword("في", QueryLanguage::En));
        assert!(is_stopword("find", QueryLanguage::Mixed));
        assert!(is_stopword("في", QueryLanguage::Mixed));
    }
}
