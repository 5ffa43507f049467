//! Text normalization for bilingual (Arabic/English) matching.
//!
//! Normalization is a fixed character-level substitution:
//!
//! - Arabic diacritics (harakat, tanween, shadda, sukun, superscript alef)
//!   and the tatweel are removed
//! - hamza-bearing alef forms (`أ إ آ ٱ`) become a bare alef `ا`
//! - taa marbuta `ة` becomes haa `ه`
//! - alef maqsura `ى` and the Persian yeh `ی` become `ي`
//! - the Persian/Urdu kaf forms become `ك`
//! - everything else is lower-cased
//!
//! No substitution produces a character that another rule rewrites, so
//! `normalize(normalize(x)) == normalize(x)`.
//!
//! # Examples
//!
//! ```
//! use dalil::analysis::normalizer::normalize;
//!
//! assert_eq!(normalize("مَقْهًى"), "مقهي");
//! assert_eq!(normalize("أحمد"), "احمد");
//! assert_eq!(normalize("Blue CAFÉ"), "blue café");
//! ```

use serde::{Deserialize, Serialize};

/// Language of a piece of text, judged from the letters it contains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QueryLanguage {
    /// Arabic letters only.
    Ar,
    /// Latin letters only, or no letters at all.
    En,
    /// Both scripts present.
    Mixed,
}

impl QueryLanguage {
    pub fn as_str(&self) -> &'static str {
        match self {
            QueryLanguage::Ar => "ar",
            QueryLanguage::En => "en",
            QueryLanguage::Mixed => "mixed",
        }
    }
}

impl std::fmt::Display for QueryLanguage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Check whether a character falls in the main Arabic block.
#[inline]
pub fn is_arabic_char(c: char) -> bool {
    ('\u{0600}'..='\u{06FF}').contains(&c)
}

/// Arabic marks that carry no lexical identity for matching.
#[inline]
fn is_arabic_diacritic(c: char) -> bool {
    matches!(c, '\u{064B}'..='\u{065F}' | '\u{0670}' | '\u{0640}')
}

/// Canonicalize raw text for matching.
pub fn normalize(text: &str) -> String {
    let mut output = String::with_capacity(text.len());

    for c in text.chars() {
        if is_arabic_diacritic(c) {
            continue;
        }
        match c {
            'أ' | 'إ' | 'آ' | 'ٱ' => output.push('ا'),
            'ة' => output.push('ه'),
            'ى' | 'ی' => output.push('ي'),
            'ک' | 'ڪ' => output.push('ك'),
            _ => output.extend(c.to_lowercase()),
        }
    }

    output
}

/// Detect the script mix of a piece of text.
pub fn detect_language(text: &str) -> QueryLanguage {
    let mut arabic = false;
    let mut latin = false;

    for c in text.chars() {
        if is_arabic_char(c) && c.is_alphabetic() {
            arabic = true;
        } else if c.is_ascii_alphabetic() {
            latin = true;
        }
        if arabic && latin {
            return QueryLanguage::Mixed;
        }
    }

    if arabic {
        QueryLanguage::Ar
    } else {
        QueryLanguage::En
    }
}

/// Check whether a word contains any Arabic letter.
pub fn contains_arabic(word: &str) -> bool {
    word.chars().any(is_arabic_char)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_diacritics() {
        assert_eq!(normalize("مَطْعَمٌ"), "مطعم");
        assert_eq!(normalize("شَدّة"), "شده");
        assert_eq!(normalize("مـــطعم"), "مطعم");
    }

    #[test]
    fn test_letter_variants() {
        assert_eq!(normalize("إسلام"), "اسلام");
        assert_eq!(normalize("آمن"), "امن");
        assert_eq!(normalize("صيدلية"), "صيدليه");
        assert_eq!(normalize("مستشفى"), "مستشفي");
        assert_eq!(normalize("کتاب"), "كتاب");
    }

    #[test]
    fn test_latin_case_folding() {
        assert_eq!(normalize("The Coffee HOUSE"), "the coffee house");
        assert_eq!(normalize("Muscat"), "muscat");
    }

    #[test]
    fn test_idempotent() {
        for text in ["مَقْهًى الأزرق", "Blue Café", "صيدلية النهضة", "", "123 ABC"] {
            let once = normalize(text);
            assert_eq!(normalize(&once), once);
        }
    }

    #[test]
    fn test_detect_language() {
        assert_eq!(detect_language("مقهى في مسقط"), QueryLanguage::Ar);
        assert_eq!(detect_language("coffee in muscat"), QueryLanguage::En);
        assert_eq!(detect_language("cafe في مسقط"), QueryLanguage::Mixed);
        assert_eq!(detect_language(""), QueryLanguage::En);
        assert_eq!(detect_language("123"), QueryLanguage::En);
    }

    #[test]
    fn test_contains_arabic() {
        assert!(contains_arabic("مسقط"));
        assert!(!contains_arabic("muscat"));
    }
}
