//! Bilingual synonym dictionary.
//!
//! Groups of interchangeable words are linked bidirectionally: every member
//! of a group maps to every other member. A word that appears in two groups
//! maps to the union of both, but links never chain further than that.

use std::collections::BTreeSet;

use ahash::AHashMap;

use crate::analysis::normalizer::normalize;
use crate::analysis::token_filter::stem::stem_word;

/// Synonym dictionary for query expansion.
///
/// All terms are stored normalized. Synonym sets are ordered so that
/// iteration (and therefore scoring) is deterministic.
#[derive(Debug, Clone, Default)]
pub struct SynonymDictionary {
    /// term -> synonyms (excluding the term itself)
    synonyms: AHashMap<String, BTreeSet<String>>,
    /// stem -> terms with that stem, for the fallback lookup
    stems: AHashMap<String, BTreeSet<String>>,
}

impl SynonymDictionary {
    /// Create an empty dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a synonym dictionary from synonym groups.
    pub fn from_synonym_groups<I, G, S>(groups: I) -> Self
    where
        I: IntoIterator<Item = G>,
        G: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut dictionary = Self::new();
        for group in groups {
            dictionary.add_synonym_group(group);
        }
        dictionary
    }

    /// Add a synonym group where all terms are synonyms of each other.
    ///
    /// For example, adding `["big", "large", "huge"]` links:
    /// - "big" -> ["huge", "large"]
    /// - "large" -> ["big", "huge"]
    /// - "huge" -> ["big", "large"]
    pub fn add_synonym_group<G, S>(&mut self, terms: G)
    where
        G: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let terms: BTreeSet<String> = terms
            .into_iter()
            .map(|term| normalize(term.as_ref().trim()))
            .filter(|term| !term.is_empty())
            .collect();

        for term in &terms {
            let entry = self.synonyms.entry(term.clone()).or_default();
            entry.extend(terms.iter().filter(|other| *other != term).cloned());

            self.stems
                .entry(stem_word(term))
                .or_default()
                .insert(term.clone());
        }
    }

    /// Direct lookup of a normalized term.
    pub fn get_synonyms(&self, term: &str) -> Option<&BTreeSet<String>> {
        self.synonyms.get(term)
    }

    /// Synonyms of a word.
    ///
    /// The normalized word is looked up directly first. When it is not a
    /// dictionary term, every term sharing its stem contributes its synonyms.
    pub fn synonyms(&self, word: &str) -> BTreeSet<String> {
        let word = normalize(word);
        if let Some(direct) = self.synonyms.get(&word) {
            return direct.clone();
        }

        let mut expanded = BTreeSet::new();
        if let Some(terms) = self.stems.get(&stem_word(&word)) {
            for term in terms {
                if let Some(synonyms) = self.synonyms.get(term) {
                    expanded.extend(synonyms.iter().cloned());
                }
            }
        }
        expanded
    }

    /// Check whether a normalized term is in the dictionary.
    pub fn contains(&self, term: &str) -> bool {
        self.synonyms.contains_key(term)
    }

    /// Number of distinct terms.
    pub fn len(&self) -> usize {
        self.synonyms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.synonyms.is_empty()
    }
}
