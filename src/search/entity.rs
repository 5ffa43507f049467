//! Entity extraction.
//!
//! A single left-to-right pass over the query tokens. Each token is tried, in
//! order, as a city, an attribute keyword, and a category; whatever is left
//! and is not a stop word becomes part of the core query. At most one city
//! and one category are captured (first match wins) and earlier decisions are
//! never revisited.

use ahash::AHashSet;
use log::warn;

use crate::analysis::normalizer::{QueryLanguage, normalize};
use crate::analysis::token_filter::stem::arabic::strip_article;
use crate::analysis::token_filter::stem::stem_word;
use crate::analysis::token_filter::stop::is_stopword;
use crate::document::CategoryRecord;
use crate::lexicon::Lexicon;
use crate::search::intent::Entities;
use crate::util::levenshtein::fuzzy_score;

/// Output of [`EntityExtractor::extract`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    pub entities: Entities,
    pub core_tokens: Vec<String>,
}

/// Normalized labels of one category.
struct CategoryLabels<'c> {
    id: &'c str,
    labels: Vec<String>,
}

impl<'c> CategoryLabels<'c> {
    fn new(category: &'c CategoryRecord) -> Self {
        let mut labels: Vec<String> = Vec::with_capacity(4);
        let slug_words = category.slug.replace(['-', '_'], " ");
        for raw in [
            category.name.en.as_str(),
            category.name.ar.as_str(),
            category.slug.as_str(),
            slug_words.as_str(),
        ] {
            let label = normalize(raw.trim());
            if !label.is_empty() && !labels.contains(&label) {
                labels.push(label);
            }
        }

        Self {
            id: &category.id,
            labels,
        }
    }
}

/// Pulls cities, attributes and categories out of query tokens.
#[derive(Debug, Clone, Copy)]
pub struct EntityExtractor<'a> {
    lexicon: &'a Lexicon,
    category_threshold: f64,
}

impl<'a> EntityExtractor<'a> {
    pub fn new(lexicon: &'a Lexicon, category_threshold: f64) -> Self {
        Self {
            lexicon,
            category_threshold,
        }
    }

    /// Split normalized tokens into entities and core tokens.
    pub fn extract(
        &self,
        tokens: &[String],
        categories: &[CategoryRecord],
        language: QueryLanguage,
    ) -> Extraction {
        let categories = prepare_categories(categories);
        let mut extraction = Extraction::default();

        for token in tokens {
            if extraction.entities.city.is_none() {
                if let Some(city) = self.match_city(token) {
                    extraction.entities.city = Some(city.to_string());
                    continue;
                }
            }

            if let Some(attribute) = self.lexicon.lookup_attribute(token) {
                extraction.entities.attributes.insert(attribute);
                continue;
            }

            let stopword = is_stopword(token, language);

            if extraction.entities.category_id.is_none() {
                if let Some(id) = self.match_category(token, stopword, &categories) {
                    extraction.entities.category_id = Some(id.to_string());
                    continue;
                }
            }

            if !stopword {
                extraction.core_tokens.push(token.clone());
            }
        }

        extraction.entities.tags = extraction
            .core_tokens
            .iter()
            .filter(|token| self.lexicon.synonym_dictionary().contains(token))
            .cloned()
            .collect();

        extraction
    }

    /// Canonical city for a token, also trying it without an Arabic article.
    fn match_city(&self, token: &str) -> Option<&'a str> {
        self.lexicon
            .lookup_city(token)
            .or_else(|| self.lexicon.lookup_city(strip_article(token)))
    }

    /// Id of the first category a token names.
    ///
    /// Stop words only match on equality; substring similarity would let
    /// words like "the" match "clothes".
    fn match_category<'c>(
        &self,
        token: &str,
        stopword: bool,
        categories: &[CategoryLabels<'c>],
    ) -> Option<&'c str> {
        let token_bare = strip_article(token);
        let token_stem = stem_word(token);

        categories
            .iter()
            .find(|category| {
                category.labels.iter().any(|label| {
                    token == label
                        || token_bare == strip_article(label)
                        || token_stem == stem_word(label)
                        || (!stopword && fuzzy_score(token, label) > self.category_threshold)
                })
            })
            .map(|category| category.id)
    }
}

/// Normalize category labels, keeping the first of any duplicate id or slug.
fn prepare_categories(categories: &[CategoryRecord]) -> Vec<CategoryLabels<'_>> {
    let mut seen_ids: AHashSet<&str> = AHashSet::new();
    let mut seen_slugs: AHashSet<&str> = AHashSet::new();
    let mut prepared = Vec::with_capacity(categories.len());

    for category in categories {
        if !seen_ids.insert(category.id.as_str()) {
            warn!("Duplicate category id '{}', keeping the first", category.id);
            continue;
        }
        if !category.slug.is_empty() && !seen_slugs.insert(category.slug.as_str()) {
            warn!("Duplicate category slug '{}', keeping the first", category.slug);
            continue;
        }
        prepared.push(CategoryLabels::new(category));
    }

    prepared
}
