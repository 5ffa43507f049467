//! Structured understanding of a raw query.

use std::collections::BTreeSet;

use log::debug;
use serde::Serialize;

use crate::analysis::normalizer::detect_language;
use crate::analysis::tokenizer::tokenize;
use crate::config::EngineConfig;
use crate::document::CategoryRecord;
use crate::lexicon::{Attribute, Lexicon};
use crate::ml::intent_classifier::{IntentClassifier, IntentType, PatternIntentClassifier};
use crate::search::entity::EntityExtractor;
use crate::search::response::Locale;

pub use crate::analysis::normalizer::QueryLanguage;

impl From<Locale> for QueryLanguage {
    fn from(locale: Locale) -> Self {
        match locale {
            Locale::Ar => QueryLanguage::Ar,
            Locale::En => QueryLanguage::En,
        }
    }
}

/// Structured values pulled out of a query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Entities {
    /// Canonical city key.
    pub city: Option<String>,
    pub category_id: Option<String>,
    pub attributes: BTreeSet<Attribute>,
    /// Core tokens known to the synonym graph.
    pub tags: Vec<String>,
}

impl Entities {
    /// No city, category or attribute was extracted.
    pub fn is_empty(&self) -> bool {
        self.city.is_none() && self.category_id.is_none() && self.attributes.is_empty()
    }
}

/// The understood form of one query. Built once per call and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchIntent {
    pub raw_query: String,
    /// Normalized tokens of the (possibly truncated) query.
    pub tokens: Vec<String>,
    pub language: QueryLanguage,
    pub entities: Entities,
    /// Tokens left after removing entities and stop words.
    pub core_tokens: Vec<String>,
    pub core_query: String,
    #[serde(rename = "type")]
    pub intent_type: IntentType,
}

impl SearchIntent {
    /// Nothing to match on: no core tokens and no city, category or attribute.
    pub fn is_empty(&self) -> bool {
        self.core_tokens.is_empty() && self.entities.is_empty()
    }
}

/// Cut `text` to at most `max_chars` characters on a char boundary.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((index, _)) => &text[..index],
        None => text,
    }
}

/// Understand a query against the given categories.
///
/// `locale` decides the language of queries that carry no letters at all.
pub fn extract_intent(
    query: &str,
    categories: &[CategoryRecord],
    locale: Locale,
    lexicon: &Lexicon,
    config: &EngineConfig,
) -> SearchIntent {
    let text = truncate_chars(query, config.max_query_chars);
    if text.len() < query.len() {
        debug!(
            "Query truncated from {} to {} characters",
            query.chars().count(),
            config.max_query_chars
        );
    }

    let tokens = tokenize(text);
    let language = if text.chars().any(char::is_alphabetic) {
        detect_language(text)
    } else {
        locale.into()
    };

    let extractor = EntityExtractor::new(lexicon, config.category_match_threshold);
    let extraction = extractor.extract(&tokens, categories, language);

    let intent_type = PatternIntentClassifier::new(lexicon.intent_patterns()).predict(text);
    let core_query = extraction.core_tokens.join(" ");

    debug!(
        "Query '{}': language={}, intent={}, entities={:?}, core='{}'",
        text, language, intent_type, extraction.entities, core_query
    );

    SearchIntent {
        raw_query: query.to_string(),
        tokens,
        language,
        entities: extraction.entities,
        core_tokens: extraction.core_tokens,
        core_query,
        intent_type,
    }
}
