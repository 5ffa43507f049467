//! High-level entry points of the query pipeline.
//!
//! # Examples
//!
//! ```
//! use dalil::document::CandidateRecord;
//! use dalil::search::{Locale, SmartSearchEngine};
//!
//! let records = vec![
//!     CandidateRecord::new("Blue Café", "مقهى الأزرق").with_city("Muscat").verified(true),
//!     CandidateRecord::new("Corner Pharmacy", "صيدلية الزاوية").with_city("Sohar"),
//! ];
//!
//! let engine = SmartSearchEngine::default();
//! let response = engine.smart_search("مقهى في مسقط", &records, &[], Locale::Ar, None);
//! assert_eq!(response.results[0].record.name.en, "Blue Café");
//!
//! let text = engine.generate_response(
//!     "مقهى في مسقط",
//!     &response.results,
//!     &response.intent,
//!     &[],
//!     Locale::Ar,
//!     &[],
//! );
//! assert!(text.contains("مقهى الأزرق"));
//! ```

use std::sync::Arc;

use log::debug;
use rayon::prelude::*;
use serde::Serialize;

use crate::config::EngineConfig;
use crate::document::{CandidateRecord, CategoryRecord};
use crate::lexicon::Lexicon;
use crate::search::intent::{self, SearchIntent};
use crate::search::ranking::rank;
use crate::search::response::{ConversationTurn, Locale, ResponseComposer};
use crate::search::scoring::{ScoredCandidate, Scorer};

/// Ranked results together with the understood query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResponse<'r> {
    pub results: Vec<ScoredCandidate<'r>>,
    pub intent: SearchIntent,
}

/// Query understanding, ranking and response composition over a lexicon.
///
/// The engine holds no per-query state; one instance can serve any number of
/// threads.
#[derive(Debug, Clone)]
pub struct SmartSearchEngine {
    lexicon: Arc<Lexicon>,
    config: EngineConfig,
}

impl Default for SmartSearchEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl SmartSearchEngine {
    /// Create an engine over the shared builtin lexicon.
    pub fn new(config: EngineConfig) -> Self {
        Self::with_lexicon(Lexicon::shared(), config)
    }

    /// Create an engine over a custom lexicon.
    pub fn with_lexicon(lexicon: Arc<Lexicon>, config: EngineConfig) -> Self {
        Self { lexicon, config }
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Understand a query.
    pub fn extract_intent(
        &self,
        query: &str,
        categories: &[CategoryRecord],
        locale: Locale,
    ) -> SearchIntent {
        intent::extract_intent(query, categories, locale, &self.lexicon, &self.config)
    }

    /// Understand a query and rank `candidates` against it.
    ///
    /// `limit` defaults to the configured result limit.
    pub fn smart_search<'r>(
        &self,
        query: &str,
        candidates: &'r [CandidateRecord],
        categories: &[CategoryRecord],
        locale: Locale,
        limit: Option<usize>,
    ) -> SearchResponse<'r> {
        let intent = self.extract_intent(query, categories, locale);
        let results = self.rank_candidates(&intent, candidates, limit);
        SearchResponse { results, intent }
    }

    /// Rank `candidates` against an already understood query.
    pub fn rank_candidates<'r>(
        &self,
        intent: &SearchIntent,
        candidates: &'r [CandidateRecord],
        limit: Option<usize>,
    ) -> Vec<ScoredCandidate<'r>> {
        let limit = limit.unwrap_or(self.config.default_limit);
        let scorer = Scorer::new(&self.lexicon, &self.config, intent);

        let scored: Vec<ScoredCandidate<'r>> =
            if candidates.len() >= self.config.parallel_threshold {
                candidates.par_iter().map(|record| scorer.score(record)).collect()
            } else {
                candidates.iter().map(|record| scorer.score(record)).collect()
            };

        let ranked = rank(scored, limit);
        debug!(
            "Ranked {} of {} candidates (limit {})",
            ranked.len(),
            candidates.len(),
            limit
        );
        ranked
    }

    /// Compose the localized response text for ranked results.
    pub fn generate_response(
        &self,
        query: &str,
        results: &[ScoredCandidate<'_>],
        intent: &SearchIntent,
        categories: &[CategoryRecord],
        locale: Locale,
        history: &[ConversationTurn],
    ) -> String {
        ResponseComposer::new(&self.lexicon, self.config.max_listed_results)
            .compose(query, results, intent, categories, locale, history)
    }
}

/// [`SmartSearchEngine::extract_intent`] with the builtin lexicon and default configuration.
pub fn extract_intent(query: &str, categories: &[CategoryRecord], locale: Locale) -> SearchIntent {
    SmartSearchEngine::default().extract_intent(query, categories, locale)
}

/// [`SmartSearchEngine::smart_search`] with the builtin lexicon and default configuration.
pub fn smart_search<'r>(
    query: &str,
    candidates: &'r [CandidateRecord],
    categories: &[CategoryRecord],
    locale: Locale,
    limit: Option<usize>,
) -> SearchResponse<'r> {
    SmartSearchEngine::default().smart_search(query, candidates, categories, locale, limit)
}

/// [`SmartSearchEngine::generate_response`] with the builtin lexicon and default configuration.
pub fn generate_response(
    query: &str,
    results: &[ScoredCandidate<'_>],
    intent: &SearchIntent,
    categories: &[CategoryRecord],
    locale: Locale,
    history: &[ConversationTurn],
) -> String {
    SmartSearchEngine::default().generate_response(query, results, intent, categories, locale, history)
}
