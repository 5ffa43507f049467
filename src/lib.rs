//! # Dalil
//!
//! Bilingual (Arabic/English) query understanding and ranking for business
//! directories.
//!
//! ## Features
//!
//! - Arabic and English normalization, light stemming and stop words
//! - City, category and quality-attribute extraction from free text
//! - Rule-based intent classification
//! - Edit-distance fuzzy matching and a bilingual synonym graph
//! - Weighted multi-signal scoring with explainable match reasons
//! - Localized response text
//!
//! ```
//! use dalil::prelude::*;
//!
//! let records = vec![CandidateRecord::new("The Coffee House", "بيت القهوة")];
//! let response = smart_search("coffee", &records, &[], Locale::En, None);
//! assert_eq!(response.results.len(), 1);
//! ```

pub mod analysis;
pub mod cli;
pub mod config;
pub mod document;
pub mod error;
pub mod lexicon;
pub mod ml;
pub mod search;
pub mod util;

pub mod prelude {
    pub use crate::config::EngineConfig;
    pub use crate::document::{CandidateRecord, CategoryRecord, LocalizedText};
    pub use crate::error::{DalilError, Result};
    pub use crate::lexicon::{Attribute, Lexicon, LexiconBuilder};
    pub use crate::ml::intent_classifier::IntentType;
    pub use crate::search::{
        ConversationTurn, Locale, MatchReason, ScoredCandidate, SearchIntent, SearchResponse,
        SmartSearchEngine, extract_intent, generate_response, smart_search,
    };
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
