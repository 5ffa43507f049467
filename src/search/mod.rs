//! The query pipeline: understanding, scoring, ranking and response text.

pub mod engine;
pub mod entity;
pub mod intent;
pub mod ranking;
pub mod response;
pub mod scoring;

pub use self::engine::{
    SearchResponse, SmartSearchEngine, extract_intent, generate_response, smart_search,
};
pub use self::entity::{EntityExtractor, Extraction};
pub use self::intent::{Entities, QueryLanguage, SearchIntent};
pub use self::ranking::rank;
pub use self::response::{ConversationTurn, Locale, ResponseComposer};
pub use self::scoring::{MatchReason, ScoredCandidate, Scorer, ScoringWeights};
