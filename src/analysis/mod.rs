//! Text analysis for bilingual queries.
//!
//! This module provides normalization, tokenization, stemming, stop-word
//! filtering and the synonym dictionary used by the query pipeline.

pub mod normalizer;
pub mod synonym;
pub mod token_filter;
pub mod tokenizer;

// Re-export commonly used types
pub use normalizer::{QueryLanguage, detect_language, normalize};
pub use synonym::SynonymDictionary;
pub use token_filter::stem::{Stemmer, stem_ar, stem_en, stem_word};
pub use token_filter::stop::is_stopword;
pub use tokenizer::{QueryTokenizer, tokenize};
