//! Per-token filters: stemming and stop words.

pub mod stem;
pub mod stop;

pub use stem::{ArabicLightStemmer, EnglishSuffixStemmer, Stemmer, stem_word};
pub use stop::is_stopword;
