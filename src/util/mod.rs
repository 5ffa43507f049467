//! Utility modules for Dalil.

pub mod levenshtein;

// Re-export commonly used functions
pub use levenshtein::{edit_distance, fuzzy_score};
