//! Query intent classification.
//!
//! # Architecture
//!
//! - `IntentClassifier` trait: common interface for classifiers
//! - `PatternIntentClassifier`: ordered regex rule table, first match wins
//! - `IntentPatternTable` / `IntentRule`: the rule data itself
//! - `IntentType`: find / recommend / compare / info / browse
//!
//! # Example
//!
//! ```
//! use dalil::ml::intent_classifier::{IntentClassifier, IntentPatternTable, IntentType, PatternIntentClassifier};
//!
//! let table = IntentPatternTable::builtin().unwrap();
//! let classifier = PatternIntentClassifier::new(&table);
//! assert_eq!(classifier.predict("recommend a good cafe"), IntentType::Recommend);
//! ```

mod classifier;
mod pattern_classifier;
mod types;

// Public exports
pub use classifier::IntentClassifier;
pub use pattern_classifier::{
    BUILTIN_INTENT_PATTERNS, IntentPatternTable, IntentRule, PatternIntentClassifier,
};
pub use types::IntentType;
