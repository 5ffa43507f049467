//! Machine learning components of the query pipeline.
//!
//! Intent classification is currently rule based; the [`IntentClassifier`]
//! trait is the seam for learned models.
//!
//! [`IntentClassifier`]: intent_classifier::IntentClassifier

pub mod intent_classifier;
