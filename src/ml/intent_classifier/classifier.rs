//! Intent classifier trait definition.

use crate::ml::intent_classifier::types::IntentType;

/// Intent classifier trait.
///
/// Classification never fails: a query that triggers no rule is a plain
/// [`IntentType::Find`].
pub trait IntentClassifier: Send + Sync {
    /// Predict the intent for a raw, un-normalized query.
    fn predict(&self, query: &str) -> IntentType;

    /// Get the name of this classifier for debugging and logging.
    fn name(&self) -> &str;
}
