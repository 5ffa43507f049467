//! Ordered rule-table intent classifier.
//!
//! Rules are `(regex, intent)` pairs tried top to bottom against the raw
//! query; the first match wins and no match means [`IntentType::Find`].
//! Because rules are data, the table can be extended through the lexicon
//! without touching [`PatternIntentClassifier::predict`].

use regex::Regex;

use crate::error::{DalilError, Result};
use crate::ml::intent_classifier::classifier::IntentClassifier;
use crate::ml::intent_classifier::types::IntentType;

/// Builtin rules in priority order. Compare is checked before recommend so
/// that "أفضل من" (better than) is not read as a request for the best.
pub const BUILTIN_INTENT_PATTERNS: &[(&str, IntentType)] = &[
    (
        r"(?i)\b(?:compare|comparison|vs|versus|difference\s+between|better\s+than)\b|\b(?:قارن|مقارنة|مقارنه|الفرق\s+بين|أفضل\s+من|افضل\s+من)\b",
        IntentType::Compare,
    ),
    (
        r"(?i)\b(?:recommend|recommendation|suggest|best|top\s+rated|should\s+i)\b|\b(?:انصح|أنصح|تنصح|تنصحني|انصحني|اقترح|أقترح|رشح|رشحلي|أفضل|افضل|أحسن|احسن)\b",
        IntentType::Recommend,
    ),
    (
        r"(?i)\b(?:what\s+is|who\s+is|opening\s+hours|hours|address|phone|contact|info|information|details)\b|\b(?:ما\s+هو|ما\s+هي|متى|عنوان|رقم|هاتف|معلومات|تفاصيل|ساعات|دوام)\b",
        IntentType::Info,
    ),
    (
        r"(?i)\b(?:show\s+all|list|browse|explore|all)\b|\b(?:عرض|اعرض|تصفح|استعرض|كل|جميع|قائمة)\b",
        IntentType::Browse,
    ),
];

/// A compiled `(pattern, intent)` rule.
#[derive(Debug, Clone)]
pub struct IntentRule {
    pattern: Regex,
    intent: IntentType,
}

impl IntentRule {
    /// Compile a rule.
    pub fn new(pattern: &str, intent: IntentType) -> Result<Self> {
        let pattern = Regex::new(pattern).map_err(|e| {
            DalilError::lexicon(format!("Invalid intent pattern for '{intent}': {e}"))
        })?;
        Ok(Self { pattern, intent })
    }

    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    pub fn intent(&self) -> IntentType {
        self.intent
    }

    pub fn is_match(&self, query: &str) -> bool {
        self.pattern.is_match(query)
    }
}

/// Ordered list of intent rules.
#[derive(Debug, Clone, Default)]
pub struct IntentPatternTable {
    rules: Vec<IntentRule>,
}

impl IntentPatternTable {
    pub fn new(rules: Vec<IntentRule>) -> Self {
        Self { rules }
    }

    /// Compile the builtin rule table.
    pub fn builtin() -> Result<Self> {
        let rules = BUILTIN_INTENT_PATTERNS
            .iter()
            .map(|(pattern, intent)| IntentRule::new(pattern, *intent))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { rules })
    }

    pub fn rules(&self) -> &[IntentRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// First matching rule's intent, or `Find`.
    pub fn classify(&self, query: &str) -> IntentType {
        self.rules
            .iter()
            .find(|rule| rule.is_match(query))
            .map(IntentRule::intent)
            .unwrap_or_default()
    }
}

/// Intent classifier backed by an [`IntentPatternTable`].
#[derive(Debug, Clone, Copy)]
pub struct PatternIntentClassifier<'a> {
    table: &'a IntentPatternTable,
}

impl<'a> PatternIntentClassifier<'a> {
    pub fn new(table: &'a IntentPatternTable) -> Self {
        Self { table }
    }
}

impl IntentClassifier for PatternIntentClassifier<'_> {
    fn predict(&self, query: &str) -> IntentType {
        self.table.classify(query)
    }

    fn name(&self) -> &str {
        "pattern"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builtin() -> IntentPatternTable {
        IntentPatternTable::builtin().unwrap()
    }

    #[test]
    fn test_builtin_rules_compile() {
        assert_eq!(builtin().len(), BUILTIN_INTENT_PATTERNS.len());
    }

    #[test]
    fn test_compare_rule() {
        let table = builtin();
        assert_eq!(table.classify("Blue Cafe vs Red Cafe"), IntentType::Compare);
        assert_eq!(table.classify("قارن بين المطاعم"), IntentType::Compare);
        // "better than" outranks the recommend rule's "best"-style triggers.
        assert_eq!(table.classify("أفضل من مطعم النخيل"), IntentType::Compare);
    }

    #[test]
    fn test_recommend_rule() {
        let table = builtin();
        assert_eq!(table.classify("Recommend a cafe"), IntentType::Recommend);
        assert_eq!(table.classify("BEST pharmacy in Muscat"), IntentType::Recommend);
        assert_eq!(table.classify("أفضل مطعم في مسقط"), IntentType::Recommend);
    }

    #[test]
    fn test_info_rule() {
        let table = builtin();
        assert_eq!(table.classify("opening hours of Blue Cafe"), IntentType::Info);
        assert_eq!(table.classify("عنوان صيدلية الامل"), IntentType::Info);
    }

    #[test]
    fn test_browse_rule() {
        let table = builtin();
        assert_eq!(table.classify("show all hotels"), IntentType::Browse);
        assert_eq!(table.classify("كل المطاعم"), IntentType::Browse);
    }

    #[test]
    fn test_word_boundaries() {
        let table = builtin();
        // "كل" inside "الأكل" and "all" inside "mall" must not trigger browse.
        assert_eq!(table.classify("الأكل البحري"), IntentType::Find);
        assert_eq!(table.classify("mall"), IntentType::Find);
    }

    #[test]
    fn test_default_find() {
        let table = builtin();
        assert_eq!(table.classify("coffee in muscat"), IntentType::Find);
        assert_eq!(table.classify(""), IntentType::Find);
    }

    #[test]
    fn test_custom_rule_order() {
        let table = IntentPatternTable::new(vec![
            IntentRule::new(r"(?i)\bdeals?\b", IntentType::Browse).unwrap(),
            IntentRule::new(r"(?i)\bbest\b", IntentType::Recommend).unwrap(),
        ]);
        let classifier = PatternIntentClassifier::new(&table);
        assert_eq!(classifier.predict("best deals"), IntentType::Browse);
        assert_eq!(classifier.predict("best cafe"), IntentType::Recommend);
        assert_eq!(classifier.name(), "pattern");
    }

    #[test]
    fn test_invalid_pattern() {
        let error = IntentRule::new("(unclosed", IntentType::Find).unwrap_err();
        assert!(error.to_string().starts_with("Lexicon error:"));
    }
}
