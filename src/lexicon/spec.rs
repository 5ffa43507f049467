//! JSON definition of lexicon tables.
//!
//! ```json
//! {
//!   "extendBuiltin": true,
//!   "synonyms": [["shawarma", "شاورما"]],
//!   "cities": [{ "key": "sharjah", "en": "Sharjah", "ar": "الشارقة", "variants": ["shj"] }],
//!   "attributes": { "open": ["nonstop"] },
//!   "intents": [{ "pattern": "(?i)\\bcheap\\b", "intent": "browse" }]
//! }
//! ```
//!
//! When `extendBuiltin` is set, the document is layered over the builtin
//! tables and its intent rules are tried before the builtin ones.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::lexicon::{Attribute, LexiconBuilder};
use crate::ml::intent_classifier::IntentType;

/// A city entry in a lexicon document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CitySpec {
    pub key: String,
    pub en: String,
    pub ar: String,
    pub variants: Vec<String>,
}

/// An intent rule in a lexicon document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntentRuleSpec {
    pub pattern: String,
    pub intent: IntentType,
}

/// Serializable lexicon definition.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LexiconSpec {
    pub extend_builtin: bool,
    pub synonyms: Vec<Vec<String>>,
    pub cities: Vec<CitySpec>,
    pub attributes: BTreeMap<Attribute, Vec<String>>,
    pub intents: Vec<IntentRuleSpec>,
}

impl LexiconSpec {
    /// Turn the document into a builder ready to compile.
    pub fn into_builder(self) -> LexiconBuilder {
        let mut builder = if self.extend_builtin {
            LexiconBuilder::with_builtin()
        } else {
            LexiconBuilder::new()
        };

        for group in self.synonyms {
            builder = builder.add_synonym_group(group);
        }
        for city in self.cities {
            builder = builder.add_city(&city.key, &city.en, &city.ar, city.variants);
        }
        for (attribute, keywords) in self.attributes {
            builder = builder.add_attribute_keywords(attribute, keywords);
        }
        // Reverse so the document's first rule ends up first.
        for rule in self.intents.into_iter().rev() {
            builder = builder.prepend_intent_rule(rule.pattern, rule.intent);
        }

        builder
    }
}

#[cfg(test)]
mod tests {
    use crate::lexicon::{Attribute, Lexicon};
    use crate::ml::intent_classifier::IntentType;

    const DOCUMENT: &str = r#"{
        "extendBuiltin": true,
        "synonyms": [["shawarma", "شاورما"]],
        "cities": [{ "key": "sharjah", "en": "Sharjah", "ar": "الشارقة", "variants": ["shj"] }],
        "attributes": { "open": ["nonstop"] },
        "intents": [
            { "pattern": "(?i)\\bcheap\\b", "intent": "browse" },
            { "pattern": "(?i)\\bbest\\b", "intent": "info" }
        ]
    }"#;

    #[test]
    fn test_extend_builtin() {
        let lexicon = Lexicon::from_json_str(DOCUMENT).unwrap();

        assert!(lexicon.synonyms("shawarma").contains("شاورما"));
        assert_eq!(lexicon.lookup_city("shj"), Some("sharjah"));
        assert_eq!(lexicon.lookup_city("الشارقه"), Some("sharjah"));
        assert_eq!(lexicon.lookup_attribute("nonstop"), Some(Attribute::Open));

        // Builtin tables are still there.
        assert_eq!(lexicon.lookup_city("muscat"), Some("muscat"));

        // Document rules come first, in document order.
        let table = lexicon.intent_patterns();
        assert_eq!(table.rules()[0].intent(), IntentType::Browse);
        assert_eq!(table.rules()[1].intent(), IntentType::Info);
        assert_eq!(table.classify("best cafe"), IntentType::Info);
    }

    #[test]
    fn test_standalone_document() {
        let lexicon = Lexicon::from_json_str(r#"{ "synonyms": [["a1", "b2"]] }"#).unwrap();
        assert_eq!(lexicon.lookup_city("muscat"), None);
        assert!(lexicon.intent_patterns().is_empty());
        assert_eq!(lexicon.intent_patterns().classify("best cafe"), IntentType::Find);
    }

    #[test]
    fn test_invalid_documents() {
        assert!(Lexicon::from_json_str("{ not json").is_err());
        assert!(
            Lexicon::from_json_str(r#"{ "intents": [{ "pattern": "(", "intent": "find" }] }"#)
                .is_err()
        );
        assert!(
            Lexicon::from_json_str(r#"{ "intents": [{ "pattern": "x", "intent": "shop" }] }"#)
                .is_err()
        );
    }
}
