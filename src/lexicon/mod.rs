//! Lexicon tables shared by the query pipeline.
//!
//! A [`Lexicon`] bundles four read-only tables:
//!
//! - the bilingual synonym graph
//! - the city lookup (spelling variant -> canonical city key)
//! - the attribute lookup (keyword -> [`Attribute`])
//! - the ordered intent pattern table
//!
//! Every key is normalized when the lexicon is built, so lookups compare
//! normalized tokens only. A lexicon is never mutated after construction and
//! can be shared across threads freely; [`Lexicon::shared`] hands out the
//! process-wide builtin instance, while tests and hosts can build their own
//! through [`LexiconBuilder`] or a JSON [`LexiconSpec`].
//!
//! # Examples
//!
//! ```
//! use dalil::lexicon::{Attribute, Lexicon};
//!
//! let lexicon = Lexicon::shared();
//! assert_eq!(lexicon.lookup_city("masqat"), Some("muscat"));
//! assert_eq!(lexicon.lookup_attribute("موثق"), Some(Attribute::Verified));
//! assert!(lexicon.synonyms("قهوة").contains("coffee"));
//! ```

pub mod builtin;
pub mod spec;

use std::collections::BTreeSet;
use std::str::FromStr;
use std::sync::{Arc, LazyLock};

use ahash::AHashMap;
use log::warn;
use serde::{Deserialize, Serialize};

use crate::analysis::normalizer::normalize;
use crate::analysis::synonym::SynonymDictionary;
use crate::error::{DalilError, Result};
use crate::ml::intent_classifier::{
    BUILTIN_INTENT_PATTERNS, IntentPatternTable, IntentRule, IntentType,
};
use crate::search::response::Locale;

pub use spec::{CitySpec, IntentRuleSpec, LexiconSpec};

static SHARED_LEXICON: LazyLock<Arc<Lexicon>> = LazyLock::new(|| Arc::new(Lexicon::builtin()));

/// Quality attribute a query can ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Attribute {
    Verified,
    Special,
    Featured,
    New,
    Open,
}

impl Attribute {
    pub fn as_str(&self) -> &'static str {
        match self {
            Attribute::Verified => "verified",
            Attribute::Special => "special",
            Attribute::Featured => "featured",
            Attribute::New => "new",
            Attribute::Open => "open",
        }
    }
}

impl std::fmt::Display for Attribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Attribute {
    type Err = DalilError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "verified" => Ok(Attribute::Verified),
            "special" => Ok(Attribute::Special),
            "featured" => Ok(Attribute::Featured),
            "new" => Ok(Attribute::New),
            "open" => Ok(Attribute::Open),
            other => Err(DalilError::invalid_argument(format!(
                "Unknown attribute: {other}"
            ))),
        }
    }
}

/// A canonical city with its display names and normalized variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CityEntry {
    pub key: String,
    pub name_en: String,
    pub name_ar: String,
    pub variants: Vec<String>,
}

impl CityEntry {
    /// Display name for a locale.
    pub fn display(&self, locale: Locale) -> &str {
        match locale {
            Locale::Ar if !self.name_ar.is_empty() => &self.name_ar,
            _ if !self.name_en.is_empty() => &self.name_en,
            _ => &self.key,
        }
    }
}

/// Immutable lexicon tables.
#[derive(Debug, Clone)]
pub struct Lexicon {
    synonyms: SynonymDictionary,
    cities: Vec<CityEntry>,
    city_index: AHashMap<String, usize>,
    attributes: AHashMap<String, Attribute>,
    intents: IntentPatternTable,
}

impl Lexicon {
    /// Build the builtin bilingual lexicon.
    pub fn builtin() -> Self {
        LexiconBuilder::with_builtin()
            .build()
            .expect("Builtin intent patterns should be valid")
    }

    /// The process-wide builtin lexicon, built on first use.
    pub fn shared() -> Arc<Lexicon> {
        Arc::clone(&SHARED_LEXICON)
    }

    /// Build a lexicon from a JSON document (see [`LexiconSpec`]).
    pub fn from_json_str(json: &str) -> Result<Self> {
        let spec: LexiconSpec = serde_json::from_str(json)?;
        spec.into_builder().build()
    }

    /// Build a lexicon from a JSON file.
    pub fn from_file<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            DalilError::lexicon(format!(
                "Failed to read lexicon file '{}': {}",
                path.as_ref().display(),
                e
            ))
        })?;
        Self::from_json_str(&content)
    }

    pub fn synonym_dictionary(&self) -> &SynonymDictionary {
        &self.synonyms
    }

    /// Synonyms of a word (direct hit, else stem fallback).
    pub fn synonyms(&self, word: &str) -> BTreeSet<String> {
        self.synonyms.synonyms(word)
    }

    /// Canonical city key for a normalized token.
    pub fn lookup_city(&self, token: &str) -> Option<&str> {
        self.city_index
            .get(token)
            .map(|&index| self.cities[index].key.as_str())
    }

    pub fn city(&self, key: &str) -> Option<&CityEntry> {
        self.cities.iter().find(|city| city.key == key)
    }

    /// Normalized spelling variants of a canonical city.
    pub fn city_variants(&self, key: &str) -> &[String] {
        self.city(key)
            .map(|city| city.variants.as_slice())
            .unwrap_or_default()
    }

    /// Localized display name of a canonical city, falling back to the key.
    pub fn city_display<'a>(&'a self, key: &'a str, locale: Locale) -> &'a str {
        self.city(key).map(|city| city.display(locale)).unwrap_or(key)
    }

    pub fn cities(&self) -> &[CityEntry] {
        &self.cities
    }

    /// Attribute requested by a normalized token.
    pub fn lookup_attribute(&self, token: &str) -> Option<Attribute> {
        self.attributes.get(token).copied()
    }

    pub fn intent_patterns(&self) -> &IntentPatternTable {
        &self.intents
    }
}

/// Incremental construction of a [`Lexicon`].
#[derive(Debug, Clone, Default)]
pub struct LexiconBuilder {
    synonym_groups: Vec<Vec<String>>,
    cities: Vec<CityEntry>,
    attributes: Vec<(Attribute, String)>,
    intent_rules: Vec<(String, IntentType)>,
}

impl LexiconBuilder {
    /// An empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// A builder preloaded with the builtin tables.
    pub fn with_builtin() -> Self {
        let mut builder = Self::new();

        for group in builtin::SYNONYM_GROUPS {
            builder = builder.add_synonym_group(group.iter().copied());
        }
        for (key, name_en, name_ar, variants) in builtin::CITIES {
            builder = builder.add_city(key, name_en, name_ar, variants.iter().copied());
        }
        for (attribute, keywords) in builtin::ATTRIBUTE_KEYWORDS {
            builder = builder.add_attribute_keywords(*attribute, keywords.iter().copied());
        }
        for (pattern, intent) in BUILTIN_INTENT_PATTERNS {
            builder = builder.add_intent_rule(*pattern, *intent);
        }

        builder
    }

    pub fn add_synonym_group<I, S>(mut self, terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.synonym_groups
            .push(terms.into_iter().map(|t| t.as_ref().to_string()).collect());
        self
    }

    /// Add a city. Its key and display names are always variants too.
    ///
    /// Adding an existing key merges the variants into that city.
    pub fn add_city<I, S>(mut self, key: &str, name_en: &str, name_ar: &str, variants: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let key = normalize(key.trim());
        let mut all_variants: Vec<String> = Vec::new();
        for variant in [key.as_str(), name_en, name_ar]
            .into_iter()
            .map(str::to_string)
            .chain(variants.into_iter().map(|v| v.as_ref().to_string()))
        {
            let variant = normalize(variant.trim());
            if !variant.is_empty() && !all_variants.contains(&variant) {
                all_variants.push(variant);
            }
        }

        if let Some(existing) = self.cities.iter_mut().find(|city| city.key == key) {
            for variant in all_variants {
                if !existing.variants.contains(&variant) {
                    existing.variants.push(variant);
                }
            }
            return self;
        }

        self.cities.push(CityEntry {
            key,
            name_en: name_en.to_string(),
            name_ar: name_ar.to_string(),
            variants: all_variants,
        });
        self
    }

    pub fn add_attribute_keywords<I, S>(mut self, attribute: Attribute, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.attributes.extend(
            keywords
                .into_iter()
                .map(|keyword| (attribute, keyword.as_ref().to_string())),
        );
        self
    }

    /// Append an intent rule; earlier rules take priority.
    pub fn add_intent_rule<S: Into<String>>(mut self, pattern: S, intent: IntentType) -> Self {
        self.intent_rules.push((pattern.into(), intent));
        self
    }

    /// Insert an intent rule ahead of every rule added so far.
    pub fn prepend_intent_rule<S: Into<String>>(mut self, pattern: S, intent: IntentType) -> Self {
        self.intent_rules.insert(0, (pattern.into(), intent));
        self
    }

    /// Compile the tables.
    pub fn build(self) -> Result<Lexicon> {
        let synonyms = SynonymDictionary::from_synonym_groups(self.synonym_groups);

        let mut city_index: AHashMap<String, usize> = AHashMap::new();
        for (index, city) in self.cities.iter().enumerate() {
            for variant in &city.variants {
                if let Some(&previous) = city_index.get(variant) {
                    warn!(
                        "City variant '{}' of '{}' already maps to '{}', keeping the first",
                        variant, city.key, self.cities[previous].key
                    );
                    continue;
                }
                city_index.insert(variant.clone(), index);
            }
        }

        let mut attributes = AHashMap::new();
        for (attribute, keyword) in self.attributes {
            let keyword = normalize(keyword.trim());
            if keyword.is_empty() {
                continue;
            }
            if let Some(previous) = attributes.get(&keyword) {
                if *previous != attribute {
                    warn!(
                        "Attribute keyword '{}' redefined from '{}' to '{}'",
                        keyword, previous, attribute
                    );
                }
            }
            attributes.insert(keyword, attribute);
        }

        let rules = self
            .intent_rules
            .iter()
            .map(|(pattern, intent)| IntentRule::new(pattern, *intent))
            .collect::<Result<Vec<_>>>()?;

        Ok(Lexicon {
            synonyms,
            cities: self.cities,
            city_index,
            attributes,
            intents: IntentPatternTable::new(rules),
        })
    }
}
