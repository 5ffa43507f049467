//! Multi-signal relevance scoring.
//!
//! Every core-query token is checked against the candidate's name,
//! description, tags and free-text category label; the extracted city,
//! category and attributes add their own signals. Contributions are
//! additive and a token may fire several signals at once. Every fired signal
//! leaves a [`MatchReason`] on the result.
//!
//! An exact name hit is also a substring of a name token, so it fires the
//! fuzzy signal as well; with the default weights it always outweighs any
//! combination of inexact name signals.

use std::str::FromStr;

use log::trace;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::analysis::normalizer::normalize;
use crate::analysis::token_filter::stem::stem_word;
use crate::analysis::tokenizer::tokenize;
use crate::config::EngineConfig;
use crate::document::CandidateRecord;
use crate::error::{DalilError, Result};
use crate::lexicon::{Attribute, Lexicon};
use crate::search::intent::SearchIntent;
use crate::search::response::Locale;
use crate::util::levenshtein::fuzzy_score;

/// Weight of every scoring signal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScoringWeights {
    pub name_exact: f64,
    pub name_stem: f64,
    pub name_fuzzy: f64,
    pub name_synonym: f64,
    pub description_exact: f64,
    pub description_stem: f64,
    pub description_synonym: f64,
    pub tag_exact: f64,
    pub tag_fuzzy: f64,
    pub tag_synonym: f64,
    /// Token found in the free-text category label.
    pub category_text: f64,
    /// Extracted category id equals the candidate's.
    pub category_match: f64,
    pub city_match: f64,
    /// Per requested attribute the candidate has.
    pub attribute_match: f64,
    pub verified_bonus: f64,
    pub special_bonus: f64,
    pub featured_bonus: f64,
    /// Score of a verified candidate when the query carries nothing to match.
    pub empty_query_verified: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            name_exact: 30.0,
            name_stem: 15.0,
            name_fuzzy: 10.5,
            name_synonym: 12.0,
            description_exact: 8.0,
            description_stem: 4.8,
            description_synonym: 4.0,
            tag_exact: 10.0,
            tag_fuzzy: 7.0,
            tag_synonym: 5.0,
            category_text: 10.0,
            category_match: 20.0,
            city_match: 15.0,
            attribute_match: 5.0,
            verified_bonus: 2.0,
            special_bonus: 2.0,
            featured_bonus: 1.0,
            empty_query_verified: 1.0,
        }
    }
}

impl ScoringWeights {
    fn named(&self) -> [(&'static str, f64); 18] {
        [
            ("nameExact", self.name_exact),
            ("nameStem", self.name_stem),
            ("nameFuzzy", self.name_fuzzy),
            ("nameSynonym", self.name_synonym),
            ("descriptionExact", self.description_exact),
            ("descriptionStem", self.description_stem),
            ("descriptionSynonym", self.description_synonym),
            ("tagExact", self.tag_exact),
            ("tagFuzzy", self.tag_fuzzy),
            ("tagSynonym", self.tag_synonym),
            ("categoryText", self.category_text),
            ("categoryMatch", self.category_match),
            ("cityMatch", self.city_match),
            ("attributeMatch", self.attribute_match),
            ("verifiedBonus", self.verified_bonus),
            ("specialBonus", self.special_bonus),
            ("featuredBonus", self.featured_bonus),
            ("emptyQueryVerified", self.empty_query_verified),
        ]
    }

    /// Reject negative or non-finite weights.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in self.named() {
            if !value.is_finite() || value < 0.0 {
                return Err(DalilError::config(format!(
                    "Weight {name} must be a non-negative number, got {value}"
                )));
            }
        }
        Ok(())
    }
}

/// Why a candidate scored.
///
/// The string form (`name:exact:cafe`, `city:match`, `attr:verified`, ...) is
/// what gets serialized.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MatchReason {
    NameExact(String),
    NameStem(String),
    NameFuzzy(String),
    NameSynonym(String),
    DescriptionExact(String),
    DescriptionStem(String),
    DescriptionSynonym(String),
    TagExact(String),
    TagFuzzy(String),
    TagSynonym(String),
    CategoryText,
    CategoryExact,
    CityMatch,
    Attribute(Attribute),
}

impl MatchReason {
    /// A direct hit on the candidate's name.
    pub fn is_name_exact(&self) -> bool {
        matches!(self, MatchReason::NameExact(_))
    }

    /// Any inexact text signal.
    pub fn is_related(&self) -> bool {
        matches!(
            self,
            MatchReason::NameStem(_)
                | MatchReason::NameFuzzy(_)
                | MatchReason::NameSynonym(_)
                | MatchReason::DescriptionExact(_)
                | MatchReason::DescriptionStem(_)
                | MatchReason::DescriptionSynonym(_)
                | MatchReason::TagExact(_)
                | MatchReason::TagFuzzy(_)
                | MatchReason::TagSynonym(_)
        )
    }

    pub fn is_category(&self) -> bool {
        matches!(self, MatchReason::CategoryText | MatchReason::CategoryExact)
    }
}

impl std::fmt::Display for MatchReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchReason::NameExact(token) => write!(f, "name:exact:{token}"),
            MatchReason::NameStem(token) => write!(f, "name:stem:{token}"),
            MatchReason::NameFuzzy(token) => write!(f, "name:fuzzy:{token}"),
            MatchReason::NameSynonym(token) => write!(f, "name:synonym:{token}"),
            MatchReason::DescriptionExact(token) => write!(f, "desc:exact:{token}"),
            MatchReason::DescriptionStem(token) => write!(f, "desc:stem:{token}"),
            MatchReason::DescriptionSynonym(token) => write!(f, "desc:synonym:{token}"),
            MatchReason::TagExact(token) => write!(f, "tag:exact:{token}"),
            MatchReason::TagFuzzy(token) => write!(f, "tag:fuzzy:{token}"),
            MatchReason::TagSynonym(token) => write!(f, "tag:synonym:{token}"),
            MatchReason::CategoryText => f.write_str("category:text"),
            MatchReason::CategoryExact => f.write_str("category:exact"),
            MatchReason::CityMatch => f.write_str("city:match"),
            MatchReason::Attribute(attribute) => write!(f, "attr:{attribute}"),
        }
    }
}

impl FromStr for MatchReason {
    type Err = DalilError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "category:text" => return Ok(MatchReason::CategoryText),
            "category:exact" => return Ok(MatchReason::CategoryExact),
            "city:match" => return Ok(MatchReason::CityMatch),
            _ => {}
        }
        if let Some(attribute) = s.strip_prefix("attr:") {
            return attribute.parse().map(MatchReason::Attribute);
        }

        let mut parts = s.splitn(3, ':');
        let (field, kind, token) = match (parts.next(), parts.next(), parts.next()) {
            (Some(field), Some(kind), Some(token)) if !token.is_empty() => {
                (field, kind, token.to_string())
            }
            _ => {
                return Err(DalilError::invalid_argument(format!(
                    "Unknown match reason: {s}"
                )));
            }
        };

        match (field, kind) {
            ("name", "exact") => Ok(MatchReason::NameExact(token)),
            ("name", "stem") => Ok(MatchReason::NameStem(token)),
            ("name", "fuzzy") => Ok(MatchReason::NameFuzzy(token)),
            ("name", "synonym") => Ok(MatchReason::NameSynonym(token)),
            ("desc", "exact") => Ok(MatchReason::DescriptionExact(token)),
            ("desc", "stem") => Ok(MatchReason::DescriptionStem(token)),
            ("desc", "synonym") => Ok(MatchReason::DescriptionSynonym(token)),
            ("tag", "exact") => Ok(MatchReason::TagExact(token)),
            ("tag", "fuzzy") => Ok(MatchReason::TagFuzzy(token)),
            ("tag", "synonym") => Ok(MatchReason::TagSynonym(token)),
            _ => Err(DalilError::invalid_argument(format!(
                "Unknown match reason: {s}"
            ))),
        }
    }
}

impl Serialize for MatchReason {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for MatchReason {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        tag.parse().map_err(serde::de::Error::custom)
    }
}

/// A candidate with its score and the reasons behind it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredCandidate<'r> {
    pub record: &'r CandidateRecord,
    pub score: f64,
    pub reasons: Vec<MatchReason>,
}

impl ScoredCandidate<'_> {
    /// Short human-readable reason, strongest signal first.
    pub fn explain(&self, locale: Locale) -> Option<&'static str> {
        let (exact, related, category, city) = match locale {
            Locale::En => (
                "direct name match",
                "related to your search",
                "same category",
                "in the requested city",
            ),
            Locale::Ar => (
                "تطابق مباشر مع الاسم",
                "مرتبط ببحثك",
                "ضمن الفئة نفسها",
                "في المدينة المطلوبة",
            ),
        };

        if self.reasons.iter().any(MatchReason::is_name_exact) {
            Some(exact)
        } else if self.reasons.iter().any(MatchReason::is_related) {
            Some(related)
        } else if self.reasons.iter().any(MatchReason::is_category) {
            Some(category)
        } else if self.reasons.contains(&MatchReason::CityMatch) {
            Some(city)
        } else {
            None
        }
    }

    /// Reason tags in their string form.
    pub fn reason_tags(&self) -> Vec<String> {
        self.reasons.iter().map(ToString::to_string).collect()
    }
}

/// A normalized synonym of a query term.
#[derive(Debug, Clone)]
struct Synonym {
    text: String,
    stem: String,
    phrase: bool,
}

impl Synonym {
    fn new(text: String) -> Self {
        Self {
            stem: stem_word(&text),
            phrase: text.contains(' '),
            text,
        }
    }

    /// Found in a text field: multi-word synonyms by substring, single
    /// words by token or stem equality.
    fn found_in(&self, field: &TextField) -> bool {
        if self.phrase {
            field.text.contains(&self.text)
        } else {
            field.tokens.contains(&self.text) || field.stems.contains(&self.stem)
        }
    }

    fn matches_tag(&self, tag: &TagField) -> bool {
        tag.text == self.text || tag.stem == self.stem || (self.phrase && tag.text.contains(&self.text))
    }
}

/// A core-query token with its precomputed stem and synonyms.
#[derive(Debug, Clone)]
struct QueryTerm {
    text: String,
    stem: String,
    synonyms: Vec<Synonym>,
}

/// Normalized text with its tokens and their stems.
#[derive(Debug, Default)]
struct TextField {
    text: String,
    tokens: Vec<String>,
    stems: Vec<String>,
}

impl TextField {
    fn new<'s>(parts: impl IntoIterator<Item = &'s str>) -> Self {
        let mut field = TextField::default();
        for part in parts {
            let part = part.trim();
            if part.is_empty() {
                continue;
            }
            if !field.text.is_empty() {
                field.text.push(' ');
            }
            field.text.push_str(&normalize(part));
            field.tokens.extend(tokenize(part));
        }
        field.stems = field.tokens.iter().map(|token| stem_word(token)).collect();
        field
    }

    fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

#[derive(Debug)]
struct TagField {
    text: String,
    stem: String,
}

/// Normalized view of a candidate's matchable fields.
#[derive(Debug)]
struct CandidateText {
    name: TextField,
    description: TextField,
    tags: Vec<TagField>,
    category_label: String,
    city: TextField,
}

impl CandidateText {
    fn new(record: &CandidateRecord) -> Self {
        let description = match &record.description {
            Some(text) => TextField::new([text.en.as_str(), text.ar.as_str()]),
            None => TextField::default(),
        };
        let tags = record
            .tags
            .iter()
            .map(|tag| normalize(tag.trim()))
            .filter(|tag| !tag.is_empty())
            .map(|text| TagField {
                stem: stem_word(&text),
                text,
            })
            .collect();

        Self {
            name: TextField::new([record.name.en.as_str(), record.name.ar.as_str()]),
            description,
            tags,
            category_label: record
                .category
                .as_deref()
                .map(|label| normalize(label.trim()))
                .unwrap_or_default(),
            city: TextField::new([record.city.as_str()]),
        }
    }
}

/// Accumulates score and reasons for one candidate.
#[derive(Debug, Default)]
struct Tally {
    score: f64,
    reasons: Vec<MatchReason>,
}

impl Tally {
    fn add(&mut self, weight: f64, reason: MatchReason) {
        self.score += weight;
        if !self.reasons.contains(&reason) {
            self.reasons.push(reason);
        }
    }
}

/// Scores candidates against one understood query.
#[derive(Debug)]
pub struct Scorer<'a> {
    intent: &'a SearchIntent,
    weights: &'a ScoringWeights,
    fuzzy_threshold: f64,
    terms: Vec<QueryTerm>,
    city_variants: &'a [String],
}

impl<'a> Scorer<'a> {
    /// Precompute stems and synonyms of the query terms.
    pub fn new(lexicon: &'a Lexicon, config: &'a EngineConfig, intent: &'a SearchIntent) -> Self {
        let terms = intent
            .core_tokens
            .iter()
            .map(|token| QueryTerm {
                text: token.clone(),
                stem: stem_word(token),
                synonyms: lexicon
                    .synonyms(token)
                    .into_iter()
                    .filter(|synonym| synonym != token)
                    .map(Synonym::new)
                    .collect(),
            })
            .collect();

        let city_variants = intent
            .entities
            .city
            .as_deref()
            .map(|city| lexicon.city_variants(city))
            .unwrap_or_default();

        Self {
            intent,
            weights: &config.weights,
            fuzzy_threshold: config.fuzzy_match_threshold,
            terms,
            city_variants,
        }
    }

    /// Score one candidate.
    pub fn score<'r>(&self, record: &'r CandidateRecord) -> ScoredCandidate<'r> {
        let weights = self.weights;

        if self.intent.is_empty() {
            let score = if record.is_verified {
                weights.empty_query_verified
            } else {
                0.0
            };
            return ScoredCandidate {
                record,
                score,
                reasons: Vec::new(),
            };
        }

        let text = CandidateText::new(record);
        let mut tally = Tally::default();

        for term in &self.terms {
            self.score_name(term, &text.name, &mut tally);
            self.score_description(term, &text.description, &mut tally);
            self.score_tags(term, &text.tags, &mut tally);

            if !text.category_label.is_empty()
                && (text.category_label.contains(&term.text)
                    || fuzzy_score(&term.text, &text.category_label) > self.fuzzy_threshold)
            {
                tally.add(weights.category_text, MatchReason::CategoryText);
            }
        }

        let entities = &self.intent.entities;
        if let (Some(wanted), Some(actual)) = (&entities.category_id, &record.category_id) {
            if wanted == actual {
                tally.add(weights.category_match, MatchReason::CategoryExact);
            }
        }

        if !self.city_variants.is_empty() && self.city_matches(&text.city) {
            tally.add(weights.city_match, MatchReason::CityMatch);
        }

        for attribute in &entities.attributes {
            let present = match attribute {
                Attribute::Verified => record.is_verified,
                Attribute::Special => record.is_special,
                Attribute::Featured => record.is_featured(),
                Attribute::New | Attribute::Open => false,
            };
            if present {
                tally.add(weights.attribute_match, MatchReason::Attribute(*attribute));
            }
        }

        // With keywords, quality bonuses only rank records that already matched.
        // Entity-only queries still surface quality listings.
        if tally.score > 0.0 || self.terms.is_empty() {
            if record.is_verified {
                tally.score += weights.verified_bonus;
            }
            if record.is_special {
                tally.score += weights.special_bonus;
            }
            if record.is_featured() {
                tally.score += weights.featured_bonus;
            }
        }

        trace!(
            "Scored '{}' ({}): {:.2} {:?}",
            record.name.en, record.id, tally.score, tally.reasons
        );

        ScoredCandidate {
            record,
            score: tally.score,
            reasons: tally.reasons,
        }
    }

    fn score_name(&self, term: &QueryTerm, name: &TextField, tally: &mut Tally) {
        if name.is_empty() {
            return;
        }
        let weights = self.weights;

        if name.text.contains(&term.text) {
            tally.add(weights.name_exact, MatchReason::NameExact(term.text.clone()));
        }
        if name.stems.contains(&term.stem) {
            tally.add(weights.name_stem, MatchReason::NameStem(term.text.clone()));
        }
        if name
            .tokens
            .iter()
            .any(|token| fuzzy_score(&term.text, token) > self.fuzzy_threshold)
        {
            tally.add(weights.name_fuzzy, MatchReason::NameFuzzy(term.text.clone()));
        }
        if term.synonyms.iter().any(|synonym| synonym.found_in(name)) {
            tally.add(weights.name_synonym, MatchReason::NameSynonym(term.text.clone()));
        }
    }

    fn score_description(&self, term: &QueryTerm, description: &TextField, tally: &mut Tally) {
        if description.is_empty() {
            return;
        }
        let weights = self.weights;

        if description.text.contains(&term.text) {
            tally.add(
                weights.description_exact,
                MatchReason::DescriptionExact(term.text.clone()),
            );
        }
        if description.stems.contains(&term.stem) {
            tally.add(
                weights.description_stem,
                MatchReason::DescriptionStem(term.text.clone()),
            );
        }
        if term.synonyms.iter().any(|synonym| synonym.found_in(description)) {
            tally.add(
                weights.description_synonym,
                MatchReason::DescriptionSynonym(term.text.clone()),
            );
        }
    }

    fn score_tags(&self, term: &QueryTerm, tags: &[TagField], tally: &mut Tally) {
        if tags.is_empty() {
            return;
        }
        let weights = self.weights;

        if tags
            .iter()
            .any(|tag| tag.text.contains(&term.text) || term.text.contains(&tag.text))
        {
            tally.add(weights.tag_exact, MatchReason::TagExact(term.text.clone()));
        }
        if tags.iter().any(|tag| {
            tag.stem == term.stem || fuzzy_score(&term.text, &tag.text) > self.fuzzy_threshold
        }) {
            tally.add(weights.tag_fuzzy, MatchReason::TagFuzzy(term.text.clone()));
        }
        if term
            .synonyms
            .iter()
            .any(|synonym| tags.iter().any(|tag| synonym.matches_tag(tag)))
        {
            tally.add(weights.tag_synonym, MatchReason::TagSynonym(term.text.clone()));
        }
    }

    fn city_matches(&self, city: &TextField) -> bool {
        self.city_variants.iter().any(|variant| {
            city.tokens.contains(variant)
                || city.text == *variant
                || (variant.contains(' ') && city.text.contains(variant.as_str()))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::intent::extract_intent;

    fn score_all<'r>(
        query: &str,
        records: &'r [CandidateRecord],
    ) -> Vec<ScoredCandidate<'r>> {
        let lexicon = Lexicon::builtin();
        let config = EngineConfig::default();
        let intent = extract_intent(query, &[], Locale::En, &lexicon, &config);
        let scorer = Scorer::new(&lexicon, &config, &intent);
        records.iter().map(|record| scorer.score(record)).collect()
    }

    #[test]
    fn test_default_weight_ordering() {
        let w = ScoringWeights::default();
        assert!(w.name_exact > w.name_stem);
        assert!(w.name_stem > w.name_fuzzy);
        assert!(w.name_stem > w.name_synonym);
        assert!(w.name_exact > w.name_stem + w.name_synonym);
        assert!(w.description_exact > w.description_stem);
        assert!(w.description_stem > w.description_synonym);
        assert!(w.tag_exact > w.tag_fuzzy);
        assert!(w.tag_fuzzy > w.tag_synonym);
        assert!(w.validate().is_ok());
    }

    #[test]
    fn test_invalid_weights() {
        let weights = ScoringWeights {
            tag_exact: f64::NAN,
            ..ScoringWeights::default()
        };
        assert!(weights.validate().is_err());
    }

    #[test]
    fn test_name_exact_beats_stem() {
        let records = [
            CandidateRecord::new("Grand Bakery", ""),
            CandidateRecord::new("Bakeries Plaza", ""),
        ];
        let scored = score_all("bakery", &records);

        assert!(scored[0].reasons.contains(&MatchReason::NameExact("bakery".into())));
        assert!(!scored[1].reasons.contains(&MatchReason::NameExact("bakery".into())));
        assert!(scored[1].reasons.contains(&MatchReason::NameStem("bakery".into())));
        assert!(scored[0].score > scored[1].score);
    }

    #[test]
    fn test_name_stem_alone() {
        let records = [CandidateRecord::new("Printing House", "")];
        let scored = score_all("printed", &records);

        assert_eq!(scored[0].reason_tags(), vec!["name:stem:printed"]);
        assert_eq!(scored[0].score, ScoringWeights::default().name_stem);
    }

    #[test]
    fn test_name_stem_and_fuzzy_fire_together() {
        let w = ScoringWeights::default();

        let records = [CandidateRecord::new("Window Shop", "")];
        let scored = score_all("windows", &records);
        assert_eq!(
            scored[0].reason_tags(),
            vec!["name:stem:windows", "name:fuzzy:windows"]
        );
        assert_eq!(scored[0].score, w.name_stem + w.name_fuzzy);

        let records = [CandidateRecord::new("Restaurant Nour", "")];
        let scored = score_all("restaurants", &records);
        assert_eq!(
            scored[0].reason_tags(),
            vec![
                "name:stem:restaurants",
                "name:fuzzy:restaurants",
                "name:synonym:restaurants"
            ]
        );
        assert_eq!(scored[0].score, w.name_stem + w.name_fuzzy + w.name_synonym);
        assert!(scored[0].score < w.name_exact + w.name_fuzzy);
    }

    #[test]
    fn test_description_synonym_alone() {
        let records = [CandidateRecord::new("Al Noor", "").with_description("Fresh bread daily", "")];
        let scored = score_all("pastry", &records);

        assert_eq!(scored[0].reason_tags(), vec!["desc:synonym:pastry"]);
        assert_eq!(scored[0].score, ScoringWeights::default().description_synonym);
    }

    #[test]
    fn test_tag_fuzzy_alone() {
        let records = [CandidateRecord::new("Al Noor", "").with_tags(["pharmacy"])];
        let scored = score_all("pharmcy", &records);

        assert_eq!(scored[0].reason_tags(), vec!["tag:fuzzy:pharmcy"]);
        assert_eq!(scored[0].score, ScoringWeights::default().tag_fuzzy);
    }

    #[test]
    fn test_name_fuzzy_typo() {
        let records = [CandidateRecord::new("Pharmacy Plus", "")];
        let scored = score_all("pharmcy", &records);

        assert!(scored[0].reasons.contains(&MatchReason::NameFuzzy("pharmcy".into())));
        assert!(scored[0].score > 0.0);
    }

    #[test]
    fn test_name_synonym_across_languages() {
        let records = [CandidateRecord::new("The Coffee House", "")];
        let scored = score_all("قهوة", &records);

        let reasons = scored[0].reason_tags();
        assert_eq!(reasons, vec!["name:synonym:قهوه"]);
        assert_eq!(scored[0].score, ScoringWeights::default().name_synonym);
    }

    #[test]
    fn test_description_and_tags() {
        let records = [CandidateRecord::new("Al Noor", "")
            .with_description("Fresh bread every morning", "")
            .with_tags(["bakery", "fresh bread"])];
        let scored = score_all("bread", &records);

        let reasons = scored[0].reason_tags();
        assert!(reasons.contains(&"desc:exact:bread".to_string()));
        assert!(reasons.contains(&"desc:stem:bread".to_string()));
        assert!(reasons.contains(&"tag:exact:bread".to_string()));
        assert!(reasons.contains(&"tag:synonym:bread".to_string()));
    }

    #[test]
    fn test_category_label_text() {
        let records = [CandidateRecord::new("Al Noor", "").with_category_label("Pharmacy")];
        let scored = score_all("pharmacy", &records);
        assert!(scored[0].reasons.contains(&MatchReason::CategoryText));
    }

    #[test]
    fn test_city_and_attribute_bonus() {
        let records = [
            CandidateRecord::new("Blue Cafe", "").with_city("Masqat").verified(true),
            CandidateRecord::new("Blue Cafe", "").with_city("Sohar"),
        ];
        let scored = score_all("verified cafe muscat", &records);

        assert!(scored[0].reasons.contains(&MatchReason::CityMatch));
        assert!(scored[0]
            .reasons
            .contains(&MatchReason::Attribute(Attribute::Verified)));
        assert!(!scored[1].reasons.contains(&MatchReason::CityMatch));
        assert!(scored[0].score > scored[1].score);
    }

    #[test]
    fn test_empty_query_prefers_verified() {
        let records = [
            CandidateRecord::new("A", "").verified(true),
            CandidateRecord::new("B", "").special(true),
        ];
        let scored = score_all("", &records);

        assert_eq!(scored[0].score, 1.0);
        assert_eq!(scored[1].score, 0.0);
        assert!(scored[0].reasons.is_empty());
    }

    #[test]
    fn test_entity_only_query_keeps_base_bonuses() {
        let w = ScoringWeights::default();
        let records = [
            CandidateRecord::new("Blue Cafe", "").verified(true),
            CandidateRecord::new("Red Cafe", ""),
            CandidateRecord::new("Green Cafe", "").special(true).featured(true),
        ];
        let scored = score_all("new", &records);

        assert_eq!(scored[0].score, w.verified_bonus);
        assert_eq!(scored[1].score, 0.0);
        assert_eq!(scored[2].score, w.special_bonus + w.featured_bonus);
        assert!(scored.iter().all(|candidate| candidate.reasons.is_empty()));
    }

    #[test]
    fn test_no_match_gets_no_bonus() {
        let records = [CandidateRecord::new("Blue Cafe", "")
            .verified(true)
            .special(true)
            .featured(true)];
        let scored = score_all("zzzxxxqqq123", &records);
        assert_eq!(scored[0].score, 0.0);
        assert!(scored[0].reasons.is_empty());
    }

    #[test]
    fn test_match_reason_round_trip_vocabulary() {
        for tag in [
            "name:exact:cafe",
            "desc:synonym:قهوه",
            "tag:fuzzy:bakery",
            "category:text",
            "category:exact",
            "city:match",
            "attr:featured",
        ] {
            let reason: MatchReason = tag.parse().unwrap();
            assert_eq!(reason.to_string(), tag);
        }
        assert!("name:guess:cafe".parse::<MatchReason>().is_err());
        assert!("name:exact:".parse::<MatchReason>().is_err());

        let json = serde_json::to_string(&MatchReason::CityMatch).unwrap();
        assert_eq!(json, "\"city:match\"");
    }

    #[test]
    fn test_explain_priority() {
        let record = CandidateRecord::new("Cafe", "");
        let candidate = |reasons: Vec<MatchReason>| ScoredCandidate {
            record: &record,
            score: 1.0,
            reasons,
        };

        let c = candidate(vec![MatchReason::CityMatch, MatchReason::TagExact("x".into())]);
        assert_eq!(c.explain(Locale::En), Some("related to your search"));

        let c = candidate(vec![MatchReason::CityMatch, MatchReason::CategoryExact]);
        assert_eq!(c.explain(Locale::Ar), Some("ضمن الفئة نفسها"));

        let c = candidate(vec![MatchReason::CityMatch]);
        assert_eq!(c.explain(Locale::En), Some("in the requested city"));

        let c = candidate(vec![MatchReason::Attribute(Attribute::Verified)]);
        assert_eq!(c.explain(Locale::En), None);
    }
}
