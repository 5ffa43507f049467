//! Natural-language summaries of ranked results.
//!
//! The composer branches on the number of results (none, one, many) and on
//! whether the query asked for a recommendation. Every literal is available in
//! both locales and a response never mixes them; record names and category
//! labels come from the data and are shown in the requested locale when the
//! record has one.

use std::fmt::Write as _;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::document::{CandidateRecord, CategoryRecord};
use crate::lexicon::Lexicon;
use crate::ml::intent_classifier::IntentType;
use crate::search::intent::SearchIntent;
use crate::search::scoring::ScoredCandidate;

/// Output language of composed responses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    Ar,
    #[default]
    En,
}

impl Locale {
    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::Ar => "ar",
            Locale::En => "en",
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parsing never fails: anything other than `ar` selects English.
impl FromStr for Locale {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("ar") {
            Ok(Locale::Ar)
        } else {
            Ok(Locale::En)
        }
    }
}

/// One prior message of a conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationTurn {
    pub role: String,
    pub content: String,
}

impl ConversationTurn {
    pub fn user<S: Into<String>>(content: S) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }

    pub fn assistant<S: Into<String>>(content: S) -> Self {
        Self {
            role: "assistant".to_string(),
            content: content.into(),
        }
    }

    pub fn is_user(&self) -> bool {
        self.role.eq_ignore_ascii_case("user")
    }
}

/// Literal strings of one locale.
struct Phrases {
    no_results: &'static str,
    no_results_for: &'static str,
    suggestions: &'static str,
    suggestion_separator: &'static str,
    relax_city: &'static str,
    relax_category: &'static str,
    relax_attributes: &'static str,
    relax_keywords: &'static str,
    more_general: &'static str,
    found_one: &'static str,
    recommend_one: &'static str,
    reason: &'static str,
    found_many: &'static str,
    recommend_many: &'static str,
    category_prefix: &'static str,
    city_prefix: &'static str,
    updated: &'static str,
    more: &'static str,
    verified_badge: &'static str,
    special_badge: &'static str,
}

const EN: Phrases = Phrases {
    no_results: "No results found.",
    no_results_for: "No results found for \"{query}\".",
    suggestions: "Suggestions:",
    suggestion_separator: "; ",
    relax_city: "search without the city filter",
    relax_category: "try a broader category",
    relax_attributes: "remove quality filters such as verified or featured",
    relax_keywords: "use fewer or different keywords",
    more_general: "try a more general search",
    found_one: "I found one result: {name}",
    recommend_one: "I recommend {name}",
    reason: "Why:",
    found_many: "I found {count} results",
    recommend_many: "Here are my top recommendations",
    category_prefix: " for ",
    city_prefix: " in ",
    updated: "Here are updated results.",
    more: "...and {count} more.",
    verified_badge: "✓ verified",
    special_badge: "★ special",
};

const AR: Phrases = Phrases {
    no_results: "لم أجد أي نتائج.",
    no_results_for: "لم أجد نتائج مطابقة لـ \"{query}\".",
    suggestions: "اقتراحات:",
    suggestion_separator: "، ",
    relax_city: "ابحث بدون تحديد المدينة",
    relax_category: "جرّب فئة أوسع",
    relax_attributes: "أزل شروط الجودة مثل موثّق أو مميز",
    relax_keywords: "استخدم كلمات أقل أو مختلفة",
    more_general: "جرّب بحثاً أعم",
    found_one: "وجدت نتيجة واحدة: {name}",
    recommend_one: "أنصحك بـ {name}",
    reason: "السبب:",
    found_many: "وجدت {count} نتائج",
    recommend_many: "إليك أفضل التوصيات",
    category_prefix: " في فئة ",
    city_prefix: " في ",
    updated: "إليك النتائج المحدّثة.",
    more: "...و{count} نتائج أخرى.",
    verified_badge: "✓ موثّق",
    special_badge: "★ مميز",
};

fn phrases(locale: Locale) -> &'static Phrases {
    match locale {
        Locale::Ar => &AR,
        Locale::En => &EN,
    }
}

/// Renders a localized summary of ranked results.
#[derive(Debug, Clone, Copy)]
pub struct ResponseComposer<'a> {
    lexicon: &'a Lexicon,
    max_listed: usize,
}

impl<'a> ResponseComposer<'a> {
    pub fn new(lexicon: &'a Lexicon, max_listed: usize) -> Self {
        Self {
            lexicon,
            max_listed: max_listed.max(1),
        }
    }

    /// Compose the response text.
    ///
    /// `history` only changes the multi-result preamble.
    pub fn compose(
        &self,
        raw_query: &str,
        ranked: &[ScoredCandidate<'_>],
        intent: &SearchIntent,
        categories: &[CategoryRecord],
        locale: Locale,
        history: &[ConversationTurn],
    ) -> String {
        let phrases = phrases(locale);
        match ranked {
            [] => self.compose_empty(raw_query, intent, phrases),
            [top] => self.compose_single(top, intent, locale, phrases),
            _ => self.compose_many(ranked, intent, categories, locale, history, phrases),
        }
    }

    fn compose_empty(&self, raw_query: &str, intent: &SearchIntent, phrases: &Phrases) -> String {
        let query = raw_query.trim();
        let mut text = if query.is_empty() {
            phrases.no_results.to_string()
        } else {
            phrases.no_results_for.replace("{query}", query)
        };

        let suggestions = relaxation_suggestions(intent, phrases);
        text.push(' ');
        text.push_str(phrases.suggestions);
        text.push(' ');
        text.push_str(&suggestions.join(phrases.suggestion_separator));
        text.push('.');
        text
    }

    fn compose_single(
        &self,
        top: &ScoredCandidate<'_>,
        intent: &SearchIntent,
        locale: Locale,
        phrases: &Phrases,
    ) -> String {
        let template = if intent.intent_type == IntentType::Recommend {
            phrases.recommend_one
        } else {
            phrases.found_one
        };

        let mut text = template.replace("{name}", top.record.display_name(locale));
        push_badges(&mut text, top.record, phrases);
        if let Some(city) = &intent.entities.city {
            text.push_str(phrases.city_prefix);
            text.push_str(self.lexicon.city_display(city, locale));
        }
        text.push('.');

        if let Some(reason) = top.explain(locale) {
            let _ = write!(text, " {} {}.", phrases.reason, reason);
        }
        text
    }

    fn compose_many(
        &self,
        ranked: &[ScoredCandidate<'_>],
        intent: &SearchIntent,
        categories: &[CategoryRecord],
        locale: Locale,
        history: &[ConversationTurn],
        phrases: &Phrases,
    ) -> String {
        let mut text = String::new();
        if history.iter().any(ConversationTurn::is_user) {
            text.push_str(phrases.updated);
            text.push(' ');
        }

        if intent.intent_type == IntentType::Recommend {
            text.push_str(phrases.recommend_many);
        } else {
            text.push_str(
                &phrases
                    .found_many
                    .replace("{count}", &ranked.len().to_string()),
            );
        }

        let category = intent
            .entities
            .category_id
            .as_deref()
            .and_then(|id| categories.iter().find(|category| category.id == id));
        if let Some(category) = category {
            text.push_str(phrases.category_prefix);
            text.push_str(category.display_name(locale));
        }
        if let Some(city) = &intent.entities.city {
            text.push_str(phrases.city_prefix);
            text.push_str(self.lexicon.city_display(city, locale));
        }
        text.push(':');

        for (position, candidate) in ranked.iter().take(self.max_listed).enumerate() {
            let _ = write!(
                text,
                "\n{}. {}",
                position + 1,
                candidate.record.display_name(locale)
            );
            push_badges(&mut text, candidate.record, phrases);
        }

        let remaining = ranked.len().saturating_sub(self.max_listed);
        if remaining > 0 {
            text.push('\n');
            text.push_str(&phrases.more.replace("{count}", &remaining.to_string()));
        }
        text
    }
}

/// Suggestions for a query that matched nothing; never empty.
fn relaxation_suggestions(intent: &SearchIntent, phrases: &Phrases) -> Vec<&'static str> {
    let mut suggestions = Vec::new();
    if intent.entities.city.is_some() {
        suggestions.push(phrases.relax_city);
    }
    if intent.entities.category_id.is_some() {
        suggestions.push(phrases.relax_category);
    }
    if !intent.entities.attributes.is_empty() {
        suggestions.push(phrases.relax_attributes);
    }
    if !intent.core_tokens.is_empty() {
        suggestions.push(phrases.relax_keywords);
    }
    if suggestions.is_empty() {
        suggestions.push(phrases.more_general);
    }
    suggestions
}

fn push_badges(text: &mut String, record: &CandidateRecord, phrases: &Phrases) {
    if record.is_verified {
        text.push(' ');
        text.push_str(phrases.verified_badge);
    }
    if record.is_special {
        text.push(' ');
        text.push_str(phrases.special_badge);
    }
}
