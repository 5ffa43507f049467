//! Directory records consumed by the search engine.
//!
//! Records are owned by the host's directory store; the engine only borrows
//! them. Every field except the display name is optional, and `null` is read
//! as "absent" so that half-filled rows never fail to load.

use serde::{Deserialize, Deserializer, Serialize};

use crate::search::response::Locale;

/// Read `null` as the field's default value.
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// A bilingual text value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocalizedText {
    #[serde(deserialize_with = "null_as_default")]
    pub en: String,
    #[serde(deserialize_with = "null_as_default")]
    pub ar: String,
}

impl LocalizedText {
    pub fn new<E: Into<String>, A: Into<String>>(en: E, ar: A) -> Self {
        Self {
            en: en.into(),
            ar: ar.into(),
        }
    }

    /// Text in the requested locale, falling back to the other language.
    pub fn get(&self, locale: Locale) -> &str {
        let (preferred, fallback) = match locale {
            Locale::Ar => (&self.ar, &self.en),
            Locale::En => (&self.en, &self.ar),
        };
        if preferred.trim().is_empty() {
            fallback
        } else {
            preferred
        }
    }

    pub fn is_empty(&self) -> bool {
        self.en.trim().is_empty() && self.ar.trim().is_empty()
    }
}

/// A business listing that can be ranked.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CandidateRecord {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: LocalizedText,
    pub description: Option<LocalizedText>,
    pub category_id: Option<String>,
    /// Legacy free-text category label.
    pub category: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub city: String,
    #[serde(deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub is_verified: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub is_special: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub homepage_featured: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub homepage_top: bool,
}

impl CandidateRecord {
    /// Create a record with a bilingual name and nothing else.
    pub fn new<E: Into<String>, A: Into<String>>(name_en: E, name_ar: A) -> Self {
        Self {
            name: LocalizedText::new(name_en, name_ar),
            ..Self::default()
        }
    }

    pub fn with_id<S: Into<String>>(mut self, id: S) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_description<E: Into<String>, A: Into<String>>(mut self, en: E, ar: A) -> Self {
        self.description = Some(LocalizedText::new(en, ar));
        self
    }

    pub fn with_category_id<S: Into<String>>(mut self, category_id: S) -> Self {
        self.category_id = Some(category_id.into());
        self
    }

    pub fn with_category_label<S: Into<String>>(mut self, label: S) -> Self {
        self.category = Some(label.into());
        self
    }

    pub fn with_city<S: Into<String>>(mut self, city: S) -> Self {
        self.city = city.into();
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn verified(mut self, value: bool) -> Self {
        self.is_verified = value;
        self
    }

    pub fn special(mut self, value: bool) -> Self {
        self.is_special = value;
        self
    }

    pub fn featured(mut self, value: bool) -> Self {
        self.homepage_featured = value;
        self
    }

    pub fn top(mut self, value: bool) -> Self {
        self.homepage_top = value;
        self
    }

    /// Featured on the homepage in either slot.
    pub fn is_featured(&self) -> bool {
        self.homepage_featured || self.homepage_top
    }

    /// Display name in a locale.
    pub fn display_name(&self, locale: Locale) -> &str {
        self.name.get(locale)
    }
}

/// A directory category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryRecord {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub slug: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: LocalizedText,
}

impl CategoryRecord {
    pub fn new<I, S, E, A>(id: I, slug: S, name_en: E, name_ar: A) -> Self
    where
        I: Into<String>,
        S: Into<String>,
        E: Into<String>,
        A: Into<String>,
    {
        Self {
            id: id.into(),
            slug: slug.into(),
            name: LocalizedText::new(name_en, name_ar),
        }
    }

    /// Display name in a locale, falling back to the slug.
    pub fn display_name(&self, locale: Locale) -> &str {
        let name = self.name.get(locale);
        if name.trim().is_empty() {
            &self.slug
        } else {
            name
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_localized_fallback() {
        let text = LocalizedText::new("Blue Café", "");
        assert_eq!(text.get(Locale::En), "Blue Café");
        assert_eq!(text.get(Locale::Ar), "Blue Café");
        assert!(!text.is_empty());
        assert!(LocalizedText::default().is_empty());
    }

    #[test]
    fn test_deserialize_full_record() {
        let json = r#"{
            "id": "b1",
            "name": {"en": "Blue Café", "ar": "مقهى الأزرق"},
            "description": {"en": "Specialty coffee", "ar": null},
            "categoryId": "c1",
            "category": "Cafes",
            "city": "Muscat",
            "tags": ["coffee", "wifi"],
            "isVerified": true,
            "isSpecial": false,
            "homepageFeatured": true,
            "homepageTop": false
        }"#;
        let record: CandidateRecord = serde_json::from_str(json).unwrap();

        assert_eq!(record.id, "b1");
        assert_eq!(record.name.ar, "مقهى الأزرق");
        assert_eq!(record.description.as_ref().unwrap().ar, "");
        assert_eq!(record.category_id.as_deref(), Some("c1"));
        assert_eq!(record.tags, vec!["coffee", "wifi"]);
        assert!(record.is_verified);
        assert!(record.is_featured());
    }

    #[test]
    fn test_deserialize_sparse_record() {
        let json = r#"{"name": {"en": "Corner Shop"}, "tags": null, "city": null, "isVerified": null}"#;
        let record: CandidateRecord = serde_json::from_str(json).unwrap();

        assert_eq!(record.name.en, "Corner Shop");
        assert_eq!(record.name.ar, "");
        assert!(record.tags.is_empty());
        assert!(record.city.is_empty());
        assert!(!record.is_verified);
        assert!(record.description.is_none());

        let empty: CandidateRecord = serde_json::from_str("{}").unwrap();
        assert!(empty.name.is_empty());
    }

    #[test]
    fn test_builder_methods() {
        let record = CandidateRecord::new("Blue Café", "مقهى الأزرق")
            .with_city("Muscat")
            .with_tags(["coffee"])
            .verified(true)
            .top(true);

        assert_eq!(record.display_name(Locale::Ar), "مقهى الأزرق");
        assert!(record.is_featured());
        assert!(!record.is_special);
    }

    #[test]
    fn test_category_display_name() {
        let category = CategoryRecord::new("c1", "cafes", "Cafes", "مقاهي");
        assert_eq!(category.display_name(Locale::Ar), "مقاهي");

        let unnamed = CategoryRecord::new("c2", "misc", "", "");
        assert_eq!(unnamed.display_name(Locale::En), "misc");
    }
}
