//! Bilingual domain vocabulary
//!
//! The catalog is a set of [`Domain`]s, each holding entity definitions,
//! relation templates and support tables in both supported languages, plus a
//! domain-independent global support table. All of it is built once at
//! process start and shared read-only; see [`VocabularyStore`].

pub mod catalog;
pub mod store;

pub use store::VocabularyStore;

use std::collections::HashMap;

/// The two supported vocabulary languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    Es,
    En,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::Es, Language::En];

    /// Stable language tag, as used in logs and reports
    pub fn code(&self) -> &'static str {
        match self {
            Language::Es => "es",
            Language::En => "en",
        }
    }

    /// The generic date attribute for synthesized relations
    pub fn date_attribute(&self) -> &'static str {
        match self {
            Language::Es => "fecha",
            Language::En => "date",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// One value per supported language; both sides always present.
#[derive(Debug, Clone, Default)]
pub struct LanguageMap<T> {
    pub es: T,
    pub en: T,
}

impl<T> LanguageMap<T> {
    pub fn new(es: T, en: T) -> Self {
        Self { es, en }
    }

    pub fn get(&self, language: Language) -> &T {
        match language {
            Language::Es => &self.es,
            Language::En => &self.en,
        }
    }

    /// Iterate both sides, Spanish first
    pub fn iter(&self) -> impl Iterator<Item = (Language, &T)> {
        [(Language::Es, &self.es), (Language::En, &self.en)].into_iter()
    }
}

/// Entity name -> ordered attribute list.
///
/// Attribute order is meaningful and preserved wherever the list is returned.
pub type EntityMap = HashMap<String, Vec<String>>;

/// A predefined linking entity connecting two entity roles
#[derive(Debug, Clone)]
pub struct RelationTemplate {
    pub name: String,
    pub attributes: Vec<String>,
    /// Entity types this relation connects. Roles are resolved through the
    /// domain entities, then domain support, then global support; they need
    /// not exist verbatim in every language map.
    pub roles: (String, String),
}

impl RelationTemplate {
    pub fn new(name: &str, attributes: &[&str], roles: (&str, &str)) -> Self {
        Self {
            name: name.to_string(),
            attributes: attributes.iter().map(|a| a.to_string()).collect(),
            roles: (roles.0.to_string(), roles.1.to_string()),
        }
    }
}

/// A named cluster of related entity/relation vocabulary
#[derive(Debug, Clone)]
pub struct Domain {
    pub key: String,
    pub entities: LanguageMap<EntityMap>,
    pub relations: LanguageMap<Vec<RelationTemplate>>,
    pub support: LanguageMap<EntityMap>,
}

/// Build an [`EntityMap`] from static definitions
pub(crate) fn entity_map(entries: &[(&str, &[&str])]) -> EntityMap {
    entries
        .iter()
        .map(|(name, attrs)| {
            (
                name.to_string(),
                attrs.iter().map(|a| a.to_string()).collect(),
            )
        })
        .collect()
}
