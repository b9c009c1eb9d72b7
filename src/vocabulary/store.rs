//! Read-only vocabulary store
//!
//! [`VocabularyStore`] validates the catalog once at construction and is
//! immutable afterwards; every consumer shares it by reference. Alongside the
//! raw catalog it carries a derived index per domain: the sorted,
//! deduplicated set of normalized entity names across both languages, which
//! drives domain scoring and the suggestion enumeration order.

use std::collections::{BTreeSet, HashMap, HashSet};

use crate::error::CatalogError;
use crate::normalize::normalize;
use crate::vocabulary::{catalog, Domain, EntityMap, Language, LanguageMap, RelationTemplate};

/// Immutable catalog of domains, global support tables and enrichment
/// vocabulary
#[derive(Debug)]
pub struct VocabularyStore {
    domains: Vec<Domain>,
    global_support: LanguageMap<EntityMap>,
    enrichment: LanguageMap<Vec<String>>,
    /// domain key -> sorted normalized entity names across both languages
    entity_index: HashMap<String, Vec<String>>,
}

impl VocabularyStore {
    /// Build a store from catalog data, validating shape invariants.
    ///
    /// Rejected defects: duplicate domain keys, empty entity names, empty
    /// attribute lists anywhere, and entity names within one domain+language
    /// that collide after normalization. Any defect makes construction fail
    /// as a whole.
    pub fn new(
        domains: Vec<Domain>,
        global_support: LanguageMap<EntityMap>,
        enrichment: LanguageMap<Vec<String>>,
    ) -> Result<Self, CatalogError> {
        let mut keys = HashSet::new();
        for domain in &domains {
            if !keys.insert(domain.key.clone()) {
                return Err(CatalogError::DuplicateDomain {
                    key: domain.key.clone(),
                });
            }
            for (language, entities) in domain.entities.iter() {
                validate_entity_map(&domain.key, language, entities)?;
            }
            for (language, support) in domain.support.iter() {
                validate_entity_map(&domain.key, language, support)?;
            }
            for (language, relations) in domain.relations.iter() {
                validate_relations(&domain.key, language, relations)?;
            }
        }
        for (language, support) in global_support.iter() {
            validate_entity_map("global_support", language, support)?;
        }

        let entity_index = domains
            .iter()
            .map(|d| (d.key.clone(), build_entity_index(d)))
            .collect();

        Ok(Self {
            domains,
            global_support,
            enrichment,
            entity_index,
        })
    }

    /// Build and validate the built-in catalog
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::new(
            catalog::domains(),
            catalog::global_support(),
            catalog::enrichment_vocabulary(),
        )
    }

    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }

    pub fn domains(&self) -> &[Domain] {
        &self.domains
    }

    pub fn domain(&self, key: &str) -> Option<&Domain> {
        self.domains.iter().find(|d| d.key == key)
    }

    pub fn global_support(&self, language: Language) -> &EntityMap {
        self.global_support.get(language)
    }

    pub fn enrichment(&self, language: Language) -> &[String] {
        self.enrichment.get(language)
    }

    /// Sorted normalized entity names for one domain, across both languages
    pub fn entity_names(&self, key: &str) -> &[String] {
        self.entity_index.get(key).map(Vec::as_slice).unwrap_or(&[])
    }
}

fn build_entity_index(domain: &Domain) -> Vec<String> {
    let names: BTreeSet<String> = domain
        .entities
        .iter()
        .flat_map(|(_, entities)| entities.keys())
        .map(|name| normalize(name))
        .collect();
    names.into_iter().collect()
}

fn validate_entity_map(
    domain: &str,
    language: Language,
    entities: &EntityMap,
) -> Result<(), CatalogError> {
    let mut normalized: HashMap<String, &String> = HashMap::new();
    for (name, attributes) in entities {
        if name.trim().is_empty() {
            return Err(CatalogError::EmptyEntityName {
                domain: domain.to_string(),
                language: language.code().to_string(),
            });
        }
        if attributes.is_empty() {
            return Err(CatalogError::EmptyAttributeList {
                domain: domain.to_string(),
                language: language.code().to_string(),
                entity: name.clone(),
            });
        }
        if let Some(previous) = normalized.insert(normalize(name), name) {
            return Err(CatalogError::NormalizedNameCollision {
                domain: domain.to_string(),
                language: language.code().to_string(),
                first: previous.clone(),
                second: name.clone(),
            });
        }
    }
    Ok(())
}

fn validate_relations(
    domain: &str,
    language: Language,
    relations: &[RelationTemplate],
) -> Result<(), CatalogError> {
    for relation in relations {
        if relation.attributes.is_empty() {
            return Err(CatalogError::EmptyAttributeList {
                domain: domain.to_string(),
                language: language.code().to_string(),
                entity: relation.name.clone(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocabulary::entity_map;

    fn one_domain(key: &str, es: EntityMap, en: EntityMap) -> Domain {
        Domain {
            key: key.to_string(),
            entities: LanguageMap::new(es, en),
            relations: LanguageMap::default(),
            support: LanguageMap::default(),
        }
    }

    #[test]
    fn test_builtin_catalog_is_valid() {
        let store = VocabularyStore::builtin().unwrap();
        assert_eq!(store.domains().len(), 6);
        assert!(store.domain("ecommerce").is_some());
        assert!(!store.global_support(Language::En).is_empty());
        assert_eq!(store.enrichment(Language::Es).len(), 5);
    }

    #[test]
    fn test_entity_index_is_sorted_and_cross_language() {
        let store = VocabularyStore::builtin().unwrap();
        let names = store.entity_names("ecommerce");
        // Both languages contribute
        assert!(names.contains(&"cliente".to_string()));
        assert!(names.contains(&"customer".to_string()));
        let mut sorted = names.to_vec();
        sorted.sort();
        assert_eq!(names, sorted.as_slice());
        // Unknown domain yields an empty slice, not a panic
        assert!(store.entity_names("nope").is_empty());
    }

    #[test]
    fn test_rejects_empty_attribute_list() {
        let domain = one_domain(
            "broken",
            entity_map(&[("cliente", &[])]),
            entity_map(&[("customer", &["id"])]),
        );
        let err = VocabularyStore::new(vec![domain], LanguageMap::default(), LanguageMap::default())
            .unwrap_err();
        assert!(matches!(err, CatalogError::EmptyAttributeList { .. }));
    }

    #[test]
    fn test_rejects_duplicate_domain_key() {
        let a = one_domain("dup", entity_map(&[("x", &["id"])]), EntityMap::new());
        let b = one_domain("dup", entity_map(&[("y", &["id"])]), EntityMap::new());
        let err = VocabularyStore::new(vec![a, b], LanguageMap::default(), LanguageMap::default())
            .unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateDomain { .. }));
    }

    #[test]
    fn test_rejects_normalized_name_collision() {
        let domain = one_domain(
            "broken",
            entity_map(&[("cliente", &["id"]), ("Cliente ", &["id"])]),
            EntityMap::new(),
        );
        let err = VocabularyStore::new(vec![domain], LanguageMap::default(), LanguageMap::default())
            .unwrap_err();
        assert!(matches!(err, CatalogError::NormalizedNameCollision { .. }));
    }

    #[test]
    fn test_empty_store_is_allowed() {
        let store =
            VocabularyStore::new(Vec::new(), LanguageMap::default(), LanguageMap::default())
                .unwrap();
        assert!(store.is_empty());
    }
}
