//! Training example synthesis
//!
//! Procedurally builds labeled (input, output) pairs from the vocabulary
//! store: Type A examples define an entity's attributes, Type B examples
//! suggest a relation table for a schema context. A weighted coin picks the
//! kind (60% A / 40% B); domain and language are drawn uniformly. Candidate
//! lists are sorted by name before every draw so a seeded run is
//! reproducible.

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::corpus::{ExistingTable, GeneratedExample, InputPayload, OutputPayload};
use crate::error::CorpusError;
use crate::vocabulary::{Domain, EntityMap, Language, VocabularyStore};

/// Outcome of one generation run.
///
/// A shortfall (fewer examples than requested) is a reduced yield, not a
/// failure; callers report it and carry on.
#[derive(Debug)]
pub struct GenerationReport {
    pub examples: Vec<GeneratedExample>,
    pub requested: usize,
    pub attempts: usize,
}

impl GenerationReport {
    pub fn shortfall(&self) -> usize {
        self.requested.saturating_sub(self.examples.len())
    }
}

/// Procedural generator of training examples over a read-only store
pub struct Synthesizer<'a> {
    store: &'a VocabularyStore,
    rng: StdRng,
}

impl<'a> Synthesizer<'a> {
    pub fn new(store: &'a VocabularyStore) -> Self {
        Self {
            store,
            rng: StdRng::from_entropy(),
        }
    }

    /// Seeded constructor for reproducible runs
    pub fn with_seed(store: &'a VocabularyStore, seed: u64) -> Self {
        Self {
            store,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Generate one example; `None` only when the catalog has no usable
    /// vocabulary for the drawn domain and language.
    pub fn generate_example(&mut self) -> Option<GeneratedExample> {
        let store = self.store;
        let domain = store.domains().choose(&mut self.rng)?;
        let language = if self.rng.gen_bool(0.5) {
            Language::Es
        } else {
            Language::En
        };
        // Slightly favor direct entity definitions
        if self.rng.gen_bool(0.6) {
            self.entity_definition(domain, language)
        } else {
            self.relation_suggestion(domain, language)
        }
    }

    /// Generate up to `requested` examples within a `10 x requested` attempt
    /// budget. With `seen` provided, every accepted example's fingerprint
    /// must be new; the set is updated as examples are accepted and may be
    /// pre-seeded from an existing corpus.
    pub fn generate_batch(
        &mut self,
        requested: usize,
        mut seen: Option<&mut HashSet<String>>,
    ) -> Result<GenerationReport, CorpusError> {
        let budget = requested.saturating_mul(10);
        let mut examples = Vec::new();
        let mut attempts = 0;

        while examples.len() < requested && attempts < budget {
            attempts += 1;
            let Some(example) = self.generate_example() else {
                continue;
            };
            if let Some(seen) = seen.as_deref_mut() {
                let fingerprint = example.fingerprint()?;
                if !seen.insert(fingerprint) {
                    continue;
                }
            }
            examples.push(example);
        }

        if examples.len() < requested {
            tracing::warn!(
                requested,
                produced = examples.len(),
                attempts,
                "attempt budget exhausted before reaching requested count"
            );
        }
        Ok(GenerationReport {
            examples,
            requested,
            attempts,
        })
    }

    /// Type A: entity definition from the chosen domain and language
    fn entity_definition(
        &mut self,
        domain: &Domain,
        language: Language,
    ) -> Option<GeneratedExample> {
        let entities = sorted_entries(domain.entities.get(language));
        let &(name, attributes) = entities.choose(&mut self.rng)?;
        let output = OutputPayload::Attributes(self.enrich(attributes.clone(), language));
        let existing_tables = self.context_tables(domain, language, Some(name.as_str()));
        Some(GeneratedExample {
            input: InputPayload::EntityDefinition {
                primary_table: name.clone(),
                existing_tables,
            },
            output,
        })
    }

    /// Type B: relation suggestion, preferring the domain's templates and
    /// falling back to a synthesized relation between two entities.
    fn relation_suggestion(
        &mut self,
        domain: &Domain,
        language: Language,
    ) -> Option<GeneratedExample> {
        if let Some(template) = domain.relations.get(language).choose(&mut self.rng) {
            let attributes = self.enrich(template.attributes.clone(), language);
            let mut existing_tables = Vec::new();
            for role in [&template.roles.0, &template.roles.1] {
                // Unresolvable roles are omitted from the context, not an
                // error.
                if let Some(table) = resolve_role(self.store, domain, language, role) {
                    existing_tables.push(table);
                }
            }
            // At most one extra context table; drop it on a name collision.
            if let Some(candidate) = self.context_tables(domain, language, None).into_iter().next()
            {
                if existing_tables.iter().all(|t| t.name != candidate.name) {
                    existing_tables.push(candidate);
                }
            }
            return Some(GeneratedExample {
                input: InputPayload::RelationSuggestion { existing_tables },
                output: OutputPayload::Relation {
                    suggested_table: template.name.clone(),
                    attributes,
                },
            });
        }

        // No templates: pair two distinct entities into a synthetic relation.
        let entities = sorted_entries(domain.entities.get(language));
        if entities.len() < 2 {
            return self.entity_definition(domain, language);
        }
        let mut pair = entities.choose_multiple(&mut self.rng, 2);
        let &(a_name, a_attributes) = pair.next()?;
        let &(b_name, b_attributes) = pair.next()?;

        let base = vec![
            "id".to_string(),
            format!("{}_id", a_name),
            format!("{}_id", b_name),
            language.date_attribute().to_string(),
        ];
        let attributes = self.enrich(base, language);
        let existing_tables = vec![
            ExistingTable {
                name: a_name.clone(),
                attributes: a_attributes.clone(),
            },
            ExistingTable {
                name: b_name.clone(),
                attributes: b_attributes.clone(),
            },
        ];
        Some(GeneratedExample {
            input: InputPayload::RelationSuggestion { existing_tables },
            output: OutputPayload::Relation {
                suggested_table: format!("{}_{}_rel", a_name, b_name),
                attributes,
            },
        })
    }

    /// Append 0-2 generic attributes drawn without replacement from the
    /// per-language enrichment vocabulary. Not deduplicated against the base
    /// list.
    fn enrich(&mut self, mut attributes: Vec<String>, language: Language) -> Vec<String> {
        let vocabulary = self.store.enrichment(language);
        let k = self.rng.gen_range(0..=vocabulary.len().min(2));
        attributes.extend(
            vocabulary
                .choose_multiple(&mut self.rng, k)
                .map(String::clone),
        );
        attributes
    }

    /// Build 1-3 context tables from domain entities, domain support and
    /// global support, optionally excluding the primary table name.
    fn context_tables(
        &mut self,
        domain: &Domain,
        language: Language,
        exclude: Option<&str>,
    ) -> Vec<ExistingTable> {
        let store = self.store;
        let mut pool: Vec<(&String, &Vec<String>)> = domain
            .entities
            .get(language)
            .iter()
            .chain(domain.support.get(language).iter())
            .chain(store.global_support(language).iter())
            .filter(|(name, _)| exclude != Some(name.as_str()))
            .collect();
        if pool.is_empty() {
            return Vec::new();
        }
        pool.sort_by(|a, b| a.0.cmp(b.0));
        pool.shuffle(&mut self.rng);
        let n = self.rng.gen_range(1..=pool.len().min(3));
        pool.truncate(n);
        pool.into_iter()
            .map(|(name, attributes)| ExistingTable {
                name: name.clone(),
                attributes: attributes.clone(),
            })
            .collect()
    }
}

/// Resolve a relation role name to a context table: domain entities, then
/// domain support, then global support; first hit wins.
fn resolve_role(
    store: &VocabularyStore,
    domain: &Domain,
    language: Language,
    role: &str,
) -> Option<ExistingTable> {
    let tiers = [
        domain.entities.get(language),
        domain.support.get(language),
        store.global_support(language),
    ];
    tiers.into_iter().find_map(|map| {
        map.get(role).map(|attributes| ExistingTable {
            name: role.to_string(),
            attributes: attributes.clone(),
        })
    })
}

/// Entity map entries sorted by name, for reproducible draws
fn sorted_entries(map: &EntityMap) -> Vec<(&String, &Vec<String>)> {
    let mut entries: Vec<_> = map.iter().collect();
    entries.sort_by(|a, b| a.0.cmp(b.0));
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocabulary::{entity_map, LanguageMap, RelationTemplate};

    fn builtin() -> VocabularyStore {
        VocabularyStore::builtin().unwrap()
    }

    /// One domain with plain entity names and no relation templates, to
    /// exercise the synthesized-relation fallback.
    fn relationless_store() -> VocabularyStore {
        let domain = Domain {
            key: "plain".to_string(),
            entities: LanguageMap::new(
                entity_map(&[
                    ("alpha", &["id", "valor"]),
                    ("beta", &["id", "nota"]),
                    ("gamma", &["id"]),
                ]),
                entity_map(&[
                    ("alpha", &["id", "value"]),
                    ("beta", &["id", "note"]),
                    ("gamma", &["id"]),
                ]),
            ),
            relations: LanguageMap::default(),
            support: LanguageMap::default(),
        };
        VocabularyStore::new(
            vec![domain],
            LanguageMap::default(),
            catalog_enrichment(),
        )
        .unwrap()
    }

    fn catalog_enrichment() -> LanguageMap<Vec<String>> {
        crate::vocabulary::catalog::enrichment_vocabulary()
    }

    #[test]
    fn test_type_a_shape() {
        let store = builtin();
        let mut synthesizer = Synthesizer::with_seed(&store, 7);
        let mut seen_type_a = 0;
        for _ in 0..300 {
            let example = synthesizer.generate_example().unwrap();
            if let InputPayload::EntityDefinition {
                primary_table,
                existing_tables,
            } = &example.input
            {
                seen_type_a += 1;
                let OutputPayload::Attributes(attributes) = &example.output else {
                    panic!("type A output must be a bare attribute list");
                };
                assert!(!attributes.is_empty());
                assert!((1..=3).contains(&existing_tables.len()));
                assert!(existing_tables.iter().all(|t| t.name != *primary_table));
            }
        }
        // The 60/40 coin makes both kinds plentiful in 300 draws
        assert!(seen_type_a > 100);
    }

    #[test]
    fn test_type_b_context_never_exceeds_roles_plus_one_extra() {
        let store = builtin();
        let mut synthesizer = Synthesizer::with_seed(&store, 11);
        for _ in 0..300 {
            let example = synthesizer.generate_example().unwrap();
            if let (
                InputPayload::RelationSuggestion { existing_tables },
                OutputPayload::Relation { attributes, .. },
            ) = (&example.input, &example.output)
            {
                assert!(!attributes.is_empty());
                // At most two resolved roles plus one extra context table
                assert!(existing_tables.len() <= 3);
            }
        }
    }

    #[test]
    fn test_role_resolution_probes_entities_then_support_then_global() {
        let domain = Domain {
            key: "tiered".to_string(),
            entities: LanguageMap::new(
                entity_map(&[("cliente", &["id", "nombre", "email"])]),
                entity_map(&[("customer", &["id", "name", "email"])]),
            ),
            relations: LanguageMap::default(),
            support: LanguageMap::new(
                entity_map(&[
                    ("inventario", &["id", "producto_id", "cantidad"]),
                    // Shadows the global entry; the support tier must win
                    ("usuario", &["id", "alias"]),
                ]),
                entity_map(&[("inventory", &["id", "product_id", "quantity"])]),
            ),
        };
        let global = LanguageMap::new(
            entity_map(&[("usuario", &["id", "nombre", "email"])]),
            entity_map(&[("user", &["id", "name", "email"])]),
        );
        let store = VocabularyStore::new(vec![domain], global, LanguageMap::default()).unwrap();
        let domain = store.domain("tiered").unwrap();

        // Entity tier, first probe
        let hit = resolve_role(&store, domain, Language::Es, "cliente").unwrap();
        assert_eq!(hit.attributes, vec!["id", "nombre", "email"]);

        // Domain-support tier, only reachable past the entity map
        let hit = resolve_role(&store, domain, Language::Es, "inventario").unwrap();
        assert_eq!(hit.name, "inventario");
        assert_eq!(hit.attributes, vec!["id", "producto_id", "cantidad"]);

        // Domain support shadows the global entry of the same name
        let hit = resolve_role(&store, domain, Language::Es, "usuario").unwrap();
        assert_eq!(hit.attributes, vec!["id", "alias"]);

        // Global-support tier as the last resort
        let hit = resolve_role(&store, domain, Language::En, "user").unwrap();
        assert_eq!(hit.attributes, vec!["id", "name", "email"]);

        // No tier knows the name
        assert!(resolve_role(&store, domain, Language::Es, "fantasma").is_none());
    }

    #[test]
    fn test_unresolvable_role_is_omitted_from_context() {
        // Template roles: one resolvable only through domain support, one
        // through global support, one unknown everywhere. The unknown role
        // is dropped silently; the context still gets at most one extra
        // table, never a name already present.
        let relation = |name: &str, roles: (&str, &str)| {
            RelationTemplate::new(name, &["id", "fecha"], roles)
        };
        let domain = Domain {
            key: "gaps".to_string(),
            entities: LanguageMap::new(
                entity_map(&[("pedido", &["id", "total"])]),
                entity_map(&[("order", &["id", "total"])]),
            ),
            relations: LanguageMap::new(
                vec![relation("despacho", ("inventario", "fantasma"))],
                vec![relation("dispatch", ("inventory", "ghost"))],
            ),
            support: LanguageMap::new(
                entity_map(&[("inventario", &["id", "cantidad"])]),
                entity_map(&[("inventory", &["id", "quantity"])]),
            ),
        };
        let global = LanguageMap::new(
            entity_map(&[("usuario", &["id", "nombre"])]),
            entity_map(&[("user", &["id", "name"])]),
        );
        let store = VocabularyStore::new(vec![domain], global, LanguageMap::default()).unwrap();
        let mut synthesizer = Synthesizer::with_seed(&store, 21);

        let mut seen_templates = 0;
        for _ in 0..200 {
            let example = synthesizer.generate_example().unwrap();
            let (
                InputPayload::RelationSuggestion { existing_tables },
                OutputPayload::Relation {
                    suggested_table, ..
                },
            ) = (&example.input, &example.output)
            else {
                continue;
            };
            assert!(suggested_table == "despacho" || suggested_table == "dispatch");
            seen_templates += 1;

            let names: Vec<&str> = existing_tables.iter().map(|t| t.name.as_str()).collect();
            // The support-tier role always resolves, the unknown one never
            // appears
            assert!(names.contains(&"inventario") || names.contains(&"inventory"));
            assert!(!names.contains(&"fantasma") && !names.contains(&"ghost"));
            // Resolved role carries the support-tier attribute list
            let inventory = existing_tables
                .iter()
                .find(|t| t.name.starts_with("invent"))
                .unwrap();
            assert!(inventory.attributes == vec!["id", "cantidad"]
                || inventory.attributes == vec!["id", "quantity"]);
            // One resolved role plus at most one extra, with no repeated name
            assert!((1..=2).contains(&existing_tables.len()));
            let unique: HashSet<&str> = names.iter().copied().collect();
            assert_eq!(unique.len(), names.len());
        }
        assert!(seen_templates > 0);
    }

    #[test]
    fn test_type_b_fallback_synthesizes_relation() {
        let store = relationless_store();
        let mut synthesizer = Synthesizer::with_seed(&store, 3);
        let names = ["alpha", "beta", "gamma"];
        let mut seen_fallback = 0;
        for _ in 0..200 {
            let example = synthesizer.generate_example().unwrap();
            let (
                InputPayload::RelationSuggestion { existing_tables },
                OutputPayload::Relation {
                    suggested_table,
                    attributes,
                },
            ) = (&example.input, &example.output)
            else {
                continue;
            };
            seen_fallback += 1;

            let trimmed = suggested_table.strip_suffix("_rel").unwrap();
            let (a, b) = trimmed.split_once('_').unwrap();
            assert!(names.contains(&a));
            assert!(names.contains(&b));
            assert_ne!(a, b);

            assert_eq!(attributes[0], "id");
            assert_eq!(attributes[1], format!("{}_id", a));
            assert_eq!(attributes[2], format!("{}_id", b));
            assert!(attributes[3] == "fecha" || attributes[3] == "date");
            assert!((4..=6).contains(&attributes.len()));

            assert_eq!(existing_tables.len(), 2);
            assert_eq!(existing_tables[0].name, a);
            assert_eq!(existing_tables[1].name, b);
        }
        assert!(seen_fallback > 0);
    }

    #[test]
    fn test_single_entity_domain_falls_back_to_type_a() {
        let domain = Domain {
            key: "solo".to_string(),
            entities: LanguageMap::new(
                entity_map(&[("unico", &["id"])]),
                entity_map(&[("only", &["id"])]),
            ),
            relations: LanguageMap::default(),
            support: LanguageMap::default(),
        };
        let store =
            VocabularyStore::new(vec![domain], LanguageMap::default(), LanguageMap::default())
                .unwrap();
        let mut synthesizer = Synthesizer::with_seed(&store, 1);
        for _ in 0..100 {
            let example = synthesizer.generate_example().unwrap();
            assert!(matches!(
                example.input,
                InputPayload::EntityDefinition { .. }
            ));
        }
    }

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let store = builtin();
        let first = Synthesizer::with_seed(&store, 42)
            .generate_batch(20, None)
            .unwrap();
        let second = Synthesizer::with_seed(&store, 42)
            .generate_batch(20, None)
            .unwrap();
        assert_eq!(first.examples, second.examples);
    }

    #[test]
    fn test_dedup_batch_has_unique_fingerprints() {
        let store = builtin();
        let mut synthesizer = Synthesizer::with_seed(&store, 99);
        let mut seen = HashSet::new();
        let report = synthesizer.generate_batch(100, Some(&mut seen)).unwrap();

        let mut fingerprints = HashSet::new();
        for example in &report.examples {
            assert!(fingerprints.insert(example.fingerprint().unwrap()));
        }
        // Accepted fingerprints all live in the shared set
        assert!(fingerprints.iter().all(|fp| seen.contains(fp)));
        assert!(report.examples.len() <= 100);
        assert!(report.attempts <= 1000);
    }

    #[test]
    fn test_dedup_respects_preseeded_corpus() {
        let store = relationless_store();
        let mut seen = HashSet::new();
        let existing = Synthesizer::with_seed(&store, 5)
            .generate_batch(10, Some(&mut seen))
            .unwrap();
        let preseeded = seen.clone();

        let fresh = Synthesizer::with_seed(&store, 6)
            .generate_batch(10, Some(&mut seen))
            .unwrap();
        for example in &fresh.examples {
            assert!(!preseeded.contains(&example.fingerprint().unwrap()));
        }
        // Both batches together still contain no duplicate
        assert_eq!(
            seen.len(),
            preseeded.len() + fresh.examples.len()
        );
        assert!(existing.examples.len() <= 10);
    }

    #[test]
    fn test_shortfall_is_reported_not_raised() {
        // One entity, no support, no enrichment: exactly one distinct
        // example exists, so a request for five must stop at the budget.
        let domain = Domain {
            key: "tiny".to_string(),
            entities: LanguageMap::new(
                entity_map(&[("unico", &["id"])]),
                entity_map(&[("unico", &["id"])]),
            ),
            relations: LanguageMap::default(),
            support: LanguageMap::default(),
        };
        let store =
            VocabularyStore::new(vec![domain], LanguageMap::default(), LanguageMap::default())
                .unwrap();
        let mut seen = HashSet::new();
        let report = Synthesizer::with_seed(&store, 2)
            .generate_batch(5, Some(&mut seen))
            .unwrap();
        assert_eq!(report.examples.len(), 1);
        assert_eq!(report.attempts, 50);
        assert_eq!(report.shortfall(), 4);
    }

    #[test]
    fn test_empty_store_yields_nothing() {
        let store =
            VocabularyStore::new(Vec::new(), LanguageMap::default(), LanguageMap::default())
                .unwrap();
        let report = Synthesizer::with_seed(&store, 0)
            .generate_batch(3, None)
            .unwrap();
        assert!(report.examples.is_empty());
        assert_eq!(report.shortfall(), 3);
    }
}
