//! Schema Advisor - Domain Vocabulary and Suggestion System
//!
//! This crate backs a schema-design tool with two independent consumer paths
//! over one bilingual domain vocabulary:
//!
//! - **Suggestion path**: score which application domain best matches a
//!   partial schema and a project title, then suggest new entity names from
//!   that domain with attributes obtained from an external prediction model.
//! - **Corpus path**: procedurally synthesize deduplicated, labeled training
//!   examples (entity definitions and relation suggestions) from the same
//!   vocabulary.
//!
//! ## Quick Start
//!
//! ```rust
//! use schema_advisor::{rank_domains, VocabularyStore};
//! use std::collections::HashSet;
//!
//! let store = VocabularyStore::builtin().unwrap();
//! let existing: HashSet<String> = ["producto".to_string()].into_iter().collect();
//! let ranked = rank_domains(&store, &existing, "tienda de productos");
//! assert_eq!(ranked[0].1, "ecommerce");
//! ```

// Core error handling
pub mod error;

// Name canonicalization used by every other component
pub mod normalize;

// Bilingual domain vocabulary: data model, built-in catalog, read-only store
pub mod vocabulary;

// Domain scoring and class suggestion
pub mod scoring;
pub mod suggest;

// External attribute/relation predictor client
pub mod predictor;

// Training corpus: wire types, synthesizer, persistence
pub mod corpus;

// REST API surface
pub mod api;

// Public re-exports for the two consumer paths
pub use corpus::persistence::{load_corpus, save_corpus};
pub use corpus::synthesizer::{GenerationReport, Synthesizer};
pub use corpus::{ExistingTable, GeneratedExample, InputPayload, OutputPayload};
pub use error::{CatalogError, CorpusError, PredictorError};
pub use normalize::normalize;
pub use predictor::HttpPredictor;
pub use scoring::rank_domains;
pub use suggest::{suggest_classes, AttributePredictor, Suggestion};
pub use vocabulary::{Domain, Language, LanguageMap, RelationTemplate, VocabularyStore};
