//! Error types for the schema advisor
//!
//! One thiserror enum per concern. Catalog errors are construction-time
//! defects and fatal; predictor and corpus errors are recovered locally by
//! their consumers as documented on each component.

use thiserror::Error;

/// Defects in the vocabulary catalog, detected when the store is built.
///
/// Any of these makes the store unusable; there is no partial construction.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Duplicate domain key '{key}'")]
    DuplicateDomain { key: String },

    #[error("Empty entity name in domain '{domain}' ({language})")]
    EmptyEntityName { domain: String, language: String },

    #[error("Entity '{entity}' in domain '{domain}' ({language}) has an empty attribute list")]
    EmptyAttributeList {
        domain: String,
        language: String,
        entity: String,
    },

    #[error(
        "Entities '{first}' and '{second}' in domain '{domain}' ({language}) collide after normalization"
    )]
    NormalizedNameCollision {
        domain: String,
        language: String,
        first: String,
        second: String,
    },
}

/// Failures of the external attribute/relation predictor
#[derive(Error, Debug)]
pub enum PredictorError {
    #[error("Predictor request failed: {0}")]
    Transport(String),

    #[error("Predictor returned status {status}: {body}")]
    Upstream { status: u16, body: String },

    #[error("Predictor response malformed: {0}")]
    Malformed(String),
}

impl From<reqwest::Error> for PredictorError {
    fn from(err: reqwest::Error) -> Self {
        PredictorError::Transport(err.to_string())
    }
}

/// Errors at the corpus persistence and fingerprinting boundary
#[derive(Error, Debug)]
pub enum CorpusError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
