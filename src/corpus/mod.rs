//! Training corpus types
//!
//! Wire contract for generated training examples. The serde field names
//! (`input`, `output`, `primary_table`, `existing_tables`, `suggested_table`,
//! `attributes`, `name`) are consumed by downstream model-training tooling
//! and must not be renamed.

pub mod persistence;
pub mod synthesizer;

use serde::{Deserialize, Serialize};

use crate::error::CorpusError;

/// A table already present in the schema, used as prediction context
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExistingTable {
    pub name: String,
    pub attributes: Vec<String>,
}

/// Input side of a training example
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum InputPayload {
    /// Type A: define the attributes of one named table
    EntityDefinition {
        primary_table: String,
        existing_tables: Vec<ExistingTable>,
    },
    /// Type B: suggest a linking table for the given context
    RelationSuggestion { existing_tables: Vec<ExistingTable> },
}

/// Output side of a training example
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum OutputPayload {
    /// Type A: the expected attribute list, order preserved
    Attributes(Vec<String>),
    /// Type B: the suggested relation table and its attributes
    Relation {
        suggested_table: String,
        attributes: Vec<String>,
    },
}

/// One labeled (input, output) training pair
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneratedExample {
    pub input: InputPayload,
    pub output: OutputPayload,
}

impl GeneratedExample {
    /// Canonical serialization used for duplicate detection: object keys
    /// sorted, array order preserved.
    pub fn fingerprint(&self) -> Result<String, CorpusError> {
        // serde_json::Value maps are BTreeMaps, so key order is canonical.
        let value = serde_json::to_value(self)?;
        Ok(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_a() -> GeneratedExample {
        GeneratedExample {
            input: InputPayload::EntityDefinition {
                primary_table: "cliente".to_string(),
                existing_tables: vec![ExistingTable {
                    name: "producto".to_string(),
                    attributes: vec!["id".to_string(), "nombre".to_string()],
                }],
            },
            output: OutputPayload::Attributes(vec!["id".to_string(), "email".to_string()]),
        }
    }

    fn type_b() -> GeneratedExample {
        GeneratedExample {
            input: InputPayload::RelationSuggestion {
                existing_tables: vec![ExistingTable {
                    name: "cliente".to_string(),
                    attributes: vec!["id".to_string()],
                }],
            },
            output: OutputPayload::Relation {
                suggested_table: "venta".to_string(),
                attributes: vec!["id".to_string(), "fecha".to_string()],
            },
        }
    }

    #[test]
    fn test_wire_field_names() {
        let a = serde_json::to_value(type_a()).unwrap();
        assert!(a["input"]["primary_table"].is_string());
        assert!(a["input"]["existing_tables"][0]["name"].is_string());
        assert!(a["input"]["existing_tables"][0]["attributes"].is_array());
        assert!(a["output"].is_array());

        let b = serde_json::to_value(type_b()).unwrap();
        assert!(b["input"]["primary_table"].is_null());
        assert!(b["output"]["suggested_table"].is_string());
        assert!(b["output"]["attributes"].is_array());
    }

    #[test]
    fn test_round_trip_preserves_variant() {
        for example in [type_a(), type_b()] {
            let json = serde_json::to_string(&example).unwrap();
            let back: GeneratedExample = serde_json::from_str(&json).unwrap();
            assert_eq!(back, example);
        }
    }

    #[test]
    fn test_fingerprint_is_order_sensitive_on_values_only() {
        let mut swapped = type_a();
        if let OutputPayload::Attributes(attrs) = &mut swapped.output {
            attrs.reverse();
        }
        // Attribute order matters
        assert_ne!(
            type_a().fingerprint().unwrap(),
            swapped.fingerprint().unwrap()
        );
        // Identical examples agree
        assert_eq!(
            type_a().fingerprint().unwrap(),
            type_a().fingerprint().unwrap()
        );
    }
}
