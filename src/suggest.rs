//! Class suggestion engine
//!
//! Picks the best-matching domain for a partial schema and emits new entity
//! names from it, with attributes obtained from the external prediction
//! model. The predictor is the only suspension point; everything else is a
//! pure computation over the read-only store.

use std::collections::HashSet;

use async_trait::async_trait;
use serde::Serialize;

use crate::error::PredictorError;
use crate::normalize::normalize;
use crate::scoring::rank_domains;
use crate::vocabulary::VocabularyStore;

/// External attribute/relation prediction model.
///
/// One call per suggestion, no retry. A failure degrades the affected
/// suggestion's attributes to empty; it never drops the suggestion or aborts
/// the request.
#[async_trait]
pub trait AttributePredictor: Send + Sync {
    /// Map a serialized text input (entity name plus context text) to a
    /// whitespace-delimited attribute token string.
    async fn predict(&self, input: &str) -> Result<String, PredictorError>;
}

/// One suggested entity with its predicted attributes
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Suggestion {
    pub name: String,
    pub attributes: Vec<String>,
}

/// Suggest up to `max_items` new entity names for a project.
///
/// The top-ranked domain is chosen even at score zero; only an empty store
/// yields no choice (and an empty result). Names already present in
/// `existing_classes` (compared normalized) are excluded. Display names
/// capitalize only the first character.
pub async fn suggest_classes(
    store: &VocabularyStore,
    predictor: &dyn AttributePredictor,
    title: &str,
    existing_classes: &[String],
    max_items: usize,
) -> Vec<Suggestion> {
    if max_items == 0 {
        return Vec::new();
    }

    let existing_norm: HashSet<String> = existing_classes.iter().map(|c| normalize(c)).collect();
    let existing_set: HashSet<String> = existing_classes.iter().cloned().collect();

    let ranked = rank_domains(store, &existing_set, title);
    let Some((_, chosen_key)) = ranked.first() else {
        return Vec::new();
    };

    let candidates: Vec<&String> = store
        .entity_names(chosen_key)
        .iter()
        .filter(|name| !existing_norm.contains(*name))
        .take(max_items)
        .collect();

    let context = existing_classes.join(" ");
    let mut suggestions = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        let name = display_name(candidate);
        let input = format!("{} {}", name, context);
        let attributes = match predictor.predict(&input).await {
            Ok(output) => output.split_whitespace().map(str::to_string).collect(),
            Err(err) => {
                tracing::warn!(entity = %name, error = %err, "predictor failed, returning suggestion without attributes");
                Vec::new()
            }
        };
        suggestions.push(Suggestion { name, attributes });
    }
    suggestions
}

/// Re-capitalize only the first character of a normalized name
fn display_name(normalized: &str) -> String {
    let mut chars = normalized.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
