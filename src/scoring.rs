//! Domain scoring
//!
//! Ranks domains by vocabulary overlap with the caller's existing entity
//! names and project title. Matching is entirely on normalized forms; the
//! title is collapsed to one contiguous token, so title matches are substring
//! containment rather than word-boundary hits.

use std::collections::HashSet;

use crate::normalize::normalize;
use crate::vocabulary::VocabularyStore;

/// Rank all domains against a set of known entity names and a free-text
/// title.
///
/// Score per domain = count of its normalized entity names present in the
/// normalized existing set, plus count occurring as substrings of the
/// normalized title. The result is sorted by score descending, ties broken by
/// descending domain key (a reverse sort on `(score, key)` pairs), and is
/// deterministic for a fixed store. An empty store yields an empty ranking.
pub fn rank_domains(
    store: &VocabularyStore,
    existing_entity_names: &HashSet<String>,
    title: &str,
) -> Vec<(usize, String)> {
    let existing_norm: HashSet<String> = existing_entity_names
        .iter()
        .map(|name| normalize(name))
        .collect();
    let title_norm = normalize(title);

    let mut scores: Vec<(usize, String)> = store
        .domains()
        .iter()
        .map(|domain| {
            let names = store.entity_names(&domain.key);
            let known = names.iter().filter(|e| existing_norm.contains(*e)).count();
            let titled = names
                .iter()
                .filter(|e| title_norm.contains(e.as_str()))
                .count();
            (known + titled, domain.key.clone())
        })
        .collect();

    scores.sort_by(|a, b| b.cmp(a));
    scores
}
