//! Name canonicalization
//!
//! Every component compares entity names through [`normalize`]: lower-case,
//! all whitespace removed. Scoring, suggestion exclusion and role resolution
//! all operate on normalized forms only.

/// Canonicalize a free-form name into a comparable token.
///
/// Lower-cases (Unicode-aware) and strips every whitespace character. Total
/// and idempotent; the empty string maps to itself.
pub fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}
