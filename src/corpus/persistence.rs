//! Corpus file persistence
//!
//! The corpus is a single JSON array of examples. Appending means loading
//! the existing sequence (absent or empty file reads as empty), extending it
//! and rewriting the whole document. Field names are the wire contract
//! defined in [`crate::corpus`].

use std::fs;
use std::path::Path;

use crate::corpus::GeneratedExample;
use crate::error::CorpusError;

/// Load a corpus file; a missing or empty file is an empty corpus.
pub fn load_corpus(path: &Path) -> Result<Vec<GeneratedExample>, CorpusError> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let content = fs::read_to_string(path)?;
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }
    Ok(serde_json::from_str(&content)?)
}

/// Write the full corpus back, pretty-printed with non-ASCII preserved.
pub fn save_corpus(path: &Path, examples: &[GeneratedExample]) -> Result<(), CorpusError> {
    let content = serde_json::to_string_pretty(examples)?;
    fs::write(path, content)?;
    Ok(())
}
