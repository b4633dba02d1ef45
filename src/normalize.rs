//! Text and category normalization for the refinement engine.
//!
//! Two pure string transforms:
//! - `normalize_input` — the single normalization pass applied to raw user
//!   text before rule matching (case fold, whitespace collapse, trim).
//! - `normalize_category` — maps a raw category phrase ("drinks", "soap")
//!   to its canonical name via the vocabulary synonym table. Unknown
//!   phrases pass through normalized-but-uncanonicalized: the normalizer
//!   never fails, and categories form an open set.

use crate::vocab;

/// Normalize raw user input: lower-case, collapse internal whitespace, trim.
pub fn normalize_input(input: &str) -> String {
    input
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Normalize a raw category phrase to its canonical name.
///
/// Lookup is against the synonym table from `data/vocab.yaml`; a miss
/// returns the normalized input unchanged so free-form labels survive.
pub fn normalize_category(raw: &str) -> String {
    let key = normalize_input(raw);
    match vocab::vocab().category_synonyms.get(&key) {
        Some(canonical) => canonical.clone(),
        None => key,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
