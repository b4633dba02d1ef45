//! Refinement vocabulary loader — loads word lists from YAML.
//!
//! Single consolidated loader for all refinement word-list data:
//! category synonyms, the closed exclude-attribute vocabulary, and the
//! closed include-attribute vocabulary (with surface variants).
//!
//! Uses the standard disk-first + `include_str!` fallback pattern.

use serde::Deserialize;
use std::collections::HashMap;
use std::sync::OnceLock;

// ---------------------------------------------------------------------------
// Embedded fallback
// ---------------------------------------------------------------------------

const EMBEDDED_VOCAB: &str = include_str!("../data/vocab.yaml");

// ---------------------------------------------------------------------------
// YAML schema types
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct VocabYaml {
    categories: Vec<CategoryEntry>,
    exclude_attributes: Vec<String>,
    include_attributes: Vec<IncludeEntry>,
}

#[derive(Debug, Deserialize)]
struct CategoryEntry {
    canonical: String,
    synonyms: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct IncludeEntry {
    token: String,
    variants: Vec<String>,
}

// ---------------------------------------------------------------------------
// Runtime vocabulary — the loaded, indexed form
// ---------------------------------------------------------------------------

/// An include-attribute entry: the canonical hyphenated token and the
/// surface variants matched in raw text.
#[derive(Debug, Clone)]
pub struct IncludeAttr {
    /// Canonical hyphenated token (e.g. `fair-trade`, `new-york`).
    pub token: String,
    /// Surface forms matched in input text (e.g. "fair trade", "fair-trade").
    pub variants: Vec<String>,
}

/// Loaded refinement vocabulary, indexed for fast lookup.
#[derive(Debug)]
pub struct RefineVocab {
    /// Synonym table: lower-cased synonym phrase → canonical category name.
    pub category_synonyms: HashMap<String, String>,
    /// Canonical category names, in table order.
    pub canonical_categories: Vec<String>,
    /// Closed vocabulary for exclusion rules ("no plastic"), longest-first.
    pub exclude_attributes: Vec<String>,
    /// Closed vocabulary for inclusion rules ("only organic").
    pub include_attributes: Vec<IncludeAttr>,
}

impl RefineVocab {
    /// All include-attribute surface variants, sorted longest-first so that
    /// multi-word forms win over any shorter overlapping alternative.
    pub fn include_variants_longest_first(&self) -> Vec<String> {
        let mut variants: Vec<String> = self
            .include_attributes
            .iter()
            .flat_map(|a| a.variants.iter().cloned())
            .collect();
        variants.sort_by(|a, b| b.len().cmp(&a.len()));
        variants
    }

    /// Canonical include token for a matched surface variant: spaces
    /// collapse to hyphens ("new york" → "new-york").
    pub fn canonical_include_token(&self, variant: &str) -> String {
        variant.replace(' ', "-")
    }
}

// ---------------------------------------------------------------------------
// Singleton
// ---------------------------------------------------------------------------

static VOCAB: OnceLock<RefineVocab> = OnceLock::new();

/// Get the loaded refinement vocabulary (singleton, loaded on first call).
pub fn vocab() -> &'static RefineVocab {
    VOCAB.get_or_init(load_vocab)
}

// ---------------------------------------------------------------------------
// Loader
// ---------------------------------------------------------------------------

fn load_vocab() -> RefineVocab {
    // Disk-first, embedded fallback
    let yaml_str = std::fs::read_to_string("data/vocab.yaml")
        .ok()
        .unwrap_or_else(|| EMBEDDED_VOCAB.to_string());

    parse_vocab(&yaml_str).unwrap_or_else(|e| {
        eprintln!("WARN: failed to parse vocab.yaml from disk ({}), using embedded", e);
        parse_vocab(EMBEDDED_VOCAB).expect("embedded vocab.yaml must parse")
    })
}

fn parse_vocab(yaml_str: &str) -> Result<RefineVocab, String> {
    let raw: VocabYaml = serde_yaml::from_str(yaml_str)
        .map_err(|e| format!("YAML parse error: {}", e))?;

    // Build the synonym table. The lower-cased canonical name itself is
    // always a valid synonym ("snacks" → "Snacks").
    let mut category_synonyms = HashMap::new();
    let mut canonical_categories = Vec::new();
    for entry in &raw.categories {
        category_synonyms.insert(entry.canonical.to_lowercase(), entry.canonical.clone());
        for syn in &entry.synonyms {
            category_synonyms.insert(syn.to_lowercase(), entry.canonical.clone());
        }
        canonical_categories.push(entry.canonical.clone());
    }

    // Exclude attributes — sorted longest-first for alternation building
    let mut exclude_attributes = raw.exclude_attributes;
    exclude_attributes.sort_by(|a, b| b.len().cmp(&a.len()));

    let include_attributes = raw
        .include_attributes
        .into_iter()
        .map(|e| IncludeAttr {
            token: e.token,
            variants: e.variants,
        })
        .collect();

    Ok(RefineVocab {
        category_synonyms,
        canonical_categories,
        exclude_attributes,
        include_attributes,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
