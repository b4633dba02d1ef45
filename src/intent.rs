//! Refinement-intent recognition over free-text follow-up messages.
//!
//! Actions:
//! - **AdjustCategoryQuantity** — show more/fewer results for a category
//! - **FilterAttribute** — narrow results to an attribute ("only organic")
//! - **ExcludeAttribute** — drop results with an attribute ("no plastic")
//! - **ShowSimilar** — user wants products like the current ones
//! - **RemoveProduct** — drop a named product from the results
//! - **RemoveBrand** — reserved; no rule currently produces it
//! - **Unknown** — nothing matched; caller asks for a rephrase
//!
//! The parser runs seven ordered pattern rules over the normalized input.
//! Each rule is global (it may match several times in one message) and the
//! rules are additive: where two rules match the same span, both actions
//! are emitted. Downstream application is idempotent, so the duplication
//! is harmless and deliberately preserved.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

use crate::normalize;
use crate::vocab;

// ---------------------------------------------------------------------------
// Action types
// ---------------------------------------------------------------------------

/// Direction of a category quantity adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    More,
    Less,
}

/// A structured refinement instruction derived from free text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case", rename_all_fields = "camelCase")]
pub enum RefinementAction {
    /// Show more or fewer results for one category.
    AdjustCategoryQuantity {
        category: String,
        direction: Direction,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        raw_intent: Option<String>,
    },
    /// Narrow results to products carrying an attribute tag.
    FilterAttribute { attribute: String },
    /// Drop products carrying an attribute tag.
    ExcludeAttribute { attribute: String },
    /// The user wants products similar to what is currently shown.
    ShowSimilar { raw_intent: String },
    /// Drop a specific named product from the results.
    RemoveProduct { product_name: String },
    /// Drop every product of a brand. Reserved for future rules.
    RemoveBrand { brand_name: String },
    /// Nothing matched; carries the original message for the caller.
    Unknown { raw_intent: String },
}

impl RefinementAction {
    /// The category this action touches, if any.
    pub fn category(&self) -> Option<&str> {
        match self {
            RefinementAction::AdjustCategoryQuantity { category, .. } => Some(category),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Pattern rules — a fixed, ordered list of (kind, regex) pairs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RuleKind {
    /// `(more|less|fewer|additional|reduce) <category>`
    Quantity,
    /// `(no|without|avoid|not|exclude) <attribute>` over the closed exclude vocab
    Exclude,
    /// `(show me|only|just|filter by|prefer) <attribute>` over the closed include vocab
    Include,
    /// input contains "more like this" / "similar" / "like that"
    Similarity,
    /// `(remove|delete|take out|get rid of) (the )?<text>(from|$)` — first match only
    RemoveProduct,
    /// `(not this type of|different|another) <category>` — always More
    Different,
    /// `(other options for|more options for|see other) <category>` — always More
    OtherOptions,
}

struct Rule {
    kind: RuleKind,
    pattern: Regex,
}

static RULES: OnceLock<Vec<Rule>> = OnceLock::new();

/// The compiled rule set, in evaluation order. Built once from the
/// vocabulary tables; attribute alternations are sorted longest-first so
/// multi-word surface forms win.
fn rules() -> &'static [Rule] {
    RULES.get_or_init(build_rules)
}

fn build_rules() -> Vec<Rule> {
    let v = vocab::vocab();

    let exclude_alt = alternation(&v.exclude_attributes);
    let include_alt = alternation(&v.include_variants_longest_first());

    let compile = |kind: RuleKind, pattern: String| Rule {
        kind,
        pattern: Regex::new(&pattern).expect("rule pattern must compile"),
    };

    vec![
        compile(
            RuleKind::Quantity,
            r"\b(more|less|fewer|additional|reduce)\s+([a-z]+)".to_string(),
        ),
        compile(
            RuleKind::Exclude,
            format!(r"\b(no|without|avoid|not|exclude)\s+({})\b", exclude_alt),
        ),
        compile(
            RuleKind::Include,
            format!(r"\b(show me|only|just|filter by|prefer)\s+({})\b", include_alt),
        ),
        compile(
            RuleKind::Similarity,
            r"more like this|similar|like that".to_string(),
        ),
        compile(
            RuleKind::RemoveProduct,
            r"\b(remove|delete|take out|get rid of)\s+(?:the\s+)?(.+?)(?:\s+from\b|$)".to_string(),
        ),
        compile(
            RuleKind::Different,
            r"\b(not this type of|different|another)\s+([a-z]+)".to_string(),
        ),
        compile(
            RuleKind::OtherOptions,
            r"\b(other options for|more options for|see other)\s+([a-z]+)".to_string(),
        ),
    ]
}

fn alternation(words: &[String]) -> String {
    words
        .iter()
        .map(|w| regex::escape(w))
        .collect::<Vec<_>>()
        .join("|")
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Parse a free-text refinement message into structured actions.
///
/// The input is lower-cased and trimmed once, then every rule is evaluated
/// against it in order; all matches are collected in rule order. If nothing
/// matches, the result is exactly one `Unknown` carrying the original
/// input — the returned list is never empty.
pub fn parse_refinement_request(input: &str) -> Vec<RefinementAction> {
    let text = normalize::normalize_input(input);

    let mut actions = Vec::new();
    for rule in rules() {
        apply_rule(rule, &text, input, &mut actions);
    }

    if actions.is_empty() {
        return vec![RefinementAction::Unknown {
            raw_intent: input.to_string(),
        }];
    }
    actions
}

fn apply_rule(rule: &Rule, text: &str, raw_input: &str, actions: &mut Vec<RefinementAction>) {
    match rule.kind {
        RuleKind::Quantity => {
            for caps in rule.pattern.captures_iter(text) {
                let direction = direction_for(&caps[1]);
                actions.push(RefinementAction::AdjustCategoryQuantity {
                    category: normalize::normalize_category(&caps[2]),
                    direction,
                    raw_intent: None,
                });
            }
        }
        RuleKind::Exclude => {
            for caps in rule.pattern.captures_iter(text) {
                actions.push(RefinementAction::ExcludeAttribute {
                    attribute: caps[2].to_string(),
                });
            }
        }
        RuleKind::Include => {
            let v = vocab::vocab();
            for caps in rule.pattern.captures_iter(text) {
                actions.push(RefinementAction::FilterAttribute {
                    attribute: v.canonical_include_token(&caps[2]),
                });
            }
        }
        RuleKind::Similarity => {
            if rule.pattern.is_match(text) {
                actions.push(RefinementAction::ShowSimilar {
                    raw_intent: raw_input.to_string(),
                });
            }
        }
        RuleKind::RemoveProduct => {
            // First match only — one removal per message.
            if let Some(caps) = rule.pattern.captures(text) {
                let name = caps[2].trim().to_string();
                if !name.is_empty() {
                    actions.push(RefinementAction::RemoveProduct { product_name: name });
                }
            }
        }
        RuleKind::Different => {
            for caps in rule.pattern.captures_iter(text) {
                actions.push(RefinementAction::AdjustCategoryQuantity {
                    category: normalize::normalize_category(&caps[2]),
                    direction: Direction::More,
                    raw_intent: Some("show different options".to_string()),
                });
            }
        }
        RuleKind::OtherOptions => {
            for caps in rule.pattern.captures_iter(text) {
                actions.push(RefinementAction::AdjustCategoryQuantity {
                    category: normalize::normalize_category(&caps[2]),
                    direction: Direction::More,
                    raw_intent: Some("show other options".to_string()),
                });
            }
        }
    }
}

/// "more"/"additional" raise the cap; "less"/"fewer"/"reduce" lower it.
fn direction_for(keyword: &str) -> Direction {
    match keyword {
        "more" | "additional" => Direction::More,
        _ => Direction::Less,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
