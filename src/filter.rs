//! Filter state for the faceted catalog, plus the action reducer.
//!
//! `FilterState` is the accumulated set of category result caps and
//! include/exclude attribute tags that drives catalog queries. It is owned
//! by the conversation session and replaced — never mutated in place — on
//! every turn: `apply_refinement_actions` clones the previous state and
//! folds the actions into the copy in order, so later actions see earlier
//! effects within the same call.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::intent::{Direction, RefinementAction};

/// Cap assumed for a category with no prior entry.
const DEFAULT_CAP: u32 = 3;
/// Caps clamp to this range once adjusted.
const MIN_CAP: u32 = 1;
const MAX_CAP: u32 = 10;
/// "more" raises the cap by 2; "less" lowers it by 1.
const MORE_STEP: u32 = 2;
const LESS_STEP: u32 = 1;

// ---------------------------------------------------------------------------
// FilterState
// ---------------------------------------------------------------------------

/// The running filter state for one conversation session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterState {
    /// Category name → result-count cap, in seed/insertion order.
    pub categories: IndexMap<String, u32>,
    /// Attribute tags results must carry. Ordered, no duplicates.
    pub include_tags: Vec<String>,
    /// Attribute tags results must not carry. Ordered, no duplicates.
    pub exclude_tags: Vec<String>,
    /// Lower price bound. Modeled, but no current rule populates it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_price: Option<f64>,
    /// Upper price bound. Modeled, but no current rule populates it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_price: Option<f64>,
}

impl FilterState {
    /// An empty filter state with no seeded categories.
    pub fn new() -> Self {
        Self::default()
    }

    /// A filter state seeded with the given category caps, in order.
    pub fn with_seed_caps(caps: &[(&str, u32)]) -> Self {
        let mut state = Self::default();
        for (category, cap) in caps {
            state.categories.insert((*category).to_string(), *cap);
        }
        state
    }
}

// ---------------------------------------------------------------------------
// Reducer
// ---------------------------------------------------------------------------

/// Fold refinement actions into a new `FilterState`.
///
/// The input state is never mutated. Informational actions (`ShowSimilar`,
/// `RemoveProduct`, `RemoveBrand`, `Unknown`) have no effect here; the
/// caller branches on them directly.
pub fn apply_refinement_actions(
    actions: &[RefinementAction],
    current: &FilterState,
) -> FilterState {
    let mut next = current.clone();

    for action in actions {
        match action {
            RefinementAction::AdjustCategoryQuantity {
                category, direction, ..
            } => {
                let base = next.categories.get(category).copied().unwrap_or(DEFAULT_CAP);
                let cap = match direction {
                    Direction::More => (base + MORE_STEP).min(MAX_CAP),
                    Direction::Less => base.saturating_sub(LESS_STEP).max(MIN_CAP),
                };
                next.categories.insert(category.clone(), cap);
            }
            RefinementAction::FilterAttribute { attribute } => {
                push_unique(&mut next.include_tags, attribute);
            }
            RefinementAction::ExcludeAttribute { attribute } => {
                push_unique(&mut next.exclude_tags, attribute);
            }
            // Informational only — no state effect.
            RefinementAction::ShowSimilar { .. }
            | RefinementAction::RemoveProduct { .. }
            | RefinementAction::RemoveBrand { .. }
            | RefinementAction::Unknown { .. } => {}
        }
    }

    next
}

/// Append with set semantics: duplicate insertions are no-ops.
fn push_unique(tags: &mut Vec<String>, tag: &str) {
    if !tags.iter().any(|t| t == tag) {
        tags.push(tag.to_string());
    }
}

// ---------------------------------------------------------------------------
// Affected categories
// ---------------------------------------------------------------------------

/// Distinct categories touched by a set of actions, in first-seen order.
///
/// Used by the caller to scope which catalog buckets to re-query. Actions
/// without a category contribute nothing.
pub fn affected_categories(actions: &[RefinementAction]) -> Vec<String> {
    let mut categories: Vec<String> = Vec::new();
    for action in actions {
        if let Some(category) = action.category() {
            if !categories.iter().any(|c| c == category) {
                categories.push(category.to_string());
            }
        }
    }
    categories
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn adjust(category: &str, direction: Direction) -> RefinementAction {
        RefinementAction::AdjustCategoryQuantity {
            category: category.to_string(),
            direction,
            raw_intent: None,
        }
    }

    fn filter(attribute: &str) -> RefinementAction {
        RefinementAction::FilterAttribute { attribute: attribute.to_string() }
    }

    fn exclude(attribute: &str) -> RefinementAction {
        RefinementAction::ExcludeAttribute { attribute: attribute.to_string() }
    }

    // -- Quantity adjustment --

    #[test]
    fn test_more_adds_two() {
        let state = FilterState::with_seed_caps(&[("Snacks", 3)]);
        let next = apply_refinement_actions(&[adjust("Snacks", Direction::More)], &state);
        assert_eq!(next.categories.get("Snacks"), Some(&5));
    }

    #[test]
    fn test_less_subtracts_one() {
        let state = FilterState::with_seed_caps(&[("Snacks", 3)]);
        let next = apply_refinement_actions(&[adjust("Snacks", Direction::Less)], &state);
        assert_eq!(next.categories.get("Snacks"), Some(&2));
    }

    #[test]
    fn test_unseeded_category_defaults_to_three() {
        let state = FilterState::new();
        let next = apply_refinement_actions(&[adjust("Candles", Direction::More)], &state);
        assert_eq!(next.categories.get("Candles"), Some(&5));

        let next = apply_refinement_actions(&[adjust("Candles", Direction::Less)], &state);
        assert_eq!(next.categories.get("Candles"), Some(&2));
    }

    #[test]
    fn test_more_clamps_at_ten() {
        // 3 → 5 → 7 → 9 → 10 → 10 ...
        let mut state = FilterState::with_seed_caps(&[("Beverages", 3)]);
        let expected = [5, 7, 9, 10, 10, 10, 10, 10, 10, 10];
        for cap in expected {
            state = apply_refinement_actions(&[adjust("Beverages", Direction::More)], &state);
            assert_eq!(state.categories.get("Beverages"), Some(&cap));
        }
    }

    #[test]
    fn test_less_clamps_at_one() {
        let mut state = FilterState::with_seed_caps(&[("Snacks", 3)]);
        for cap in [2, 1, 1, 1] {
            state = apply_refinement_actions(&[adjust("Snacks", Direction::Less)], &state);
            assert_eq!(state.categories.get("Snacks"), Some(&cap));
        }
    }

    #[test]
    fn test_sequential_fold_not_commutative() {
        // more then less within one call: 3 → 5 → 4
        let state = FilterState::with_seed_caps(&[("Snacks", 3)]);
        let next = apply_refinement_actions(
            &[adjust("Snacks", Direction::More), adjust("Snacks", Direction::Less)],
            &state,
        );
        assert_eq!(next.categories.get("Snacks"), Some(&4));
    }

    #[test]
    fn test_input_state_untouched() {
        let state = FilterState::with_seed_caps(&[("Snacks", 3)]);
        let _ = apply_refinement_actions(
            &[adjust("Snacks", Direction::More), filter("organic"), exclude("plastic")],
            &state,
        );
        assert_eq!(state.categories.get("Snacks"), Some(&3));
        assert!(state.include_tags.is_empty());
        assert!(state.exclude_tags.is_empty());
    }

    #[test]
    fn test_seed_order_preserved() {
        let state = FilterState::with_seed_caps(&[
            ("Snacks", 6), ("Beverages", 6), ("Bath Products", 6),
        ]);
        let next = apply_refinement_actions(&[adjust("Candles", Direction::More)], &state);
        let keys: Vec<&str> = next.categories.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["Snacks", "Beverages", "Bath Products", "Candles"]);
    }

    // -- Tag sets --

    #[test]
    fn test_include_tags_append_in_order() {
        let next = apply_refinement_actions(
            &[filter("organic"), filter("local")],
            &FilterState::new(),
        );
        assert_eq!(next.include_tags, vec!["organic", "local"]);
    }

    #[test]
    fn test_include_tags_idempotent() {
        let once = apply_refinement_actions(&[filter("organic")], &FilterState::new());
        let twice = apply_refinement_actions(
            &[filter("organic"), filter("organic")],
            &FilterState::new(),
        );
        assert_eq!(once.include_tags, twice.include_tags);
    }

    #[test]
    fn test_exclude_tags_idempotent() {
        let once = apply_refinement_actions(&[exclude("plastic")], &FilterState::new());
        let twice = apply_refinement_actions(
            &[exclude("plastic"), exclude("plastic")],
            &FilterState::new(),
        );
        assert_eq!(once.exclude_tags, twice.exclude_tags);
    }

    #[test]
    fn test_exclude_two_attributes() {
        let next = apply_refinement_actions(
            &[exclude("plastic"), exclude("glass")],
            &FilterState::new(),
        );
        assert_eq!(next.exclude_tags, vec!["plastic", "glass"]);
    }

    // -- Informational actions --

    #[test]
    fn test_informational_actions_have_no_effect() {
        let state = FilterState::with_seed_caps(&[("Snacks", 6)]);
        let actions = vec![
            RefinementAction::ShowSimilar { raw_intent: "more like this".to_string() },
            RefinementAction::RemoveProduct { product_name: "chips".to_string() },
            RefinementAction::RemoveBrand { brand_name: "Acme".to_string() },
            RefinementAction::Unknown { raw_intent: "???".to_string() },
        ];
        let next = apply_refinement_actions(&actions, &state);
        assert_eq!(next, state);
    }

    #[test]
    fn test_determinism() {
        let state = FilterState::with_seed_caps(&[("Snacks", 3)]);
        let actions = vec![adjust("Snacks", Direction::More), filter("organic")];
        let a = apply_refinement_actions(&actions, &state);
        let b = apply_refinement_actions(&actions, &state);
        assert_eq!(a, b);
    }

    // -- Affected categories --

    #[test]
    fn test_affected_categories_dedupe_first_seen() {
        let actions = vec![
            adjust("Snacks", Direction::More),
            adjust("Snacks", Direction::Less),
            adjust("Beverages", Direction::More),
        ];
        assert_eq!(affected_categories(&actions), vec!["Snacks", "Beverages"]);
    }

    #[test]
    fn test_affected_categories_skip_categoryless_actions() {
        let actions = vec![
            filter("organic"),
            exclude("plastic"),
            RefinementAction::ShowSimilar { raw_intent: "similar".to_string() },
            adjust("Decor", Direction::More),
        ];
        assert_eq!(affected_categories(&actions), vec!["Decor"]);
    }

    #[test]
    fn test_affected_categories_empty() {
        assert!(affected_categories(&[]).is_empty());
    }
}
