//! Confirmation messages — natural-language acknowledgement of the
//! refinement actions just applied, or a clarification prompt when the
//! message could not be understood.

use crate::intent::{Direction, RefinementAction};

/// Shown when no intent could be determined.
pub const CLARIFICATION: &str = "I'm not sure I understood that. Could you try rephrasing? \
     For example, 'show me more snacks' or 'no plastic packaging'.";

/// Render a human-readable acknowledgement of the applied actions.
///
/// An empty list, or a list whose *first* action is `Unknown`, yields the
/// fixed clarification prompt — checking only the first action is
/// sufficient, since the parser only ever emits `Unknown` on its own.
pub fn confirmation_message(actions: &[RefinementAction]) -> String {
    match actions.first() {
        None | Some(RefinementAction::Unknown { .. }) => return CLARIFICATION.to_string(),
        Some(_) => {}
    }

    let clauses: Vec<String> = actions.iter().filter_map(clause_for).collect();
    match clauses.len() {
        // Totality: nothing recognized produced a clause.
        0 => CLARIFICATION.to_string(),
        1 => format!("Got it! I'm {}.", clauses[0]),
        n => {
            let head = clauses[..n - 1].join(", ");
            format!("Got it! I'm {}, and {}.", head, clauses[n - 1])
        }
    }
}

/// One clause per recognized action type; `Unknown` contributes nothing.
fn clause_for(action: &RefinementAction) -> Option<String> {
    match action {
        RefinementAction::AdjustCategoryQuantity { category, direction, .. } => {
            Some(match direction {
                Direction::More => format!("showing more {}", category),
                Direction::Less => format!("showing fewer {}", category),
            })
        }
        RefinementAction::FilterAttribute { attribute } => {
            Some(format!("filtering to {} products", attribute))
        }
        RefinementAction::ExcludeAttribute { attribute } => {
            Some(format!("excluding {}", attribute))
        }
        RefinementAction::ShowSimilar { .. } => Some("finding similar products".to_string()),
        RefinementAction::RemoveProduct { product_name } => {
            Some(format!("removing {}", product_name))
        }
        RefinementAction::RemoveBrand { brand_name } => {
            Some(format!("removing {} products", brand_name))
        }
        RefinementAction::Unknown { .. } => None,
    }
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

    #[test]
    fn test_single_clause() {
        let msg = confirmation_message(&[adjust("Snacks", Direction::More)]);
        assert_eq!(msg, "Got it! I'm showing more Snacks.");
    }

    #[test]
    fn test_fewer_clause() {
        let msg = confirmation_message(&[adjust("Beverages", Direction::Less)]);
        assert_eq!(msg, "Got it! I'm showing fewer Beverages.");
    }

    #[test]
    fn test_two_clauses_comma_before_and() {
        let msg = confirmation_message(&[
            RefinementAction::ExcludeAttribute { attribute: "plastic".to_string() },
            RefinementAction::ExcludeAttribute { attribute: "glass".to_string() },
        ]);
        assert_eq!(msg, "Got it! I'm excluding plastic, and excluding glass.");
    }

    #[test]
    fn test_three_clauses() {
        let msg = confirmation_message(&[
            adjust("Snacks", Direction::More),
            RefinementAction::FilterAttribute { attribute: "organic".to_string() },
            RefinementAction::ExcludeAttribute { attribute: "plastic".to_string() },
        ]);
        assert_eq!(
            msg,
            "Got it! I'm showing more Snacks, filtering to organic products, and excluding plastic."
        );
    }

    #[test]
    fn test_filter_clause() {
        let msg = confirmation_message(&[RefinementAction::FilterAttribute {
            attribute: "organic".to_string(),
        }]);
        assert_eq!(msg, "Got it! I'm filtering to organic products.");
    }

    #[test]
    fn test_show_similar_clause() {
        let msg = confirmation_message(&[RefinementAction::ShowSimilar {
            raw_intent: "more like this".to_string(),
        }]);
        assert_eq!(msg, "Got it! I'm finding similar products.");
    }

    #[test]
    fn test_remove_product_clause() {
        let msg = confirmation_message(&[RefinementAction::RemoveProduct {
            product_name: "lavender candle".to_string(),
        }]);
        assert_eq!(msg, "Got it! I'm removing lavender candle.");
    }

    #[test]
    fn test_remove_brand_clause() {
        let msg = confirmation_message(&[RefinementAction::RemoveBrand {
            brand_name: "Acme".to_string(),
        }]);
        assert_eq!(msg, "Got it! I'm removing Acme products.");
    }

    #[test]
    fn test_empty_is_clarification() {
        assert_eq!(confirmation_message(&[]), CLARIFICATION);
    }

    #[test]
    fn test_unknown_first_is_clarification() {
        let msg = confirmation_message(&[
            RefinementAction::Unknown { raw_intent: "??".to_string() },
            adjust("Snacks", Direction::More),
        ]);
        assert_eq!(msg, CLARIFICATION);
    }

    #[test]
    fn test_unknown_contributes_no_clause() {
        // Unknown after a recognized action is skipped, not rendered.
        let msg = confirmation_message(&[
            adjust("Snacks", Direction::More),
            RefinementAction::Unknown { raw_intent: "??".to_string() },
        ]);
        assert_eq!(msg, "Got it! I'm showing more Snacks.");
    }
}
