//! Conversation session state and the single pipeline entry point.
//!
//! Maintains lightweight state across refinement turns:
//! - **SessionState** — the current filter state, turn count, and last
//!   parsed actions
//! - **process_input** — parse → affected categories → reduce → message
//!
//! The filter state is replaced, never mutated in place, on each turn. The
//! outcome exposes the raw actions so the rendering layer can branch on
//! informational actions (`ShowSimilar`, `RemoveProduct`) itself — the
//! reducer deliberately ignores them.

use crate::confirm;
use crate::filter::{self, FilterState};
use crate::intent::{self, RefinementAction};

/// Default per-category result cap seeded for demo sessions.
pub const DEMO_SEED_CAP: u32 = 6;

// ---------------------------------------------------------------------------
// SessionState
// ---------------------------------------------------------------------------

/// Per-conversation state. Created once per session, destroyed with it.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    /// The running filter state driving catalog queries.
    pub filters: FilterState,
    /// Turn counter, incremented per processed input.
    pub turn: u32,
    /// Actions parsed on the most recent turn.
    pub last_actions: Vec<RefinementAction>,
}

impl SessionState {
    /// A session with no seeded categories.
    pub fn new() -> Self {
        Self::default()
    }

    /// A session seeded with the given category caps.
    pub fn with_seed_caps(caps: &[(&str, u32)]) -> Self {
        Self {
            filters: FilterState::with_seed_caps(caps),
            ..Self::default()
        }
    }

    /// The demo session: Snacks, Beverages, and Bath Products at cap 6.
    pub fn demo() -> Self {
        Self::with_seed_caps(&[
            ("Snacks", DEMO_SEED_CAP),
            ("Beverages", DEMO_SEED_CAP),
            ("Bath Products", DEMO_SEED_CAP),
        ])
    }

    fn next_turn(&mut self) {
        self.turn += 1;
    }
}

// ---------------------------------------------------------------------------
// TurnOutcome
// ---------------------------------------------------------------------------

/// Everything the caller needs to render one refinement turn.
#[derive(Debug, Clone)]
pub struct TurnOutcome {
    /// The parsed actions, in rule-evaluation order.
    pub actions: Vec<RefinementAction>,
    /// Distinct categories touched this turn, for scoped re-querying.
    pub affected_categories: Vec<String>,
    /// Snapshot of the filter state after this turn.
    pub filters: FilterState,
    /// Display text acknowledging the actions (or asking for a rephrase).
    pub message: String,
}

// ---------------------------------------------------------------------------
// Public API — the main entry point
// ---------------------------------------------------------------------------

/// Process one user refinement message against the session.
///
/// Pipeline: parse the message into actions, derive the affected
/// categories, fold the actions into a fresh filter state (replacing the
/// session's), and render the confirmation message.
pub fn process_input(input: &str, state: &mut SessionState) -> TurnOutcome {
    state.next_turn();

    let actions = intent::parse_refinement_request(input);
    log::debug!("turn {}: {:?} -> {} action(s)", state.turn, input, actions.len());

    let affected_categories = filter::affected_categories(&actions);
    let filters = filter::apply_refinement_actions(&actions, &state.filters);
    let message = confirm::confirmation_message(&actions);

    state.filters = filters.clone();
    state.last_actions = actions.clone();

    TurnOutcome {
        actions,
        affected_categories,
        filters,
        message,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
