//! bodega — conversational refinement engine for a faceted retail catalog.
//!
//! Turns a free-text follow-up message ("show me more snacks", "no
//! plastic", "only organic") into structured filtering actions, folds them
//! into a running filter state, and renders a natural-language
//! acknowledgement. Pipeline:
//!
//! 1. **Normalization** — case fold, whitespace collapse; category synonym
//!    mapping (`normalize`, tables in `vocab`)
//! 2. **Intent parsing** — seven ordered pattern rules → `RefinementAction`s
//!    (`intent`)
//! 3. **Reduction** — actions folded into a replaced-not-mutated
//!    `FilterState`, plus affected-category extraction (`filter`)
//! 4. **Confirmation** — acknowledgement or clarification text (`confirm`)
//!
//! Plus session state management (`session`) for multi-turn conversations
//! and the catalog collaborator seam (`catalog`). Everything is pure,
//! synchronous, and total over its inputs.

pub mod catalog;
pub mod confirm;
pub mod filter;
pub mod intent;
pub mod normalize;
pub mod session;
pub mod vocab;
