//! Composition resolver.
//!
//! Keeps one product's per-group selection state valid under buyer events:
//! focus changes, ingredient toggles, tier switches and product switches.

pub mod events;
mod resolver;
mod state;
pub mod tiers;
pub mod validity;

pub use events::{apply, SelectionEvent};
pub use resolver::Resolver;
pub use state::{GroupState, SelectableTier, SelectedIngredient, Selection};
pub use validity::build_valid_group_state;
