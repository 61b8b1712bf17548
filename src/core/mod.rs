//! Core value types shared by the engine.
//!
//! - The `State` capability trait
//! - Guard predicates that can veto a structurally matched transition
//! - The committed transition history
//!
//! Nothing in this module has side effects.

mod guard;
mod history;
mod state;

pub use guard::Guard;
pub use history::{StateHistory, StateTransition};
pub use state::State;
