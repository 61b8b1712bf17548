//! Problems a transition table can have.

use thiserror::Error;

/// Something in a transition table that is legal but almost certainly a
/// mistake. The machine itself never rejects these; see `StateMachine::new`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableIssue {
    /// From `states`, the transition at `index` can never fire because the
    /// earlier transition at `shadowed_by` has the same destination.
    #[error("transition #{index} to {to} is shadowed by #{shadowed_by} from {}", .states.join(", "))]
    ShadowedTransition {
        index: usize,
        shadowed_by: usize,
        to: String,
        states: Vec<String>,
    },

    /// Two transitions share a name, which makes names useless for telling
    /// commits apart.
    #[error("transition name '{name}' is used by #{first} and #{second}")]
    DuplicateName {
        name: String,
        first: usize,
        second: usize,
    },
}
