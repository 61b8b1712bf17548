//! Rejection reasons for `send`.

use crate::core::State;
use thiserror::Error;

/// Why a requested transition was rejected.
///
/// Every variant leaves the machine exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransitionError<S: State> {
    /// No transition in the table leaves the current state.
    #[error("no transition leaves the current state {current:?}")]
    InvalidCurrentState { current: S },

    /// Transitions leave `from`, but none of them targets `to`.
    #[error("no transition from {from:?} to {to:?}")]
    InvalidTransition { from: S, to: S },

    /// The matching transition's guard refused the current state.
    #[error("guard blocked transition {name:?} from {from:?} to {to:?}")]
    GuardRejected {
        from: S,
        to: S,
        name: Option<String>,
    },
}

impl<S: State> TransitionError<S> {
    /// True when no transition leaves the current state.
    pub fn is_invalid_current_state(&self) -> bool {
        matches!(self, Self::InvalidCurrentState { .. })
    }

    /// True when the current state has exits, but none to the requested state.
    pub fn is_invalid_transition(&self) -> bool {
        matches!(self, Self::InvalidTransition { .. })
    }

    /// True when the matching transition's guard refused.
    pub fn is_guard_rejected(&self) -> bool {
        matches!(self, Self::GuardRejected { .. })
    }

    /// Short label used in log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidCurrentState { .. } => "invalid_current_state",
            Self::InvalidTransition { .. } => "invalid_transition",
            Self::GuardRejected { .. } => "guard_rejected",
        }
    }
}
