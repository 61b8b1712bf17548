//! Guard predicates for transitions.
//!
//! A guard is an optional pure check attached to a transition. The machine
//! consults it only after the structural from/to match has picked that
//! transition, and before anything is committed.

use super::state::State;
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

/// Pure predicate over the current state that can veto a transition.
///
/// # Example
///
/// ```rust
/// use turnstile::core::Guard;
///
/// #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
/// enum Session {
///     Anonymous,
///     Verified,
/// }
///
/// let verified_only = Guard::new(|s: &Session| matches!(s, Session::Verified));
///
/// assert!(verified_only.check(&Session::Verified));
/// assert!(!verified_only.check(&Session::Anonymous));
/// ```
pub struct Guard<S: State> {
    predicate: Arc<dyn Fn(&S) -> bool + Send + Sync>,
    _phantom: PhantomData<S>,
}

impl<S: State> Guard<S> {
    /// Create a guard from a pure predicate function.
    ///
    /// The predicate must be deterministic and free of side effects, since
    /// `can_send` evaluates it speculatively.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&S) -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Arc::new(predicate),
            _phantom: PhantomData,
        }
    }

    /// Check if the guard allows leaving this state.
    pub fn check(&self, state: &S) -> bool {
        (self.predicate)(state)
    }
}

impl<S: State> Clone for Guard<S> {
    fn clone(&self) -> Self {
        Self {
            predicate: Arc::clone(&self.predicate),
            _phantom: PhantomData,
        }
    }
}

impl<S: State> fmt::Debug for Guard<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Guard(..)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Eq, Hash, Debug)]
    enum TestState {
        Initial,
        Processing,
        Complete,
        Failed,
    }

    #[test]
    fn guard_allows_matching_states() {
        let guard = Guard::new(|s: &TestState| matches!(s, TestState::Initial));

        assert!(guard.check(&TestState::Initial));
        assert!(!guard.check(&TestState::Processing));
    }

    #[test]
    fn guard_can_use_complex_predicates() {
        let guard =
            Guard::new(|s: &TestState| matches!(s, TestState::Initial | TestState::Processing));

        assert!(guard.check(&TestState::Initial));
        assert!(guard.check(&TestState::Processing));
        assert!(!guard.check(&TestState::Complete));
        assert!(!guard.check(&TestState::Failed));
    }

    #[test]
    fn guard_is_deterministic() {
        let guard = Guard::new(|s: &TestState| !matches!(s, TestState::Failed));

        let first = guard.check(&TestState::Processing);
        let second = guard.check(&TestState::Processing);

        assert_eq!(first, second);
    }

    #[test]
    fn cloned_guard_shares_predicate() {
        let guard = Guard::new(|s: &TestState| matches!(s, TestState::Complete));
        let cloned = guard.clone();

        assert!(cloned.check(&TestState::Complete));
        assert!(!cloned.check(&TestState::Initial));
    }

    #[test]
    fn debug_output_hides_predicate() {
        let guard = Guard::new(|_: &TestState| true);
        assert_eq!(format!("{guard:?}"), "Guard(..)");
    }
}
