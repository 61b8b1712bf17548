//! State capability trait.
//!
//! The engine never inspects a state beyond comparing and hashing it, so the
//! trait carries no methods of its own.

use std::fmt::Debug;
use std::hash::Hash;

/// Trait for values that can act as machine states.
///
/// # Required Traits
///
/// - `Eq` + `Hash`: states are set members and map keys
/// - `Clone`: the machine hands owned copies to errors, history and observers
/// - `Debug`: states show up in log fields and error messages
///
/// Any type meeting those bounds is a `State`, so plain enums, integers and
/// string slices all work without an explicit impl.
///
/// # Example
///
/// ```rust
/// use turnstile::core::State;
///
/// #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
/// enum Route {
///     Entry,
///     Authentication,
///     Main,
/// }
///
/// fn accepts_state<S: State>(_state: S) {}
///
/// accepts_state(Route::Entry);
/// accepts_state("main");
/// accepts_state(7u8);
/// ```
pub trait State: Clone + Eq + Hash + Debug {}

impl<T> State for T where T: Clone + Eq + Hash + Debug {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[derive(Clone, PartialEq, Eq, Hash, Debug)]
    enum TestState {
        Initial,
        Processing,
        Complete,
    }

    fn collect<S: State>(states: &[S]) -> HashSet<S> {
        states.iter().cloned().collect()
    }

    #[test]
    fn enums_are_states() {
        let set = collect(&[
            TestState::Initial,
            TestState::Processing,
            TestState::Processing,
        ]);

        assert_eq!(set.len(), 2);
        assert!(set.contains(&TestState::Initial));
        assert!(!set.contains(&TestState::Complete));
    }

    #[test]
    fn primitives_are_states() {
        assert_eq!(collect(&[1u32, 2, 2, 3]).len(), 3);
        assert_eq!(collect(&["a", "b", "a"]).len(), 2);
    }

    #[test]
    fn payload_variants_compare_by_value() {
        #[derive(Clone, PartialEq, Eq, Hash, Debug)]
        enum Screen {
            Detail(u32),
        }

        let set = collect(&[Screen::Detail(1), Screen::Detail(1), Screen::Detail(2)]);
        assert_eq!(set.len(), 2);
    }
}
