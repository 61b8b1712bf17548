//! Builder API for ergonomic state machine construction.
//!
//! This module provides fluent builders and macros for creating state machines
//! with minimal boilerplate. Builders are also where table policy is
//! configured (see [`StateMachineBuilder::strict`]).

pub mod error;
pub mod machine;
pub mod macros;
pub mod transition;

pub use error::BuildError;
pub use machine::StateMachineBuilder;
pub use transition::TransitionBuilder;

use crate::core::State;
use crate::engine::Transition;

/// Create an unnamed, handler-free transition between two states.
///
/// # Example
///
/// ```
/// use turnstile::builder::simple_transition;
///
/// let transition = simple_transition("red", "green");
/// assert!(transition.matches(&"red", &"green"));
/// ```
pub fn simple_transition<S: State>(from: S, to: S) -> Transition<S> {
    Transition::new(from, to)
}

/// Create a named transition from any of `sources` to `to`.
///
/// # Example
///
/// ```
/// use turnstile::builder::named_transition;
///
/// let login = named_transition("login", ["entry", "registration"], "authentication")?;
/// assert_eq!(login.name(), Some("login"));
/// # Ok::<(), turnstile::builder::BuildError>(())
/// ```
pub fn named_transition<S, I>(
    name: impl Into<String>,
    sources: I,
    to: S,
) -> Result<Transition<S>, BuildError>
where
    S: State,
    I: IntoIterator<Item = S>,
{
    Ok(Transition::from_any(sources, to)?.named(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
    enum TestState {
        Start,
        Middle,
        End,
    }

    #[test]
    fn simple_transition_builds() {
        let transition = simple_transition(TestState::Start, TestState::Middle);

        assert_eq!(transition.to(), &TestState::Middle);
        assert!(transition.leaves(&TestState::Start));
        assert!(transition.name().is_none());
        assert!(!transition.has_handler());
    }

    #[test]
    fn named_transition_builds() {
        let transition =
            named_transition("finish", [TestState::Start, TestState::Middle], TestState::End)
                .unwrap();

        assert_eq!(transition.name(), Some("finish"));
        assert!(transition.matches(&TestState::Middle, &TestState::End));
    }

    #[test]
    fn named_transition_rejects_empty_sources() {
        let result = named_transition("nowhere", [], TestState::End);
        assert!(matches!(result, Err(BuildError::EmptySourceSet)));
    }
}
