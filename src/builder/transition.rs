//! Builder for constructing transitions.

use crate::builder::error::BuildError;
use crate::core::{Guard, State};
use crate::engine::{Handler, Transition};
use std::collections::HashSet;

/// Builder for constructing transitions with a fluent API.
///
/// ```rust
/// use turnstile::builder::TransitionBuilder;
///
/// let logged_in = TransitionBuilder::new()
///     .named("loggedIn")
///     .from("authentication")
///     .from("registration")
///     .to("main")
///     .handler(|| println!("welcome"))
///     .build()?;
///
/// assert!(logged_in.matches(&"registration", &"main"));
/// # Ok::<(), turnstile::builder::BuildError>(())
/// ```
pub struct TransitionBuilder<S: State> {
    from: HashSet<S>,
    to: Option<S>,
    name: Option<String>,
    guard: Option<Guard<S>>,
    handler: Option<Handler>,
}

impl<S: State> TransitionBuilder<S> {
    /// Create a new transition builder.
    pub fn new() -> Self {
        Self {
            from: HashSet::new(),
            to: None,
            name: None,
            guard: None,
            handler: None,
        }
    }

    /// Add a source state. May be called repeatedly.
    pub fn from(mut self, state: S) -> Self {
        self.from.insert(state);
        self
    }

    /// Add several source states at once.
    pub fn from_any<I>(mut self, states: I) -> Self
    where
        I: IntoIterator<Item = S>,
    {
        self.from.extend(states);
        self
    }

    /// Set the target state (required).
    pub fn to(mut self, state: S) -> Self {
        self.to = Some(state);
        self
    }

    /// Set a diagnostic name (optional).
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Add a guard predicate (optional).
    pub fn guard(mut self, guard: Guard<S>) -> Self {
        self.guard = Some(guard);
        self
    }

    /// Add a guard using a closure (optional).
    pub fn when<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&S) -> bool + Send + Sync + 'static,
    {
        self.guard = Some(Guard::new(predicate));
        self
    }

    /// Set the handler run on each commit (optional).
    pub fn handler<F>(mut self, handler: F) -> Self
    where
        F: FnMut() + Send + 'static,
    {
        self.handler = Some(Box::new(handler));
        self
    }

    /// Build the transition.
    pub fn build(self) -> Result<Transition<S>, BuildError> {
        if self.from.is_empty() {
            return Err(BuildError::MissingFromState);
        }
        let to = self.to.ok_or(BuildError::MissingToState)?;

        let transition = Transition::with_sources(self.from, to)
            .with_boxed_handler(self.handler)
            .with_optional_guard(self.guard);

        Ok(match self.name {
            Some(name) => transition.named(name),
            None => transition,
        })
    }
}

impl<S: State> Default for TransitionBuilder<S> {
    fn default() -> Self {
        Self::new()
    }
}
