//! Transition table entries.

use crate::builder::{BuildError, TransitionBuilder};
use crate::core::{Guard, State};
use std::collections::HashSet;
use std::fmt;

/// Side-effecting action run when a transition commits.
pub type Handler = Box<dyn FnMut() + Send>;

/// One legal state change: any state in `from` may move to `to`.
///
/// Transitions are built once, handed to the machine, and never changed
/// afterwards. The consuming adapters (`named`, `with_handler`, ...) exist for
/// construction only.
///
/// Equality compares the source set and destination; name, handler and guard
/// do not take part.
pub struct Transition<S: State> {
    from: HashSet<S>,
    to: S,
    name: Option<String>,
    handler: Option<Handler>,
    guard: Option<Guard<S>>,
}

impl<S: State> Transition<S> {
    /// Transition with a single source state.
    ///
    /// ```rust
    /// use turnstile::Transition;
    ///
    /// let login = Transition::new("entry", "authentication").named("login");
    ///
    /// assert!(login.matches(&"entry", &"authentication"));
    /// assert_eq!(login.name(), Some("login"));
    /// ```
    pub fn new(from: S, to: S) -> Self {
        Self::with_sources(HashSet::from([from]), to)
    }

    /// Transition that may fire from any of the given states.
    ///
    /// Fails with [`BuildError::EmptySourceSet`] when `from` yields nothing.
    ///
    /// ```rust
    /// use turnstile::Transition;
    ///
    /// let logged_in = Transition::from_any(["authentication", "registration"], "main")?;
    /// assert!(logged_in.matches(&"registration", &"main"));
    ///
    /// let empty = Transition::from_any(Vec::<&str>::new(), "main");
    /// assert!(empty.is_err());
    /// # Ok::<(), turnstile::builder::BuildError>(())
    /// ```
    pub fn from_any<I>(from: I, to: S) -> Result<Self, BuildError>
    where
        I: IntoIterator<Item = S>,
    {
        let from: HashSet<S> = from.into_iter().collect();
        if from.is_empty() {
            return Err(BuildError::EmptySourceSet);
        }
        Ok(Self::with_sources(from, to))
    }

    /// Start a [`TransitionBuilder`].
    pub fn builder() -> TransitionBuilder<S> {
        TransitionBuilder::new()
    }

    /// Callers guarantee `from` is non-empty.
    pub(crate) fn with_sources(from: HashSet<S>, to: S) -> Self {
        debug_assert!(!from.is_empty());
        Self {
            from,
            to,
            name: None,
            handler: None,
            guard: None,
        }
    }

    /// Attach a diagnostic name.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Attach the action to run each time this transition commits.
    pub fn with_handler<F>(mut self, handler: F) -> Self
    where
        F: FnMut() + Send + 'static,
    {
        self.handler = Some(Box::new(handler));
        self
    }

    pub(crate) fn with_boxed_handler(mut self, handler: Option<Handler>) -> Self {
        self.handler = handler;
        self
    }

    /// Attach a guard evaluated after the structural match.
    pub fn with_guard(mut self, guard: Guard<S>) -> Self {
        self.guard = Some(guard);
        self
    }

    pub(crate) fn with_optional_guard(mut self, guard: Option<Guard<S>>) -> Self {
        self.guard = guard;
        self
    }

    /// Attach a guard built from a closure.
    pub fn when<F>(self, predicate: F) -> Self
    where
        F: Fn(&S) -> bool + Send + Sync + 'static,
    {
        self.with_guard(Guard::new(predicate))
    }

    /// States this transition may fire from.
    pub fn sources(&self) -> &HashSet<S> {
        &self.from
    }

    /// Destination state.
    pub fn to(&self) -> &S {
        &self.to
    }

    /// Name given with `named`, if any.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// True when a handler runs on commit.
    pub fn has_handler(&self) -> bool {
        self.handler.is_some()
    }

    /// Guard consulted after a structural match, if any.
    pub fn guard(&self) -> Option<&Guard<S>> {
        self.guard.as_ref()
    }

    /// True when this transition may fire from `current`, whatever the target.
    pub fn leaves(&self, current: &S) -> bool {
        self.from.contains(current)
    }

    /// True iff `current` is a source and `requested` is the destination.
    ///
    /// Purely structural: the guard is not consulted.
    pub fn matches(&self, current: &S, requested: &S) -> bool {
        self.leaves(current) && self.to == *requested
    }

    /// Guard verdict for `current`; always true without a guard.
    pub fn permits(&self, current: &S) -> bool {
        self.guard.as_ref().is_none_or(|g| g.check(current))
    }

    /// Run the handler. Only the machine calls this, once per commit.
    pub(crate) fn fire(&mut self) {
        if let Some(handler) = self.handler.as_mut() {
            handler();
        }
    }
}

impl<S: State> PartialEq for Transition<S> {
    fn eq(&self, other: &Self) -> bool {
        self.from == other.from && self.to == other.to
    }
}

impl<S: State> Eq for Transition<S> {}

impl<S: State> fmt::Debug for Transition<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transition")
            .field("name", &self.name)
            .field("from", &self.from)
            .field("to", &self.to)
            .field("handler", &self.handler.is_some())
            .field("guard", &self.guard.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
    enum TestState {
        Start,
        Middle,
        End,
    }

    #[test]
    fn matches_requires_source_and_destination() {
        let transition = Transition::new(TestState::Start, TestState::Middle);

        assert!(transition.matches(&TestState::Start, &TestState::Middle));
        assert!(!transition.matches(&TestState::Start, &TestState::End));
        assert!(!transition.matches(&TestState::Middle, &TestState::Middle));
    }

    #[test]
    fn from_any_accepts_every_source() {
        let transition =
            Transition::from_any([TestState::Start, TestState::Middle], TestState::End).unwrap();

        assert!(transition.matches(&TestState::Start, &TestState::End));
        assert!(transition.matches(&TestState::Middle, &TestState::End));
        assert!(!transition.leaves(&TestState::End));
    }

    #[test]
    fn from_any_rejects_empty_sources() {
        let result = Transition::from_any(Vec::new(), TestState::End);
        assert!(matches!(result, Err(BuildError::EmptySourceSet)));
    }

    #[test]
    fn equality_ignores_name_and_handler() {
        let plain = Transition::new(TestState::Start, TestState::Middle);
        let decorated = Transition::new(TestState::Start, TestState::Middle)
            .named("advance")
            .with_handler(|| {});
        let other = Transition::new(TestState::Start, TestState::End);

        assert_eq!(plain, decorated);
        assert_ne!(plain, other);
    }

    #[test]
    fn matches_ignores_guard() {
        let transition = Transition::new(TestState::Start, TestState::Middle).when(|_| false);

        assert!(transition.matches(&TestState::Start, &TestState::Middle));
        assert!(!transition.permits(&TestState::Start));
    }

    #[test]
    fn permits_without_guard() {
        let transition = Transition::new(TestState::Start, TestState::Middle);
        assert!(transition.permits(&TestState::Start));
    }

    #[test]
    fn fire_runs_handler_once_per_call() {
        let count = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&count);
        let mut transition = Transition::new(TestState::Start, TestState::Middle)
            .with_handler(move || {
                counter.fetch_add(1, Ordering::SeqCst);
            });

        assert_eq!(count.load(Ordering::SeqCst), 0);
        transition.fire();
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn fire_without_handler_is_noop() {
        let mut transition = Transition::new(TestState::Start, TestState::Middle);
        transition.fire();
        assert!(!transition.has_handler());
    }

    #[test]
    fn debug_lists_flags() {
        let transition = Transition::new(TestState::Start, TestState::End).named("finish");
        let debug = format!("{transition:?}");

        assert!(debug.contains("finish"));
        assert!(debug.contains("handler: false"));
    }
}
