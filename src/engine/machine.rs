//! The transition engine.

use crate::core::{State, StateHistory, StateTransition};
use crate::engine::error::TransitionError;
use crate::engine::transition::Transition;
use crate::observer::TransitionObserver;
use std::collections::{HashMap, HashSet};
use std::fmt;
use tracing::{debug, trace};

/// Holds the current state and mediates every change through its table.
///
/// `send` takes `&mut self`, so one machine can never be driven from two
/// places at once. The machine is `Send` (given `S: Send`) but not `Sync`;
/// owners that share it across threads wrap it in a `Mutex`.
pub struct StateMachine<S: State> {
    current: S,
    transitions: Vec<Transition<S>>,
    observers: Vec<Box<dyn TransitionObserver<S> + Send>>,
    history: StateHistory<S>,
}

impl<S: State> StateMachine<S> {
    /// Create a machine in `initial` with a fixed transition table.
    ///
    /// The table is taken as-is: an empty table yields a machine whose every
    /// request is rejected, and overlapping entries resolve to the first one
    /// declared.
    pub fn new(initial: S, transitions: Vec<Transition<S>>) -> Self {
        trace!(initial = ?initial, transitions = transitions.len(), "state machine created");
        Self {
            current: initial,
            transitions,
            observers: Vec::new(),
            history: StateHistory::new(),
        }
    }

    /// Create a machine from adjacency pairs of `state -> allowed destinations`.
    ///
    /// One unnamed transition is produced per destination, sourced from every
    /// state that lists it. Transitions are ordered by the first time their
    /// destination appears in the input, so `destinations()` follows the input
    /// order. A state paired with no destinations is a dead end.
    ///
    /// Any `IntoIterator` of pairs is accepted. A `HashMap` works, but its own
    /// iteration order then decides the table order; pass a `Vec` or array
    /// when that order matters.
    ///
    /// ```rust
    /// use turnstile::StateMachine;
    ///
    /// let mut machine = StateMachine::from_adjacency(
    ///     "authentication",
    ///     [("authentication", vec!["main", "registration"]), ("main", vec![])],
    /// );
    ///
    /// assert_eq!(machine.destinations(), vec![&"main", &"registration"]);
    /// assert!(machine.send("main").is_ok());
    /// assert!(machine.send("authentication").unwrap_err().is_invalid_current_state());
    /// ```
    pub fn from_adjacency<I, D>(initial: S, adjacency: I) -> Self
    where
        I: IntoIterator<Item = (S, D)>,
        D: IntoIterator<Item = S>,
    {
        let mut order: Vec<S> = Vec::new();
        let mut sources_by_destination: HashMap<S, HashSet<S>> = HashMap::new();
        for (from, destinations) in adjacency {
            for to in destinations {
                sources_by_destination
                    .entry(to)
                    .or_insert_with_key(|to| {
                        order.push(to.clone());
                        HashSet::new()
                    })
                    .insert(from.clone());
            }
        }

        let transitions = order
            .into_iter()
            .filter_map(|to| {
                let from = sources_by_destination.remove(&to)?;
                Some(Transition::with_sources(from, to))
            })
            .collect();

        Self::new(initial, transitions)
    }

    /// Keep only the most recent `limit` commits in the history.
    ///
    /// Records already held beyond the limit are dropped, oldest first.
    pub fn with_history_limit(mut self, limit: usize) -> Self {
        let previous = std::mem::take(&mut self.history);
        self.history = StateHistory::with_limit(limit);
        for record in previous.transitions() {
            self.history.push(record.clone());
        }
        self
    }

    /// Get current state.
    pub fn current_state(&self) -> &S {
        &self.current
    }

    /// The table in declaration order.
    pub fn transitions(&self) -> &[Transition<S>] {
        &self.transitions
    }

    /// Committed transitions, oldest first; bounded if a limit was set.
    pub fn history(&self) -> &StateHistory<S> {
        &self.history
    }

    /// Hand the recorded history to the caller and start a fresh one with
    /// the same limit.
    pub fn take_history(&mut self) -> StateHistory<S> {
        let fresh = match self.history.limit() {
            Some(limit) => StateHistory::with_limit(limit),
            None => StateHistory::new(),
        };
        std::mem::replace(&mut self.history, fresh)
    }

    /// Register an observer; it is notified after every later commit.
    pub fn add_observer<O>(&mut self, observer: O)
    where
        O: TransitionObserver<S> + Send + 'static,
    {
        self.add_boxed_observer(Box::new(observer));
    }

    pub(crate) fn add_boxed_observer(&mut self, observer: Box<dyn TransitionObserver<S> + Send>) {
        self.observers.push(observer);
        trace!(observers = self.observers.len(), "observer registered");
    }

    /// Destinations reachable in one step, in declaration order, without
    /// duplicates. Guards are not evaluated.
    pub fn destinations(&self) -> Vec<&S> {
        let mut seen = HashSet::new();
        self.transitions
            .iter()
            .filter(|t| t.leaves(&self.current))
            .map(Transition::to)
            .filter(|to| seen.insert(*to))
            .collect()
    }

    /// True when no transition leaves the current state.
    pub fn is_dead_end(&self) -> bool {
        !self.transitions.iter().any(|t| t.leaves(&self.current))
    }

    /// Whether `send(requested)` would commit right now. Side-effect free.
    pub fn can_send(&self, requested: &S) -> bool {
        self.resolve(requested).is_ok()
    }

    /// Request a move to `requested`.
    ///
    /// The first transition in declaration order that leaves the current state
    /// and targets `requested` is chosen. If it has a guard, the guard must
    /// accept the current state. On success the current state is updated and
    /// the commit is recorded, then the transition's handler runs, then every
    /// observer is notified; the matched transition is returned.
    ///
    /// On failure nothing changes and no handler or observer runs. A table
    /// without guards only ever yields `InvalidCurrentState` or
    /// `InvalidTransition`; `GuardRejected` needs a guarded entry.
    ///
    /// A panicking handler or observer unwinds through this call after the
    /// state change has already been committed: the current state is the
    /// destination, the history holds the record, and observers not yet
    /// reached are skipped.
    pub fn send(&mut self, requested: S) -> Result<&Transition<S>, TransitionError<S>> {
        let index = match self.resolve(&requested) {
            Ok(index) => index,
            Err(error) => {
                debug!(
                    current = ?self.current,
                    requested = ?requested,
                    kind = error.kind(),
                    "transition rejected"
                );
                return Err(error);
            }
        };

        let transition = &mut self.transitions[index];
        let from = std::mem::replace(&mut self.current, transition.to().clone());

        debug!(
            from = ?from,
            to = ?self.current,
            transition = transition.name().unwrap_or("<unnamed>"),
            "transition committed"
        );

        self.history.push(StateTransition::now(
            from.clone(),
            self.current.clone(),
            transition.name(),
        ));

        transition.fire();
        for observer in &mut self.observers {
            observer.on_transitioned(&from, &self.current, transition.name());
        }

        Ok(&self.transitions[index])
    }

    /// Index of the transition that would commit for `requested`.
    fn resolve(&self, requested: &S) -> Result<usize, TransitionError<S>> {
        let mut leaves_current = false;

        for (index, transition) in self.transitions.iter().enumerate() {
            if !transition.leaves(&self.current) {
                continue;
            }
            leaves_current = true;

            if transition.to() != requested {
                continue;
            }

            if !transition.permits(&self.current) {
                return Err(TransitionError::GuardRejected {
                    from: self.current.clone(),
                    to: requested.clone(),
                    name: transition.name().map(str::to_owned),
                });
            }
            return Ok(index);
        }

        if leaves_current {
            Err(TransitionError::InvalidTransition {
                from: self.current.clone(),
                to: requested.clone(),
            })
        } else {
            Err(TransitionError::InvalidCurrentState {
                current: self.current.clone(),
            })
        }
    }
}

impl<S: State> fmt::Debug for StateMachine<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateMachine")
            .field("current", &self.current)
            .field("transitions", &self.transitions)
            .field("observers", &self.observers.len())
            .field("history", &self.history.len())
            .finish()
    }
}
