//! Builder for constructing state machines.

use crate::builder::error::BuildError;
use crate::builder::transition::TransitionBuilder;
use crate::core::State;
use crate::engine::{StateMachine, Transition};
use crate::observer::TransitionObserver;
use crate::validation::TableReport;
use tracing::warn;

/// Builder for constructing state machines with a fluent API.
///
/// By default the table is accepted as given, exactly like
/// [`StateMachine::new`]. Call `.strict(true)` to have `build` reject tables
/// with shadowed transitions or duplicate names.
pub struct StateMachineBuilder<S: State + 'static> {
    initial: Option<S>,
    transitions: Vec<Transition<S>>,
    observers: Vec<Box<dyn TransitionObserver<S> + Send>>,
    history_limit: Option<usize>,
    strict: bool,
}

impl<S: State + 'static> StateMachineBuilder<S> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            initial: None,
            transitions: Vec::new(),
            observers: Vec::new(),
            history_limit: None,
            strict: false,
        }
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: S) -> Self {
        self.initial = Some(state);
        self
    }

    /// Add a transition using a builder.
    /// Returns an error if the builder fails validation.
    pub fn transition(mut self, builder: TransitionBuilder<S>) -> Result<Self, BuildError> {
        let transition = builder.build()?;
        self.transitions.push(transition);
        Ok(self)
    }

    /// Add a pre-built transition.
    pub fn add_transition(mut self, transition: Transition<S>) -> Self {
        self.transitions.push(transition);
        self
    }

    /// Add multiple transitions at once, keeping their order.
    pub fn transitions(mut self, transitions: Vec<Transition<S>>) -> Self {
        self.transitions.extend(transitions);
        self
    }

    /// Register an observer notified after every commit.
    pub fn observer<O>(mut self, observer: O) -> Self
    where
        O: TransitionObserver<S> + Send + 'static,
    {
        self.observers.push(Box::new(observer));
        self
    }

    /// Keep only the most recent `limit` commits in the machine's history.
    ///
    /// Unbounded by default.
    pub fn history_limit(mut self, limit: usize) -> Self {
        self.history_limit = Some(limit);
        self
    }

    /// Reject ill-formed tables at build time.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Build the state machine.
    /// Returns an error if the initial state is missing, or if strict mode
    /// is on and the table has issues.
    pub fn build(self) -> Result<StateMachine<S>, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;

        if self.strict {
            let report = TableReport::of(&self.transitions);
            if !report.is_clean() {
                warn!(
                    issues = report.issues().len(),
                    "rejecting ill-formed transition table"
                );
                return Err(BuildError::IllFormedTable {
                    issues: report.into_issues(),
                });
            }
        }

        let mut machine = StateMachine::new(initial, self.transitions);
        if let Some(limit) = self.history_limit {
            machine = machine.with_history_limit(limit);
        }
        for observer in self.observers {
            machine.add_boxed_observer(observer);
        }

        Ok(machine)
    }
}

impl<S: State + 'static> Default for StateMachineBuilder<S> {
    fn default() -> Self {
        Self::new()
    }
}
