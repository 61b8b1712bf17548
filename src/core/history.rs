//! Committed transition history.
//!
//! Every successful `send` appends one record. The trail lives in memory only
//! and is meant for diagnostics and for observers that forward events.
//! Long-running machines cap it with [`StateHistory::with_limit`], which keeps
//! only the most recent records.

use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single committed transition.
///
/// # Example
///
/// ```rust
/// use turnstile::core::StateTransition;
/// use chrono::Utc;
///
/// let record = StateTransition {
///     from: "entry",
///     to: "authentication",
///     name: Some("login".to_string()),
///     timestamp: Utc::now(),
/// };
///
/// assert_eq!(record.name(), Some("login"));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StateTransition<S: State> {
    /// The state being left
    pub from: S,
    /// The state entered
    pub to: S,
    /// Name of the transition that fired, if it had one
    pub name: Option<String>,
    /// When the commit happened
    pub timestamp: DateTime<Utc>,
}

impl<S: State> StateTransition<S> {
    /// Build a record stamped with the current time.
    pub fn now(from: S, to: S, name: Option<&str>) -> Self {
        Self {
            from,
            to,
            name: name.map(str::to_owned),
            timestamp: Utc::now(),
        }
    }

    /// Name of the transition that fired.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

/// Ordered history of committed transitions.
///
/// `record` is pure and returns a new history; the machine itself appends in
/// place.
///
/// # Example
///
/// ```rust
/// use turnstile::core::{StateHistory, StateTransition};
///
/// let history = StateHistory::new()
///     .record(StateTransition::now("entry", "authentication", Some("login")))
///     .record(StateTransition::now("authentication", "main", None));
///
/// assert_eq!(history.get_path(), vec![&"entry", &"authentication", &"main"]);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StateHistory<S: State> {
    transitions: Vec<StateTransition<S>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    limit: Option<usize>,
}

impl<S: State> Default for StateHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> StateHistory<S> {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
            limit: None,
        }
    }

    /// Create an empty history that keeps at most `limit` records.
    ///
    /// Once full, each new record evicts the oldest one. A limit of zero
    /// records nothing.
    ///
    /// ```rust
    /// use turnstile::core::{StateHistory, StateTransition};
    ///
    /// let history = StateHistory::with_limit(2)
    ///     .record(StateTransition::now(1u8, 2u8, None))
    ///     .record(StateTransition::now(2u8, 3u8, None))
    ///     .record(StateTransition::now(3u8, 4u8, None));
    ///
    /// assert_eq!(history.len(), 2);
    /// assert_eq!(history.get_path(), vec![&2, &3, &4]);
    /// ```
    pub fn with_limit(limit: usize) -> Self {
        Self {
            transitions: Vec::with_capacity(limit.min(64)),
            limit: Some(limit),
        }
    }

    /// Maximum number of records kept, if bounded.
    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// Record a transition, returning a new history.
    ///
    /// The existing history is left untouched.
    ///
    /// ```rust
    /// use turnstile::core::{StateHistory, StateTransition};
    ///
    /// let history = StateHistory::new();
    /// let new_history = history.record(StateTransition::now(1u8, 2u8, None));
    ///
    /// assert_eq!(new_history.len(), 1);
    /// assert!(history.is_empty());
    /// ```
    pub fn record(&self, transition: StateTransition<S>) -> Self {
        let mut history = self.clone();
        history.push(transition);
        history
    }

    /// Append in place, evicting the oldest records beyond the limit.
    pub(crate) fn push(&mut self, transition: StateTransition<S>) {
        self.transitions.push(transition);
        if let Some(limit) = self.limit {
            let excess = self.transitions.len().saturating_sub(limit);
            if excess > 0 {
                self.transitions.drain(..excess);
            }
        }
    }

    /// Drop every record, keeping the limit.
    pub fn clear(&mut self) {
        self.transitions.clear();
    }

    /// Get the path of states traversed.
    ///
    /// The `from` of the first record followed by the `to` of each record.
    /// Empty when nothing has been committed.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::with_capacity(self.transitions.len() + 1);
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Time between the first and last commit.
    ///
    /// Returns `None` for an empty history.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.transitions.first()?, self.transitions.last()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }

    /// Most recent commit.
    pub fn last(&self) -> Option<&StateTransition<S>> {
        self.transitions.last()
    }

    /// Get all transitions in commit order.
    pub fn transitions(&self) -> &[StateTransition<S>] {
        &self.transitions
    }

    /// Number of records currently held.
    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    /// True when nothing has been recorded (or everything was evicted).
    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
    enum TestState {
        Initial,
        Processing,
        Complete,
    }

    fn record(from: TestState, to: TestState, timestamp: DateTime<Utc>) -> StateTransition<TestState> {
        StateTransition {
            from,
            to,
            name: None,
            timestamp,
        }
    }

    #[test]
    fn new_history_is_empty() {
        let history: StateHistory<TestState> = StateHistory::new();
        assert!(history.is_empty());
        assert!(history.get_path().is_empty());
        assert!(history.duration().is_none());
        assert!(history.last().is_none());
    }

    #[test]
    fn record_is_immutable() {
        let history = StateHistory::new();
        let new_history =
            history.record(record(TestState::Initial, TestState::Processing, Utc::now()));

        assert_eq!(history.len(), 0);
        assert_eq!(new_history.len(), 1);
    }

    #[test]
    fn push_appends_in_place() {
        let mut history = StateHistory::new();
        history.push(StateTransition::now(
            TestState::Initial,
            TestState::Processing,
            Some("start"),
        ));

        assert_eq!(history.len(), 1);
        assert_eq!(history.last().and_then(StateTransition::name), Some("start"));
    }

    #[test]
    fn limit_evicts_oldest_records() {
        let mut history = StateHistory::with_limit(3);
        for step in 0..10u8 {
            history.push(StateTransition::now(step, step + 1, None));
            assert!(history.len() <= 3);
        }

        assert_eq!(history.len(), 3);
        assert_eq!(history.limit(), Some(3));
        assert_eq!(history.get_path(), vec![&7, &8, &9, &10]);
    }

    #[test]
    fn zero_limit_records_nothing() {
        let mut history = StateHistory::with_limit(0);
        history.push(StateTransition::now(TestState::Initial, TestState::Processing, None));

        assert!(history.is_empty());
        assert!(history.get_path().is_empty());
    }

    #[test]
    fn clear_keeps_limit() {
        let mut history = StateHistory::with_limit(2);
        history.push(StateTransition::now(TestState::Initial, TestState::Processing, None));
        history.clear();

        assert!(history.is_empty());
        assert_eq!(history.limit(), Some(2));
    }

    #[test]
    fn get_path_returns_state_sequence() {
        let history = StateHistory::new()
            .record(record(TestState::Initial, TestState::Processing, Utc::now()))
            .record(record(TestState::Processing, TestState::Complete, Utc::now()));

        let path = history.get_path();
        assert_eq!(
            path,
            vec![
                &TestState::Initial,
                &TestState::Processing,
                &TestState::Complete
            ]
        );
    }

    #[test]
    fn duration_spans_first_to_last() {
        let start = Utc::now();
        let history = StateHistory::new()
            .record(record(TestState::Initial, TestState::Processing, start))
            .record(record(
                TestState::Processing,
                TestState::Complete,
                start + chrono::Duration::milliseconds(250),
            ));

        assert_eq!(history.duration(), Some(Duration::from_millis(250)));
    }

    #[test]
    fn single_transition_has_duration_zero() {
        let history =
            StateHistory::new().record(record(TestState::Initial, TestState::Processing, Utc::now()));

        assert_eq!(history.duration(), Some(Duration::from_secs(0)));
    }

    #[test]
    fn history_serializes_correctly() {
        let history = StateHistory::new().record(StateTransition::now(
            TestState::Initial,
            TestState::Processing,
            Some("start"),
        ));

        let json = serde_json::to_string(&history).unwrap();
        let deserialized: StateHistory<TestState> = serde_json::from_str(&json).unwrap();

        assert_eq!(history.transitions(), deserialized.transitions());
        assert_eq!(deserialized.limit(), None);
    }

    #[test]
    fn bounded_history_keeps_limit_through_serde() {
        let history = StateHistory::with_limit(4)
            .record(StateTransition::now(TestState::Initial, TestState::Processing, None));

        let json = serde_json::to_string(&history).unwrap();
        let deserialized: StateHistory<TestState> = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized.limit(), Some(4));
        assert_eq!(deserialized.len(), 1);
    }
}
