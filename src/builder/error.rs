//! Build errors for state machine and transition builders.

use crate::validation::TableIssue;
use thiserror::Error;

/// Errors that can occur when building state machines and transitions.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error("Transition source state not specified. Call .from(state)")]
    MissingFromState,

    #[error("Transition target state not specified. Call .to(state)")]
    MissingToState,

    #[error("Transition source set is empty. A transition needs at least one source state")]
    EmptySourceSet,

    #[error("Transition table is ill-formed ({} issue(s))", .issues.len())]
    IllFormedTable { issues: Vec<TableIssue> },
}
