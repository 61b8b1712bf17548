//! Opt-in diagnostics for transition tables.
//!
//! The machine accepts any table: overlapping entries simply resolve to the
//! first one declared. That keeps construction total, but it also hides
//! mistakes. This module finds them using Stillwater's `Validation`, which
//! collects every issue in one pass instead of stopping at the first.
//!
//! # Example
//!
//! ```rust
//! use turnstile::validation::{TableIssue, TableReport};
//! use turnstile::Transition;
//!
//! let table = vec![
//!     Transition::new("entry", "main").named("skip"),
//!     Transition::from_any(["entry", "registration"], "main")?.named("skip"),
//! ];
//!
//! let report = TableReport::of(&table);
//! assert!(!report.is_clean());
//! assert_eq!(report.issues().len(), 2);
//! assert!(matches!(report.issues()[0], TableIssue::ShadowedTransition { index: 1, .. }));
//! # Ok::<(), turnstile::builder::BuildError>(())
//! ```

pub mod issues;
pub mod rules;

pub use issues::TableIssue;
pub use rules::validate_table;

use crate::core::State;
use crate::engine::Transition;
use stillwater::validation::Validation;

/// Every issue found in a table, in check order: shadowing first, then names.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TableReport {
    issues: Vec<TableIssue>,
}

impl TableReport {
    /// Check a table.
    pub fn of<S: State>(transitions: &[Transition<S>]) -> Self {
        let issues = match validate_table(transitions) {
            Validation::Success(_) => Vec::new(),
            Validation::Failure(errors) => errors.iter().cloned().collect(),
        };
        Self { issues }
    }

    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn issues(&self) -> &[TableIssue] {
        &self.issues
    }

    pub fn into_issues(self) -> Vec<TableIssue> {
        self.issues
    }
}
