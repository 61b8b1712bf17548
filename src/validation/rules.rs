//! Table checks using Validation.

use crate::core::State;
use crate::engine::Transition;
use crate::validation::issues::TableIssue;
use std::collections::{HashMap, HashSet};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Run every table check, accumulating ALL issues.
/// Returns Validation::Success(()) when the table is clean.
pub fn validate_table<S: State>(
    transitions: &[Transition<S>],
) -> Validation<(), NonEmptyVec<TableIssue>> {
    let checks: Vec<Validation<(), NonEmptyVec<TableIssue>>> = shadowed(transitions)
        .into_iter()
        .chain(duplicate_names(transitions))
        .map(Validation::fail)
        .collect();

    Validation::all_vec(checks).map(|_| ())
}

/// For each transition, the source states already claimed for the same
/// destination by an earlier entry.
fn shadowed<S: State>(transitions: &[Transition<S>]) -> Vec<TableIssue> {
    let mut issues = Vec::new();

    for (index, later) in transitions.iter().enumerate() {
        let mut claimed: HashSet<&S> = HashSet::new();

        for (earlier_index, earlier) in transitions[..index].iter().enumerate() {
            if earlier.to() != later.to() {
                continue;
            }

            let mut states: Vec<String> = earlier
                .sources()
                .intersection(later.sources())
                .filter(|state| claimed.insert(*state))
                .map(|state| format!("{state:?}"))
                .collect();

            if states.is_empty() {
                continue;
            }
            states.sort();

            issues.push(TableIssue::ShadowedTransition {
                index,
                shadowed_by: earlier_index,
                to: format!("{:?}", later.to()),
                states,
            });
        }
    }

    issues
}

fn duplicate_names<S: State>(transitions: &[Transition<S>]) -> Vec<TableIssue> {
    let mut first_seen: HashMap<&str, usize> = HashMap::new();
    let mut issues = Vec::new();

    for (index, transition) in transitions.iter().enumerate() {
        let Some(name) = transition.name() else {
            continue;
        };
        match first_seen.get(name) {
            Some(&first) => issues.push(TableIssue::DuplicateName {
                name: name.to_string(),
                first,
                second: index,
            }),
            None => {
                first_seen.insert(name, index);
            }
        }
    }

    issues
}
