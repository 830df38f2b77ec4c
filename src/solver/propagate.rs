use im::OrdSet;

use tracing::trace;

use crate::solver::{
    constraint::Constraint,
    engine::{SearchStats, VariableId},
    problem::{Domains, Problem},
    value::Value,
};

/// Forward checking: propagates a tentative `assigned_variable = assigned_value`
/// through every binary constraint mentioning the assigned variable.
///
/// Each neighbor that still has an entry in `domains` (i.e. is unassigned) has
/// its domain narrowed to the values compatible with the assigned value; the
/// predicate is applied in the constraint's declared argument order. Neighbors
/// with no domain entry are already assigned and are skipped.
///
/// Returns `false` as soon as a narrowed domain becomes empty. Prunes made
/// before the failure are *not* rolled back here; the caller snapshots
/// `domains` before calling and restores it on failure.
pub fn forward_check<V: Value>(
    problem: &Problem<V>,
    assigned_variable: VariableId,
    assigned_value: &V,
    domains: &mut Domains<V>,
    stats: &mut SearchStats,
) -> bool {
    for (constraint_id, constraint) in problem.constraints.iter().enumerate() {
        let Constraint::Binary(binary) = constraint else {
            continue;
        };
        if !binary.involves(assigned_variable) {
            continue;
        }
        let other = binary.other(assigned_variable);
        let Some(other_domain) = domains.get(&other) else {
            continue;
        };

        let before = other_domain.len();
        let narrowed: OrdSet<V> = other_domain
            .iter()
            .filter(|value| binary.holds_for(assigned_variable, assigned_value, value))
            .cloned()
            .collect();

        let per_constraint = stats.constraint_stats.entry(constraint_id).or_default();
        per_constraint.checks += 1;
        per_constraint.prunings += (before - narrowed.len()) as u64;

        if narrowed.is_empty() {
            trace!(variable = other, "forward checking emptied a domain");
            return false;
        }
        domains.insert(other, narrowed);
    }
    true
}
