use std::collections::HashMap;

use tracing::{debug, trace};

use crate::{
    error::Result,
    solver::{
        heuristics::{
            value::{LeastConstrainingValue, ValueOrderingHeuristic},
            variable::{MinimumRemainingValues, VariableSelectionHeuristic},
        },
        preprocess::enforce_node_consistency,
        problem::{Assignment, Domains, Problem},
        propagate::forward_check,
        value::Value,
    },
};

pub type VariableId = u32;
pub type ConstraintId = usize;

/// Per-constraint propagation counters, keyed by the constraint's index in
/// `Problem::constraints`.
#[derive(Debug, Clone, Default)]
pub struct PerConstraintStats {
    /// Times forward checking revised a domain through this constraint.
    pub checks: u64,
    /// Values removed from domains by this constraint.
    pub prunings: u64,
}

/// Counters gathered over one `solve` call.
#[derive(Debug, Clone, Default)]
pub struct SearchStats {
    /// Search nodes reached (one per committed partial assignment, the empty
    /// root included).
    pub nodes_visited: u64,
    /// Times the completeness predicate was evaluated. Equal to
    /// `nodes_visited` by construction, and zero when preprocessing already
    /// proved the problem unsatisfiable.
    pub completeness_checks: u64,
    /// Candidate values committed tentatively.
    pub values_tried: u64,
    /// Tentative commitments undone.
    pub backtracks: u64,
    pub constraint_stats: HashMap<ConstraintId, PerConstraintStats>,
}

/// The backtracking solver.
///
/// Composes node-consistency preprocessing, depth-first search over partial
/// assignments, and forward checking. Variable and value ordering are
/// pluggable; the default pairing is minimum-remaining-values with
/// least-constraining-value, which makes the search order (and therefore the
/// returned solution) fully deterministic.
pub struct SolverEngine<V: Value> {
    variable_heuristic: Box<dyn VariableSelectionHeuristic<V>>,
    value_heuristic: Box<dyn ValueOrderingHeuristic<V>>,
}

impl<V: Value> SolverEngine<V> {
    pub fn new(
        variable_heuristic: Box<dyn VariableSelectionHeuristic<V>>,
        value_heuristic: Box<dyn ValueOrderingHeuristic<V>>,
    ) -> Self {
        Self {
            variable_heuristic,
            value_heuristic,
        }
    }

    /// An engine with the MRV variable ordering and LCV value ordering.
    pub fn with_default_heuristics() -> Self {
        Self::new(
            Box::new(MinimumRemainingValues),
            Box::new(LeastConstrainingValue),
        )
    }

    /// Attempts to solve the given constraint satisfaction problem.
    ///
    /// The problem is validated first; a malformed problem (a constraint on
    /// an undeclared variable, say) is a producer bug and fails fast with an
    /// error. Node consistency is then enforced once, permanently narrowing
    /// the problem's domains and dropping its unary constraints. The search
    /// itself works on a copy of the narrowed domains, so when this returns
    /// `problem.domains` is exactly the post-preprocessing baseline.
    ///
    /// # Returns
    ///
    /// * `Ok((Some(assignment), stats))` — the first complete assignment
    ///   found under the configured ordering; it satisfies every original
    ///   constraint.
    /// * `Ok((None, stats))` — the problem is proven unsatisfiable.
    /// * `Err(error)` — the problem violated the producer contract.
    pub fn solve(&self, problem: &mut Problem<V>) -> Result<(Option<Assignment<V>>, SearchStats)> {
        problem.validate()?;

        let mut stats = SearchStats::default();
        if !enforce_node_consistency(problem) {
            debug!("node consistency emptied a domain; problem is unsatisfiable");
            return Ok((None, stats));
        }

        let mut domains = problem.domains.clone();
        let mut assignment = Assignment::default();
        let solution = self.search(problem, &mut assignment, &mut domains, &mut stats);

        match &solution {
            Some(_) => debug!(
                nodes = stats.nodes_visited,
                "search found a satisfying assignment"
            ),
            None => debug!(
                nodes = stats.nodes_visited,
                "search exhausted without a solution"
            ),
        }
        Ok((solution, stats))
    }

    fn search(
        &self,
        problem: &Problem<V>,
        assignment: &mut Assignment<V>,
        domains: &mut Domains<V>,
        stats: &mut SearchStats,
    ) -> Option<Assignment<V>> {
        stats.nodes_visited += 1;
        stats.completeness_checks += 1;
        if problem.is_complete(assignment) {
            return Some(assignment.clone());
        }

        let Some(variable) = self.variable_heuristic.select_variable(problem, domains) else {
            // Incomplete assignment with nothing left to branch on.
            return None;
        };

        for value in self.value_heuristic.order_values(problem, variable, domains) {
            stats.values_tried += 1;
            trace!(variable, ?value, "trying candidate");
            assignment.insert(variable, value.clone());

            if consistent_with_committed(problem, assignment, variable, &value) {
                let snapshot = domains.clone();
                domains.remove(&variable);
                if forward_check(problem, variable, &value, domains, stats) {
                    if let Some(found) = self.search(problem, assignment, domains, stats) {
                        return Some(found);
                    }
                }
                *domains = snapshot;
            }

            assignment.remove(&variable);
            stats.backtracks += 1;
        }

        None
    }
}

impl<V: Value> Default for SolverEngine<V> {
    fn default() -> Self {
        Self::with_default_heuristics()
    }
}

/// Checks `variable = value` against every binary constraint whose other side
/// is already committed.
///
/// Forward checking cannot see those constraints: an assigned neighbor has no
/// domain entry left to prune. This lighter check guards them instead.
fn consistent_with_committed<V: Value>(
    problem: &Problem<V>,
    assignment: &Assignment<V>,
    variable: VariableId,
    value: &V,
) -> bool {
    problem
        .binary_constraints_on(variable)
        .all(|binary| match assignment.get(&binary.other(variable)) {
            Some(other_value) => binary.holds_for(variable, value, other_value),
            None => true,
        })
}
