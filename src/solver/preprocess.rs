use im::OrdSet;

use tracing::debug;

use crate::solver::{constraint::Constraint, problem::Problem, value::Value};

/// Enforces node consistency: narrows every unary-constrained domain to the
/// values satisfying its predicate, then drops all unary constraints from the
/// problem (the domains now encode them).
///
/// Returns `false` iff some domain became empty. Even then, every remaining
/// unary constraint is still applied first, so all domains reflect their own
/// unary constraints. The narrowing is a permanent normalization of the
/// problem, not a tentative search step, and is a fixed point: applying it
/// twice leaves the domains unchanged.
pub fn enforce_node_consistency<V: Value>(problem: &mut Problem<V>) -> bool {
    let mut solvable = true;
    let mut remaining = Vec::with_capacity(problem.constraints.len());

    for constraint in std::mem::take(&mut problem.constraints) {
        match constraint {
            Constraint::Unary(unary) => {
                let Some(current) = problem.domains.get(&unary.variable()) else {
                    // Unreachable for a validated problem.
                    solvable = false;
                    continue;
                };
                let narrowed: OrdSet<V> = current
                    .iter()
                    .filter(|value| unary.holds(value))
                    .cloned()
                    .collect();
                if narrowed.is_empty() {
                    debug!(variable = unary.variable(), "unary constraint emptied a domain");
                    solvable = false;
                }
                problem.domains.insert(unary.variable(), narrowed);
            }
            binary @ Constraint::Binary(_) => remaining.push(binary),
        }
    }

    problem.constraints = remaining;
    solvable
}
