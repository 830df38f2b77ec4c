//! Heuristics for ordering the candidate values of a chosen variable.

use crate::solver::{
    engine::VariableId,
    problem::{Domains, Problem},
    value::Value,
};

/// A strategy for deciding the order in which a variable's candidate values
/// are tried.
///
/// Implementations read `domains` (the working map, unassigned variables
/// only) and must not mutate it or the problem.
pub trait ValueOrderingHeuristic<V: Value> {
    /// Returns `variable`'s candidate values in the order they should be
    /// tried. Empty when the variable has no domain entry.
    fn order_values(
        &self,
        problem: &Problem<V>,
        variable: VariableId,
        domains: &Domains<V>,
    ) -> Vec<V>;
}

/// Returns values in ascending natural order.
pub struct IdentityOrder;

impl<V: Value> ValueOrderingHeuristic<V> for IdentityOrder {
    fn order_values(
        &self,
        _problem: &Problem<V>,
        variable: VariableId,
        domains: &Domains<V>,
    ) -> Vec<V> {
        domains
            .get(&variable)
            .map(|domain| domain.iter().cloned().collect())
            .unwrap_or_default()
    }
}

/// The least-constraining-value (LCV) heuristic.
///
/// Each candidate value is scored by the number of (constraint, neighbor,
/// neighbor-value) combinations it would rule out: for every binary
/// constraint on `variable` whose other side is still unassigned, every
/// incompatible value in the neighbor's remaining domain counts as one
/// conflict. Values are tried in ascending conflict order, ties in ascending
/// natural order.
///
/// Scoring enumerates every candidate against every remaining neighbor value,
/// so one call is quadratic in domain size.
pub struct LeastConstrainingValue;

impl<V: Value> ValueOrderingHeuristic<V> for LeastConstrainingValue {
    fn order_values(
        &self,
        problem: &Problem<V>,
        variable: VariableId,
        domains: &Domains<V>,
    ) -> Vec<V> {
        let Some(candidates) = domains.get(&variable) else {
            return Vec::new();
        };

        let mut scored: Vec<(usize, V)> = candidates
            .iter()
            .map(|value| {
                let mut conflicts = 0;
                for binary in problem.binary_constraints_on(variable) {
                    let other = binary.other(variable);
                    let Some(other_domain) = domains.get(&other) else {
                        continue;
                    };
                    conflicts += other_domain
                        .iter()
                        .filter(|other_value| !binary.holds_for(variable, value, other_value))
                        .count();
                }
                (conflicts, value.clone())
            })
            .collect();

        scored.sort();
        scored.into_iter().map(|(_, value)| value).collect()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::solver::{constraints::not_equal, problem::Problem};

    #[test]
    fn lcv_prefers_the_value_with_fewest_conflicts() {
        let domains = im::hashmap! {
            0 => im::ordset![1, 2],
            1 => im::ordset![1],
        };
        let problem = Problem::new(vec![0, 1], domains.clone(), vec![not_equal(0, 1)]).unwrap();

        // ?0 = 1 knocks out ?1's only value; ?0 = 2 conflicts with nothing.
        let ordered = LeastConstrainingValue.order_values(&problem, 0, &domains);
        assert_eq!(ordered, vec![2, 1]);
    }

    #[test]
    fn lcv_breaks_ties_in_ascending_natural_order() {
        let domains = im::hashmap! {
            0 => im::ordset![3, 1, 2],
            1 => im::ordset![1, 2, 3],
        };
        // Every value of ?0 conflicts with exactly one value of ?1.
        let problem = Problem::new(vec![0, 1], domains.clone(), vec![not_equal(0, 1)]).unwrap();

        let ordered = LeastConstrainingValue.order_values(&problem, 0, &domains);
        assert_eq!(ordered, vec![1, 2, 3]);
    }

    #[test]
    fn lcv_ignores_assigned_neighbors() {
        let problem = Problem::new(
            vec![0, 1],
            im::hashmap! {
                0 => im::ordset![1, 2],
                1 => im::ordset![1, 2],
            },
            vec![not_equal(0, 1)],
        )
        .unwrap();

        // ?1 is assigned (absent from the working domains): it carries no
        // remaining domain, so it contributes no conflicts.
        let working = im::hashmap! { 0 => im::ordset![1, 2] };
        let ordered = LeastConstrainingValue.order_values(&problem, 0, &working);
        assert_eq!(ordered, vec![1, 2]);
    }

    #[test]
    fn lcv_does_not_mutate_the_domains() {
        let domains = im::hashmap! {
            0 => im::ordset![1, 2],
            1 => im::ordset![1, 2],
        };
        let problem = Problem::new(vec![0, 1], domains.clone(), vec![not_equal(0, 1)]).unwrap();

        let before = domains.clone();
        let _ = LeastConstrainingValue.order_values(&problem, 0, &domains);
        assert_eq!(domains, before);
    }

    #[test]
    fn identity_order_is_ascending() {
        let domains = im::hashmap! { 0 => im::ordset![3, 1, 2] };
        let problem = Problem::new(vec![0], domains.clone(), vec![]).unwrap();

        let ordered = IdentityOrder.order_values(&problem, 0, &domains);
        assert_eq!(ordered, vec![1, 2, 3]);
    }
}
