//! Heuristics for selecting which variable to branch on next.

use crate::solver::{
    engine::VariableId,
    problem::{Domains, Problem},
    value::Value,
};

/// A strategy for choosing the next unassigned variable to branch on.
///
/// Implementations read the working `domains` map, which holds entries for
/// unassigned variables only; it is the authoritative view of the current
/// search node, not the problem's own (post-preprocessing) domain field.
/// Implementations must not mutate their inputs.
pub trait VariableSelectionHeuristic<V: Value> {
    /// Selects the next variable to be assigned.
    ///
    /// Returns `None` only when `domains` is empty (every variable is
    /// assigned).
    fn select_variable(&self, problem: &Problem<V>, domains: &Domains<V>) -> Option<VariableId>;
}

/// Selects the first unassigned variable in declaration order.
pub struct SelectFirst;

impl<V: Value> VariableSelectionHeuristic<V> for SelectFirst {
    fn select_variable(&self, problem: &Problem<V>, domains: &Domains<V>) -> Option<VariableId> {
        problem
            .variables
            .iter()
            .copied()
            .find(|variable| domains.contains_key(variable))
    }
}

/// The minimum-remaining-values (MRV) heuristic.
///
/// A fail-first strategy: branch on the unassigned variable with the fewest
/// admissible values left. Ties are broken by declaration order in
/// `problem.variables`, which keeps the search fully deterministic.
pub struct MinimumRemainingValues;

impl<V: Value> VariableSelectionHeuristic<V> for MinimumRemainingValues {
    fn select_variable(&self, problem: &Problem<V>, domains: &Domains<V>) -> Option<VariableId> {
        // min_by_key keeps the first of equal elements, so iterating in
        // declaration order gives the tie-break for free.
        problem
            .variables
            .iter()
            .copied()
            .filter(|variable| domains.contains_key(variable))
            .min_by_key(|variable| domains.get(variable).map_or(usize::MAX, im::OrdSet::len))
    }
}

/// Selects an unassigned variable uniformly at random.
///
/// Useful for randomized probing runs; the solver's deterministic ordering
/// contract only applies to the default MRV/LCV pair.
pub struct RandomVariable;

impl<V: Value> VariableSelectionHeuristic<V> for RandomVariable {
    fn select_variable(&self, problem: &Problem<V>, domains: &Domains<V>) -> Option<VariableId> {
        use rand::seq::IteratorRandom;

        problem
            .variables
            .iter()
            .copied()
            .filter(|variable| domains.contains_key(variable))
            .choose(&mut rand::thread_rng())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::solver::problem::Problem;

    fn problem_with(variables: Vec<VariableId>, domains: Domains<i32>) -> Problem<i32> {
        Problem::new(variables, domains, vec![]).unwrap()
    }

    #[test]
    fn mrv_picks_the_smallest_domain() {
        let domains = im::hashmap! {
            0 => im::ordset![1, 2, 3],
            1 => im::ordset![1, 2],
            2 => im::ordset![1, 2, 3, 4],
        };
        let problem = problem_with(vec![0, 1, 2], domains.clone());

        let selected = MinimumRemainingValues.select_variable(&problem, &domains);
        assert_eq!(selected, Some(1));
    }

    #[test]
    fn mrv_breaks_ties_by_declaration_order_not_id_order() {
        let domains = im::hashmap! {
            2 => im::ordset![1, 2],
            7 => im::ordset![3, 4],
        };
        // ?7 is declared before ?2.
        let problem = problem_with(vec![7, 2], domains.clone());

        for _ in 0..10 {
            let selected = MinimumRemainingValues.select_variable(&problem, &domains);
            assert_eq!(selected, Some(7));
        }
    }

    #[test]
    fn mrv_ignores_assigned_variables() {
        let problem = problem_with(
            vec![0, 1],
            im::hashmap! {
                0 => im::ordset![1],
                1 => im::ordset![1, 2],
            },
        );
        // ?0 was assigned and removed from the working domains.
        let working = im::hashmap! { 1 => im::ordset![1, 2] };

        let selected = MinimumRemainingValues.select_variable(&problem, &working);
        assert_eq!(selected, Some(1));
    }

    #[test]
    fn mrv_returns_none_when_everything_is_assigned() {
        let problem = problem_with(vec![0], im::hashmap! { 0 => im::ordset![1] });
        let working: Domains<i32> = im::HashMap::default();

        let selected = MinimumRemainingValues.select_variable(&problem, &working);
        assert_eq!(selected, None);
    }

    #[test]
    fn select_first_follows_declaration_order() {
        let domains = im::hashmap! {
            3 => im::ordset![1],
            5 => im::ordset![1, 2, 3],
        };
        let problem = problem_with(vec![5, 3], domains.clone());

        let selected = SelectFirst.select_variable(&problem, &domains);
        assert_eq!(selected, Some(5));
    }

    #[test]
    fn random_variable_picks_an_unassigned_variable() {
        let problem = problem_with(
            vec![0, 1, 2],
            im::hashmap! {
                0 => im::ordset![1],
                1 => im::ordset![1],
                2 => im::ordset![1],
            },
        );
        let working = im::hashmap! {
            1 => im::ordset![1],
            2 => im::ordset![1],
        };

        let selected = RandomVariable.select_variable(&problem, &working).unwrap();
        assert!(working.contains_key(&selected));
    }
}
