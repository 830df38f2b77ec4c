use im::OrdSet;

use crate::solver::{
    constraint::{Constraint, UnaryConstraint},
    engine::VariableId,
    value::Value,
};

/// The variable's value must come from `allowed`.
pub fn member_of<V: Value>(variable: VariableId, allowed: OrdSet<V>) -> Constraint<V> {
    Constraint::Unary(
        UnaryConstraint::new(variable, move |value| allowed.contains(value)).named("member-of"),
    )
}

/// The variable must not take the value `forbidden`.
pub fn excludes<V: Value>(variable: VariableId, forbidden: V) -> Constraint<V> {
    Constraint::Unary(
        UnaryConstraint::new(variable, move |value| *value != forbidden).named("excludes"),
    )
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::solver::{preprocess::enforce_node_consistency, problem::Problem};

    #[test]
    fn member_of_narrows_to_the_allowed_set() {
        let mut problem = Problem::new(
            vec![0],
            im::hashmap! { 0 => im::ordset![1, 2, 3, 4] },
            vec![member_of(0, im::ordset![2, 4, 6])],
        )
        .unwrap();

        assert!(enforce_node_consistency(&mut problem));
        assert_eq!(problem.domains.get(&0), Some(&im::ordset![2, 4]));
    }

    #[test]
    fn excludes_removes_a_single_value() {
        let mut problem = Problem::new(
            vec![0],
            im::hashmap! { 0 => im::ordset![1, 2, 3] },
            vec![excludes(0, 2)],
        )
        .unwrap();

        assert!(enforce_node_consistency(&mut problem));
        assert_eq!(problem.domains.get(&0), Some(&im::ordset![1, 3]));
    }
}
