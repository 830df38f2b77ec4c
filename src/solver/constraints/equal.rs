use crate::solver::{
    constraint::{BinaryConstraint, Constraint},
    engine::VariableId,
    value::Value,
};

/// The two variables must take the same value.
pub fn equal<V: Value>(first: VariableId, second: VariableId) -> Constraint<V> {
    Constraint::Binary(BinaryConstraint::new(first, second, |a, b| a == b).named("equal"))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::solver::problem::Assignment;

    #[test]
    fn holds_only_for_matching_values() {
        let constraint = equal::<i32>(0, 1);

        let same: Assignment<i32> = im::hashmap! { 0 => 3, 1 => 3 };
        assert_eq!(constraint.is_satisfied(&same), Some(true));

        let different: Assignment<i32> = im::hashmap! { 0 => 3, 1 => 4 };
        assert_eq!(constraint.is_satisfied(&different), Some(false));
    }
}
