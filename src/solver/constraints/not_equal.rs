use crate::solver::{
    constraint::{BinaryConstraint, Constraint},
    engine::VariableId,
    value::Value,
};

/// The two variables must take different values.
pub fn not_equal<V: Value>(first: VariableId, second: VariableId) -> Constraint<V> {
    Constraint::Binary(BinaryConstraint::new(first, second, |a, b| a != b).named("not-equal"))
}
