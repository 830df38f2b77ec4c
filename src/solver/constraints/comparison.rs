use crate::solver::{
    constraint::{BinaryConstraint, Constraint},
    engine::VariableId,
    value::Value,
};

/// The first variable's value must order strictly below the second's.
///
/// The declared order of the pair is the order of comparison: the propagator
/// reorients values discovered from the second variable's side before the
/// predicate ever sees them.
pub fn less_than<V: Value>(first: VariableId, second: VariableId) -> Constraint<V> {
    Constraint::Binary(BinaryConstraint::new(first, second, |a, b| a < b).named("less-than"))
}

/// The first variable's value must order strictly above the second's.
pub fn greater_than<V: Value>(first: VariableId, second: VariableId) -> Constraint<V> {
    Constraint::Binary(BinaryConstraint::new(first, second, |a, b| a > b).named("greater-than"))
}
