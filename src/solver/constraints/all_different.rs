use crate::solver::{constraint::Constraint, engine::VariableId, value::Value};

use super::not_equal;

/// Pairwise decomposition of the all-different rule: one `not_equal` per
/// unordered pair of variables.
///
/// Quadratic in the number of variables, which is fine at the scales this
/// solver targets and keeps every constraint binary.
pub fn all_different<V: Value>(variables: &[VariableId]) -> Vec<Constraint<V>> {
    let mut constraints = Vec::with_capacity(variables.len() * variables.len().saturating_sub(1) / 2);
    for (index, &first) in variables.iter().enumerate() {
        for &second in &variables[index + 1..] {
            constraints.push(not_equal(first, second));
        }
    }
    constraints
}
