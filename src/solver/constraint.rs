use std::{fmt, sync::Arc};

use crate::solver::{engine::VariableId, problem::Assignment, value::Value};

/// A human-readable summary of a constraint, used when rendering statistics.
#[derive(Debug, Clone)]
pub struct ConstraintDescriptor {
    pub name: String,
    pub description: String,
}

/// A rule over one or two variables.
///
/// Constraints come in exactly two shapes, so they are modelled as a sum type
/// and matched exhaustively by the preprocessor and the propagator. Unary
/// constraints are consumed once by
/// [`enforce_node_consistency`](crate::solver::preprocess::enforce_node_consistency);
/// binary constraints drive forward checking and the search-time consistency
/// checks.
#[derive(Debug, Clone)]
pub enum Constraint<V: Value> {
    Unary(UnaryConstraint<V>),
    Binary(BinaryConstraint<V>),
}

impl<V: Value> Constraint<V> {
    /// Evaluates the constraint under `assignment`.
    ///
    /// Returns `None` if any involved variable is unassigned, otherwise
    /// `Some` with the predicate's verdict. The predicate is always applied
    /// with its arguments in the constraint's declared variable order.
    pub fn is_satisfied(&self, assignment: &Assignment<V>) -> Option<bool> {
        match self {
            Constraint::Unary(unary) => assignment
                .get(&unary.variable())
                .map(|value| unary.holds(value)),
            Constraint::Binary(binary) => {
                let [first, second] = binary.variables();
                match (assignment.get(&first), assignment.get(&second)) {
                    (Some(a), Some(b)) => Some(binary.holds(a, b)),
                    _ => None,
                }
            }
        }
    }

    pub fn descriptor(&self) -> ConstraintDescriptor {
        match self {
            Constraint::Unary(unary) => ConstraintDescriptor {
                name: unary.name.clone(),
                description: format!("{}(?{})", unary.name, unary.variable),
            },
            Constraint::Binary(binary) => ConstraintDescriptor {
                name: binary.name.clone(),
                description: format!("{}(?{}, ?{})", binary.name, binary.vars[0], binary.vars[1]),
            },
        }
    }
}

/// A predicate over a single variable's value.
#[derive(Clone)]
pub struct UnaryConstraint<V: Value> {
    variable: VariableId,
    predicate: Arc<dyn Fn(&V) -> bool>,
    name: String,
}

impl<V: Value> UnaryConstraint<V> {
    pub fn new(variable: VariableId, predicate: impl Fn(&V) -> bool + 'static) -> Self {
        Self {
            variable,
            predicate: Arc::new(predicate),
            name: "unary".to_string(),
        }
    }

    /// Sets the name reported by [`Constraint::descriptor`].
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn variable(&self) -> VariableId {
        self.variable
    }

    pub fn holds(&self, value: &V) -> bool {
        (self.predicate)(value)
    }
}

impl<V: Value> fmt::Debug for UnaryConstraint<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UnaryConstraint")
            .field("variable", &self.variable)
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// A predicate over an ordered pair of two distinct variables.
///
/// The pair is symmetric in effect, but the predicate is always invoked with
/// its arguments in the order the variables were declared; [`holds_for`]
/// reorients arguments discovered in the opposite order during search.
///
/// [`holds_for`]: BinaryConstraint::holds_for
#[derive(Clone)]
pub struct BinaryConstraint<V: Value> {
    vars: [VariableId; 2],
    predicate: Arc<dyn Fn(&V, &V) -> bool>,
    name: String,
}

impl<V: Value> BinaryConstraint<V> {
    pub fn new(
        first: VariableId,
        second: VariableId,
        predicate: impl Fn(&V, &V) -> bool + 'static,
    ) -> Self {
        Self {
            vars: [first, second],
            predicate: Arc::new(predicate),
            name: "binary".to_string(),
        }
    }

    /// Sets the name reported by [`Constraint::descriptor`].
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// The two involved variables, in declared order.
    pub fn variables(&self) -> [VariableId; 2] {
        self.vars
    }

    pub fn involves(&self, variable: VariableId) -> bool {
        self.vars.contains(&variable)
    }

    /// Given one of the two involved variables, returns the other.
    pub fn other(&self, variable: VariableId) -> VariableId {
        if variable == self.vars[0] {
            self.vars[1]
        } else {
            self.vars[0]
        }
    }

    /// Applies the predicate with `first` and `second` in declared order.
    pub fn holds(&self, first: &V, second: &V) -> bool {
        (self.predicate)(first, second)
    }

    /// Applies the predicate given `value` for `variable` and `other_value`
    /// for the remaining variable, reorienting into declared order.
    pub fn holds_for(&self, variable: VariableId, value: &V, other_value: &V) -> bool {
        if variable == self.vars[0] {
            (self.predicate)(value, other_value)
        } else {
            (self.predicate)(other_value, value)
        }
    }
}

impl<V: Value> fmt::Debug for BinaryConstraint<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinaryConstraint")
            .field("vars", &self.vars)
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::solver::problem::Assignment;

    #[test]
    fn other_returns_the_counterpart_variable() {
        let constraint = BinaryConstraint::<i32>::new(3, 7, |a, b| a != b);
        assert_eq!(constraint.other(3), 7);
        assert_eq!(constraint.other(7), 3);
    }

    #[test]
    fn holds_for_reorients_into_declared_order() {
        // Declared as ?1 < ?2, queried from ?2's side.
        let constraint = BinaryConstraint::<i32>::new(1, 2, |a, b| a < b);
        assert!(constraint.holds_for(1, &0, &5));
        assert!(constraint.holds_for(2, &5, &0));
        assert!(!constraint.holds_for(2, &0, &5));
    }

    #[test]
    fn is_satisfied_requires_both_variables_assigned() {
        let constraint = Constraint::Binary(BinaryConstraint::<i32>::new(0, 1, |a, b| a != b));

        let mut assignment = Assignment::default();
        assert_eq!(constraint.is_satisfied(&assignment), None);

        assignment.insert(0, 4);
        assert_eq!(constraint.is_satisfied(&assignment), None);

        assignment.insert(1, 4);
        assert_eq!(constraint.is_satisfied(&assignment), Some(false));

        assignment.insert(1, 5);
        assert_eq!(constraint.is_satisfied(&assignment), Some(true));
    }

    #[test]
    fn unary_is_satisfied_evaluates_the_predicate() {
        let constraint =
            Constraint::Unary(UnaryConstraint::<i32>::new(0, |value| *value > 2).named("min-3"));

        let assignment: Assignment<i32> = im::hashmap! { 0 => 1 };
        assert_eq!(constraint.is_satisfied(&assignment), Some(false));

        let assignment: Assignment<i32> = im::hashmap! { 0 => 3 };
        assert_eq!(constraint.is_satisfied(&assignment), Some(true));
        assert_eq!(constraint.descriptor().name, "min-3");
    }
}
