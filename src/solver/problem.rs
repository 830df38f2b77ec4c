use std::collections::HashSet;

use im::OrdSet;

use crate::{
    error::{ProblemError, Result},
    solver::{
        constraint::{BinaryConstraint, Constraint},
        engine::VariableId,
        value::Value,
    },
};

/// The working domain mapping: each *unassigned* variable's remaining
/// candidate values.
///
/// A variable either has a domain entry (unassigned) or an
/// [`Assignment`] entry (assigned), never both; the search maintains this
/// partition at every node. The persistent map makes the per-choice-point
/// snapshot a cheap structural `clone()`.
pub type Domains<V> = im::HashMap<VariableId, OrdSet<V>>;

/// A partial or complete mapping from variables to committed values.
pub type Assignment<V> = im::HashMap<VariableId, V>;

/// A constraint satisfaction problem instance.
///
/// `variables` is the canonical declaration order, used for heuristic
/// tie-breaks; it is independent of the numeric order of the ids themselves.
/// The domain map and constraint list are working state: node consistency
/// permanently narrows the domains and drops the unary constraints.
#[derive(Debug, Clone)]
pub struct Problem<V: Value> {
    pub variables: Vec<VariableId>,
    pub domains: Domains<V>,
    pub constraints: Vec<Constraint<V>>,
}

impl<V: Value> Problem<V> {
    /// Builds a problem, rejecting malformed input up front.
    pub fn new(
        variables: Vec<VariableId>,
        domains: Domains<V>,
        constraints: Vec<Constraint<V>>,
    ) -> Result<Self> {
        let problem = Self {
            variables,
            domains,
            constraints,
        };
        problem.validate()?;
        Ok(problem)
    }

    /// Checks the producer's contract: every referenced variable is declared,
    /// every declared variable has an initial domain, and no binary
    /// constraint relates a variable to itself.
    pub fn validate(&self) -> Result<()> {
        let mut declared: HashSet<VariableId> = HashSet::with_capacity(self.variables.len());
        for &variable in &self.variables {
            if !declared.insert(variable) {
                return Err(ProblemError::DuplicateVariable(variable).into());
            }
        }
        for &variable in &self.variables {
            if !self.domains.contains_key(&variable) {
                return Err(ProblemError::MissingDomain(variable).into());
            }
        }
        for variable in self.domains.keys() {
            if !declared.contains(variable) {
                return Err(ProblemError::UnknownVariable(*variable).into());
            }
        }
        for constraint in &self.constraints {
            match constraint {
                Constraint::Unary(unary) => {
                    if !declared.contains(&unary.variable()) {
                        return Err(ProblemError::UnknownVariable(unary.variable()).into());
                    }
                }
                Constraint::Binary(binary) => {
                    let [first, second] = binary.variables();
                    if first == second {
                        return Err(ProblemError::SelfReferential(first).into());
                    }
                    for variable in [first, second] {
                        if !declared.contains(&variable) {
                            return Err(ProblemError::UnknownVariable(variable).into());
                        }
                    }
                }
            }
        }
        Ok(())
    }

    /// True iff every declared variable has a committed value.
    pub fn is_complete(&self, assignment: &Assignment<V>) -> bool {
        self.variables
            .iter()
            .all(|variable| assignment.contains_key(variable))
    }

    /// The binary constraints mentioning `variable`.
    pub fn binary_constraints_on(
        &self,
        variable: VariableId,
    ) -> impl Iterator<Item = &BinaryConstraint<V>> {
        self.constraints
            .iter()
            .filter_map(move |constraint| match constraint {
                Constraint::Binary(binary) if binary.involves(variable) => Some(binary),
                _ => None,
            })
    }
}
