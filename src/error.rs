use std::backtrace::Backtrace;

use crate::solver::engine::VariableId;

pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Contract violations in a [`Problem`](crate::solver::problem::Problem)
/// handed to the solver.
///
/// These indicate a bug in the code that produced the problem, not a search
/// outcome. Domain wipe-outs and unsatisfiable problems are ordinary results
/// (`false` / `None`), never errors.
#[derive(Debug, thiserror::Error)]
pub enum ProblemError {
    #[error("constraint references undeclared variable ?{0}")]
    UnknownVariable(VariableId),
    #[error("declared variable ?{0} has no initial domain")]
    MissingDomain(VariableId),
    #[error("binary constraint relates variable ?{0} to itself")]
    SelfReferential(VariableId),
    #[error("variable ?{0} is declared more than once")]
    DuplicateVariable(VariableId),
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Inner: {inner}\n{backtrace}")]
    Inner {
        inner: Box<ProblemError>,
        backtrace: Box<Backtrace>,
    },
}

impl From<ProblemError> for Error {
    fn from(inner: ProblemError) -> Self {
        Error::Inner {
            inner: Box::new(inner),
            backtrace: Box::new(std::backtrace::Backtrace::capture()),
        }
    }
}
