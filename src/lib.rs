//! Quandary is a generic constraint satisfaction problem (CSP) solver.
//!
//! Given a set of variables, a domain of candidate values for each, and a set
//! of unary/binary constraints relating them, the solver finds a single
//! assignment satisfying every constraint, or proves that none exists. It
//! composes four pieces into one pruned exhaustive search:
//!
//! - **Node consistency**: unary constraints are folded into the domains once,
//!   up front, and then discarded.
//! - **Minimum remaining values (MRV)**: the search always branches on the
//!   most constrained unassigned variable.
//! - **Least constraining value (LCV)**: candidate values that rule out the
//!   fewest neighbor values are tried first.
//! - **Forward checking**: each tentative assignment immediately prunes the
//!   domains of its unassigned neighbors, failing early on a wipe-out.
//!
//! # Core Concepts
//!
//! - **[`Problem`]**: the variables (in declaration order, used for
//!   deterministic tie-breaks), their domains, and the constraint list.
//! - **[`Constraint`]**: a sum type of unary and binary rules; the
//!   [`constraints`](crate::solver::constraints) module provides factories
//!   for the common ones.
//! - **[`SolverEngine`]**: runs preprocessing and the backtracking search,
//!   returning the first satisfying [`Assignment`] or `None`, plus search
//!   statistics.
//!
//! # Example: A Simple 2-Variable Problem
//!
//! Solving `?0 != ?1` where `?0` can be `1` or `2` and `?1` can only be `1`;
//! the solver must deduce `?0 = 2`.
//!
//! ```
//! use quandary::solver::{
//!     constraints::not_equal,
//!     engine::{SolverEngine, VariableId},
//!     problem::Problem,
//! };
//!
//! let a: VariableId = 0;
//! let b: VariableId = 1;
//!
//! let domains = im::hashmap! {
//!     a => im::ordset![1, 2],
//!     b => im::ordset![1],
//! };
//! let mut problem = Problem::new(vec![a, b], domains, vec![not_equal(a, b)]).unwrap();
//!
//! let engine = SolverEngine::with_default_heuristics();
//! let (solution, stats) = engine.solve(&mut problem).unwrap();
//! let assignment = solution.unwrap();
//!
//! assert_eq!(assignment.get(&a), Some(&2));
//! assert_eq!(assignment.get(&b), Some(&1));
//! assert!(stats.nodes_visited >= 1);
//! ```
//!
//! [`Problem`]: crate::solver::problem::Problem
//! [`Assignment`]: crate::solver::problem::Assignment
//! [`Constraint`]: crate::solver::constraint::Constraint
//! [`SolverEngine`]: crate::solver::engine::SolverEngine

pub mod error;
pub mod solver;
