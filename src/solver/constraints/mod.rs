//! Ready-made constraint factories for the most common rules.
//!
//! Each factory returns a [`Constraint`](crate::solver::constraint::Constraint)
//! with a descriptive name set, so problem producers can declare rules
//! without writing closures by hand.

pub mod all_different;
pub mod comparison;
pub mod equal;
pub mod member_of;
pub mod not_equal;

pub use all_different::all_different;
pub use comparison::{greater_than, less_than};
pub use equal::equal;
pub use member_of::{excludes, member_of};
pub use not_equal::not_equal;
