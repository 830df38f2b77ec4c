pub mod constraint;
pub mod constraints;
pub mod engine;
pub mod heuristics;
pub mod preprocess;
pub mod problem;
pub mod propagate;
pub mod stats;
pub mod value;
