//! Tabu Search (TS).
//!
//! A single-solution trajectory metaheuristic that keeps a short memory of
//! recently visited solutions and forbids returning to them, preventing
//! cycling and pushing the search out of local optima. Every iteration
//! moves to the best admissible neighbor, even a worse one.
//!
//! [`OpenShopTabu`] binds the runner to machine-order encodings with the
//! full pairwise-swap neighborhood. The search uses no randomness.
//!
//! # References
//!
//! - Glover, F. (1989). "Tabu Search—Part I", *ORSA Journal on Computing* 1(3), 190-206.
//! - Glover, F. (1990). "Tabu Search—Part II", *ORSA Journal on Computing* 2(1), 4-32.

mod config;
mod memory;
mod problem;
mod runner;
mod types;

pub use config::TabuConfig;
pub use memory::TabuList;
pub use problem::OpenShopTabu;
pub use runner::{TabuResult, TabuRunner};
pub use types::TabuProblem;
