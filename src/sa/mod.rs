//! Simulated Annealing (SA).
//!
//! A single-solution trajectory metaheuristic. Improving moves are always
//! taken; worsening moves are accepted with a probability that decreases
//! over the run, allowing the search to escape local optima.
//!
//! [`OpenShopSa`] binds the runner to machine-order encodings decoded by
//! event simulation.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Cerny (1985), "Thermodynamical Approach to the Travelling Salesman Problem"
//! - Liaw (1999), "Applying simulated annealing to the open shop scheduling
//!   problem"

mod config;
mod problem;
mod runner;
mod types;

pub use config::{Acceptance, SaConfig};
pub use problem::OpenShopSa;
pub use runner::{SaResult, SaRunner};
pub use types::SaProblem;
