//! Genetic Algorithm framework.
//!
//! A generic GA engine built on trait-based abstractions, plus the
//! open-shop binding [`OpenShopGa`] that evolves operation-id permutations
//! decoded by list scheduling.
//!
//! # Core Traits
//!
//! - [`Individual`]: A candidate solution with associated fitness type
//! - [`GaProblem`]: Problem definition: initialization, evaluation and operators
//!
//! # Key Types
//!
//! - [`GaConfig`]: Algorithm parameters (population, rates, elitism, selection)
//! - [`GaRunner`]: Executes the evolutionary loop
//! - [`GaResult`]: Final optimization result with history
//!
//! # Submodules
//!
//! - [`operators`]: Uniform permutation crossover and swap mutation
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - Khuri & Miryala (1999), "Genetic Algorithms for Solving Open Shop
//!   Scheduling Problems"

mod config;
pub mod operators;
mod problem;
mod runner;
mod selection;
mod types;

pub use config::{GaConfig, MutationMode};
pub use problem::{OpenShopGa, OperationSequence};
pub use runner::{GaResult, GaRunner};
pub use selection::Selection;
pub use types::{Fitness, GaProblem, Individual};
