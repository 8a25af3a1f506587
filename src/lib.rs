//! Open-shop scheduling by metaheuristic search.
//!
//! Minimizes the makespan of an open shop: `n` jobs, `m` machines, every
//! job processed once on every machine in any order, with no job or machine
//! handling two operations at once.
//!
//! - **Constructive**: the deterministic most-work-remaining (MWKR)
//!   heuristic that seeds the trajectory searches.
//! - **Decoders**: event simulation for per-machine job orders, best-fit
//!   list scheduling for operation permutations.
//! - **Genetic Algorithm (GA)**: population search over operation
//!   permutations with uniform crossover and swap mutation.
//! - **Simulated Annealing (SA)**: single-solution search over machine
//!   orders with swap moves.
//! - **Tabu Search (TS)**: deterministic full-neighborhood search over
//!   machine orders with a bounded memory of visited solutions.
//! - **Dispatching**: priority rule composition shared by the heuristic and
//!   the event decoder.
//!
//! # Architecture
//!
//! The search runners (`ga`, `sa`, `tabu`) are generic over small problem
//! traits; each module's `problem.rs` binds its runner to the open-shop
//! model. [`solver`] selects a strategy, runs it and decodes the winner into
//! a [`schedule::Timetable`]; [`record`] turns results into persistable run
//! records.
//!
//! # Examples
//!
//! ```
//! use u_openshop::instance::Instance;
//! use u_openshop::solver::{solve, Strategy};
//! use u_openshop::tabu::TabuConfig;
//!
//! let instance = Instance::new(vec![vec![3, 2], vec![2, 4]]).unwrap();
//! let solution = solve(&instance, &Strategy::Tabu(TabuConfig::default().with_max_iterations(50))).unwrap();
//! assert_eq!(solution.makespan, instance.lower_bound());
//! ```

pub mod constructive;
pub mod decoder;
pub mod dispatching;
pub mod error;
pub mod ga;
pub mod instance;
pub mod random;
pub mod record;
pub mod sa;
pub mod schedule;
pub mod solver;
pub mod tabu;

pub use error::{InstanceError, SearchError};
pub use instance::{Instance, Time};
pub use solver::{run_trials, solve, Solution, Strategy};
