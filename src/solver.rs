//! Strategy selection and multi-trial runs.
//!
//! [`solve`] runs one search and decodes the winner once more into a
//! [`Timetable`]. [`run_trials`] repeats a search with consecutive seeds
//! and keeps the best result.
//!
//! # Examples
//!
//! ```
//! use u_openshop::instance::Instance;
//! use u_openshop::sa::SaConfig;
//! use u_openshop::solver::{solve, Strategy};
//!
//! let inst = Instance::new(vec![vec![3, 2], vec![2, 4]]).unwrap();
//! let strategy = Strategy::Annealing(SaConfig::default().with_max_iterations(500).with_seed(1));
//! let solution = solve(&inst, &strategy).unwrap();
//! assert_eq!(solution.makespan, 6);
//! assert_eq!(solution.timetable.len(), 4);
//! ```

use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use std::time::{Duration, Instant};

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::{debug, instrument};

use crate::decoder::Decoder;
use crate::error::SearchError;
use crate::ga::{GaConfig, GaRunner, OpenShopGa};
use crate::instance::{Instance, Time};
use crate::sa::{OpenShopSa, SaConfig, SaRunner};
use crate::schedule::{MachineOrder, Timetable};
use crate::tabu::{OpenShopTabu, TabuConfig, TabuRunner};

/// Search strategy with its configuration.
#[derive(Debug, Clone)]
pub enum Strategy {
    Genetic(GaConfig),
    Annealing(SaConfig),
    Tabu(TabuConfig),
}

impl Strategy {
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Genetic(_) => "genetic",
            Strategy::Annealing(_) => "annealing",
            Strategy::Tabu(_) => "tabu",
        }
    }

    /// Returns a copy seeded with `seed`.
    ///
    /// Tabu search is deterministic and ignores the seed.
    pub fn with_seed(&self, seed: u64) -> Self {
        match self {
            Strategy::Genetic(c) => Strategy::Genetic(c.clone().with_seed(seed)),
            Strategy::Annealing(c) => Strategy::Annealing(c.clone().with_seed(seed)),
            Strategy::Tabu(c) => Strategy::Tabu(c.clone()),
        }
    }
}

/// Winning encoding of a run, in the form its strategy searches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Encoding {
    /// Operation-id priority list (genetic search).
    Permutation(Vec<usize>),
    /// Per-machine job order (annealing and tabu search).
    MachineOrder(MachineOrder),
}

/// Outcome of a single search run.
#[derive(Debug, Clone)]
pub struct Solution {
    /// Name of the strategy that produced it.
    pub strategy: &'static str,
    pub makespan: Time,
    pub encoding: Encoding,
    /// Operation ids in dispatch order.
    pub sequence: Vec<usize>,
    pub timetable: Timetable,
    /// Wall-clock time of the search, excluding the final decode.
    pub runtime: Duration,
}

/// Runs one search.
///
/// # Errors
/// Returns the runner's [`SearchError`] for an invalid configuration, or
/// [`SearchError::EmptyNeighborhood`] for tabu search on a single-job
/// instance.
pub fn solve(instance: &Instance, strategy: &Strategy) -> Result<Solution, SearchError> {
    solve_with_cancel(instance, strategy, None)
}

/// Runs one search with an optional cancellation token.
#[instrument(skip_all, fields(strategy = strategy.name(), jobs = instance.jobs(), machines = instance.machines()))]
pub fn solve_with_cancel(
    instance: &Instance,
    strategy: &Strategy,
    cancel: Option<Arc<AtomicBool>>,
) -> Result<Solution, SearchError> {
    let started = Instant::now();
    let (encoding, decoded) = match strategy {
        Strategy::Genetic(config) => {
            let problem = OpenShopGa::new(instance);
            let result = GaRunner::run_with_cancel(&problem, config, cancel)?;
            let genes = result.best.genes;
            let decoded = problem.decoder().decode(&genes);
            (Encoding::Permutation(genes), decoded)
        }
        Strategy::Annealing(config) => {
            let problem = OpenShopSa::new(instance);
            let result = SaRunner::run_with_cancel(&problem, config, cancel)?;
            let decoded = problem.decoder().decode(&result.best);
            (Encoding::MachineOrder(result.best), decoded)
        }
        Strategy::Tabu(config) => {
            let problem = OpenShopTabu::new(instance);
            let result = TabuRunner::run_with_cancel(&problem, config, cancel)?;
            let decoded = problem.decoder().decode(&result.best);
            (Encoding::MachineOrder(result.best), decoded)
        }
    };
    let runtime = started.elapsed();
    debug!(makespan = decoded.makespan, ?runtime, "solved");

    Ok(Solution {
        strategy: strategy.name(),
        makespan: decoded.makespan,
        encoding,
        sequence: decoded.sequence,
        timetable: decoded.timetable,
        runtime,
    })
}

/// Best of several independent runs.
#[derive(Debug, Clone)]
pub struct TrialSummary {
    /// Lowest-makespan solution; the earliest trial wins ties.
    pub best: Solution,
    /// Mean makespan over all trials.
    pub mean: f64,
    pub trials: usize,
    /// Wall-clock time for all trials together.
    pub runtime: Duration,
}

/// Runs `trials` independent searches seeded `base_seed`, `base_seed + 1`, ...
///
/// Trials run in parallel when the `parallel` feature is enabled.
///
/// # Errors
/// [`SearchError::InvalidConfig`] if `trials` is zero, or the first error
/// any trial reports.
pub fn run_trials(
    instance: &Instance,
    strategy: &Strategy,
    trials: usize,
    base_seed: u64,
) -> Result<TrialSummary, SearchError> {
    if trials == 0 {
        return Err(SearchError::InvalidConfig(
            "trials must be at least 1".into(),
        ));
    }

    let started = Instant::now();
    let run = |i: usize| solve(instance, &strategy.with_seed(base_seed.wrapping_add(i as u64)));

    #[cfg(feature = "parallel")]
    let solutions: Vec<Solution> = (0..trials)
        .into_par_iter()
        .map(run)
        .collect::<Result<_, _>>()?;
    #[cfg(not(feature = "parallel"))]
    let solutions: Vec<Solution> = (0..trials).map(run).collect::<Result<_, _>>()?;

    let runtime = started.elapsed();
    let total: Time = solutions.iter().map(|s| s.makespan).sum();
    let mean = total as f64 / trials as f64;
    let best = solutions
        .into_iter()
        .min_by_key(|s| s.makespan)
        .ok_or_else(|| SearchError::InvalidConfig("trials must be at least 1".into()))?;

    debug!(
        strategy = strategy.name(),
        trials,
        best = best.makespan,
        mean,
        "trials finished"
    );

    Ok(TrialSummary {
        best,
        mean,
        trials,
        runtime,
    })
}
