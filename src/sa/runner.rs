//! SA execution loop.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use rand::Rng;
use tracing::{debug, trace};

use super::config::SaConfig;
use super::types::SaProblem;
use crate::error::SearchError;
use crate::instance::Time;
use crate::random::rng_from;

/// Result of a Simulated Annealing run.
#[derive(Debug, Clone)]
pub struct SaResult<S: Clone> {
    /// The best solution found.
    pub best: S,

    /// Cost of the best solution.
    pub best_cost: Time,

    /// Total number of iterations (neighbor evaluations).
    pub iterations: usize,

    /// Number of accepted moves (including improvements).
    pub accepted_moves: usize,

    /// Number of strictly improving moves.
    pub improving_moves: usize,

    /// Whether cancelled externally.
    pub cancelled: bool,

    /// Best cost at the start, every `history_interval` iterations and at
    /// the end.
    pub cost_history: Vec<Time>,
}

/// Executes the Simulated Annealing algorithm.
///
/// A strictly improving neighbor is always accepted. Any other neighbor is
/// accepted with the configured [`Acceptance`](super::Acceptance)
/// probability. The best-ever solution only changes on a strict
/// improvement.
pub struct SaRunner;

impl SaRunner {
    /// Runs SA optimization.
    ///
    /// # Errors
    /// Returns [`SearchError::InvalidConfig`] if the configuration is
    /// invalid.
    pub fn run<P: SaProblem>(
        problem: &P,
        config: &SaConfig,
    ) -> Result<SaResult<P::Solution>, SearchError> {
        Self::run_with_cancel(problem, config, None)
    }

    /// Runs SA with an optional cancellation token, checked before every
    /// iteration.
    pub fn run_with_cancel<P: SaProblem>(
        problem: &P,
        config: &SaConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<SaResult<P::Solution>, SearchError> {
        config.validate().map_err(SearchError::InvalidConfig)?;

        let mut rng = rng_from(config.seed);

        let mut current = problem.initial_solution(&mut rng);
        let mut current_cost = problem.cost(&current);
        let mut best = current.clone();
        let mut best_cost = current_cost;
        debug!(
            iterations = config.max_iterations,
            initial_cost = current_cost,
            "annealing started"
        );

        let mut iterations = 0usize;
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;
        let mut cancelled = false;
        let mut cost_history = vec![best_cost];

        for i in 1..=config.max_iterations {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }

            let Some(neighbor) = problem.neighbor(&current, &mut rng) else {
                debug!("no neighbor available");
                break;
            };
            let neighbor_cost = problem.cost(&neighbor);

            let accept = if neighbor_cost < current_cost {
                improving_moves += 1;
                true
            } else {
                let delta = (neighbor_cost - current_cost) as f64;
                rng.random::<f64>() < config.acceptance.probability(i, delta)
            };

            if accept {
                current = neighbor;
                current_cost = neighbor_cost;
                accepted_moves += 1;

                if current_cost < best_cost {
                    best = current.clone();
                    best_cost = current_cost;
                    trace!(iteration = i, best_cost, "new best");
                }
            }

            iterations = i;
            if i % config.history_interval == 0 {
                cost_history.push(best_cost);
            }
        }

        if cost_history.last() != Some(&best_cost) {
            cost_history.push(best_cost);
        }

        debug!(
            best_cost,
            iterations, accepted_moves, improving_moves, cancelled, "annealing finished"
        );

        Ok(SaResult {
            best,
            best_cost,
            iterations,
            accepted_moves,
            improving_moves,
            cancelled,
            cost_history,
        })
    }
}
