//! Tabu Search execution engine.
//!
//! # Algorithm
//!
//! 1. Build the initial solution; fail if its neighborhood is empty
//! 2. At each iteration:
//!    a. Evaluate the full neighborhood
//!    b. Move to the best neighbor not in the tabu memory, even if it is
//!       worse than the current solution; if every neighbor is tabu, move
//!       to the best one anyway
//!    c. Append the new solution to the tabu memory
//!    d. Update the global best on strict improvement
//! 3. Terminate after a fixed number of iterations
//!
//! # Reference
//!
//! Glover, F. (1989). "Tabu Search—Part I", *ORSA Journal on Computing* 1(3), 190-206.
//! Glover, F. (1990). "Tabu Search—Part II", *ORSA Journal on Computing* 2(1), 4-32.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::{debug, trace};

use super::config::TabuConfig;
use super::memory::TabuList;
use super::types::TabuProblem;
use crate::error::SearchError;
use crate::instance::Time;

/// Result of a Tabu Search run.
#[derive(Debug, Clone)]
pub struct TabuResult<S: Clone> {
    /// Best solution found.
    pub best: S,
    /// Cost of the best solution.
    pub best_cost: Time,
    /// Total iterations executed.
    pub iterations: usize,
    /// Iteration at which the best solution was found (0 = initial).
    pub best_iteration: usize,
    /// Whether cancelled externally.
    pub cancelled: bool,
    /// Best cost initially and after each iteration.
    pub cost_history: Vec<Time>,
}

/// Tabu Search runner.
pub struct TabuRunner;

impl TabuRunner {
    /// Executes Tabu Search on the given problem.
    ///
    /// # Errors
    /// - [`SearchError::InvalidConfig`] if the configuration is invalid
    /// - [`SearchError::EmptyNeighborhood`] if the initial solution has no
    ///   neighbors
    ///
    /// # Examples
    ///
    /// ```
    /// use u_openshop::tabu::{TabuConfig, TabuProblem, TabuRunner};
    ///
    /// /// Minimize |x - 5| over the integers with ±1 steps.
    /// struct Walk;
    /// impl TabuProblem for Walk {
    ///     type Solution = i64;
    ///     fn initial_solution(&self) -> i64 { 0 }
    ///     fn cost(&self, x: &i64) -> u64 { x.abs_diff(5) }
    ///     fn neighbors(&self, x: &i64) -> Vec<i64> { vec![x - 1, x + 1] }
    /// }
    ///
    /// let config = TabuConfig::default().with_max_iterations(20).with_tabu_length(2);
    /// let result = TabuRunner::run(&Walk, &config).unwrap();
    /// assert_eq!(result.best, 5);
    /// ```
    pub fn run<P: TabuProblem>(
        problem: &P,
        config: &TabuConfig,
    ) -> Result<TabuResult<P::Solution>, SearchError> {
        Self::run_with_cancel(problem, config, None)
    }

    /// Executes Tabu Search with an optional cancellation token, checked
    /// before every iteration.
    pub fn run_with_cancel<P: TabuProblem>(
        problem: &P,
        config: &TabuConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<TabuResult<P::Solution>, SearchError> {
        config.validate().map_err(SearchError::InvalidConfig)?;

        let mut current = problem.initial_solution();
        let mut neighborhood = problem.neighbors(&current);
        if neighborhood.is_empty() {
            return Err(SearchError::EmptyNeighborhood);
        }

        let mut best = current.clone();
        let mut best_cost = problem.cost(&current);
        let mut best_iteration = 0;
        debug!(
            iterations = config.max_iterations,
            tabu_length = config.tabu_length,
            neighborhood = neighborhood.len(),
            initial_cost = best_cost,
            "tabu search started"
        );

        let mut tabu = TabuList::new(config.tabu_length);
        let mut cost_history = Vec::with_capacity(config.max_iterations + 1);
        cost_history.push(best_cost);
        let mut iterations = 0;
        let mut cancelled = false;

        for iteration in 1..=config.max_iterations {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }

            let costs = evaluate_neighborhood(problem, &neighborhood, config.parallel);
            let chosen = (0..neighborhood.len())
                .filter(|&i| !tabu.contains(&neighborhood[i]))
                .min_by_key(|&i| costs[i])
                .or_else(|| (0..neighborhood.len()).min_by_key(|&i| costs[i]));
            let Some(i) = chosen else {
                break;
            };

            let cost = costs[i];
            current = neighborhood.swap_remove(i);
            tabu.push(current.clone());

            if cost < best_cost {
                best = current.clone();
                best_cost = cost;
                best_iteration = iteration;
                trace!(iteration, best_cost, "new best");
            }

            cost_history.push(best_cost);
            iterations = iteration;

            neighborhood = problem.neighbors(&current);
            if neighborhood.is_empty() {
                break;
            }
        }

        debug!(
            best_cost,
            best_iteration, iterations, cancelled, "tabu search finished"
        );

        Ok(TabuResult {
            best,
            best_cost,
            iterations,
            best_iteration,
            cancelled,
            cost_history,
        })
    }
}

/// Costs of every neighbor, in neighborhood order.
fn evaluate_neighborhood<P: TabuProblem>(
    problem: &P,
    neighborhood: &[P::Solution],
    parallel: bool,
) -> Vec<Time> {
    #[cfg(feature = "parallel")]
    {
        if parallel {
            return neighborhood.par_iter().map(|s| problem.cost(s)).collect();
        }
    }
    #[cfg(not(feature = "parallel"))]
    let _ = parallel;

    neighborhood.iter().map(|s| problem.cost(s)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    // ---- |x - target| over the integers, neighbors x-1 and x+1 ----

    struct Walk {
        start: i64,
        target: i64,
    }

    impl TabuProblem for Walk {
        type Solution = i64;

        fn initial_solution(&self) -> i64 {
            self.start
        }

        fn cost(&self, x: &i64) -> Time {
            x.abs_diff(self.target)
        }

        fn neighbors(&self, x: &i64) -> Vec<i64> {
            vec![x - 1, x + 1]
        }
    }

    fn config() -> TabuConfig {
        TabuConfig::default()
            .with_max_iterations(50)
            .with_tabu_length(3)
            .with_parallel(false)
    }

    #[test]
    fn test_walks_to_optimum() {
        let problem = Walk {
            start: -20,
            target: 5,
        };
        let result = TabuRunner::run(&problem, &config()).unwrap();
        assert_eq!(result.best, 5);
        assert_eq!(result.best_cost, 0);
        assert_eq!(result.best_iteration, 25);
        assert_eq!(result.iterations, 50);
        assert_eq!(result.cost_history.len(), 51);
    }

    #[test]
    fn test_always_moves_past_optimum() {
        // from the optimum both neighbors are worse; the search still moves
        // and the tabu memory keeps it from bouncing straight back
        let problem = Walk {
            start: 0,
            target: 0,
        };
        let result = TabuRunner::run(&problem, &config().with_max_iterations(4)).unwrap();
        assert_eq!(result.best, 0);
        assert_eq!(result.best_iteration, 0);
        assert_eq!(result.cost_history, vec![0, 0, 0, 0, 0]);
    }

    #[test]
    fn test_history_is_monotone() {
        let problem = Walk {
            start: 30,
            target: -4,
        };
        let result = TabuRunner::run(&problem, &config()).unwrap();
        for w in result.cost_history.windows(2) {
            assert!(w[1] <= w[0]);
        }
    }

    struct Isolated;

    impl TabuProblem for Isolated {
        type Solution = u8;
        fn initial_solution(&self) -> u8 {
            0
        }
        fn cost(&self, _: &u8) -> Time {
            1
        }
        fn neighbors(&self, _: &u8) -> Vec<u8> {
            Vec::new()
        }
    }

    #[test]
    fn test_empty_neighborhood_is_error() {
        let err = TabuRunner::run(&Isolated, &config()).unwrap_err();
        assert_eq!(err, SearchError::EmptyNeighborhood);
    }

    #[test]
    fn test_invalid_config_is_error() {
        let problem = Walk {
            start: 0,
            target: 1,
        };
        let err = TabuRunner::run(&problem, &config().with_tabu_length(0)).unwrap_err();
        assert!(matches!(err, SearchError::InvalidConfig(_)));
    }

    #[test]
    fn test_cancellation() {
        let problem = Walk {
            start: 0,
            target: 9,
        };
        let cancel = Arc::new(AtomicBool::new(true));
        let result = TabuRunner::run_with_cancel(&problem, &config(), Some(cancel)).unwrap();
        assert!(result.cancelled);
        assert_eq!(result.iterations, 0);
        assert_eq!(result.best, 0);
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_matches_sequential() {
        let problem = Walk {
            start: 12,
            target: -3,
        };
        let seq = TabuRunner::run(&problem, &config()).unwrap();
        let par = TabuRunner::run(&problem, &config().with_parallel(true)).unwrap();
        assert_eq!(seq.best, par.best);
        assert_eq!(seq.cost_history, par.cost_history);
    }
}
