//! GA evolutionary loop execution.
//!
//! [`GaRunner`] orchestrates the complete evolutionary process:
//! initialization → evaluation → selection → crossover → mutation →
//! evaluation → replacement, repeated for a fixed number of generations.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use rand::Rng;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::{debug, trace};

use super::config::{GaConfig, MutationMode};
use super::types::{Fitness, GaProblem, Individual};
use crate::error::SearchError;
use crate::random::rng_from;

/// Result of a GA optimization run.
#[derive(Debug, Clone)]
pub struct GaResult<I: Individual> {
    /// The best individual found during the entire run.
    pub best: I,

    /// Best fitness value (same as `best.fitness()`).
    pub best_fitness: I::Fitness,

    /// Total number of generations executed.
    pub generations: usize,

    /// Whether the run was cancelled externally.
    pub cancelled: bool,

    /// Best-ever fitness after initialization and after each generation.
    pub fitness_history: Vec<f64>,
}

/// Executes the GA evolutionary loop.
///
/// # Usage
///
/// ```
/// use u_openshop::ga::{GaConfig, GaRunner, OpenShopGa};
/// use u_openshop::instance::Instance;
///
/// let instance = Instance::new(vec![vec![3, 2], vec![2, 4]]).unwrap();
/// let problem = OpenShopGa::new(&instance);
/// let config = GaConfig::default()
///     .with_population_size(20)
///     .with_max_generations(20)
///     .with_seed(42);
/// let result = GaRunner::run(&problem, &config).unwrap();
/// assert_eq!(result.best_fitness, 6);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA optimization.
    ///
    /// # Errors
    /// Returns [`SearchError::InvalidConfig`] if the configuration is
    /// invalid.
    pub fn run<P: GaProblem>(
        problem: &P,
        config: &GaConfig,
    ) -> Result<GaResult<P::Individual>, SearchError> {
        Self::run_with_cancel(problem, config, None)
    }

    /// Runs the GA with an optional cancellation token.
    ///
    /// If `cancel` is `Some` and the flag is set to `true`, the GA stops
    /// before the next generation and returns the best solution found so
    /// far.
    pub fn run_with_cancel<P: GaProblem>(
        problem: &P,
        config: &GaConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<GaResult<P::Individual>, SearchError> {
        config.validate().map_err(SearchError::InvalidConfig)?;

        let mut rng = rng_from(config.seed);
        let elite_count = config.elite_count();
        debug!(
            population = config.population_size,
            generations = config.max_generations,
            elites = elite_count,
            "genetic search started"
        );

        let mut population: Vec<P::Individual> = (0..config.population_size)
            .map(|_| problem.create_individual(&mut rng))
            .collect();
        evaluate_population(problem, &mut population, config.parallel);
        sort_by_fitness(&mut population);

        let mut best = population[0].clone();
        let mut fitness_history = Vec::with_capacity(config.max_generations + 1);
        fitness_history.push(best.fitness().to_f64());

        let mut generations = 0;
        let mut cancelled = false;

        for gen in 0..config.max_generations {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }

            let mut next_gen: Vec<P::Individual> = population[..elite_count].to_vec();

            while next_gen.len() < config.population_size {
                let p1 = &population[config.selection.select(&population, &mut rng)];
                let p2 = &population[config.selection.select(&population, &mut rng)];

                let (c1, c2) = if rng.random::<f64>() < config.crossover_rate {
                    problem.crossover(p1, p2, &mut rng)
                } else {
                    (p1.clone(), p2.clone())
                };

                for mut child in [c1, c2] {
                    if next_gen.len() >= config.population_size {
                        break;
                    }
                    let mutate = match config.mutation_mode {
                        MutationMode::EveryOffspring => true,
                        MutationMode::PerOffspringRate => {
                            rng.random::<f64>() < config.mutation_rate
                        }
                    };
                    if mutate {
                        problem.mutate(&mut child, &mut rng);
                    }
                    next_gen.push(child);
                }
            }

            // elites keep their fitness
            evaluate_population(problem, &mut next_gen[elite_count..], config.parallel);
            sort_by_fitness(&mut next_gen);
            population = next_gen;
            generations = gen + 1;

            if population[0].fitness() < best.fitness() {
                best = population[0].clone();
                trace!(generation = generations, best = ?best.fitness(), "new best");
            }
            fitness_history.push(best.fitness().to_f64());
            problem.on_generation(generations, best.fitness());
        }

        debug!(
            best = ?best.fitness(),
            generations,
            cancelled,
            "genetic search finished"
        );

        Ok(GaResult {
            best_fitness: best.fitness(),
            best,
            generations,
            cancelled,
            fitness_history,
        })
    }
}

/// Evaluate all individuals in the slice.
fn evaluate_population<P: GaProblem>(
    problem: &P,
    population: &mut [P::Individual],
    parallel: bool,
) {
    #[cfg(feature = "parallel")]
    {
        if parallel {
            population.par_iter_mut().for_each(|ind| {
                let f = problem.evaluate(ind);
                ind.set_fitness(f);
            });
            return;
        }
    }
    #[cfg(not(feature = "parallel"))]
    let _ = parallel;

    for ind in population.iter_mut() {
        let f = problem.evaluate(ind);
        ind.set_fitness(f);
    }
}

/// Stable sort, best (lowest) fitness first.
fn sort_by_fitness<I: Individual>(population: &mut [I]) {
    population.sort_by(|a, b| {
        a.fitness()
            .partial_cmp(&b.fitness())
            .unwrap_or(std::cmp::Ordering::Equal)
    });
}
