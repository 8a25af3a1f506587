//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the evolutionary loop.

use super::selection::Selection;

/// How the mutation rate is applied to offspring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MutationMode {
    /// Every offspring receives exactly one mutation per generation;
    /// `mutation_rate` is carried but not consulted.
    #[default]
    EveryOffspring,

    /// Each offspring is mutated with probability `mutation_rate`.
    PerOffspringRate,
}

/// Configuration for the Genetic Algorithm.
///
/// # Defaults
///
/// ```
/// use u_openshop::ga::{GaConfig, Selection};
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 200);
/// assert_eq!(config.max_generations, 500);
/// assert_eq!(config.selection, Selection::Roulette);
/// assert_eq!(config.elite_count(), 40);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_openshop::ga::{GaConfig, MutationMode, Selection};
///
/// let config = GaConfig::default()
///     .with_population_size(50)
///     .with_selection(Selection::Tournament(3))
///     .with_mutation_mode(MutationMode::PerOffspringRate)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct GaConfig {
    /// Number of individuals in the population.
    pub population_size: usize,

    /// Number of generations to run.
    pub max_generations: usize,

    /// Selection strategy for choosing parents.
    pub selection: Selection,

    /// Fraction of the population preserved as elites (0.0–1.0).
    ///
    /// See [`elite_count`](Self::elite_count) for the rounding.
    pub elite_ratio: f64,

    /// Probability of applying crossover to a pair of parents (0.0–1.0).
    ///
    /// When crossover is not applied, the children are clones of the
    /// parents.
    pub crossover_rate: f64,

    /// Probability of mutating an offspring (0.0–1.0), used by
    /// [`MutationMode::PerOffspringRate`].
    pub mutation_rate: f64,

    /// How `mutation_rate` is applied.
    pub mutation_mode: MutationMode,

    /// Whether to evaluate individuals in parallel using rayon.
    ///
    /// Has no effect without the `parallel` feature.
    pub parallel: bool,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 200,
            max_generations: 500,
            selection: Selection::default(),
            elite_ratio: 0.2,
            crossover_rate: 0.6,
            mutation_rate: 0.1,
            mutation_mode: MutationMode::default(),
            parallel: true,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the selection strategy.
    pub fn with_selection(mut self, sel: Selection) -> Self {
        self.selection = sel;
        self
    }

    /// Sets the elite ratio.
    pub fn with_elite_ratio(mut self, ratio: f64) -> Self {
        self.elite_ratio = ratio.clamp(0.0, 1.0);
        self
    }

    /// Sets the crossover rate.
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the mutation mode.
    pub fn with_mutation_mode(mut self, mode: MutationMode) -> Self {
        self.mutation_mode = mode;
        self
    }

    /// Enables or disables parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Number of elites carried into each new generation.
    ///
    /// `ceil(elite_ratio × population_size)`, plus one when the remaining
    /// offspring slots would be odd, so offspring always come in pairs.
    pub fn elite_count(&self) -> usize {
        let pop = self.population_size;
        let mut elites = (pop as f64 * self.elite_ratio - 1e-9).ceil().max(0.0) as usize;
        if pop.saturating_sub(elites) % 2 == 1 {
            elites += 1;
        }
        elites
    }

    /// Validates the configuration.
    ///
    /// Returns `Err` with a description if any parameter is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.population_size < 2 {
            return Err("population_size must be at least 2".into());
        }
        if self.max_generations == 0 {
            return Err("max_generations must be at least 1".into());
        }
        for (name, value) in [
            ("elite_ratio", self.elite_ratio),
            ("crossover_rate", self.crossover_rate),
            ("mutation_rate", self.mutation_rate),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(format!("{name} must be within [0, 1], got {value}"));
            }
        }
        if self.elite_count() >= self.population_size {
            return Err("elite_ratio too high: elites fill entire population".into());
        }
        if let Selection::Tournament(0) = self.selection {
            return Err("tournament size must be at least 1".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GaConfig::default();
        assert_eq!(config.population_size, 200);
        assert_eq!(config.max_generations, 500);
        assert_eq!(config.selection, Selection::Roulette);
        assert!((config.elite_ratio - 0.2).abs() < 1e-10);
        assert!((config.crossover_rate - 0.6).abs() < 1e-10);
        assert!((config.mutation_rate - 0.1).abs() < 1e-10);
        assert_eq!(config.mutation_mode, MutationMode::EveryOffspring);
        assert!(config.parallel);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_builder_pattern() {
        let config = GaConfig::default()
            .with_population_size(60)
            .with_max_generations(1000)
            .with_selection(Selection::Tournament(4))
            .with_elite_ratio(0.1)
            .with_crossover_rate(0.8)
            .with_mutation_rate(0.05)
            .with_mutation_mode(MutationMode::PerOffspringRate)
            .with_parallel(false)
            .with_seed(42);

        assert_eq!(config.population_size, 60);
        assert_eq!(config.max_generations, 1000);
        assert_eq!(config.selection, Selection::Tournament(4));
        assert!((config.elite_ratio - 0.1).abs() < 1e-10);
        assert!((config.crossover_rate - 0.8).abs() < 1e-10);
        assert!((config.mutation_rate - 0.05).abs() < 1e-10);
        assert_eq!(config.mutation_mode, MutationMode::PerOffspringRate);
        assert!(!config.parallel);
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn test_elite_count_rounding() {
        assert_eq!(GaConfig::default().elite_count(), 40);
        // ceil(0.2 × 11) = 3, 8 offspring slots
        let c = GaConfig::default().with_population_size(11);
        assert_eq!(c.elite_count(), 3);
        // ceil(0.2 × 12) = 3, 9 slots is odd -> 4
        let c = GaConfig::default().with_population_size(12);
        assert_eq!(c.elite_count(), 4);
        // 0.1 × 30 is exactly 3 despite float noise; 27 slots -> 4
        let c = GaConfig::default()
            .with_population_size(30)
            .with_elite_ratio(0.1);
        assert_eq!(c.elite_count(), 4);
        let c = GaConfig::default().with_elite_ratio(0.0).with_population_size(10);
        assert_eq!(c.elite_count(), 0);
    }

    #[test]
    fn test_validate_ok() {
        assert!(GaConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_population_too_small() {
        let config = GaConfig::default().with_population_size(1);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_zero_generations() {
        let config = GaConfig::default().with_max_generations(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_elite_too_high() {
        let config = GaConfig::default()
            .with_population_size(10)
            .with_elite_ratio(1.0);
        assert!(config.validate().is_err());
        // ceil(0.9 × 3) = 3 fills the population
        let config = GaConfig::default()
            .with_population_size(3)
            .with_elite_ratio(0.9);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rate_out_of_range() {
        let mut config = GaConfig::default();
        config.crossover_rate = 1.5;
        let err = config.validate().unwrap_err();
        assert!(err.contains("crossover_rate"), "{err}");
    }

    #[test]
    fn test_validate_empty_tournament() {
        let config = GaConfig::default().with_selection(Selection::Tournament(0));
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_clamp_rates() {
        let config = GaConfig::default()
            .with_elite_ratio(1.5)
            .with_crossover_rate(-0.5)
            .with_mutation_rate(2.0);

        assert!((config.elite_ratio - 1.0).abs() < 1e-10);
        assert!((config.crossover_rate - 0.0).abs() < 1e-10);
        assert!((config.mutation_rate - 1.0).abs() < 1e-10);
    }
}
