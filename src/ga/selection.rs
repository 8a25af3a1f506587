//! Selection strategies for the GA.
//!
//! Selection determines which individuals are chosen as parents for
//! crossover. Every draw is independent and with replacement.
//!
//! # References
//!
//! - Goldberg & Deb (1991), "A Comparative Analysis of Selection Schemes
//!   Used in Genetic Algorithms"
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"

use rand::Rng;

use super::types::{Fitness, Individual};

/// Selection strategy for choosing parents.
///
/// All strategies assume **minimization** (lower fitness = better).
///
/// # Examples
///
/// ```
/// use u_openshop::ga::Selection;
///
/// // Weight each individual by 1 / makespan
/// let sel = Selection::Roulette;
///
/// // Tournament with size 3 (moderate selection pressure)
/// let sel = Selection::Tournament(3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    /// Fitness-proportionate selection with weight `1 / fitness`.
    ///
    /// Shorter makespans get proportionally higher selection probability.
    /// Fitness values must be positive.
    ///
    /// # Complexity
    /// O(n) per selection
    #[default]
    Roulette,

    /// Tournament selection: pick `k` individuals at random, select the best.
    ///
    /// # Complexity
    /// O(k) per selection
    Tournament(usize),
}

impl Selection {
    /// Select a parent index from the population.
    ///
    /// # Panics
    /// Panics if `population` is empty.
    pub fn select<I: Individual, R: Rng>(&self, population: &[I], rng: &mut R) -> usize {
        assert!(
            !population.is_empty(),
            "cannot select from empty population"
        );

        match self {
            Selection::Roulette => roulette(population, rng),
            Selection::Tournament(k) => tournament(population, *k, rng),
        }
    }
}

/// Tournament selection: pick k random individuals, return best.
fn tournament<I: Individual, R: Rng>(population: &[I], k: usize, rng: &mut R) -> usize {
    let k = k.max(1);
    let n = population.len();

    let mut best_idx = rng.random_range(0..n);
    for _ in 1..k {
        let idx = rng.random_range(0..n);
        if population[idx].fitness() < population[best_idx].fitness() {
            best_idx = idx;
        }
    }
    best_idx
}

/// Roulette wheel selection with inverse-fitness weights.
fn roulette<I: Individual, R: Rng>(population: &[I], rng: &mut R) -> usize {
    let n = population.len();
    if n == 1 {
        return 0;
    }

    let weights: Vec<f64> = population
        .iter()
        .map(|ind| 1.0 / ind.fitness().to_f64().max(f64::MIN_POSITIVE))
        .collect();

    let total: f64 = weights.iter().sum();
    if !total.is_finite() || total <= 0.0 {
        return rng.random_range(0..n);
    }

    let threshold = rng.random_range(0.0..total);
    let mut cumulative = 0.0;
    for (i, &w) in weights.iter().enumerate() {
        cumulative += w;
        if cumulative > threshold {
            return i;
        }
    }

    n - 1 // floating-point fallback
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    #[derive(Clone)]
    struct TestInd {
        fit: u64,
    }

    impl Individual for TestInd {
        type Fitness = u64;
        fn fitness(&self) -> u64 {
            self.fit
        }
        fn set_fitness(&mut self, f: u64) {
            self.fit = f;
        }
    }

    fn make_population(fitnesses: &[u64]) -> Vec<TestInd> {
        fitnesses.iter().map(|&f| TestInd { fit: f }).collect()
    }

    fn counts(sel: Selection, pop: &[TestInd], draws: usize) -> Vec<usize> {
        let mut rng = create_rng(42);
        let mut counts = vec![0; pop.len()];
        for _ in 0..draws {
            counts[sel.select(pop, &mut rng)] += 1;
        }
        counts
    }

    #[test]
    fn test_roulette_is_inverse_proportional() {
        // weights 1/10 : 1/20 : 1/40 = 4 : 2 : 1
        let pop = make_population(&[10, 20, 40]);
        let c = counts(Selection::Roulette, &pop, 70_000);
        assert!((38_000..42_000).contains(&c[0]), "{c:?}");
        assert!((18_000..22_000).contains(&c[1]), "{c:?}");
        assert!((8_500..11_500).contains(&c[2]), "{c:?}");
    }

    #[test]
    fn test_roulette_equal_fitness_is_uniform() {
        let pop = make_population(&[7, 7, 7, 7]);
        for &c in &counts(Selection::Roulette, &pop, 10_000) {
            assert!(c > 2000, "expected roughly uniform, got {c}");
        }
    }

    #[test]
    fn test_tournament_favors_best() {
        let pop = make_population(&[10, 5, 1, 8]);
        let c = counts(Selection::Tournament(4), &pop, 10_000);
        assert!(c[2] > 6000, "expected best to dominate, got {c:?}");
    }

    #[test]
    fn test_tournament_size_1_is_random() {
        let pop = make_population(&[10, 5, 1, 8]);
        for &c in &counts(Selection::Tournament(1), &pop, 10_000) {
            assert!(c > 1500, "expected uniform, got {c}");
        }
    }

    #[test]
    fn test_single_individual() {
        let pop = make_population(&[3]);
        let mut rng = create_rng(1);
        assert_eq!(Selection::Roulette.select(&pop, &mut rng), 0);
        assert_eq!(Selection::Tournament(3).select(&pop, &mut rng), 0);
    }

    #[test]
    #[should_panic(expected = "empty population")]
    fn test_empty_population_panics() {
        let pop: Vec<TestInd> = Vec::new();
        let mut rng = create_rng(1);
        Selection::Roulette.select(&pop, &mut rng);
    }
}
