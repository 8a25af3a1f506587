//! Core trait for Simulated Annealing.

use rand::Rng;

use crate::instance::Time;

/// Defines a Simulated Annealing problem.
///
/// The user implements the initial solution, neighbor generation and cost
/// evaluation. The SA framework handles the acceptance criterion and best
/// tracking.
///
/// # Minimization
///
/// SA minimizes the cost function.
///
/// # Examples
///
/// ```
/// use rand::Rng;
/// use u_openshop::sa::SaProblem;
///
/// /// Minimize |x - 50| over 0..=100 with ±1 steps.
/// struct Distance;
///
/// impl SaProblem for Distance {
///     type Solution = u64;
///
///     fn initial_solution<R: Rng>(&self, _rng: &mut R) -> u64 { 0 }
///
///     fn cost(&self, x: &u64) -> u64 { x.abs_diff(50) }
///
///     fn neighbor<R: Rng>(&self, x: &u64, rng: &mut R) -> Option<u64> {
///         Some(if rng.random_bool(0.5) { x.saturating_sub(1) } else { (x + 1).min(100) })
///     }
/// }
/// ```
///
/// # References
///
/// Kirkpatrick et al. (1983), Cerny (1985)
pub trait SaProblem: Send + Sync {
    /// The solution representation type.
    type Solution: Clone + Send;

    /// Creates the starting solution.
    fn initial_solution<R: Rng>(&self, rng: &mut R) -> Self::Solution;

    /// Computes the cost of a solution. Lower is better.
    fn cost(&self, solution: &Self::Solution) -> Time;

    /// Generates a random neighbor of the current solution.
    ///
    /// Returns `None` when the solution has no neighbors, which ends the
    /// search.
    fn neighbor<R: Rng>(&self, solution: &Self::Solution, rng: &mut R)
        -> Option<Self::Solution>;
}
