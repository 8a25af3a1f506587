//! Core trait for Tabu Search problems.

use crate::instance::Time;

/// Defines a combinatorial optimization problem for Tabu Search.
///
/// Users implement this trait to specify:
/// - How to create an initial solution
/// - How to evaluate a solution's cost
/// - How to enumerate the neighborhood of a solution
///
/// The search is deterministic: neighborhoods are enumerated in a fixed
/// order and ties resolve to the earliest neighbor.
///
/// # Type Parameters
///
/// * `Solution`: the solution representation. Solutions are stored in the
///   tabu memory and compared for equality.
pub trait TabuProblem: Send + Sync {
    /// The solution type.
    type Solution: Clone + PartialEq + Send + Sync;

    /// Creates the initial solution.
    fn initial_solution(&self) -> Self::Solution;

    /// Evaluates the cost of a solution (lower is better).
    fn cost(&self, solution: &Self::Solution) -> Time;

    /// Enumerates the full neighborhood of a solution, in a stable order.
    fn neighbors(&self, solution: &Self::Solution) -> Vec<Self::Solution>;
}
