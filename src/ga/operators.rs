//! Permutation operators for operation-id chromosomes.
//!
//! Both operators work on permutations of `0..n` and always return
//! permutations of `0..n`.
//!
//! - [`uniform_crossover`]: position-wise coin flips, order-preserving fill
//! - [`swap_mutation`]: exchange two distinct positions
//!
//! # References
//!
//! - Syswerda (1989), "Uniform Crossover in Genetic Algorithms"
//! - Cicirello (2023), "Genetic Operators for Permutation Representation"

use rand::Rng;

use crate::random::distinct_pair;

/// Uniform crossover for permutations.
///
/// # Algorithm
///
/// 1. Flip one fair coin per position.
/// 2. On heads, child 1 keeps parent 1's id and child 2 keeps parent 2's id
///    at that position.
/// 3. Every open position of child 1 is filled, left to right, with the ids
///    it still lacks in the order they appear in parent 2; child 2 likewise
///    from parent 1.
///
/// # Complexity
/// O(n) time, O(n) space
///
/// # Panics
/// Panics if the parents have different lengths.
pub fn uniform_crossover<R: Rng>(
    parent1: &[usize],
    parent2: &[usize],
    rng: &mut R,
) -> (Vec<usize>, Vec<usize>) {
    assert_eq!(parent1.len(), parent2.len(), "parents must have equal length");
    let keep: Vec<bool> = (0..parent1.len()).map(|_| rng.random_bool(0.5)).collect();
    (
        fill_child(parent1, parent2, &keep),
        fill_child(parent2, parent1, &keep),
    )
}

fn fill_child(template: &[usize], donor: &[usize], keep: &[bool]) -> Vec<usize> {
    let n = template.len();
    let mut used = vec![false; n];
    for (i, &id) in template.iter().enumerate() {
        if keep[i] {
            used[id] = true;
        }
    }

    let mut rest = donor.iter().copied().filter(|&id| !used[id]);
    let mut child = Vec::with_capacity(n);
    for (i, &id) in template.iter().enumerate() {
        if keep[i] {
            child.push(id);
        } else if let Some(next) = rest.next() {
            child.push(next);
        }
    }
    child
}

/// Swap mutation: exchange two distinct random positions.
///
/// Sequences shorter than two are left unchanged.
///
/// # Complexity
/// O(1)
pub fn swap_mutation<R: Rng>(perm: &mut [usize], rng: &mut R) {
    if perm.len() < 2 {
        return;
    }
    let (i, j) = distinct_pair(perm.len(), rng);
    perm.swap(i, j);
}
