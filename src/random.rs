//! Seeded random number generation.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Creates a reproducible RNG from a 64-bit seed.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Creates an RNG from an optional seed, drawing a fresh seed when absent.
pub fn rng_from(seed: Option<u64>) -> StdRng {
    create_rng(seed.unwrap_or_else(rand::random))
}

/// Picks two distinct positions in `0..len` uniformly at random.
///
/// # Panics
/// Panics if `len < 2`.
pub fn distinct_pair<R: Rng>(len: usize, rng: &mut R) -> (usize, usize) {
    assert!(len >= 2, "need at least two positions, got {len}");
    let a = rng.random_range(0..len);
    let mut b = rng.random_range(0..len - 1);
    if b >= a {
        b += 1;
    }
    (a, b)
}

/// Returns a uniformly random permutation of `0..len`.
pub fn random_permutation<R: Rng>(len: usize, rng: &mut R) -> Vec<usize> {
    let mut perm: Vec<usize> = (0..len).collect();
    perm.shuffle(rng);
    perm
}
