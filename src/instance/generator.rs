//! Taillard's open-shop instance generator.
//!
//! Reproduces the benchmark instances from their published seed pairs:
//! one seed drives the processing times, the other the per-job machine
//! permutation that maps each time onto a machine.
//!
//! # Reference
//! Taillard (1993), "Benchmarks for basic scheduling problems",
//! *European Journal of Operational Research* 64(2), 278-285.

use super::{Instance, Time};
use crate::error::InstanceError;

/// Seed pair and published bounds for one benchmark instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BenchmarkSeed {
    pub time_seed: i64,
    pub machine_seed: i64,
    pub upper_bound: Time,
    pub lower_bound: Time,
}

impl BenchmarkSeed {
    const fn new(time_seed: i64, machine_seed: i64, upper_bound: Time, lower_bound: Time) -> Self {
        Self {
            time_seed,
            machine_seed,
            upper_bound,
            lower_bound,
        }
    }

    /// Generates the `size × size` instance for this seed pair.
    pub fn instance(&self, size: usize) -> Result<Instance, InstanceError> {
        taillard(size, size, self.time_seed, self.machine_seed)
    }
}

/// Lehmer generator with Schrage's decomposition, modulus `2^31 - 1`.
#[derive(Debug, Clone)]
pub struct TaillardLcg {
    seed: i64,
}

impl TaillardLcg {
    const A: i64 = 16_807;
    const B: i64 = 127_773;
    const C: i64 = 2_836;
    const M: i64 = 2_147_483_647;

    pub fn new(seed: i64) -> Self {
        Self { seed }
    }

    /// Advances the generator and returns a value in `(0, 1)`.
    pub fn next_unit(&mut self) -> f64 {
        let k = self.seed / Self::B;
        self.seed = Self::A * (self.seed % Self::B) - k * Self::C;
        if self.seed < 0 {
            self.seed += Self::M;
        }
        self.seed as f64 / Self::M as f64
    }
}

/// Generates a `jobs × machines` instance from a time seed and a machine seed.
///
/// Durations are drawn uniformly from `1..=99`. Job `i`'s `j`-th drawn
/// duration is assigned to the machine at position `j` of a permutation
/// shuffled by the machine seed.
pub fn taillard(
    jobs: usize,
    machines: usize,
    time_seed: i64,
    machine_seed: i64,
) -> Result<Instance, InstanceError> {
    let mut time_rng = TaillardLcg::new(time_seed);
    let times: Vec<Vec<Time>> = (0..jobs)
        .map(|_| {
            (0..machines)
                .map(|_| 1 + (time_rng.next_unit() * 99.0) as Time)
                .collect()
        })
        .collect();

    let mut machine_rng = TaillardLcg::new(machine_seed);
    let mut rows = Vec::with_capacity(jobs);
    for drawn in &times {
        let mut perm: Vec<usize> = (0..machines).collect();
        for j in 0..machines {
            let k = (j as f64 + (machines - j) as f64 * machine_rng.next_unit()) as usize;
            perm.swap(j, k.min(machines - 1));
        }
        let mut row = vec![0; machines];
        for (position, &machine) in perm.iter().enumerate() {
            row[machine] = drawn[position];
        }
        rows.push(row);
    }

    Instance::new(rows)
}

/// Taillard open-shop 4x4 set.
pub const TAILLARD_4X4: [BenchmarkSeed; 10] = [
    BenchmarkSeed::new(1166510396, 164000672, 193, 186),
    BenchmarkSeed::new(1624514147, 1076870026, 236, 229),
    BenchmarkSeed::new(1116611914, 1729673136, 271, 262),
    BenchmarkSeed::new(410579806, 1453014524, 250, 245),
    BenchmarkSeed::new(1036100146, 375655500, 295, 287),
    BenchmarkSeed::new(597897640, 322140729, 189, 185),
    BenchmarkSeed::new(1268670769, 556009645, 201, 197),
    BenchmarkSeed::new(307928077, 421384574, 217, 212),
    BenchmarkSeed::new(667545295, 485515899, 261, 258),
    BenchmarkSeed::new(35780816, 492238933, 217, 213),
];

/// Taillard open-shop 5x5 set.
pub const TAILLARD_5X5: [BenchmarkSeed; 10] = [
    BenchmarkSeed::new(527556884, 1343124817, 300, 295),
    BenchmarkSeed::new(1046824493, 1973406531, 262, 255),
    BenchmarkSeed::new(1165033492, 86711717, 328, 321),
    BenchmarkSeed::new(476292817, 24463110, 310, 306),
    BenchmarkSeed::new(1181363416, 606981348, 329, 321),
    BenchmarkSeed::new(897739730, 513119113, 312, 307),
    BenchmarkSeed::new(577107303, 2046387124, 305, 298),
    BenchmarkSeed::new(1714191910, 1928475945, 300, 292),
    BenchmarkSeed::new(1813128617, 2091141708, 353, 349),
    BenchmarkSeed::new(808919936, 183753764, 326, 321),
];

/// Taillard open-shop 7x7 set.
pub const TAILLARD_7X7: [BenchmarkSeed; 10] = [
    BenchmarkSeed::new(1840686215, 1827454623, 438, 435),
    BenchmarkSeed::new(1026771938, 1312166461, 449, 443),
    BenchmarkSeed::new(609471574, 670843185, 479, 468),
    BenchmarkSeed::new(1022295947, 398226875, 467, 463),
    BenchmarkSeed::new(1513073047, 1250759651, 419, 416),
    BenchmarkSeed::new(1612211197, 95606345, 460, 451),
    BenchmarkSeed::new(435024109, 1118234860, 435, 422),
    BenchmarkSeed::new(1760865440, 1099909092, 426, 424),
    BenchmarkSeed::new(122574075, 10979313, 460, 458),
    BenchmarkSeed::new(248031774, 1685251301, 400, 398),
];

/// Taillard open-shop 15x15 set.
pub const TAILLARD_15X15: [BenchmarkSeed; 10] = [
    BenchmarkSeed::new(1561423441, 1787167667, 956, 937),
    BenchmarkSeed::new(204120997, 213027331, 957, 918),
    BenchmarkSeed::new(801158374, 1812110433, 899, 871),
    BenchmarkSeed::new(1502847623, 1527847153, 946, 934),
    BenchmarkSeed::new(282791231, 1855451778, 992, 946),
    BenchmarkSeed::new(1130361878, 849417380, 959, 933),
    BenchmarkSeed::new(379464508, 944419714, 931, 891),
    BenchmarkSeed::new(1760142791, 1955448160, 916, 893),
    BenchmarkSeed::new(1993140927, 179408412, 951, 899),
    BenchmarkSeed::new(1678386613, 1567160817, 935, 902),
];
