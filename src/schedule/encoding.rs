//! Solution encodings.
//!
//! - **Permutation**: a priority list over all `n * m` operation ids, read
//!   by the list-scheduling decoder.
//! - [`MachineOrder`]: for each machine, the order in which it processes
//!   the jobs, read by the event-simulation decoder.

/// Per-machine job processing order.
///
/// `row(k)` lists the jobs machine `k` processes, first to last. Each job
/// appears exactly once per row; the rows say nothing about the order in
/// which a job visits machines, which the decoder resolves.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MachineOrder {
    rows: Vec<Vec<usize>>,
}

impl MachineOrder {
    /// Wraps one job sequence per machine.
    pub fn from_rows(rows: Vec<Vec<usize>>) -> Self {
        Self { rows }
    }

    /// The identity order: every machine processes jobs `0, 1, ..., n-1`.
    pub fn identity(jobs: usize, machines: usize) -> Self {
        Self {
            rows: vec![(0..jobs).collect(); machines],
        }
    }

    #[inline]
    pub fn machines(&self) -> usize {
        self.rows.len()
    }

    /// Jobs per row (0 when there are no rows).
    #[inline]
    pub fn jobs(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    #[inline]
    pub fn row(&self, machine: usize) -> &[usize] {
        &self.rows[machine]
    }

    pub fn rows(&self) -> &[Vec<usize>] {
        &self.rows
    }

    /// Job processed at `position` on `machine`.
    #[inline]
    pub fn job_at(&self, machine: usize, position: usize) -> usize {
        self.rows[machine][position]
    }

    /// Exchanges two positions within one machine row.
    pub fn swap(&mut self, machine: usize, a: usize, b: usize) {
        self.rows[machine].swap(a, b);
    }

    /// Returns a copy with two positions of one row exchanged.
    pub fn with_swap(&self, machine: usize, a: usize, b: usize) -> Self {
        let mut next = self.clone();
        next.swap(machine, a, b);
        next
    }

    /// Checks the shape and that every row is a permutation of `0..jobs`.
    pub fn is_valid(&self, jobs: usize, machines: usize) -> bool {
        self.rows.len() == machines && self.rows.iter().all(|row| is_permutation(row, jobs))
    }

    pub fn into_rows(self) -> Vec<Vec<usize>> {
        self.rows
    }
}

/// Checks that `seq` contains every value of `0..len` exactly once.
pub fn is_permutation(seq: &[usize], len: usize) -> bool {
    if seq.len() != len {
        return false;
    }
    let mut seen = vec![false; len];
    for &v in seq {
        if v >= len || seen[v] {
            return false;
        }
        seen[v] = true;
    }
    true
}
