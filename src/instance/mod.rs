//! Open-shop problem instances.
//!
//! An [`Instance`] is the immutable problem definition: `n` jobs, `m`
//! machines and a dense `n × m` duration matrix. Every job visits every
//! machine exactly once, in any order.
//!
//! # Submodules
//!
//! - [`format`]: plain-text matrix format with optional known bounds
//! - [`generator`]: Taillard's pseudo-random instance generator
//!
//! # Reference
//! Gonzalez & Sahni (1976), "Open Shop Scheduling to Minimize Finish Time"

pub mod format;
pub mod generator;

use crate::error::InstanceError;

/// Time unit for durations, start and end times.
pub type Time = u64;

/// One `(job, machine)` processing requirement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Operation {
    pub job: usize,
    pub machine: usize,
}

/// An open-shop problem instance.
///
/// Durations are stored row-major (`job * machines + machine`), which is
/// also the operation id linearization used throughout the crate.
///
/// # Examples
///
/// ```
/// use u_openshop::instance::Instance;
///
/// let instance = Instance::new(vec![vec![3, 2], vec![2, 4]]).unwrap();
/// assert_eq!(instance.jobs(), 2);
/// assert_eq!(instance.duration(1, 1), 4);
/// assert_eq!(instance.lower_bound(), 6);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instance {
    jobs: usize,
    machines: usize,
    durations: Vec<Time>,
}

impl Instance {
    /// Builds an instance from one duration row per job.
    ///
    /// Rejects an empty matrix, rows of unequal length, zero durations and
    /// matrices whose total work does not fit in `i64`.
    pub fn new(rows: Vec<Vec<Time>>) -> Result<Self, InstanceError> {
        let jobs = rows.len();
        if jobs == 0 {
            return Err(InstanceError::NoJobs);
        }
        let machines = rows[0].len();
        if machines == 0 {
            return Err(InstanceError::NoMachines);
        }

        let mut durations = Vec::with_capacity(jobs * machines);
        for (job, row) in rows.into_iter().enumerate() {
            if row.len() != machines {
                return Err(InstanceError::RaggedRow {
                    job,
                    expected: machines,
                    found: row.len(),
                });
            }
            if let Some(machine) = row.iter().position(|&d| d == 0) {
                return Err(InstanceError::ZeroDuration { job, machine });
            }
            durations.extend(row);
        }

        // every job, machine and end-time sum is bounded by the total
        durations
            .iter()
            .try_fold(0 as Time, |acc, &d| acc.checked_add(d))
            .filter(|&total| total <= i64::MAX as Time)
            .ok_or(InstanceError::WorkOverflow)?;

        Ok(Self {
            jobs,
            machines,
            durations,
        })
    }

    /// Number of jobs (`n`).
    #[inline]
    pub fn jobs(&self) -> usize {
        self.jobs
    }

    /// Number of machines (`m`).
    #[inline]
    pub fn machines(&self) -> usize {
        self.machines
    }

    /// Total number of operations (`n * m`).
    #[inline]
    pub fn operation_count(&self) -> usize {
        self.durations.len()
    }

    /// Processing time of `job` on `machine`.
    #[inline]
    pub fn duration(&self, job: usize, machine: usize) -> Time {
        self.durations[job * self.machines + machine]
    }

    /// Duration row of a job, indexed by machine.
    pub fn row(&self, job: usize) -> &[Time] {
        let start = job * self.machines;
        &self.durations[start..start + self.machines]
    }

    /// Copies the matrix back into one row per job.
    pub fn to_rows(&self) -> Vec<Vec<Time>> {
        self.durations
            .chunks(self.machines)
            .map(<[Time]>::to_vec)
            .collect()
    }

    /// Linearized id of the `(job, machine)` operation.
    #[inline]
    pub fn operation_id(&self, job: usize, machine: usize) -> usize {
        job * self.machines + machine
    }

    /// Inverse of [`operation_id`](Self::operation_id).
    #[inline]
    pub fn operation(&self, id: usize) -> Operation {
        Operation {
            job: id / self.machines,
            machine: id % self.machines,
        }
    }

    /// Sum of a job's durations across all machines.
    pub fn job_work(&self, job: usize) -> Time {
        self.row(job).iter().sum()
    }

    /// Sum of all jobs' durations on one machine.
    pub fn machine_work(&self, machine: usize) -> Time {
        (0..self.jobs).map(|job| self.duration(job, machine)).sum()
    }

    /// Trivial makespan lower bound: the heaviest job or machine load.
    ///
    /// No schedule can finish before the most loaded job or machine has
    /// processed all of its operations back to back.
    pub fn lower_bound(&self) -> Time {
        let job_max = (0..self.jobs).map(|j| self.job_work(j)).max();
        let machine_max = (0..self.machines).map(|k| self.machine_work(k)).max();
        job_max.max(machine_max).unwrap_or(0)
    }

    /// Sum of all durations; the makespan of a fully sequential schedule.
    pub fn total_work(&self) -> Time {
        self.durations.iter().sum()
    }
}
