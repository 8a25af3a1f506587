//! Timetable feasibility checks.
//!
//! Collects every violation instead of stopping at the first one, so a
//! failing test or a debug assertion reports the whole picture.

use thiserror::Error;

use super::timetable::{ScheduledOperation, Timetable};
use crate::instance::{Instance, Time};

/// One way a timetable can violate the open-shop constraints.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeasibilityError {
    #[error("operation (job {job}, machine {machine}) references an unknown job or machine")]
    OutOfRange { job: usize, machine: usize },

    #[error("operation (job {job}, machine {machine}) is never scheduled")]
    Missing { job: usize, machine: usize },

    #[error("operation (job {job}, machine {machine}) is scheduled {count} times")]
    Duplicate {
        job: usize,
        machine: usize,
        count: usize,
    },

    #[error(
        "operation (job {job}, machine {machine}) lasts {actual}, expected {expected}"
    )]
    WrongDuration {
        job: usize,
        machine: usize,
        expected: Time,
        actual: Time,
    },

    #[error("job {job} runs on machines {first} and {second} at the same time")]
    JobOverlap {
        job: usize,
        first: usize,
        second: usize,
    },

    #[error("machine {machine} runs jobs {first} and {second} at the same time")]
    MachineOverlap {
        machine: usize,
        first: usize,
        second: usize,
    },
}

/// Checks that `timetable` is a complete, conflict-free schedule of
/// `instance`.
///
/// # Examples
///
/// ```
/// use u_openshop::instance::Instance;
/// use u_openshop::schedule::{check_feasibility, ScheduledOperation, Timetable};
///
/// let instance = Instance::new(vec![vec![2]]).unwrap();
/// let mut timetable = Timetable::new();
/// timetable.push(ScheduledOperation { job: 0, machine: 0, start: 0, end: 2 });
/// assert!(check_feasibility(&instance, &timetable).is_ok());
/// ```
pub fn check_feasibility(
    instance: &Instance,
    timetable: &Timetable,
) -> Result<(), Vec<FeasibilityError>> {
    let (n, m) = (instance.jobs(), instance.machines());
    let mut errors = Vec::new();
    let mut counts = vec![0usize; instance.operation_count()];

    for op in timetable.operations() {
        if op.job >= n || op.machine >= m {
            errors.push(FeasibilityError::OutOfRange {
                job: op.job,
                machine: op.machine,
            });
            continue;
        }
        counts[instance.operation_id(op.job, op.machine)] += 1;
        let expected = instance.duration(op.job, op.machine);
        if op.end < op.start || op.duration() != expected {
            errors.push(FeasibilityError::WrongDuration {
                job: op.job,
                machine: op.machine,
                expected,
                actual: op.end.saturating_sub(op.start),
            });
        }
    }

    for (id, &count) in counts.iter().enumerate() {
        let o = instance.operation(id);
        match count {
            0 => errors.push(FeasibilityError::Missing {
                job: o.job,
                machine: o.machine,
            }),
            1 => {}
            _ => errors.push(FeasibilityError::Duplicate {
                job: o.job,
                machine: o.machine,
                count,
            }),
        }
    }

    let in_range = |op: &&ScheduledOperation| op.job < n && op.machine < m;
    for job in 0..n {
        let ops: Vec<_> = timetable
            .operations()
            .iter()
            .filter(in_range)
            .filter(|op| op.job == job)
            .collect();
        for (a, b) in overlapping_pairs(&ops) {
            errors.push(FeasibilityError::JobOverlap {
                job,
                first: a.machine,
                second: b.machine,
            });
        }
    }
    for machine in 0..m {
        let ops: Vec<_> = timetable
            .operations()
            .iter()
            .filter(in_range)
            .filter(|op| op.machine == machine)
            .collect();
        for (a, b) in overlapping_pairs(&ops) {
            errors.push(FeasibilityError::MachineOverlap {
                machine,
                first: a.job,
                second: b.job,
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn overlapping_pairs<'a>(
    ops: &[&'a ScheduledOperation],
) -> Vec<(&'a ScheduledOperation, &'a ScheduledOperation)> {
    let mut pairs = Vec::new();
    for (i, a) in ops.iter().enumerate() {
        for b in &ops[i + 1..] {
            if a.overlaps(b) {
                pairs.push((*a, *b));
            }
        }
    }
    pairs
}
