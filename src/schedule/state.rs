//! Per-run simulation counters.
//!
//! Every decode or construction call builds a fresh [`ShopState`] from the
//! instance and consumes it; nothing is shared between calls, so decodes
//! can run concurrently against the same [`Instance`].

use super::timetable::ScheduledOperation;
use crate::instance::{Instance, Time};

/// Counters for one job.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JobState {
    /// Earliest time the job is free to start its next operation.
    pub time_available: Time,
    /// Sum of the durations not yet dispatched.
    pub remaining_work: Time,
    /// Operations not yet dispatched.
    pub remaining_operations: usize,
}

/// Counters for one machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MachineState {
    pub time_available: Time,
    pub remaining_work: Time,
    pub remaining_operations: usize,
}

/// Job and machine counters plus the dispatched-operation matrix.
#[derive(Debug, Clone)]
pub struct ShopState<'a> {
    instance: &'a Instance,
    pub jobs: Vec<JobState>,
    pub machines: Vec<MachineState>,
    done: Vec<bool>,
}

impl<'a> ShopState<'a> {
    /// Counters at time zero with nothing dispatched.
    pub fn new(instance: &'a Instance) -> Self {
        let jobs = (0..instance.jobs())
            .map(|j| JobState {
                time_available: 0,
                remaining_work: instance.job_work(j),
                remaining_operations: instance.machines(),
            })
            .collect();
        let machines = (0..instance.machines())
            .map(|k| MachineState {
                time_available: 0,
                remaining_work: instance.machine_work(k),
                remaining_operations: instance.jobs(),
            })
            .collect();
        Self {
            instance,
            jobs,
            machines,
            done: vec![false; instance.operation_count()],
        }
    }

    #[inline]
    pub fn instance(&self) -> &'a Instance {
        self.instance
    }

    #[inline]
    pub fn is_done(&self, job: usize, machine: usize) -> bool {
        self.done[self.instance.operation_id(job, machine)]
    }

    /// Whether every operation has been dispatched.
    pub fn is_complete(&self) -> bool {
        self.done.iter().all(|&d| d)
    }

    /// Jobs not yet dispatched on `machine`, in index order.
    pub fn pending_jobs(&self, machine: usize) -> impl Iterator<Item = usize> + '_ {
        (0..self.instance.jobs()).filter(move |&j| !self.is_done(j, machine))
    }

    /// Places `(job, machine)` at the earliest time both are free and
    /// advances the counters.
    ///
    /// # Panics
    /// If the operation was already dispatched.
    pub fn dispatch(&mut self, job: usize, machine: usize) -> ScheduledOperation {
        let id = self.instance.operation_id(job, machine);
        assert!(
            !self.done[id],
            "operation (job {job}, machine {machine}) dispatched twice"
        );
        let duration = self.instance.duration(job, machine);
        let start = self.jobs[job]
            .time_available
            .max(self.machines[machine].time_available);
        let end = start + duration;

        let js = &mut self.jobs[job];
        js.time_available = end;
        js.remaining_work -= duration;
        js.remaining_operations -= 1;

        let ms = &mut self.machines[machine];
        ms.time_available = end;
        ms.remaining_work -= duration;
        ms.remaining_operations -= 1;

        self.done[id] = true;
        ScheduledOperation {
            job,
            machine,
            start,
            end,
        }
    }

    /// Latest machine availability, which is the makespan once complete.
    pub fn makespan(&self) -> Time {
        self.machines
            .iter()
            .map(|m| m.time_available)
            .max()
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_counters() {
        let inst = Instance::new(vec![vec![3, 2], vec![2, 4]]).unwrap();
        let state = ShopState::new(&inst);
        assert_eq!(state.jobs[1].remaining_work, 6);
        assert_eq!(state.machines[0].remaining_work, 5);
        assert_eq!(state.machines[0].remaining_operations, 2);
        assert!(!state.is_complete());
        assert_eq!(state.pending_jobs(0).collect::<Vec<_>>(), vec![0, 1]);
    }

    #[test]
    fn test_dispatch_waits_for_both_sides() {
        let inst = Instance::new(vec![vec![3, 2], vec![2, 4]]).unwrap();
        let mut state = ShopState::new(&inst);
        let a = state.dispatch(0, 0);
        assert_eq!((a.start, a.end), (0, 3));
        let b = state.dispatch(1, 1);
        assert_eq!((b.start, b.end), (0, 4));
        // job 0 free at 3, machine 1 free at 4
        let c = state.dispatch(0, 1);
        assert_eq!((c.start, c.end), (4, 6));
        let d = state.dispatch(1, 0);
        assert_eq!((d.start, d.end), (4, 6));
        assert!(state.is_complete());
        assert_eq!(state.makespan(), 6);
        assert_eq!(state.jobs[0].remaining_work, 0);
        assert_eq!(state.pending_jobs(0).count(), 0);
    }

    #[test]
    #[should_panic(expected = "dispatched twice")]
    fn test_double_dispatch_panics() {
        let inst = Instance::new(vec![vec![1, 1]]).unwrap();
        let mut state = ShopState::new(&inst);
        state.dispatch(0, 0);
        state.dispatch(0, 0);
    }
}
