//! Most-work-remaining (MWKR) constructive heuristic.
//!
//! Builds one machine-order encoding greedily, never backtracking. At each
//! step every machine with undispatched jobs proposes its best *ready* job
//! (one that is free no later than the machine), ranked by most remaining
//! job work. The machine ranking then picks one proposal: earliest
//! available machine, most remaining machine work, most remaining job work,
//! machine index. If no machine has a ready job, every machine proposes its
//! best remaining job regardless of readiness.
//!
//! The result is fully deterministic.

use crate::dispatching::{job_ranking, machine_ranking, Candidate, RuleEngine};
use crate::instance::Instance;
use crate::schedule::{MachineOrder, ShopState};

/// Builds the MWKR machine order for `instance`.
///
/// # Examples
///
/// ```
/// use u_openshop::constructive::mwkr_schedule;
/// use u_openshop::decoder::{Decoder, EventDecoder};
/// use u_openshop::instance::Instance;
///
/// let instance = Instance::new(vec![vec![3, 2], vec![2, 4]]).unwrap();
/// let order = mwkr_schedule(&instance);
/// assert_eq!(EventDecoder::new(&instance).makespan(&order), 6);
/// ```
pub fn mwkr_schedule(instance: &Instance) -> MachineOrder {
    let machines = machine_ranking();
    let jobs = job_ranking();
    let mut state = ShopState::new(instance);
    let mut rows = vec![Vec::with_capacity(instance.jobs()); instance.machines()];

    while let Some(c) = next_dispatch(&state, &machines, &jobs) {
        state.dispatch(c.job, c.machine);
        rows[c.machine].push(c.job);
    }
    debug_assert!(state.is_complete());

    MachineOrder::from_rows(rows)
}

fn next_dispatch<'a>(
    state: &ShopState<'a>,
    machines: &RuleEngine<Candidate, ShopState<'a>>,
    jobs: &RuleEngine<Candidate, ShopState<'a>>,
) -> Option<Candidate> {
    let ready = proposals(state, jobs, true);
    let pool = if ready.is_empty() {
        proposals(state, jobs, false)
    } else {
        ready
    };
    machines.select_best(&pool, state).map(|i| pool[i])
}

/// One proposal per machine with pending jobs, in machine order.
fn proposals<'a>(
    state: &ShopState<'a>,
    jobs: &RuleEngine<Candidate, ShopState<'a>>,
    ready_only: bool,
) -> Vec<Candidate> {
    let inst = state.instance();
    (0..inst.machines())
        .filter_map(|machine| {
            let machine_free = state.machines[machine].time_available;
            let options: Vec<Candidate> = state
                .pending_jobs(machine)
                .filter(|&job| !ready_only || state.jobs[job].time_available <= machine_free)
                .map(|job| Candidate {
                    machine,
                    job,
                    duration: inst.duration(job, machine),
                })
                .collect();
            jobs.select_best(&options, state).map(|i| options[i])
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decoder::{Decoder, EventDecoder};
    use crate::schedule::check_feasibility;

    #[test]
    fn test_two_by_two_order() {
        let inst = Instance::new(vec![vec![3, 2], vec![2, 4]]).unwrap();
        let order = mwkr_schedule(&inst);
        assert_eq!(order.rows(), &[vec![1, 0], vec![0, 1]]);
        let out = EventDecoder::new(&inst).decode(&order);
        assert_eq!(out.makespan, 6);
        assert!(out.makespan <= 7);
    }

    #[test]
    fn test_is_deterministic() {
        let inst = Instance::new(vec![
            vec![5, 3, 2, 7],
            vec![1, 4, 6, 2],
            vec![3, 3, 3, 3],
            vec![8, 1, 1, 5],
        ])
        .unwrap();
        assert_eq!(mwkr_schedule(&inst), mwkr_schedule(&inst));
    }

    #[test]
    fn test_produces_valid_order() {
        let inst = Instance::new(vec![vec![2, 9, 4], vec![6, 1, 3], vec![5, 5, 8], vec![1, 7, 2]])
            .unwrap();
        let order = mwkr_schedule(&inst);
        assert!(order.is_valid(4, 3));
        let out = EventDecoder::new(&inst).decode(&order);
        assert!(check_feasibility(&inst, &out.timetable).is_ok());
        assert!(out.makespan >= inst.lower_bound());
    }

    #[test]
    fn test_single_job_and_single_machine() {
        let one_job = Instance::new(vec![vec![4, 1, 7]]).unwrap();
        let order = mwkr_schedule(&one_job);
        assert_eq!(order.rows(), &[vec![0], vec![0], vec![0]]);
        assert_eq!(EventDecoder::new(&one_job).makespan(&order), 12);

        let one_machine = Instance::new(vec![vec![2], vec![5], vec![3]]).unwrap();
        let order = mwkr_schedule(&one_machine);
        assert_eq!(order.rows(), &[vec![0, 1, 2]]);
        assert_eq!(EventDecoder::new(&one_machine).makespan(&order), 10);
    }
}
