//! Most-work-remaining rules over the shop counters.
//!
//! The constructive heuristic and the event decoder rank the same kind of
//! [`Candidate`] with the same chains, so the tie-break order lives here
//! once.

use super::engine::{RuleEngine, TieBreaker};
use super::types::PriorityRule;
use crate::instance::Time;
use crate::schedule::ShopState;

/// A `(job, machine)` operation proposed for dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    pub machine: usize,
    pub job: usize,
    pub duration: Time,
}

// Times never exceed an instance's total work, which `Instance::new`
// bounds by `i64::MAX`, so the casts below are lossless.
#[inline]
fn neg(t: Time) -> i64 {
    -(t as i64)
}

/// Prefers the machine that frees up first.
pub struct EarliestAvailable;

impl<'a> PriorityRule<Candidate, ShopState<'a>> for EarliestAvailable {
    fn name(&self) -> &str {
        "EarliestAvailable"
    }

    fn score(&self, c: &Candidate, state: &ShopState<'a>) -> i64 {
        state.machines[c.machine].time_available as i64
    }
}

/// Prefers the machine with the most undispatched work.
pub struct MostMachineWork;

impl<'a> PriorityRule<Candidate, ShopState<'a>> for MostMachineWork {
    fn name(&self) -> &str {
        "MWKR-M"
    }

    fn score(&self, c: &Candidate, state: &ShopState<'a>) -> i64 {
        neg(state.machines[c.machine].remaining_work)
    }
}

/// Prefers the job with the most work left once this operation is done.
pub struct MostJobWork;

impl<'a> PriorityRule<Candidate, ShopState<'a>> for MostJobWork {
    fn name(&self) -> &str {
        "MWKR-J"
    }

    fn score(&self, c: &Candidate, state: &ShopState<'a>) -> i64 {
        neg(state.jobs[c.job].remaining_work.saturating_sub(c.duration))
    }
}

/// Orders machines: earliest available, then most machine work, then most
/// remaining work of the job each would dispatch, then machine index.
///
/// Candidates must be listed in machine order for the index tie-break to
/// mean the machine index.
pub fn machine_ranking<'a>() -> RuleEngine<Candidate, ShopState<'a>> {
    RuleEngine::new()
        .with_rule(EarliestAvailable)
        .with_rule(MostMachineWork)
        .with_rule(MostJobWork)
        .with_tie_breaker(TieBreaker::ByIndex)
}

/// Orders the jobs one machine could take: most remaining job work, then
/// job index.
pub fn job_ranking<'a>() -> RuleEngine<Candidate, ShopState<'a>> {
    RuleEngine::new()
        .with_rule(MostJobWork)
        .with_tie_breaker(TieBreaker::ByIndex)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instance::Instance;

    fn candidates(state: &ShopState<'_>, picks: &[(usize, usize)]) -> Vec<Candidate> {
        picks
            .iter()
            .map(|&(machine, job)| Candidate {
                machine,
                job,
                duration: state.instance().duration(job, machine),
            })
            .collect()
    }

    #[test]
    fn test_machine_ranking_prefers_heavier_machine() {
        let inst = Instance::new(vec![vec![3, 2], vec![2, 4]]).unwrap();
        let state = ShopState::new(&inst);
        let cands = candidates(&state, &[(0, 0), (1, 0)]);
        // machine 1 carries 6 units against machine 0's 5
        assert_eq!(machine_ranking().sort_indices(&cands, &state), vec![1, 0]);
    }

    #[test]
    fn test_machine_ranking_prefers_available_machine() {
        let inst = Instance::new(vec![vec![3, 2], vec![2, 4]]).unwrap();
        let mut state = ShopState::new(&inst);
        state.dispatch(1, 1);
        let cands = candidates(&state, &[(0, 0), (1, 0)]);
        assert_eq!(machine_ranking().select_best(&cands, &state), Some(0));
    }

    #[test]
    fn test_job_work_breaks_machine_tie() {
        // both machines carry 4 units; job 1 keeps more work after either
        let inst = Instance::new(vec![vec![2, 1], vec![2, 3]]).unwrap();
        let state = ShopState::new(&inst);
        let cands = candidates(&state, &[(0, 0), (1, 1)]);
        assert_eq!(machine_ranking().sort_indices(&cands, &state), vec![1, 0]);
    }

    #[test]
    fn test_job_ranking_ties_by_index() {
        let inst = Instance::new(vec![vec![1, 4], vec![1, 4], vec![1, 2]]).unwrap();
        let state = ShopState::new(&inst);
        let cands = candidates(&state, &[(0, 0), (0, 1), (0, 2)]);
        assert_eq!(job_ranking().sort_indices(&cands, &state), vec![0, 1, 2]);
        assert_eq!(job_ranking().rule_names(), vec!["MWKR-J"]);
    }
}
