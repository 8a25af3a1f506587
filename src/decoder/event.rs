//! Event-simulation decoder for machine-order encodings.
//!
//! The schedule is built in `n` rounds. In round `r` every machine
//! dispatches the `r`-th job of its row. The machines of a round are
//! ordered once by [`machine_ranking`]: earliest available first, then
//! most remaining machine work, then most remaining work of the job about
//! to be dispatched, then machine index. Each operation starts as soon as
//! both its job and its machine are free.

use super::{Decoded, Decoder};
use crate::dispatching::{machine_ranking, Candidate, RuleEngine};
use crate::instance::{Instance, Time};
use crate::schedule::{MachineOrder, ShopState, Timetable};

/// Decodes [`MachineOrder`] encodings by round-based event simulation.
///
/// # Examples
///
/// ```
/// use u_openshop::decoder::{Decoder, EventDecoder};
/// use u_openshop::instance::Instance;
/// use u_openshop::schedule::MachineOrder;
///
/// let instance = Instance::new(vec![vec![3, 2], vec![2, 4]]).unwrap();
/// let decoder = EventDecoder::new(&instance);
/// let order = MachineOrder::from_rows(vec![vec![1, 0], vec![0, 1]]);
/// assert_eq!(decoder.makespan(&order), 6);
/// ```
pub struct EventDecoder<'a> {
    instance: &'a Instance,
    ranking: RuleEngine<Candidate, ShopState<'a>>,
}

impl<'a> EventDecoder<'a> {
    pub fn new(instance: &'a Instance) -> Self {
        Self {
            instance,
            ranking: machine_ranking(),
        }
    }

    pub fn instance(&self) -> &'a Instance {
        self.instance
    }
}

impl Decoder for EventDecoder<'_> {
    type Encoding = MachineOrder;

    fn decode(&self, order: &MachineOrder) -> Decoded {
        let inst = self.instance;
        let (n, m) = (inst.jobs(), inst.machines());
        assert_eq!(order.machines(), m, "machine order has wrong row count");
        assert!(
            order.rows().iter().all(|row| row.len() == n),
            "machine order row has wrong length"
        );
        debug_assert!(order.is_valid(n, m), "machine order rows are not permutations");

        let mut state = ShopState::new(inst);
        let mut timetable = Timetable::with_capacity(inst.operation_count());
        let mut sequence = Vec::with_capacity(inst.operation_count());

        for round in 0..n {
            let candidates: Vec<Candidate> = (0..m)
                .map(|machine| {
                    let job = order.job_at(machine, round);
                    Candidate {
                        machine,
                        job,
                        duration: inst.duration(job, machine),
                    }
                })
                .collect();

            for idx in self.ranking.sort_indices(&candidates, &state) {
                let c = candidates[idx];
                timetable.push(state.dispatch(c.job, c.machine));
                sequence.push(inst.operation_id(c.job, c.machine));
            }
        }

        debug_assert!(state.is_complete());
        let makespan: Time = state.makespan();
        Decoded {
            makespan,
            timetable,
            sequence,
        }
    }
}
