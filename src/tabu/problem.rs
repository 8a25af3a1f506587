//! Open-shop tabu problem.
//!
//! The neighborhood of a machine order is every single swap of two jobs
//! within one machine's row, enumerated machine by machine and then by
//! position pair `(a, b)` with `a < b`. Cost is the event-simulation
//! makespan.

use super::types::TabuProblem;
use crate::constructive::mwkr_schedule;
use crate::decoder::{Decoder, EventDecoder};
use crate::instance::{Instance, Time};
use crate::schedule::MachineOrder;

/// Tabu binding for an open-shop instance.
pub struct OpenShopTabu<'a> {
    decoder: EventDecoder<'a>,
}

impl<'a> OpenShopTabu<'a> {
    pub fn new(instance: &'a Instance) -> Self {
        Self {
            decoder: EventDecoder::new(instance),
        }
    }

    pub fn decoder(&self) -> &EventDecoder<'a> {
        &self.decoder
    }
}

impl TabuProblem for OpenShopTabu<'_> {
    type Solution = MachineOrder;

    fn initial_solution(&self) -> MachineOrder {
        mwkr_schedule(self.decoder.instance())
    }

    fn cost(&self, order: &MachineOrder) -> Time {
        self.decoder.makespan(order)
    }

    fn neighbors(&self, order: &MachineOrder) -> Vec<MachineOrder> {
        let n = order.jobs();
        let pairs = n * n.saturating_sub(1) / 2;
        let mut out = Vec::with_capacity(order.machines() * pairs);
        for machine in 0..order.machines() {
            for a in 0..n {
                for b in a + 1..n {
                    out.push(order.with_swap(machine, a, b));
                }
            }
        }
        out
    }
}
