//! Open-shop SA problem.
//!
//! Starts from the MWKR machine order and moves by swapping two jobs in
//! one machine's row. Cost is the event-simulation makespan.

use rand::Rng;

use super::types::SaProblem;
use crate::constructive::mwkr_schedule;
use crate::decoder::{Decoder, EventDecoder};
use crate::instance::{Instance, Time};
use crate::random::distinct_pair;
use crate::schedule::MachineOrder;

/// SA binding for an open-shop instance.
pub struct OpenShopSa<'a> {
    decoder: EventDecoder<'a>,
}

impl<'a> OpenShopSa<'a> {
    pub fn new(instance: &'a Instance) -> Self {
        Self {
            decoder: EventDecoder::new(instance),
        }
    }

    pub fn decoder(&self) -> &EventDecoder<'a> {
        &self.decoder
    }
}

impl SaProblem for OpenShopSa<'_> {
    type Solution = MachineOrder;

    fn initial_solution<R: Rng>(&self, _rng: &mut R) -> MachineOrder {
        mwkr_schedule(self.decoder.instance())
    }

    fn cost(&self, order: &MachineOrder) -> Time {
        self.decoder.makespan(order)
    }

    /// Swaps two distinct positions in a uniformly chosen machine row.
    fn neighbor<R: Rng>(&self, order: &MachineOrder, rng: &mut R) -> Option<MachineOrder> {
        if order.jobs() < 2 || order.machines() == 0 {
            return None;
        }
        let machine = rng.random_range(0..order.machines());
        let (a, b) = distinct_pair(order.jobs(), rng);
        Some(order.with_swap(machine, a, b))
    }
}
