//! Open-shop GA problem.
//!
//! Chromosomes are permutations of all `n * m` operation ids, decoded by
//! the [`ListDecoder`]. Fitness is the decoded makespan.

use rand::Rng;

use super::operators::{swap_mutation, uniform_crossover};
use super::types::{Fitness, GaProblem, Individual};
use crate::decoder::{Decoder, ListDecoder};
use crate::instance::{Instance, Time};
use crate::random::random_permutation;

/// A permutation of operation ids with its cached makespan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationSequence {
    pub genes: Vec<usize>,
    pub fitness: Time,
}

impl OperationSequence {
    /// Wraps an unevaluated sequence.
    pub fn new(genes: Vec<usize>) -> Self {
        Self {
            genes,
            fitness: Time::worst(),
        }
    }
}

impl Individual for OperationSequence {
    type Fitness = Time;

    fn fitness(&self) -> Time {
        self.fitness
    }

    fn set_fitness(&mut self, fitness: Time) {
        self.fitness = fitness;
    }
}

/// GA binding for an open-shop instance.
pub struct OpenShopGa<'a> {
    decoder: ListDecoder<'a>,
}

impl<'a> OpenShopGa<'a> {
    pub fn new(instance: &'a Instance) -> Self {
        Self {
            decoder: ListDecoder::new(instance),
        }
    }

    pub fn decoder(&self) -> &ListDecoder<'a> {
        &self.decoder
    }
}

impl GaProblem for OpenShopGa<'_> {
    type Individual = OperationSequence;

    fn create_individual<R: Rng>(&self, rng: &mut R) -> OperationSequence {
        OperationSequence::new(random_permutation(
            self.decoder.instance().operation_count(),
            rng,
        ))
    }

    fn evaluate(&self, individual: &OperationSequence) -> Time {
        self.decoder.makespan(&individual.genes)
    }

    fn crossover<R: Rng>(
        &self,
        parent1: &OperationSequence,
        parent2: &OperationSequence,
        rng: &mut R,
    ) -> (OperationSequence, OperationSequence) {
        let (a, b) = uniform_crossover(&parent1.genes, &parent2.genes, rng);
        (OperationSequence::new(a), OperationSequence::new(b))
    }

    fn mutate<R: Rng>(&self, individual: &mut OperationSequence, rng: &mut R) {
        swap_mutation(&mut individual.genes, rng);
    }
}
