//! Property tests for decoders, operators and search invariants.

use proptest::prelude::*;

use u_openshop::constructive::mwkr_schedule;
use u_openshop::decoder::{Decoder, EventDecoder, ListDecoder};
use u_openshop::ga::operators::{swap_mutation, uniform_crossover};
use u_openshop::instance::Instance;
use u_openshop::random::{create_rng, random_permutation};
use u_openshop::sa::{OpenShopSa, SaConfig, SaRunner};
use u_openshop::schedule::{check_feasibility, is_permutation, MachineOrder};
use u_openshop::tabu::{OpenShopTabu, TabuConfig, TabuList, TabuRunner};

/// Instances up to 5x5 with durations in `1..=20`.
fn instance_strategy(min_jobs: usize) -> impl Strategy<Value = Instance> {
    (min_jobs..=5usize, 1..=5usize)
        .prop_flat_map(|(n, m)| prop::collection::vec(prop::collection::vec(1u64..=20, m), n))
        .prop_map(|rows| Instance::new(rows).unwrap())
}

fn random_order(inst: &Instance, seed: u64) -> MachineOrder {
    let mut rng = create_rng(seed);
    MachineOrder::from_rows(
        (0..inst.machines())
            .map(|_| random_permutation(inst.jobs(), &mut rng))
            .collect(),
    )
}

proptest! {
    #[test]
    fn event_decoder_is_feasible_and_bounded(inst in instance_strategy(1), seed in any::<u64>()) {
        let order = random_order(&inst, seed);
        let decoder = EventDecoder::new(&inst);
        let out = decoder.decode(&order);
        prop_assert!(check_feasibility(&inst, &out.timetable).is_ok());
        prop_assert!(out.makespan >= inst.lower_bound());
        prop_assert_eq!(out.makespan, out.timetable.makespan());
        prop_assert!(is_permutation(&out.sequence, inst.operation_count()));
        // decoding is pure
        prop_assert_eq!(decoder.decode(&order), out);
    }

    #[test]
    fn list_decoder_is_feasible_and_bounded(inst in instance_strategy(1), seed in any::<u64>()) {
        let mut rng = create_rng(seed);
        let perm = random_permutation(inst.operation_count(), &mut rng);
        let decoder = ListDecoder::new(&inst);
        let out = decoder.decode(&perm);
        prop_assert!(check_feasibility(&inst, &out.timetable).is_ok());
        prop_assert!(out.makespan >= inst.lower_bound());
        prop_assert_eq!(decoder.decode(&perm), out);
    }

    #[test]
    fn single_job_makespan_is_row_sum(
        row in prop::collection::vec(1u64..=50, 1..=6),
        seed in any::<u64>(),
    ) {
        let inst = Instance::new(vec![row.clone()]).unwrap();
        let sum: u64 = row.iter().sum();
        let order = random_order(&inst, seed);
        prop_assert_eq!(EventDecoder::new(&inst).makespan(&order), sum);
        let mut rng = create_rng(seed);
        let perm = random_permutation(inst.operation_count(), &mut rng);
        prop_assert_eq!(ListDecoder::new(&inst).makespan(&perm), sum);
    }

    #[test]
    fn constructive_is_deterministic_and_valid(inst in instance_strategy(1)) {
        let a = mwkr_schedule(&inst);
        let b = mwkr_schedule(&inst);
        prop_assert!(a.is_valid(inst.jobs(), inst.machines()));
        prop_assert_eq!(&a, &b);
        let out = EventDecoder::new(&inst).decode(&a);
        prop_assert!(check_feasibility(&inst, &out.timetable).is_ok());
    }

    #[test]
    fn crossover_yields_permutations(len in 1usize..60, seed in any::<u64>()) {
        let mut rng = create_rng(seed);
        let p1 = random_permutation(len, &mut rng);
        let p2 = random_permutation(len, &mut rng);
        let (c1, c2) = uniform_crossover(&p1, &p2, &mut rng);
        prop_assert!(is_permutation(&c1, len));
        prop_assert!(is_permutation(&c2, len));
    }

    #[test]
    fn swap_mutation_changes_two_positions(len in 2usize..60, seed in any::<u64>()) {
        let mut rng = create_rng(seed);
        let before = random_permutation(len, &mut rng);
        let mut after = before.clone();
        swap_mutation(&mut after, &mut rng);
        prop_assert!(is_permutation(&after, len));
        let changed = before.iter().zip(&after).filter(|(a, b)| a != b).count();
        prop_assert_eq!(changed, 2);
    }

    #[test]
    fn tabu_memory_never_exceeds_capacity(
        capacity in 1usize..8,
        pushes in prop::collection::vec(any::<u8>(), 0..64),
    ) {
        let mut tabu = TabuList::new(capacity);
        for &v in &pushes {
            tabu.push(v);
            prop_assert!(tabu.len() <= capacity);
            prop_assert!(tabu.contains(&v));
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn annealing_best_is_monotone(inst in instance_strategy(2), seed in any::<u64>()) {
        let problem = OpenShopSa::new(&inst);
        let config = SaConfig::default()
            .with_max_iterations(400)
            .with_history_interval(10)
            .with_seed(seed);
        let result = SaRunner::run(&problem, &config).unwrap();
        for w in result.cost_history.windows(2) {
            prop_assert!(w[1] <= w[0]);
        }
        prop_assert!(result.best_cost >= inst.lower_bound());
        prop_assert!(result.best_cost <= problem.decoder().makespan(&mwkr_schedule(&inst)));
    }

    #[test]
    fn tabu_best_is_monotone(inst in instance_strategy(2)) {
        let problem = OpenShopTabu::new(&inst);
        let config = TabuConfig::default().with_max_iterations(15).with_tabu_length(4);
        let result = TabuRunner::run(&problem, &config).unwrap();
        prop_assert_eq!(result.cost_history.len(), result.iterations + 1);
        for w in result.cost_history.windows(2) {
            prop_assert!(w[1] <= w[0]);
        }
        prop_assert!(result.best_cost >= inst.lower_bound());
    }
}
