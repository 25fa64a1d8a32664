//! Property tests for order preservation and completion ordering.

use brickwall::test_utils::sleepy;
use brickwall::{BoxTask, Outcome, all, all_settled, some};
use proptest::prelude::*;

/// Gap between simulated latencies; wide enough that completion order is
/// decided by latency, not scheduling noise.
const STEP_MS: u64 = 60;

fn latency_ranks() -> impl Strategy<Value = Vec<u64>> {
    (1_usize..=5).prop_flat_map(|n| Just((0..n as u64).collect::<Vec<_>>()).prop_shuffle())
}

fn tasks_for(ranks: &[u64]) -> Vec<BoxTask<usize>> {
    ranks
        .iter()
        .enumerate()
        .map(|(position, rank)| sleepy(position, rank * STEP_MS))
        .collect()
}

fn positions_by_latency(ranks: &[u64]) -> Vec<usize> {
    let mut positions: Vec<usize> = (0..ranks.len()).collect();
    positions.sort_by_key(|&position| ranks[position]);
    positions
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(12))]

    #[test]
    fn all_settled_preserves_input_order(ranks in latency_ranks()) {
        let outcomes = all_settled(tasks_for(&ranks));
        let expected: Vec<Outcome<usize>> = (0..ranks.len()).map(Outcome::Ok).collect();
        prop_assert_eq!(outcomes, expected);
    }

    #[test]
    fn all_succeeds_in_input_order(ranks in latency_ranks()) {
        let (outcomes, ok) = all(tasks_for(&ranks));
        prop_assert!(ok);
        prop_assert_eq!(outcomes.len(), ranks.len());
        for (position, outcome) in outcomes.into_iter().enumerate() {
            prop_assert_eq!(outcome, Outcome::Ok(position));
        }
    }

    #[test]
    fn some_returns_the_fastest(ranks in latency_ranks(), wanted in 0_usize..7) {
        let outcomes = some(wanted, tasks_for(&ranks));
        let expected: Vec<Outcome<usize>> = positions_by_latency(&ranks)
            .into_iter()
            .take(wanted)
            .map(Outcome::Ok)
            .collect();
        prop_assert_eq!(outcomes, expected);
    }
}
