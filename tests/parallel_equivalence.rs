#![cfg(feature = "parallel")]

use algokit::{knapsack::knapsack, KnapsackProblem};
use proptest::prelude::*;

fn rolling_dp(capacity: usize, weights: &[usize], values: &[u64]) -> u64 {
    let mut best = vec![0u64; capacity + 1];
    for (&w, &v) in weights.iter().zip(values) {
        for c in (w..=capacity).rev() {
            best[c] = best[c].max(best[c - w] + v);
        }
    }
    best[capacity]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn wide_rows_match_sequential_reference(
        capacity in 4096usize..6000,
        items in proptest::collection::vec((1usize..3000, 0u64..1000), 0..12),
    ) {
        let (weights, values): (Vec<_>, Vec<_>) = items.into_iter().unzip();
        let expected = rolling_dp(capacity, &weights, &values);

        let problem = KnapsackProblem::new(capacity, &weights, &values).unwrap();
        prop_assert_eq!(problem.optimal_value(), expected);

        let solution = knapsack(capacity, &weights, &values, weights.len()).unwrap();
        prop_assert_eq!(solution.value, expected);
        prop_assert!(solution.total_weight(&weights) <= capacity);
        let picked: u64 = solution.selected_indices().map(|i| values[i]).sum();
        prop_assert_eq!(picked, expected);
    }
}
