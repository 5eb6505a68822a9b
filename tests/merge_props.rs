// Property tests for the tally merge laws.

use std::collections::HashMap;

use proptest::prelude::*;

use logtally::tally::{FileTally, GlobalTally};

fn arb_tally() -> impl Strategy<Value = FileTally> {
    prop::collection::hash_map(100u16..600, 1u64..500, 0..8).prop_map(
        |counts: HashMap<u16, u64>| {
            let mut tally = FileTally::new("file");
            tally.files = 1;
            for (status, count) in counts {
                tally.total += count;
                tally.status_counts.insert(status, count);
            }
            tally
        },
    )
}

fn merge_all(tallies: &[FileTally]) -> GlobalTally {
    let mut global = GlobalTally::default();
    for tally in tallies {
        global.merge(tally);
    }
    global
}

proptest! {
    // Permuting the publication order never changes the merged result.
    #[test]
    fn merge_is_order_independent(
        tallies in prop::collection::vec(arb_tally(), 0..12),
        seed in any::<u64>(),
    ) {
        let forward = merge_all(&tallies);

        let mut shuffled = tallies.clone();
        fastrand::Rng::with_seed(seed).shuffle(&mut shuffled);
        prop_assert_eq!(merge_all(&shuffled), forward);
    }

    // Grouping tallies per worker before merging is equivalent to
    // merging them one by one.
    #[test]
    fn merge_is_associative_over_grouping(
        tallies in prop::collection::vec(arb_tally(), 1..12),
        split in 0usize..12,
    ) {
        let flat = merge_all(&tallies);

        let split = split.min(tallies.len());
        let mut left = FileTally::new("worker-0");
        for tally in &tallies[..split] {
            left.absorb(tally.clone());
        }
        let mut right = FileTally::new("worker-1");
        for tally in &tallies[split..] {
            right.absorb(tally.clone());
        }

        let mut grouped = GlobalTally::default();
        grouped.merge(&left);
        grouped.merge(&right);

        prop_assert_eq!(grouped, flat);
    }

    // The core invariant: the grand total always equals the sum of the
    // per-status counts, and the per-partial totals.
    #[test]
    fn total_matches_status_sums(tallies in prop::collection::vec(arb_tally(), 0..12)) {
        let global = merge_all(&tallies);
        prop_assert_eq!(global.total, global.status_counts.values().sum::<u64>());
        prop_assert_eq!(global.total, tallies.iter().map(|t| t.total).sum::<u64>());
        prop_assert_eq!(global.files, tallies.len());
    }
}
