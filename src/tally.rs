use std::collections::HashMap;

/// Status-code tally for one unit of work (a file, or a worker's whole
/// share of the run).
///
/// Owned exclusively by the thread that fills it and handed off by
/// value once complete; never mutated after publication.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FileTally {
    /// Source file name or `worker-N`.
    pub label: String,
    /// Successfully processed files folded into this tally.
    pub files: usize,
    pub total: u64,
    pub status_counts: HashMap<u16, u64>,
}

impl FileTally {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Default::default()
        }
    }

    /// Count one record.
    pub fn record(&mut self, status: u16) {
        self.total += 1;
        *self.status_counts.entry(status).or_insert(0) += 1;
    }

    /// Fold another completed tally into this one (per-worker grouping).
    pub fn absorb(&mut self, other: FileTally) {
        self.files += other.files;
        self.total += other.total;
        for (status, count) in other.status_counts {
            *self.status_counts.entry(status).or_insert(0) += count;
        }
    }
}

/// The fully merged result across all processed files.
///
/// Built once, by the merge reducer, after every worker has published.
/// Invariant: `total == status_counts.values().sum()`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GlobalTally {
    pub files: usize,
    pub total: u64,
    pub status_counts: HashMap<u16, u64>,
}

impl GlobalTally {
    /// Sum one partial tally into the global result. Commutative, so
    /// the merged outcome is independent of publication order.
    pub fn merge(&mut self, tally: &FileTally) {
        self.files += tally.files;
        self.total += tally.total;
        for (status, count) in &tally.status_counts {
            *self.status_counts.entry(*status).or_insert(0) += count;
        }
    }

    /// Percentage of 4xx and 5xx responses, 0.0 for an empty tally.
    pub fn error_rate(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        let errors: u64 = self
            .status_counts
            .iter()
            .filter(|(status, _)| (400..600).contains(*status))
            .map(|(_, count)| count)
            .sum();
        errors as f64 / self.total as f64 * 100.0
    }

    /// Status codes and counts, ascending by code.
    pub fn sorted_statuses(&self) -> Vec<(u16, u64)> {
        let mut statuses: Vec<(u16, u64)> = self
            .status_counts
            .iter()
            .map(|(status, count)| (*status, *count))
            .collect();
        statuses.sort_unstable_by_key(|(status, _)| *status);
        statuses
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tally_of(label: &str, statuses: &[u16]) -> FileTally {
        let mut tally = FileTally::new(label);
        for status in statuses {
            tally.record(*status);
        }
        tally.files = 1;
        tally
    }

    #[test]
    fn record_updates_total_and_counts() {
        let tally = tally_of("a.log", &[200, 200, 404]);
        assert_eq!(tally.total, 3);
        assert_eq!(tally.status_counts[&200], 2);
        assert_eq!(tally.status_counts[&404], 1);
    }

    #[test]
    fn absorb_sums_two_tallies() {
        let mut worker = FileTally::new("worker-0");
        worker.absorb(tally_of("a.log", &[200, 500]));
        worker.absorb(tally_of("b.log", &[200]));
        assert_eq!(worker.files, 2);
        assert_eq!(worker.total, 3);
        assert_eq!(worker.status_counts[&200], 2);
    }

    #[test]
    fn merge_is_commutative() {
        let a = tally_of("a.log", &[200, 301, 404]);
        let b = tally_of("b.log", &[200, 500, 500]);

        let mut forward = GlobalTally::default();
        forward.merge(&a);
        forward.merge(&b);

        let mut backward = GlobalTally::default();
        backward.merge(&b);
        backward.merge(&a);

        assert_eq!(forward, backward);
        assert_eq!(forward.total, 6);
        assert_eq!(forward.files, 2);
    }

    #[test]
    fn total_matches_status_sum_after_merge() {
        let mut global = GlobalTally::default();
        global.merge(&tally_of("a.log", &[200, 200, 404, 503]));
        global.merge(&tally_of("b.log", &[201]));
        assert_eq!(global.total, global.status_counts.values().sum::<u64>());
    }

    #[test]
    fn error_rate_counts_4xx_and_5xx() {
        let mut global = GlobalTally::default();
        global.merge(&tally_of("a.log", &[200, 200, 404, 500]));
        assert!((global.error_rate() - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn error_rate_of_empty_tally_is_zero() {
        assert_eq!(GlobalTally::default().error_rate(), 0.0);
    }

    #[test]
    fn sorted_statuses_ascend() {
        let mut global = GlobalTally::default();
        global.merge(&tally_of("a.log", &[503, 200, 404, 301]));
        let codes: Vec<u16> = global.sorted_statuses().iter().map(|(s, _)| *s).collect();
        assert_eq!(codes, vec![200, 301, 404, 503]);
    }
}
