//! Type definitions for the parallel file-processing pool.

use crate::tally::FileTally;

/// How workers group their published tallies. Both groupings produce
/// an identical global result; per-worker trades publish overhead for
/// coarser partials.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TallyGrouping {
    /// One tally published per processed file.
    #[default]
    PerFile,
    /// One tally published per worker, folded across all its files.
    PerWorker,
}

/// Configuration for the worker pool.
#[derive(Debug, Clone)]
pub struct PoolConfig {
    pub num_workers: usize,
    /// Work-queue capacity. Only needs to hold in-flight work, not the
    /// whole file list, so O(workers) is enough.
    pub queue_capacity: usize,
    pub grouping: TallyGrouping,
}

impl Default for PoolConfig {
    fn default() -> Self {
        let workers = num_cpus::get().max(1);
        Self {
            num_workers: workers,
            queue_capacity: workers * 2,
            grouping: TallyGrouping::PerFile,
        }
    }
}

/// A file that could not be opened or read; advisory only, the run
/// continues without it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileFailure {
    pub path: String,
    pub error: String,
}

/// Message published by a worker on the result channel.
#[derive(Debug)]
pub enum FileOutcome {
    Tally(FileTally),
    Failed(FileFailure),
}
