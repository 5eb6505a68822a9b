//! Pool orchestration.

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;

use anyhow::{anyhow, Result};
use crossbeam_channel::{bounded, unbounded};

use crate::parser::FileOpener;
use crate::tally::GlobalTally;

use super::reducer::drain_outcomes;
use super::types::{FileFailure, PoolConfig};
use super::worker::worker_loop;

/// Bounded worker pool over independent log files.
pub struct ParallelProcessor {
    config: PoolConfig,
}

impl ParallelProcessor {
    pub fn new(config: PoolConfig) -> Self {
        Self { config }
    }

    /// Process every file and merge the partial tallies.
    ///
    /// Every path is delivered to exactly one worker, exactly once,
    /// with no ordering guarantee on which worker gets which file. The
    /// reducer runs on the calling thread and finalizes once the last
    /// worker has dropped its result sender; worker panics are
    /// surfaced after the tally is complete rather than hanging the
    /// barrier.
    pub fn run(
        &self,
        files: Vec<PathBuf>,
        opener: Arc<dyn FileOpener>,
        cancel: Arc<AtomicBool>,
    ) -> Result<(GlobalTally, Vec<FileFailure>)> {
        let num_workers = self.config.num_workers.max(1);
        let (work_sender, work_receiver) = bounded(self.config.queue_capacity.max(1));
        let (result_sender, result_receiver) = unbounded();

        let feeder_cancel = Arc::clone(&cancel);
        let feeder = thread::spawn(move || {
            for path in files {
                if feeder_cancel.load(Ordering::Relaxed) {
                    break;
                }
                if work_sender.send(path).is_err() {
                    break;
                }
            }
            // Dropping the sender closes the work queue.
        });

        let mut workers = Vec::with_capacity(num_workers);
        for worker_id in 0..num_workers {
            let work_receiver = work_receiver.clone();
            let result_sender = result_sender.clone();
            let worker_opener = Arc::clone(&opener);
            let worker_cancel = Arc::clone(&cancel);
            let grouping = self.config.grouping;

            workers.push(thread::spawn(move || {
                worker_loop(
                    worker_id,
                    work_receiver,
                    result_sender,
                    worker_opener,
                    grouping,
                    worker_cancel,
                )
            }));
        }

        // The reducer must observe channel closure once the workers
        // are done: give up the orchestrator's own handles first.
        drop(work_receiver);
        drop(result_sender);

        let (global, failures) = drain_outcomes(result_receiver);

        feeder
            .join()
            .map_err(|_| anyhow!("feeder thread panicked"))?;
        for (idx, handle) in workers.into_iter().enumerate() {
            handle
                .join()
                .map_err(|_| anyhow!("worker thread {idx} panicked"))?;
        }

        Ok((global, failures))
    }
}
