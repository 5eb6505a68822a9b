//! Merge reducer: the single consumer of the pool's result channel.

use crossbeam_channel::Receiver;

use crate::tally::GlobalTally;

use super::types::{FileFailure, FileOutcome};

/// Drain every published outcome and sum the tallies into the global
/// result.
///
/// Returns only once the channel is closed, which happens exactly when
/// every sender — the workers and the orchestrator's own clone — has
/// gone away. A worker that dies without publishing drops its sender
/// during unwind, so this loop cannot hang on a crashed worker.
pub(crate) fn drain_outcomes(
    result_receiver: Receiver<FileOutcome>,
) -> (GlobalTally, Vec<FileFailure>) {
    let mut global = GlobalTally::default();
    let mut failures = Vec::new();

    for outcome in result_receiver {
        match outcome {
            FileOutcome::Tally(tally) => global.merge(&tally),
            FileOutcome::Failed(failure) => failures.push(failure),
        }
    }

    (global, failures)
}
