//! Worker loop for the file-processing pool.

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crossbeam_channel::{Receiver, Sender};

use crate::parser::{process_file, FileOpener};
use crate::tally::FileTally;

use super::types::{FileFailure, FileOutcome, TallyGrouping};

/// Pulls file paths until the work channel is drained and closed,
/// publishing completed tallies and failure advisories on the result
/// channel.
///
/// Each tally is owned by this worker alone until the `send` moves it
/// to the reducer. A file that fails to open is published as an
/// advisory and skipped; it never aborts the loop. When the
/// cancellation flag is raised the current item is finished and
/// published, then the loop exits without taking further work.
pub(crate) fn worker_loop(
    worker_id: usize,
    work_receiver: Receiver<PathBuf>,
    result_sender: Sender<FileOutcome>,
    opener: Arc<dyn FileOpener>,
    grouping: TallyGrouping,
    cancel: Arc<AtomicBool>,
) {
    let mut worker_tally = FileTally::new(format!("worker-{worker_id}"));

    while let Ok(path) = work_receiver.recv() {
        match process_file(opener.as_ref(), &path) {
            Ok(tally) => match grouping {
                TallyGrouping::PerFile => {
                    if result_sender.send(FileOutcome::Tally(tally)).is_err() {
                        break;
                    }
                }
                TallyGrouping::PerWorker => worker_tally.absorb(tally),
            },
            Err(err) => {
                let failure = FileFailure {
                    path: path.display().to_string(),
                    error: format!("{err:#}"),
                };
                if result_sender.send(FileOutcome::Failed(failure)).is_err() {
                    break;
                }
            }
        }

        if cancel.load(Ordering::Relaxed) {
            break;
        }
    }

    if worker_tally.files > 0 {
        let _ = result_sender.send(FileOutcome::Tally(worker_tally));
    }
}
