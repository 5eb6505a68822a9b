//! Processing-mode dispatch: the sequential baseline, the unbounded
//! spawn-per-file variant, and the bounded worker pool. All three
//! produce identical tallies; they differ only in how work is
//! distributed.

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{anyhow, Result};
use crossbeam_channel::unbounded;

use crate::config::{Config, Mode};
use crate::parallel::{
    drain_outcomes, FileFailure, FileOutcome, ParallelProcessor, PoolConfig,
};
use crate::parser::{process_file, FileOpener, FsOpener};
use crate::tally::GlobalTally;

/// Outcome of one analysis run.
#[derive(Debug)]
pub struct Analysis {
    pub tally: GlobalTally,
    pub failures: Vec<FileFailure>,
    pub elapsed: Duration,
}

/// Analyze `files` according to the configured mode.
pub fn run(config: &Config, files: Vec<PathBuf>, cancel: Arc<AtomicBool>) -> Result<Analysis> {
    run_with_opener(config, files, Arc::new(FsOpener), cancel)
}

/// Entry point with an explicit opener, used by tests to instrument
/// file-handle usage.
pub fn run_with_opener(
    config: &Config,
    files: Vec<PathBuf>,
    opener: Arc<dyn FileOpener>,
    cancel: Arc<AtomicBool>,
) -> Result<Analysis> {
    let start = Instant::now();

    let (tally, failures) = match config.mode {
        Mode::Sequential => run_sequential(files, opener.as_ref(), &cancel),
        Mode::Spawn => run_spawn(files, opener, &cancel)?,
        Mode::Pool => {
            let pool = ParallelProcessor::new(PoolConfig {
                num_workers: config.effective_workers(),
                queue_capacity: config.effective_queue_capacity(),
                grouping: config.grouping,
            });
            pool.run(files, opener, Arc::clone(&cancel))?
        }
    };

    Ok(Analysis {
        tally,
        failures,
        elapsed: start.elapsed(),
    })
}

/// Baseline: one file at a time on the calling thread.
fn run_sequential(
    files: Vec<PathBuf>,
    opener: &dyn FileOpener,
    cancel: &AtomicBool,
) -> (GlobalTally, Vec<FileFailure>) {
    let mut global = GlobalTally::default();
    let mut failures = Vec::new();

    for path in files {
        if cancel.load(Ordering::Relaxed) {
            break;
        }
        match process_file(opener, &path) {
            Ok(tally) => global.merge(&tally),
            Err(err) => failures.push(FileFailure {
                path: path.display().to_string(),
                error: format!("{err:#}"),
            }),
        }
    }

    (global, failures)
}

/// Unbounded fan-out: one thread per file. Simplest concurrent
/// regime, but file handles and stacks scale with the file count.
fn run_spawn(
    files: Vec<PathBuf>,
    opener: Arc<dyn FileOpener>,
    cancel: &AtomicBool,
) -> Result<(GlobalTally, Vec<FileFailure>)> {
    let (result_sender, result_receiver) = unbounded();

    let mut handles = Vec::with_capacity(files.len());
    for path in files {
        if cancel.load(Ordering::Relaxed) {
            break;
        }
        let result_sender = result_sender.clone();
        let opener = Arc::clone(&opener);
        handles.push(thread::spawn(move || {
            let outcome = match process_file(opener.as_ref(), &path) {
                Ok(tally) => FileOutcome::Tally(tally),
                Err(err) => FileOutcome::Failed(FileFailure {
                    path: path.display().to_string(),
                    error: format!("{err:#}"),
                }),
            };
            let _ = result_sender.send(outcome);
        }));
    }
    drop(result_sender);

    let (global, failures) = drain_outcomes(result_receiver);

    for (idx, handle) in handles.into_iter().enumerate() {
        handle
            .join()
            .map_err(|_| anyhow!("file thread {idx} panicked"))?;
    }

    Ok((global, failures))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_corpus(dir: &std::path::Path) -> Vec<PathBuf> {
        let mut files = Vec::new();
        for i in 0..5 {
            let path = dir.join(format!("access_{i}.log"));
            fs::write(&path, "{\"status\":200}\n{\"status\":500}\n").unwrap();
            files.push(path);
        }
        files
    }

    fn analyze(mode: Mode, files: Vec<PathBuf>) -> Analysis {
        let config = Config {
            mode,
            workers: 2,
            ..Config::default()
        };
        run(&config, files, Arc::new(AtomicBool::new(false))).unwrap()
    }

    #[test]
    fn all_modes_agree() {
        let dir = tempfile::tempdir().unwrap();
        let files = write_corpus(dir.path());

        let sequential = analyze(Mode::Sequential, files.clone());
        let spawn = analyze(Mode::Spawn, files.clone());
        let pool = analyze(Mode::Pool, files);

        assert_eq!(sequential.tally, spawn.tally);
        assert_eq!(spawn.tally, pool.tally);
        assert_eq!(pool.tally.total, 10);
        assert_eq!(pool.tally.files, 5);
    }

    #[test]
    fn sequential_reports_failures_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let mut files = write_corpus(dir.path());
        files.push(dir.path().join("gone.log"));

        let analysis = analyze(Mode::Sequential, files);
        assert_eq!(analysis.failures.len(), 1);
        assert_eq!(analysis.tally.files, 5);
    }
}
