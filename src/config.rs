//! Runtime configuration resolved from the command line.

use std::path::PathBuf;

use crate::cli::Cli;
use crate::parallel::TallyGrouping;

pub use crate::cli::Mode;

/// Everything the engine needs to know about one run.
#[derive(Debug, Clone)]
pub struct Config {
    pub paths: Vec<String>,
    pub pattern: String,
    pub mode: Mode,
    /// Worker count; 0 means one per CPU core.
    pub workers: usize,
    pub queue_size: Option<usize>,
    pub grouping: TallyGrouping,
    pub timings: Option<PathBuf>,
    pub quiet: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            paths: vec!["./logs".to_string()],
            pattern: "*.log".to_string(),
            mode: Mode::default(),
            workers: 0,
            queue_size: None,
            grouping: TallyGrouping::default(),
            timings: None,
            quiet: false,
        }
    }
}

impl Config {
    pub fn from_cli(cli: &Cli) -> Self {
        let paths = if cli.paths.is_empty() {
            vec!["./logs".to_string()]
        } else {
            cli.paths.clone()
        };
        Self {
            paths,
            pattern: cli.pattern.clone(),
            mode: cli.mode,
            workers: cli.workers,
            queue_size: cli.queue_size,
            grouping: if cli.per_worker {
                TallyGrouping::PerWorker
            } else {
                TallyGrouping::PerFile
            },
            timings: cli.timings.clone(),
            quiet: cli.quiet,
        }
    }

    pub fn effective_workers(&self) -> usize {
        if self.workers == 0 {
            num_cpus::get().max(1)
        } else {
            self.workers
        }
    }

    pub fn effective_queue_capacity(&self) -> usize {
        self.queue_size
            .unwrap_or_else(|| self.effective_workers() * 2)
            .max(1)
    }
}
