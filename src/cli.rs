// CLI-specific types and structures
// This module contains the command-line interface definitions and parsing logic

use std::path::PathBuf;

use clap::Parser;

/// Processing mode, in increasing order of sophistication.
#[derive(clap::ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    /// Process files one at a time on the calling thread
    Sequential,
    /// Spawn one thread per file; resource use scales with file count
    Spawn,
    /// Fixed-size worker pool pulling from a bounded queue
    #[default]
    Pool,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Sequential => "sequential",
            Mode::Spawn => "spawn",
            Mode::Pool => "pool",
        }
    }
}

#[derive(Parser)]
#[command(name = "logtally")]
#[command(about = "A command-line JSON access-log analyzer with parallel file processing")]
#[command(
    long_about = "A command-line JSON access-log analyzer with parallel file processing\n\nReads newline-delimited JSON access logs, tallies status-code frequencies per\nfile on a pool of worker threads, and merges the per-file tallies into one\ndeterministic summary: total requests, status distribution, and error rate.\n\nMODES:\n  sequential  One file at a time - the baseline\n  spawn       One thread per file - fastest start, unbounded resource use\n  pool        Fixed worker pool over a bounded queue (default)\n\nCOMMON EXAMPLES:\n  logtally ./logs\n  logtally ./logs --mode sequential --timings results.txt\n  logtally access_001.log access_002.log -w 4\n\nGenerate a synthetic corpus first with: loggen --output ./logs"
)]
#[command(version)]
pub struct Cli {
    /// Log files or directories to analyze (directories are expanded
    /// with --pattern; defaults to ./logs)
    pub paths: Vec<String>,

    /// Glob pattern applied inside directories
    #[arg(
        long = "pattern",
        default_value = "*.log",
        help_heading = "Input Options"
    )]
    pub pattern: String,

    /// Processing mode
    #[arg(
        long = "mode",
        value_enum,
        default_value = "pool",
        help_heading = "Performance Options"
    )]
    pub mode: Mode,

    /// Number of worker threads (0 = number of CPU cores)
    #[arg(
        short = 'w',
        long = "workers",
        default_value_t = 0,
        help_heading = "Performance Options"
    )]
    pub workers: usize,

    /// Work queue capacity (default: 2x workers)
    #[arg(long = "queue-size", help_heading = "Performance Options")]
    pub queue_size: Option<usize>,

    /// Publish one tally per worker instead of one per file
    #[arg(long = "per-worker", help_heading = "Performance Options")]
    pub per_worker: bool,

    /// Record this run's elapsed time in FILE, keyed by mode
    #[arg(long = "timings", value_name = "FILE", help_heading = "Output Options")]
    pub timings: Option<PathBuf>,

    /// Suppress the progress banner, printing only the report
    #[arg(short = 'q', long = "quiet", help_heading = "Output Options")]
    pub quiet: bool,
}
