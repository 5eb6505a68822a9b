use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use clap::Parser;

use logtally::cli::{Cli, Mode};
use logtally::config::Config;
use logtally::platform::{ExitCode, SignalHandler};
use logtally::{discover, report, runner, timings};

fn main() {
    let cli = Cli::parse();
    let config = Config::from_cli(&cli);

    let cancel = Arc::new(AtomicBool::new(false));
    let _signals = match SignalHandler::new(Arc::clone(&cancel)) {
        Ok(handler) => handler,
        Err(err) => {
            eprintln!("logtally: {err:#}");
            ExitCode::GeneralError.exit();
        }
    };

    let files = match discover::discover_files(&config.paths, &config.pattern) {
        Ok(files) => files,
        Err(err) => {
            eprintln!("logtally: {err:#}");
            ExitCode::InvalidUsage.exit();
        }
    };

    if !config.quiet {
        match config.mode {
            Mode::Sequential => {
                println!("Processing {} log files sequentially...", files.len());
            }
            mode => {
                println!(
                    "Processing {} log files with {} workers ({} mode)...",
                    files.len(),
                    config.effective_workers(),
                    mode.as_str()
                );
            }
        }
    }

    let analysis = match runner::run(&config, files, Arc::clone(&cancel)) {
        Ok(analysis) => analysis,
        Err(err) => {
            eprintln!("logtally: {err:#}");
            ExitCode::GeneralError.exit();
        }
    };

    for failure in &analysis.failures {
        eprintln!("warning: skipped {}: {}", failure.path, failure.error);
    }

    print!("\n{}", report::render(&analysis));

    if let Some(path) = &config.timings {
        if let Err(err) = timings::record(path, config.mode.as_str(), analysis.elapsed.as_secs_f64())
        {
            eprintln!("warning: failed to record timings: {err:#}");
        }
    }

    if cancel.load(Ordering::Relaxed) {
        ExitCode::SignalInt.exit();
    }
    ExitCode::Success.exit();
}
