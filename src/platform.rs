use std::process;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;

use anyhow::Result;

#[cfg(unix)]
use signal_hook::{
    consts::{SIGINT, SIGTERM},
    iterator::Signals,
};

/// Standard Unix exit codes
#[derive(Debug, Clone, Copy)]
pub enum ExitCode {
    Success = 0,
    GeneralError = 1,
    InvalidUsage = 2,
    SignalInt = 130, // 128 + SIGINT (2)
}

impl ExitCode {
    pub fn exit(self) -> ! {
        process::exit(self as i32)
    }
}

/// Signal handler for graceful shutdown.
///
/// The first SIGINT/SIGTERM raises the shared cancellation flag: the
/// distributor stops feeding, workers finish the item they hold and
/// exit, and the reducer finalizes on what arrived. A second signal
/// exits immediately with the conventional 128+signal code.
pub struct SignalHandler {
    _handle: thread::JoinHandle<()>,
}

impl SignalHandler {
    #[cfg(unix)]
    pub fn new(cancel: Arc<AtomicBool>) -> Result<Self> {
        let mut signals = Signals::new([SIGINT, SIGTERM])?;

        let handle = thread::spawn(move || {
            let mut shutdown_count = 0;
            for _sig in signals.forever() {
                cancel.store(true, Ordering::Relaxed);
                shutdown_count += 1;
                if shutdown_count > 1 {
                    ExitCode::SignalInt.exit();
                }
            }
        });

        Ok(Self { _handle: handle })
    }

    #[cfg(not(unix))]
    pub fn new(_cancel: Arc<AtomicBool>) -> Result<Self> {
        // No signal stream on this platform; cancellation still works
        // through the shared flag.
        let handle = thread::spawn(|| {});
        Ok(Self { _handle: handle })
    }
}
