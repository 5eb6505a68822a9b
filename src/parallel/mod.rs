//! Parallel file-processing pool for logtally.
//!
//! Splits N independent log files across a fixed set of worker
//! threads, bounding concurrent file handles to the pool size
//! regardless of how many files are queued.
//!
//! # Module Structure
//!
//! - `types`: pool configuration and channel message types
//! - `worker`: worker loop pulling paths until the work queue closes
//! - `reducer`: single-threaded merge of published tallies
//! - `processor`: orchestration and completion barrier
//!
//! # Lifecycle
//!
//! The feeder pushes every path into a small bounded channel and drops
//! its sender (queue close happens-after all sends); workers drain the
//! queue, publish outcomes, and drop their result senders on exit
//! (result close happens-after all workers terminate); the reducer
//! drains the result channel to closure. Merging is commutative, so
//! the global tally is identical regardless of scheduling, file order,
//! or which files a worker happened to pick up.

mod processor;
mod reducer;
mod types;
mod worker;

pub(crate) use reducer::drain_outcomes;

pub use processor::ParallelProcessor;
pub use types::{FileFailure, FileOutcome, PoolConfig, TallyGrouping};
