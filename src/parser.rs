//! NDJSON entry parsing and per-file tallying.
//!
//! One access-log file is a stream of newline-delimited JSON objects.
//! Malformed lines are skipped without surfacing an error; only a file
//! that cannot be opened fails the unit of work.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result};

use crate::record::LogRecord;
use crate::tally::FileTally;

/// Lazy iterator over the well-formed records of an NDJSON stream.
///
/// Consumes the stream; not restartable. A read error mid-stream ends
/// the sequence the same way EOF does.
pub struct RecordLines<R> {
    reader: R,
    buf: String,
}

impl<R: BufRead> RecordLines<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: String::new(),
        }
    }
}

impl<R: BufRead> Iterator for RecordLines<R> {
    type Item = LogRecord;

    fn next(&mut self) -> Option<LogRecord> {
        loop {
            self.buf.clear();
            match self.reader.read_line(&mut self.buf) {
                Ok(0) | Err(_) => return None,
                Ok(_) => {}
            }
            let line = self.buf.trim();
            if line.is_empty() {
                continue;
            }
            match serde_json::from_str::<LogRecord>(line) {
                Ok(record) => return Some(record),
                Err(_) => continue,
            }
        }
    }
}

/// Seam between the processing engine and the filesystem. Tests
/// substitute instrumented readers to observe handle usage.
pub trait FileOpener: Send + Sync {
    fn open(&self, path: &Path) -> io::Result<Box<dyn BufRead + Send>>;
}

/// Opens plain files from the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsOpener;

impl FileOpener for FsOpener {
    fn open(&self, path: &Path) -> io::Result<Box<dyn BufRead + Send>> {
        let file = File::open(path)?;
        Ok(Box::new(BufReader::new(file)))
    }
}

/// Parse one log file into a fresh tally.
///
/// The returned tally is exclusively owned by the caller until it is
/// published. An open failure is the caller's to report; it produces
/// no tally at all.
pub fn process_file(opener: &dyn FileOpener, path: &Path) -> Result<FileTally> {
    let reader = opener
        .open(path)
        .with_context(|| format!("failed to open {}", path.display()))?;

    let mut tally = FileTally::new(path.display().to_string());
    for record in RecordLines::new(reader) {
        tally.record(record.status);
    }
    tally.files = 1;
    Ok(tally)
}
