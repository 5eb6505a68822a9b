use serde::{Deserialize, Serialize};

/// One parsed access-log entry.
///
/// Field names match the wire format emitted by `loggen` and expected
/// from upstream collectors. Absent fields deserialize to their zero
/// values; only structurally invalid JSON or type mismatches reject a
/// record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogRecord {
    pub timestamp: String,
    pub method: String,
    pub path: String,
    pub status: u16,
    pub response_time_ms: u64,
    pub bytes: u64,
    pub user_id: String,
    pub ip: String,
}

impl Default for LogRecord {
    fn default() -> Self {
        Self {
            timestamp: String::new(),
            method: String::new(),
            path: String::new(),
            status: 0,
            response_time_ms: 0,
            bytes: 0,
            user_id: String::new(),
            ip: String::new(),
        }
    }
}
