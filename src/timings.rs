//! Per-mode run-timings file.
//!
//! Keeps one `mode=seconds` line per processing mode, merged with
//! whatever is already on disk and rewritten through a temp file in
//! the same directory, so a concurrent reader never observes a torn
//! write. Recording the same mode twice replaces its entry.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

const MODE_ORDER: [&str; 3] = ["sequential", "spawn", "pool"];

/// Record `elapsed_secs` for `mode`, preserving other modes' entries.
pub fn record(path: &Path, mode: &str, elapsed_secs: f64) -> Result<()> {
    let mut entries = load(path);
    entries.insert(mode.to_string(), elapsed_secs);
    save(path, &entries)
}

fn load(path: &Path) -> HashMap<String, f64> {
    let mut entries = HashMap::new();
    let Ok(data) = fs::read_to_string(path) else {
        return entries;
    };
    for line in data.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        // "pool=0.42 (4.76x faster than sequential)" keeps only the number
        if let Some((mode, rest)) = line.split_once('=') {
            if let Some(value) = rest.split_whitespace().next() {
                if let Ok(secs) = value.parse::<f64>() {
                    entries.insert(mode.to_string(), secs);
                }
            }
        }
    }
    entries
}

fn save(path: &Path, entries: &HashMap<String, f64>) -> Result<()> {
    let baseline = entries
        .get("sequential")
        .copied()
        .filter(|secs| *secs > 0.0);

    let mut out = String::new();
    for mode in MODE_ORDER {
        let Some(secs) = entries.get(mode) else {
            continue;
        };
        out.push_str(&format!("{mode}={secs:.2}"));
        if mode != "sequential" && *secs > 0.0 {
            if let Some(base) = baseline {
                out.push_str(&format!(" ({:.2}x faster than sequential)", base / secs));
            }
        }
        out.push('\n');
    }

    let tmp = path.with_extension("tmp");
    fs::write(&tmp, out).with_context(|| format!("failed to write {}", tmp.display()))?;
    fs::rename(&tmp, path).with_context(|| format!("failed to replace {}", path.display()))?;
    Ok(())
}
