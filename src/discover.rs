//! Input discovery: expands CLI paths into the ordered list of log
//! files the engine will process.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};

/// Expand each path into log files: directories are globbed with
/// `pattern`, plain paths are passed through as-is (a nonexistent file
/// stays in the list so the worker can report it as an advisory).
///
/// The result is name-sorted and deduplicated for a stable feeding
/// order. An empty result is a distribution error and aborts the run
/// before any work starts.
pub fn discover_files(paths: &[String], pattern: &str) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for raw in paths {
        let path = Path::new(raw);
        if path.is_dir() {
            let full = path.join(pattern);
            let glob_pattern = full
                .to_str()
                .with_context(|| format!("non-UTF-8 path: {}", path.display()))?;
            let entries = glob::glob(glob_pattern)
                .with_context(|| format!("invalid glob pattern {glob_pattern}"))?;
            for entry in entries {
                let entry =
                    entry.with_context(|| format!("failed to read entry under {raw}"))?;
                if entry.is_file() {
                    files.push(entry);
                }
            }
        } else {
            files.push(path.to_path_buf());
        }
    }

    files.sort();
    files.dedup();

    if files.is_empty() {
        bail!(
            "no log files found (searched {}, pattern {pattern}); run loggen to generate a corpus",
            paths.join(", ")
        );
    }

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn touch(dir: &Path, name: &str) {
        fs::write(dir.join(name), "{}\n").unwrap();
    }

    #[test]
    fn expands_directories_with_the_pattern() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "access_002.log");
        touch(dir.path(), "access_001.log");
        touch(dir.path(), "notes.txt");

        let files =
            discover_files(&[dir.path().to_str().unwrap().to_string()], "*.log").unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
            .collect();
        assert_eq!(names, vec!["access_001.log", "access_002.log"]);
    }

    #[test]
    fn passes_plain_files_through() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "one.log");
        let file = dir.path().join("one.log");

        let files = discover_files(&[file.to_str().unwrap().to_string()], "*.log").unwrap();
        assert_eq!(files, vec![file]);
    }

    #[test]
    fn keeps_missing_files_for_advisory_reporting() {
        let files = discover_files(&["no/such/file.log".to_string()], "*.log").unwrap();
        assert_eq!(files.len(), 1);
    }

    #[test]
    fn deduplicates_repeated_paths() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "one.log");
        let file = dir.path().join("one.log").to_str().unwrap().to_string();

        let files = discover_files(&[file.clone(), file], "*.log").unwrap();
        assert_eq!(files.len(), 1);
    }

    #[test]
    fn empty_result_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = discover_files(&[dir.path().to_str().unwrap().to_string()], "*.log");
        assert!(result.is_err());
    }
}
