//! Recursive discovery of sequencing read files.

use std::path::Path;

use thiserror::Error;
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::core::read_file::ReadFile;

#[derive(Error, Debug)]
pub enum LocateError {
    #[error("root directory not found: {0}")]
    RootNotFound(String),
}

/// Recursively find files under `root` whose names end in one of the
/// recognized read-file suffixes.
///
/// Traversal order is not guaranteed; downstream grouping imposes the total
/// order. An existing root with no matches yields an empty set, not an
/// error, and unreadable entries are skipped with a warning.
///
/// # Errors
///
/// Returns `LocateError::RootNotFound` only when `root` itself does not
/// exist.
pub fn find_read_files(root: &Path, suffixes: &[String]) -> Result<Vec<ReadFile>, LocateError> {
    if !root.exists() {
        return Err(LocateError::RootNotFound(root.display().to_string()));
    }

    let mut found = Vec::new();
    for entry in WalkDir::new(root) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("skipping unreadable entry under {}: {e}", root.display());
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        let name = entry.file_name().to_string_lossy();
        if suffixes.iter().any(|suffix| name.ends_with(suffix.as_str())) {
            let len = entry.metadata().ok().map(|m| m.len());
            let mut file = ReadFile::new(entry.into_path());
            if let Some(len) = len {
                file = file.with_len(len);
            }
            found.push(file);
        }
    }

    debug!(root = %root.display(), count = found.len(), "read-file scan complete");
    Ok(found)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MergeConfig;

    #[test]
    fn test_finds_files_recursively() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("run1/lane2")).unwrap();
        std::fs::write(dir.path().join("run1/a_1.fastq.gz"), b"x").unwrap();
        std::fs::write(dir.path().join("run1/lane2/a_2.fq.gz"), b"x").unwrap();
        std::fs::write(dir.path().join("run1/summary.txt"), b"x").unwrap();
        std::fs::write(dir.path().join("plain.fastq"), b"x").unwrap();

        let config = MergeConfig::default();
        let mut names: Vec<String> = find_read_files(dir.path(), &config.suffixes)
            .unwrap()
            .into_iter()
            .map(|f| f.file_name)
            .collect();
        names.sort();

        assert_eq!(names, ["a_1.fastq.gz", "a_2.fq.gz", "plain.fastq"]);
    }

    #[test]
    fn test_locator_records_file_size() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.fq"), b"12345").unwrap();

        let config = MergeConfig::default();
        let files = find_read_files(dir.path(), &config.suffixes).unwrap();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].byte_len().unwrap(), 5);
    }

    #[test]
    fn test_empty_root_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let config = MergeConfig::default();
        let files = find_read_files(dir.path(), &config.suffixes).unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn test_missing_root_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let config = MergeConfig::default();
        let err = find_read_files(&dir.path().join("absent"), &config.suffixes).unwrap_err();
        assert!(matches!(err, LocateError::RootNotFound(_)));
    }
}
