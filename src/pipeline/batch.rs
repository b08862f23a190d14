//! One-at-a-time archive processing with per-item failure isolation.
//!
//! The batch runner folds over the archives it finds, accumulating a
//! per-archive outcome instead of letting any failure unwind the loop. Only
//! a missing source directory is fatal. The output directory is the one
//! resource shared across the whole batch: merges for distinct
//! (sample, direction) keys accumulate there across archives.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;
use tracing::{error, info, warn};

use crate::config::BatchConfig;
use crate::core::report::VerificationReport;
use crate::pipeline::classify::classify;
use crate::pipeline::extract::{extract_archive, ExtractError};
use crate::pipeline::group::group_files;
use crate::pipeline::locate::{find_read_files, LocateError};
use crate::pipeline::merge::{merge_grouping, MergeStats};
use crate::pipeline::verify::verify_outputs;

#[derive(Error, Debug)]
pub enum BatchError {
    #[error("source directory not found: {0}")]
    SourceNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Why one archive's processing stopped early.
#[derive(Error, Debug)]
enum ArchiveFailure {
    #[error(transparent)]
    Extract(#[from] ExtractError),

    #[error(transparent)]
    Locate(#[from] LocateError),
}

/// Result of processing a single archive.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case", tag = "status")]
pub enum ArchiveResult {
    /// Extracted, classified, and merged
    Merged {
        /// Read files that classified successfully
        read_files: usize,
        /// Distinct samples seen in this archive
        samples: usize,
        /// Files skipped for an unrecognized suffix
        skipped_files: usize,
        merge: MergeStats,
    },
    /// Processing stopped; the archive contributed nothing
    Failed { error: String },
}

#[derive(Debug, Clone, Serialize)]
pub struct ArchiveOutcome {
    pub archive: PathBuf,
    pub result: ArchiveResult,
}

/// Everything a batch run produced: per-archive outcomes plus the final
/// verification pass over the output directory.
#[derive(Debug, Clone, Serialize)]
pub struct BatchReport {
    pub outcomes: Vec<ArchiveOutcome>,
    pub verification: VerificationReport,
}

impl BatchReport {
    /// Archives that made it through extraction and merging.
    #[must_use]
    pub fn succeeded(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o.result, ArchiveResult::Merged { .. }))
            .count()
    }

    #[must_use]
    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.succeeded()
    }
}

/// Process every archive under the source directory, then verify the output
/// directory.
///
/// Archives are handled strictly one at a time, in sorted name order. A
/// failure in one archive is recorded in its outcome and never unwinds past
/// it, so the run always ends with a verification report.
///
/// # Errors
///
/// Returns `BatchError::SourceNotFound` when the configured source directory
/// does not exist, or `BatchError::Io` when it cannot be listed. These are
/// the only fatal conditions.
pub fn run_batch(config: &BatchConfig) -> Result<BatchReport, BatchError> {
    let archives = find_archives(&config.source_dir)?;
    info!(
        count = archives.len(),
        source = %config.source_dir.display(),
        "starting batch"
    );

    let outcomes = archives
        .into_iter()
        .map(|archive| {
            let result = process_archive(&archive, config).unwrap_or_else(|e| {
                error!(archive = %archive.display(), "archive failed: {e}");
                ArchiveResult::Failed {
                    error: e.to_string(),
                }
            });
            ArchiveOutcome { archive, result }
        })
        .collect();

    let verification = verify_outputs(&config.output_dir, &config.merge);
    Ok(BatchReport {
        outcomes,
        verification,
    })
}

/// Extract → locate → classify → group → merge, for one archive.
fn process_archive(archive: &Path, config: &BatchConfig) -> Result<ArchiveResult, ArchiveFailure> {
    let scratch = config.scratch_dir.join(archive_stem(archive));
    extract_archive(archive, &scratch)?;

    let files = find_read_files(&scratch, &config.merge.suffixes)?;
    info!(archive = %archive.display(), files = files.len(), "located read files");

    let mut classified = Vec::new();
    let mut skipped_files = 0usize;
    for file in files {
        match classify(&file.file_name, &config.merge) {
            Ok(classification) => classified.push((file, classification)),
            Err(e) => {
                warn!("skipping file: {e}");
                skipped_files += 1;
            }
        }
    }

    let read_files = classified.len();
    let grouping = group_files(classified);
    let samples = grouping.sample_count();
    let merge = merge_grouping(&grouping, &config.output_dir, &config.merge);

    Ok(ArchiveResult::Merged {
        read_files,
        samples,
        skipped_files,
        merge,
    })
}

/// List archives directly under `source`, sorted by path for a
/// deterministic processing order.
fn find_archives(source: &Path) -> Result<Vec<PathBuf>, BatchError> {
    if !source.is_dir() {
        return Err(BatchError::SourceNotFound(source.display().to_string()));
    }

    let mut archives = Vec::new();
    for entry in fs::read_dir(source)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        if is_archive_name(&name) {
            archives.push(entry.path());
        }
    }

    archives.sort();
    Ok(archives)
}

/// Archive discovery matches any name containing `.tar`, plus the `.tgz`
/// shorthand.
fn is_archive_name(name: &str) -> bool {
    name.contains(".tar") || name.ends_with(".tgz")
}

/// Scratch subdirectory name for one archive: the file name up to its
/// `.tar*` tail.
fn archive_stem(archive: &Path) -> String {
    let name = archive
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "archive".to_string());

    match name.find(".tar") {
        Some(idx) if idx > 0 => name[..idx].to_string(),
        _ => name.strip_suffix(".tgz").unwrap_or(&name).to_string(),
    }
}
