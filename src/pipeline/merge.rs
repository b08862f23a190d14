//! Lane concatenation into per-sample merged streams.
//!
//! A merged stream is the raw byte-concatenation of its lane files in
//! sequence order. Inputs are complete gzip members, and concatenated gzip
//! members remain valid for a compliant decompressor, so nothing is ever
//! decompressed or re-compressed here.

use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, error, info};

use crate::config::{MergeConfig, OverwritePolicy};
use crate::core::grouping::SampleGrouping;
use crate::core::read_file::ReadFile;
use crate::core::types::ReadDirection;

/// Copy buffer size for lane concatenation.
const COPY_CHUNK: usize = 64 * 1024;

#[derive(Error, Debug)]
pub enum MergeError {
    #[error("IO error on {}: {source}", path.display())]
    Io { path: PathBuf, source: io::Error },
}

/// What happened to one (sample, direction) merge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergeOutcome {
    /// Output written
    Written {
        path: PathBuf,
        lanes: usize,
        bytes: u64,
    },
    /// Destination already existed and the policy left it alone
    SkippedExisting(PathBuf),
}

/// Counts across a whole grouping's merges.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MergeStats {
    pub written: usize,
    pub skipped_existing: usize,
    pub failed: usize,
}

/// Merge the lane files of one (sample, direction) group into a single
/// output stream.
///
/// The destination is `{sample}_{token}.fastq.gz` under `out_dir`, created
/// if absent. The destination file is opened for exclusive write and each
/// lane's bytes are appended in the given order, in bounded-size chunks.
/// With [`OverwritePolicy::Overwrite`] (the default) an existing destination
/// is replaced; rerunning a batch is therefore idempotent in effect.
///
/// # Errors
///
/// Returns `MergeError::Io` when a source becomes unreadable mid-copy or the
/// destination cannot be written. The failure aborts only this pair; the
/// caller continues with the rest of the batch.
pub fn merge_group(
    sample_id: &str,
    direction: ReadDirection,
    files: &[ReadFile],
    out_dir: &Path,
    config: &MergeConfig,
) -> Result<MergeOutcome, MergeError> {
    fs::create_dir_all(out_dir).map_err(|e| io_error(out_dir, e))?;

    let token = direction.token(&config.unknown_token);
    let dest = out_dir.join(format!("{sample_id}_{token}.fastq.gz"));

    if config.overwrite == OverwritePolicy::SkipExisting && dest.exists() {
        info!(dest = %dest.display(), "destination exists, skipping");
        return Ok(MergeOutcome::SkippedExisting(dest));
    }

    let mut writer = File::create(&dest)
        .map(BufWriter::new)
        .map_err(|e| io_error(&dest, e))?;

    let mut total: u64 = 0;
    for file in files {
        let mut reader = File::open(&file.path)
            .map(BufReader::new)
            .map_err(|e| io_error(&file.path, e))?;
        let copied = copy_chunked(&mut reader, &mut writer).map_err(|e| io_error(&file.path, e))?;
        debug!(lane = %file.path.display(), bytes = copied, "lane appended");
        total += copied;
    }

    writer.flush().map_err(|e| io_error(&dest, e))?;
    info!(
        sample = sample_id,
        direction = %direction,
        lanes = files.len(),
        bytes = total,
        dest = %dest.display(),
        "merge complete"
    );

    Ok(MergeOutcome::Written {
        path: dest,
        lanes: files.len(),
        bytes: total,
    })
}

/// Merge every (sample, direction) group in `grouping`.
///
/// A failed pair is logged and counted; it never aborts the other pairs.
pub fn merge_grouping(
    grouping: &SampleGrouping,
    out_dir: &Path,
    config: &MergeConfig,
) -> MergeStats {
    let mut stats = MergeStats::default();

    for (sample_id, directions) in grouping.samples() {
        for (direction, files) in directions {
            match merge_group(sample_id, *direction, files, out_dir, config) {
                Ok(MergeOutcome::Written { .. }) => stats.written += 1,
                Ok(MergeOutcome::SkippedExisting(_)) => stats.skipped_existing += 1,
                Err(e) => {
                    error!(sample = %sample_id, direction = %direction, "merge failed: {e}");
                    stats.failed += 1;
                }
            }
        }
    }

    stats
}

/// Copy `reader` into `writer` in bounded-size chunks, returning the byte
/// count.
fn copy_chunked<R: Read, W: Write>(reader: &mut R, writer: &mut W) -> io::Result<u64> {
    let mut buf = vec![0u8; COPY_CHUNK];
    let mut total: u64 = 0;

    loop {
        let n = reader.read(&mut buf)?;
        if n == 0 {
            break;
        }
        writer.write_all(&buf[..n])?;
        total += n as u64;
    }

    Ok(total)
}

fn io_error(path: &Path, source: io::Error) -> MergeError {
    MergeError::Io {
        path: path.to_path_buf(),
        source,
    }
}
