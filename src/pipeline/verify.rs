//! Post-merge completeness verification.
//!
//! The verifier looks only at what is actually on disk in the merge output
//! directory, so a report also catches outputs lost or added outside this
//! process.

use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::config::MergeConfig;
use crate::core::report::VerificationReport;
use crate::core::types::ReadDirection;

/// Suffix shared by all merged output streams.
const MERGED_SUFFIX: &str = ".fastq.gz";

/// Build a completeness report from the merge output directory.
///
/// Scans `out_dir` (non-recursively) for `{sample}_{token}.fastq.gz` files,
/// recovers each sample id and direction from the name, and counts distinct
/// directions per sample. Never fails: a missing or unreadable directory
/// yields an all-zero report flagged `no_outputs`.
#[must_use]
pub fn verify_outputs(out_dir: &Path, config: &MergeConfig) -> VerificationReport {
    let entries = match fs::read_dir(out_dir) {
        Ok(entries) => entries,
        Err(e) => {
            warn!("output directory {} unreadable: {e}", out_dir.display());
            return VerificationReport::from_observations(Vec::new());
        }
    };

    let mut observations = Vec::new();
    for entry in entries {
        let Ok(entry) = entry else { continue };
        if !entry.file_type().map(|t| t.is_file()).unwrap_or(false) {
            continue;
        }

        let name = entry.file_name().to_string_lossy().into_owned();
        match parse_output_name(&name, &config.unknown_token) {
            Some(observation) => observations.push(observation),
            None => debug!(file = %name, "ignoring non-merged file in output directory"),
        }
    }

    VerificationReport::from_observations(observations)
}

/// Split `{sample}_{token}.fastq.gz` back into sample id and direction.
///
/// Names without the suffix, without a direction token, or with an empty
/// sample id are not merge outputs and yield `None`.
fn parse_output_name(name: &str, unknown_token: &str) -> Option<(String, ReadDirection)> {
    let stem = name.strip_suffix(MERGED_SUFFIX)?;
    let (sample_id, token) = stem.rsplit_once('_')?;
    if sample_id.is_empty() {
        return None;
    }

    let direction = ReadDirection::from_token(token, unknown_token)?;
    Some((sample_id.to_string(), direction))
}
