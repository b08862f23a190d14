//! Runtime configuration for the merge pipeline.
//!
//! Components take their settings as explicit values at construction rather
//! than reading globals, so tests can vary the suffix set and delimiter
//! freely.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Recognized read-file suffixes, matched against the end of file names.
pub const DEFAULT_SUFFIXES: [&str; 4] = [".fastq.gz", ".fq.gz", ".fastq", ".fq"];

/// Marker separating the sample identity from the rest of the file stem.
pub const DEFAULT_DELIMITER: &str = "_EKD";

/// Output token for merges whose read direction could not be inferred.
pub const DEFAULT_UNKNOWN_TOKEN: &str = "Rx";

/// What to do when a merge destination already exists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverwritePolicy {
    /// Recreate the destination, replacing any previous run's output
    #[default]
    Overwrite,
    /// Leave an existing destination untouched
    SkipExisting,
}

/// Classification and merge settings shared across the pipeline stages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeConfig {
    /// Read-file suffixes the locator and classifier recognize
    pub suffixes: Vec<String>,

    /// Sample identity is the file stem up to this marker's first occurrence
    pub delimiter: String,

    /// Output token for unknown-direction merges
    pub unknown_token: String,

    /// Behavior when a merge destination already exists
    pub overwrite: OverwritePolicy,
}

impl Default for MergeConfig {
    fn default() -> Self {
        Self {
            suffixes: DEFAULT_SUFFIXES.iter().map(ToString::to_string).collect(),
            delimiter: DEFAULT_DELIMITER.to_string(),
            unknown_token: DEFAULT_UNKNOWN_TOKEN.to_string(),
            overwrite: OverwritePolicy::Overwrite,
        }
    }
}

/// Paths for one batch run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchConfig {
    /// Directory scanned (non-recursively) for tar archives
    pub source_dir: PathBuf,

    /// Scratch area; each archive extracts into its own subdirectory.
    /// The caller owns the lifecycle of this directory.
    pub scratch_dir: PathBuf,

    /// Output directory shared by the whole batch; merges for distinct
    /// (sample, direction) keys accumulate here across archives
    pub output_dir: PathBuf,

    /// Settings passed through to the pipeline stages
    pub merge: MergeConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_merge_config() {
        let config = MergeConfig::default();
        assert_eq!(config.suffixes.len(), 4);
        assert!(config.suffixes.iter().any(|s| s == ".fastq.gz"));
        assert_eq!(config.delimiter, "_EKD");
        assert_eq!(config.unknown_token, "Rx");
        assert_eq!(config.overwrite, OverwritePolicy::Overwrite);
    }
}
