use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::core::types::ReadDirection;

/// Per-sample slice of a verification report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SampleStatus {
    /// Directions with an output file present on disk
    pub directions: BTreeSet<ReadDirection>,

    /// Number of output files observed for this sample
    pub files: usize,
}

impl SampleStatus {
    /// Both forward and reverse outputs are present. Unknown-direction
    /// outputs never count toward completeness.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.directions.contains(&ReadDirection::Forward)
            && self.directions.contains(&ReadDirection::Reverse)
    }
}

/// Completeness summary over a merge output directory.
///
/// Built strictly from the files present on disk at verification time, not
/// from any in-memory grouping, so it doubles as an external-state sanity
/// check.
#[derive(Debug, Clone, Serialize)]
pub struct VerificationReport {
    /// When this report was built (UTC)
    pub generated_at: DateTime<Utc>,

    /// Observed samples and their on-disk directions
    pub samples: BTreeMap<String, SampleStatus>,

    /// Total number of recognized output files
    pub total_files: usize,

    /// No recognized outputs existed at all. Distinct from "zero incomplete
    /// samples": an empty directory is not a clean bill of health.
    pub no_outputs: bool,
}

impl VerificationReport {
    /// Build a report from (sample id, direction) observations.
    #[must_use]
    pub fn from_observations(observations: Vec<(String, ReadDirection)>) -> Self {
        let total_files = observations.len();
        let mut samples: BTreeMap<String, SampleStatus> = BTreeMap::new();

        for (sample_id, direction) in observations {
            let status = samples.entry(sample_id).or_default();
            status.directions.insert(direction);
            status.files += 1;
        }

        Self {
            generated_at: Utc::now(),
            samples,
            total_files,
            no_outputs: total_files == 0,
        }
    }

    #[must_use]
    pub fn unique_samples(&self) -> usize {
        self.samples.len()
    }

    /// Samples with both an R1 and an R2 output.
    #[must_use]
    pub fn complete(&self) -> usize {
        self.samples.values().filter(|s| s.is_complete()).count()
    }

    /// Samples missing at least one of the two pair directions.
    #[must_use]
    pub fn incomplete(&self) -> usize {
        self.unique_samples() - self.complete()
    }
}
