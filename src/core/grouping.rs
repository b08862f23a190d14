use std::collections::BTreeMap;

use serde::Serialize;

use crate::core::read_file::ReadFile;
use crate::core::types::ReadDirection;

/// Files for one sample, bucketed by read direction.
pub type DirectionMap = BTreeMap<ReadDirection, Vec<ReadFile>>;

/// Grouping of classified read files: sample id → direction → ordered lanes.
///
/// Within each direction the lane files are kept sorted lexicographically by
/// full path. That total order fixes the concatenation order for the merge
/// step, so output is reproducible across runs and machines.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SampleGrouping {
    samples: BTreeMap<String, DirectionMap>,
}

impl SampleGrouping {
    /// Add one classified file under its sample and direction.
    ///
    /// Lane order is not maintained incrementally; call
    /// [`SampleGrouping::sort_lanes`] once accumulation is done.
    pub fn insert(&mut self, sample_id: String, direction: ReadDirection, file: ReadFile) {
        self.samples
            .entry(sample_id)
            .or_default()
            .entry(direction)
            .or_default()
            .push(file);
    }

    /// Sort every direction's lane files by full path.
    pub fn sort_lanes(&mut self) {
        for directions in self.samples.values_mut() {
            for files in directions.values_mut() {
                files.sort_by(|a, b| a.path.cmp(&b.path));
            }
        }
    }

    /// Iterate samples in sample-id order.
    pub fn samples(&self) -> impl Iterator<Item = (&String, &DirectionMap)> {
        self.samples.iter()
    }

    #[must_use]
    pub fn sample_count(&self) -> usize {
        self.samples.len()
    }

    /// Total number of grouped files across all samples and directions.
    #[must_use]
    pub fn file_count(&self) -> usize {
        self.samples
            .values()
            .flat_map(BTreeMap::values)
            .map(Vec::len)
            .sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    #[must_use]
    pub fn get(&self, sample_id: &str) -> Option<&DirectionMap> {
        self.samples.get(sample_id)
    }
}
