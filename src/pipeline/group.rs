//! Aggregation of classified files into per-sample, per-direction lanes.

use tracing::debug;

use crate::core::classification::Classification;
use crate::core::grouping::SampleGrouping;
use crate::core::read_file::ReadFile;

/// Group classified files by sample and direction.
///
/// Within each direction the lane files end up sorted by full path, which
/// fixes the concatenation order for the merge step. Deterministic: the same
/// input set always produces the same ordered grouping, regardless of input
/// order. No failure modes; an empty input yields an empty grouping.
#[must_use]
pub fn group_files(files: Vec<(ReadFile, Classification)>) -> SampleGrouping {
    let mut grouping = SampleGrouping::default();

    for (file, classification) in files {
        grouping.insert(classification.sample_id, classification.direction, file);
    }
    grouping.sort_lanes();

    debug!(
        samples = grouping.sample_count(),
        files = grouping.file_count(),
        "grouping complete"
    );
    grouping
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MergeConfig;
    use crate::core::types::ReadDirection;
    use crate::pipeline::classify::classify;

    fn classified(path: &str) -> (ReadFile, Classification) {
        let file = ReadFile::new(path);
        let classification = classify(&file.file_name, &MergeConfig::default()).unwrap();
        (file, classification)
    }

    #[test]
    fn test_empty_input_yields_empty_grouping() {
        assert!(group_files(Vec::new()).is_empty());
    }

    #[test]
    fn test_lanes_sorted_by_full_path() {
        let grouping = group_files(vec![
            classified("/data/run2/s_EKD1_1.fastq.gz"),
            classified("/data/run1/s_EKD1_1.fastq.gz"),
        ]);

        let lanes = &grouping.get("s").unwrap()[&ReadDirection::Forward];
        assert_eq!(lanes[0].path.to_str().unwrap(), "/data/run1/s_EKD1_1.fastq.gz");
        assert_eq!(lanes[1].path.to_str().unwrap(), "/data/run2/s_EKD1_1.fastq.gz");
    }

    #[test]
    fn test_grouping_is_deterministic_across_input_orders() {
        let paths = [
            "/d/b_EKD1_1.fq.gz",
            "/d/a_EKD1_1.fq.gz",
            "/d/a_EKD2_1.fq.gz",
            "/d/a_EKD1_2.fq.gz",
            "/d/c_EKD9.fq.gz",
        ];

        let forward = group_files(paths.iter().map(|p| classified(p)).collect());
        let reversed = group_files(paths.iter().rev().map(|p| classified(p)).collect());

        assert_eq!(forward, reversed);
    }

    #[test]
    fn test_unknown_direction_gets_its_own_bucket() {
        let grouping = group_files(vec![
            classified("/d/s_EKD1_1.fastq.gz"),
            classified("/d/s_EKD1.fastq.gz"),
        ]);

        let directions = grouping.get("s").unwrap();
        assert!(directions.contains_key(&ReadDirection::Forward));
        assert!(directions.contains_key(&ReadDirection::Unknown));
        assert_eq!(grouping.file_count(), 2);
    }
}
