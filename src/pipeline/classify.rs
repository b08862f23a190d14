//! Filename-based classification into (sample, direction, lane).
//!
//! The classifier is a pure function over the file name: no filesystem
//! access, no state. Provider naming is inconsistent, so the rules are
//! deliberately small:
//!
//! 1. Strip a recognized read-file suffix (longest match wins)
//! 2. A trailing `_1`/`_2` on the stem gives the read direction
//! 3. Everything before the delimiter marker's first occurrence is the
//!    sample identity; without the marker, the whole remaining stem is the
//!    sample identity

use thiserror::Error;

use crate::config::MergeConfig;
use crate::core::classification::Classification;
use crate::core::types::ReadDirection;

#[derive(Error, Debug)]
pub enum ClassifyError {
    #[error("no recognized read-file suffix on '{0}'")]
    UnrecognizedSuffix(String),
}

/// Classify one read-file name.
///
/// # Errors
///
/// Returns `ClassifyError::UnrecognizedSuffix` when the name matches none of
/// the configured suffixes. Callers skip such files rather than aborting the
/// batch.
pub fn classify(file_name: &str, config: &MergeConfig) -> Result<Classification, ClassifyError> {
    let stem = strip_read_suffix(file_name, &config.suffixes)
        .ok_or_else(|| ClassifyError::UnrecognizedSuffix(file_name.to_string()))?;

    let (stem, direction) = if let Some(rest) = stem.strip_suffix("_1") {
        (rest, ReadDirection::Forward)
    } else if let Some(rest) = stem.strip_suffix("_2") {
        (rest, ReadDirection::Reverse)
    } else {
        (stem, ReadDirection::Unknown)
    };

    let sample_id = match stem.find(config.delimiter.as_str()) {
        Some(idx) => &stem[..idx],
        None => stem,
    };

    Ok(Classification {
        sample_id: sample_id.to_string(),
        direction,
        lane_key: file_name.to_string(),
    })
}

/// Strip the longest matching suffix from the recognized set.
fn strip_read_suffix<'a>(name: &'a str, suffixes: &[String]) -> Option<&'a str> {
    suffixes
        .iter()
        .filter(|suffix| name.ends_with(suffix.as_str()))
        .max_by_key(|suffix| suffix.len())
        .map(|suffix| &name[..name.len() - suffix.len()])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify_default(name: &str) -> Classification {
        classify(name, &MergeConfig::default()).unwrap()
    }

    #[test]
    fn test_forward_and_reverse_direction() {
        let fwd = classify_default("sampleA_EKD12_L001_1.fastq.gz");
        assert_eq!(fwd.sample_id, "sampleA");
        assert_eq!(fwd.direction, ReadDirection::Forward);

        let rev = classify_default("sampleA_EKD12_L001_2.fastq.gz");
        assert_eq!(rev.sample_id, "sampleA");
        assert_eq!(rev.direction, ReadDirection::Reverse);
    }

    #[test]
    fn test_no_trailing_marker_is_unknown() {
        let c = classify_default("sampleA_EKD12_L001.fastq.gz");
        assert_eq!(c.sample_id, "sampleA");
        assert_eq!(c.direction, ReadDirection::Unknown);

        // `_3` is not a direction marker either
        let c = classify_default("sampleA_EKD12_3.fq");
        assert_eq!(c.direction, ReadDirection::Unknown);
    }

    #[test]
    fn test_sample_is_prefix_before_first_delimiter() {
        // Only the first occurrence of the marker splits
        let c = classify_default("s_EKDx_EKDy_1.fq.gz");
        assert_eq!(c.sample_id, "s");

        // A lane token before the marker stays inside the sample id
        let c = classify_default("S1_L001_EKD001_1.fastq.gz");
        assert_eq!(c.sample_id, "S1_L001");
    }

    #[test]
    fn test_missing_delimiter_keeps_whole_stem() {
        let c = classify_default("plain_sample_1.fastq");
        assert_eq!(c.sample_id, "plain_sample");
        assert_eq!(c.direction, ReadDirection::Forward);
    }

    #[test]
    fn test_longest_suffix_wins() {
        // `.fq.gz` must strip as a unit, not leave a `.fq` stem
        let c = classify_default("s_EKD1_1.fq.gz");
        assert_eq!(c.lane_key, "s_EKD1_1.fq.gz");
        assert_eq!(c.sample_id, "s");
        assert_eq!(c.direction, ReadDirection::Forward);
    }

    #[test]
    fn test_unrecognized_suffix_is_rejected() {
        let err = classify("notes.txt", &MergeConfig::default()).unwrap_err();
        assert!(matches!(err, ClassifyError::UnrecognizedSuffix(_)));

        // A bare `.gz` without a read extension is not recognized either
        assert!(classify("archive.gz", &MergeConfig::default()).is_err());
    }

    #[test]
    fn test_lane_key_is_original_name() {
        let c = classify_default("sampleA_EKD12_L001_1.fastq.gz");
        assert_eq!(c.lane_key, "sampleA_EKD12_L001_1.fastq.gz");
    }

    #[test]
    fn test_classification_is_idempotent() {
        let config = MergeConfig::default();
        let names = [
            "sampleA_EKD12_L001_1.fastq.gz",
            "sampleB_2.fq",
            "odd-name.fastq",
        ];

        for name in names {
            let first = classify(name, &config).unwrap();
            let second = classify(name, &config).unwrap();
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_custom_delimiter() {
        let config = MergeConfig {
            delimiter: "__".to_string(),
            ..MergeConfig::default()
        };
        let c = classify("tumor__runA_1.fastq.gz", &config).unwrap();
        assert_eq!(c.sample_id, "tumor");
        assert_eq!(c.direction, ReadDirection::Forward);
    }
}
