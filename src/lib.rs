//! # lane-merge
//!
//! A library and CLI for consolidating raw sequencing output scattered
//! across tar archives and multiple sequencing lanes into one normalized
//! pair of FASTQ files (forward/reverse) per biological sample.
//!
//! Sequencing providers deliver archives in which one sample's reads are
//! split over several lane files with inconsistent names. The interesting
//! part is classification: sample identity, lane membership, and read
//! direction are inferred purely from file names, after which the compressed
//! lane files are concatenated byte-for-byte into exactly two per-sample
//! streams and a completeness report is built from what actually landed on
//! disk.
//!
//! ## Features
//!
//! - **Filename classification**: pure, idempotent parsing of provider names
//!   into (sample, direction, lane) with a configurable delimiter marker
//! - **Deterministic merging**: lanes concatenate in lexicographic path
//!   order, so output is reproducible across runs and machines
//! - **Raw gzip concatenation**: complete gzip members are appended without
//!   re-compression; the result stays valid for compliant decompressors
//! - **Batch resilience**: corrupt archives, unclassifiable files, and
//!   failed merges are logged and reported, never fatal
//! - **Disk-backed verification**: the completeness report is built from the
//!   output directory, not from in-memory state
//!
//! ## Example
//!
//! ```rust
//! use lane_merge::config::MergeConfig;
//! use lane_merge::pipeline::classify::classify;
//! use lane_merge::ReadDirection;
//!
//! let config = MergeConfig::default();
//! let c = classify("sampleA_EKD12_L001_1.fastq.gz", &config).unwrap();
//!
//! assert_eq!(c.sample_id, "sampleA");
//! assert_eq!(c.direction, ReadDirection::Forward);
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Data types for read files, classifications, groupings, reports
//! - [`pipeline`]: The extract → locate → classify → group → merge → verify
//!   stages and the batch runner
//! - [`config`]: Explicit configuration passed into each stage
//! - [`cli`]: Command-line interface implementation

pub mod cli;
pub mod config;
pub mod core;
pub mod pipeline;

// Re-export commonly used types for convenience
pub use config::{BatchConfig, MergeConfig, OverwritePolicy};
pub use core::classification::Classification;
pub use core::grouping::SampleGrouping;
pub use core::read_file::ReadFile;
pub use core::report::VerificationReport;
pub use core::types::ReadDirection;
pub use pipeline::batch::{run_batch, BatchReport};
