//! Core data types for lane consolidation.
//!
//! This module provides the fundamental types used throughout the library:
//!
//! - [`ReadFile`]: An ownership-exclusive handle on one discovered input file
//! - [`Classification`]: What a file name means: sample, direction, lane key
//! - [`SampleGrouping`]: Classified files bucketed per sample and direction
//! - [`VerificationReport`]: Post-merge completeness summary built from disk
//! - [`ReadDirection`]: Forward / reverse / unknown read direction
//!
//! ## Output Naming
//!
//! Merged streams are named `{sample}_{token}.fastq.gz`:
//!
//! | Direction | Token |
//! |-----------|----------------------|
//! | Forward   | R1                   |
//! | Reverse   | R2                   |
//! | Unknown   | configured, e.g. Rx  |
//!
//! [`ReadFile`]: read_file::ReadFile
//! [`Classification`]: classification::Classification
//! [`SampleGrouping`]: grouping::SampleGrouping
//! [`VerificationReport`]: report::VerificationReport
//! [`ReadDirection`]: types::ReadDirection

pub mod classification;
pub mod grouping;
pub mod read_file;
pub mod report;
pub mod types;
