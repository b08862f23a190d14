//! The lane consolidation pipeline, stage by stage.
//!
//! Stages feed each other in a fixed order, each completing fully before the
//! next begins:
//!
//! 1. [`extract`]: unpack one archive into a scratch directory
//! 2. [`locate`]: recursively find candidate read files
//! 3. [`classify`]: parse each file name into (sample, direction, lane)
//! 4. [`group`]: bucket classified files per sample and direction
//! 5. [`merge`]: concatenate each bucket's lanes into one output stream
//! 6. [`verify`]: report per-sample completeness from the output directory
//!
//! [`batch`] drives the whole sequence over every archive in a source
//! directory, isolating per-archive failures.
//!
//! ## Failure policy
//!
//! | Failure | Scope | Effect |
//! |---------|-------|--------|
//! | `ExtractError` | one archive | archive skipped, batch continues |
//! | `ClassifyError::UnrecognizedSuffix` | one file | file skipped |
//! | `MergeError` | one (sample, direction) | pair skipped |
//! | `LocateError::RootNotFound` / `BatchError::SourceNotFound` | run | fatal |
//!
//! ## Example
//!
//! ```rust,no_run
//! use lane_merge::config::{BatchConfig, MergeConfig};
//! use lane_merge::pipeline::batch::run_batch;
//!
//! let config = BatchConfig {
//!     source_dir: "/data/archives".into(),
//!     scratch_dir: "/data/scratch".into(),
//!     output_dir: "/data/merged".into(),
//!     merge: MergeConfig::default(),
//! };
//!
//! let report = run_batch(&config).unwrap();
//! println!(
//!     "{} samples, {} complete pairs",
//!     report.verification.unique_samples(),
//!     report.verification.complete()
//! );
//! ```

pub mod batch;
pub mod classify;
pub mod extract;
pub mod group;
pub mod locate;
pub mod merge;
pub mod verify;
