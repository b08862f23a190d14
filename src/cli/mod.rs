//! Command-line interface for lane-merge.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **run**: Extract, classify, and merge every archive in a source directory
//! - **classify**: Preview classification and grouping without merging
//! - **verify**: Check an output directory for complete R1/R2 pairs
//!
//! ## Usage
//!
//! ```text
//! # Process a directory of tar archives
//! lane-merge run /data/archives --output /data/merged
//!
//! # Keep the extracted files around
//! lane-merge run /data/archives --output /data/merged --scratch /data/extract
//!
//! # Leave outputs from a previous run untouched
//! lane-merge run /data/archives --output /data/merged --skip-existing
//!
//! # Dry-run the classifier over extracted files
//! lane-merge classify /data/extract/batch1
//!
//! # Re-check completeness, JSON for scripting
//! lane-merge verify /data/merged --format json
//! ```

use clap::{Parser, Subcommand};

pub mod classify;
pub mod run;
pub mod verify;

#[derive(Parser)]
#[command(name = "lane-merge")]
#[command(version)]
#[command(about = "Merge multi-lane sequencing archives into per-sample FASTQ pairs")]
#[command(
    long_about = "lane-merge consolidates raw sequencing output scattered across tar archives and multiple sequencing lanes into one normalized FASTQ pair (R1/R2) per sample.\n\nSample identity and read direction are inferred from file names; compressed lane files are concatenated byte-for-byte, and a completeness report shows which samples ended up with both directions."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Extract, classify, and merge every archive in a source directory
    Run(run::RunArgs),

    /// Preview classification and grouping without merging
    Classify(classify::ClassifyArgs),

    /// Check an output directory for complete R1/R2 pairs
    Verify(verify::VerifyArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}
