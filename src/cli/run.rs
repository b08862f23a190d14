use std::path::PathBuf;

use clap::Args;

use crate::cli::{verify::print_report, OutputFormat};
use crate::config::{
    BatchConfig, MergeConfig, OverwritePolicy, DEFAULT_DELIMITER, DEFAULT_UNKNOWN_TOKEN,
};
use crate::pipeline::batch::{run_batch, ArchiveResult, BatchReport};

#[derive(Args)]
pub struct RunArgs {
    /// Directory containing the tar archives to process
    #[arg(required = true)]
    pub source: PathBuf,

    /// Directory for merged per-sample outputs
    #[arg(short, long)]
    pub output: PathBuf,

    /// Scratch directory for extraction, created if absent and kept
    /// afterwards. A temporary directory is used and removed when omitted.
    #[arg(long)]
    pub scratch: Option<PathBuf>,

    /// Sample-identity delimiter marker
    #[arg(long, default_value = DEFAULT_DELIMITER)]
    pub delimiter: String,

    /// Output token for files whose read direction cannot be inferred
    #[arg(long, default_value = DEFAULT_UNKNOWN_TOKEN)]
    pub unknown_token: String,

    /// Recognized read-file suffix (repeatable); defaults to
    /// .fastq.gz/.fq.gz/.fastq/.fq
    #[arg(long = "suffix", value_name = "SUFFIX")]
    pub suffixes: Vec<String>,

    /// Leave existing merge outputs untouched instead of overwriting them
    #[arg(long)]
    pub skip_existing: bool,
}

/// Execute the run subcommand.
///
/// # Errors
///
/// Returns an error only when the source directory is missing or the scratch
/// directory cannot be set up; per-archive and per-sample failures are
/// reported in the summary instead.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: RunArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let mut merge = MergeConfig {
        delimiter: args.delimiter.clone(),
        unknown_token: args.unknown_token.clone(),
        overwrite: if args.skip_existing {
            OverwritePolicy::SkipExisting
        } else {
            OverwritePolicy::Overwrite
        },
        ..MergeConfig::default()
    };
    if !args.suffixes.is_empty() {
        merge.suffixes = args.suffixes.clone();
    }

    // The guard keeps an unnamed scratch directory alive for the whole
    // batch; dropping it at the end removes the extracted files.
    let (scratch_dir, _scratch_guard) = match &args.scratch {
        Some(dir) => (dir.clone(), None),
        None => {
            let tmp = tempfile::tempdir()?;
            (tmp.path().to_path_buf(), Some(tmp))
        }
    };

    if verbose {
        eprintln!(
            "Processing archives from {} into {}",
            args.source.display(),
            args.output.display()
        );
    }

    let config = BatchConfig {
        source_dir: args.source.clone(),
        scratch_dir,
        output_dir: args.output.clone(),
        merge,
    };

    let report = run_batch(&config)?;

    match format {
        OutputFormat::Text => print_text_batch(&report, verbose),
        OutputFormat::Json => print_json_batch(&report)?,
        OutputFormat::Tsv => print_tsv_batch(&report),
    }

    Ok(())
}

fn print_text_batch(report: &BatchReport, verbose: bool) {
    println!(
        "Processed {} archives: {} ok, {} failed",
        report.outcomes.len(),
        report.succeeded(),
        report.failed()
    );

    for outcome in &report.outcomes {
        match &outcome.result {
            ArchiveResult::Merged {
                read_files,
                samples,
                skipped_files,
                merge,
            } => {
                let mut notes = format!(
                    "{read_files} read files, {samples} samples, {} merged",
                    merge.written
                );
                if merge.skipped_existing > 0 {
                    notes.push_str(&format!(", {} skipped (existing)", merge.skipped_existing));
                }
                if merge.failed > 0 {
                    notes.push_str(&format!(", {} FAILED merges", merge.failed));
                }
                if *skipped_files > 0 {
                    notes.push_str(&format!(", {skipped_files} unrecognized files"));
                }
                println!("  ok      {}  {}", outcome.archive.display(), notes);
            }
            ArchiveResult::Failed { error } => {
                println!("  FAILED  {}  {}", outcome.archive.display(), error);
            }
        }
    }

    println!();
    print_report(&report.verification, verbose);
}

fn print_json_batch(report: &BatchReport) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}

/// One row per archive, then one row per sample; rows are tagged in the
/// first column so the stream stays machine-splittable.
fn print_tsv_batch(report: &BatchReport) {
    println!("row\tname\tstatus\tdetail");

    for outcome in &report.outcomes {
        match &outcome.result {
            ArchiveResult::Merged { merge, .. } => println!(
                "archive\t{}\tok\t{} merged",
                outcome.archive.display(),
                merge.written
            ),
            ArchiveResult::Failed { error } => println!(
                "archive\t{}\tfailed\t{}",
                outcome.archive.display(),
                error
            ),
        }
    }

    for (sample_id, status) in &report.verification.samples {
        let state = if status.is_complete() {
            "complete"
        } else {
            "incomplete"
        };
        println!("sample\t{sample_id}\t{state}\t{} files", status.files);
    }
}
