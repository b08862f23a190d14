use std::path::PathBuf;

use clap::Args;

use crate::cli::OutputFormat;
use crate::config::{MergeConfig, DEFAULT_UNKNOWN_TOKEN};
use crate::core::report::VerificationReport;
use crate::pipeline::verify::verify_outputs;

#[derive(Args)]
pub struct VerifyArgs {
    /// Merge output directory to check
    #[arg(required = true)]
    pub output: PathBuf,

    /// Output token used for unknown-direction merges
    #[arg(long, default_value = DEFAULT_UNKNOWN_TOKEN)]
    pub unknown_token: String,
}

/// Execute the verify subcommand.
///
/// # Errors
///
/// Returns an error only if report serialization fails; a missing or empty
/// output directory is reported, not fatal.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: VerifyArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let config = MergeConfig {
        unknown_token: args.unknown_token.clone(),
        ..MergeConfig::default()
    };

    let report = verify_outputs(&args.output, &config);

    match format {
        OutputFormat::Text => print_report(&report, verbose),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Tsv => print_tsv_report(&report),
    }

    Ok(())
}

/// Text summary of a verification report. Shared with the run subcommand.
pub(crate) fn print_report(report: &VerificationReport, verbose: bool) {
    if report.no_outputs {
        println!("Verification: no merge outputs found");
        return;
    }

    println!(
        "Verification: {} samples, {} output files",
        report.unique_samples(),
        report.total_files
    );
    println!("  complete (R1+R2): {}", report.complete());
    println!("  incomplete:       {}", report.incomplete());

    if verbose {
        for (sample_id, status) in &report.samples {
            let directions: Vec<String> =
                status.directions.iter().map(ToString::to_string).collect();
            let marker = if status.is_complete() { "" } else { "  (incomplete)" };
            println!("  {sample_id}: {}{marker}", directions.join("+"));
        }
    }
}

fn print_tsv_report(report: &VerificationReport) {
    println!("sample\tdirections\tfiles\tcomplete");
    for (sample_id, status) in &report.samples {
        let directions: Vec<String> = status.directions.iter().map(ToString::to_string).collect();
        println!(
            "{sample_id}\t{}\t{}\t{}",
            directions.join(","),
            status.files,
            status.is_complete()
        );
    }
}
