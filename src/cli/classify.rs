use std::path::PathBuf;

use clap::Args;
use tracing::warn;

use crate::cli::OutputFormat;
use crate::config::{MergeConfig, DEFAULT_DELIMITER};
use crate::core::grouping::SampleGrouping;
use crate::core::read_file::ReadFile;
use crate::pipeline::classify::classify;
use crate::pipeline::group::group_files;
use crate::pipeline::locate::find_read_files;

#[derive(Args)]
pub struct ClassifyArgs {
    /// Files to classify, or directories to scan recursively
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    /// Sample-identity delimiter marker
    #[arg(long, default_value = DEFAULT_DELIMITER)]
    pub delimiter: String,
}

/// Execute the classify subcommand: a dry run of the grouping that merging
/// would act on, without writing anything.
///
/// # Errors
///
/// Returns an error if a directory argument does not exist or report
/// serialization fails.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: ClassifyArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let config = MergeConfig {
        delimiter: args.delimiter.clone(),
        ..MergeConfig::default()
    };

    let mut files = Vec::new();
    for path in &args.paths {
        if path.is_dir() {
            files.extend(find_read_files(path, &config.suffixes)?);
        } else {
            files.push(ReadFile::new(path.clone()));
        }
    }

    let mut classified = Vec::new();
    let mut skipped = 0usize;
    for file in files {
        match classify(&file.file_name, &config) {
            Ok(classification) => classified.push((file, classification)),
            Err(e) => {
                warn!("{e}");
                skipped += 1;
            }
        }
    }

    let grouping = group_files(classified);

    match format {
        OutputFormat::Text => print_text_grouping(&grouping, skipped, verbose),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&grouping)?),
        OutputFormat::Tsv => print_tsv_grouping(&grouping),
    }

    Ok(())
}

fn print_text_grouping(grouping: &SampleGrouping, skipped: usize, verbose: bool) {
    println!(
        "Grouped {} files into {} samples ({} skipped)",
        grouping.file_count(),
        grouping.sample_count(),
        skipped
    );

    for (sample_id, directions) in grouping.samples() {
        println!("{sample_id}:");
        for (direction, lanes) in directions {
            println!("  {direction}: {} lanes", lanes.len());
            if verbose {
                for lane in lanes {
                    match lane.byte_len() {
                        Ok(len) => println!("    {} ({len} bytes)", lane.path.display()),
                        Err(_) => println!("    {}", lane.path.display()),
                    }
                }
            }
        }
    }
}

fn print_tsv_grouping(grouping: &SampleGrouping) {
    println!("sample\tdirection\tlane_order\tpath");
    for (sample_id, directions) in grouping.samples() {
        for (direction, lanes) in directions {
            for (index, lane) in lanes.iter().enumerate() {
                println!(
                    "{sample_id}\t{direction}\t{index}\t{}",
                    lane.path.display()
                );
            }
        }
    }
}
