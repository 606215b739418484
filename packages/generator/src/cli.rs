//! Command-line interface for the generator.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::config::{GeneratorConfig, DEFAULT_SHEET_INDEX};
use crate::error::Result;
use crate::generator::{convert, generate, GenerateReport};

/// PSGC API generator - Enrich PSGC records into per-level JSON files.
#[derive(Parser)]
#[command(name = "psgc-generator")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Enrich flat PSGC records and write the API files.
    Generate {
        /// Flat record file, .json, .csv or .xlsx (default: $PSGC_INPUT or src/data/psgc-json/psgc.json)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Datafile sheet index when the input is a workbook (default: $PSGC_SHEET or 3)
        #[arg(long)]
        sheet: Option<usize>,

        /// Output directory (default: $PSGC_OUTPUT_DIR or public/api)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Fail on unrecognized geographic levels instead of skipping them
        #[arg(long, overrides_with = "no_strict")]
        strict: bool,

        /// Skip unrecognized geographic levels even if $PSGC_STRICT_LEVELS is set
        #[arg(long = "no-strict", overrides_with = "strict")]
        no_strict: bool,
    },

    /// Convert the publication workbook or a CSV export of its datafile sheet into flat JSON records.
    Convert {
        /// Publication workbook (.xlsx) or CSV export of its datafile sheet
        #[arg(short, long)]
        input: PathBuf,

        /// Datafile sheet index in the workbook
        #[arg(long, default_value_t = DEFAULT_SHEET_INDEX)]
        sheet: usize,

        /// Output JSON file (default: src/data/psgc-json/psgc.json)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            input,
            sheet,
            output,
            strict,
            no_strict,
        } => {
            let mut config = GeneratorConfig::from_env();
            if let Some(input) = input {
                config = config.with_input(input);
            }
            if let Some(sheet) = sheet {
                config = config.with_sheet(sheet);
            }
            if let Some(output) = output {
                config = config.with_output_dir(output);
            }
            if let Some(strict) = strict_override(strict, no_strict) {
                config = config.with_strict_levels(strict);
            }
            generate_command(&config)
        }
        Commands::Convert {
            input,
            sheet,
            output,
        } => {
            let output = output.unwrap_or_else(|| GeneratorConfig::default().input);
            convert_command(&input, &output, sheet)
        }
    }
}

/// Strictness requested on the command line; `None` leaves the environment value.
fn strict_override(strict: bool, no_strict: bool) -> Option<bool> {
    match (strict, no_strict) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

fn spinner(message: &'static str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    #[allow(clippy::expect_used)] // Static template string that is guaranteed to be valid
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .expect("valid template"),
    );
    pb.set_message(message);
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}

/// Execute the generate command.
fn generate_command(config: &GeneratorConfig) -> Result<()> {
    println!(
        "{} {} into {}",
        style("Generating").bold(),
        style(config.input().display()).cyan(),
        style(config.output_dir().display()).green()
    );
    println!();

    let pb = spinner("Enriching PSGC records...");
    let report = generate(config);
    pb.finish_and_clear();
    let report = report?;

    print_report(&report);
    Ok(())
}

fn print_report(report: &GenerateReport) {
    println!("  Records read: {}", report.records_read);
    for (level, count) in &report.enriched {
        println!(
            "  {:<16} {:>7} records, {:>7} files",
            level.as_str(),
            count,
            report.files.files_for(*level)
        );
    }
    if report.unclassified > 0 {
        println!(
            "  Unclassified: {}",
            style(report.unclassified).yellow().bold()
        );
    }

    println!();
    println!(
        "{} {} files",
        style("Written:").green().bold(),
        report.files.total()
    );
}

/// Execute the convert command.
fn convert_command(input: &Path, output: &Path, sheet: usize) -> Result<()> {
    let pb = spinner("Converting datafile...");
    let converted = convert(input, output, sheet);
    pb.finish_and_clear();
    let count = converted?;

    println!(
        "{} {} records to {}",
        style("Converted").green().bold(),
        count,
        output.display()
    );
    Ok(())
}
