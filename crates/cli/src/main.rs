mod logging;

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::{Parser, ValueEnum};
use photo_stamp_core::{
    expand_home, load_config, run, validate_directory, FileOutcome, RunOptions, RunReport,
    StemFormat,
};
use std::path::PathBuf;
use std::process::ExitCode;

const USAGE_HINT: &str = "Please specify the directory containing the photos to rename";

#[derive(Debug, Parser)]
#[command(name = "photo-stamp", version)]
#[command(about = "Renames photos in a directory after the time they were taken")]
struct Cli {
    /// Directory holding the photos. A leading `~` expands to $HOME.
    directory: PathBuf,
    /// strftime-style stem format, e.g. "%Y-%m-%d_%H-%M-%S".
    #[arg(long)]
    format: Option<String>,
    /// Skip files without an EXIF capture time instead of using their creation time.
    #[arg(long, default_value_t = false)]
    no_fallback: bool,
    /// Process files in name order rather than directory order.
    #[arg(long, default_value_t = false)]
    sorted: bool,
    #[arg(long, default_value_t = false)]
    dry_run: bool,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    output: OutputFormat,
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => err.exit(),
            // Missing or surplus directory argument.
            ErrorKind::MissingRequiredArgument | ErrorKind::UnknownArgument => {
                println!("{USAGE_HINT}");
                return ExitCode::FAILURE;
            }
            _ => {
                println!("{}", err.render());
                return ExitCode::FAILURE;
            }
        },
    };

    logging::init();

    match cmd_rename(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            println!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn cmd_rename(cli: Cli) -> Result<()> {
    let expanded = expand_home(&cli.directory)?;
    let directory = std::path::absolute(&expanded)
        .with_context(|| format!("failed to resolve path: {}", expanded.display()))?;
    validate_directory(&directory)?;

    let config = load_config(cli.config.as_deref())?;
    let pattern = cli.format.as_deref().unwrap_or(&config.stem_format);
    let stem_format =
        StemFormat::parse(pattern).with_context(|| format!("invalid stem format: {pattern}"))?;

    let options = RunOptions {
        directory,
        stem_format,
        metadata_fallback: config.metadata_fallback && !cli.no_fallback,
        sort_entries: config.sort_entries || cli.sorted,
        dry_run: cli.dry_run,
    };

    if cli.output == OutputFormat::Text {
        println!("Processing photos in {}", options.directory.display());
    }

    let report = run(&options)?;

    match cli.output {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Text => print_summary(&report),
    }
    Ok(())
}

fn print_summary(report: &RunReport) {
    for outcome in &report.outcomes {
        if let FileOutcome::Planned { from, to, .. } = outcome {
            println!("{} -> {}", from.display(), to.display());
        }
    }
    for (path, reason) in report.failures() {
        println!("Skipped {}: {}", path.display(), reason);
    }

    if report.dry_run {
        println!("Planned {} renames (dry run)", report.stats.planned);
    } else {
        println!("Processed {} files", report.stats.renamed);
    }
}
