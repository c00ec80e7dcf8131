//! robin CLI — rename scanned floor plans with sequential floor captions.
//!
//! Usage: `robin [--dry-run] [--style digits|tens] [--json] <DIR | --dir DIR>`

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::error::ErrorKind;
use clap::{ArgAction, CommandFactory, Parser};
use tracing::Level;

use robin_core::{NumeralStyle, RobinError};
use robin_rename::{rename_directory, RenameOptions, RenameReport};

#[derive(Parser)]
#[command(name = "robin")]
#[command(version)]
#[command(about = "Rename scanned floor plans with sequential floor captions")]
struct Cli {
    /// Directory holding the scanned floor plans
    #[arg(value_name = "DIR")]
    path: Option<PathBuf>,

    /// Directory holding the scanned floor plans (wins over the positional DIR)
    #[arg(short, long = "dir", value_name = "DIR")]
    dir: Option<PathBuf>,

    /// Print the planned renames without touching any file
    #[arg(short = 'n', long)]
    dry_run: bool,

    /// Floor numeral style used in captions
    #[arg(long, value_name = "STYLE", default_value_t = NumeralStyle::Digits)]
    style: NumeralStyle,

    /// Print the run report as JSON
    #[arg(long)]
    json: bool,

    /// More log output (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    let Some(dir) = cli.dir.as_deref().or(cli.path.as_deref()) else {
        Cli::command()
            .error(
                ErrorKind::MissingRequiredArgument,
                "Please provide the directory name",
            )
            .exit()
    };

    match run(&cli, dir) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => Level::ERROR,
        (false, 0) => Level::WARN,
        (false, 1) => Level::INFO,
        (false, _) => Level::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli, dir: &Path) -> anyhow::Result<ExitCode> {
    let options = RenameOptions {
        style: cli.style,
        dry_run: cli.dry_run,
    };

    let report = match rename_directory(dir, &options) {
        Ok(report) => report,
        Err(RobinError::EmptyBatch { already_renamed }) if already_renamed > 0 => {
            println!("nothing to rename: {already_renamed} file(s) already renamed");
            return Ok(ExitCode::SUCCESS);
        }
        Err(e) => {
            return Err(e).with_context(|| format!("cannot rename files in {}", dir.display()))
        }
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    Ok(if report.failed.is_empty() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn print_report(report: &RenameReport) {
    let plan = &report.plan;

    if report.dry_run {
        for instruction in &plan.instructions {
            println!("{} -> {}", instruction.old_name, instruction.new_name);
        }
        println!(
            "dry run: {} file(s) to rename for site {} from floor {}, {} skipped",
            plan.instructions.len(),
            plan.header.site_name,
            plan.first_floor,
            plan.skipped.len()
        );
        return;
    }

    for instruction in &report.renamed {
        println!("{} -> {}", instruction.old_name, instruction.new_name);
    }
    // Failures were already logged as they happened.
    println!(
        "{} renamed, {} failed, {} skipped",
        report.renamed.len(),
        report.failed.len(),
        plan.skipped.len()
    );
}
