//! doc-drift: detect stale command and path references in project documentation.
//!
//! Scans every documentation file under the repository root for command
//! invocations and `scripts/` or `src/` path fragments, checks them against the
//! command registry and the working tree, and writes a drift report.

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use doc_drift::{DriftError, DriftReport, report};
use std::process::ExitCode;
use tracing::Level;

use cli::Args;

/// Exit status when the command registry is missing.
const EXIT_MISSING_REGISTRY: u8 = 2;

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {:#}", "error:".red().bold(), err);
            ExitCode::from(exit_status(&err))
        }
    }
}

/// Maps a fatal error onto the process exit status.
fn exit_status(err: &anyhow::Error) -> u8 {
    match err.downcast_ref::<DriftError>() {
        Some(DriftError::MissingRegistry(_)) => EXIT_MISSING_REGISTRY,
        _ => 1,
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

fn run(args: &Args) -> Result<()> {
    let config = args.to_config();
    let report = doc_drift::detect(&config)?;

    let report_file = config.report_file();
    report::write_report(&report_file, &report)?;

    if args.json {
        let json = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
        println!("{}", json);
        eprintln!("Report written to {}", report_file.display());
        return Ok(());
    }

    if args.verbose {
        eprintln!(
            "{} Registry contains {} commands",
            "info:".blue().bold(),
            report.commands.len()
        );
        eprintln!(
            "{} Scanned {} documentation files ({} unreadable)",
            "info:".blue().bold(),
            report.files_scanned,
            report.unreadable_count()
        );
    }

    print_summary(&report);
    println!("Report written to {}", report_file.display());
    println!("Done.");
    Ok(())
}

fn print_summary(report: &DriftReport) {
    let stale = report.stale_paths();
    if stale.is_empty() {
        println!("{} No stale path references found", "ok:".green().bold());
    } else {
        println!(
            "\n{} {} stale path reference(s):\n",
            "Found".red().bold(),
            stale.len()
        );
        for (file, check) in &stale {
            println!("  {} {}", file.dimmed(), check.fragment.red());
        }
        println!();
    }

    if !report.not_mentioned.is_empty() {
        println!(
            "{} {} command(s) not mentioned in docs: {}",
            "warn:".yellow().bold(),
            report.not_mentioned.len(),
            report.not_mentioned.join(", ")
        );
    }
}
