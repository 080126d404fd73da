//! hosts2zones CLI
//!
//! Usage: `hosts2zones <OUTPUT> <INPUT>...`
//!
//! Exits 0 when at least one zone directive was written, 1 otherwise.

mod args;
mod logging;

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::error;

use hosts2zones::{run, BuilderOptions, Summary};

use args::{Args, SummaryFormat};

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            // --help and --version are not failures
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    if let Err(e) = logging::init(&args) {
        eprintln!("{:#}", e);
        return ExitCode::FAILURE;
    }

    match execute(&args) {
        Ok(summary) if summary.is_success() => ExitCode::SUCCESS,
        Ok(_) => ExitCode::FAILURE,
        Err(e) => {
            error!("Fatal error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn execute(args: &Args) -> Result<Summary> {
    let options = BuilderOptions::new().with_partitions(args.partitions);
    let summary = run(&args.output, &args.inputs, options).context("Failed to build zone file")?;
    print_summary(&summary, args.summary)?;
    Ok(summary)
}

fn print_summary(summary: &Summary, format: SummaryFormat) -> Result<()> {
    match format {
        SummaryFormat::Text => {
            println!("Number of Hosts: {}", summary.hosts);
            println!("Number of Zones: {}", summary.zones);
        }
        SummaryFormat::Json => {
            println!("{}", serde_json::to_string(summary)?);
        }
    }
    Ok(())
}
