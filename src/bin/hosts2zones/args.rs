//! Command-line argument parsing

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use hosts2zones::DEFAULT_PARTITIONS;

/// hosts2zones - blocklist to local-zone converter
///
/// Merges hosts files and plain domain lists into a file of
/// `local-zone: "<domain>" static` directives, leaving out every
/// subdomain that an emitted ancestor already blocks.
#[derive(Parser, Debug)]
#[command(name = "hosts2zones")]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Zone file to write (created or truncated)
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Hosts files or domain lists, read in the order given. Names starting
    /// with `-` are taken as inputs, so options must come before them.
    #[arg(value_name = "INPUT", required = true, allow_hyphen_values = true)]
    pub inputs: Vec<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log output format
    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,

    /// Summary format printed on stdout
    #[arg(long, value_enum, default_value_t = SummaryFormat::Text)]
    pub summary: SummaryFormat,

    /// Number of domain store partitions
    #[arg(
        long,
        value_name = "N",
        env = "HOSTS2ZONES_PARTITIONS",
        default_value_t = DEFAULT_PARTITIONS
    )]
    pub partitions: usize,
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable text
    Text,
    /// Single-line compact text
    Compact,
    /// JSON lines
    Json,
}

/// Summary output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SummaryFormat {
    /// `Number of Hosts: N` / `Number of Zones: M`
    Text,
    /// `{"hosts":N,"zones":M}`
    Json,
}
