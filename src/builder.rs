//! Run driver.
//!
//! Accumulates a [`DomainStore`] across input files in the order given,
//! then writes the zone directives and reports the counts.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::{debug, info};

use crate::error::{FileSkipReason, Result, ZoneError};
use crate::parser::parse_hosts;
use crate::store::{DomainStore, DEFAULT_PARTITIONS};
use crate::types::Summary;
use crate::zone::write_zones;

/// Input files of this size or smaller are skipped
pub const MIN_INPUT_SIZE: u64 = 3;

/// Builder options.
#[derive(Debug, Clone)]
pub struct BuilderOptions {
    /// Number of domain store partitions
    pub partitions: usize,
    /// Inputs no larger than this many bytes are skipped
    pub min_input_size: u64,
}

impl Default for BuilderOptions {
    fn default() -> Self {
        Self {
            partitions: DEFAULT_PARTITIONS,
            min_input_size: MIN_INPUT_SIZE,
        }
    }
}

impl BuilderOptions {
    /// Create new builder options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of store partitions.
    pub fn with_partitions(mut self, partitions: usize) -> Self {
        self.partitions = partitions;
        self
    }

    /// Set the minimum input size.
    pub fn with_min_input_size(mut self, size: u64) -> Self {
        self.min_input_size = size;
        self
    }

    fn validate(&self) -> Result<()> {
        if self.partitions == 0 {
            return Err(ZoneError::InvalidOption(
                "partition count must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

/// What became of one input file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
    /// The file was scanned; `accepted` names were new to the store
    Loaded { accepted: usize },
    /// The file contributed nothing
    Skipped(FileSkipReason),
}

/// Accumulates blocklists and emits zone directives
#[derive(Debug)]
pub struct ZoneBuilder {
    store: DomainStore,
    options: BuilderOptions,
}

impl ZoneBuilder {
    /// Create a builder with default options
    pub fn new() -> Self {
        Self {
            store: DomainStore::new(),
            options: BuilderOptions::default(),
        }
    }

    /// Create a builder with explicit options
    pub fn with_options(options: BuilderOptions) -> Result<Self> {
        options.validate()?;
        Ok(Self {
            store: DomainStore::with_partitions(options.partitions),
            options,
        })
    }

    /// Load one input file.
    ///
    /// Missing, unreadable and too-small files are skipped rather than
    /// failing the run.
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> FileOutcome {
        let path = path.as_ref();

        let outcome = match self.read_input(path) {
            Ok(bytes) => FileOutcome::Loaded {
                accepted: self.load_text(&bytes),
            },
            Err(reason) => FileOutcome::Skipped(reason),
        };

        match outcome {
            FileOutcome::Loaded { accepted } => {
                debug!(path = %path.display(), accepted, "loaded input");
            }
            FileOutcome::Skipped(reason) => {
                debug!(path = %path.display(), reason = reason.as_str(), "skipped input");
            }
        }
        outcome
    }

    fn read_input(&self, path: &Path) -> std::result::Result<Vec<u8>, FileSkipReason> {
        let metadata = fs::metadata(path).map_err(|_| FileSkipReason::Missing)?;
        if metadata.len() <= self.options.min_input_size {
            return Err(FileSkipReason::TooSmall);
        }
        fs::read(path).map_err(|_| FileSkipReason::Unreadable)
    }

    /// Scan blocklist text into the store. The text need not be UTF-8.
    ///
    /// Returns the number of names newly accepted.
    pub fn load_text(&mut self, text: impl AsRef<[u8]>) -> usize {
        parse_hosts(text, &mut self.store)
    }

    /// Distinct names accepted so far
    pub fn hosts(&self) -> usize {
        self.store.len()
    }

    /// The accumulated store
    pub fn store(&self) -> &DomainStore {
        &self.store
    }

    /// Write zone directives for the accumulated store.
    pub fn write_zones<W: Write>(&self, out: W) -> Result<Summary> {
        let zones = write_zones(&self.store, out)?;
        let summary = Summary {
            hosts: self.store.len(),
            zones,
        };
        info!(hosts = summary.hosts, zones = summary.zones, "zones written");
        Ok(summary)
    }
}

impl Default for ZoneBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Convert `inputs` into a zone file at `output`.
///
/// The output file is created before any input is read; failure to create
/// it is the only per-run error besides write failures.
pub fn run<P, I>(output: impl AsRef<Path>, inputs: I, options: BuilderOptions) -> Result<Summary>
where
    P: AsRef<Path>,
    I: IntoIterator<Item = P>,
{
    let mut builder = ZoneBuilder::with_options(options)?;

    let output = output.as_ref();
    let file = File::create(output).map_err(|source| ZoneError::OutputUnavailable {
        path: output.to_path_buf(),
        source,
    })?;

    for input in inputs {
        builder.load_file(input);
    }

    builder.write_zones(BufWriter::new(file))
}
