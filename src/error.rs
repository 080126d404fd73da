use std::path::PathBuf;

use thiserror::Error;

/// Classifies why an input file contributed nothing, for programmatic matching.
///
/// Skipped inputs are not errors: the run continues with the remaining files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileSkipReason {
    /// The path does not exist or its metadata could not be read
    Missing,
    /// The file is not larger than the configured minimum size
    TooSmall,
    /// Opening or reading the full file failed
    Unreadable,
}

impl FileSkipReason {
    /// Short lowercase label used in log fields
    pub fn as_str(&self) -> &'static str {
        match self {
            FileSkipReason::Missing => "missing",
            FileSkipReason::TooSmall => "too small",
            FileSkipReason::Unreadable => "unreadable",
        }
    }
}

/// hosts2zones error types
#[derive(Error, Debug)]
pub enum ZoneError {
    #[error("Cannot open output file '{}': {source}", .path.display())]
    OutputUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid option: {0}")]
    InvalidOption(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ZoneError>;
