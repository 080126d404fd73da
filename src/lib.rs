//! hosts2zones - Convert DNS blocklists into minimal `local-zone` directives
//!
//! This library merges any number of blocklists and produces one
//! `local-zone: "<domain>" static` line per domain that actually needs it:
//! - Deduplication across files (first occurrence decides block/allow)
//! - Hosts-file and plain domain-list formats, mixed freely
//! - Allow-listing through the `1.1.1.1` hosts marker
//! - Suppression of subdomains already covered by a blocked ancestor
//!
//! # Example
//!
//! ```rust
//! use hosts2zones::ZoneBuilder;
//!
//! let hosts = "
//! # StevenBlack-style hosts file
//! 0.0.0.0 ads.tracker.example.com
//! 0.0.0.0 tracker.example.com
//! 1.1.1.1 cdn.example.net     # never blocked
//! ";
//!
//! let mut builder = ZoneBuilder::new();
//! builder.load_text(hosts);
//! builder.load_text("metrics.example.org\n");
//!
//! let mut out = Vec::new();
//! let summary = builder.write_zones(&mut out).unwrap();
//! assert_eq!(summary.hosts, 4);
//! assert_eq!(summary.zones, 2);
//!
//! let zones = String::from_utf8(out).unwrap();
//! assert!(zones.contains("local-zone: \"tracker.example.com\" static\n"));
//! assert!(!zones.contains("ads.tracker.example.com"));
//! ```
//!
//! # Input Formats
//!
//! | Line | Meaning |
//! |------|---------|
//! | `example.com` | Block-listed (single token with an interior dot) |
//! | `0.0.0.0 a.com b.com` | Block-listed names |
//! | `127.0.0.1 a.com` | Block-listed names |
//! | `1.1.1.1 a.com` | Allow-listed names |
//! | `# ...` | Comment |
//!
//! Any other line is ignored, as is the name `localhost`.

pub mod builder;
pub mod error;
pub mod parser;
pub mod scanner;
pub mod store;
pub mod types;
pub mod zone;

// Re-export commonly used items
pub use builder::{run, BuilderOptions, FileOutcome, ZoneBuilder, MIN_INPUT_SIZE};
pub use error::{FileSkipReason, Result, ZoneError};
pub use parser::{classify_line, is_domain_like, parse_hosts, LineKind};
pub use store::{DomainStore, DEFAULT_PARTITIONS};
pub use types::{DomainEntry, Listing, Summary};
pub use zone::{scan_ancestors, should_emit, write_zones, zone_names, AncestorScan, ZoneWriter};
