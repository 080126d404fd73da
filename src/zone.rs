//! Zone directive generation.
//!
//! Blocking a domain blocks all of its subdomains, so a stored name whose
//! ancestor is also stored needs no directive of its own. Ancestors are
//! found by walking the name's label boundaries from the right; only
//! boundaries deep enough to plausibly be a registrable domain are looked up.
//!
//! ```text
//! ads.tracker.example.com
//!                     ^ level 1  "com"                  never looked up
//!             ^         level 2  "example.com"          looked up (longer than 6)
//!     ^                 level 3  "tracker.example.com"  looked up
//! ```

use std::io::Write;

use crate::error::Result;
use crate::store::DomainStore;
use crate::types::DomainEntry;

/// Boundaries at this level or deeper are always looked up
const ALWAYS_CHECK_LEVEL: usize = 3;

/// At level 2 the suffix is looked up only when longer than this
const SECOND_LEVEL_MIN_SUFFIX: usize = 6;

/// Result of walking a name's label boundaries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AncestorScan<'a> {
    /// Label boundaries seen before the walk stopped
    pub levels: usize,
    /// Stored ancestor that covers the name, if one was found
    pub covered_by: Option<&'a [u8]>,
}

impl AncestorScan<'_> {
    /// Check if an ancestor covers the name
    pub fn is_subsumed(&self) -> bool {
        self.covered_by.is_some()
    }
}

/// Walk `name` from its end toward its start, looking up qualifying
/// ancestors in `store`. Stops at the first stored ancestor.
pub fn scan_ancestors<'a>(store: &DomainStore, name: &'a [u8]) -> AncestorScan<'a> {
    let mut levels = 0;

    for start in (1..name.len()).rev() {
        if name[start - 1] != b'.' {
            continue;
        }
        levels += 1;

        let suffix_len = name.len() - start;
        let check = levels >= ALWAYS_CHECK_LEVEL
            || (levels == 2 && suffix_len > SECOND_LEVEL_MIN_SUFFIX);
        if check {
            let ancestor = &name[start..];
            if store.contains(ancestor) {
                return AncestorScan {
                    levels,
                    covered_by: Some(ancestor),
                };
            }
        }
    }

    AncestorScan {
        levels,
        covered_by: None,
    }
}

/// Check if `entry` needs an explicit zone directive: it is block-listed,
/// has more than one label, and no stored ancestor covers it.
pub fn should_emit(store: &DomainStore, entry: &DomainEntry<'_>) -> bool {
    if entry.is_allowed() {
        return false;
    }
    let scan = scan_ancestors(store, entry.name);
    !scan.is_subsumed() && scan.levels >= 1
}

/// Names that need a zone directive, in store traversal order
pub fn zone_names(store: &DomainStore) -> impl Iterator<Item = &[u8]> + '_ {
    store
        .iter()
        .filter(move |entry| should_emit(store, entry))
        .map(|entry| entry.name)
}

/// Writes `local-zone` directives and counts them
pub struct ZoneWriter<W: Write> {
    out: W,
    zones: usize,
}

impl<W: Write> ZoneWriter<W> {
    /// Create a new zone writer
    pub fn new(out: W) -> Self {
        Self { out, zones: 0 }
    }

    /// Write one `local-zone: "<name>" static` line, copying the name's
    /// bytes unchanged
    pub fn write_zone(&mut self, name: &[u8]) -> Result<()> {
        self.out.write_all(b"local-zone: \"")?;
        self.out.write_all(name)?;
        self.out.write_all(b"\" static\n")?;
        self.zones += 1;
        Ok(())
    }

    /// Directives written so far
    pub fn zones(&self) -> usize {
        self.zones
    }

    /// Flush and return the underlying writer
    pub fn finish(mut self) -> Result<W> {
        self.out.flush()?;
        Ok(self.out)
    }
}

/// Write a directive for every name in `store` that needs one.
///
/// Returns the number of directives written.
pub fn write_zones<W: Write>(store: &DomainStore, out: W) -> Result<usize> {
    let mut writer = ZoneWriter::new(out);
    for name in zone_names(store) {
        writer.write_zone(name)?;
    }
    let zones = writer.zones();
    writer.finish()?;
    Ok(zones)
}
