//! Domain name store.
//!
//! A set of normalized domain names, each tagged with its [`Listing`].
//! Names are raw bytes, compared byte-wise; they need not be UTF-8.
//! Names are spread over a fixed number of partitions selected by a
//! deterministic hash, and each partition keeps its names in byte order,
//! so both insert-if-absent and exact lookup stay cheap at the scale of
//! merged public blocklists (hundreds of thousands of names).
//!
//! ## Example
//!
//! ```
//! use hosts2zones::{DomainStore, Listing};
//!
//! let mut store = DomainStore::new();
//! assert!(store.insert("Ads.Example.COM", Listing::Blocked));
//! assert!(!store.insert("ads.example.com", Listing::Allowed)); // first insertion wins
//! assert!(!store.insert("LOCALHOST", Listing::Blocked));        // reserved
//!
//! assert!(store.contains("ads.example.com"));
//! assert_eq!(store.get("ads.example.com"), Some(Listing::Blocked));
//! assert_eq!(store.len(), 1);
//! ```

use std::collections::BTreeMap;
use std::fmt;

use xxhash_rust::xxh3::xxh3_64;

use crate::types::{DomainEntry, Listing};

/// Default number of partitions
pub const DEFAULT_PARTITIONS: usize = 65535;

/// Name that is never stored, whatever its case
const RESERVED_NAME: &[u8] = b"localhost";

/// Partitioned, insert-only domain name set
pub struct DomainStore {
    /// Fixed partitions; a name lives in `partitions[hash(name) % len]`
    partitions: Vec<BTreeMap<Box<[u8]>, Listing>>,
    len: usize,
}

impl DomainStore {
    /// Create an empty store with [`DEFAULT_PARTITIONS`] partitions
    pub fn new() -> Self {
        Self::with_partitions(DEFAULT_PARTITIONS)
    }

    /// Create an empty store with `count` partitions (at least one)
    pub fn with_partitions(count: usize) -> Self {
        let count = count.max(1);
        Self {
            partitions: (0..count).map(|_| BTreeMap::new()).collect(),
            len: 0,
        }
    }

    fn partition_of(&self, name: &[u8]) -> usize {
        (xxh3_64(name) % self.partitions.len() as u64) as usize
    }

    /// Insert `name` unless it is empty, reserved, or already present.
    ///
    /// The name is lower-cased (ASCII) before storage. Returns `true` only
    /// when a new entry was created; the listing of an existing entry is
    /// never overwritten.
    pub fn insert(&mut self, name: impl AsRef<[u8]>, listing: Listing) -> bool {
        let name = name.as_ref();
        if name.is_empty() || name.eq_ignore_ascii_case(RESERVED_NAME) {
            return false;
        }

        // Only allocate when there is something to fold.
        let normalized;
        let name = if name.iter().any(u8::is_ascii_uppercase) {
            normalized = name.to_ascii_lowercase();
            normalized.as_slice()
        } else {
            name
        };

        let index = self.partition_of(name);
        let partition = &mut self.partitions[index];
        if partition.contains_key(name) {
            return false;
        }
        partition.insert(name.into(), listing);
        self.len += 1;
        true
    }

    /// Exact lookup. Assumes `name` is already lower-cased.
    pub fn contains(&self, name: impl AsRef<[u8]>) -> bool {
        let name = name.as_ref();
        self.partitions[self.partition_of(name)].contains_key(name)
    }

    /// Listing of `name`, if stored. Assumes `name` is already lower-cased.
    pub fn get(&self, name: impl AsRef<[u8]>) -> Option<Listing> {
        let name = name.as_ref();
        self.partitions[self.partition_of(name)].get(name).copied()
    }

    /// Number of distinct names stored
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if the store is empty
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of partitions
    pub fn partition_count(&self) -> usize {
        self.partitions.len()
    }

    /// Visit every entry exactly once: partitions in index order, names in
    /// byte order within a partition.
    pub fn iter(&self) -> impl Iterator<Item = DomainEntry<'_>> + '_ {
        self.partitions.iter().flat_map(|partition| {
            partition.iter().map(|(name, listing)| DomainEntry {
                name,
                listing: *listing,
            })
        })
    }
}

impl Default for DomainStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for DomainStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DomainStore")
            .field("len", &self.len)
            .field("partitions", &self.partitions.len())
            .finish()
    }
}
