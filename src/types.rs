use std::borrow::Cow;

use serde::Serialize;

/// Whether a stored domain is block-listed or allow-listed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Listing {
    /// Resolution of the domain should be suppressed
    Blocked,
    /// Explicitly exempted from blocking (`1.1.1.1` hosts marker)
    Allowed,
}

impl Listing {
    /// Build a listing from an allow flag
    pub fn from_allowed(allowed: bool) -> Self {
        if allowed {
            Listing::Allowed
        } else {
            Listing::Blocked
        }
    }

    /// Check if this listing is an allow-list entry
    pub fn is_allowed(&self) -> bool {
        matches!(self, Listing::Allowed)
    }
}

/// A stored domain name, borrowed from the [`DomainStore`](crate::DomainStore)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DomainEntry<'a> {
    /// Normalized (ASCII lower-cased) name bytes, no surrounding dots
    pub name: &'a [u8],
    /// Listing fixed at first insertion
    pub listing: Listing,
}

impl<'a> DomainEntry<'a> {
    /// Byte length of the name
    pub fn len(&self) -> usize {
        self.name.len()
    }

    /// Check if the name is empty (never true for stored entries)
    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
    }

    /// Name for display; bytes that are not UTF-8 become U+FFFD
    pub fn name_lossy(&self) -> Cow<'a, str> {
        String::from_utf8_lossy(self.name)
    }

    /// Check if the entry is allow-listed
    pub fn is_allowed(&self) -> bool {
        self.listing.is_allowed()
    }
}

/// Counts reported at the end of a run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    /// Distinct domain names accepted into the store
    pub hosts: usize,
    /// `local-zone` directives written
    pub zones: usize,
}

impl Summary {
    /// Check if the run produced at least one zone directive
    pub fn is_success(&self) -> bool {
        self.zones > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_from_allowed() {
        assert_eq!(Listing::from_allowed(true), Listing::Allowed);
        assert_eq!(Listing::from_allowed(false), Listing::Blocked);
        assert!(Listing::Allowed.is_allowed());
        assert!(!Listing::Blocked.is_allowed());
    }

    #[test]
    fn test_entry_length() {
        let entry = DomainEntry {
            name: b"ads.example.com",
            listing: Listing::Blocked,
        };
        assert_eq!(entry.len(), 15);
        assert!(!entry.is_empty());
        assert!(!entry.is_allowed());
        assert_eq!(entry.name_lossy(), "ads.example.com");
    }

    #[test]
    fn test_summary_success() {
        assert!(!Summary::default().is_success());
        assert!(Summary { hosts: 0, zones: 1 }.is_success());
    }

    #[test]
    fn test_summary_serializes() {
        let json = serde_json::to_string(&Summary { hosts: 2, zones: 1 }).unwrap();
        assert_eq!(json, r#"{"hosts":2,"zones":1}"#);
    }
}
