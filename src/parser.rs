//! Blocklist line classification.
//!
//! Two input formats are accepted and may be mixed freely across files:
//!
//! ```text
//! # plain domain list: one block-listed name per line
//! ads.example.com
//!
//! # hosts file: an address marker followed by one or more names
//! 0.0.0.0    tracker.example.com metrics.example.com
//! 127.0.0.1  beacon.example.net   # inline comment
//! 1.1.1.1    cdn.example.net      # allow-listed
//! ```
//!
//! Lines are classified as bytes; names are never required to be UTF-8.

use tracing::trace;

use crate::scanner::{lines, tokens};
use crate::store::DomainStore;
use crate::types::Listing;

/// Hosts-file address marking allow-listed names
const ALLOW_MARKER: &[u8] = b"1.1.1.1";

/// Hosts-file addresses marking block-listed names
const BLOCK_MARKERS: [&[u8]; 2] = [b"0.0.0.0", b"127.0.0.1"];

/// Classification of one logical line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// Starts with `#`
    Comment,
    /// A single bare domain name, always block-listed
    Domain(&'a [u8]),
    /// A hosts-file line; `rest` is everything after the address marker
    Hosts { listing: Listing, rest: &'a [u8] },
    /// Anything else; dropped
    Unrecognized,
}

impl<'a> LineKind<'a> {
    /// Candidate names carried by this line, each with its listing.
    ///
    /// A token starting with `#` ends the candidates. Candidates are not yet
    /// normalized or checked against the reserved name; the store does that.
    pub fn entries(self) -> impl Iterator<Item = (&'a [u8], Listing)> {
        let (listing, rest): (Listing, &'a [u8]) = match self {
            LineKind::Domain(name) => (Listing::Blocked, name),
            LineKind::Hosts { listing, rest } => (listing, rest),
            LineKind::Comment | LineKind::Unrecognized => (Listing::Blocked, &[]),
        };
        tokens(rest)
            .take_while(|token| !token.starts_with(b"#"))
            .map(move |token| (token, listing))
    }
}

/// Check that `name` has at least two labels: it contains a dot and neither
/// starts nor ends with one.
pub fn is_domain_like(name: &[u8]) -> bool {
    !name.starts_with(b".") && !name.ends_with(b".") && name.contains(&b'.')
}

/// Classify a logical line (already stripped of surrounding blanks).
pub fn classify_line(line: &[u8]) -> LineKind<'_> {
    if line.starts_with(b"#") {
        return LineKind::Comment;
    }

    let Some(first) = tokens(line).next() else {
        return LineKind::Unrecognized;
    };

    // A lone token is a plain domain-list entry if it looks like a domain.
    if first.len() == line.len() && is_domain_like(first) {
        return LineKind::Domain(first);
    }

    let listing = if first == ALLOW_MARKER {
        Listing::Allowed
    } else if BLOCK_MARKERS.contains(&first) {
        Listing::Blocked
    } else {
        return LineKind::Unrecognized;
    };

    LineKind::Hosts {
        listing,
        rest: &line[first.len()..],
    }
}

/// Classify every line of `text` and insert the candidates into `store`.
///
/// Returns the number of names newly accepted into the store.
pub fn parse_hosts(text: impl AsRef<[u8]>, store: &mut DomainStore) -> usize {
    let mut accepted = 0;

    for line in lines(text.as_ref()) {
        let kind = classify_line(line);
        if kind == LineKind::Unrecognized {
            trace!(line = %String::from_utf8_lossy(line), "dropping unrecognized line");
            continue;
        }

        for (name, listing) in kind.entries() {
            if store.insert(name, listing) {
                accepted += 1;
            }
        }
    }

    accepted
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(line: &str) -> LineKind<'_> {
        classify_line(line.as_bytes())
    }

    fn entries(line: &str) -> Vec<(&str, Listing)> {
        classify(line)
            .entries()
            .map(|(name, listing)| (std::str::from_utf8(name).unwrap(), listing))
            .collect()
    }

    #[test]
    fn test_is_domain_like() {
        assert!(is_domain_like(b"example.com"));
        assert!(is_domain_like(b"a.b.c.d"));
        assert!(is_domain_like(b"caf\xe9.example"));
        assert!(!is_domain_like(b"localhost"));
        assert!(!is_domain_like(b".example.com"));
        assert!(!is_domain_like(b"example.com."));
        assert!(!is_domain_like(b"."));
        assert!(!is_domain_like(b""));
    }

    #[test]
    fn test_classify_comment() {
        assert_eq!(classify("# 0.0.0.0 ads.example.com"), LineKind::Comment);
        assert_eq!(classify("#ads.example.com"), LineKind::Comment);
    }

    #[test]
    fn test_classify_bare_domain() {
        assert_eq!(
            classify("example.org"),
            LineKind::Domain("example.org".as_bytes())
        );
        assert_eq!(entries("Example.ORG"), vec![("Example.ORG", Listing::Blocked)]);
    }

    #[test]
    fn test_classify_bare_single_label_rejected() {
        assert_eq!(classify("localhost"), LineKind::Unrecognized);
        assert_eq!(classify("intranet"), LineKind::Unrecognized);
        assert_eq!(classify(".example.com"), LineKind::Unrecognized);
        assert_eq!(classify("example.com."), LineKind::Unrecognized);
    }

    #[test]
    fn test_classify_lone_marker_is_domain() {
        // A lone token is tested as a domain before it is tested as a marker
        assert_eq!(classify("0.0.0.0"), LineKind::Domain("0.0.0.0".as_bytes()));
    }

    #[test]
    fn test_classify_block_markers() {
        assert_eq!(
            entries("0.0.0.0 ads.example.com"),
            vec![("ads.example.com", Listing::Blocked)]
        );
        assert_eq!(
            entries("127.0.0.1\tads.example.com  pixel.example.com"),
            vec![
                ("ads.example.com", Listing::Blocked),
                ("pixel.example.com", Listing::Blocked)
            ]
        );
    }

    #[test]
    fn test_classify_allow_marker() {
        assert_eq!(
            entries("1.1.1.1 cdn.example.net"),
            vec![("cdn.example.net", Listing::Allowed)]
        );
    }

    #[test]
    fn test_classify_other_address_dropped() {
        assert_eq!(classify("8.8.8.8 dns.example"), LineKind::Unrecognized);
        assert_eq!(classify("::1 localhost"), LineKind::Unrecognized);
        assert_eq!(classify("0.0.0.0.1 ads.example"), LineKind::Unrecognized);
        assert_eq!(classify("127.0.0.10 ads.example"), LineKind::Unrecognized);
        assert!(entries("ads.example.com tracker.example.com").is_empty());
    }

    #[test]
    fn test_inline_comment_ends_entries() {
        assert_eq!(
            entries("0.0.0.0 ads.example.com # ads.other.com"),
            vec![("ads.example.com", Listing::Blocked)]
        );
        assert_eq!(
            entries("0.0.0.0 ads.example.com #comment other.example.com"),
            vec![("ads.example.com", Listing::Blocked)]
        );
    }

    #[test]
    fn test_hosts_tokens_not_dot_checked() {
        // Single-label names in hosts format are candidates; they just never emit
        assert_eq!(
            entries("0.0.0.0 broadcasthost"),
            vec![("broadcasthost", Listing::Blocked)]
        );
        assert!(entries("0.0.0.0").is_empty());
    }

    #[test]
    fn test_non_utf8_tokens_kept_verbatim() {
        let kind = classify_line(b"0.0.0.0 caf\xe9.example.com caf\xe8.example.com");
        let names: Vec<&[u8]> = kind.entries().map(|(name, _)| name).collect();
        assert_eq!(
            names,
            vec![&b"caf\xe9.example.com"[..], &b"caf\xe8.example.com"[..]]
        );
    }

    #[test]
    fn test_parse_hosts_counts_accepted() {
        let text = r#"
# Header comment
0.0.0.0 ads.example.com
0.0.0.0 ADS.example.com
127.0.0.1 localhost
127.0.0.1 LocalHost.
tracker.example.com
1.1.1.1 tracker.example.com
garbage line here
"#;
        let mut store = DomainStore::with_partitions(16);
        let accepted = parse_hosts(text, &mut store);
        // ads.example.com, localhost. (not the reserved name), tracker.example.com
        assert_eq!(accepted, 3);
        assert_eq!(store.len(), 3);
        assert_eq!(store.get("tracker.example.com"), Some(Listing::Blocked));
        assert!(!store.contains("localhost"));
    }

    #[test]
    fn test_parse_hosts_empty_text() {
        let mut store = DomainStore::with_partitions(4);
        assert_eq!(parse_hosts("", &mut store), 0);
        assert_eq!(parse_hosts("\n\n   \n# only comments\n", &mut store), 0);
        assert!(store.is_empty());
    }
}
