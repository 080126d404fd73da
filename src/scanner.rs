//! Lexical scanning of blocklist text.
//!
//! Input is scanned as raw bytes, so names that are not valid UTF-8 pass
//! through unchanged. Everything here hands out borrowed slices of the
//! input; nothing is copied or rewritten.

fn is_blank(b: &u8) -> bool {
    b.is_ascii_whitespace()
}

fn trim_blanks(line: &[u8]) -> &[u8] {
    let Some(start) = line.iter().position(|b| !is_blank(b)) else {
        return &[];
    };
    // A non-blank byte exists, so rposition finds one too
    let end = line.iter().rposition(|b| !is_blank(b)).unwrap_or(start);
    &line[start..=end]
}

/// Logical lines of `text` with surrounding blanks removed.
///
/// Both `\n` and `\r` end a line, so LF, CRLF and CR files scan alike.
/// Blank lines are skipped.
pub fn lines(text: &[u8]) -> impl Iterator<Item = &[u8]> {
    text.split(|b| *b == b'\n' || *b == b'\r')
        .map(trim_blanks)
        .filter(|line| !line.is_empty())
}

/// Whitespace-delimited tokens of a line
pub fn tokens(line: &[u8]) -> impl Iterator<Item = &[u8]> {
    line.split(is_blank).filter(|token| !token.is_empty())
}
