//! Caller-side rendering of a search result (spec.md §6, "Output format
//! (when the result is rendered by a caller)"). The core itself never
//! prints anything; these are pure, allocation-only helpers the host
//! binary calls into so the exact rendered text stays unit-testable
//! without spawning a process.

/// Renders one chain as `word0->word1->...->wordk`, matching the exact
/// separator and absence of surrounding whitespace spec.md §6 specifies.
/// `words` are rendered with `String::from_utf8_lossy` since a word is an
/// opaque printable-ASCII byte sequence, not necessarily valid UTF-8 in
/// every byte-level edge case the core accepts.
pub fn format_chain(words: &[&[u8]]) -> String {
    words
        .iter()
        .map(|w| String::from_utf8_lossy(w))
        .collect::<Vec<_>>()
        .join("->")
}

/// Renders the one-line summary that precedes the chain listing:
/// `Found N chain(s) of length L:` when `count > 0`, or
/// `No chains found.` when `count == 0` (spec.md §6).
pub fn format_summary(count: usize, max_length: usize) -> String {
    if count == 0 {
        "No chains found.".to_string()
    } else {
        format!("Found {count} chain(s) of length {max_length}:")
    }
}
