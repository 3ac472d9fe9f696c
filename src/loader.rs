//! Host-side dictionary file loading (binary-only; not part of the
//! portable core, per spec.md §1's "out of scope: file reading" and
//! §6's "Dictionary file format (consumed by the host collaborator,
//! shown for completeness)"). Line-oriented, one token per line,
//! trailing whitespace stripped, blank lines ignored, invalid lines
//! skipped rather than fatal — the same `File::open` / `BufReader::lines`
//! shape the teacher's own `dictionarium.rs` used for its word list.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use wordchain_engine::store::WordStore;

/// Reads `path` line by line and adds each surviving token to `store`.
/// Trailing `\r`, `\n`, space and tab are stripped from every line;
/// blank lines are skipped; lines that fail word validation (empty,
/// too long, or containing a non-printable-ASCII byte) are skipped too
/// rather than aborting the load. Returns the number of words
/// successfully added (spec.md §6: "Count returned is the number of
/// successfully added words").
pub fn load_dictionary<S: WordStore>(store: &mut S, path: &Path) -> io::Result<usize> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let mut added = 0usize;
    for line in reader.lines() {
        let line = line?;
        let word = line.trim_end_matches(['\r', '\n', ' ', '\t']);
        if word.is_empty() {
            continue;
        }
        if store.add(word.as_bytes()).is_ok() {
            added += 1;
        }
    }
    Ok(added)
}
