//! Signature normalizer (spec.md §4.A): canonicalizes a word's byte
//! multiset into a sorted "signature", tests the one-letter-extension
//! predicate, and hashes signatures for the index.
//!
//! Words and signatures are opaque byte sequences in the printable-ASCII
//! range `[33,126]` — never lowercased, trimmed, or interpreted as UTF-8.

use crate::config::{CANDIDATE_SCRATCH_LEN, PRINTABLE_MAX, PRINTABLE_MIN};
use crate::error::StoreError;

const FNV_OFFSET_BASIS: u64 = 0xcbf29ce484222325;
const FNV_PRIME: u64 = 0x100000001b3;

/// FNV-1a over raw signature bytes. Chosen per spec.md §4.C / §9: small,
/// allocation-free, well distributed for short sequences over a dense
/// alphabet. Kept as a free function (rather than a `Hasher` impl, as the
/// teacher repo did for its fixed-size `Signature` type) because the
/// signature index hashes a full byte slice at once and never needs
/// `std::hash::Hash`'s incremental `write_*` protocol.
#[inline]
pub fn fnv1a(bytes: &[u8]) -> u64 {
    let mut hash = FNV_OFFSET_BASIS;
    for &byte in bytes {
        hash = (hash ^ byte as u64).wrapping_mul(FNV_PRIME);
    }
    hash
}

/// Returns `true` iff `byte` is a valid word/signature character.
#[inline]
pub fn is_printable(byte: u8) -> bool {
    (PRINTABLE_MIN..=PRINTABLE_MAX).contains(&byte)
}

/// Validates a candidate word against the length and byte-range rules of
/// spec.md §4.A. Does not touch the store; callers combine this with
/// insertion.
pub fn validate_word(word: &[u8], max_len: usize) -> Result<(), StoreError> {
    if word.is_empty() {
        return Err(StoreError::Empty);
    }
    if word.len() > max_len {
        return Err(StoreError::TooLong { max: max_len });
    }
    for &byte in word {
        if !is_printable(byte) {
            return Err(StoreError::InvalidByte { byte });
        }
    }
    Ok(())
}

/// Computes the canonical signature of `word`: the lexicographic sort of
/// its byte values, via a counting sort over the 128-byte alphabet
/// (spec.md §4.A). `word` is assumed already validated (printable-ASCII,
/// non-empty); this function does not re-validate it.
///
/// Idempotent: re-running this on its own output is a no-op, since a
/// sorted sequence counting-sorts to itself.
pub fn compute_signature(word: &[u8]) -> Vec<u8> {
    let mut out = vec![0u8; word.len()];
    write_signature(word, &mut out);
    out
}

/// Same algorithm as [`compute_signature`], writing into a caller-owned
/// buffer instead of allocating. `out` must be at least `word.len()`
/// bytes; only the first `word.len()` bytes are written. This is what the
/// static memory regime uses to stay allocation-free.
pub fn write_signature(word: &[u8], out: &mut [u8]) {
    debug_assert!(out.len() >= word.len());
    let mut tally = [0u16; 128];
    for &byte in word {
        tally[byte as usize] += 1;
    }
    let mut pos = 0usize;
    for (value, &count) in tally.iter().enumerate() {
        for _ in 0..count {
            out[pos] = value as u8;
            pos += 1;
        }
    }
}

/// The forward-scan, single-skip derivation test of spec.md §4.A:
/// `s2` is derived from `s1` iff `s2` equals `s1` with exactly one byte
/// inserted at its sorted position.
pub fn is_derived(s1: &[u8], s2: &[u8]) -> bool {
    if s2.len() != s1.len() + 1 {
        return false;
    }
    let mut i = 0usize; // index into s1
    let mut skipped = false;
    for &b in s2 {
        if i < s1.len() && s1[i] == b {
            i += 1;
            continue;
        }
        if skipped {
            return false;
        }
        skipped = true;
    }
    // every byte of s1 must have been consumed, and exactly one skip used
    i == s1.len() && skipped
}

/// Splices `c` into `s` at its sorted position, producing a canonical
/// signature one byte longer. Preserves canonical order when `s` is
/// already sorted (spec.md §4.D invariant). Writes into `out`, which must
/// hold at least `s.len() + 1` bytes, and returns the written length.
///
/// Returns `None` only if `out` is too small to hold the result — this
/// should never happen when `out` is sized [`CANDIDATE_SCRATCH_LEN`] or
/// greater, since no valid word exceeds `MAX_WORD_LENGTH`.
pub fn insert_sorted(s: &[u8], c: u8, out: &mut [u8]) -> Option<usize> {
    let needed = s.len() + 1;
    if out.len() < needed {
        return None;
    }
    let split = s.partition_point(|&b| b <= c);
    out[..split].copy_from_slice(&s[..split]);
    out[split] = c;
    out[split + 1..needed].copy_from_slice(&s[split..]);
    Some(needed)
}

/// Convenience wrapper over [`insert_sorted`] that allocates its own
/// [`CANDIDATE_SCRATCH_LEN`]-sized scratch buffer. Used by call sites that
/// do not already carry one (tests, the static-regime code paths that
/// cannot allocate still use [`insert_sorted`] directly with a stack
/// array they own).
pub fn insert_sorted_owned(s: &[u8], c: u8) -> Vec<u8> {
    let mut buf = vec![0u8; s.len() + 1];
    let len = insert_sorted(s, c, &mut buf).expect("scratch buffer sized to s.len() + 1");
    buf.truncate(len);
    buf
}
