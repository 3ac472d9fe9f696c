//! Error kinds for the word store and signature index (spec.md §7).
//!
//! Only two of the four error kinds spec.md lists are ever surfaced as a
//! `Result::Err`: invalid argument and capacity exceeded. Silent
//! truncation is, by definition, not reported (it is a property tests
//! compare bounded vs. unbounded configurations for, see spec.md §8), and
//! "not found" is a normal, non-error outcome of `find_longest`.

use thiserror::Error;

/// Failure surfaced from [`crate::store::WordStore::add`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The token was empty.
    #[error("word is empty")]
    Empty,
    /// The token exceeded the configured maximum length.
    #[error("word exceeds maximum length of {max} bytes")]
    TooLong {
        /// The configured maximum.
        max: usize,
    },
    /// The token contained a byte outside the printable-ASCII range `[33,126]`.
    #[error("word contains a byte outside the printable ASCII range [33,126]: {byte:#04x}")]
    InvalidByte {
        /// The offending byte.
        byte: u8,
    },
    /// The static-regime word store has no room for another word.
    #[error("word store has reached its capacity")]
    PoolFull,
}

/// Failure surfaced from [`crate::index::SignatureIndex::build`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IndexError {
    /// The static-regime index has no room for another distinct signature.
    #[error("signature index has reached its entry capacity")]
    PoolFull,
}
