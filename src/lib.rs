//! The derived-anagram chain search engine: given a word list and a
//! starting word, enumerates every longest sequence
//! `w0 -> w1 -> ... -> wk` where each `w(i+1)` is formed by adding exactly
//! one character to the multiset of characters of `w(i)` (the written
//! order of letters does not matter for the chain relation).
//!
//! This crate is the portable core described in spec.md §1: signature
//! normalization ([`signature`]), the word store ([`store`]), the
//! signature index ([`index`]), the chain enumerator ([`enumerator`]),
//! and the longest-only accumulator ([`accumulator`]). It intentionally
//! does not read files, parse command lines, or configure logging —
//! those are the host binary's job (`src/main.rs`), kept separate so the
//! core can be dropped unchanged into a bare-metal or RTOS target.
//!
//! The crate is organized around two memory regimes that expose
//! identical contracts (spec.md §4.F): a heap-pool regime
//! ([`store::HeapWordStore`], [`index::HeapSignatureIndex`],
//! [`accumulator::HeapAccumulator`], [`enumerator::HeapPathBuffer`]) for
//! hosts with a runtime allocator, and a static-pool regime
//! ([`store::StaticWordStore`], [`index::StaticSignatureIndex`],
//! [`accumulator::StaticAccumulator`], [`enumerator::StaticPathBuffer`])
//! of compile-time sized arrays for targets with none. Both regimes are
//! driven by the same [`enumerator::find_longest`] function.

pub mod accumulator;
pub mod config;
pub mod enumerator;
pub mod error;
pub mod index;
pub mod render;
pub mod signature;
pub mod store;

/// A dense, non-negative id assigned by a word store at insertion time
/// (spec.md §3). Stable for the lifetime of the store that assigned it;
/// duplicate words receive distinct ids.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct WordId(u32);

impl WordId {
    /// Wraps a raw index as a `WordId`. Exposed so the store and index
    /// modules can construct ids without a public constructor that lets
    /// arbitrary callers forge ids unrelated to any store.
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// The raw index this id wraps, for use as an array/Vec index.
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The raw id value.
    pub const fn raw(self) -> u32 {
        self.0
    }
}
