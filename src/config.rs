//! Build-time configuration surface (spec.md §6 "Configuration surface").
//!
//! Every knob here is a compile-time constant, not a runtime option: the
//! core never reads an environment variable or a config file. The two
//! modules below are the two columns of the spec's configuration table.
//! A deployment picks one column by depending on the matching type aliases
//! in [`crate::store`], [`crate::index`] and [`crate::accumulator`].

/// Scratch buffer length used by the enumerator when splicing a candidate
/// byte into a signature (`insert_sorted`). Sized for the host's
/// `MAX_WORD_LENGTH` plus one inserted byte; shared by both regimes since
/// the embedded word length is always smaller.
pub const CANDIDATE_SCRATCH_LEN: usize = host::MAX_WORD_LENGTH + 1;

/// Lowest byte value a word/signature character may take (space excluded).
pub const PRINTABLE_MIN: u8 = 33;
/// Highest byte value a word/signature character may take (DEL excluded).
pub const PRINTABLE_MAX: u8 = 126;

/// Host (file-backed dictionary, millions of words) deployment defaults.
pub mod host {
    /// Reject tokens longer than this.
    pub const MAX_WORD_LENGTH: usize = 256;
    /// Minimum signature-index bucket count, regardless of `store.count()`.
    pub const HASH_BUCKETS_MIN: usize = 1024;
    /// Recursion depth cut-off for the chain enumerator.
    pub const MAX_CHAIN_DEPTH: usize = 256;
    /// Accumulator cap on the number of longest chains retained.
    pub const MAX_CHAINS: usize = 16_384;
}

/// Embedded (bare-metal, statically sized pools) deployment defaults.
pub mod embedded {
    /// Reject tokens longer than this.
    ///
    /// spec.md's data model section (§3) and its configuration table (§6)
    /// disagree by one byte (31 vs. 32); the table is the authoritative
    /// "knob" definition, and is what this crate follows. See DESIGN.md.
    pub const MAX_WORD_LENGTH: usize = 32;
    /// Fixed power-of-two bucket count for the static signature index.
    pub const HASH_BUCKETS: usize = 64;
    /// Recursion depth cut-off for the chain enumerator.
    pub const MAX_CHAIN_DEPTH: usize = 16;
    /// Accumulator cap on the number of longest chains retained.
    pub const MAX_CHAINS: usize = 8;
    /// Per-signature id-list cap in the static signature index.
    pub const MAX_IDS_PER_SIG: usize = 8;
    /// Maximum number of words the static word store can hold.
    ///
    /// Not named by spec.md's configuration table (which only bounds
    /// per-entry and per-search quantities); sized generously for a
    /// microcontroller-class dictionary. See DESIGN.md.
    pub const MAX_WORDS: usize = 256;
    /// Maximum number of distinct signatures the static index can hold.
    pub const MAX_ENTRIES: usize = MAX_WORDS;
}
