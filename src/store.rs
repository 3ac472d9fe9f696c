//! Word store (spec.md §4.B): owns the canonical text of each accepted
//! word plus its signature, and assigns dense integer ids.
//!
//! Two implementations share the [`WordStore`] trait: [`HeapWordStore`]
//! (growable arenas, for the host) and [`StaticWordStore`] (compile-time
//! sized arrays, for the embedded target). Both are frozen for the
//! lifetime of a [`crate::index::SignatureIndex`] built over them — the
//! state machine in spec.md §4.F disallows going back from `[ready]` to
//! `[loading]`.

use crate::error::StoreError;
use crate::signature::{compute_signature, validate_word, write_signature};
use crate::WordId;

/// The operations every memory regime's word store must provide
/// (spec.md §4.B contract, minus `create`, whose signature differs per
/// regime — the static regime ignores its capacity hint entirely).
pub trait WordStore {
    /// Validates and appends `word`, returning its freshly assigned id.
    fn add(&mut self, word: &[u8]) -> Result<WordId, StoreError>;

    /// Returns the lowest id whose bytes equal `word`, if any.
    fn find_id(&self, word: &[u8]) -> Option<WordId>;

    /// Returns the original bytes stored for `id`, if it is live.
    fn word(&self, id: WordId) -> Option<&[u8]>;

    /// Returns the canonical signature stored for `id`, if it is live.
    fn signature(&self, id: WordId) -> Option<&[u8]>;

    /// The number of live ids (successful `add` calls since `create`).
    fn count(&self) -> usize;
}

/// Heap-pool regime: two byte arenas (words, signatures) that grow
/// geometrically via `Vec`'s doubling strategy, plus id tables holding
/// `(offset, len)` spans into them. Reallocating an arena never
/// invalidates a stored span, since spans are offsets, not pointers.
#[derive(Debug, Default)]
pub struct HeapWordStore {
    word_arena: Vec<u8>,
    word_spans: Vec<(u32, u32)>,
    sig_arena: Vec<u8>,
    sig_spans: Vec<(u32, u32)>,
    max_word_length: usize,
}

impl HeapWordStore {
    /// Assumed average word length used to size the initial arenas from
    /// a word-count hint; deliberately generous, since under-reserving
    /// only costs one extra doubling, not correctness.
    const AVG_WORD_LEN_HINT: usize = 12;

    /// Creates an empty store. `capacity_hint` sizes the pre-allocated
    /// arenas and id tables; it is advisory, not a hard limit.
    pub fn create(capacity_hint: usize) -> Self {
        Self::create_with_max_word_length(capacity_hint, crate::config::host::MAX_WORD_LENGTH)
    }

    /// As [`Self::create`], but with an explicit maximum word length
    /// instead of the host default — mainly useful for tests that want a
    /// tighter bound than 256 bytes.
    pub fn create_with_max_word_length(capacity_hint: usize, max_word_length: usize) -> Self {
        Self {
            word_arena: Vec::with_capacity(capacity_hint * Self::AVG_WORD_LEN_HINT),
            word_spans: Vec::with_capacity(capacity_hint),
            sig_arena: Vec::with_capacity(capacity_hint * Self::AVG_WORD_LEN_HINT),
            sig_spans: Vec::with_capacity(capacity_hint),
            max_word_length,
        }
    }

    /// Bulk insertion entry point: reserves arena and table capacity from
    /// `words`'s size hint before adding each word, so that loading N
    /// words costs O(1) amortized reallocations rather than re-deriving
    /// that guarantee one `add` at a time. Returns the number of words
    /// successfully added; words that fail validation are skipped, not
    /// fatal, matching the dictionary-file loading contract of spec.md §6.
    pub fn add_words<'w, I>(&mut self, words: I) -> usize
    where
        I: IntoIterator<Item = &'w [u8]>,
    {
        let iter = words.into_iter();
        let (lower, _) = iter.size_hint();
        self.word_spans.reserve(lower);
        self.sig_spans.reserve(lower);
        self.word_arena.reserve(lower * Self::AVG_WORD_LEN_HINT);
        self.sig_arena.reserve(lower * Self::AVG_WORD_LEN_HINT);

        let mut added = 0;
        for word in iter {
            if self.add(word).is_ok() {
                added += 1;
            }
        }
        added
    }

    fn span_bytes<'a>(arena: &'a [u8], span: (u32, u32)) -> &'a [u8] {
        let (offset, len) = span;
        &arena[offset as usize..offset as usize + len as usize]
    }
}

impl WordStore for HeapWordStore {
    fn add(&mut self, word: &[u8]) -> Result<WordId, StoreError> {
        validate_word(word, self.max_word_length)?;

        let word_offset = self.word_arena.len() as u32;
        self.word_arena.extend_from_slice(word);
        self.word_spans
            .push((word_offset, word.len() as u32));

        let sig_offset = self.sig_arena.len() as u32;
        let sig = compute_signature(word);
        self.sig_arena.extend_from_slice(&sig);
        self.sig_spans.push((sig_offset, sig.len() as u32));

        Ok(WordId::new((self.word_spans.len() - 1) as u32))
    }

    fn find_id(&self, word: &[u8]) -> Option<WordId> {
        self.word_spans
            .iter()
            .position(|&span| Self::span_bytes(&self.word_arena, span) == word)
            .map(|idx| WordId::new(idx as u32))
    }

    fn word(&self, id: WordId) -> Option<&[u8]> {
        self.word_spans
            .get(id.index())
            .map(|&span| Self::span_bytes(&self.word_arena, span))
    }

    fn signature(&self, id: WordId) -> Option<&[u8]> {
        self.sig_spans
            .get(id.index())
            .map(|&span| Self::span_bytes(&self.sig_arena, span))
    }

    fn count(&self) -> usize {
        self.word_spans.len()
    }
}

/// Static-pool regime: two-dimensional compile-time arrays sized
/// `(MAX_WORDS x MAX_WORD_LEN)`, for targets with no runtime allocator.
/// An `add` past either bound fails with [`StoreError::PoolFull`] and
/// leaves the store unchanged (no partial insert).
#[derive(Debug)]
pub struct StaticWordStore<const MAX_WORDS: usize, const MAX_WORD_LEN: usize> {
    words: [[u8; MAX_WORD_LEN]; MAX_WORDS],
    word_lens: [u16; MAX_WORDS],
    sigs: [[u8; MAX_WORD_LEN]; MAX_WORDS],
    count: usize,
}

impl<const MAX_WORDS: usize, const MAX_WORD_LEN: usize> StaticWordStore<MAX_WORDS, MAX_WORD_LEN> {
    /// Creates an empty store. `_capacity_hint` is ignored: the static
    /// regime's bounds are fixed at compile time (spec.md §4.B).
    pub fn create(_capacity_hint: usize) -> Self {
        Self {
            words: [[0u8; MAX_WORD_LEN]; MAX_WORDS],
            word_lens: [0u16; MAX_WORDS],
            sigs: [[0u8; MAX_WORD_LEN]; MAX_WORDS],
            count: 0,
        }
    }
}

impl<const MAX_WORDS: usize, const MAX_WORD_LEN: usize> Default
    for StaticWordStore<MAX_WORDS, MAX_WORD_LEN>
{
    fn default() -> Self {
        Self::create(0)
    }
}

impl<const MAX_WORDS: usize, const MAX_WORD_LEN: usize> WordStore
    for StaticWordStore<MAX_WORDS, MAX_WORD_LEN>
{
    fn add(&mut self, word: &[u8]) -> Result<WordId, StoreError> {
        validate_word(word, MAX_WORD_LEN)?;
        if self.count == MAX_WORDS {
            return Err(StoreError::PoolFull);
        }

        let id = self.count;
        self.words[id][..word.len()].copy_from_slice(word);
        self.word_lens[id] = word.len() as u16;
        write_signature(word, &mut self.sigs[id][..word.len()]);
        self.count += 1;

        Ok(WordId::new(id as u32))
    }

    fn find_id(&self, word: &[u8]) -> Option<WordId> {
        (0..self.count)
            .find(|&i| &self.words[i][..self.word_lens[i] as usize] == word)
            .map(|i| WordId::new(i as u32))
    }

    fn word(&self, id: WordId) -> Option<&[u8]> {
        let i = id.index();
        if i >= self.count {
            return None;
        }
        Some(&self.words[i][..self.word_lens[i] as usize])
    }

    fn signature(&self, id: WordId) -> Option<&[u8]> {
        let i = id.index();
        if i >= self.count {
            return None;
        }
        Some(&self.sigs[i][..self.word_lens[i] as usize])
    }

    fn count(&self) -> usize {
        self.count
    }
}

/// Convenience alias for a [`StaticWordStore`] sized from
/// [`crate::config::embedded`]'s constants.
pub type EmbeddedWordStore = StaticWordStore<
    { crate::config::embedded::MAX_WORDS },
    { crate::config::embedded::MAX_WORD_LENGTH },
>;
