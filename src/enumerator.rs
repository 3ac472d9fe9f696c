//! Chain enumerator (spec.md §4.D): the depth-first search that drives
//! the signature normalizer and signature index to enumerate successor
//! sets from a starting word, feeding every maximal chain it finds to an
//! [`Accumulator`].
//!
//! Because signatures strictly grow in length with depth, no id can
//! reappear on a single DFS stack — chains cannot cycle, so no visited
//! set is needed. (A reference implementation that keeps one anyway is
//! an acceptable but redundant variant, per spec.md §4.D.)

use tracing::{debug, trace};

use crate::accumulator::Accumulator;
use crate::config::{CANDIDATE_SCRATCH_LEN, PRINTABLE_MAX, PRINTABLE_MIN};
use crate::index::SignatureIndex;
use crate::signature::insert_sorted;
use crate::store::WordStore;
use crate::WordId;

/// The transient per-search path buffer the enumerator mutates as it
/// walks the DFS stack. Two shapes exist so the recursion can be written
/// once and shared by both memory regimes: [`HeapPathBuffer`] grows
/// without an intrinsic cap (the depth cap is still enforced by the
/// caller via `max_chain_depth`), [`StaticPathBuffer`] is backed by a
/// fixed array.
pub trait PathBuffer {
    /// Empties the buffer.
    fn clear(&mut self);
    /// Pushes `id`, returning `false` (and leaving the buffer unchanged)
    /// if it has no room left.
    fn push(&mut self, id: WordId) -> bool;
    /// Pops and returns the last id, if any.
    fn pop(&mut self) -> Option<WordId>;
    /// The ids currently on the stack, root first.
    fn as_slice(&self) -> &[WordId];
    /// The number of ids currently on the stack.
    fn len(&self) -> usize {
        self.as_slice().len()
    }
    /// Whether the stack is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Heap-pool path buffer: a `Vec` with no fixed capacity of its own.
#[derive(Debug, Default)]
pub struct HeapPathBuffer(Vec<WordId>);

impl HeapPathBuffer {
    /// Creates an empty path buffer.
    pub fn new() -> Self {
        Self(Vec::new())
    }
}

impl PathBuffer for HeapPathBuffer {
    fn clear(&mut self) {
        self.0.clear();
    }

    fn push(&mut self, id: WordId) -> bool {
        self.0.push(id);
        true
    }

    fn pop(&mut self) -> Option<WordId> {
        self.0.pop()
    }

    fn as_slice(&self) -> &[WordId] {
        &self.0
    }
}

/// Static-pool path buffer: a fixed `MAX_CHAIN_DEPTH`-sized array.
#[derive(Debug)]
pub struct StaticPathBuffer<const MAX_CHAIN_DEPTH: usize> {
    buf: [WordId; MAX_CHAIN_DEPTH],
    len: usize,
}

impl<const MAX_CHAIN_DEPTH: usize> StaticPathBuffer<MAX_CHAIN_DEPTH> {
    /// Creates an empty path buffer.
    pub fn new() -> Self {
        Self {
            buf: [WordId::new(0); MAX_CHAIN_DEPTH],
            len: 0,
        }
    }
}

impl<const MAX_CHAIN_DEPTH: usize> Default for StaticPathBuffer<MAX_CHAIN_DEPTH> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const MAX_CHAIN_DEPTH: usize> PathBuffer for StaticPathBuffer<MAX_CHAIN_DEPTH> {
    fn clear(&mut self) {
        self.len = 0;
    }

    fn push(&mut self, id: WordId) -> bool {
        if self.len == MAX_CHAIN_DEPTH {
            return false;
        }
        self.buf[self.len] = id;
        self.len += 1;
        true
    }

    fn pop(&mut self) -> Option<WordId> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        Some(self.buf[self.len])
    }

    fn as_slice(&self) -> &[WordId] {
        &self.buf[..self.len]
    }
}

/// Runs the depth-first search of spec.md §4.D: resolves `start_word` in
/// `store`, then recursively extends it one printable-ASCII byte at a
/// time, emitting every maximal chain into `acc`. Resets `acc` and
/// `path` first, so repeated calls with identical inputs and an
/// identical `store`/`index` produce identical results (spec.md §8,
/// "result independence").
///
/// A missing start word is not an error: `acc` simply ends up empty.
pub fn find_longest<S, Idx, P, A>(
    store: &S,
    index: &Idx,
    start_word: &[u8],
    max_chain_depth: usize,
    path: &mut P,
    acc: &mut A,
) where
    S: WordStore,
    Idx: SignatureIndex<S>,
    P: PathBuffer,
    A: Accumulator,
{
    acc.reset();
    path.clear();

    let Some(start_id) = store.find_id(start_word) else {
        return;
    };
    if !path.push(start_id) {
        // MAX_CHAIN_DEPTH == 0 is a degenerate configuration; nothing to do.
        return;
    }

    recurse(store, index, path, max_chain_depth, acc);
}

fn recurse<S, Idx, P, A>(store: &S, index: &Idx, path: &mut P, max_chain_depth: usize, acc: &mut A)
where
    S: WordStore,
    Idx: SignatureIndex<S>,
    P: PathBuffer,
    A: Accumulator,
{
    let depth = path.len();
    let mut found_successor = false;

    if depth < max_chain_depth {
        let current_id = *path
            .as_slice()
            .last()
            .expect("recurse is only called with a non-empty path");
        if let Some(sig) = store.signature(current_id) {
            let mut candidate_buf = [0u8; CANDIDATE_SCRATCH_LEN];
            for c in PRINTABLE_MIN..=PRINTABLE_MAX {
                let Some(candidate_len) = insert_sorted(sig, c, &mut candidate_buf) else {
                    continue;
                };
                let candidate = &candidate_buf[..candidate_len];
                let Some(ids) = index.find(store, candidate) else {
                    trace!(depth, byte = c, "discarded candidate: no dictionary entry");
                    continue;
                };
                // `ids` borrows from `index`, which is immutable here, so
                // iterating it while mutating `path`/`acc` (disjoint
                // objects) is fine.
                for i in 0..ids.len() {
                    let j = ids[i];
                    if path.push(j) {
                        found_successor = true;
                        recurse(store, index, path, max_chain_depth, acc);
                        path.pop();
                    }
                }
            }
        }
    }
    // else: MAX_CHAIN_DEPTH reached. Recursing past it is a silent no-op;
    // the current chain is emitted as a leaf below (spec.md §4.D, §9).

    if !found_successor {
        debug!(depth, path = ?path.as_slice(), "emitted candidate chain");
        acc.emit(path.as_slice());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accumulator::HeapAccumulator;
    use crate::index::{HeapSignatureIndex, SignatureIndex};
    use crate::store::{HeapWordStore, WordStore};

    fn build(words: &[&[u8]]) -> (HeapWordStore, HeapSignatureIndex) {
        let mut store = HeapWordStore::create(words.len());
        for w in words {
            store.add(w).unwrap();
        }
        let index = HeapSignatureIndex::build(&store).unwrap();
        (store, index)
    }

    fn ids_to_words<'a>(store: &'a HeapWordStore, chain: &[WordId]) -> Vec<&'a [u8]> {
        chain.iter().map(|&id| store.word(id).unwrap()).collect()
    }

    #[test]
    fn s1_single_longest_chain() {
        let words: Vec<&[u8]> = vec![
            b"abcdg", b"abcd", b"abcdgh", b"abcek", b"abck", b"abc", b"abcdp", b"abcdghi",
            b"bafced", b"akjpqwmn", b"abcelk", b"baclekt",
        ];
        let (store, index) = build(&words);
        let mut path = HeapPathBuffer::new();
        let mut acc = HeapAccumulator::new(100);

        find_longest(&store, &index, b"abck", 256, &mut path, &mut acc);

        assert_eq!(acc.max_length(), 4);
        assert_eq!(acc.chains().len(), 1);
        let rendered: Vec<&[u8]> = ids_to_words(&store, &acc.chains()[0]);
        assert_eq!(rendered, vec![b"abck".as_slice(), b"abcek", b"abcelk", b"baclekt"]);
    }

    #[test]
    fn s2_missing_start_word_is_empty() {
        let words: Vec<&[u8]> = vec![b"abcdg", b"abcd"];
        let (store, index) = build(&words);
        let mut path = HeapPathBuffer::new();
        let mut acc = HeapAccumulator::new(100);

        find_longest(&store, &index, b"xyz", 256, &mut path, &mut acc);

        assert_eq!(acc.max_length(), 0);
        assert!(acc.chains().is_empty());
    }

    #[test]
    fn s3_linear_chain() {
        let words: Vec<&[u8]> = vec![b"a", b"ab", b"abc", b"abcd", b"abcde"];
        let (store, index) = build(&words);
        let mut path = HeapPathBuffer::new();
        let mut acc = HeapAccumulator::new(100);

        find_longest(&store, &index, b"a", 256, &mut path, &mut acc);

        assert_eq!(acc.max_length(), 5);
        assert_eq!(acc.chains().len(), 1);
    }

    #[test]
    fn s4_anagram_chain() {
        let words: Vec<&[u8]> = vec![b"sail", b"nails", b"aliens", b"salines"];
        let (store, index) = build(&words);
        let mut path = HeapPathBuffer::new();
        let mut acc = HeapAccumulator::new(100);

        find_longest(&store, &index, b"sail", 256, &mut path, &mut acc);

        assert_eq!(acc.max_length(), 4);
        assert_eq!(acc.chains().len(), 1);
    }

    #[test]
    fn s5_shared_signature_does_not_duplicate_other_starts_chain() {
        let words: Vec<&[u8]> = vec![b"abc", b"cab", b"bac", b"abcd"];
        let (store, index) = build(&words);
        let mut path = HeapPathBuffer::new();
        let mut acc = HeapAccumulator::new(100);

        find_longest(&store, &index, b"abc", 256, &mut path, &mut acc);

        assert_eq!(acc.max_length(), 2);
        assert_eq!(acc.chains().len(), 1);
        let rendered = ids_to_words(&store, &acc.chains()[0]);
        assert_eq!(rendered, vec![b"abc".as_slice(), b"abcd"]);
    }

    #[test]
    fn s6_deterministic_dfs_order() {
        let words: Vec<&[u8]> = vec![b"abc", b"abcd", b"abce", b"abcf"];
        let (store, index) = build(&words);
        let mut path = HeapPathBuffer::new();
        let mut acc = HeapAccumulator::new(100);

        find_longest(&store, &index, b"abc", 256, &mut path, &mut acc);

        assert_eq!(acc.max_length(), 2);
        let rendered: Vec<Vec<&[u8]>> = acc
            .chains()
            .iter()
            .map(|chain| ids_to_words(&store, chain))
            .collect();
        assert_eq!(
            rendered,
            vec![
                vec![b"abc".as_slice(), b"abcd"],
                vec![b"abc".as_slice(), b"abce"],
                vec![b"abc".as_slice(), b"abcf"],
            ]
        );
    }

    #[test]
    fn start_present_with_no_extension_emits_single_leaf_chain() {
        let words: Vec<&[u8]> = vec![b"abc"];
        let (store, index) = build(&words);
        let mut path = HeapPathBuffer::new();
        let mut acc = HeapAccumulator::new(100);

        find_longest(&store, &index, b"abc", 256, &mut path, &mut acc);

        assert_eq!(acc.max_length(), 1);
        assert_eq!(acc.chains().len(), 1);
    }

    #[test]
    fn result_independent_of_insertion_order() {
        let forward: Vec<&[u8]> = vec![b"abck", b"abcek", b"baclekt", b"abcd"];
        let mut reversed = forward.clone();
        reversed.reverse();

        let (store_a, index_a) = build(&forward);
        let (store_b, index_b) = build(&reversed);

        let mut path = HeapPathBuffer::new();
        let mut acc_a = HeapAccumulator::new(100);
        find_longest(&store_a, &index_a, b"abck", 256, &mut path, &mut acc_a);

        let mut acc_b = HeapAccumulator::new(100);
        find_longest(&store_b, &index_b, b"abck", 256, &mut path, &mut acc_b);

        assert_eq!(acc_a.max_length(), acc_b.max_length());
        let mut words_a: Vec<Vec<&[u8]>> = acc_a
            .chains()
            .iter()
            .map(|c| ids_to_words(&store_a, c))
            .collect();
        let mut words_b: Vec<Vec<&[u8]>> = acc_b
            .chains()
            .iter()
            .map(|c| ids_to_words(&store_b, c))
            .collect();
        words_a.sort();
        words_b.sort();
        assert_eq!(words_a, words_b);
    }

    #[test]
    fn repeated_invocations_are_deterministic() {
        let words: Vec<&[u8]> = vec![b"abc", b"abcd", b"abce", b"abcf"];
        let (store, index) = build(&words);
        let mut path = HeapPathBuffer::new();

        let mut acc1 = HeapAccumulator::new(100);
        find_longest(&store, &index, b"abc", 256, &mut path, &mut acc1);
        let mut acc2 = HeapAccumulator::new(100);
        find_longest(&store, &index, b"abc", 256, &mut path, &mut acc2);

        assert_eq!(acc1.chains(), acc2.chains());
    }

    #[test]
    fn recursion_depth_cap_truncates_as_a_silent_leaf() {
        let words: Vec<&[u8]> = vec![b"a", b"ab", b"abc", b"abcd", b"abcde"];
        let (store, index) = build(&words);
        let mut path = HeapPathBuffer::new();
        let mut acc = HeapAccumulator::new(100);

        find_longest(&store, &index, b"a", 3, &mut path, &mut acc);

        // Without the cap the true longest chain has length 5; capped at
        // depth 3, the search must not observe or report that length.
        assert_eq!(acc.max_length(), 3);
    }

    #[test]
    fn empty_store_yields_empty_result() {
        let store = HeapWordStore::create(0);
        let index = HeapSignatureIndex::build(&store).unwrap();
        let mut path = HeapPathBuffer::new();
        let mut acc = HeapAccumulator::new(100);

        find_longest(&store, &index, b"anything", 256, &mut path, &mut acc);

        assert_eq!(acc.max_length(), 0);
    }

    #[test]
    fn stable_across_heap_and_static_regimes() {
        use crate::accumulator::StaticAccumulator;
        use crate::index::StaticSignatureIndex;
        use crate::store::StaticWordStore;

        let words: Vec<&[u8]> = vec![b"abck", b"abcek", b"abcelk", b"baclekt", b"abcd"];

        let (heap_store, heap_index) = build(&words);
        let mut heap_path = HeapPathBuffer::new();
        let mut heap_acc = HeapAccumulator::new(100);
        find_longest(&heap_store, &heap_index, b"abck", 256, &mut heap_path, &mut heap_acc);

        let mut static_store: StaticWordStore<8, 16> = StaticWordStore::create(0);
        for w in &words {
            static_store.add(w).unwrap();
        }
        let static_index: StaticSignatureIndex<32, 8, 8> =
            SignatureIndex::build(&static_store).unwrap();
        let mut static_path: StaticPathBuffer<16> = StaticPathBuffer::new();
        let mut static_acc: StaticAccumulator<16, 16> = StaticAccumulator::new();
        find_longest(
            &static_store,
            &static_index,
            b"abck",
            16,
            &mut static_path,
            &mut static_acc,
        );

        assert_eq!(heap_acc.max_length(), static_acc.max_length());
        assert_eq!(heap_acc.chains().len(), static_acc.chains().count());
    }
}
