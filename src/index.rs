//! Signature index (spec.md §4.C): maps signature -> word ids sharing
//! that signature, with O(1) lookup.
//!
//! Both implementations use the id-based-indirection design spec.md §9
//! explicitly endorses as an alternative to borrowing signature bytes
//! from the store: an entry remembers one representative word id and
//! re-derives its signature from the store on lookup, instead of holding
//! a borrowed `&[u8]`. This sidesteps the store/index lifetime question
//! entirely and lets both regimes share the same shape.

use crate::error::IndexError;
use crate::signature::fnv1a;
use crate::store::WordStore;
use crate::WordId;

/// The operations every memory regime's signature index must provide
/// (spec.md §4.C contract).
pub trait SignatureIndex<S: WordStore> {
    /// Builds an index over every currently live id in `store`.
    fn build(store: &S) -> Result<Self, IndexError>
    where
        Self: Sized;

    /// Returns the ids sharing `signature`, if any are indexed.
    fn find(&self, store: &S, signature: &[u8]) -> Option<&[WordId]>;
}

/// Heap-pool regime: a closed-addressing hash table with chaining.
/// Bucket count is `>= store.count()` and `>= HASH_BUCKETS_MIN`
/// (spec.md §4.C); each bucket's chain and each entry's id list grow
/// geometrically via `Vec`.
#[derive(Debug, Default)]
pub struct HeapSignatureIndex {
    buckets: Vec<Vec<HeapEntry>>,
}

#[derive(Debug)]
struct HeapEntry {
    representative: WordId,
    ids: Vec<WordId>,
}

impl HeapSignatureIndex {
    fn bucket_count_for(word_count: usize) -> usize {
        word_count
            .max(crate::config::host::HASH_BUCKETS_MIN)
            .next_power_of_two()
    }

    fn bucket_index(&self, signature: &[u8]) -> usize {
        (fnv1a(signature) % self.buckets.len() as u64) as usize
    }
}

impl<S: WordStore> SignatureIndex<S> for HeapSignatureIndex {
    fn build(store: &S) -> Result<Self, IndexError> {
        let bucket_count = Self::bucket_count_for(store.count());
        let mut index = HeapSignatureIndex {
            buckets: (0..bucket_count).map(|_| Vec::new()).collect(),
        };

        for i in 0..store.count() {
            let id = WordId::new(i as u32);
            let sig = store
                .signature(id)
                .expect("every id below store.count() is live");
            let bucket = index.bucket_index(sig);
            let chain = &mut index.buckets[bucket];

            let existing = chain.iter_mut().find(|entry| {
                store
                    .signature(entry.representative)
                    .expect("representative id is always live")
                    == sig
            });
            match existing {
                Some(entry) => entry.ids.push(id),
                None => chain.push(HeapEntry {
                    representative: id,
                    ids: vec![id],
                }),
            }
        }

        Ok(index)
    }

    fn find(&self, store: &S, signature: &[u8]) -> Option<&[WordId]> {
        let bucket = self.bucket_index(signature);
        self.buckets[bucket]
            .iter()
            .find(|entry| store.signature(entry.representative).unwrap() == signature)
            .map(|entry| entry.ids.as_slice())
    }
}

/// Static-pool regime: a fixed bucket array plus a flat entry pool,
/// chained via indices instead of pointers (the classic no-heap
/// intrusive-linked-list technique). A per-entry id list is capped at
/// `MAX_IDS_PER_SIG`; exceeding it silently drops further ids for that
/// entry, as spec.md §4.C and §9 require.
#[derive(Debug)]
pub struct StaticSignatureIndex<
    const BUCKETS: usize,
    const MAX_ENTRIES: usize,
    const MAX_IDS_PER_SIG: usize,
> {
    bucket_heads: [i32; BUCKETS],
    entries: [StaticEntry<MAX_IDS_PER_SIG>; MAX_ENTRIES],
    entry_count: usize,
}

#[derive(Clone, Copy, Debug)]
struct StaticEntry<const MAX_IDS_PER_SIG: usize> {
    representative: WordId,
    ids: [WordId; MAX_IDS_PER_SIG],
    id_count: u8,
    next: i32,
}

impl<const MAX_IDS_PER_SIG: usize> StaticEntry<MAX_IDS_PER_SIG> {
    const fn empty() -> Self {
        Self {
            representative: WordId::new(0),
            ids: [WordId::new(0); MAX_IDS_PER_SIG],
            id_count: 0,
            next: -1,
        }
    }
}

impl<const BUCKETS: usize, const MAX_ENTRIES: usize, const MAX_IDS_PER_SIG: usize>
    StaticSignatureIndex<BUCKETS, MAX_ENTRIES, MAX_IDS_PER_SIG>
{
    fn bucket_index(signature: &[u8]) -> usize {
        (fnv1a(signature) % BUCKETS as u64) as usize
    }
}

impl<
        const BUCKETS: usize,
        const MAX_ENTRIES: usize,
        const MAX_IDS_PER_SIG: usize,
        S: WordStore,
    > SignatureIndex<S> for StaticSignatureIndex<BUCKETS, MAX_ENTRIES, MAX_IDS_PER_SIG>
{
    fn build(store: &S) -> Result<Self, IndexError> {
        let mut index = StaticSignatureIndex {
            bucket_heads: [-1; BUCKETS],
            entries: [StaticEntry::empty(); MAX_ENTRIES],
            entry_count: 0,
        };

        for i in 0..store.count() {
            let id = WordId::new(i as u32);
            let sig = store
                .signature(id)
                .expect("every id below store.count() is live");
            let bucket = Self::bucket_index(sig);

            let mut cursor = index.bucket_heads[bucket];
            let mut found: Option<usize> = None;
            while cursor >= 0 {
                let idx = cursor as usize;
                if store.signature(index.entries[idx].representative).unwrap() == sig {
                    found = Some(idx);
                    break;
                }
                cursor = index.entries[idx].next;
            }

            match found {
                Some(idx) => {
                    let entry = &mut index.entries[idx];
                    if (entry.id_count as usize) < MAX_IDS_PER_SIG {
                        entry.ids[entry.id_count as usize] = id;
                        entry.id_count += 1;
                    }
                    // else: per-signature cap reached, silent drop (spec.md §4.C).
                }
                None => {
                    if index.entry_count == MAX_ENTRIES {
                        return Err(IndexError::PoolFull);
                    }
                    let idx = index.entry_count;
                    index.entries[idx] = StaticEntry {
                        representative: id,
                        ids: {
                            let mut ids = [WordId::new(0); MAX_IDS_PER_SIG];
                            ids[0] = id;
                            ids
                        },
                        id_count: 1,
                        next: index.bucket_heads[bucket],
                    };
                    index.bucket_heads[bucket] = idx as i32;
                    index.entry_count += 1;
                }
            }
        }

        Ok(index)
    }

    fn find(&self, store: &S, signature: &[u8]) -> Option<&[WordId]> {
        let bucket = Self::bucket_index(signature);
        let mut cursor = self.bucket_heads[bucket];
        while cursor >= 0 {
            let idx = cursor as usize;
            let entry = &self.entries[idx];
            if store.signature(entry.representative).unwrap() == signature {
                return Some(&entry.ids[..entry.id_count as usize]);
            }
            cursor = entry.next;
        }
        None
    }
}

/// Convenience alias for a [`StaticSignatureIndex`] sized from
/// [`crate::config::embedded`]'s constants.
pub type EmbeddedSignatureIndex = StaticSignatureIndex<
    { crate::config::embedded::HASH_BUCKETS },
    { crate::config::embedded::MAX_ENTRIES },
    { crate::config::embedded::MAX_IDS_PER_SIG },
>;
