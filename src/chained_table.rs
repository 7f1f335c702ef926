//! ChainedTable: fixed-size separate-chaining hash table.
//!
//! Entries live in a generational arena; each bucket holds the arena key of
//! its chain head and each entry links to the next one. Inserts prepend, so
//! a chain is ordered newest first and a lookup returns the most recent
//! matching entry. The bucket count never changes.

use crate::key_ops::{KeyOps, StringOps};
use core::borrow::Borrow;
use core::fmt;
use core::num::NonZeroUsize;
use slotmap::{DefaultKey, SlotMap};

#[derive(Debug)]
struct Entry<K, V> {
    key: K,
    value: V,
    next: Option<DefaultKey>,
}

pub struct ChainedTable<K, V, O = StringOps> {
    ops: O,
    buckets: Box<[Option<DefaultKey>]>, // chain heads
    entries: SlotMap<DefaultKey, Entry<K, V>>,
}

impl<K, V, O> ChainedTable<K, V, O> {
    /// Allocate `bucket_count` empty buckets.
    pub fn with_buckets(bucket_count: NonZeroUsize, ops: O) -> Self {
        Self {
            ops,
            buckets: vec![None; bucket_count.get()].into_boxed_slice(),
            entries: SlotMap::with_key(),
        }
    }

    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries per bucket.
    pub fn load_factor(&self) -> f64 {
        self.len() as f64 / self.bucket_count() as f64
    }

    #[inline]
    fn index_for(&self, hash: u64) -> usize {
        // The remainder is < bucket_count, which itself fits in usize.
        (hash % self.buckets.len() as u64) as usize
    }

    /// Number of entries chained in `bucket`; zero for an out-of-range index.
    pub fn chain_len(&self, bucket: usize) -> usize {
        self.chain(bucket).count()
    }

    /// Entries of one bucket, newest first.
    pub fn chain(&self, bucket: usize) -> Chain<'_, K, V> {
        Chain {
            entries: &self.entries,
            cursor: self.buckets.get(bucket).copied().flatten(),
        }
    }

    /// All entries in bucket order, each chain newest first.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            entries: &self.entries,
            heads: self.buckets.iter(),
            chain: None,
        }
    }
}

impl<K, V, O> ChainedTable<K, V, O>
where
    O: KeyOps<K>,
{
    /// Prepend `(key, value)` to the chain of `ops.hash(key) mod bucket_count`.
    /// An existing equal key is left in place and shadowed.
    pub fn insert(&mut self, key: K, value: V) {
        let hash = self.ops.hash(&key);
        let idx = self.index_for(hash);
        let next = self.buckets[idx];
        let k = self.entries.insert(Entry { key, value, next });
        self.buckets[idx] = Some(k);
    }
}

impl<K, V, O> ChainedTable<K, V, O> {
    /// Bucket index that `q` hashes to.
    pub fn bucket_of<Q>(&self, q: &Q) -> usize
    where
        Q: ?Sized,
        O: KeyOps<Q>,
    {
        self.index_for(self.ops.hash(q))
    }

    /// Value of the most recently inserted entry whose key equals `q`.
    ///
    /// Only `q`'s bucket is scanned, and every entry in it is compared with
    /// `ops.equals`; an entry whose own hash differs but that shares the
    /// bucket and compares equal is a match.
    pub fn find<Q>(&self, q: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized,
        O: KeyOps<Q>,
    {
        self.find_all(q).next()
    }

    pub fn contains<Q>(&self, q: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized,
        O: KeyOps<Q>,
    {
        self.find(q).is_some()
    }

    /// Values of every entry whose key equals `q`, newest first.
    pub fn find_all<'a, 'q, Q>(&'a self, q: &'q Q) -> Matches<'a, 'q, K, V, O, Q>
    where
        K: Borrow<Q>,
        Q: ?Sized,
        O: KeyOps<Q>,
    {
        Matches {
            ops: &self.ops,
            query: q,
            entries: &self.entries,
            cursor: self.buckets[self.bucket_of(q)],
        }
    }
}

impl<K, V, O> fmt::Debug for ChainedTable<K, V, O>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChainedTable")
            .field("bucket_count", &self.bucket_count())
            .field("len", &self.len())
            .finish_non_exhaustive()
    }
}

/// Iterator over one bucket's chain.
pub struct Chain<'a, K, V> {
    entries: &'a SlotMap<DefaultKey, Entry<K, V>>,
    cursor: Option<DefaultKey>,
}

impl<'a, K, V> Iterator for Chain<'a, K, V> {
    type Item = (&'a K, &'a V);
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let entries = self.entries;
        let e = entries.get(self.cursor?)?;
        self.cursor = e.next;
        Some((&e.key, &e.value))
    }
}

/// Iterator over the values whose keys equal one query.
pub struct Matches<'a, 'q, K, V, O, Q: ?Sized> {
    ops: &'a O,
    query: &'q Q,
    entries: &'a SlotMap<DefaultKey, Entry<K, V>>,
    cursor: Option<DefaultKey>,
}

impl<'a, 'q, K, V, O, Q> Iterator for Matches<'a, 'q, K, V, O, Q>
where
    K: Borrow<Q>,
    Q: ?Sized,
    O: KeyOps<Q>,
{
    type Item = &'a V;
    fn next(&mut self) -> Option<&'a V> {
        let entries = self.entries;
        while let Some(k) = self.cursor {
            let e = entries.get(k)?;
            self.cursor = e.next;
            if self.ops.equals(self.query, e.key.borrow()) {
                return Some(&e.value);
            }
        }
        None
    }
}

/// Iterator over every entry of a `ChainedTable`.
pub struct Iter<'a, K, V> {
    entries: &'a SlotMap<DefaultKey, Entry<K, V>>,
    heads: core::slice::Iter<'a, Option<DefaultKey>>,
    chain: Option<Chain<'a, K, V>>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);
    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(item) = self.chain.as_mut().and_then(Iterator::next) {
                return Some(item);
            }
            let head = self.heads.next()?;
            self.chain = Some(Chain {
                entries: self.entries,
                cursor: *head,
            });
        }
    }
}
