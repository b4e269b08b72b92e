//! Separately chained hash index: key -> row numbers.
//!
//!   bucket(k) = hash(k) mod B
//!   lookup(k) = [ row | (k', row) in buckets[bucket(k)], k' == k ]

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use thiserror::Error;

pub const DEFAULT_BUCKETS: usize = 200;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IndexError {
    #[error("hash index needs at least one bucket")]
    ZeroBuckets,
}

#[derive(Debug, Clone)]
pub struct HashIndex<K> {
    buckets: Vec<Vec<(K, usize)>>,
    len: usize,
}

impl<K: Hash + Eq> HashIndex<K> {
    pub fn new(bucket_count: usize) -> Result<Self, IndexError> {
        if bucket_count == 0 {
            return Err(IndexError::ZeroBuckets);
        }
        Ok(Self {
            buckets: (0..bucket_count).map(|_| Vec::new()).collect(),
            len: 0,
        })
    }

    /// Index `keys`, numbering rows consecutively from `first_row`.
    pub fn build<I>(&mut self, keys: I, first_row: usize)
    where
        I: IntoIterator<Item = K>,
    {
        for (offset, key) in keys.into_iter().enumerate() {
            self.insert(key, first_row + offset);
        }
        tracing::trace!(entries = self.len, buckets = self.buckets.len(), "hash index built");
    }

    pub fn insert(&mut self, key: K, row: usize) {
        let b = self.bucket_of(&key);
        self.buckets[b].push((key, row));
        self.len += 1;
    }

    /// Rows stored under `key`, in insertion order.
    pub fn lookup(&self, key: &K) -> Vec<usize> {
        self.buckets[self.bucket_of(key)]
            .iter()
            .filter(|(k, _)| k == key)
            .map(|&(_, row)| row)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    fn bucket_of(&self, key: &K) -> usize {
        let mut h = DefaultHasher::new();
        key.hash(&mut h);
        (h.finish() % self.buckets.len() as u64) as usize
    }
}

impl<K: Hash + Eq> Default for HashIndex<K> {
    fn default() -> Self {
        Self {
            buckets: (0..DEFAULT_BUCKETS).map(|_| Vec::new()).collect(),
            len: 0,
        }
    }
}
