//! Per-run access counters.
//!
//! Every access increments its key's counter exactly once, hit or miss, and
//! counters are never decremented or reset while a run is in progress. A key
//! that is evicted keeps its count, so if it comes back it is already
//! protected by its earlier history.
//!
//! Only LFU consults the table for victim selection; the run loop maintains it
//! for every policy so custom policies can use it too.
use std::hash::Hash;

use rustc_hash::FxHashMap;

/// Mapping from key to number of accesses seen so far in the current run.
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable<K> {
    counts: FxHashMap<K, u64>,
}

impl<K> FrequencyTable<K>
where
    K: Clone + Eq + Hash,
{
    pub fn new() -> Self {
        Self {
            counts: FxHashMap::default(),
        }
    }

    /// Records one access to `key` and returns its updated count.
    pub fn increment(&mut self, key: &K) -> u64 {
        if let Some(count) = self.counts.get_mut(key) {
            *count += 1;
            return *count;
        }
        self.counts.insert(key.clone(), 1);
        1
    }

    /// Access count for `key`; zero if it has never been accessed.
    #[inline]
    pub fn get(&self, key: &K) -> u64 {
        self.counts.get(key).copied().unwrap_or(0)
    }

    /// Number of distinct keys seen.
    #[inline]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counters, equal to the number of recorded accesses.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, u64)> {
        self.counts.iter().map(|(k, &c)| (k, c))
    }
}
