//! Ordered, capacity-bounded set of resident cache keys.
//!
//! The simulated cache is an ordered sequence whose meaning depends on the
//! policy driving it (recency for LRU/MRU, insertion order for FIFO/LIFO,
//! arrival order for LFU tie-breaking). `ResidentSet` keeps that order in a
//! `Vec<K>` and pairs it with a hash index so membership tests do not scan.
//!
//! ## Architecture
//!
//! ```text
//!   index: FxHashSet<K>            order: Vec<K>
//!   ┌─────────┐                    front                          back
//!   │  key A  │                    ┌──────┬──────┬──────┬──────┐
//!   │  key B  │                    │  A   │  B   │  C   │  D   │
//!   │  key C  │                    └──────┴──────┴──────┴──────┘
//!   │  key D  │                     pos 0                 pos len-1
//!   └─────────┘
//! ```
//!
//! ## Behavior
//! - `push_back(k)`: appends a key that is not yet resident
//! - `remove_at(i)` / `remove(k)`: removes by position or by value
//! - `move_to_back(k)`: re-appends an existing key, preserving everyone else's order
//!
//! ## Performance
//! - `contains`: O(1) average
//! - `push_back`: O(1) amortized
//! - `remove_at` / `remove` / `move_to_back` / `position`: O(capacity)
//!
//! Capacity is small in every simulation this crate targets, so the linear
//! shifts are kept in exchange for a snapshot that is a plain slice copy.
use std::hash::Hash;

use rustc_hash::FxHashSet;

/// Ordered, duplicate-free sequence of keys with a fixed capacity.
#[derive(Debug, Clone)]
pub struct ResidentSet<K> {
    order: Vec<K>,
    index: FxHashSet<K>,
    capacity: usize,
}

impl<K> ResidentSet<K> {
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Returns `true` once no more keys can be admitted without an eviction.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.order.len() >= self.capacity
    }

    /// Resident keys from front (position 0) to back.
    #[inline]
    pub fn as_slice(&self) -> &[K] {
        &self.order
    }

    pub fn iter(&self) -> std::slice::Iter<'_, K> {
        self.order.iter()
    }

    #[inline]
    pub fn front(&self) -> Option<&K> {
        self.order.first()
    }

    #[inline]
    pub fn back(&self) -> Option<&K> {
        self.order.last()
    }
}

impl<K> ResidentSet<K>
where
    K: Clone + Eq + Hash,
{
    /// Creates an empty set that can hold at most `capacity` keys.
    pub fn new(capacity: usize) -> Self {
        Self {
            order: Vec::with_capacity(capacity),
            index: FxHashSet::with_capacity_and_hasher(capacity, Default::default()),
            capacity,
        }
    }

    #[inline]
    pub fn contains(&self, key: &K) -> bool {
        self.index.contains(key)
    }

    /// Position of `key` counted from the front, or `None` if not resident.
    pub fn position(&self, key: &K) -> Option<usize> {
        if !self.index.contains(key) {
            return None;
        }
        self.order.iter().position(|k| k == key)
    }

    /// Appends `key` at the back.
    ///
    /// Returns `false` without modifying the set if the key is already
    /// resident or the set is full.
    pub fn push_back(&mut self, key: K) -> bool {
        if self.is_full() || self.index.contains(&key) {
            return false;
        }
        self.index.insert(key.clone());
        self.order.push(key);
        true
    }

    /// Removes and returns the key at `pos`, shifting later keys forward.
    pub fn remove_at(&mut self, pos: usize) -> Option<K> {
        if pos >= self.order.len() {
            return None;
        }
        let key = self.order.remove(pos);
        self.index.remove(&key);
        Some(key)
    }

    /// Removes `key` and returns the position it occupied.
    pub fn remove(&mut self, key: &K) -> Option<usize> {
        let pos = self.position(key)?;
        self.remove_at(pos);
        Some(pos)
    }

    pub fn pop_front(&mut self) -> Option<K> {
        self.remove_at(0)
    }

    pub fn pop_back(&mut self) -> Option<K> {
        let key = self.order.pop()?;
        self.index.remove(&key);
        Some(key)
    }

    /// Moves a resident key to the back; returns `false` if it is not resident.
    pub fn move_to_back(&mut self, key: &K) -> bool {
        match self.position(key) {
            Some(pos) => {
                let k = self.order.remove(pos);
                self.order.push(k);
                true
            },
            None => false,
        }
    }

    /// Copies the current contents, front to back.
    #[inline]
    pub fn snapshot(&self) -> Vec<K> {
        self.order.clone()
    }

    pub fn clear(&mut self) {
        self.order.clear();
        self.index.clear();
    }

    #[cfg(any(test, debug_assertions))]
    pub fn debug_validate_invariants(&self) {
        assert_eq!(self.order.len(), self.index.len(), "order/index size mismatch");
        assert!(self.order.len() <= self.capacity, "over capacity");
        for key in &self.order {
            assert!(self.index.contains(key), "ordered key missing from index");
        }
    }
}

impl<'a, K> IntoIterator for &'a ResidentSet<K> {
    type Item = &'a K;
    type IntoIter = std::slice::Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.order.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(capacity: usize, keys: &[u32]) -> ResidentSet<u32> {
        let mut set = ResidentSet::new(capacity);
        for &k in keys {
            assert!(set.push_back(k));
        }
        set
    }

    #[test]
    fn push_back_keeps_arrival_order() {
        let set = filled(3, &[7, 8, 9]);
        assert_eq!(set.as_slice(), &[7, 8, 9]);
        assert_eq!(set.front(), Some(&7));
        assert_eq!(set.back(), Some(&9));
        assert!(set.is_full());
        set.debug_validate_invariants();
    }

    #[test]
    fn push_back_rejects_duplicates_and_overflow() {
        let mut set = filled(2, &[1, 2]);
        assert!(!set.push_back(1));
        assert!(!set.push_back(3));
        assert_eq!(set.as_slice(), &[1, 2]);

        set.pop_front();
        assert!(!set.push_back(2));
        assert!(set.push_back(3));
        assert_eq!(set.as_slice(), &[2, 3]);
    }

    #[test]
    fn remove_by_value_reports_position() {
        let mut set = filled(4, &[1, 2, 3, 4]);
        assert_eq!(set.remove(&3), Some(2));
        assert_eq!(set.remove(&3), None);
        assert_eq!(set.as_slice(), &[1, 2, 4]);
        assert!(!set.contains(&3));
        set.debug_validate_invariants();
    }

    #[test]
    fn remove_at_out_of_range_is_none() {
        let mut set = filled(2, &[1]);
        assert_eq!(set.remove_at(1), None);
        assert_eq!(set.remove_at(0), Some(1));
        assert!(set.is_empty());
    }

    #[test]
    fn move_to_back_reorders_only_target() {
        let mut set = filled(4, &[1, 2, 3, 4]);
        assert!(set.move_to_back(&2));
        assert_eq!(set.as_slice(), &[1, 3, 4, 2]);
        assert!(!set.move_to_back(&9));
        assert_eq!(set.as_slice(), &[1, 3, 4, 2]);
    }

    #[test]
    fn pop_front_and_back() {
        let mut set = filled(3, &[1, 2, 3]);
        assert_eq!(set.pop_front(), Some(1));
        assert_eq!(set.pop_back(), Some(3));
        assert_eq!(set.as_slice(), &[2]);
        assert!(!set.contains(&1));
        assert!(!set.contains(&3));
    }

    #[test]
    fn snapshot_is_detached_copy() {
        let mut set = filled(3, &[1, 2]);
        let snap = set.snapshot();
        set.push_back(3);
        assert_eq!(snap, vec![1, 2]);
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn clear_resets_state() {
        let mut set = filled(2, &[1, 2]);
        set.clear();
        assert!(set.is_empty());
        assert!(!set.contains(&1));
        assert_eq!(set.capacity(), 2);
    }
}
