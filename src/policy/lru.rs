//! LRU (Least Recently Used) replacement policy.
//!
//! The cache order is a recency list: every access, hit or miss, leaves the
//! accessed key at the back. The front is therefore the key that has gone
//! longest without being touched, and that is the one evicted.
//!
//! ## Architecture
//!
//! ```text
//!   ResidentSet order under LRU
//!   ═══════════════════════════════════════════════════════════════════════
//!
//!     front (LRU - EVICT FROM HERE)              back (MRU)
//!     ┌──────┬──────┬──────┐
//!     │  3   │  2   │  1   │        after accesses 1, 2, 3, 2, 1
//!     └──────┴──────┴──────┘
//!
//!   access 4 (miss, full):  evict front (3), append 4  →  [2, 1, 4]
//!   access 2 (hit):         move 2 to back             →  [1, 4, 2]
//! ```
//!
//! ## Operations
//!
//! | Event          | Effect                         | Time         |
//! |----------------|--------------------------------|--------------|
//! | hit            | move key to back               | O(capacity)  |
//! | miss, room     | append key                     | O(1)         |
//! | miss, full     | evict front, append key        | O(capacity)  |
//!
//! ## Example Usage
//!
//! ```
//! use cachesim::policy::lru::LruPolicy;
//! use cachesim::simulator::CacheSimulator;
//!
//! let sim = CacheSimulator::new(3, vec![1, 2, 3, 2, 1, 4, 5, 1]).unwrap();
//! let trace = sim.run_with(&LruPolicy);
//!
//! assert_eq!(trace[5].cache_after(), &[2, 1, 4]);
//! assert_eq!(trace[5].evicted(), vec![&3]);
//! ```

use crate::ds::ResidentSet;
use crate::traits::{Access, ReplacementPolicy};
use std::hash::Hash;

/// Evicts the least recently touched key; hits refresh recency.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LruPolicy;

impl<K> ReplacementPolicy<K> for LruPolicy
where
    K: Clone + Eq + Hash,
{
    fn name(&self) -> &'static str {
        "LRU"
    }

    #[inline]
    fn on_hit(&self, cache: &mut ResidentSet<K>, access: &Access<'_, K>) {
        cache.move_to_back(access.key);
    }

    #[inline]
    fn select_victim(&self, cache: &ResidentSet<K>, _access: &Access<'_, K>) -> Option<usize> {
        (!cache.is_empty()).then_some(0)
    }
}
