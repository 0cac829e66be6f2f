//! LFU (Least Frequently Used) replacement policy.
//!
//! On a miss at capacity, the resident key with the lowest access count is
//! evicted. Counts come from the run's [`FrequencyTable`], which is updated on
//! every access before the policy is consulted and is never reset when a key
//! leaves the cache. A key that returns after eviction therefore carries its
//! whole history with it.
//!
//! Hits do not reorder the cache. The cache order is arrival order, and it
//! breaks ties: among keys sharing the minimum count, the one nearest the
//! front goes first.
//!
//! ## Architecture
//!
//! ```text
//!   Victim scan (capacity 3)
//!   ═══════════════════════════════════════════════════════════════════════
//!
//!     cache:       ┌──────┬──────┬──────┐
//!                  │  A   │  B   │  C   │
//!                  └──────┴──────┴──────┘
//!     frequency:      3      1      1
//!                            ▲
//!                            └── lowest count, first in order → victim
//!
//!   access D (miss, full):  evict B, append D  →  [A, C, D]
//! ```
//!
//! ## Operations
//!
//! | Event          | Effect                                  | Time         |
//! |----------------|-----------------------------------------|--------------|
//! | hit            | none                                    | O(1)         |
//! | miss, room     | append key                              | O(1)         |
//! | miss, full     | scan for min count, evict, append key   | O(capacity)  |
//!
//! ## Example Usage
//!
//! ```
//! use cachesim::policy::lfu::LfuPolicy;
//! use cachesim::simulator::CacheSimulator;
//!
//! let sim = CacheSimulator::new(2, vec![1, 2, 1, 3]).unwrap();
//! let trace = sim.run_with(&LfuPolicy);
//!
//! // 1 was seen twice, 2 once: 2 is evicted.
//! assert_eq!(trace.final_cache(), &[1, 3]);
//! ```
//!
//! [`FrequencyTable`]: crate::ds::FrequencyTable

use crate::ds::ResidentSet;
use crate::traits::{Access, ReplacementPolicy};
use std::hash::Hash;

/// Evicts the resident key with the fewest accesses; hits are no-ops.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LfuPolicy;

impl<K> ReplacementPolicy<K> for LfuPolicy
where
    K: Clone + Eq + Hash,
{
    fn name(&self) -> &'static str {
        "LFU"
    }

    fn select_victim(&self, cache: &ResidentSet<K>, access: &Access<'_, K>) -> Option<usize> {
        let mut victim: Option<(usize, u64)> = None;
        for (pos, key) in cache.iter().enumerate() {
            let count = access.frequencies.get(key);
            match victim {
                Some((_, best)) if best <= count => {},
                _ => victim = Some((pos, count)),
            }
        }
        victim.map(|(pos, _)| pos)
    }
}
