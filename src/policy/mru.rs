//! MRU (Most Recently Used) replacement policy.
//!
//! Keeps the same recency order as LRU (accessed keys move to the back) but
//! evicts from the other end: on a miss at capacity the back key, the one
//! touched most recently *before* this access, is dropped. The victim is
//! chosen before the incoming key is appended, so the new key is never its
//! own victim.
//!
//! ## Architecture
//!
//! ```text
//!   ResidentSet order under MRU
//!   ═══════════════════════════════════════════════════════════════════════
//!
//!     front (LRU - keep)                back (MRU - EVICT FROM HERE)
//!     ┌──────┬──────┐
//!     │  1   │  2   │                   after accesses 1, 2
//!     └──────┴──────┘
//!
//!   access 3 (miss, full):  evict back (2), append 3   →  [1, 3]
//!   access 1 (hit):         move 1 to back             →  [3, 1]
//!   access 4 (miss, full):  evict back (1), append 4   →  [3, 4]
//! ```
//!
//! ## Use Cases
//!
//! - Cyclic scans larger than the cache, where the key just used is the one
//!   needed furthest in the future
//! - Demonstrating the worst case for LRU on looping workloads
//!
//! ## Example Usage
//!
//! ```
//! use cachesim::policy::mru::MruPolicy;
//! use cachesim::simulator::CacheSimulator;
//!
//! let sim = CacheSimulator::new(2, vec![1, 2, 3]).unwrap();
//! let trace = sim.run_with(&MruPolicy);
//!
//! assert_eq!(trace[2].cache_after(), &[1, 3]);
//! ```

use crate::ds::ResidentSet;
use crate::traits::{Access, ReplacementPolicy};
use std::hash::Hash;

/// Evicts the most recently touched key; hits refresh recency.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MruPolicy;

impl<K> ReplacementPolicy<K> for MruPolicy
where
    K: Clone + Eq + Hash,
{
    fn name(&self) -> &'static str {
        "MRU"
    }

    #[inline]
    fn on_hit(&self, cache: &mut ResidentSet<K>, access: &Access<'_, K>) {
        cache.move_to_back(access.key);
    }

    #[inline]
    fn select_victim(&self, cache: &ResidentSet<K>, _access: &Access<'_, K>) -> Option<usize> {
        cache.len().checked_sub(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulator::CacheSimulator;

    fn mru(capacity: usize, seq: &[u32]) -> crate::trace::Trace<u32> {
        CacheSimulator::new(capacity, seq.to_vec())
            .unwrap()
            .run_with(&MruPolicy)
    }

    #[test]
    fn evicts_previous_most_recent_not_incoming() {
        let trace = mru(2, &[1, 2, 3]);
        assert_eq!(trace[2].cache_before(), &[1, 2]);
        assert_eq!(trace[2].cache_after(), &[1, 3]);
        assert_eq!(trace[2].evicted(), vec![&2]);
    }

    #[test]
    fn hit_moves_key_to_back_and_becomes_next_victim() {
        let trace = mru(2, &[1, 2, 3, 1, 4]);
        assert!(trace[3].hit());
        assert_eq!(trace[3].cache_after(), &[3, 1]);
        assert_eq!(trace[4].cache_after(), &[3, 4]);
        assert_eq!(trace[4].evicted(), vec![&1]);
    }

    #[test]
    fn accessed_key_always_last() {
        let trace = mru(3, &[5, 1, 2, 5, 3, 4, 1, 1, 2]);
        for step in &trace {
            assert_eq!(step.cache_after().last(), Some(step.key()));
        }
    }

    #[test]
    fn cyclic_scan_beats_lru() {
        // Loop of 4 keys over a 3-slot cache: LRU never hits.
        let seq: Vec<u32> = (0..3).flat_map(|_| 1..=4).collect();
        let sim = CacheSimulator::new(3, seq).unwrap();

        let mru_hits = sim.run_with(&MruPolicy).hits();
        let lru_hits = sim.run_with(&crate::policy::lru::LruPolicy).hits();

        assert_eq!(lru_hits, 0);
        assert_eq!(mru_hits, 6);
    }

    #[test]
    fn empty_cache_has_no_victim() {
        let cache: ResidentSet<u32> = ResidentSet::new(2);
        let freq = crate::ds::FrequencyTable::new();
        let access = Access {
            key: &1,
            step: 0,
            frequencies: &freq,
        };
        assert_eq!(MruPolicy.select_victim(&cache, &access), None);
    }
}
