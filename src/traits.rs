//! # Replacement Policy Trait
//!
//! Every eviction policy in this crate is a small strategy object driven by
//! the shared run loop in [`CacheSimulator`](crate::simulator::CacheSimulator).
//! The loop owns the cache state; a policy only answers two questions:
//!
//! 1. What happens to the cache order when the accessed key is already
//!    resident? ([`ReplacementPolicy::on_hit`])
//! 2. Which resident key leaves when a new key arrives at a full cache?
//!    ([`ReplacementPolicy::select_victim`])
//!
//! ## Architecture
//!
//! ```text
//!   CacheSimulator::run_with(&policy)
//!   ═══════════════════════════════════════════════════════════════════════
//!
//!     for (step, key) in sequence:
//!         frequencies.increment(key)
//!         hit    = cache.contains(key)
//!         before = cache.snapshot()
//!         ┌──────────────────────────────────────────────────────────────┐
//!         │ hit                      → policy.on_hit(cache, access)      │
//!         │ miss, cache has room     → cache.push_back(key)              │
//!         │ miss, cache full         → pos = policy.select_victim(..)    │
//!         │                            cache.remove_at(pos)              │
//!         │                            cache.push_back(key)              │
//!         └──────────────────────────────────────────────────────────────┘
//!         after  = cache.snapshot()
//!         trace.push(StepRecord { key, before, after, hit })
//! ```
//!
//! New keys always enter at the back. Policies differ only in how they treat
//! hits and where they take victims from:
//!
//! | Policy | `select_victim`           | `on_hit`          |
//! |--------|---------------------------|-------------------|
//! | LRU    | front                     | move to back      |
//! | MRU    | back                      | move to back      |
//! | FIFO   | front                     | no-op             |
//! | LFU    | lowest count, first wins  | no-op             |
//! | LIFO   | back                      | no-op             |
//!
//! ## Custom Policies
//!
//! ```
//! use cachesim::ds::ResidentSet;
//! use cachesim::simulator::CacheSimulator;
//! use cachesim::traits::{Access, ReplacementPolicy};
//!
//! /// Always evicts the key in the middle of the cache.
//! struct Middle;
//!
//! impl<K> ReplacementPolicy<K> for Middle {
//!     fn name(&self) -> &'static str {
//!         "MIDDLE"
//!     }
//!
//!     fn select_victim(&self, cache: &ResidentSet<K>, _access: &Access<'_, K>) -> Option<usize> {
//!         (!cache.is_empty()).then(|| cache.len() / 2)
//!     }
//! }
//!
//! let sim = CacheSimulator::new(3, vec![1, 2, 3, 4]).unwrap();
//! let trace = sim.run_with(&Middle);
//! assert_eq!(trace.final_cache(), &[1, 3, 4]);
//! assert_eq!(trace.policy(), "MIDDLE");
//! ```

use crate::ds::{FrequencyTable, ResidentSet};

/// What a policy sees about the access currently being applied.
#[derive(Debug)]
pub struct Access<'a, K> {
    /// The requested key.
    pub key: &'a K,
    /// Zero-based position of this access in the input sequence.
    pub step: usize,
    /// Counts for the whole run so far, already including this access.
    pub frequencies: &'a FrequencyTable<K>,
}

/// Victim selection and hit handling for one eviction policy.
///
/// Implementations hold no per-run state: the cache and frequency table are
/// owned by the run loop and handed in on every call, so one policy value
/// can drive any number of independent runs.
pub trait ReplacementPolicy<K> {
    /// Short upper-case label used in traces and reports.
    fn name(&self) -> &'static str;

    /// Applies a hit to the cache order. The default leaves the cache untouched.
    fn on_hit(&self, cache: &mut ResidentSet<K>, access: &Access<'_, K>) {
        let _ = (cache, access);
    }

    /// Picks the position of the key to evict from a full cache.
    ///
    /// Called only on a miss when the cache is at capacity, before the
    /// incoming key is appended. Returning `None` (or a position past the
    /// end) refuses admission: the incoming key is not inserted and the cache
    /// is left as it was.
    fn select_victim(&self, cache: &ResidentSet<K>, access: &Access<'_, K>) -> Option<usize>;
}

impl<K, P> ReplacementPolicy<K> for &P
where
    P: ReplacementPolicy<K> + ?Sized,
{
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn on_hit(&self, cache: &mut ResidentSet<K>, access: &Access<'_, K>) {
        (**self).on_hit(cache, access)
    }

    fn select_victim(&self, cache: &ResidentSet<K>, access: &Access<'_, K>) -> Option<usize> {
        (**self).select_victim(cache, access)
    }
}

impl<K, P> ReplacementPolicy<K> for Box<P>
where
    P: ReplacementPolicy<K> + ?Sized,
{
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn on_hit(&self, cache: &mut ResidentSet<K>, access: &Access<'_, K>) {
        (**self).on_hit(cache, access)
    }

    fn select_victim(&self, cache: &ResidentSet<K>, access: &Access<'_, K>) -> Option<usize> {
        (**self).select_victim(cache, access)
    }
}
