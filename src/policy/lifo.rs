//! LIFO (Last In, First Out) replacement policy.
//!
//! The cache behaves like a stack: on a miss at capacity the most recently
//! inserted key (the back) is popped and the new key pushed in its place.
//! Hits do not reorder anything, so the bottom of the stack, the earliest
//! keys, is never displaced once the cache fills.
//!
//! ## Architecture
//!
//! ```text
//!     bottom (oldest - keep)               top (newest - EVICT FROM HERE)
//!     ┌──────┬──────┬──────┬──────┐
//!     │  A   │  B   │  C   │  D   │
//!     └──────┴──────┴──────┴──────┘
//!
//!   access E (miss, full):  pop D, push E   →  [A, B, C, E]
//!   access A (hit):         no change       →  [A, B, C, E]
//! ```
//!
//! ## Example Usage
//!
//! ```
//! use cachesim::policy::lifo::LifoPolicy;
//! use cachesim::simulator::CacheSimulator;
//!
//! let sim = CacheSimulator::new(2, vec![1, 2, 3]).unwrap();
//! let trace = sim.run_with(&LifoPolicy);
//!
//! assert_eq!(trace.final_cache(), &[1, 3]);
//! ```

use crate::ds::ResidentSet;
use crate::traits::{Access, ReplacementPolicy};

/// Evicts the most recently inserted key; hits are no-ops.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LifoPolicy;

impl<K> ReplacementPolicy<K> for LifoPolicy {
    fn name(&self) -> &'static str {
        "LIFO"
    }

    #[inline]
    fn select_victim(&self, cache: &ResidentSet<K>, _access: &Access<'_, K>) -> Option<usize> {
        cache.len().checked_sub(1)
    }
}
