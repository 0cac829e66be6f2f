//! FIFO (First In, First Out) replacement policy.
//!
//! The cache order is insertion order. Hits do not touch it; on a miss at
//! capacity the front key, the earliest admitted one still resident, is
//! evicted and the new key joins at the back.
//!
//! ## Architecture
//!
//! ```text
//!     front (oldest - EVICT FROM HERE)          back (newest)
//!     ┌──────┬──────┬──────┐
//!     │  A   │  B   │  C   │
//!     └──────┴──────┴──────┘
//!
//!   access B (hit):         no change                  →  [A, B, C]
//!   access D (miss, full):  evict front (A), append D  →  [B, C, D]
//! ```
//!
//! FIFO ignores how often and how recently keys are used, so hot keys get
//! evicted as soon as they reach the front of the queue.
//!
//! ## Example Usage
//!
//! ```
//! use cachesim::policy::fifo::FifoPolicy;
//! use cachesim::simulator::CacheSimulator;
//!
//! let sim = CacheSimulator::new(2, vec![1, 2, 3]).unwrap();
//! let trace = sim.run_with(&FifoPolicy);
//!
//! assert_eq!(trace.final_cache(), &[2, 3]);
//! ```

use crate::ds::ResidentSet;
use crate::traits::{Access, ReplacementPolicy};

/// Evicts the earliest admitted key; hits are no-ops.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FifoPolicy;

impl<K> ReplacementPolicy<K> for FifoPolicy {
    fn name(&self) -> &'static str {
        "FIFO"
    }

    #[inline]
    fn select_victim(&self, cache: &ResidentSet<K>, _access: &Access<'_, K>) -> Option<usize> {
        (!cache.is_empty()).then_some(0)
    }
}
