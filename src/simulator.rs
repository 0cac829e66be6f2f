//! The shared run loop.
//!
//! [`CacheSimulator`] holds a capacity and an access sequence. Each run
//! operation replays the whole sequence against a fresh, empty cache and a
//! fresh frequency table, delegating the policy-specific decisions to a
//! [`ReplacementPolicy`], and returns the complete [`Trace`].
//!
//! ## Run Loop
//!
//! ```text
//!   for (step, key) in sequence
//!   ═══════════════════════════════════════════════════════════════════════
//!
//!     1. frequencies[key] += 1          counted before any eviction decision
//!     2. hit = key ∈ cache              membership, not position
//!     3. before = snapshot(cache)
//!     4. hit         → policy.on_hit
//!        miss, room  → append key
//!        miss, full  → remove policy.select_victim, append key
//!     5. after = snapshot(cache)
//!        trace.push(step, key, before, after, hit)
//! ```
//!
//! ## Thread Safety
//!
//! Runs are pure functions of `&self`: the cache and frequency table live on
//! the stack of the call. A `CacheSimulator<K>` is `Send + Sync` whenever `K`
//! is, so several policies can be replayed over the same input from
//! different threads without coordination.
//!
//! ## Example Usage
//!
//! ```
//! use cachesim::simulator::CacheSimulator;
//!
//! let sim = CacheSimulator::new(3, vec![1, 2, 3, 2, 1, 4, 5, 1]).unwrap();
//!
//! let lru = sim.lru();
//! let fifo = sim.fifo();
//!
//! assert_eq!(lru.len(), 8);
//! assert_eq!(lru[5].cache_after(), &[2, 1, 4]);
//! assert_eq!(fifo[5].cache_after(), &[2, 3, 4]);
//! ```

use std::hash::Hash;

use log::{Level, debug, log_enabled, trace};

use crate::builder::{PolicyKind, SimulatorBuilder};
use crate::ds::{FrequencyTable, ResidentSet};
use crate::error::{Result, SimError};
#[cfg(feature = "metrics")]
use crate::metrics::metrics_impl::SimMetrics;
#[cfg(feature = "metrics")]
use crate::metrics::traits::SimMetricsRecorder;
use crate::policy::fifo::FifoPolicy;
use crate::policy::lfu::LfuPolicy;
use crate::policy::lifo::LifoPolicy;
use crate::policy::lru::LruPolicy;
use crate::policy::mru::MruPolicy;
use crate::trace::{StepRecord, Trace};
use crate::traits::{Access, ReplacementPolicy};

/// Replays an access sequence against a capacity-bounded cache.
///
/// # Example
///
/// ```
/// use cachesim::builder::PolicyKind;
/// use cachesim::simulator::CacheSimulator;
///
/// let sim = CacheSimulator::new(2, vec!["a", "b", "a", "c"]).unwrap();
///
/// for (kind, trace) in sim.run_all() {
///     assert_eq!(trace.policy(), kind.name());
///     assert_eq!(trace.len(), 4);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct CacheSimulator<K> {
    capacity: usize,
    sequence: Vec<K>,
}

impl<K> CacheSimulator<K>
where
    K: Clone + Eq + Hash,
{
    /// Creates a simulator after validating its inputs.
    ///
    /// # Errors
    ///
    /// - [`SimError::InvalidConfiguration`] if `capacity` is zero
    /// - [`SimError::InvalidInput`] if `sequence` is empty
    pub fn new<I>(capacity: usize, sequence: I) -> Result<Self>
    where
        I: IntoIterator<Item = K>,
    {
        if capacity == 0 {
            return Err(SimError::configuration("capacity must be > 0"));
        }
        let sequence: Vec<K> = sequence.into_iter().collect();
        if sequence.is_empty() {
            return Err(SimError::input("access sequence is empty"));
        }
        Ok(Self { capacity, sequence })
    }

    /// Starts a [`SimulatorBuilder`] for a cache of `capacity` keys.
    pub fn builder(capacity: usize) -> SimulatorBuilder<K> {
        SimulatorBuilder::new(capacity)
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// The access sequence every run replays.
    #[inline]
    pub fn sequence(&self) -> &[K] {
        &self.sequence
    }

    pub fn lru(&self) -> Trace<K> {
        self.run_with(&LruPolicy)
    }

    pub fn mru(&self) -> Trace<K> {
        self.run_with(&MruPolicy)
    }

    pub fn fifo(&self) -> Trace<K> {
        self.run_with(&FifoPolicy)
    }

    pub fn lfu(&self) -> Trace<K> {
        self.run_with(&LfuPolicy)
    }

    pub fn lifo(&self) -> Trace<K> {
        self.run_with(&LifoPolicy)
    }

    /// Runs the built-in policy named by `kind`.
    pub fn run(&self, kind: PolicyKind) -> Trace<K> {
        match kind {
            PolicyKind::Lru => self.lru(),
            PolicyKind::Mru => self.mru(),
            PolicyKind::Fifo => self.fifo(),
            PolicyKind::Lfu => self.lfu(),
            PolicyKind::Lifo => self.lifo(),
        }
    }

    /// Runs every built-in policy, each from an empty cache, in
    /// [`PolicyKind::ALL`] order.
    pub fn run_all(&self) -> Vec<(PolicyKind, Trace<K>)> {
        PolicyKind::ALL
            .into_iter()
            .map(|kind| (kind, self.run(kind)))
            .collect()
    }

    /// Replays the sequence under an arbitrary policy.
    pub fn run_with<P>(&self, policy: &P) -> Trace<K>
    where
        P: ReplacementPolicy<K> + ?Sized,
    {
        let name = policy.name();
        debug!(
            "{} run: capacity={}, accesses={}",
            name,
            self.capacity,
            self.sequence.len()
        );

        let mut cache = ResidentSet::new(self.capacity);
        let mut frequencies = FrequencyTable::new();
        let mut steps = Vec::with_capacity(self.sequence.len());
        #[cfg(feature = "metrics")]
        let mut metrics = SimMetrics::default();

        for (step, key) in self.sequence.iter().enumerate() {
            frequencies.increment(key);
            let hit = cache.contains(key);
            let before = cache.snapshot();

            let access = Access {
                key,
                step,
                frequencies: &frequencies,
            };

            if hit {
                #[cfg(feature = "metrics")]
                metrics.record_hit();
                policy.on_hit(&mut cache, &access);
            } else {
                #[cfg(feature = "metrics")]
                metrics.record_miss();

                if cache.is_full() {
                    match policy
                        .select_victim(&cache, &access)
                        .and_then(|pos| cache.remove_at(pos).map(|_| pos))
                    {
                        Some(pos) => {
                            trace!("{} step {}: evicted slot {}", name, step, pos);
                            #[cfg(feature = "metrics")]
                            metrics.record_eviction();
                        },
                        None => {
                            trace!("{} step {}: no victim, access not admitted", name, step);
                            #[cfg(feature = "metrics")]
                            metrics.record_rejection();
                        },
                    }
                }

                if cache.push_back(key.clone()) {
                    #[cfg(feature = "metrics")]
                    metrics.record_insert();
                }
            }

            #[cfg(debug_assertions)]
            cache.debug_validate_invariants();

            steps.push(StepRecord::new(step, key.clone(), before, cache.snapshot(), hit));
        }

        if log_enabled!(Level::Debug) {
            let hits = steps.iter().filter(|s| s.hit()).count();
            debug!(
                "{} run finished: hits={}, misses={}, resident={}",
                name,
                hits,
                steps.len() - hits,
                cache.len()
            );
        }

        let trace = Trace::new(name, self.capacity, steps);
        #[cfg(feature = "metrics")]
        let trace = trace.with_metrics(metrics.snapshot(cache.len(), self.capacity));
        trace
    }
}
