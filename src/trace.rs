//! Step-by-step record of one simulation run.
//!
//! A [`Trace`] holds one [`StepRecord`] per access, in input order. Each
//! record captures the cache contents immediately before and immediately
//! after the policy handled the access, so consumers (timeline renderers,
//! tabular reports, test assertions) can reconstruct hits, insertions and
//! evictions without re-running the policy.
//!
//! ```text
//!   step │ key │ cache_before │ cache_after │ hit
//!   ─────┼─────┼──────────────┼─────────────┼─────
//!     0  │  1  │ []           │ [1]         │ no
//!     1  │  2  │ [1]          │ [1, 2]      │ no
//!     2  │  3  │ [1, 2]       │ [2, 3]      │ no   ← FIFO, capacity 2
//! ```
//!
//! Traces are immutable once produced and own their snapshots; they do not
//! borrow from the simulator that built them.

use std::ops::Index;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "metrics")]
use crate::metrics::snapshot::SimMetricsSnapshot;
#[cfg(feature = "metrics")]
use crate::metrics::traits::MetricsSnapshotProvider;

/// Whether an access found its key resident.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum StepOutcome {
    Hit,
    Miss,
}

impl StepOutcome {
    pub fn as_str(self) -> &'static str {
        match self {
            StepOutcome::Hit => "HIT",
            StepOutcome::Miss => "MISS",
        }
    }
}

/// The cache state around a single access.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StepRecord<K> {
    step: usize,
    key: K,
    cache_before: Vec<K>,
    cache_after: Vec<K>,
    hit: bool,
}

impl<K> StepRecord<K> {
    pub(crate) fn new(
        step: usize,
        key: K,
        cache_before: Vec<K>,
        cache_after: Vec<K>,
        hit: bool,
    ) -> Self {
        Self {
            step,
            key,
            cache_before,
            cache_after,
            hit,
        }
    }

    /// Zero-based index of this access in the input sequence.
    #[inline]
    pub fn step(&self) -> usize {
        self.step
    }

    /// The key requested at this step.
    #[inline]
    pub fn key(&self) -> &K {
        &self.key
    }

    /// Cache contents before the access was applied, front to back.
    #[inline]
    pub fn cache_before(&self) -> &[K] {
        &self.cache_before
    }

    /// Cache contents after the access was applied, front to back.
    #[inline]
    pub fn cache_after(&self) -> &[K] {
        &self.cache_after
    }

    /// `true` iff the key was resident before this step.
    #[inline]
    pub fn hit(&self) -> bool {
        self.hit
    }

    #[inline]
    pub fn is_miss(&self) -> bool {
        !self.hit
    }

    #[inline]
    pub fn outcome(&self) -> StepOutcome {
        if self.hit {
            StepOutcome::Hit
        } else {
            StepOutcome::Miss
        }
    }
}

impl<K: PartialEq> StepRecord<K> {
    /// Keys that were resident before this step and are gone after it.
    ///
    /// Holds at most one key for the built-in policies.
    pub fn evicted(&self) -> Vec<&K> {
        self.cache_before
            .iter()
            .filter(|k| !self.cache_after.contains(k))
            .collect()
    }

    /// `true` if the access was a miss and its key was admitted.
    pub fn inserted(&self) -> bool {
        !self.hit && self.cache_after.contains(&self.key)
    }
}

/// Complete result of replaying an access sequence under one policy.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Trace<K> {
    policy: String,
    capacity: usize,
    steps: Vec<StepRecord<K>>,
    #[cfg(feature = "metrics")]
    metrics: SimMetricsSnapshot,
}

impl<K> Trace<K> {
    pub(crate) fn new(policy: &str, capacity: usize, steps: Vec<StepRecord<K>>) -> Self {
        Self {
            policy: policy.to_owned(),
            capacity,
            steps,
            #[cfg(feature = "metrics")]
            metrics: SimMetricsSnapshot::default(),
        }
    }

    #[cfg(feature = "metrics")]
    pub(crate) fn with_metrics(mut self, metrics: SimMetricsSnapshot) -> Self {
        self.metrics = metrics;
        self
    }

    /// Name of the policy that produced this trace.
    pub fn policy(&self) -> &str {
        &self.policy
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of steps, equal to the length of the access sequence.
    #[inline]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn get(&self, step: usize) -> Option<&StepRecord<K>> {
        self.steps.get(step)
    }

    pub fn steps(&self) -> &[StepRecord<K>] {
        &self.steps
    }

    pub fn iter(&self) -> std::slice::Iter<'_, StepRecord<K>> {
        self.steps.iter()
    }

    pub fn hits(&self) -> usize {
        self.steps.iter().filter(|s| s.hit).count()
    }

    pub fn misses(&self) -> usize {
        self.steps.len() - self.hits()
    }

    /// Fraction of accesses that hit; `0.0` for an empty trace.
    pub fn hit_rate(&self) -> f64 {
        if self.steps.is_empty() {
            0.0
        } else {
            self.hits() as f64 / self.steps.len() as f64
        }
    }

    /// Cache contents at the end of the run.
    pub fn final_cache(&self) -> &[K] {
        match self.steps.last() {
            Some(last) => &last.cache_after,
            None => &[],
        }
    }

    pub fn into_steps(self) -> Vec<StepRecord<K>> {
        self.steps
    }

    /// Counters recorded by the run loop.
    #[cfg(feature = "metrics")]
    pub fn metrics(&self) -> SimMetricsSnapshot {
        self.metrics
    }
}

impl<K: PartialEq> Trace<K> {
    /// Number of keys evicted over the whole run.
    pub fn evictions(&self) -> usize {
        self.steps.iter().map(|s| s.evicted().len()).sum()
    }
}

impl<K> Index<usize> for Trace<K> {
    type Output = StepRecord<K>;

    fn index(&self, step: usize) -> &Self::Output {
        &self.steps[step]
    }
}

impl<'a, K> IntoIterator for &'a Trace<K> {
    type Item = &'a StepRecord<K>;
    type IntoIter = std::slice::Iter<'a, StepRecord<K>>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

impl<K> IntoIterator for Trace<K> {
    type Item = StepRecord<K>;
    type IntoIter = std::vec::IntoIter<StepRecord<K>>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.into_iter()
    }
}

#[cfg(feature = "metrics")]
impl<K> MetricsSnapshotProvider<SimMetricsSnapshot> for Trace<K> {
    fn snapshot(&self) -> SimMetricsSnapshot {
        self.metrics
    }
}
