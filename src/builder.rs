//! Policy selection and simulator configuration.
//!
//! [`PolicyKind`] names the five built-in policies so callers can pick one
//! from configuration or user input; [`SimulatorBuilder`] collects a capacity
//! and an access sequence and validates them into a
//! [`CacheSimulator`](crate::simulator::CacheSimulator).
//!
//! ## Example
//!
//! ```rust
//! use cachesim::builder::{PolicyKind, SimulatorBuilder};
//!
//! let sim = SimulatorBuilder::new(3)
//!     .sequence([1, 2, 3, 2, 1, 4, 5, 1])
//!     .try_build()
//!     .unwrap();
//!
//! let policy: PolicyKind = "lru".parse().unwrap();
//! let trace = sim.run(policy);
//! assert_eq!(trace.len(), 8);
//! assert_eq!(trace.policy(), "LRU");
//! ```

use std::fmt;
use std::hash::Hash;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Result, SimError};
use crate::simulator::CacheSimulator;

/// Available eviction policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PolicyKind {
    /// Least Recently Used: evict the front, hits move to the back.
    Lru,
    /// Most Recently Used: evict the back, hits move to the back.
    Mru,
    /// First In, First Out: evict the front, hits are no-ops.
    Fifo,
    /// Least Frequently Used: evict the lowest access count, hits are no-ops.
    Lfu,
    /// Last In, First Out: evict the back, hits are no-ops.
    Lifo,
}

impl PolicyKind {
    /// Every policy, in the order reports list them.
    pub const ALL: [PolicyKind; 5] = [
        PolicyKind::Lru,
        PolicyKind::Mru,
        PolicyKind::Fifo,
        PolicyKind::Lfu,
        PolicyKind::Lifo,
    ];

    /// Upper-case acronym, matching [`ReplacementPolicy::name`](crate::traits::ReplacementPolicy::name).
    pub fn name(self) -> &'static str {
        match self {
            PolicyKind::Lru => "LRU",
            PolicyKind::Mru => "MRU",
            PolicyKind::Fifo => "FIFO",
            PolicyKind::Lfu => "LFU",
            PolicyKind::Lifo => "LIFO",
        }
    }

    /// `true` for policies that reorder the cache on a hit.
    pub fn reorders_on_hit(self) -> bool {
        matches!(self, PolicyKind::Lru | PolicyKind::Mru)
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PolicyKind {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        PolicyKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| {
                SimError::configuration(format!(
                    "unknown policy '{trimmed}', expected one of LRU, MRU, FIFO, LFU, LIFO"
                ))
            })
    }
}

/// Builder for [`CacheSimulator`] instances.
#[derive(Debug, Clone)]
pub struct SimulatorBuilder<K> {
    capacity: usize,
    sequence: Vec<K>,
}

impl<K> SimulatorBuilder<K> {
    /// Create a builder for a cache holding at most `capacity` keys.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            sequence: Vec::new(),
        }
    }

    /// Replace the access sequence.
    pub fn sequence<I>(mut self, sequence: I) -> Self
    where
        I: IntoIterator<Item = K>,
    {
        self.sequence = sequence.into_iter().collect();
        self
    }

    /// Append one access to the sequence.
    pub fn access(mut self, key: K) -> Self {
        self.sequence.push(key);
        self
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of accesses collected so far.
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }
}

impl<K> SimulatorBuilder<K>
where
    K: Clone + Eq + Hash,
{
    /// Validate the configuration and build the simulator.
    ///
    /// Capacity is checked before the sequence, so a builder with both a
    /// zero capacity and no accesses reports
    /// [`SimError::InvalidConfiguration`].
    pub fn try_build(self) -> Result<CacheSimulator<K>> {
        CacheSimulator::new(self.capacity, self.sequence)
    }
}

impl<K> Extend<K> for SimulatorBuilder<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        self.sequence.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- PolicyKind -------------------------------------------------------

    #[test]
    fn policy_names_round_trip_through_from_str() {
        for kind in PolicyKind::ALL {
            assert_eq!(kind.name().parse::<PolicyKind>().unwrap(), kind);
            assert_eq!(kind.to_string(), kind.name());
        }
    }

    #[test]
    fn policy_parse_is_case_insensitive_and_trims() {
        assert_eq!(" lifo ".parse::<PolicyKind>().unwrap(), PolicyKind::Lifo);
        assert_eq!("Lfu".parse::<PolicyKind>().unwrap(), PolicyKind::Lfu);
    }

    #[test]
    fn unknown_policy_is_configuration_error() {
        let err = "arc".parse::<PolicyKind>().unwrap_err();
        assert!(err.is_configuration());
        assert!(err.message().contains("arc"));
    }

    #[test]
    fn only_recency_policies_reorder_on_hit() {
        let reordering: Vec<_> = PolicyKind::ALL
            .into_iter()
            .filter(|k| k.reorders_on_hit())
            .collect();
        assert_eq!(reordering, vec![PolicyKind::Lru, PolicyKind::Mru]);
    }

    // -- SimulatorBuilder -------------------------------------------------

    #[test]
    fn builder_collects_accesses() {
        let mut builder = SimulatorBuilder::new(2).sequence([1, 2]).access(3);
        builder.extend([4, 5]);
        assert_eq!(builder.len(), 5);
        assert_eq!(builder.capacity(), 2);

        let sim = builder.try_build().unwrap();
        assert_eq!(sim.sequence(), &[1, 2, 3, 4, 5]);
    }

    #[test]
    fn builder_rejects_zero_capacity_first() {
        let err = SimulatorBuilder::<u32>::new(0).try_build().unwrap_err();
        assert!(err.is_configuration());
    }

    #[test]
    fn builder_rejects_empty_sequence() {
        let builder = SimulatorBuilder::<u32>::new(4);
        assert!(builder.is_empty());
        let err = builder.try_build().unwrap_err();
        assert!(err.is_input());
    }
}
