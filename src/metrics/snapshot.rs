#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SimMetricsSnapshot {
    pub accesses: u64,
    pub hits: u64,
    pub misses: u64,

    pub insertions: u64,
    pub evictions: u64,
    pub rejections: u64,

    // gauges captured at the end of the run
    pub final_len: usize,
    pub capacity: usize,
}

impl SimMetricsSnapshot {
    /// Fraction of accesses that hit; `0.0` when nothing was accessed.
    pub fn hit_rate(&self) -> f64 {
        if self.accesses == 0 {
            0.0
        } else {
            self.hits as f64 / self.accesses as f64
        }
    }

    pub fn miss_rate(&self) -> f64 {
        if self.accesses == 0 {
            0.0
        } else {
            self.misses as f64 / self.accesses as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rates_are_zero_without_accesses() {
        let snap = SimMetricsSnapshot::default();
        assert_eq!(snap.hit_rate(), 0.0);
        assert_eq!(snap.miss_rate(), 0.0);
    }

    #[test]
    fn rates_split_accesses() {
        let snap = SimMetricsSnapshot {
            accesses: 8,
            hits: 2,
            misses: 6,
            ..Default::default()
        };
        assert!((snap.hit_rate() - 0.25).abs() < f64::EPSILON);
        assert!((snap.miss_rate() - 0.75).abs() < f64::EPSILON);
    }
}
