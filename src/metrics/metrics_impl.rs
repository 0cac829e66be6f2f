use crate::metrics::snapshot::SimMetricsSnapshot;
use crate::metrics::traits::SimMetricsRecorder;

#[derive(Debug, Default, Clone)]
pub struct SimMetrics {
    pub hits: u64,
    pub misses: u64,
    pub insertions: u64,
    pub evictions: u64,
    pub rejections: u64,
}

impl SimMetrics {
    /// Freezes the counters together with the end-of-run cache gauges.
    pub fn snapshot(&self, final_len: usize, capacity: usize) -> SimMetricsSnapshot {
        SimMetricsSnapshot {
            accesses: self.hits + self.misses,
            hits: self.hits,
            misses: self.misses,
            insertions: self.insertions,
            evictions: self.evictions,
            rejections: self.rejections,
            final_len,
            capacity,
        }
    }
}

impl SimMetricsRecorder for SimMetrics {
    fn record_hit(&mut self) {
        self.hits += 1;
    }

    fn record_miss(&mut self) {
        self.misses += 1;
    }

    fn record_insert(&mut self) {
        self.insertions += 1;
    }

    fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    fn record_rejection(&mut self) {
        self.rejections += 1;
    }
}
