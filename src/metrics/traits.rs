//! # Metrics Traits
//!
//! Recording and snapshotting are split into separate traits so the run loop
//! only ever writes counters and consumers only ever read them.
//!
//! ```text
//!   ┌──────────────────────────────┐         ┌──────────────────────────────┐
//!   │     SimMetricsRecorder       │         │  MetricsSnapshotProvider<S>  │
//!   │  hit / miss / insert /       │ ──────► │  snapshot() → S              │
//!   │  eviction / rejection        │         │  (Trace, SimMetrics)         │
//!   └──────────────────────────────┘         └──────────────────────────────┘
//!        written by run loop                       read by callers
//! ```

/// Counters updated once per simulated access.
pub trait SimMetricsRecorder {
    fn record_hit(&mut self);
    fn record_miss(&mut self);
    /// A missed key was admitted into the cache.
    fn record_insert(&mut self);
    /// A resident key was evicted to make room.
    fn record_eviction(&mut self);
    /// A full cache refused the incoming key because no victim was chosen.
    fn record_rejection(&mut self);
}

/// Snapshot provider for reporting and tests.
pub trait MetricsSnapshotProvider<S> {
    fn snapshot(&self) -> S;
}
