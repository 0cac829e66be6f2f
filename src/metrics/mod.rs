//! Run counters for simulation traces.
//!
//! Compiled with the `metrics` feature (on by default). The run loop records
//! into a [`SimMetrics`](metrics_impl::SimMetrics) as it replays the access
//! sequence, and the finished [`Trace`](crate::trace::Trace) carries the
//! resulting [`SimMetricsSnapshot`](snapshot::SimMetricsSnapshot).

pub mod metrics_impl;
pub mod snapshot;
pub mod traits;
