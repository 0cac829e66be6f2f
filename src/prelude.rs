pub use crate::builder::{PolicyKind, SimulatorBuilder};
pub use crate::ds::{FrequencyTable, ResidentSet};
pub use crate::error::{Result, SimError};
pub use crate::input::{parse_capacity, parse_sequence, parse_simulator};
#[cfg(feature = "metrics")]
pub use crate::metrics::snapshot::SimMetricsSnapshot;
#[cfg(feature = "metrics")]
pub use crate::metrics::traits::MetricsSnapshotProvider;
pub use crate::policy::fifo::FifoPolicy;
pub use crate::policy::lfu::LfuPolicy;
pub use crate::policy::lifo::LifoPolicy;
pub use crate::policy::lru::LruPolicy;
pub use crate::policy::mru::MruPolicy;
pub use crate::report::TraceReport;
pub use crate::simulator::CacheSimulator;
pub use crate::trace::{StepOutcome, StepRecord, Trace};
pub use crate::traits::{Access, ReplacementPolicy};
