//! cachesim: step-by-step simulation of cache replacement policies.
//!
//! A [`CacheSimulator`](simulator::CacheSimulator) replays an access
//! sequence against an empty, fixed-capacity cache under one of five
//! policies (LRU, MRU, FIFO, LFU, LIFO) and returns a
//! [`Trace`](trace::Trace) recording, for every access, the cache contents
//! before and after and whether the access hit.
//!
//! ```
//! use cachesim::prelude::*;
//!
//! let sim = CacheSimulator::new(3, vec![1, 2, 3, 2, 1, 4, 5, 1])?;
//! let trace = sim.run(PolicyKind::Lru);
//!
//! assert_eq!(trace[5].cache_after(), &[2, 1, 4]);
//! assert_eq!(trace.hits(), 3);
//! # Ok::<(), SimError>(())
//! ```

pub mod builder;
pub mod ds;
pub mod error;
pub mod input;
pub mod policy;
pub mod report;
pub mod simulator;
pub mod trace;
pub mod traits;

#[cfg(feature = "metrics")]
pub mod metrics;

pub mod prelude;
