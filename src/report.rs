//! Fixed-width text report of a trace.
//!
//! Renders one line per access showing the key, the cache contents after the
//! access, and whether it hit:
//!
//! ```text
//! --- LRU ---
//! Access | Cache | HIT/MISS
//! --------------------------
//! 1      | [1] | MISS
//! 2      | [1, 2] | MISS
//! 1      | [2, 1] | HIT
//! ```
//!
//! With [`TraceReport::with_summary`] a closing line adds hit/miss totals.
//!
//! ## Example Usage
//!
//! ```
//! use cachesim::simulator::CacheSimulator;
//!
//! let sim = CacheSimulator::new(2, vec![1, 2, 1]).unwrap();
//! let text = sim.lru().report().to_string();
//!
//! assert!(text.starts_with("--- LRU ---\n"));
//! assert!(text.contains("1      | [2, 1] | HIT\n"));
//! ```

use std::fmt::{self, Display};

use crate::trace::Trace;

const RULE: &str = "--------------------------";

/// [`Display`] adapter that formats a [`Trace`] as a table.
#[derive(Debug, Clone, Copy)]
pub struct TraceReport<'a, K> {
    trace: &'a Trace<K>,
    summary: bool,
}

impl<'a, K> TraceReport<'a, K> {
    pub fn new(trace: &'a Trace<K>) -> Self {
        Self {
            trace,
            summary: false,
        }
    }

    /// Appends a `hits=.. misses=.. hit_rate=..` line after the rows.
    pub fn with_summary(mut self) -> Self {
        self.summary = true;
        self
    }
}

struct CacheList<'a, K>(&'a [K]);

impl<K: Display> Display for CacheList<'_, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, key) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{key}")?;
        }
        f.write_str("]")
    }
}

impl<K: Display> Display for TraceReport<'_, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- {} ---", self.trace.policy())?;
        writeln!(f, "Access | Cache | HIT/MISS")?;
        writeln!(f, "{RULE}")?;
        for step in self.trace {
            // `{:<6}` pads only types whose Display honours width, so render first.
            let key = step.key().to_string();
            writeln!(
                f,
                "{:<6} | {} | {}",
                key,
                CacheList(step.cache_after()),
                step.outcome().as_str()
            )?;
        }
        if self.summary {
            writeln!(
                f,
                "hits={} misses={} hit_rate={:.2}",
                self.trace.hits(),
                self.trace.misses(),
                self.trace.hit_rate()
            )?;
        }
        Ok(())
    }
}

impl<K> Trace<K> {
    /// Tabular view of this trace; see [`TraceReport`].
    pub fn report(&self) -> TraceReport<'_, K> {
        TraceReport::new(self)
    }
}
