//! Error types for the cachesim library.
//!
//! ## Key Components
//!
//! - [`SimError::InvalidConfiguration`]: the simulator was asked to run with
//!   parameters that can never produce a trace (zero capacity, unknown
//!   policy name).
//! - [`SimError::InvalidInput`]: the access sequence supplied by the caller is
//!   empty or could not be parsed into keys.
//!
//! Both kinds are detected before the first simulation step runs, so a run
//! either returns a complete [`Trace`](crate::trace::Trace) or fails without
//! producing one.
//!
//! ## Example Usage
//!
//! ```
//! use cachesim::error::SimError;
//! use cachesim::simulator::CacheSimulator;
//!
//! let err = CacheSimulator::new(0, vec![1, 2, 3]).unwrap_err();
//! assert!(err.is_configuration());
//! assert!(err.to_string().contains("capacity"));
//!
//! let err = CacheSimulator::<u32>::new(3, Vec::new()).unwrap_err();
//! assert!(matches!(err, SimError::InvalidInput(_)));
//! ```

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SimError>;

/// Error returned when a simulation cannot be set up.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimError {
    /// Capacity or policy selection is unusable.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// The access sequence is empty or malformed.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl SimError {
    /// Creates an [`SimError::InvalidConfiguration`] with the given description.
    #[inline]
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::InvalidConfiguration(msg.into())
    }

    /// Creates an [`SimError::InvalidInput`] with the given description.
    #[inline]
    pub fn input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Returns the error description without the kind prefix.
    #[inline]
    pub fn message(&self) -> &str {
        match self {
            Self::InvalidConfiguration(msg) | Self::InvalidInput(msg) => msg,
        }
    }

    #[inline]
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::InvalidConfiguration(_))
    }

    #[inline]
    pub fn is_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
