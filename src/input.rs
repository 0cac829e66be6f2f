//! Parsing of textual simulator inputs.
//!
//! Front ends usually collect the capacity and the access sequence as text
//! (a size field and a comma-separated list such as `1,2,3,2,1,4,5,1`).
//! These helpers turn that text into validated values and report problems
//! as [`SimError`] before any simulation runs.
//!
//! ## Example Usage
//!
//! ```
//! use cachesim::input::{parse_capacity, parse_sequence, parse_simulator};
//!
//! assert_eq!(parse_capacity(" 3 ").unwrap(), 3);
//! assert_eq!(parse_sequence::<u32>("1, 2,3").unwrap(), vec![1, 2, 3]);
//!
//! let sim = parse_simulator::<u32>("3", "1,2,3,2,1,4,5,1").unwrap();
//! assert_eq!(sim.lru().len(), 8);
//!
//! assert!(parse_sequence::<u32>("1,,2").unwrap_err().is_input());
//! assert!(parse_capacity("0").unwrap_err().is_configuration());
//! ```

use std::hash::Hash;
use std::str::FromStr;

use crate::error::{Result, SimError};
use crate::simulator::CacheSimulator;

/// Splits `text` on commas and parses every trimmed token as a key.
///
/// # Errors
///
/// [`SimError::InvalidInput`] if the text holds no tokens, or if any token
/// is empty or fails to parse. The message names the 1-based position of the
/// offending token.
pub fn parse_sequence<K>(text: &str) -> Result<Vec<K>>
where
    K: FromStr,
{
    if text.trim().is_empty() {
        return Err(SimError::input("access sequence is empty"));
    }

    text.split(',')
        .enumerate()
        .map(|(idx, raw)| {
            let token = raw.trim();
            if token.is_empty() {
                return Err(SimError::input(format!("access {} is empty", idx + 1)));
            }
            token.parse::<K>().map_err(|_| {
                SimError::input(format!("access {} ('{}') is not a valid key", idx + 1, token))
            })
        })
        .collect()
}

/// Parses a cache capacity.
///
/// # Errors
///
/// - [`SimError::InvalidInput`] if the text is not an integer
/// - [`SimError::InvalidConfiguration`] if the integer is zero or negative
pub fn parse_capacity(text: &str) -> Result<usize> {
    let token = text.trim();
    let value: i64 = token
        .parse()
        .map_err(|_| SimError::input(format!("capacity '{token}' is not an integer")))?;
    if value <= 0 {
        return Err(SimError::configuration(format!(
            "capacity must be > 0, got {value}"
        )));
    }
    usize::try_from(value)
        .map_err(|_| SimError::configuration(format!("capacity {value} is too large")))
}

/// Parses both fields and builds a [`CacheSimulator`].
///
/// The capacity is checked first, matching [`CacheSimulator::new`].
pub fn parse_simulator<K>(capacity: &str, sequence: &str) -> Result<CacheSimulator<K>>
where
    K: FromStr + Clone + Eq + Hash,
{
    let capacity = parse_capacity(capacity)?;
    let sequence = parse_sequence(sequence)?;
    CacheSimulator::new(capacity, sequence)
}
