//! Error types for the strategy library.

use thiserror::Error;

/// Precondition violations for the strategy entry points.
///
/// The algorithms are defined only for non-negative indices within range;
/// `usize` arguments already rule out negative values, and these variants
/// cover the remaining invalid inputs. They are reported synchronously —
/// a strategy never silently returns a wrong value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StrategyError {
    /// Fibonacci index whose value does not fit in a `u64`
    #[error("Fibonacci index {index} exceeds the largest supported index {max}")]
    IndexTooLarge { index: usize, max: usize },

    /// LCS prefix length pointing past the end of its sequence
    #[error("prefix length {len} is out of range for a sequence of {max} characters")]
    PrefixOutOfRange { len: usize, max: usize },
}
