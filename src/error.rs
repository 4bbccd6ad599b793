//! Error type shared by the container and the algorithms.

use thiserror::Error;

/// Errors raised when a [`FixedArray`](crate::FixedArray) or a caller-supplied
/// length breaks the sentinel contract.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArrayError {
    /// A container needs at least one cell to hold the sentinel.
    #[error("capacity must be at least 1")]
    ZeroCapacity,

    /// Populating the container would leave no room for the sentinel.
    #[error("{len} values do not fit in capacity {capacity} (one slot is reserved for the sentinel)")]
    CapacityExceeded { capacity: usize, len: usize },

    #[error("index {index} is out of bounds for capacity {capacity}")]
    IndexOutOfBounds { index: usize, capacity: usize },

    /// Every cell holds a value, so there is no end-of-data marker to stop at.
    #[error("malformed container: no sentinel within capacity {capacity}")]
    MalformedContainer { capacity: usize },

    #[error("length {length} leaves no sentinel slot in capacity {capacity}")]
    InvalidLength { length: usize, capacity: usize },

    /// The supplied length runs past the real end of data.
    #[error("length {length} runs past the sentinel at index {index}")]
    SentinelWithinLength { length: usize, index: usize },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ArrayError>;
