//! Error types for motion interval operations.
//!
//! Extraction itself never fails. These errors come from the helpers around
//! it: configuration checks, clip window computation, and interval list
//! validation.

use thiserror::Error;

/// Main error type for motion interval operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum IntervalError {
    /// Configuration validation failed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Interval does not cover any frame.
    #[error("Empty interval: start {start} must be below end {end}")]
    EmptyInterval { start: usize, end: usize },

    /// Interval reaches past the end of the motion sequence.
    #[error("Interval end {end} is past sequence length {len}")]
    OutOfBounds { end: usize, len: usize },

    /// Interval covers a frame without motion.
    #[error("Frame {frame} is inside an interval but has no motion")]
    NotActive { frame: usize },

    /// Interval could be extended into an adjacent active frame.
    #[error("Interval [{start}, {end}) is not a maximal run")]
    NotMaximal { start: usize, end: usize },

    /// Intervals overlap or are out of order.
    #[error("Interval at index {index} overlaps or precedes the previous one")]
    Unordered { index: usize },

    /// Interval reaches the end of the sequence although trailing runs are
    /// dropped.
    #[error("Interval starting at frame {start} reaches the end of the sequence but trailing runs are dropped")]
    UnclosedRun { start: usize },

    /// A run in the sequence has no matching interval.
    #[error("Run starting at frame {start} is missing from the interval list")]
    MissingRun { start: usize },
}

/// Result type alias for motion interval operations.
pub type Result<T> = std::result::Result<T, IntervalError>;

impl IntervalError {
    /// Create an invalid configuration error.
    #[must_use]
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// Create an empty interval error.
    #[must_use]
    pub const fn empty_interval(start: usize, end: usize) -> Self {
        Self::EmptyInterval { start, end }
    }

    /// Create an out of bounds error.
    #[must_use]
    pub const fn out_of_bounds(end: usize, len: usize) -> Self {
        Self::OutOfBounds { end, len }
    }

    /// Create a not-maximal error.
    #[must_use]
    pub const fn not_maximal(start: usize, end: usize) -> Self {
        Self::NotMaximal { start, end }
    }
}
