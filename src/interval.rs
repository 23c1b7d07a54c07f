//! The [`Interval`] value type.
//!
//! An interval is a half-open frame range `[start, end)` over a motion
//! sequence. Intervals produced by the extractor always cover at least one
//! frame, so `start < end` holds for every value built through
//! [`Interval::new`].

use std::fmt;
use std::ops::Range;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{IntervalError, Result};

/// Half-open frame range `[start, end)` during which motion was detected.
///
/// Ordering is by `start`, then `end`.
///
/// # Example
///
/// ```
/// use motion_intervals::Interval;
///
/// let interval = Interval::new(2, 5)?;
/// assert_eq!(interval.len(), 3);
/// assert!(interval.contains(4));
/// assert!(!interval.contains(5));
/// assert_eq!(<(usize, usize)>::from(interval), (2, 5));
/// # Ok::<(), motion_intervals::IntervalError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Interval {
    /// First frame with motion.
    pub start: usize,
    /// One past the last frame with motion.
    pub end: usize,
}

impl Interval {
    /// Create an interval.
    ///
    /// # Errors
    ///
    /// Returns [`IntervalError::EmptyInterval`] if `start >= end`.
    pub fn new(start: usize, end: usize) -> Result<Self> {
        if start >= end {
            return Err(IntervalError::empty_interval(start, end));
        }
        Ok(Self { start, end })
    }

    /// Number of frames covered. Zero when `start >= end`.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Always false for intervals built with [`Interval::new`].
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Whether `frame` lies inside `[start, end)`.
    #[must_use]
    pub const fn contains(&self, frame: usize) -> bool {
        self.start <= frame && frame < self.end
    }

    /// Frame indices covered by this interval.
    #[must_use]
    pub const fn as_range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Whether `other` begins exactly where this interval ends, or the
    /// reverse. Extracted intervals are never adjacent.
    #[must_use]
    pub const fn is_adjacent_to(&self, other: &Self) -> bool {
        self.end == other.start || other.end == self.start
    }

    /// Start and end times in seconds for a sequence sampled at `frame_rate`.
    #[must_use]
    pub fn to_seconds(&self, frame_rate: f64) -> (f64, f64) {
        (
            self.start as f64 / frame_rate,
            self.end as f64 / frame_rate,
        )
    }

    /// Duration in seconds for a sequence sampled at `frame_rate`.
    #[must_use]
    pub fn duration_seconds(&self, frame_rate: f64) -> f64 {
        self.len() as f64 / frame_rate
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

impl From<Interval> for (usize, usize) {
    fn from(interval: Interval) -> Self {
        (interval.start, interval.end)
    }
}

impl From<Interval> for Range<usize> {
    fn from(interval: Interval) -> Self {
        interval.as_range()
    }
}

impl TryFrom<(usize, usize)> for Interval {
    type Error = IntervalError;

    fn try_from((start, end): (usize, usize)) -> Result<Self> {
        Self::new(start, end)
    }
}

impl TryFrom<Range<usize>> for Interval {
    type Error = IntervalError;

    fn try_from(range: Range<usize>) -> Result<Self> {
        Self::new(range.start, range.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_empty() {
        assert_eq!(
            Interval::new(3, 3),
            Err(IntervalError::EmptyInterval { start: 3, end: 3 })
        );
        assert!(Interval::new(4, 2).is_err());
        assert!(Interval::new(0, 1).is_ok());
    }

    #[test]
    fn test_len_and_contains() {
        let interval = Interval::new(1, 3).unwrap();
        assert_eq!(interval.len(), 2);
        assert!(!interval.is_empty());
        assert!(!interval.contains(0));
        assert!(interval.contains(1));
        assert!(interval.contains(2));
        assert!(!interval.contains(3));
        assert_eq!(interval.as_range().collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn test_inverted_fields_have_zero_len() {
        // Public fields and serde can bypass `new`
        let interval = Interval { start: 5, end: 2 };
        assert_eq!(interval.len(), 0);
        assert!(interval.is_empty());
        assert_eq!(interval.duration_seconds(1.0), 0.0);
    }

    #[test]
    fn test_ordering() {
        let mut intervals = vec![
            Interval::new(5, 6).unwrap(),
            Interval::new(0, 4).unwrap(),
            Interval::new(0, 2).unwrap(),
        ];
        intervals.sort();
        let pairs: Vec<(usize, usize)> = intervals.into_iter().map(Into::into).collect();
        assert_eq!(pairs, vec![(0, 2), (0, 4), (5, 6)]);
    }

    #[test]
    fn test_adjacency() {
        let a = Interval::new(0, 2).unwrap();
        let b = Interval::new(2, 4).unwrap();
        let c = Interval::new(3, 4).unwrap();
        assert!(a.is_adjacent_to(&b));
        assert!(b.is_adjacent_to(&a));
        assert!(!a.is_adjacent_to(&c));
    }

    #[test]
    fn test_seconds() {
        let interval = Interval::new(30, 90).unwrap();
        assert_eq!(interval.to_seconds(30.0), (1.0, 3.0));
        assert!((interval.duration_seconds(30.0) - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_conversions() {
        let interval = Interval::try_from((2, 7)).unwrap();
        assert_eq!(interval.to_string(), "[2, 7)");
        assert_eq!(Range::<usize>::from(interval), 2..7);
        assert_eq!(Interval::try_from(2..7).unwrap(), interval);
        assert!(Interval::try_from((7, 2)).is_err());
    }
}
