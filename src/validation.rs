//! Interval list validation.
//!
//! This module checks that an interval list is exactly what extraction would
//! produce for a motion sequence. It is useful for lists that come back from
//! storage, where they may have been edited or attached to the wrong
//! sequence.
//!
//! # Checks
//!
//! - Every interval is non-empty and lies inside the sequence
//! - Every frame inside an interval has motion
//! - Intervals are ordered and do not overlap
//! - No interval can be extended into an adjacent active frame
//! - A run reaching the end of the sequence appears only under
//!   [`TrailingRun::Close`]
//! - Every run the extractor reports is present

use crate::config::TrailingRun;
use crate::error::{IntervalError, Result};
use crate::extractor::extract_with_policy;
use crate::interval::Interval;

/// Validate `intervals` against the motion sequence they index.
///
/// # Arguments
///
/// * `motions` - The source motion flags
/// * `intervals` - Interval list to check
/// * `policy` - Trailing run policy the list was extracted with
///
/// # Errors
///
/// Returns the first violation found, checking intervals in order.
///
/// # Example
///
/// ```
/// use motion_intervals::{extract_intervals, validate_intervals, TrailingRun};
///
/// let motions = [false, true, true, false, true, false];
/// let intervals = extract_intervals(&motions);
/// assert!(validate_intervals(&motions, &intervals, TrailingRun::Drop).is_ok());
/// assert!(validate_intervals(&motions, &intervals[..1], TrailingRun::Drop).is_err());
/// ```
pub fn validate_intervals(
    motions: &[bool],
    intervals: &[Interval],
    policy: TrailingRun,
) -> Result<()> {
    let n = motions.len();
    let mut previous: Option<Interval> = None;

    for (index, interval) in intervals.iter().enumerate() {
        let Interval { start, end } = *interval;

        if start >= end {
            return Err(IntervalError::empty_interval(start, end));
        }
        if end > n {
            return Err(IntervalError::out_of_bounds(end, n));
        }
        if let Some(prev) = previous {
            if start < prev.end {
                return Err(IntervalError::Unordered { index });
            }
        }

        if let Some(frame) = (start..end).find(|&i| !motions[i]) {
            return Err(IntervalError::NotActive { frame });
        }

        let extends_left = start > 0 && motions[start - 1];
        let extends_right = end < n && motions[end];
        if extends_left || extends_right {
            return Err(IntervalError::not_maximal(start, end));
        }

        if end == n && policy == TrailingRun::Drop {
            return Err(IntervalError::UnclosedRun { start });
        }

        previous = Some(*interval);
    }

    // Every interval is now a distinct run, in order; check none are missing.
    let mut given = intervals.iter().peekable();
    for expected in extract_with_policy(motions, policy) {
        if given.peek() == Some(&&expected) {
            given.next();
        } else {
            return Err(IntervalError::MissingRun {
                start: expected.start,
            });
        }
    }

    Ok(())
}
