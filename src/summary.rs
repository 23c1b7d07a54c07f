//! Activity statistics for an extracted interval list.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::extractor::trailing_run;
use crate::interval::Interval;

/// Summary of motion activity over one sequence.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct IntervalSummary {
    /// Length of the motion sequence.
    pub frame_count: usize,

    /// Number of intervals.
    pub interval_count: usize,

    /// Frames covered by the intervals.
    pub active_frames: usize,

    /// Fraction of frames covered, in `[0, 1]`. Zero for an empty sequence.
    pub coverage: f64,

    /// Longest interval; the earliest one on ties.
    pub longest: Option<Interval>,

    /// Mean interval length in frames. Zero when there are no intervals.
    pub mean_length: f64,

    /// Start of a run still open at the end of the sequence, which the
    /// default extraction does not report.
    pub trailing_run_start: Option<usize>,
}

impl IntervalSummary {
    /// Active time in seconds for a sequence sampled at `frame_rate`.
    #[must_use]
    pub fn active_seconds(&self, frame_rate: f64) -> f64 {
        self.active_frames as f64 / frame_rate
    }
}

/// Summarize the intervals extracted from `motions`.
///
/// # Arguments
///
/// * `motions` - The motion flags the intervals were extracted from
/// * `intervals` - Extracted intervals
///
/// # Example
///
/// ```
/// use motion_intervals::{extract_intervals, summarize};
///
/// let motions = [false, true, true, false, true, false, true];
/// let summary = summarize(&motions, &extract_intervals(&motions));
/// assert_eq!(summary.interval_count, 2);
/// assert_eq!(summary.active_frames, 3);
/// assert_eq!(summary.trailing_run_start, Some(6));
/// ```
#[must_use]
pub fn summarize(motions: &[bool], intervals: &[Interval]) -> IntervalSummary {
    let frame_count = motions.len();
    let interval_count = intervals.len();
    let active_frames: usize = intervals.iter().map(Interval::len).sum();

    let coverage = if frame_count == 0 {
        0.0
    } else {
        active_frames as f64 / frame_count as f64
    };

    let mean_length = if interval_count == 0 {
        0.0
    } else {
        active_frames as f64 / interval_count as f64
    };

    // max_by_key keeps the last maximum, so fold to keep the first
    let longest = intervals.iter().copied().fold(None, |best: Option<Interval>, interval| {
        match best {
            Some(b) if b.len() >= interval.len() => Some(b),
            _ => Some(interval),
        }
    });

    IntervalSummary {
        frame_count,
        interval_count,
        active_frames,
        coverage,
        longest,
        mean_length,
        trailing_run_start: trailing_run(motions),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractor::extract_intervals;

    #[test]
    fn test_empty_sequence() {
        let summary = summarize(&[], &[]);
        assert_eq!(summary.frame_count, 0);
        assert_eq!(summary.interval_count, 0);
        assert_eq!(summary.coverage, 0.0);
        assert_eq!(summary.mean_length, 0.0);
        assert!(summary.longest.is_none());
        assert!(summary.trailing_run_start.is_none());
    }

    #[test]
    fn test_statistics() {
        let motions = [
            false, true, true, true, false, true, false, false, true, true, true, false,
        ];
        let intervals = extract_intervals(&motions);
        let summary = summarize(&motions, &intervals);

        assert_eq!(summary.interval_count, 3);
        assert_eq!(summary.active_frames, 7);
        assert!((summary.coverage - 7.0 / 12.0).abs() < 1e-12);
        assert!((summary.mean_length - 7.0 / 3.0).abs() < 1e-12);
        assert_eq!(summary.longest, Some(Interval::new(1, 4).unwrap()));
        assert!(summary.trailing_run_start.is_none());
        assert!((summary.active_seconds(2.0) - 3.5).abs() < 1e-12);
    }

    #[test]
    fn test_inverted_interval_counts_nothing() {
        let summary = summarize(&[false; 8], &[Interval { start: 5, end: 2 }]);
        assert_eq!(summary.interval_count, 1);
        assert_eq!(summary.active_frames, 0);
        assert_eq!(summary.coverage, 0.0);
    }

    #[test]
    fn test_all_true_reports_dropped_run() {
        let motions = [true; 8];
        let summary = summarize(&motions, &extract_intervals(&motions));
        assert_eq!(summary.interval_count, 0);
        assert_eq!(summary.active_frames, 0);
        assert_eq!(summary.trailing_run_start, Some(0));
    }
}
