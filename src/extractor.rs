//! Core interval extraction.
//!
//! This module implements [`extract_intervals`], which collapses per-frame
//! motion flags into the list of runs where motion was detected.
//!
//! # Algorithm
//!
//! A single forward scan with one piece of state: the start of the run
//! currently open, if any.
//!
//! | State | Flag | Next state | Output |
//! |-------|------|------------|--------|
//! | no run | `false` | no run | - |
//! | no run | `true` | run from `i` | - |
//! | run from `s` | `true` | run from `s` | - |
//! | run from `s` | `false` | no run | `(s, i)` |
//!
//! A run still open after the last flag is dropped under the default
//! [`TrailingRun::Drop`] policy, so a sequence ending in motion yields no
//! interval for its final run and an all-`true` sequence yields nothing.
//! [`extract_intervals_with`] can close it instead.

use log::{debug, trace};

use crate::config::{ExtractionConfig, TrailingRun};
use crate::interval::Interval;

/// Extract the runs of motion from a sequence of per-frame flags.
///
/// Runs in O(N) time with O(1) scratch state. Every returned interval is a
/// maximal run of `true` that is followed by a `false`; a run reaching the
/// end of `motions` is not returned.
///
/// # Arguments
///
/// * `motions` - Motion flags, one per frame, in frame order
///
/// # Example
///
/// ```
/// use motion_intervals::extract_pairs;
///
/// let motions = [true, false, true, false, true, true];
/// assert_eq!(extract_pairs(&motions), vec![(0, 1), (2, 3)]);
///
/// // The trailing run is never closed
/// assert!(extract_pairs(&[true, true, true]).is_empty());
/// ```
#[must_use]
pub fn extract_intervals(motions: &[bool]) -> Vec<Interval> {
    extract_with_policy(motions, TrailingRun::Drop)
}

/// Extract intervals as plain `(start, end)` pairs.
#[must_use]
pub fn extract_pairs(motions: &[bool]) -> Vec<(usize, usize)> {
    extract_intervals(motions)
        .into_iter()
        .map(Into::into)
        .collect()
}

/// Extract intervals, applying the trailing run policy from `config`.
///
/// With [`TrailingRun::Drop`] this is identical to [`extract_intervals`].
/// With [`TrailingRun::Close`] a run still open after the last flag is
/// emitted as `(start, motions.len())`.
///
/// # Example
///
/// ```
/// use motion_intervals::{extract_intervals_with, ExtractionConfig, TrailingRun};
///
/// let config = ExtractionConfig::default().with_trailing_run(TrailingRun::Close);
/// let intervals = extract_intervals_with(&[false, true, true], &config);
/// assert_eq!(intervals.len(), 1);
/// assert_eq!((intervals[0].start, intervals[0].end), (1, 3));
/// ```
#[must_use]
pub fn extract_intervals_with(motions: &[bool], config: &ExtractionConfig) -> Vec<Interval> {
    extract_with_policy(motions, config.trailing_run)
}

pub(crate) fn extract_with_policy(motions: &[bool], policy: TrailingRun) -> Vec<Interval> {
    let (mut intervals, open) = scan(motions);
    let Some(start) = open else {
        return intervals;
    };

    match policy {
        TrailingRun::Drop => {
            debug!("Dropping open motion run at frames {start}..{}", motions.len());
        }
        TrailingRun::Close => {
            debug!("Closing open motion run at frames {start}..{}", motions.len());
            intervals.push(Interval {
                start,
                end: motions.len(),
            });
        }
    }
    intervals
}

/// Start frame of the run still open at the end of `motions`, if any.
///
/// This is the run [`extract_intervals`] discards.
///
/// ```
/// use motion_intervals::trailing_run;
///
/// assert_eq!(trailing_run(&[true, false, true, true]), Some(2));
/// assert_eq!(trailing_run(&[true, false]), None);
/// assert_eq!(trailing_run(&[]), None);
/// ```
#[must_use]
pub fn trailing_run(motions: &[bool]) -> Option<usize> {
    if !motions.last().copied().unwrap_or(false) {
        return None;
    }
    let start = motions
        .iter()
        .rposition(|&motion| !motion)
        .map_or(0, |i| i + 1);
    Some(start)
}

/// Single forward scan. Returns the closed runs and the start of the run
/// still open after the last flag.
fn scan(motions: &[bool]) -> (Vec<Interval>, Option<usize>) {
    let mut intervals = Vec::new();
    let mut open: Option<usize> = None;

    for (i, &motion) in motions.iter().enumerate() {
        match (open, motion) {
            (None, true) => open = Some(i),
            (Some(start), false) => {
                trace!("Motion run closed at frames {start}..{i}");
                intervals.push(Interval { start, end: i });
                open = None;
            }
            (None, false) | (Some(_), true) => {}
        }
    }

    (intervals, open)
}
