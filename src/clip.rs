//! Padded clip windows around motion intervals.
//!
//! When a recording is fetched for a motion interval, the clip begins a
//! little before the motion started and is never shorter than a minimum
//! duration. This module turns intervals into such [`ClipWindow`]s, in frame
//! units, and merges windows that overlap once padded.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::config::ExtractionConfig;
use crate::error::{IntervalError, Result};
use crate::interval::Interval;

/// Frame range `[start, end)` of a recording to fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ClipWindow {
    /// First frame of the clip.
    pub start: usize,
    /// One past the last frame of the clip.
    pub end: usize,
}

impl ClipWindow {
    /// Number of frames in the clip.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Whether the clip covers no frames. Only possible for a zero-length
    /// sequence.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Offset of the clip start in seconds.
    #[must_use]
    pub fn start_seconds(&self, frame_rate: f64) -> f64 {
        self.start as f64 / frame_rate
    }

    /// Clip duration in seconds.
    #[must_use]
    pub fn duration_seconds(&self, frame_rate: f64) -> f64 {
        self.len() as f64 / frame_rate
    }
}

/// Compute the clip window for one interval.
///
/// The clip starts `clip_padding_seconds` before the interval (clamped at
/// frame 0) and lasts `max(interval length + padding, min_clip_seconds)`,
/// clamped to the end of the sequence.
///
/// # Arguments
///
/// * `interval` - Motion interval
/// * `config` - Frame rate and padding parameters
/// * `total_frames` - Length of the motion sequence the interval indexes
///
/// # Errors
///
/// Returns an error if the configuration is invalid or the interval ends
/// past `total_frames`.
///
/// # Example
///
/// ```
/// use motion_intervals::{clip_window, ExtractionConfig, Interval};
///
/// // 1 Hz flags, 15 s pre-roll, 15 s minimum
/// let config = ExtractionConfig::polling();
/// let clip = clip_window(Interval::new(40, 43)?, &config, 120)?;
/// assert_eq!((clip.start, clip.end), (25, 43));
/// # Ok::<(), motion_intervals::IntervalError>(())
/// ```
pub fn clip_window(
    interval: Interval,
    config: &ExtractionConfig,
    total_frames: usize,
) -> Result<ClipWindow> {
    config.validate()?;
    padded(
        interval,
        config.padding_frames(),
        config.min_clip_frames(),
        total_frames,
    )
}

/// Compute clip windows for every interval.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or any interval ends
/// past `total_frames`.
pub fn clip_windows(
    intervals: &[Interval],
    config: &ExtractionConfig,
    total_frames: usize,
) -> Result<Vec<ClipWindow>> {
    config.validate()?;
    let pad = config.padding_frames();
    let min_len = config.min_clip_frames();

    intervals
        .iter()
        .map(|&interval| padded(interval, pad, min_len, total_frames))
        .collect()
}

/// Merge overlapping or touching clip windows.
///
/// Input must be ordered by `start`, as produced by [`clip_windows`] from
/// extracted intervals.
#[must_use]
pub fn merge_clips(clips: &[ClipWindow]) -> Vec<ClipWindow> {
    let mut merged: Vec<ClipWindow> = Vec::with_capacity(clips.len());

    for &clip in clips {
        match merged.last_mut() {
            Some(last) if clip.start <= last.end => {
                last.end = last.end.max(clip.end);
            }
            _ => merged.push(clip),
        }
    }

    merged
}

fn padded(
    interval: Interval,
    pad: usize,
    min_len: usize,
    total_frames: usize,
) -> Result<ClipWindow> {
    if interval.end > total_frames {
        return Err(IntervalError::out_of_bounds(interval.end, total_frames));
    }

    let start = interval.start.saturating_sub(pad);
    let duration = interval.len().saturating_add(pad).max(min_len);
    let end = start.saturating_add(duration).min(total_frames);

    Ok(ClipWindow { start, end })
}
