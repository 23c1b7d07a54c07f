//! Configuration for interval extraction and clip computation.
//!
//! This module provides the [`ExtractionConfig`] struct which centralizes the
//! tunable parameters around the extractor, along with presets for the two
//! ways motion flags are usually sampled.
//!
//! # Example
//!
//! ```
//! use motion_intervals::{ExtractionConfig, TrailingRun};
//!
//! // One flag per second, 15 s pre-roll
//! let config = ExtractionConfig::default();
//!
//! // Flags per video frame
//! let video = ExtractionConfig::video(25.0).with_trailing_run(TrailingRun::Close);
//! assert!(video.validate().is_ok());
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{IntervalError, Result};

/// What to do with a run of motion that is still open when the sequence ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TrailingRun {
    /// Discard the run. A sequence that ends with motion, including one that
    /// is all motion, contributes no interval for that final run.
    #[default]
    Drop,
    /// Emit the run as `(start, N)`.
    Close,
}

/// Configuration for interval extraction.
///
/// # Parameters
///
/// - `frame_rate`: Flags per second, used to convert frames to seconds.
/// - `trailing_run`: Policy for a run still open at the end of the sequence.
/// - `clip_padding_seconds`: Pre-roll before each motion start when building
///   clip windows.
/// - `min_clip_seconds`: Lower bound on clip window duration.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ExtractionConfig {
    /// Motion flags per second.
    /// - Detector state polling: 1.0
    /// - Per-frame diffing: the stream frame rate
    pub frame_rate: f64,

    /// Handling of a run still open after the last flag.
    pub trailing_run: TrailingRun,

    /// Seconds of recording kept before each motion start.
    pub clip_padding_seconds: f64,

    /// Minimum clip duration in seconds.
    pub min_clip_seconds: f64,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            frame_rate: 1.0,
            trailing_run: TrailingRun::Drop,
            clip_padding_seconds: 15.0,
            min_clip_seconds: 15.0,
        }
    }
}

impl ExtractionConfig {
    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any parameter is out of valid range.
    pub fn validate(&self) -> Result<()> {
        if !self.frame_rate.is_finite() || self.frame_rate <= 0.0 {
            return Err(IntervalError::invalid_config(
                "frame_rate must be positive and finite",
            ));
        }
        if !self.clip_padding_seconds.is_finite() || self.clip_padding_seconds < 0.0 {
            return Err(IntervalError::invalid_config(
                "clip_padding_seconds must be non-negative and finite",
            ));
        }
        if !self.min_clip_seconds.is_finite() || self.min_clip_seconds < 0.0 {
            return Err(IntervalError::invalid_config(
                "min_clip_seconds must be non-negative and finite",
            ));
        }
        Ok(())
    }

    /// Preset for motion state polled once per second from a camera.
    #[must_use]
    pub fn polling() -> Self {
        Self::default()
    }

    /// Preset for flags computed on every frame of a video stream.
    ///
    /// # Arguments
    ///
    /// * `frame_rate` - Stream frame rate in frames per second.
    #[must_use]
    pub fn video(frame_rate: f64) -> Self {
        Self {
            frame_rate,
            clip_padding_seconds: 5.0,
            ..Self::default()
        }
    }

    /// Replace the trailing run policy.
    #[must_use]
    pub const fn with_trailing_run(mut self, trailing_run: TrailingRun) -> Self {
        self.trailing_run = trailing_run;
        self
    }

    /// Clip pre-roll in frames, rounded to the nearest frame.
    #[must_use]
    pub fn padding_frames(&self) -> usize {
        seconds_to_frames(self.clip_padding_seconds, self.frame_rate)
    }

    /// Minimum clip duration in frames, rounded to the nearest frame.
    #[must_use]
    pub fn min_clip_frames(&self) -> usize {
        seconds_to_frames(self.min_clip_seconds, self.frame_rate)
    }
}

fn seconds_to_frames(seconds: f64, frame_rate: f64) -> usize {
    (seconds * frame_rate).round().max(0.0) as usize
}
