//! Motion Intervals Library
//!
//! Collapses per-frame motion detection flags into the frame intervals during
//! which motion was detected.
//!
//! A camera toolkit samples "is there motion?" once per frame or once per
//! poll. Storing or reporting every sample is wasteful; this library reduces
//! the sequence to a compact list of half-open `[start, end)` frame ranges.
//!
//! # Features
//!
//! - **Single pass**: O(N) time, O(1) scratch state
//! - **Explicit trailing policy**: a run still open at the end of the
//!   sequence is dropped by default, or closed on request
//! - **Clip windows**: padded frame ranges for fetching recordings
//! - **Validation**: check stored interval lists against their source flags
//!
//! # Quick Start
//!
//! ```
//! use motion_intervals::{extract_intervals, summarize};
//!
//! let motions = [false, true, true, false, false, true, false];
//! let intervals = extract_intervals(&motions);
//!
//! let pairs: Vec<(usize, usize)> = intervals.iter().map(|&i| i.into()).collect();
//! assert_eq!(pairs, vec![(1, 3), (5, 6)]);
//!
//! let summary = summarize(&motions, &intervals);
//! assert_eq!(summary.active_frames, 3);
//! ```
//!
//! # Trailing Runs
//!
//! A run of motion that reaches the end of the sequence has not been seen to
//! end, and [`extract_intervals`] does not report it:
//!
//! ```
//! use motion_intervals::{extract_intervals, extract_intervals_with, ExtractionConfig, TrailingRun};
//!
//! let motions = [true, true, true];
//! assert!(extract_intervals(&motions).is_empty());
//!
//! let config = ExtractionConfig::default().with_trailing_run(TrailingRun::Close);
//! assert_eq!(extract_intervals_with(&motions, &config).len(), 1);
//! ```

#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]

pub mod clip;
pub mod config;
pub mod error;
pub mod extractor;
pub mod interval;
pub mod summary;
pub mod validation;

// Re-exports for convenient access
pub use clip::{clip_window, clip_windows, merge_clips, ClipWindow};
pub use config::{ExtractionConfig, TrailingRun};
pub use error::{IntervalError, Result};
pub use extractor::{extract_intervals, extract_intervals_with, extract_pairs, trailing_run};
pub use interval::Interval;
pub use summary::{summarize, IntervalSummary};
pub use validation::validate_intervals;

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
