//! Serialization of intervals and reports for the storage layer.
//!
//! Run with: cargo test --features serde --test export_intervals

#![cfg(feature = "serde")]

use motion_intervals::{
    clip_windows, extract_intervals, summarize, ExtractionConfig, Interval, IntervalSummary,
    TrailingRun,
};
use serde::Serialize;

#[derive(Serialize)]
struct MotionReport {
    channel: u32,
    intervals: Vec<Interval>,
    summary: IntervalSummary,
    config: ExtractionConfig,
}

fn sample_motions() -> Vec<bool> {
    let mut motions = vec![false; 60];
    for frame in (10..14).chain(30..31).chain(58..60) {
        motions[frame] = true;
    }
    motions
}

#[test]
fn test_interval_json_shape() {
    let interval = Interval::new(3, 9).unwrap();
    let value = serde_json::to_value(interval).expect("Failed to serialize");
    assert_eq!(value, serde_json::json!({ "start": 3, "end": 9 }));

    let parsed: Interval = serde_json::from_str(r#"{"start":3,"end":9}"#).unwrap();
    assert_eq!(parsed, interval);
}

#[test]
fn test_trailing_run_json() {
    assert_eq!(
        serde_json::to_string(&TrailingRun::Drop).unwrap(),
        r#""Drop""#
    );
    let parsed: TrailingRun = serde_json::from_str(r#""Close""#).unwrap();
    assert_eq!(parsed, TrailingRun::Close);
}

#[test]
fn test_motion_report() {
    let motions = sample_motions();
    let config = ExtractionConfig::polling();
    let intervals = extract_intervals(&motions);

    let report = MotionReport {
        channel: 2,
        summary: summarize(&motions, &intervals),
        intervals,
        config,
    };

    let value = serde_json::to_value(&report).expect("Failed to serialize");
    assert_eq!(value["intervals"].as_array().map(Vec::len), Some(2));
    assert_eq!(value["intervals"][0]["start"], 10);
    assert_eq!(value["summary"]["active_frames"], 5);
    assert_eq!(value["summary"]["trailing_run_start"], 58);
    assert_eq!(value["config"]["trailing_run"], "Drop");
}

#[test]
fn test_clip_windows_json() {
    let motions = sample_motions();
    let config = ExtractionConfig::polling();
    let intervals = extract_intervals(&motions);
    let clips = clip_windows(&intervals, &config, motions.len()).unwrap();

    let json = serde_json::to_string(&clips).expect("Failed to serialize");
    assert_eq!(json, r#"[{"start":0,"end":19},{"start":15,"end":31}]"#);
}
