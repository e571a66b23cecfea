//! Integration tests for RepSession
//!
//! Tests the host-facing path: frames → session → output signals,
//! recording and summary

mod common;

use common::{invisible_pose, pushup_pose, REP};
use repcount::core::{progress, Hsla, RepSession};
use repcount::types::{CounterConfig, FrameOutput, Phase, ReasonCode, RecordedFrame};

fn run_reps(session: &mut RepSession, reps: usize, t: &mut f64) -> Vec<FrameOutput> {
    let mut out = Vec::new();
    for _ in 0..reps {
        for &a in REP.iter() {
            out.push(session.process(&pushup_pose(a), *t));
            *t += 400.0;
        }
    }
    out
}

/// One counted signal per rep, two phase changes per rep
#[test]
fn test_signals_per_rep() {
    let mut session = RepSession::new(0.0);
    let mut t = 1000.0;
    let out = run_reps(&mut session, 3, &mut t);

    assert_eq!(out.iter().filter(|o| o.counted).count(), 3);
    assert_eq!(out.iter().filter(|o| o.phase_changed).count(), 6);
    assert_eq!(session.count(), 3);
    assert!(out.iter().all(|o| !o.skipped));
}

/// Reason codes follow the debounce sequence
#[test]
fn test_reason_sequence() {
    let mut session = RepSession::new(0.0);
    let mut t = 1000.0;
    let reasons: Vec<ReasonCode> = run_reps(&mut session, 1, &mut t)
        .into_iter()
        .map(|o| o.reason)
        .collect();

    assert_eq!(
        reasons,
        vec![
            ReasonCode::R002_PHASE_UP,
            ReasonCode::R002_PHASE_UP,
            ReasonCode::R003_DEBOUNCE_ACCUMULATING,
            ReasonCode::R005_TRANSITION_TO_DOWN,
            ReasonCode::R002_PHASE_DOWN,
            ReasonCode::R003_DEBOUNCE_ACCUMULATING,
            ReasonCode::R005_TRANSITION_TO_UP,
        ]
    );
}

/// Invisible frames are flagged and leave the state alone
#[test]
fn test_skipped_frames() {
    let mut session = RepSession::new(0.0);
    let mut t = 1000.0;
    run_reps(&mut session, 1, &mut t);
    let before = *session.state();

    for _ in 0..5 {
        let out = session.process(&invisible_pose(90.0), t);
        assert!(out.skipped);
        assert_eq!(out.reason, ReasonCode::R001_NO_USABLE_ARM);
        t += 400.0;
    }
    assert_eq!(*session.state(), before);
    assert_eq!(session.frames_skipped(), 5);
}

/// Output progress matches the standalone metric
#[test]
fn test_progress_in_output() {
    let mut session = RepSession::new(0.0);
    let out = session.process(&pushup_pose(90.0), 1000.0);
    // smoothed 144° in UP: not yet inside the band
    assert_eq!(out.progress, 0.0);

    let out = session.process(&pushup_pose(90.0), 1400.0);
    let expected = progress(Phase::Up, out.smoothed_angle, &CounterConfig::default());
    assert!((out.progress - expected).abs() < 1e-12);
    assert!(out.progress > 0.5);

    let color = Hsla::from_progress(session.progress(), 1.0);
    assert!(color.hue > 60.0 && color.hue <= 120.0);
}

/// Custom thresholds flow through the session
#[test]
fn test_custom_config() {
    let config = CounterConfig { debounce_frames: 1, ..CounterConfig::default() };
    let mut session = RepSession::with_config(config, 0.0).unwrap();
    session.process(&pushup_pose(90.0), 1000.0);
    session.process(&pushup_pose(90.0), 1400.0);
    // 109.44° smoothed, one frame is enough
    let out = session.process(&pushup_pose(90.0), 1800.0);
    assert_eq!(out.reason, ReasonCode::R005_TRANSITION_TO_DOWN);
}

/// Recording captures every processed frame and serializes
#[test]
fn test_recording_roundtrip_json() {
    let mut session = RepSession::new(0.0);
    let mut t = 1000.0;
    session.start_recording(t);
    run_reps(&mut session, 2, &mut t);
    session.process(&invisible_pose(90.0), t);

    let frames = session.stop_recording();
    assert_eq!(frames.len(), 2 * REP.len() + 1);
    assert_eq!(frames.last().map(|f| f.count), Some(2));
    assert!(frames.windows(2).all(|w| w[0].t < w[1].t));

    let json = serde_json::to_string(&frames).unwrap();
    assert!(json.contains("\"phase\":\"down\""));
    let back: Vec<RecordedFrame> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, frames);
}

/// Lost-pose frames still leave a row, carrying the unchanged state
#[test]
fn test_recording_keeps_tracking_gaps() {
    let mut session = RepSession::new(0.0);
    session.start_recording(1000.0);

    session.process(&pushup_pose(120.0), 1000.0);
    session.process(&invisible_pose(90.0), 1400.0);
    session.process(&invisible_pose(90.0), 1800.0);
    session.process(&pushup_pose(120.0), 2200.0);

    let frames = session.stop_recording();
    let times: Vec<u64> = frames.iter().map(|f| f.t).collect();
    assert_eq!(times, vec![0, 400, 800, 1200]);
    assert_eq!(frames[1].smoothed, frames[0].smoothed);
    assert_eq!(frames[2].raw, frames[0].raw);
    assert!(frames[3].smoothed < frames[2].smoothed);
    assert_eq!(session.frames_skipped(), 2);
}

/// Reset wipes the count and restarts the clock
#[test]
fn test_reset_and_summary() {
    let mut session = RepSession::new(1000.0);
    let mut t = 1000.0;
    run_reps(&mut session, 2, &mut t);

    let summary = session.summary(t);
    assert_eq!(summary.count, 2);
    assert_eq!(summary.duration_ms, (t - 1000.0) as u64);

    session.reset(t);
    assert_eq!(session.count(), 0);
    assert_eq!(session.phase(), Phase::Up);
    assert_eq!(session.summary(t + 250.0).duration_ms, 250);

    // Counting works again after reset
    run_reps(&mut session, 1, &mut t);
    assert_eq!(session.count(), 1);
}

/// Summary JSON carries what a host stores
#[test]
fn test_summary_json() {
    let session = RepSession::new(0.0);
    let json = serde_json::to_string(&session.summary(5000.0)).unwrap();
    assert!(json.contains("\"count\":0"));
    assert!(json.contains("\"duration_ms\":5000"));
    assert!(json.contains("\"started_at\""));
}

/// Frame output JSON is valid and round-trips
#[test]
fn test_output_json() {
    let mut session = RepSession::new(0.0);
    let output = session.process(&pushup_pose(120.0), 1000.0);

    let json = serde_json::to_string(&output).unwrap();
    assert!(json.contains("\"phase\""));
    assert!(json.contains("\"count\""));
    assert!(json.contains("\"reason\""));

    let _: FrameOutput = serde_json::from_str(&json).unwrap();
}
