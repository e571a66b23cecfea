//! Rep session: owns one counter state for the lifetime of a workout
//!
//! Wraps the pure counter with a session clock, per-frame reason codes,
//! an optional angle recording and the summary a host persists.

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use crate::LIVE_FRAME_WINDOW;
use crate::core::counter::{check_len, initial_state, step};
use crate::core::progress::progress;
use crate::error::Result;
use crate::types::{
    CounterConfig, FrameOutput, Landmark, Phase, ReasonCode, RecordedFrame, RepCounterState,
    SessionSummary,
};

#[derive(Debug)]
struct Recording {
    start_ms: f64,
    frames: Vec<RecordedFrame>,
    active: bool,
}

/// A single-person counting session. Not shared; one caller drives it.
#[derive(Debug)]
pub struct RepSession {
    config: CounterConfig,
    state: RepCounterState,
    /// Caller clock when the session (re)started
    started_ms: f64,
    started_at: DateTime<Utc>,
    recording: Option<Recording>,
    frames_processed: u64,
    frames_skipped: u64,
}

impl RepSession {
    /// Start a session with default thresholds
    pub fn new(now_ms: f64) -> Self {
        Self::build(CounterConfig::default(), now_ms)
    }

    /// Start a session with custom thresholds
    pub fn with_config(config: CounterConfig, now_ms: f64) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(config, now_ms))
    }

    fn build(config: CounterConfig, now_ms: f64) -> Self {
        Self {
            config,
            state: initial_state(),
            started_ms: now_ms,
            started_at: Utc::now(),
            recording: None,
            frames_processed: 0,
            frames_skipped: 0,
        }
    }

    /// Feed one frame of landmarks
    pub fn process(&mut self, landmarks: &[Landmark], now_ms: f64) -> FrameOutput {
        let prev = self.state;
        let (next, reason) = step(&self.config, prev, landmarks, now_ms);
        self.state = next;
        self.frames_processed += 1;

        match reason {
            ReasonCode::R001_NO_USABLE_ARM => {
                self.frames_skipped += 1;
                debug!(t_ms = now_ms, "frame skipped: no usable arm");
            }
            ReasonCode::R003_DEBOUNCE_RESET => {
                debug!(t_ms = now_ms, smoothed = next.smoothed_angle, "pending transition cancelled");
            }
            ReasonCode::R005_TRANSITION_TO_DOWN => {
                info!(t_ms = now_ms, smoothed = next.smoothed_angle, "phase → DOWN");
            }
            ReasonCode::R005_TRANSITION_TO_UP => {
                info!(t_ms = now_ms, count = next.count, "rep counted");
            }
            _ => {}
        }

        if let Some(rec) = self.recording.as_mut().filter(|r| r.active) {
            // Skipped frames are recorded too, so gaps in tracking stay visible
            rec.frames.push(RecordedFrame::capture(&next, now_ms - rec.start_ms));
        }

        let p = progress(next.phase, next.smoothed_angle, &self.config);
        FrameOutput::new(&prev, &next, now_ms, p, reason)
    }

    /// Like [`process`](Self::process), but a short landmark slice is an error
    pub fn try_process(&mut self, landmarks: &[Landmark], now_ms: f64) -> Result<FrameOutput> {
        check_len(landmarks)?;
        Ok(self.process(landmarks, now_ms))
    }

    /// Back to a fresh state; the session clock restarts at `now_ms`
    pub fn reset(&mut self, now_ms: f64) {
        info!(count = self.state.count, "session reset");
        self.state = initial_state();
        self.started_ms = now_ms;
        self.started_at = Utc::now();
        self.frames_processed = 0;
        self.frames_skipped = 0;
    }

    // =========================================================================
    // Recording
    // =========================================================================

    /// Begin a fresh recording; any previous one is discarded
    pub fn start_recording(&mut self, now_ms: f64) {
        self.recording = Some(Recording {
            start_ms: now_ms,
            frames: Vec::new(),
            active: true,
        });
    }

    /// Stop recording and hand back everything captured
    ///
    /// The frames stay available through [`recorded_frames`](Self::recorded_frames)
    /// until [`clear_recording`](Self::clear_recording).
    pub fn stop_recording(&mut self) -> Vec<RecordedFrame> {
        match self.recording.as_mut() {
            Some(rec) => {
                rec.active = false;
                rec.frames.clone()
            }
            None => Vec::new(),
        }
    }

    pub fn clear_recording(&mut self) {
        self.recording = None;
    }

    pub fn is_recording(&self) -> bool {
        self.recording.as_ref().is_some_and(|r| r.active)
    }

    pub fn recorded_frames(&self) -> &[RecordedFrame] {
        self.recording.as_ref().map(|r| r.frames.as_slice()).unwrap_or(&[])
    }

    /// Most recent frames of an active recording
    pub fn live_frames(&self) -> &[RecordedFrame] {
        match self.recording.as_ref() {
            Some(rec) if rec.active => {
                let start = rec.frames.len().saturating_sub(LIVE_FRAME_WINDOW);
                &rec.frames[start..]
            }
            _ => &[],
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn state(&self) -> &RepCounterState {
        &self.state
    }

    pub fn config(&self) -> &CounterConfig {
        &self.config
    }

    pub fn count(&self) -> u32 {
        self.state.count
    }

    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    pub fn smoothed_angle(&self) -> f64 {
        self.state.smoothed_angle
    }

    /// Progress toward the next phase, [0, 1]
    pub fn progress(&self) -> f64 {
        progress(self.state.phase, self.state.smoothed_angle, &self.config)
    }

    pub fn frames_processed(&self) -> u64 {
        self.frames_processed
    }

    pub fn frames_skipped(&self) -> u64 {
        self.frames_skipped
    }

    /// Elapsed session time on the caller clock
    pub fn duration_ms(&self, now_ms: f64) -> u64 {
        (now_ms - self.started_ms).max(0.0).round() as u64
    }

    /// Final count and duration for persistence by the host
    pub fn summary(&self, now_ms: f64) -> SessionSummary {
        SessionSummary {
            count: self.state.count,
            duration_ms: self.duration_ms(now_ms),
            started_at: self.started_at,
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
