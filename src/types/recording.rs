//! Recorded frame trace and the end-of-session summary

use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use crate::types::{Phase, RepCounterState};

/// One row of a recorded angle trace
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordedFrame {
    /// Milliseconds since recording started
    pub t: u64,
    /// Raw angle rounded to 0.1°
    pub raw: f64,
    /// Smoothed angle rounded to 0.1°
    pub smoothed: f64,
    pub phase: Phase,
    pub count: u32,
}

impl RecordedFrame {
    pub fn capture(state: &RepCounterState, since_start_ms: f64) -> Self {
        Self {
            t: since_start_ms.max(0.0).round() as u64,
            raw: round_tenth(state.raw_angle),
            smoothed: round_tenth(state.smoothed_angle),
            phase: state.phase,
            count: state.count,
        }
    }
}

fn round_tenth(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

/// What a host persists once a session ends
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSummary {
    pub count: u32,
    pub duration_ms: u64,
    pub started_at: DateTime<Utc>,
}
