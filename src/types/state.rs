//! Counter state threaded through successive frames

use serde::{Deserialize, Serialize};
use crate::types::Phase;

/// The whole memory of the counter. Updated by value, one frame at a time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RepCounterState {
    pub phase: Phase,
    /// Completed Down→Up cycles
    pub count: u32,
    /// Last raw elbow angle (degrees)
    pub raw_angle: f64,
    /// EMA-smoothed elbow angle (degrees)
    pub smoothed_angle: f64,
    /// Frames in a row supporting the pending transition
    pub consecutive_frames: u32,
    /// Caller clock at the last committed phase change (milliseconds)
    pub last_transition_ms: f64,
}

impl RepCounterState {
    /// Arms straight, nothing counted, no transition yet
    pub fn new() -> Self {
        Self::starting_at(0.0)
    }

    /// Initial state whose cooldown is measured from `now_ms`
    pub fn starting_at(now_ms: f64) -> Self {
        Self {
            phase: Phase::Up,
            count: 0,
            raw_angle: 180.0,
            smoothed_angle: 180.0,
            consecutive_frames: 0,
            last_transition_ms: now_ms,
        }
    }
}

impl Default for RepCounterState {
    fn default() -> Self {
        Self::new()
    }
}
