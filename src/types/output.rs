//! Per-frame output for hosts and terminal display

use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use colored::Colorize;
use crate::types::{Phase, ReasonCode, RepCounterState};

/// What one processed frame did to the session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameOutput {
    /// Wall-clock time the frame was processed
    pub timestamp: DateTime<Utc>,
    /// Caller clock for this frame (milliseconds)
    pub t_ms: f64,
    pub phase: Phase,
    pub count: u32,
    pub raw_angle: f64,
    pub smoothed_angle: f64,
    /// Progress toward the next phase, [0, 1]
    pub progress: f64,
    /// Count went up on this frame
    pub counted: bool,
    pub phase_changed: bool,
    /// Frame ignored for lack of a usable arm
    pub skipped: bool,
    pub reason: ReasonCode,
}

impl FrameOutput {
    /// Build output from the states before and after a frame
    pub fn new(
        prev: &RepCounterState,
        next: &RepCounterState,
        t_ms: f64,
        progress: f64,
        reason: ReasonCode,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            t_ms,
            phase: next.phase,
            count: next.count,
            raw_angle: next.raw_angle,
            smoothed_angle: next.smoothed_angle,
            progress,
            counted: next.count != prev.count,
            phase_changed: next.phase != prev.phase,
            skipped: reason == ReasonCode::R001_NO_USABLE_ARM,
            reason,
        }
    }

    /// Format for terminal display (with colors)
    pub fn to_terminal_string(&self) -> String {
        let line = format!(
            "{} #{} | phase={} | angle={:.1}° ~{:.1}° | progress={:.0}% | {}",
            self.phase.arrow(),
            self.count,
            self.phase,
            self.raw_angle,
            self.smoothed_angle,
            self.progress * 100.0,
            self.reason.code()
        );
        if self.skipped {
            line.dimmed().to_string()
        } else if self.counted {
            line.color(self.phase.color()).bold().to_string()
        } else {
            line.color(self.phase.color()).to_string()
        }
    }

    /// Format for parseable output (no colors)
    pub fn to_parseable_string(&self) -> String {
        format!(
            "t={:.0} | count={} | phase={} | raw={:.1} | smoothed={:.1} | reason={}",
            self.t_ms,
            self.count,
            self.phase,
            self.raw_angle,
            self.smoothed_angle,
            self.reason.code()
        )
    }
}
