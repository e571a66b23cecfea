//! Progress toward the next phase, for skeleton overlays
//!
//! UP: 0 at the up threshold, 1 once bent to the down threshold.
//! DOWN: 0 at the down threshold, 1 once extended to the up threshold.

use serde::{Deserialize, Serialize};
use crate::types::{CounterConfig, Phase};

/// Fraction of the hysteresis band already travelled, clamped to [0, 1]
pub fn progress(phase: Phase, smoothed_angle: f64, config: &CounterConfig) -> f64 {
    let band = config.up_threshold - config.down_threshold;
    let travelled = match phase {
        Phase::Up => config.up_threshold - smoothed_angle,
        Phase::Down => smoothed_angle - config.down_threshold,
    };
    let p = travelled / band;
    if p.is_nan() { 0.0 } else { p.clamp(0.0, 1.0) }
}

/// Hue in degrees: 0 (red) at no progress, 120 (green) when complete
pub fn progress_hue(progress: f64) -> f64 {
    progress.clamp(0.0, 1.0) * 120.0
}

/// Overlay color handed to renderers
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsla {
    pub hue: f64,
    pub saturation: f64,
    pub lightness: f64,
    pub alpha: f64,
}

impl Hsla {
    /// Fully saturated progress color
    pub fn from_progress(progress: f64, alpha: f64) -> Self {
        Self {
            hue: progress_hue(progress),
            saturation: 100.0,
            lightness: 50.0,
            alpha,
        }
    }

    pub fn to_css(&self) -> String {
        format!(
            "hsla({}, {}%, {}%, {})",
            self.hue, self.saturation, self.lightness, self.alpha
        )
    }
}
