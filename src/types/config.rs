//! Tunable counter thresholds
//!
//! Defaults mirror the crate-level constants. A TOML file may override any
//! subset of fields.

use std::fs;
use std::path::Path;
use serde::{Deserialize, Serialize};
use crate::{
    ANGLE_DOWN_THRESHOLD, ANGLE_UP_THRESHOLD, SMOOTHING, DEBOUNCE_FRAMES,
    MIN_TRANSITION_MS, MIN_VISIBILITY, MAX_TORSO_ANGLE,
};
use crate::error::{RepError, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CounterConfig {
    /// Smoothed angle below which Down arms (degrees)
    pub down_threshold: f64,
    /// Smoothed angle above which Up arms (degrees)
    pub up_threshold: f64,
    /// EMA weight of the newest raw angle
    pub smoothing: f64,
    /// Consecutive qualifying frames needed to commit a transition
    pub debounce_frames: u32,
    /// Cooldown after a committed transition (milliseconds)
    pub min_transition_ms: f64,
    /// Joint visibility a side must strictly exceed to be used
    pub min_visibility: f64,
    /// Max torso angle from horizontal (degrees)
    pub max_torso_angle: f64,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            down_threshold: ANGLE_DOWN_THRESHOLD,
            up_threshold: ANGLE_UP_THRESHOLD,
            smoothing: SMOOTHING,
            debounce_frames: DEBOUNCE_FRAMES,
            min_transition_ms: MIN_TRANSITION_MS,
            min_visibility: MIN_VISIBILITY,
            max_torso_angle: MAX_TORSO_ANGLE,
        }
    }
}

impl CounterConfig {
    /// Reject configurations that would break the hysteresis band or the filters
    pub fn validate(&self) -> Result<()> {
        if !(self.down_threshold < self.up_threshold) {
            return Err(RepError::InvalidConfig(format!(
                "down_threshold ({}) must be below up_threshold ({})",
                self.down_threshold, self.up_threshold
            )));
        }
        if !(self.smoothing > 0.0 && self.smoothing <= 1.0) {
            return Err(RepError::InvalidConfig(format!(
                "smoothing must be in (0, 1], got {}",
                self.smoothing
            )));
        }
        if self.debounce_frames == 0 {
            return Err(RepError::InvalidConfig("debounce_frames must be at least 1".into()));
        }
        if !(self.min_transition_ms >= 0.0) {
            return Err(RepError::InvalidConfig(format!(
                "min_transition_ms must be non-negative, got {}",
                self.min_transition_ms
            )));
        }
        if !(0.0..=1.0).contains(&self.min_visibility) {
            return Err(RepError::InvalidConfig(format!(
                "min_visibility must be in [0, 1], got {}",
                self.min_visibility
            )));
        }
        if !(self.max_torso_angle > 0.0 && self.max_torso_angle <= 90.0) {
            return Err(RepError::InvalidConfig(format!(
                "max_torso_angle must be in (0, 90], got {}",
                self.max_torso_angle
            )));
        }
        Ok(())
    }

    /// Parse and validate a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: CounterConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}
