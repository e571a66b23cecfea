//! Repcount: push-up repetition counter over pose landmarks
//!
//! Landmarks → elbow angle → EMA smoothing → gated Up/Down machine → count

pub mod core;
pub mod error;
pub mod types;

pub use crate::core::{angle_at_vertex, initial_state, try_update, update, update_with, RepSession};
pub use error::{RepError, Result};

// =============================================================================
// PHASE THRESHOLDS
// =============================================================================

/// Smoothed elbow angle below which an Up phase starts arming a Down commit
pub const ANGLE_DOWN_THRESHOLD: f64 = 110.0;

/// Smoothed elbow angle above which a Down phase starts arming an Up commit
pub const ANGLE_UP_THRESHOLD: f64 = 140.0;

// =============================================================================
// FILTERING
// =============================================================================

/// EMA weight of the newest raw angle
pub const SMOOTHING: f64 = 0.4;

/// Consecutive qualifying frames required to commit a transition
pub const DEBOUNCE_FRAMES: u32 = 2;

/// Minimum time since the last commit before a new one is evaluated (milliseconds)
pub const MIN_TRANSITION_MS: f64 = 300.0;

// =============================================================================
// GATES
// =============================================================================

/// A joint group is usable only when every member is strictly above this
pub const MIN_VISIBILITY: f64 = 0.5;

/// Torso angle from horizontal (degrees) that still counts as push-up position
pub const MAX_TORSO_ANGLE: f64 = 45.0;

// =============================================================================
// SESSION
// =============================================================================

/// Recorded frames exposed by the live view
pub const LIVE_FRAME_WINDOW: usize = 8;

// =============================================================================
// VERSION
// =============================================================================

pub const VERSION: &str = "1.0.0";
