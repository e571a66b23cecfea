//! Reason codes explaining each frame outcome

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[allow(non_camel_case_types)]
pub enum ReasonCode {
    // =========================================================================
    // R001: Input
    // =========================================================================
    /// No arm visible enough for an elbow angle, frame ignored
    R001_NO_USABLE_ARM,

    // =========================================================================
    // R002: Phase held
    // =========================================================================
    /// Phase is UP, angle does not support going down
    R002_PHASE_UP,
    /// Phase is DOWN, angle does not support going up
    R002_PHASE_DOWN,

    // =========================================================================
    // R003: Debounce
    // =========================================================================
    /// Qualifying frame, streak building toward a commit
    R003_DEBOUNCE_ACCUMULATING,
    /// Non-qualifying frame cancelled a pending streak
    R003_DEBOUNCE_RESET,

    // =========================================================================
    // R004: Gates
    // =========================================================================
    /// Too soon after the last commit
    R004_COOLDOWN_ACTIVE,
    /// Torso not horizontal enough
    R004_NOT_IN_POSITION,

    // =========================================================================
    // R005: Transitions
    // =========================================================================
    /// Committed UP → DOWN
    R005_TRANSITION_TO_DOWN,
    /// Committed DOWN → UP, rep counted
    R005_TRANSITION_TO_UP,
}

impl ReasonCode {
    /// Get the code string (for logging)
    pub fn code(&self) -> &'static str {
        match self {
            Self::R001_NO_USABLE_ARM => "R001_NO_USABLE_ARM",
            Self::R002_PHASE_UP => "R002_PHASE_UP",
            Self::R002_PHASE_DOWN => "R002_PHASE_DOWN",
            Self::R003_DEBOUNCE_ACCUMULATING => "R003_DEBOUNCE_ACCUMULATING",
            Self::R003_DEBOUNCE_RESET => "R003_DEBOUNCE_RESET",
            Self::R004_COOLDOWN_ACTIVE => "R004_COOLDOWN_ACTIVE",
            Self::R004_NOT_IN_POSITION => "R004_NOT_IN_POSITION",
            Self::R005_TRANSITION_TO_DOWN => "R005_TRANSITION_TO_DOWN",
            Self::R005_TRANSITION_TO_UP => "R005_TRANSITION_TO_UP",
        }
    }

    /// Get human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            Self::R001_NO_USABLE_ARM => "No arm visible, frame skipped",
            Self::R002_PHASE_UP => "Holding UP",
            Self::R002_PHASE_DOWN => "Holding DOWN",
            Self::R003_DEBOUNCE_ACCUMULATING => "Confirming transition",
            Self::R003_DEBOUNCE_RESET => "Pending transition cancelled",
            Self::R004_COOLDOWN_ACTIVE => "Cooldown after last transition",
            Self::R004_NOT_IN_POSITION => "Not in push-up position",
            Self::R005_TRANSITION_TO_DOWN => "Entering DOWN",
            Self::R005_TRANSITION_TO_UP => "Back UP - rep counted",
        }
    }

    /// Is this a committed phase change?
    pub fn is_transition(&self) -> bool {
        matches!(self, Self::R005_TRANSITION_TO_DOWN | Self::R005_TRANSITION_TO_UP)
    }
}

impl std::fmt::Display for ReasonCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code(), self.description())
    }
}
