//! Push-up phase definitions

use colored::Color;
use serde::{Deserialize, Serialize};

/// Arms extended (Up) or bent past the down threshold (Down)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Up,
    Down,
}

impl Phase {
    /// The only phase this one may move to
    pub fn next(&self) -> Phase {
        match self {
            Phase::Up => Phase::Down,
            Phase::Down => Phase::Up,
        }
    }

    /// Terminal color for this phase
    pub fn color(&self) -> Color {
        match self {
            Phase::Up => Color::Green,
            Phase::Down => Color::Yellow,
        }
    }

    pub fn arrow(&self) -> &'static str {
        match self {
            Phase::Up => "▲",
            Phase::Down => "▼",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Phase::Up => "UP",
            Phase::Down => "DOWN",
        };
        write!(f, "{}", name)
    }
}
