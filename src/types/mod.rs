//! Core types for Repcount

mod landmark;
mod phase;
mod state;
mod config;
mod reason;
mod output;
mod recording;

pub use landmark::{
    Landmark, Point3,
    LEFT_SHOULDER, RIGHT_SHOULDER, LEFT_ELBOW, RIGHT_ELBOW, LEFT_WRIST, RIGHT_WRIST,
    LEFT_HIP, RIGHT_HIP, LEFT_KNEE, RIGHT_KNEE, LEFT_ANKLE, RIGHT_ANKLE,
    POSE_LANDMARK_COUNT, REQUIRED_LANDMARKS,
};
pub use phase::Phase;
pub use state::RepCounterState;
pub use config::CounterConfig;
pub use reason::ReasonCode;
pub use output::FrameOutput;
pub use recording::{RecordedFrame, SessionSummary};
