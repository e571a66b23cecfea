//! Core modules for Repcount

pub mod geometry;
pub mod counter;
pub mod progress;
pub mod session;
pub mod replay;

pub use geometry::{angle_at_vertex, torso_angle};
pub use counter::{initial_state, elbow_angle, in_pushup_position, update, update_with, try_update, step};
pub use progress::{progress, progress_hue, Hsla};
pub use session::RepSession;
pub use replay::{FrameRecord, parse_frame_line, read_frames};
