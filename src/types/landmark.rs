//! Pose landmarks as delivered by the external pose estimator
//!
//! Indexing follows the 33-slot MediaPipe Pose layout. Only shoulders,
//! elbows, wrists and hips are read by the counter.

use serde::{Deserialize, Serialize};

pub const LEFT_SHOULDER: usize = 11;
pub const RIGHT_SHOULDER: usize = 12;
pub const LEFT_ELBOW: usize = 13;
pub const RIGHT_ELBOW: usize = 14;
pub const LEFT_WRIST: usize = 15;
pub const RIGHT_WRIST: usize = 16;
pub const LEFT_HIP: usize = 23;
pub const RIGHT_HIP: usize = 24;
pub const LEFT_KNEE: usize = 25;
pub const RIGHT_KNEE: usize = 26;
pub const LEFT_ANKLE: usize = 27;
pub const RIGHT_ANKLE: usize = 28;

/// Full landmark count produced per frame
pub const POSE_LANDMARK_COUNT: usize = 33;

/// Shortest slice the counter accepts (highest consumed index is RIGHT_HIP)
pub const REQUIRED_LANDMARKS: usize = RIGHT_HIP + 1;

/// A point in normalized image space
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3 {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn sub(self, other: Point3) -> Point3 {
        Point3::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }

    pub fn dot(self, other: Point3) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn length(self) -> f64 {
        self.dot(self).sqrt()
    }
}

/// One tracked body point with its confidence
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub z: f64,
    /// Confidence in [0, 1]
    #[serde(default)]
    pub visibility: f64,
}

impl Landmark {
    pub fn new(x: f64, y: f64, z: f64, visibility: f64) -> Self {
        Self { x, y, z, visibility }
    }

    /// Fully visible landmark in the image plane
    pub fn visible(x: f64, y: f64) -> Self {
        Self::new(x, y, 0.0, 1.0)
    }

    pub fn point(&self) -> Point3 {
        Point3::new(self.x, self.y, self.z)
    }
}
