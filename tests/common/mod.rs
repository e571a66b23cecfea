//! Synthetic landmark frames for integration tests

#![allow(dead_code)]

use repcount::types::{
    Landmark, LEFT_ELBOW, LEFT_HIP, LEFT_SHOULDER, LEFT_WRIST, POSE_LANDMARK_COUNT,
    RIGHT_ELBOW, RIGHT_HIP, RIGHT_SHOULDER, RIGHT_WRIST,
};

const UPPER_ARM: f64 = 0.15;

/// Both arms bent to `angle` degrees, torso horizontal, visibility 1.0
pub fn pushup_pose(angle: f64) -> Vec<Landmark> {
    let mut lms = vec![Landmark::default(); POSE_LANDMARK_COUNT];
    set_arm(&mut lms, LEFT_SHOULDER, LEFT_ELBOW, LEFT_WRIST, 0.30, angle);
    set_arm(&mut lms, RIGHT_SHOULDER, RIGHT_ELBOW, RIGHT_WRIST, 0.32, angle);
    lms[LEFT_HIP] = Landmark::visible(0.70, 0.42);
    lms[RIGHT_HIP] = Landmark::visible(0.72, 0.43);
    lms
}

/// Same arms, but hips straight below the shoulders
pub fn standing_pose(angle: f64) -> Vec<Landmark> {
    let mut lms = pushup_pose(angle);
    lms[LEFT_HIP] = Landmark::visible(0.31, 0.80);
    lms[RIGHT_HIP] = Landmark::visible(0.33, 0.80);
    lms
}

/// Every landmark at zero visibility
pub fn invisible_pose(angle: f64) -> Vec<Landmark> {
    pushup_pose(angle)
        .into_iter()
        .map(|lm| Landmark { visibility: 0.0, ..lm })
        .collect()
}

/// Set one arm so the shoulder-elbow-wrist angle is `angle`
pub fn set_arm(lms: &mut [Landmark], s: usize, e: usize, w: usize, x: f64, angle: f64) {
    let rad = angle.to_radians();
    lms[s] = Landmark::visible(x, 0.40);
    lms[e] = Landmark::visible(x, 0.40 + UPPER_ARM);
    lms[w] = Landmark::visible(
        x + rad.sin() * UPPER_ARM,
        0.40 + UPPER_ARM - rad.cos() * UPPER_ARM,
    );
}

/// Angles for one full rep: 4 frames bent, 3 frames extended
pub const REP: [f64; 7] = [90.0, 90.0, 90.0, 90.0, 170.0, 170.0, 170.0];
