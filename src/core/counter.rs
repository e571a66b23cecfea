//! Rep counter: pure Up/Down state machine over landmark frames
//!
//! Per frame:
//! - no usable arm → state returned untouched
//! - EMA-smooth the elbow angle
//! - only past the cooldown AND in push-up position:
//!   - UP → DOWN: smoothed < down threshold for `debounce_frames` frames
//!   - DOWN → UP: smoothed > up threshold for `debounce_frames` frames, count += 1
//!   - anything else cancels the pending streak
//!
//! The 110°/140° band is hysteresis: the dead zone between them must be
//! crossed before the opposite transition can arm.

use crate::core::geometry::{angle_at_vertex, torso_angle};
use crate::error::{RepError, Result};
use crate::types::{
    CounterConfig, Landmark, Phase, ReasonCode, RepCounterState,
    LEFT_SHOULDER, RIGHT_SHOULDER, LEFT_ELBOW, RIGHT_ELBOW, LEFT_WRIST, RIGHT_WRIST,
    LEFT_HIP, RIGHT_HIP, REQUIRED_LANDMARKS,
};

/// Fresh counter state: UP, zero reps, arms at 180°
pub fn initial_state() -> RepCounterState {
    RepCounterState::new()
}

/// Representative elbow angle, or `None` when neither arm is visible enough
///
/// With both arms visible the smaller angle wins, so a single straight arm
/// cannot fake DOWN and a single bent arm cannot hold off UP.
pub fn elbow_angle(landmarks: &[Landmark], config: &CounterConfig) -> Option<f64> {
    if landmarks.len() < REQUIRED_LANDMARKS {
        return None;
    }

    let left = arm_angle(landmarks, LEFT_SHOULDER, LEFT_ELBOW, LEFT_WRIST, config);
    let right = arm_angle(landmarks, RIGHT_SHOULDER, RIGHT_ELBOW, RIGHT_WRIST, config);

    match (left, right) {
        (Some(l), Some(r)) => Some(l.min(r)),
        (l, r) => l.or(r),
    }
}

fn arm_angle(
    landmarks: &[Landmark],
    shoulder: usize,
    elbow: usize,
    wrist: usize,
    config: &CounterConfig,
) -> Option<f64> {
    let (s, e, w) = (&landmarks[shoulder], &landmarks[elbow], &landmarks[wrist]);
    let visibility = s.visibility.min(e.visibility).min(w.visibility);
    if visibility > config.min_visibility {
        Some(angle_at_vertex(s.point(), e.point(), w.point()))
    } else {
        None
    }
}

/// Is the torso close enough to horizontal to be doing push-ups?
///
/// Uses the better-visible shoulder/hip pair (left on ties). With no
/// usable pair the gate stays open; arm visibility already gates the angle.
pub fn in_pushup_position(landmarks: &[Landmark], config: &CounterConfig) -> bool {
    if landmarks.len() < REQUIRED_LANDMARKS {
        return true;
    }

    let (ls, lh) = (&landmarks[LEFT_SHOULDER], &landmarks[LEFT_HIP]);
    let (rs, rh) = (&landmarks[RIGHT_SHOULDER], &landmarks[RIGHT_HIP]);

    let left_vis = ls.visibility.min(lh.visibility);
    let right_vis = rs.visibility.min(rh.visibility);

    let (shoulder, hip) = if left_vis >= right_vis && left_vis > config.min_visibility {
        (ls, lh)
    } else if right_vis > config.min_visibility {
        (rs, rh)
    } else {
        return true;
    };

    torso_angle(shoulder.point(), hip.point()) < config.max_torso_angle
}

/// Advance the counter by one frame with default thresholds
///
/// Total: frames without a usable arm, or slices shorter than the landmark
/// map, return `state` unchanged.
pub fn update(state: RepCounterState, landmarks: &[Landmark], now_ms: f64) -> RepCounterState {
    update_with(&CounterConfig::default(), state, landmarks, now_ms)
}

/// Advance the counter by one frame with custom thresholds
pub fn update_with(
    config: &CounterConfig,
    state: RepCounterState,
    landmarks: &[Landmark],
    now_ms: f64,
) -> RepCounterState {
    step(config, state, landmarks, now_ms).0
}

/// Like [`update`], but a landmark slice shorter than the index map is an error
pub fn try_update(state: RepCounterState, landmarks: &[Landmark], now_ms: f64) -> Result<RepCounterState> {
    check_len(landmarks)?;
    Ok(update(state, landmarks, now_ms))
}

pub(crate) fn check_len(landmarks: &[Landmark]) -> Result<()> {
    if landmarks.len() < REQUIRED_LANDMARKS {
        return Err(RepError::InvalidInput {
            required: REQUIRED_LANDMARKS,
            actual: landmarks.len(),
        });
    }
    Ok(())
}

/// One frame of the machine, with the reason for its outcome
///
/// `now_ms` must not go backwards between calls. If it does, the cooldown
/// gate simply stays closed for those frames.
pub fn step(
    config: &CounterConfig,
    prev: RepCounterState,
    landmarks: &[Landmark],
    now_ms: f64,
) -> (RepCounterState, ReasonCode) {
    let raw = match elbow_angle(landmarks, config) {
        Some(angle) => angle,
        None => return (prev, ReasonCode::R001_NO_USABLE_ARM),
    };

    let smoothed = prev.smoothed_angle * (1.0 - config.smoothing) + raw * config.smoothing;

    let mut next = RepCounterState {
        raw_angle: raw,
        smoothed_angle: smoothed,
        ..prev
    };

    let since_transition = now_ms - prev.last_transition_ms;
    let cooled_down = since_transition > config.min_transition_ms;
    let in_position = in_pushup_position(landmarks, config);

    // Gate closed: the pending streak is carried over, not cancelled
    if !cooled_down {
        return (next, ReasonCode::R004_COOLDOWN_ACTIVE);
    }
    if !in_position {
        return (next, ReasonCode::R004_NOT_IN_POSITION);
    }

    let arming = match prev.phase {
        Phase::Up => smoothed < config.down_threshold,
        Phase::Down => smoothed > config.up_threshold,
    };

    if !arming {
        next.consecutive_frames = 0;
        let reason = if prev.consecutive_frames > 0 {
            ReasonCode::R003_DEBOUNCE_RESET
        } else {
            match prev.phase {
                Phase::Up => ReasonCode::R002_PHASE_UP,
                Phase::Down => ReasonCode::R002_PHASE_DOWN,
            }
        };
        return (next, reason);
    }

    next.consecutive_frames = prev.consecutive_frames + 1;
    if next.consecutive_frames < config.debounce_frames {
        return (next, ReasonCode::R003_DEBOUNCE_ACCUMULATING);
    }

    next.phase = prev.phase.next();
    next.consecutive_frames = 0;
    next.last_transition_ms = now_ms;

    let reason = match next.phase {
        Phase::Down => ReasonCode::R005_TRANSITION_TO_DOWN,
        Phase::Up => {
            next.count = next.count.saturating_add(1);
            ReasonCode::R005_TRANSITION_TO_UP
        }
    };
    (next, reason)
}

// =============================================================================
// TESTS
// =============================================================================
