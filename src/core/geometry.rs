//! Joint geometry
//!
//! Pure functions over landmark positions. Degenerate input collapses to 0
//! instead of producing NaN.

use crate::types::Point3;

/// Angle ABC at vertex `b`, in degrees within [0, 180]
///
/// Returns 0 when either arm of the angle has zero length.
pub fn angle_at_vertex(a: Point3, b: Point3, c: Point3) -> f64 {
    let ba = a.sub(b);
    let bc = c.sub(b);

    let mag_ba = ba.length();
    let mag_bc = bc.length();

    if mag_ba == 0.0 || mag_bc == 0.0 {
        return 0.0;
    }

    let cos_angle = (ba.dot(bc) / (mag_ba * mag_bc)).clamp(-1.0, 1.0);
    let angle = cos_angle.acos().to_degrees();
    // Non-finite coordinates still must not leak NaN into the filter
    if angle.is_nan() { 0.0 } else { angle }
}

/// Inclination of the shoulder→hip segment from horizontal, in degrees [0, 90]
///
/// Near 0 = lying (push-up), near 90 = standing.
pub fn torso_angle(shoulder: Point3, hip: Point3) -> f64 {
    let dx = (hip.x - shoulder.x).abs();
    let dy = (hip.y - shoulder.y).abs();
    dy.atan2(dx).to_degrees()
}
