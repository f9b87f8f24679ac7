//! Wall-clock driven animation parameters.

use std::f64::consts::TAU;

/// Rotation angle at `wall_secs`, reduced into `[0, 2π)` before narrowing.
pub fn motion_angle(wall_secs: f64, speed: f64) -> f32 {
    let t = wall_secs * speed;
    if !t.is_finite() {
        return 0.0;
    }
    let a = t.rem_euclid(TAU);
    if a >= TAU { 0.0 } else { a as f32 }
}

/// Hue in `[0, 1)` cycling once per `period_secs`.
pub fn hue_at(wall_secs: f64, period_secs: f64) -> f32 {
    if !wall_secs.is_finite() || !(period_secs > 0.0) || !period_secs.is_finite() {
        return 0.0;
    }
    let h = (wall_secs.rem_euclid(period_secs) / period_secs) as f32;
    if (0.0..1.0).contains(&h) { h } else { 0.0 }
}
