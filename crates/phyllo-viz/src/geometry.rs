//! Golden-angle point distributions.
//!
//! Both generators are pure: same `n` and `scale` give bit-identical output.
//! Output is a flat `[x0, y0, z0, x1, y1, z1, ...]` buffer of `3 * n` floats in
//! generation order; index order matters to consumers that reveal a prefix.
//! Math runs in `f64` and is narrowed once per coordinate.

use std::f64::consts::PI;

/// `(3 − √5) · π` radians, ≈ 2.39996 (≈ 137.5°).
pub fn golden_angle() -> f64 {
    (3.0 - 5f64.sqrt()) * PI
}

/// Fibonacci sphere: `n` points spread near-uniformly over the unit sphere surface.
///
/// Heights run evenly over `[−1, 1]` including both ends; point 0 sits at the
/// `z = −scale` pole and point `n − 1` at `z = +scale`. A single point sits at the
/// lower pole.
pub fn sphere_distribution(n: usize, scale: f32) -> Vec<f32> {
    let g = golden_angle();
    let scale = scale as f64;
    let step = if n > 1 { 2.0 / (n - 1) as f64 } else { 0.0 };

    let mut out = Vec::with_capacity(3 * n);
    for i in 0..n {
        let theta = i as f64 * g;
        let z = if i + 1 == n && n > 1 { 1.0 } else { -1.0 + i as f64 * step };
        let r = (1.0 - z * z).max(0.0).sqrt();

        out.push((r * theta.cos() * scale) as f32);
        out.push((r * theta.sin() * scale) as f32);
        out.push((z * scale) as f32);
    }
    out
}

/// Fibonacci disk: `n` points filling the unit disk in the `z = 0` plane.
///
/// Radius grows linearly with index, `r_i = i / n`: point 0 is the center and
/// point `n − 1` stops just short of the rim.
pub fn disk_distribution(n: usize, scale: f32) -> Vec<f32> {
    let g = golden_angle();
    let scale = scale as f64;

    let mut out = Vec::with_capacity(3 * n);
    for i in 0..n {
        let theta = i as f64 * g;
        let r = i as f64 / n as f64;

        out.push((r * theta.cos() * scale) as f32);
        out.push((r * theta.sin() * scale) as f32);
        out.push(0.0);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::TAU;

    fn point(buf: &[f32], i: usize) -> [f64; 3] {
        [buf[3 * i] as f64, buf[3 * i + 1] as f64, buf[3 * i + 2] as f64]
    }

    fn angular_step(a: [f64; 3], b: [f64; 3]) -> f64 {
        (b[1].atan2(b[0]) - a[1].atan2(a[0])).rem_euclid(TAU)
    }

    // ── sphere ────────────────────────────────────────────────────────────

    #[test]
    fn sphere_has_three_floats_per_point() {
        for n in [1, 2, 3, 10, 500] {
            assert_eq!(sphere_distribution(n, 1.0).len(), 3 * n);
        }
    }

    #[test]
    fn sphere_includes_both_poles() {
        for (n, scale) in [(2, 1.0), (7, 1.0), (500, 7.0)] {
            let s = sphere_distribution(n, scale);
            assert_eq!(point(&s, 0)[2], -scale as f64);
            assert_eq!(point(&s, n - 1)[2], scale as f64);
        }
    }

    #[test]
    fn sphere_single_point_sits_at_lower_pole() {
        let s = sphere_distribution(1, 3.0);
        assert_eq!(s, vec![0.0, 0.0, -3.0]);
    }

    #[test]
    fn sphere_points_lie_on_the_surface() {
        let s = sphere_distribution(200, 2.0);
        for i in 0..200 {
            let [x, y, z] = point(&s, i);
            let len = (x * x + y * y + z * z).sqrt();
            assert!((len - 2.0).abs() < 1e-5, "point {i} has radius {len}");
        }
    }

    #[test]
    fn sphere_heights_are_evenly_spaced() {
        let s = sphere_distribution(5, 1.0);
        let zs: Vec<f64> = (0..5).map(|i| point(&s, i)[2]).collect();
        assert_eq!(zs, vec![-1.0, -0.5, 0.0, 0.5, 1.0]);
    }

    #[test]
    fn sphere_steps_by_golden_angle() {
        let s = sphere_distribution(100, 1.0);
        // Skip the poles, where the angle is undefined.
        for i in 1..98 {
            let step = angular_step(point(&s, i), point(&s, i + 1));
            assert!((step - golden_angle()).abs() < 1e-4, "step {i}: {step}");
        }
    }

    #[test]
    fn sphere_is_deterministic() {
        assert_eq!(sphere_distribution(321, 7.0), sphere_distribution(321, 7.0));
    }

    // ── disk ──────────────────────────────────────────────────────────────

    #[test]
    fn disk_has_three_floats_per_point_and_flat_z() {
        for n in [1, 2, 250, 350] {
            let d = disk_distribution(n, 7.0);
            assert_eq!(d.len(), 3 * n);
            assert!((0..n).all(|i| point(&d, i)[2] == 0.0));
        }
    }

    #[test]
    fn disk_starts_at_origin_and_stays_inside_rim() {
        let n = 250;
        let d = disk_distribution(n, 2.0);
        assert_eq!(point(&d, 0), [0.0, 0.0, 0.0]);

        let [x, y, _] = point(&d, n - 1);
        let r = (x * x + y * y).sqrt();
        assert!((r - (n - 1) as f64 / n as f64 * 2.0).abs() < 1e-5);
        assert!(r < 2.0);
    }

    #[test]
    fn disk_steps_by_golden_angle() {
        let d = disk_distribution(250, 1.0);
        for i in 1..249 {
            let step = angular_step(point(&d, i), point(&d, i + 1));
            assert!((step - golden_angle()).abs() < 1e-4, "step {i}: {step}");
        }
    }

    #[test]
    fn disk_second_point_matches_reference_values() {
        let d = disk_distribution(250, 1.0);
        let expected = [2.39996f64.cos() / 250.0, 2.39996f64.sin() / 250.0, 0.0];
        for (got, want) in d[3..6].iter().zip(expected) {
            assert!((*got as f64 - want).abs() < 1e-5);
        }
    }

    #[test]
    fn empty_request_yields_empty_buffer() {
        assert!(sphere_distribution(0, 1.0).is_empty());
        assert!(disk_distribution(0, 1.0).is_empty());
    }

    #[test]
    fn golden_angle_value() {
        assert!((golden_angle() - 2.399963229728653).abs() < 1e-12);
    }
}
