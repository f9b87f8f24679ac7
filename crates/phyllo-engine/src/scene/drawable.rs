use crate::coords::{EulerRot, Mat4, Quat, Vec3};
use crate::paint::Color;

use super::{DrawList, Geometry};

/// How a drawable's points are rasterized.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum DrawMode {
    /// One square sprite per point.
    Points,
    /// Points joined in order, last point connected back to the first.
    LineLoop,
}

/// Visual style of a drawable.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Style {
    pub mode: DrawMode,
    pub color: Color,
    /// Sprite size in scene units (ignored for lines).
    pub point_size: f32,
}

impl Style {
    pub fn points(color: Color, point_size: f32) -> Self {
        Self { mode: DrawMode::Points, color, point_size }
    }

    pub fn line_loop(color: Color) -> Self {
        Self { mode: DrawMode::LineLoop, color, point_size: 1.0 }
    }
}

/// Mutable object transform. Rotation is Euler XYZ in radians.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Vec3,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    /// Translation · rotation · scale, with the rotation applied as `Rx · Ry · Rz`.
    #[inline]
    pub fn matrix(&self) -> Mat4 {
        let r = self.rotation;
        let rotation = Quat::from_euler(EulerRot::XYZ, r.x, r.y, r.z);
        Mat4::from_scale_rotation_translation(self.scale, rotation, self.position)
    }
}

/// Point or line object: geometry + style + transform + visible prefix.
#[derive(Debug, Clone, PartialEq)]
pub struct Drawable {
    pub geometry: Geometry,
    pub style: Style,
    pub transform: Transform,
    draw_count: usize,
}

impl Drawable {
    /// Creates a drawable with every point visible.
    pub fn new(geometry: Geometry, style: Style) -> Self {
        let draw_count = geometry.point_count();
        Self {
            geometry,
            style,
            transform: Transform::default(),
            draw_count,
        }
    }

    /// Number of leading points drawn this frame.
    #[inline]
    pub fn draw_count(&self) -> usize {
        self.draw_count
    }

    /// Limits drawing to the first `count` points, clamped to the point count.
    #[inline]
    pub fn set_draw_count(&mut self, count: usize) {
        self.draw_count = count.min(self.geometry.point_count());
    }

    /// Records this drawable into `list` according to its draw mode.
    pub fn record(&self, list: &mut DrawList) {
        let model = self.transform.matrix();
        match self.style.mode {
            DrawMode::Points => list.push_points(
                self.geometry.clone(),
                self.draw_count,
                model,
                self.style.color,
                self.style.point_size,
            ),
            DrawMode::LineLoop => {
                list.push_line_loop(self.geometry.clone(), self.draw_count, model, self.style.color)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::DrawCmd;
    use std::f32::consts::FRAC_PI_2;

    fn tri() -> Geometry {
        Geometry::from_positions(vec![0.0; 9])
    }

    #[test]
    fn draw_count_defaults_to_all_and_clamps() {
        let mut d = Drawable::new(tri(), Style::points(Color::WHITE, 0.1));
        assert_eq!(d.draw_count(), 3);
        d.set_draw_count(1);
        assert_eq!(d.draw_count(), 1);
        d.set_draw_count(99);
        assert_eq!(d.draw_count(), 3);
    }

    fn close(a: Vec3, b: Vec3) -> bool {
        (a - b).abs().max_element() < 1e-5
    }

    #[test]
    fn matrix_scales_then_rotates_then_translates() {
        let t = Transform {
            position: Vec3::new(5.0, 0.0, 0.0),
            rotation: Vec3::new(0.0, 0.0, FRAC_PI_2),
            scale: Vec3::splat(7.0),
        };
        let p = t.matrix().transform_point3(Vec3::X);
        assert!(close(p, Vec3::new(5.0, 7.0, 0.0)), "{p:?}");
    }

    #[test]
    fn euler_order_applies_z_first() {
        // Rx · Ry · Rz: a quarter turn about Z, then about Y, carries +X to +Y.
        let t = Transform {
            rotation: Vec3::new(0.0, FRAC_PI_2, FRAC_PI_2),
            ..Transform::default()
        };
        let p = t.matrix().transform_point3(Vec3::X);
        assert!(close(p, Vec3::Y), "{p:?}");

        // The Y turn acts on the already Z-rotated frame: +Z goes to +X.
        let q = t.matrix().transform_point3(Vec3::Z);
        assert!(close(q, Vec3::X), "{q:?}");
    }

    #[test]
    fn record_uses_draw_mode() {
        let mut list = DrawList::new();
        Drawable::new(tri(), Style::points(Color::WHITE, 0.1)).record(&mut list);
        Drawable::new(tri(), Style::line_loop(Color::WHITE)).record(&mut list);

        assert!(matches!(list.items()[0], DrawCmd::Points(_)));
        assert!(matches!(list.items()[1], DrawCmd::LineLoop(_)));
    }
}
