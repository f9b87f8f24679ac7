//! Tuned constants for the visualization, grouped so hosts can override them.

use phyllo_engine::coords::Vec3;
use phyllo_engine::paint::Color;
use phyllo_engine::scene::{Camera, Style};

use crate::registry::{SectionId, ShapeKey};

/// How the alignment ratio is quantized before it is scaled to scene units.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum AlignmentRounding {
    /// Round the ratio to two decimals, then scale. Matches the reference page.
    #[default]
    TwoDecimals,
    /// Scale the raw ratio.
    Exact,
}

/// Which generator produces a shape's points.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Distribution {
    Sphere,
    Disk,
}

/// Which side of the scene center a shape sits on.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            Side::Left => -1.0,
            Side::Right => 1.0,
        }
    }
}

/// Continuous rotation applied each frame.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Spin {
    None,
    /// Rotate about X and Y by the same angle.
    XY,
    /// Rotate about Z only; X and Y keep their configured values.
    Z,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShapeConfig {
    pub key: ShapeKey,
    pub section: SectionId,
    pub distribution: Distribution,
    pub points: usize,
    pub side: Side,
    pub scale: Vec3,
    /// Initial rotation in radians.
    pub rotation: Vec3,
    pub style: Style,
    pub spin: Spin,
    /// Takes part in the hue cycle.
    pub color_cycle: bool,
    /// Draws itself point by point; its point count is the reveal total.
    pub progressive: bool,
}

impl ShapeConfig {
    fn points(key: ShapeKey, section: SectionId, distribution: Distribution, points: usize) -> Self {
        Self {
            key,
            section,
            distribution,
            points,
            side: Side::Right,
            scale: Vec3::new(7.0, 7.0, 1.0),
            rotation: Vec3::ZERO,
            style: Style::points(Color::WHITE, 0.1),
            spin: Spin::None,
            color_cycle: true,
            progressive: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct VizConfig {
    /// Scene units per viewport height of section displacement.
    pub align_distance: f32,
    pub alignment_rounding: AlignmentRounding,
    /// Client width is divided by this to get the horizontal offset.
    pub offset_divisor: f32,
    /// Radians per wall-clock second.
    pub motion_speed: f64,
    /// Rate of the color and reveal schedules.
    pub schedule_hz: f64,
    pub hue_period_secs: f64,
    /// Points revealed per second.
    pub reveal_rate: f64,
    pub saturation: f32,
    pub lightness: f32,
    pub background: Color,
    pub camera: Camera,
    /// Shapes in registration order.
    pub shapes: Vec<ShapeConfig>,
}

impl Default for VizConfig {
    fn default() -> Self {
        let sphere = ShapeConfig {
            scale: Vec3::splat(7.0),
            spin: Spin::XY,
            ..ShapeConfig::points(ShapeKey::Sphere, SectionId::Intro, Distribution::Sphere, 500)
        };
        let disk = ShapeConfig {
            side: Side::Left,
            rotation: Vec3::new(0.0, 0.9, 0.0),
            spin: Spin::Z,
            ..ShapeConfig::points(ShapeKey::Disk, SectionId::Disk, Distribution::Disk, 250)
        };
        let golden = ShapeConfig {
            progressive: true,
            ..ShapeConfig::points(ShapeKey::GoldenDisk, SectionId::GoldenAngle, Distribution::Disk, 250)
        };
        let sunflower = ShapeConfig {
            side: Side::Left,
            rotation: Vec3::new(0.0, 0.9, 0.0),
            style: Style::line_loop(Color::from_hex(0xAFAF40)),
            spin: Spin::Z,
            color_cycle: false,
            ..ShapeConfig::points(ShapeKey::Sunflower, SectionId::Sunflower, Distribution::Disk, 350)
        };

        Self {
            align_distance: 50.0,
            alignment_rounding: AlignmentRounding::default(),
            offset_divisor: 150.0,
            motion_speed: 0.5,
            schedule_hz: 15.0,
            hue_period_secs: 100.0,
            reveal_rate: 10.0,
            saturation: 0.5,
            lightness: 0.5,
            background: Color::from_hex(0x121212),
            camera: Camera::default(),
            shapes: vec![sphere, disk, golden, sunflower],
        }
    }
}

impl VizConfig {
    pub fn with_rounding(mut self, rounding: AlignmentRounding) -> Self {
        self.alignment_rounding = rounding;
        self
    }

    /// The shape that reveals itself over time, if any.
    pub fn progressive_shape(&self) -> Option<&ShapeConfig> {
        self.shapes.iter().find(|s| s.progressive)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use phyllo_engine::scene::DrawMode;

    #[test]
    fn default_scene_has_four_shapes_in_page_order() {
        let cfg = VizConfig::default();
        let keys: Vec<_> = cfg.shapes.iter().map(|s| s.key).collect();
        assert_eq!(
            keys,
            vec![ShapeKey::Sphere, ShapeKey::Disk, ShapeKey::GoldenDisk, ShapeKey::Sunflower]
        );
        let sections: Vec<_> = cfg.shapes.iter().map(|s| s.section).collect();
        assert_eq!(
            sections,
            vec![SectionId::Intro, SectionId::Disk, SectionId::GoldenAngle, SectionId::Sunflower]
        );
    }

    #[test]
    fn golden_disk_is_the_progressive_shape() {
        let cfg = VizConfig::default();
        let shape = cfg.progressive_shape().unwrap();
        assert_eq!(shape.key, ShapeKey::GoldenDisk);
        assert_eq!(shape.points, 250);
    }

    #[test]
    fn sunflower_is_a_fixed_color_line_loop() {
        let cfg = VizConfig::default();
        let sunflower = cfg.shapes.iter().find(|s| s.key == ShapeKey::Sunflower).unwrap();
        assert_eq!(sunflower.style.mode, DrawMode::LineLoop);
        assert!(!sunflower.color_cycle);
        assert_eq!(sunflower.side, Side::Left);
    }

    #[test]
    fn rounding_defaults_to_two_decimals() {
        assert_eq!(VizConfig::default().alignment_rounding, AlignmentRounding::TwoDecimals);
        let exact = VizConfig::default().with_rounding(AlignmentRounding::Exact);
        assert_eq!(exact.alignment_rounding, AlignmentRounding::Exact);
    }
}
