//! Maps a page section's position in the viewport to a vertical scene offset.

use crate::config::AlignmentRounding;
use crate::registry::{Registry, SceneItem, SectionId};
use crate::viewport::ViewportGeometry;

/// Section bounds in logical viewport pixels; `top` is relative to the viewport top.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SectionBox {
    pub top: f32,
    pub height: f32,
}

impl SectionBox {
    #[inline]
    pub fn center(&self) -> f32 {
        self.top + self.height / 2.0
    }
}

/// Answers where a section currently sits. Queried fresh on every alignment.
pub trait LayoutOracle {
    fn bounding_box(&self, section: SectionId) -> SectionBox;
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Aligner {
    /// Section pinned to the scene center until it scrolls above the middle.
    pub intro: SectionId,
    pub distance: f32,
    pub rounding: AlignmentRounding,
}

impl Aligner {
    pub fn new(distance: f32, rounding: AlignmentRounding) -> Self {
        Self { intro: SectionId::Intro, distance, rounding }
    }

    /// Vertical scene offset for `section` given its current box.
    pub fn offset(&self, section: SectionId, bbox: SectionBox, viewport: &ViewportGeometry) -> f32 {
        let center = bbox.center();
        if section == self.intro && center > viewport.center_y {
            return 0.0;
        }
        if !(viewport.height > 0.0) || !center.is_finite() {
            return 0.0;
        }

        let ratio = (center - viewport.center_y) as f64 / viewport.height as f64;
        let ratio = match self.rounding {
            AlignmentRounding::TwoDecimals => round2(ratio),
            AlignmentRounding::Exact => ratio,
        };
        let y = (-ratio * self.distance as f64) as f32;
        // Fold -0.0 into 0.0.
        if y == 0.0 { 0.0 } else { y }
    }

    pub fn align(&self, item: &mut SceneItem, oracle: &dyn LayoutOracle, viewport: &ViewportGeometry) {
        let section = item.section();
        let y = self.offset(section, oracle.bounding_box(section), viewport);
        item.drawable.transform.position.y = y;
    }

    pub fn align_all(&self, registry: &mut Registry, oracle: &dyn LayoutOracle, viewport: &ViewportGeometry) {
        for (_, item) in registry.iter_mut() {
            self.align(item, oracle, viewport);
        }
    }
}

/// Two-decimal rounding with `Number.prototype.toFixed(2)` semantics.
///
/// The hundredths count `n` is the one nearest to the exact value of `100 * |v|`,
/// taking the larger `n` only on an exact tie. Multiplying first would round
/// doubles such as 0.015 (stored just below) up to a false tie.
fn round2(v: f64) -> f64 {
    let x = v.abs();
    let scaled = x * 100.0;
    // `scaled + err` is exactly `100 * x`.
    let err = x.mul_add(100.0, -scaled);
    let mut n = scaled.floor();
    if (scaled - n) - 0.5 >= -err {
        n += 1.0;
    }
    (n / 100.0).copysign(v)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Side;
    use crate::registry::ShapeKey;
    use crate::viewport::CanvasMetrics;
    use phyllo_engine::paint::Color;
    use phyllo_engine::scene::{Drawable, Geometry, Style};

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    fn viewport(h: f32) -> ViewportGeometry {
        ViewportGeometry::measure(
            &CanvasMetrics {
                client_width: 1000.0,
                client_height: h,
                backing_width: 1000,
                backing_height: h as u32,
                pixel_ratio: 1.0,
            },
            150.0,
        )
    }

    fn centered_at(center: f32) -> SectionBox {
        SectionBox { top: center - 100.0, height: 200.0 }
    }

    struct FixedPage(SectionBox);

    impl LayoutOracle for FixedPage {
        fn bounding_box(&self, _section: SectionId) -> SectionBox {
            self.0
        }
    }

    #[test]
    fn centered_section_has_zero_offset() {
        let a = Aligner::new(50.0, AlignmentRounding::TwoDecimals);
        let vp = viewport(800.0);
        for section in [SectionId::Disk, SectionId::GoldenAngle, SectionId::Sunflower] {
            let y = a.offset(section, centered_at(400.0), &vp);
            assert_eq!(y, 0.0);
            assert!(y.is_sign_positive());
        }
    }

    #[test]
    fn intro_below_center_is_pinned() {
        let a = Aligner::new(50.0, AlignmentRounding::TwoDecimals);
        let vp = viewport(800.0);
        assert_eq!(a.offset(SectionId::Intro, centered_at(720.0), &vp), 0.0);
        // Any other section at the same place moves down.
        assert!(approx(a.offset(SectionId::Disk, centered_at(720.0), &vp), -20.0));
    }

    #[test]
    fn intro_above_center_follows_the_page() {
        let a = Aligner::new(50.0, AlignmentRounding::TwoDecimals);
        let vp = viewport(800.0);
        // (0 - 400) / 800 = -0.5 -> +25
        assert!(approx(a.offset(SectionId::Intro, centered_at(0.0), &vp), 25.0));
    }

    #[test]
    fn ratio_is_rounded_before_scaling() {
        let vp = viewport(800.0);
        // (403 - 400) / 800 = 0.00375
        let rounded = Aligner::new(50.0, AlignmentRounding::TwoDecimals);
        assert_eq!(rounded.offset(SectionId::Disk, centered_at(403.0), &vp), 0.0);
        // (407 - 400) / 800 = 0.00875 -> 0.01
        assert!(approx(rounded.offset(SectionId::Disk, centered_at(407.0), &vp), -0.5));

        let exact = Aligner::new(50.0, AlignmentRounding::Exact);
        assert!(approx(exact.offset(SectionId::Disk, centered_at(403.0), &vp), -0.1875));
    }

    #[test]
    fn stored_halfway_ratios_round_like_to_fixed() {
        let a = Aligner::new(50.0, AlignmentRounding::TwoDecimals);
        let vp = viewport(800.0);
        // 12 / 800 is stored just below 0.015, so it rounds to 0.01.
        let below = SectionBox { top: 312.0, height: 200.0 };
        assert!(approx(a.offset(SectionId::Disk, below, &vp), -0.5));
        // Mirrored: -12 / 800 rounds to -0.01.
        let above = SectionBox { top: 288.0, height: 200.0 };
        assert!(approx(a.offset(SectionId::Disk, above, &vp), 0.5));
    }

    #[test]
    fn exact_ties_take_the_larger_magnitude() {
        assert_eq!(round2(0.125), 0.13);
        assert_eq!(round2(-0.125), -0.13);
        assert_eq!(round2(0.015), 0.01);
        assert_eq!(round2(0.00875), 0.01);
        assert_eq!(round2(0.0), 0.0);
    }

    #[test]
    fn distance_scales_the_offset() {
        let vp = viewport(800.0);
        let a = Aligner::new(20.0, AlignmentRounding::TwoDecimals);
        // (800 - 400) / 800 = 0.5
        assert!(approx(a.offset(SectionId::Sunflower, centered_at(800.0), &vp), -10.0));
    }

    #[test]
    fn collapsed_viewport_yields_zero() {
        let a = Aligner::new(50.0, AlignmentRounding::TwoDecimals);
        let vp = viewport(0.0);
        assert_eq!(a.offset(SectionId::Disk, centered_at(300.0), &vp), 0.0);
    }

    #[test]
    fn align_all_writes_vertical_position_only() {
        let mut reg = Registry::new();
        let mut d = Drawable::new(Geometry::from_positions(vec![0.0; 3]), Style::points(Color::WHITE, 0.1));
        d.transform.position.x = -8.0;
        reg.register(ShapeKey::Disk, SectionId::Disk, Side::Left, d).unwrap();

        let a = Aligner::new(50.0, AlignmentRounding::TwoDecimals);
        let vp = viewport(800.0);
        a.align_all(&mut reg, &FixedPage(centered_at(800.0)), &vp);

        let pos = reg.get(ShapeKey::Disk).unwrap().drawable.transform.position;
        assert!(approx(pos.y, -25.0));
        assert_eq!(pos.x, -8.0);
    }
}
