//! Canvas measurements and the values derived from them.

/// Snapshot of the canvas handed in by the host each frame.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CanvasMetrics {
    /// Displayed size in logical pixels.
    pub client_width: f32,
    pub client_height: f32,
    /// Backing-store size in physical pixels.
    pub backing_width: u32,
    pub backing_height: u32,
    /// Device pixels per logical pixel.
    pub pixel_ratio: f64,
}

impl CanvasMetrics {
    /// Backing size the canvas should have for its current client size.
    pub fn expected_backing(&self) -> (u32, u32) {
        let m = pixel_multiplier(self.pixel_ratio) as f32;
        (physical(self.client_width * m), physical(self.client_height * m))
    }

    /// `true` when the backing store no longer matches the displayed size.
    pub fn needs_resize(&self) -> bool {
        self.expected_backing() != (self.backing_width, self.backing_height)
    }
}

/// Whole-number pixel density used for the backing store, never below 1.
pub fn pixel_multiplier(ratio: f64) -> u32 {
    if ratio.is_finite() && ratio >= 1.0 { ratio.trunc() as u32 } else { 1 }
}

fn physical(v: f32) -> u32 {
    if v.is_finite() && v > 0.0 { v.round() as u32 } else { 0 }
}

/// Cached viewport values; recomputed only when a resize is detected.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ViewportGeometry {
    pub center_x: f32,
    pub center_y: f32,
    pub width: f32,
    pub height: f32,
    /// Magnitude of every shape's horizontal position.
    pub offset: f32,
}

impl ViewportGeometry {
    pub fn measure(canvas: &CanvasMetrics, offset_divisor: f32) -> Self {
        let width = canvas.client_width.max(0.0);
        let height = canvas.client_height.max(0.0);
        let offset = if offset_divisor > 0.0 { (width / offset_divisor).trunc() } else { 0.0 };
        Self {
            center_x: width / 2.0,
            center_y: height / 2.0,
            width,
            height,
            offset,
        }
    }

    /// Width over height, `None` for a collapsed canvas.
    pub fn aspect(&self) -> Option<f32> {
        (self.width > 0.0 && self.height > 0.0).then(|| self.width / self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canvas(w: f32, h: f32, bw: u32, bh: u32, ratio: f64) -> CanvasMetrics {
        CanvasMetrics {
            client_width: w,
            client_height: h,
            backing_width: bw,
            backing_height: bh,
            pixel_ratio: ratio,
        }
    }

    #[test]
    fn multiplier_truncates_and_floors_at_one() {
        assert_eq!(pixel_multiplier(1.0), 1);
        assert_eq!(pixel_multiplier(1.5), 1);
        assert_eq!(pixel_multiplier(2.0), 2);
        assert_eq!(pixel_multiplier(2.75), 2);
        assert_eq!(pixel_multiplier(0.5), 1);
        assert_eq!(pixel_multiplier(f64::NAN), 1);
    }

    #[test]
    fn resize_needed_only_on_mismatch() {
        assert!(!canvas(800.0, 600.0, 800, 600, 1.0).needs_resize());
        assert!(!canvas(800.0, 600.0, 1600, 1200, 2.0).needs_resize());
        assert!(canvas(800.0, 600.0, 1600, 1200, 1.25).needs_resize());
        assert!(canvas(1024.0, 600.0, 800, 600, 1.0).needs_resize());
    }

    #[test]
    fn fractional_logical_size_rounds_to_pixels() {
        let c = canvas(799.9999, 600.0001, 800, 600, 1.0);
        assert_eq!(c.expected_backing(), (800, 600));
    }

    #[test]
    fn offset_is_truncated_width_fraction() {
        let v = ViewportGeometry::measure(&canvas(1280.0, 720.0, 0, 0, 1.0), 150.0);
        assert_eq!(v.offset, 8.0);
        assert_eq!((v.center_x, v.center_y), (640.0, 360.0));

        let narrow = ViewportGeometry::measure(&canvas(149.0, 720.0, 0, 0, 1.0), 150.0);
        assert_eq!(narrow.offset, 0.0);
    }

    #[test]
    fn collapsed_canvas_has_no_aspect() {
        let v = ViewportGeometry::measure(&canvas(0.0, 0.0, 0, 0, 1.0), 150.0);
        assert_eq!(v.aspect(), None);
        assert_eq!(v.offset, 0.0);
    }
}
