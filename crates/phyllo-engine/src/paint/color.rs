/// Premultiplied RGBA color with sRGB-encoded channels.
///
/// Invariant:
/// - `rgb` components are expected to be multiplied by `a` (premultiplied alpha).
///
/// Channels hold sRGB values as authored (hex literals, HSL). Renderers writing to
/// an sRGB surface convert with [`Color::to_linear`] before upload.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32, // premultiplied
    pub g: f32, // premultiplied
    pub b: f32, // premultiplied
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::from_premul(1.0, 1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::from_premul(0.0, 0.0, 0.0, 1.0);

    /// Creates a premultiplied color from premultiplied components.
    #[inline]
    pub const fn from_premul(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a premultiplied color from straight alpha components.
    #[inline]
    pub fn from_straight(r: f32, g: f32, b: f32, a: f32) -> Self {
        let a = a.clamp(0.0, 1.0);
        Self {
            r: r.clamp(0.0, 1.0) * a,
            g: g.clamp(0.0, 1.0) * a,
            b: b.clamp(0.0, 1.0) * a,
            a,
        }
    }

    /// Creates an opaque color from a `0xRRGGBB` literal.
    #[inline]
    pub fn from_hex(rgb: u32) -> Self {
        let r = ((rgb >> 16) & 0xFF) as f32 / 255.0;
        let g = ((rgb >> 8) & 0xFF) as f32 / 255.0;
        let b = (rgb & 0xFF) as f32 / 255.0;
        Self::from_straight(r, g, b, 1.0)
    }

    /// Creates an opaque color from hue, saturation and lightness.
    ///
    /// `h` wraps into `[0, 1)`; `s` and `l` are clamped to `[0, 1]`.
    /// Non-finite hue is treated as `0`.
    pub fn from_hsl(h: f32, s: f32, l: f32) -> Self {
        let h = if h.is_finite() { h.rem_euclid(1.0) } else { 0.0 };
        let s = s.clamp(0.0, 1.0);
        let l = l.clamp(0.0, 1.0);

        if s == 0.0 {
            return Self::from_straight(l, l, l, 1.0);
        }

        let q = if l <= 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;

        Self::from_straight(
            hue_to_rgb(p, q, h + 1.0 / 3.0),
            hue_to_rgb(p, q, h),
            hue_to_rgb(p, q, h - 1.0 / 3.0),
            1.0,
        )
    }

    /// Returns a straight-alpha representation.
    ///
    /// For `a == 0`, RGB is returned as 0.
    #[inline]
    pub fn to_straight(self) -> (f32, f32, f32, f32) {
        if self.a <= 0.0 {
            (0.0, 0.0, 0.0, 0.0)
        } else {
            let inv = 1.0 / self.a;
            (self.r * inv, self.g * inv, self.b * inv, self.a)
        }
    }

    /// Converts sRGB-encoded channels to linear light, keeping premultiplication.
    pub fn to_linear(self) -> Self {
        let (r, g, b, a) = self.to_straight();
        Self::from_straight(srgb_to_linear(r), srgb_to_linear(g), srgb_to_linear(b), a)
    }

    #[inline]
    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite() && self.a.is_finite()
    }
}

fn hue_to_rgb(p: f32, q: f32, t: f32) -> f32 {
    let t = t.rem_euclid(1.0);
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * 6.0 * (2.0 / 3.0 - t)
    } else {
        p
    }
}

fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: Color, b: Color) -> bool {
        (a.r - b.r).abs() < 1e-5
            && (a.g - b.g).abs() < 1e-5
            && (a.b - b.b).abs() < 1e-5
            && (a.a - b.a).abs() < 1e-5
    }

    #[test]
    fn hex_channels() {
        let c = Color::from_hex(0xAFAF40);
        assert!(approx(c, Color::from_premul(175.0 / 255.0, 175.0 / 255.0, 64.0 / 255.0, 1.0)));
    }

    #[test]
    fn hsl_primaries() {
        assert!(approx(Color::from_hsl(0.0, 1.0, 0.5), Color::from_premul(1.0, 0.0, 0.0, 1.0)));
        assert!(approx(Color::from_hsl(1.0 / 3.0, 1.0, 0.5), Color::from_premul(0.0, 1.0, 0.0, 1.0)));
        assert!(approx(Color::from_hsl(2.0 / 3.0, 1.0, 0.5), Color::from_premul(0.0, 0.0, 1.0, 1.0)));
    }

    #[test]
    fn hsl_half_saturation_half_lightness() {
        // hue 0, s = l = 0.5 -> q = 0.75, p = 0.25
        assert!(approx(Color::from_hsl(0.0, 0.5, 0.5), Color::from_premul(0.75, 0.25, 0.25, 1.0)));
    }

    #[test]
    fn hsl_hue_wraps() {
        assert!(approx(Color::from_hsl(1.25, 0.5, 0.5), Color::from_hsl(0.25, 0.5, 0.5)));
        assert!(approx(Color::from_hsl(-0.75, 0.5, 0.5), Color::from_hsl(0.25, 0.5, 0.5)));
    }

    #[test]
    fn hsl_non_finite_hue_is_valid_color() {
        let c = Color::from_hsl(f32::NAN, 0.5, 0.5);
        assert!(c.is_finite());
        assert!(approx(c, Color::from_hsl(0.0, 0.5, 0.5)));
    }

    #[test]
    fn hsl_zero_saturation_is_grey() {
        assert!(approx(Color::from_hsl(0.4, 0.0, 0.3), Color::from_premul(0.3, 0.3, 0.3, 1.0)));
    }

    #[test]
    fn linear_conversion_keeps_endpoints() {
        assert!(approx(Color::WHITE.to_linear(), Color::WHITE));
        assert!(approx(Color::BLACK.to_linear(), Color::BLACK));
        assert!(Color::from_hex(0x808080).to_linear().r < 0.25);
    }
}
