use crate::coords::Viewport;
use crate::paint::Color;

/// Per-frame state every shape renderer reads.
///
/// The runtime rebuilds it from the live [`Gpu`](crate::device::Gpu) on each
/// redraw, so `viewport` always matches the configured surface.
pub struct RenderCtx<'a> {
    pub device: &'a wgpu::Device,
    pub queue: &'a wgpu::Queue,
    pub surface_format: wgpu::TextureFormat,
    /// Backing-store size in physical pixels.
    pub viewport: Viewport,
}

impl<'a> RenderCtx<'a> {
    #[inline]
    pub fn new(
        device: &'a wgpu::Device,
        queue: &'a wgpu::Queue,
        surface_format: wgpu::TextureFormat,
        viewport: Viewport,
    ) -> Self {
        Self { device, queue, surface_format, viewport }
    }

    /// Colors are authored in sRGB; an sRGB surface re-encodes on write.
    pub fn surface_color(&self, color: Color) -> Color {
        if self.surface_format.is_srgb() { color.to_linear() } else { color }
    }

    /// Height over width, which keeps point sprites round.
    pub fn inv_aspect(&self) -> f32 {
        inv_aspect(self.viewport)
    }
}

fn inv_aspect(vp: Viewport) -> f32 {
    if vp.is_valid() { vp.height / vp.width } else { 1.0 }
}

/// The frame's encoder and swapchain view. Each shape renderer opens its own
/// pass on it, loading what earlier passes drew.
pub struct RenderTarget<'a> {
    pub encoder: &'a mut wgpu::CommandEncoder,
    pub color_view: &'a wgpu::TextureView,
}

impl<'a> RenderTarget<'a> {
    #[inline]
    pub fn new(encoder: &'a mut wgpu::CommandEncoder, color_view: &'a wgpu::TextureView) -> Self {
        Self { encoder, color_view }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inv_aspect_follows_backing_size() {
        assert_eq!(inv_aspect(Viewport::new(1600.0, 800.0)), 0.5);
        assert_eq!(inv_aspect(Viewport::new(0.0, 800.0)), 1.0);
    }
}
