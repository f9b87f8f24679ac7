//! Per-frame animation loop: resize handling, motion, color cycling and reveal.

use anyhow::Result;
use phyllo_engine::paint::Color;
use phyllo_engine::time::Interval;

use crate::adapter::{Readout, RenderAdapter, Renderer};
use crate::align::{Aligner, LayoutOracle};
use crate::config::{Spin, VizConfig};
use crate::motion::{hue_at, motion_angle};
use crate::registry::{Registry, ShapeKey};
use crate::reveal::RevealState;
use crate::setup::build_registry;
use crate::viewport::{CanvasMetrics, ViewportGeometry};

/// Outcome of [`AnimationDriver::frame`].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum FrameStatus {
    Rendered,
    Stopped,
}

/// Owns the scene state and advances it against the wall clock.
///
/// All mutation happens on the caller's thread, from `start`, `on_scroll` and
/// `frame`. The two timed schedules are polled from `frame`.
pub struct AnimationDriver {
    config: VizConfig,
    registry: Registry,
    viewport: ViewportGeometry,
    aligner: Aligner,
    adapter: RenderAdapter,
    reveal: RevealState,
    progressive: Option<ShapeKey>,
    color_timer: Interval,
    reveal_timer: Interval,
    running: bool,
}

impl AnimationDriver {
    /// Builds the scene for a canvas of the given size.
    pub fn new(config: VizConfig, canvas: CanvasMetrics) -> Result<Self> {
        let viewport = ViewportGeometry::measure(&canvas, config.offset_divisor);
        let registry = build_registry(&config, viewport.offset)?;

        let progressive = config.progressive_shape().map(|s| s.key);
        let reveal_total = progressive
            .and_then(|key| registry.get(key))
            .map_or(0, |item| item.drawable.geometry.point_count());

        let mut camera = config.camera;
        if let Some(aspect) = viewport.aspect() {
            camera.set_aspect(aspect);
        }

        Ok(Self {
            aligner: Aligner::new(config.align_distance, config.alignment_rounding),
            adapter: RenderAdapter::new(camera, config.background),
            reveal: RevealState::new(reveal_total),
            color_timer: Interval::from_hz(config.schedule_hz),
            reveal_timer: Interval::from_hz(config.schedule_hz),
            progressive,
            registry,
            viewport,
            config,
            running: true,
        })
    }

    /// Aligns every shape with its section and shows the reveal total.
    pub fn start(&mut self, oracle: &dyn LayoutOracle, readout: &mut dyn Readout) {
        self.aligner.align_all(&mut self.registry, oracle, &self.viewport);
        readout.show_point_total(self.reveal.total());
        log::info!(
            "animation started: {} shapes, offset {}, reveal total {}",
            self.registry.len(),
            self.viewport.offset,
            self.reveal.total()
        );
    }

    /// Realigns every shape after the page scrolled.
    pub fn on_scroll(&mut self, oracle: &dyn LayoutOracle) {
        if !self.running {
            return;
        }
        log::trace!("scroll: realigning {} shapes", self.registry.len());
        self.aligner.align_all(&mut self.registry, oracle, &self.viewport);
    }

    /// Advances one display frame at `wall_secs` and draws it.
    pub fn frame(
        &mut self,
        wall_secs: f64,
        canvas: CanvasMetrics,
        oracle: &dyn LayoutOracle,
        renderer: &mut dyn Renderer,
    ) -> FrameStatus {
        if !self.running {
            return FrameStatus::Stopped;
        }

        if canvas.needs_resize() {
            self.resize(canvas, oracle, renderer);
        }

        self.apply_motion(wall_secs);
        if self.color_timer.poll(wall_secs) {
            self.apply_color(wall_secs);
        }
        if self.reveal_timer.poll(wall_secs) {
            self.apply_reveal(wall_secs);
        }

        self.adapter.present(&self.registry, renderer);
        FrameStatus::Rendered
    }

    /// Cancels both schedules and the frame chain.
    pub fn stop(&mut self) {
        if !self.running {
            return;
        }
        self.color_timer.cancel();
        self.reveal_timer.cancel();
        self.running = false;
        log::info!("animation stopped");
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }

    #[inline]
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    #[inline]
    pub fn viewport(&self) -> &ViewportGeometry {
        &self.viewport
    }

    #[inline]
    pub fn reveal(&self) -> &RevealState {
        &self.reveal
    }

    #[inline]
    pub fn adapter(&self) -> &RenderAdapter {
        &self.adapter
    }

    fn resize(&mut self, canvas: CanvasMetrics, oracle: &dyn LayoutOracle, renderer: &mut dyn Renderer) {
        self.viewport = ViewportGeometry::measure(&canvas, self.config.offset_divisor);

        let (w, h) = canvas.expected_backing();
        renderer.set_viewport_size(w, h);
        if let Some(aspect) = self.viewport.aspect() {
            self.adapter.camera_mut().set_aspect(aspect);
        }

        let offset = self.viewport.offset;
        for (_, item) in self.registry.iter_mut() {
            item.drawable.transform.position.x = item.side().sign() * offset;
        }
        // Section boxes move with the viewport height.
        self.aligner.align_all(&mut self.registry, oracle, &self.viewport);

        log::debug!(
            "resize: client {}x{}, backing {w}x{h}, offset {offset}",
            self.viewport.width,
            self.viewport.height
        );
    }

    fn apply_motion(&mut self, wall_secs: f64) {
        let t = motion_angle(wall_secs, self.config.motion_speed);
        for shape in &self.config.shapes {
            let Some(item) = self.registry.get_mut(shape.key) else { continue };
            let rotation = &mut item.drawable.transform.rotation;
            match shape.spin {
                Spin::None => {}
                Spin::XY => {
                    rotation.x = t;
                    rotation.y = t;
                }
                Spin::Z => rotation.z = t,
            }
        }
    }

    fn apply_color(&mut self, wall_secs: f64) {
        let hue = hue_at(wall_secs, self.config.hue_period_secs);
        let color = Color::from_hsl(hue, self.config.saturation, self.config.lightness);
        for shape in self.config.shapes.iter().filter(|s| s.color_cycle) {
            if let Some(item) = self.registry.get_mut(shape.key) {
                item.drawable.style.color = color;
            }
        }
    }

    fn apply_reveal(&mut self, wall_secs: f64) {
        let Some(key) = self.progressive else { return };
        let cursor = self.reveal.advance(wall_secs, self.config.reveal_rate);
        if let Some(item) = self.registry.get_mut(key) {
            item.drawable.set_draw_count(cursor);
        }
    }
}
