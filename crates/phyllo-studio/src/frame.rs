use winit::dpi::PhysicalSize;

use phyllo_engine::core::{AppControl, FrameCtx, WindowCtx};
use phyllo_engine::render::shapes::line_loop::LineLoopRenderer;
use phyllo_engine::render::shapes::points::PointsRenderer;
use phyllo_viz::{Readout, Renderer, SceneFrame};

/// Adapts one engine frame to the visualization's [`Renderer`] seam.
pub struct FrameRenderer<'r, 'a, 'w> {
    ctx:     &'r mut FrameCtx<'a, 'w>,
    points:  &'r mut PointsRenderer,
    lines:   &'r mut LineLoopRenderer,
    control: AppControl,
}

impl<'r, 'a, 'w> FrameRenderer<'r, 'a, 'w> {
    pub fn new(
        ctx: &'r mut FrameCtx<'a, 'w>,
        points: &'r mut PointsRenderer,
        lines: &'r mut LineLoopRenderer,
    ) -> Self {
        Self { ctx, points, lines, control: AppControl::Continue }
    }

    /// `Exit` once a draw hit a fatal surface error.
    pub fn control(&self) -> AppControl {
        self.control
    }
}

impl Renderer for FrameRenderer<'_, '_, '_> {
    fn set_viewport_size(&mut self, width: u32, height: u32) {
        self.ctx.gpu.resize(PhysicalSize::new(width, height));
    }

    fn draw(&mut self, frame: &SceneFrame<'_>) {
        let points = &mut *self.points;
        let lines = &mut *self.lines;
        let control = self.ctx.render(frame.background, |rctx, target| {
            points.render(rctx, target, frame.draw_list, frame.camera);
            lines.render(rctx, target, frame.draw_list, frame.camera);
        });
        if control == AppControl::Exit {
            self.control = AppControl::Exit;
        }
    }
}

/// Shows the reveal total in the window title.
pub struct TitleReadout<'a> {
    window: &'a WindowCtx<'a>,
    title:  &'a str,
}

impl<'a> TitleReadout<'a> {
    pub fn new(window: &'a WindowCtx<'a>, title: &'a str) -> Self {
        Self { window, title }
    }
}

impl Readout for TitleReadout<'_> {
    fn show_point_total(&mut self, total: usize) {
        log::info!("golden angle disk: {total} points");
        self.window.set_title(&format!("{} · golden angle: {total} points", self.title));
    }
}
