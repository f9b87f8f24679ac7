use std::time::Duration;

use phyllo_engine::core::{App, AppControl, FrameCtx};
use phyllo_engine::input::{InputEvent, Key, ScrollDelta};
use phyllo_engine::render::shapes::line_loop::LineLoopRenderer;
use phyllo_engine::render::shapes::points::PointsRenderer;
use phyllo_viz::page::{ARROW_STEP, LINE_HEIGHT};
use phyllo_viz::{AnimationDriver, CanvasMetrics, FrameStatus, ScrollPage, VizConfig};

use crate::frame::{FrameRenderer, TitleReadout};

/// How often the frame rate is logged.
const STATS_WINDOW: Duration = Duration::from_secs(5);

/// Hosts the animation in the engine window.
///
/// The driver is built on the first frame, once the window size is known.
pub struct StudioApp {
    title:  String,
    config: VizConfig,
    page:   ScrollPage,
    driver: Option<AnimationDriver>,

    points: PointsRenderer,
    lines:  LineLoopRenderer,

    stats: FrameStats,
}

impl StudioApp {
    pub fn new(title: impl Into<String>, config: VizConfig) -> Self {
        Self {
            title:  title.into(),
            config,
            page:   ScrollPage::standard(),
            driver: None,
            points: PointsRenderer::new(),
            lines:  LineLoopRenderer::new(),
            stats:  FrameStats::default(),
        }
    }

    /// Applies a navigation key to the page. Returns `true` when the page moved.
    fn navigate(&mut self, key: Key) -> bool {
        let page = &mut self.page;
        match key {
            Key::PageDown | Key::Space => page.page_down(),
            Key::PageUp => page.page_up(),
            Key::ArrowDown => page.scroll_by(ARROW_STEP),
            Key::ArrowUp => page.scroll_by(-ARROW_STEP),
            Key::Home => page.home(),
            Key::End => page.end(),
            Key::Escape => false,
        }
    }

    fn start_driver(&mut self, ctx: &FrameCtx<'_, '_>, canvas: CanvasMetrics) -> anyhow::Result<()> {
        let mut driver = AnimationDriver::new(self.config.clone(), canvas)?;
        let mut readout = TitleReadout::new(&ctx.window, &self.title);
        driver.start(&self.page, &mut readout);
        self.driver = Some(driver);
        Ok(())
    }
}

impl App for StudioApp {
    fn on_input(&mut self, event: &InputEvent) -> AppControl {
        let moved = match *event {
            InputEvent::KeyPressed { key: Key::Escape, .. } => {
                if let Some(driver) = &mut self.driver {
                    driver.stop();
                }
                return AppControl::Exit;
            }
            InputEvent::KeyPressed { key, .. } => self.navigate(key),
            // Positive deltas scroll toward the top of the page.
            InputEvent::Scroll(ScrollDelta::Line { y, .. }) => self.page.scroll_by(-y * LINE_HEIGHT),
            InputEvent::Scroll(ScrollDelta::Pixel { y, .. }) => self.page.scroll_by(-y),
        };

        if moved {
            if let Some(driver) = &mut self.driver {
                driver.on_scroll(&self.page);
            }
        }
        AppControl::Continue
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let canvas = canvas_metrics(ctx);
        self.page.set_viewport_height(canvas.client_height);

        if self.driver.is_none() {
            if let Err(e) = self.start_driver(ctx, canvas) {
                log::error!("failed to build scene: {e:#}");
                return AppControl::Exit;
            }
        }
        let Some(driver) = self.driver.as_mut() else {
            return AppControl::Exit;
        };

        self.stats.record(ctx.time.dt);
        let wall_secs = ctx.time.wall_secs;

        let mut renderer = FrameRenderer::new(ctx, &mut self.points, &mut self.lines);
        match driver.frame(wall_secs, canvas, &self.page, &mut renderer) {
            FrameStatus::Rendered => renderer.control(),
            FrameStatus::Stopped => AppControl::Exit,
        }
    }
}

fn canvas_metrics(ctx: &FrameCtx<'_, '_>) -> CanvasMetrics {
    let (w, h) = ctx.window.logical_size();
    let backing = ctx.surface_size();
    CanvasMetrics {
        client_width:   w,
        client_height:  h,
        backing_width:  backing.width,
        backing_height: backing.height,
        pixel_ratio:    ctx.window.scale_factor(),
    }
}

// ── FrameStats ────────────────────────────────────────────────────────────

/// Accumulates frame times and logs the average rate once per window.
#[derive(Debug, Default)]
struct FrameStats {
    frames:  u32,
    elapsed: f32,
}

impl FrameStats {
    fn record(&mut self, dt: f32) {
        self.frames += 1;
        self.elapsed += dt;
        if self.elapsed >= STATS_WINDOW.as_secs_f32() {
            log::debug!(
                "{:.1} fps over {} frames",
                self.frames as f32 / self.elapsed,
                self.frames
            );
            *self = Self::default();
        }
    }
}
