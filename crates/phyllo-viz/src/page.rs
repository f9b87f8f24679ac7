//! A scrollable stack of page sections, standing in for a document layout.

use crate::align::{LayoutOracle, SectionBox};
use crate::registry::SectionId;

/// Pixels scrolled per wheel line.
pub const LINE_HEIGHT: f32 = 100.0;
/// Pixels scrolled per arrow key press.
pub const ARROW_STEP: f32 = 40.0;
/// Fraction of the viewport a page key scrolls.
pub const PAGE_FRACTION: f32 = 0.9;

/// Sections laid out top to bottom, each some number of viewport heights tall.
#[derive(Debug, Clone)]
pub struct ScrollPage {
    sections: Vec<(SectionId, f32)>,
    viewport_height: f32,
    scroll: f32,
}

impl ScrollPage {
    pub fn new(sections: impl IntoIterator<Item = (SectionId, f32)>) -> Self {
        Self {
            sections: sections.into_iter().map(|(id, h)| (id, h.max(0.0))).collect(),
            viewport_height: 0.0,
            scroll: 0.0,
        }
    }

    /// Every section one viewport tall, in page order.
    pub fn standard() -> Self {
        Self::new(SectionId::ALL.map(|id| (id, 1.0)))
    }

    #[inline]
    pub fn scroll(&self) -> f32 {
        self.scroll
    }

    #[inline]
    pub fn viewport_height(&self) -> f32 {
        self.viewport_height
    }

    pub fn content_height(&self) -> f32 {
        self.sections.iter().map(|(_, h)| h * self.viewport_height).sum()
    }

    pub fn max_scroll(&self) -> f32 {
        (self.content_height() - self.viewport_height).max(0.0)
    }

    /// Returns `true` when the layout changed.
    pub fn set_viewport_height(&mut self, height: f32) -> bool {
        let height = if height.is_finite() { height.max(0.0) } else { 0.0 };
        if height == self.viewport_height {
            return false;
        }
        // Keep the same relative position through a resize.
        let progress = if self.max_scroll() > 0.0 { self.scroll / self.max_scroll() } else { 0.0 };
        self.viewport_height = height;
        self.scroll = (progress * self.max_scroll()).clamp(0.0, self.max_scroll());
        true
    }

    /// Scrolls to `y`, clamped to the page. Returns `true` when the offset moved.
    pub fn scroll_to(&mut self, y: f32) -> bool {
        if !y.is_finite() {
            return false;
        }
        let y = y.clamp(0.0, self.max_scroll());
        if y == self.scroll {
            return false;
        }
        self.scroll = y;
        true
    }

    pub fn scroll_by(&mut self, dy: f32) -> bool {
        self.scroll_to(self.scroll + dy)
    }

    pub fn page_down(&mut self) -> bool {
        self.scroll_by(self.viewport_height * PAGE_FRACTION)
    }

    pub fn page_up(&mut self) -> bool {
        self.scroll_by(-self.viewport_height * PAGE_FRACTION)
    }

    pub fn home(&mut self) -> bool {
        self.scroll_to(0.0)
    }

    pub fn end(&mut self) -> bool {
        self.scroll_to(self.max_scroll())
    }
}

impl LayoutOracle for ScrollPage {
    fn bounding_box(&self, section: SectionId) -> SectionBox {
        let mut top = -self.scroll;
        for &(id, h) in &self.sections {
            let height = h * self.viewport_height;
            if id == section {
                return SectionBox { top, height };
            }
            top += height;
        }
        // Not on the page: an empty box just past the end.
        SectionBox { top, height: 0.0 }
    }
}
