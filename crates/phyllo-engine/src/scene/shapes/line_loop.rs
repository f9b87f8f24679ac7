use crate::coords::Mat4;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, Geometry};

/// Closed polyline draw payload.
#[derive(Debug, Clone, PartialEq)]
pub struct LineLoopCmd {
    pub geometry: Geometry,
    /// Number of leading points joined; the last one connects back to point 0.
    pub count: usize,
    pub model: Mat4,
    pub color: Color,
}

impl DrawList {
    /// Records a closed polyline draw command.
    #[inline]
    pub fn push_line_loop(&mut self, geometry: Geometry, count: usize, model: Mat4, color: Color) {
        let count = count.min(geometry.point_count());
        self.push(DrawCmd::LineLoop(LineLoopCmd { geometry, count, model, color }));
    }
}
