use crate::coords::Mat4;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, Geometry};

/// Point-sprite draw payload.
#[derive(Debug, Clone, PartialEq)]
pub struct PointsCmd {
    pub geometry: Geometry,
    /// Number of leading points to draw.
    pub count: usize,
    pub model: Mat4,
    pub color: Color,
    /// Sprite size in scene units.
    pub size: f32,
}

impl DrawList {
    /// Records a point-sprite draw command.
    #[inline]
    pub fn push_points(
        &mut self,
        geometry: Geometry,
        count: usize,
        model: Mat4,
        color: Color,
        size: f32,
    ) {
        let count = count.min(geometry.point_count());
        self.push(DrawCmd::Points(PointsCmd { geometry, count, model, color, size }));
    }
}
