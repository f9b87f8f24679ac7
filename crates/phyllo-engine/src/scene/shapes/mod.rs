pub(crate) mod line_loop;
pub(crate) mod points;

pub use line_loop::LineLoopCmd;
pub use points::PointsCmd;
