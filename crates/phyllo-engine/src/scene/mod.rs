//! Scene types.
//!
//! Responsibilities:
//! - own CPU-side point geometry and per-object style + transform (`Drawable`)
//! - describe the viewpoint (`Camera`)
//! - record a renderer-agnostic draw stream per frame (`DrawList`), in insertion order
//! - keep shape-specific helpers isolated per shape file under `scene::shapes`

mod camera;
mod cmd;
mod drawable;
mod geometry;
mod list;

pub mod shapes;

pub use camera::Camera;
pub use cmd::DrawCmd;
pub use drawable::{DrawMode, Drawable, Style, Transform};
pub use geometry::{Geometry, GeometryId};
pub use list::DrawList;
