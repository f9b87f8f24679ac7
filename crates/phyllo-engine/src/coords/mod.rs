//! Coordinate and geometry types shared across the renderer and the visualization.
//!
//! Scene space:
//! - right-handed, +X right, +Y up, +Z toward the viewer
//! - matrices are column-major, matching WGSL `mat4x4<f32>`
//!
//! Viewport sizes are in pixels, origin top-left, +Y down.

mod viewport;

pub use glam::{EulerRot, Mat4, Quat, Vec3};
pub use viewport::Viewport;
