//! GPU rendering subsystem.
//!
//! Renderers consume `scene` draw streams and issue GPU commands via wgpu.
//! Each renderer is responsible for its own GPU resources (pipelines, buffers).
//!
//! Convention:
//! - CPU geometry is in scene units; each command carries its model matrix
//! - the camera's view-projection is combined per command on the CPU
//! - no depth buffer; commands paint in list order

mod ctx;
pub mod shapes;

pub use ctx::{RenderCtx, RenderTarget};
