//! The wgpu device and the window surface it presents to.
//!
//! Frames are acquired and submitted through [`Gpu`]. Surface failures are
//! reduced to a [`SurfaceErrorAction`] for the runtime loop.

mod gpu;
mod surface;

pub use gpu::{Gpu, GpuFrame, GpuInit};
pub use surface::SurfaceErrorAction;
