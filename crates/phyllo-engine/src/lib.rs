//! Phyllo engine crate.
//!
//! This crate owns the platform + GPU runtime pieces used by the visualization
//! layer: window and event loop, wgpu device and surface, frame timing, and a
//! small 3D point/line renderer.

pub mod device;
pub mod window;
pub mod input;
pub mod time;
pub mod core;

pub mod logging;
pub mod coords;
pub mod render;
pub mod paint;
pub mod scene;
