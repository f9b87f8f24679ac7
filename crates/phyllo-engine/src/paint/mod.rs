//! Paint model shared between the visualization and renderers.
//!
//! Scope: color representation (premultiplied alpha) and color-space helpers.
//! Geometry types remain in `coords`.

pub mod color;

pub use color::Color;
