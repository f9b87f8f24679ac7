//! Scroll-driven phyllotaxis visualization.
//!
//! Four golden-angle shapes follow page sections as the page scrolls, rotate
//! with the wall clock, cycle hue, and one of them draws itself point by point.
//! The crate is host-agnostic: the page layout, the renderer and the readout
//! are traits the host implements.

pub mod geometry;
pub mod config;
pub mod registry;
pub mod viewport;
pub mod align;
pub mod motion;
pub mod reveal;
pub mod adapter;
pub mod setup;
pub mod page;
pub mod driver;

pub use adapter::{Readout, RenderAdapter, Renderer, SceneFrame};
pub use align::{Aligner, LayoutOracle, SectionBox};
pub use config::{AlignmentRounding, ShapeConfig, VizConfig};
pub use driver::{AnimationDriver, FrameStatus};
pub use page::ScrollPage;
pub use registry::{Registry, SceneItem, SectionId, ShapeKey};
pub use viewport::{CanvasMetrics, ViewportGeometry};
