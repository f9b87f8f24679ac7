//! Input subsystem.
//!
//! Public API is platform-agnostic and does not expose winit types.
//! Runtime code is responsible for translating platform events into `InputEvent`s.
//! Only what a scroll-driven view needs is modelled: wheel deltas and a handful
//! of navigation keys.

mod types;

pub use types::{InputEvent, Key, ScrollDelta};
