//! Time subsystem.
//!
//! Provides stable, testable frame timing utilities without coupling to the runtime.
//! Intended usage:
//! - one `FrameClock` per render loop; call `tick()` once per presented frame
//! - `Interval` for lower-frequency work scheduled off the same wall clock

mod frame_clock;
mod interval;

pub use frame_clock::{wall_clock_secs, FrameClock, FrameTime};
pub use interval::Interval;
