//! Shape renderers.

mod common;

pub mod line_loop;
pub mod points;
