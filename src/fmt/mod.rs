//! Message rendering: bounded interpolation, escape codes, and the two line layouts.

mod bounded;
pub mod color;
mod render;

pub use bounded::{BoundedBuf, DEFAULT_MAX_MESSAGE_LEN, interpolate};
pub use color::Palette;
pub use render::{LINE_END, Rendered, format_time, timestamp};
