//! The two sinks a record can reach: the console and the optional log file.
//!
//! The console always receives the styled view (or the plain one when colors are
//! off); the file only ever receives the plain view.

mod file;
mod terminal;

pub use file::FileOutput;
pub use terminal::{Stream, TerminalOutput};
