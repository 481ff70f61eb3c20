//! Console sink. Errors go to stderr so they stay visible when stdout is redirected;
//! everything else goes to stdout.

use crate::fmt::Rendered;
use crate::level::Level;

use std::io::{self, Write};

/// A boxed stream so tests can swap the real stdio handles for in-memory buffers.
pub type Stream = Box<dyn Write + Send>;

pub struct TerminalOutput {
    /// Piped output and CI environments may not want ANSI escape codes.
    colors_enabled: bool,
    stdout: Stream,
    stderr: Stream,
}

impl Default for TerminalOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalOutput {
    #[must_use]
    pub fn new() -> Self {
        Self::with_streams(Box::new(io::stdout()), Box::new(io::stderr()))
    }

    #[must_use]
    pub fn with_streams(stdout: Stream, stderr: Stream) -> Self {
        Self {
            colors_enabled: true,
            stdout,
            stderr,
        }
    }

    #[must_use]
    pub const fn colors(mut self, enabled: bool) -> Self {
        self.colors_enabled = enabled;
        self
    }

    pub const fn set_colors(&mut self, enabled: bool) {
        self.colors_enabled = enabled;
    }

    #[must_use]
    pub const fn colors_enabled(&self) -> bool {
        self.colors_enabled
    }

    /// Writes the console view of `rendered` to the stream its level belongs on.
    ///
    /// # Errors
    /// I/O errors from the underlying stream.
    pub fn write(&mut self, rendered: &Rendered) -> Result<(), crate::Error> {
        let line = rendered.console(self.colors_enabled);
        let stream = if rendered.level == Level::Error {
            &mut self.stderr
        } else {
            &mut self.stdout
        };
        stream.write_all(line.as_bytes())?;
        Ok(())
    }

    /// # Errors
    /// I/O errors from either stream.
    pub fn flush(&mut self) -> Result<(), crate::Error> {
        self.stdout.flush()?;
        self.stderr.flush()?;
        Ok(())
    }
}

impl std::fmt::Debug for TerminalOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TerminalOutput")
            .field("colors_enabled", &self.colors_enabled)
            .finish_non_exhaustive()
    }
}
