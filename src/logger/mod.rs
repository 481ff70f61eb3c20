//! The logger owns every piece of configuration state and runs the pipeline:
//! level check, interpolation, raw callback, rendering, formatted callback,
//! console write, file write.

mod builder;
mod from_config;

pub use builder::LoggerBuilder;

use crate::callback::{Callback, PayloadMode, Subscriber};
use crate::fmt::{self, Palette, Rendered};
use crate::level::{Level, LevelPolicy};
use crate::output::{FileOutput, TerminalOutput};
use std::path::Path;

/// One independent logging pipeline.
///
/// Mutation goes through `&mut self`, so an instance is confined to whoever owns
/// it. Embedders that need isolated loggers build several; the crate-level macros
/// use the locked default in [`crate::global`].
#[derive(Debug)]
pub struct Logger {
    policy: LevelPolicy,
    append_newline: bool,
    max_message_len: usize,
    palette: Palette,
    subscriber: Option<Subscriber>,
    terminal: TerminalOutput,
    file: FileOutput,
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    /// Everything passes, newlines on, colors on, console only.
    #[must_use]
    pub fn new() -> Self {
        LoggerBuilder::new().build()
    }

    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    pub const fn set_min_level(&mut self, level: Level) {
        self.policy.set(level);
    }

    /// Accepts any ordinal unvalidated: below 0 filters nothing, above 3 filters everything.
    pub const fn set_min_ordinal(&mut self, threshold: i32) {
        self.policy.set_ordinal(threshold);
    }

    pub const fn set_append_newline(&mut self, enabled: bool) {
        self.append_newline = enabled;
    }

    pub const fn set_colors(&mut self, enabled: bool) {
        self.terminal.set_colors(enabled);
    }

    /// Closes any open file, then opens `path` for writing, truncating it.
    ///
    /// An empty path just closes. Failure to open is reported as an ERROR record
    /// through this logger and leaves the file Closed.
    pub fn set_output_file(&mut self, path: impl AsRef<Path>) {
        let path = path.as_ref();
        if let Err(e) = self.file.open(path) {
            self.error(format_args!("Failed to open '{}': {e}", path.display()));
        }
    }

    /// Idempotent.
    pub fn close_output_file(&mut self) {
        self.file.close();
    }

    /// Replaces any previously registered handler.
    pub fn set_callback(&mut self, handler: impl Callback + 'static, mode: PayloadMode) {
        self.subscriber = Some(Subscriber::new(handler, mode));
    }

    pub fn clear_callback(&mut self) {
        self.subscriber = None;
    }

    /// Core dispatch. `args` is the already-collected argument list; build one with
    /// `format_args!` or use the [`log_to!`](crate::log_to) macro.
    pub fn log(&mut self, level: Level, args: std::fmt::Arguments<'_>) {
        if !self.policy.allows(level) {
            return;
        }

        let text = fmt::interpolate(args, self.max_message_len);

        if let Some(subscriber) = self.subscriber.as_mut() {
            subscriber.notify_raw(level, &text);
        }

        let rendered = Rendered::new(
            level,
            &fmt::timestamp(),
            &text,
            self.append_newline,
            &self.palette,
        );

        if let Some(subscriber) = self.subscriber.as_mut() {
            subscriber.notify_formatted(level, &rendered.plain);
        }

        let _ = self.terminal.write(&rendered);
        let _ = self.file.write(&rendered);
    }

    /// Entry point for callers holding a bare integer level, such as C code.
    ///
    /// An unknown ordinal produces a WARN record about it and the original
    /// message is dropped unrendered.
    pub fn log_ordinal(&mut self, ordinal: i32, args: std::fmt::Arguments<'_>) {
        match Level::from_ordinal(ordinal) {
            Some(level) => self.log(level, args),
            None => self.warn(format_args!(
                "Unknown log level {ordinal}, message discarded"
            )),
        }
    }

    pub fn debug(&mut self, args: std::fmt::Arguments<'_>) {
        self.log(Level::Debug, args);
    }

    pub fn info(&mut self, args: std::fmt::Arguments<'_>) {
        self.log(Level::Info, args);
    }

    pub fn warn(&mut self, args: std::fmt::Arguments<'_>) {
        self.log(Level::Warn, args);
    }

    pub fn error(&mut self, args: std::fmt::Arguments<'_>) {
        self.log(Level::Error, args);
    }

    /// Does nothing when `condition` holds. Otherwise logs an ERROR record naming
    /// the expression and where it lives, closes the file, and exits with status 1.
    pub fn assert_or_abort(&mut self, condition: bool, expression: &str, location: &str) {
        if condition {
            return;
        }
        self.error(format_args!("Assertion failed: {expression} at {location}"));
        self.shutdown();
        std::process::exit(1);
    }

    /// Buffered console streams may hold tail data on abrupt exit without an explicit flush.
    ///
    /// # Errors
    /// Returns the first I/O error from the console or the file.
    pub fn flush(&mut self) -> Result<(), crate::Error> {
        self.terminal.flush()?;
        self.file.flush()
    }

    /// Explicit teardown for loggers that are never dropped, such as statics.
    pub fn shutdown(&mut self) {
        let _ = self.terminal.flush();
        self.file.close();
    }

    #[must_use]
    pub const fn min_level(&self) -> Option<Level> {
        Level::from_ordinal(self.policy.threshold())
    }

    #[must_use]
    pub const fn threshold(&self) -> i32 {
        self.policy.threshold()
    }

    #[must_use]
    pub const fn appends_newline(&self) -> bool {
        self.append_newline
    }

    #[must_use]
    pub const fn colors_enabled(&self) -> bool {
        self.terminal.colors_enabled()
    }

    #[must_use]
    pub const fn max_message_len(&self) -> usize {
        self.max_message_len
    }

    #[must_use]
    pub const fn is_file_open(&self) -> bool {
        self.file.is_open()
    }

    #[must_use]
    pub fn output_path(&self) -> Option<&Path> {
        self.file.path()
    }

    #[must_use]
    pub fn callback_mode(&self) -> Option<PayloadMode> {
        self.subscriber.as_ref().map(Subscriber::mode)
    }
}
